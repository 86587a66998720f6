// src/templates/components/card.rs

use crate::domain::language::Language;
use crate::domain::property::{Catalog, Property};
use maud::{html, Markup};

/// Price text for cards and detail pages. Listings without a price are
/// shown, not hidden.
pub fn price_text(property: &Property) -> String {
    match property.price {
        Some(price) => format!("{:.0} {}", price, property.currency),
        None => "Price on request".to_string(),
    }
}

pub fn property_card(property: &Property, catalog: &Catalog, lang: Language) -> Markup {
    let city = property
        .city_id
        .and_then(|id| catalog.city(id))
        .map(|c| c.name.in_lang(lang))
        .unwrap_or("");
    let district = property
        .district_id
        .and_then(|id| catalog.district(id))
        .map(|d| d.name.in_lang(lang))
        .unwrap_or("");

    html! {
        a class="card property-card"
            href=(format!("/property/{}?lang={}", property.id, lang.code())) {
            @if let Some(cover) = &property.cover_image {
                img class="cover" src=(cover) alt="";
            }
            div class="card-body" {
                span class="price" { (price_text(property)) }
                h3 { (property.title_in(lang)) }
                p class="location" {
                    (city)
                    @if !district.is_empty() { ", " (district) }
                }
                div class="specs" {
                    @if let Some(bedrooms) = property.bedrooms { span { (bedrooms) " bd" } }
                    @if let Some(bathrooms) = property.bathrooms { span { (bathrooms) " ba" } }
                    @if let Some(area) = property.area_sqm { span { (area) " m²" } }
                }
                span class=(format!("badge badge-{}", property.listing_type.as_str())) {
                    (property.listing_type.label())
                }
                span class=(format!("badge badge-{}", property.status.as_str())) {
                    (property.status.label())
                }
                @if property.is_featured {
                    span class="badge badge-featured" { "Featured" }
                }
            }
        }
    }
}
