// src/templates/pages/property.rs

use crate::domain::language::Language;
use crate::domain::property::{Catalog, Property};
use crate::templates::components::price_text;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct PropertyVm<'a> {
    pub lang: Language,
    pub catalog: &'a Catalog,
    pub property: &'a Property,
}

pub fn property_page(vm: &PropertyVm) -> Markup {
    let lang = vm.lang;
    let property = vm.property;

    let city = property
        .city_id
        .and_then(|id| vm.catalog.city(id))
        .map(|c| c.name.in_lang(lang))
        .unwrap_or("");
    let district = property
        .district_id
        .and_then(|id| vm.catalog.district(id))
        .map(|d| d.name.in_lang(lang))
        .unwrap_or("");
    let property_type = property
        .property_type_id
        .and_then(|id| vm.catalog.property_type(id))
        .map(|t| t.name.in_lang(lang))
        .unwrap_or("");
    let layout = property
        .layout_id
        .and_then(|id| vm.catalog.layout(id))
        .map(|l| l.name.in_lang(lang))
        .unwrap_or("");

    desktop_layout(
        property.title_in(lang),
        lang,
        html! {
            main class="container" {
                article class="card property-detail" {
                    @if let Some(cover) = &property.cover_image {
                        img class="cover" src=(cover) alt="";
                    }
                    div class="card-body" {
                        span class="price" { (price_text(property)) }
                        h1 { (property.title_in(lang)) }
                        p class="location" {
                            (city)
                            @if !district.is_empty() { ", " (district) }
                        }

                        div class="specs" {
                            @if !property_type.is_empty() { span { (property_type) } }
                            @if !layout.is_empty() { span { (layout) } }
                            @if let Some(bedrooms) = property.bedrooms { span { (bedrooms) " bedrooms" } }
                            @if let Some(bathrooms) = property.bathrooms { span { (bathrooms) " bathrooms" } }
                            @if let Some(area) = property.area_sqm { span { (area) " m²" } }
                        }

                        span class=(format!("badge badge-{}", property.listing_type.as_str())) {
                            (property.listing_type.label())
                        }
                        span class=(format!("badge badge-{}", property.status.as_str())) {
                            (property.status.label())
                        }

                        p class="description" { (property.description.in_lang(lang)) }

                        @if !property.images.is_empty() {
                            div class="gallery" {
                                @for image in &property.images {
                                    img src=(image) alt="";
                                }
                            }
                        }

                        p class="meta" {
                            "Listed " (property.created_at.format("%Y-%m-%d"))
                            " · " (property.views_count) " views"
                        }
                    }
                }
            }
        },
    )
}
