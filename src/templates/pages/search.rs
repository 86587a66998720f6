// src/templates/pages/search.rs

use crate::domain::filters::FilterState;
use crate::domain::language::Language;
use crate::domain::options::{
    city_options, district_options, layout_options, property_type_options, SelectOption,
};
use crate::domain::price_range::PriceBounds;
use crate::domain::property::{Catalog, ListingType, Property};
use crate::templates::components::property_card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct SearchVm<'a> {
    pub lang: Language,
    pub state: &'a FilterState,
    pub catalog: &'a Catalog,
    pub bounds: PriceBounds,
    pub properties: &'a [&'a Property],
    /// Size of the unfiltered public set, for the "n of m" counter.
    pub total_public: usize,
}

pub fn search_page(vm: &SearchVm) -> Markup {
    let lang = vm.lang;
    let cities = city_options(&vm.catalog.cities, lang);
    let districts = district_options(&vm.catalog.districts, vm.state.city, lang);
    let types = property_type_options(&vm.catalog.property_types, lang);
    let layouts = layout_options(&vm.catalog.layouts, vm.state.property_type, lang);
    let (selected_min, selected_max) = vm
        .state
        .price_range
        .unwrap_or((vm.bounds.min, vm.bounds.max));

    desktop_layout(
        "Property Search",
        lang,
        html! {
            main class="container" {
                h1 { "Find a Property" }

                form class="search-bar" method="get" action="/" {
                    input type="hidden" name="lang" value=(lang.code());
                    input type="text" name="q"
                        placeholder="Search title, city, district..."
                        value=(vm.state.search);

                    (select_control("city", "All Cities", &cities, vm.state.city))
                    (select_control("district", "All Districts", &districts, vm.state.district))
                    (select_control("type", "All Types", &types, vm.state.property_type))
                    (select_control("layout", "All Layouts", &layouts, vm.state.layout))

                    select name="listing_type" {
                        option value="" { "Sale & Rent" }
                        option value="sale"
                            selected[vm.state.listing_type == Some(ListingType::Sale)] { "For Sale" }
                        option value="rent"
                            selected[vm.state.listing_type == Some(ListingType::Rent)] { "For Rent" }
                    }

                    input type="number" name="min_price"
                        min=(vm.bounds.min) max=(vm.bounds.max) value=(selected_min);
                    input type="number" name="max_price"
                        min=(vm.bounds.min) max=(vm.bounds.max) value=(selected_max);

                    button type="submit" { "Search" }
                }

                p class="result-count" {
                    (vm.properties.len()) " of " (vm.total_public) " listings"
                }

                @if vm.properties.is_empty() {
                    div class="card empty-state" {
                        p { "No properties match your search." }
                    }
                } @else {
                    div class="grid" {
                        @for property in vm.properties {
                            (property_card(property, vm.catalog, lang))
                        }
                    }
                }
            }
        },
    )
}

fn select_control(
    name: &str,
    all_label: &str,
    options: &[SelectOption],
    selected: Option<i64>,
) -> Markup {
    let selected = selected.map(|id| id.to_string());
    html! {
        select name=(name) {
            option value="" { (all_label) }
            @for opt in options {
                option value=(opt.value)
                    selected[selected.as_deref() == Some(opt.value.as_str())] {
                    (opt.label)
                }
            }
        }
    }
}
