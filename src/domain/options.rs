// src/domain/options.rs
//
// Presentation data for the filter controls: reference rows become
// `(value, label)` pairs in the caller's display language.

use crate::domain::language::Language;
use crate::domain::property::{City, District, PropertyLayout, PropertyType};

/// A `(value, label)` pair ready for a select control.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

fn option_for(id: i64, label: &str) -> SelectOption {
    SelectOption {
        value: id.to_string(),
        label: label.to_string(),
    }
}

pub fn city_options(cities: &[City], lang: Language) -> Vec<SelectOption> {
    cities
        .iter()
        .map(|city| option_for(city.id, city.name.in_lang(lang)))
        .collect()
}

/// Districts of the selected city. No city selected (or an id that matches
/// nothing) yields an empty list, never an error.
pub fn district_options(
    districts: &[District],
    city_id: Option<i64>,
    lang: Language,
) -> Vec<SelectOption> {
    let city_id = match city_id {
        Some(id) => id,
        None => return Vec::new(),
    };
    districts
        .iter()
        .filter(|district| district.city_id == city_id)
        .map(|district| option_for(district.id, district.name.in_lang(lang)))
        .collect()
}

pub fn property_type_options(types: &[PropertyType], lang: Language) -> Vec<SelectOption> {
    types
        .iter()
        .map(|property_type| option_for(property_type.id, property_type.name.in_lang(lang)))
        .collect()
}

/// Layouts scoped to the chosen property type; until a type is chosen every
/// layout is offered.
pub fn layout_options(
    layouts: &[PropertyLayout],
    property_type_id: Option<i64>,
    lang: Language,
) -> Vec<SelectOption> {
    layouts
        .iter()
        .filter(|layout| match property_type_id {
            Some(type_id) => layout.property_type_id == type_id,
            None => true,
        })
        .map(|layout| option_for(layout.id, layout.name.in_lang(lang)))
        .collect()
}
