// src/domain/filters.rs
//
// The one implementation of listing filter rules. Both the public search
// page and the back-office list build a FilterState from request
// parameters, turn it into conditions, and apply them by conjunction.

use crate::domain::language::Language;
use crate::domain::property::{Catalog, ListingType, Property, PropertyStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    Title,
    Price,
    Views,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "created_at",
            SortKey::Title => "title",
            SortKey::Price => "price",
            SortKey::Views => "views_count",
        }
    }

    pub fn parse(value: &str) -> Option<SortKey> {
        match value {
            "created_at" => Some(SortKey::CreatedAt),
            "title" => Some(SortKey::Title),
            "price" => Some(SortKey::Price),
            "views_count" | "views" => Some(SortKey::Views),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<SortOrder> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Current values of every filter control. `None` is the "all" position.
/// Request-scoped; built from query parameters and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub city: Option<i64>,
    pub district: Option<i64>,
    pub property_type: Option<i64>,
    pub layout: Option<i64>,
    pub listing_type: Option<ListingType>,
    pub status: Option<PropertyStatus>,
    pub price_range: Option<(f64, f64)>,
    pub search: String,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            city: None,
            district: None,
            property_type: None,
            layout: None,
            listing_type: None,
            status: None,
            price_range: None,
            search: String::new(),
            sort_by: SortKey::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }
}

impl FilterState {
    /// The conditions a listing must satisfy, one per non-"all" control.
    /// The text needle is lowercased here, once.
    pub fn active_filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(id) = self.city {
            filters.push(Filter::City(id));
        }
        if let Some(id) = self.district {
            filters.push(Filter::District(id));
        }
        if let Some(id) = self.property_type {
            filters.push(Filter::PropertyType(id));
        }
        if let Some(id) = self.layout {
            filters.push(Filter::Layout(id));
        }
        if let Some(listing_type) = self.listing_type {
            filters.push(Filter::ListingType(listing_type));
        }
        if let Some(status) = self.status {
            filters.push(Filter::Status(status));
        }
        if let Some((min, max)) = self.price_range {
            filters.push(Filter::PriceRange { min, max });
        }
        let term = self.search.trim();
        if !term.is_empty() {
            filters.push(Filter::Text(term.to_lowercase()));
        }
        filters
    }
}

/// One condition over a listing.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    City(i64),
    District(i64),
    PropertyType(i64),
    Layout(i64),
    ListingType(ListingType),
    Status(PropertyStatus),
    PriceRange { min: f64, max: f64 },
    /// Lowercased free-text needle.
    Text(String),
}

impl Filter {
    /// Never fails: a listing with a missing or malformed field simply does
    /// not match.
    pub fn matches(&self, property: &Property, catalog: &Catalog) -> bool {
        match self {
            Filter::City(id) => property.city_id == Some(*id),
            Filter::District(id) => property.district_id == Some(*id),
            Filter::PropertyType(id) => property.property_type_id == Some(*id),
            Filter::Layout(id) => property.layout_id == Some(*id),
            Filter::ListingType(listing_type) => property.listing_type == *listing_type,
            Filter::Status(status) => property.status == *status,
            Filter::PriceRange { min, max } => match property.price {
                Some(price) => price >= *min && price <= *max,
                None => false,
            },
            Filter::Text(needle) => {
                if property.title.contains_ci(needle) {
                    return true;
                }
                if property
                    .legacy_title
                    .as_deref()
                    .map_or(false, |t| t.to_lowercase().contains(needle))
                {
                    return true;
                }
                let city_hit = property
                    .city_id
                    .and_then(|id| catalog.city(id))
                    .map_or(false, |c| c.name.contains_ci(needle));
                let district_hit = property
                    .district_id
                    .and_then(|id| catalog.district(id))
                    .map_or(false, |d| d.name.contains_ci(needle));
                city_hit || district_hit
            }
        }
    }
}

/// The subset of `properties` matching every active filter, in input order.
pub fn apply<'a>(
    properties: &'a [Property],
    state: &FilterState,
    catalog: &Catalog,
) -> Vec<&'a Property> {
    let filters = state.active_filters();
    properties
        .iter()
        .filter(|p| filters.iter().all(|f| f.matches(p, catalog)))
        .collect()
}

/// Stable sort for the back-office list. A missing price sorts as zero and
/// a missing title as the empty string, so incomplete rows gather at one
/// deterministic end.
pub fn sort_properties(list: &mut [&Property], key: SortKey, order: SortOrder, lang: Language) {
    list.sort_by(|a, b| {
        let ordering = match key {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::Title => a
                .title_in(lang)
                .to_lowercase()
                .cmp(&b.title_in(lang).to_lowercase()),
            SortKey::Price => a
                .price
                .unwrap_or(0.0)
                .total_cmp(&b.price.unwrap_or(0.0)),
            SortKey::Views => a.views_count.cmp(&b.views_count),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
