// src/domain/property.rs

use crate::domain::language::{Language, Localized};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Whether a property is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingType::Sale => "For Sale",
            ListingType::Rent => "For Rent",
        }
    }

    /// Accepts the stored values plus the `for_sale`/`for_rent` spellings
    /// older imports used.
    pub fn parse(value: &str) -> Option<ListingType> {
        match value {
            "sale" | "for_sale" => Some(ListingType::Sale),
            "rent" | "for_rent" => Some(ListingType::Rent),
            _ => None,
        }
    }
}

/// Listing lifecycle status. `Pending` and `Hidden` are visible to the
/// owner and the back office but never publicly listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Available,
    Pending,
    Sold,
    Rented,
    Hidden,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 5] = [
        PropertyStatus::Available,
        PropertyStatus::Pending,
        PropertyStatus::Sold,
        PropertyStatus::Rented,
        PropertyStatus::Hidden,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Pending => "pending",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Rented => "rented",
            PropertyStatus::Hidden => "hidden",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "Available",
            PropertyStatus::Pending => "Pending",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::Rented => "Rented",
            PropertyStatus::Hidden => "Hidden",
        }
    }

    pub fn parse(value: &str) -> Option<PropertyStatus> {
        match value {
            "available" => Some(PropertyStatus::Available),
            "pending" => Some(PropertyStatus::Pending),
            "sold" => Some(PropertyStatus::Sold),
            "rented" => Some(PropertyStatus::Rented),
            "hidden" => Some(PropertyStatus::Hidden),
            _ => None,
        }
    }

    pub fn is_public(&self) -> bool {
        !matches!(self, PropertyStatus::Pending | PropertyStatus::Hidden)
    }
}

/// A listing as loaded from the `properties` table. Location and category
/// are id references; display names resolve through the [`Catalog`].
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i64,
    pub title: Localized,
    /// Single-language title kept from imports that predate localization.
    pub legacy_title: Option<String>,
    pub description: Localized,
    pub price: Option<f64>,
    pub currency: String,
    pub listing_type: ListingType,
    pub status: PropertyStatus,
    pub city_id: Option<i64>,
    pub district_id: Option<i64>,
    pub property_type_id: Option<i64>,
    pub layout_id: Option<i64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub area_sqm: Option<f64>,
    pub is_featured: bool,
    pub images: Vec<String>,
    pub cover_image: Option<String>,
    pub views_count: i64,
    pub owner_id: Option<i64>,
    pub created_at: NaiveDateTime,
}

impl Property {
    /// Localized title, falling through to the legacy field when no
    /// localized variant was ever written.
    pub fn title_in(&self, lang: Language) -> &str {
        if self.title.is_empty() {
            self.legacy_title.as_deref().unwrap_or("")
        } else {
            self.title.in_lang(lang)
        }
    }

    pub fn has_valid_price(&self) -> bool {
        matches!(self.price, Some(p) if p > 0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i64,
    pub name: Localized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct District {
    pub id: i64,
    pub city_id: i64,
    pub name: Localized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyType {
    pub id: i64,
    pub name: Localized,
}

/// Room-configuration category (e.g. "2+1"), scoped to one property type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyLayout {
    pub id: i64,
    pub property_type_id: i64,
    pub name: Localized,
}

/// All reference data, loaded once per request and passed down explicitly.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub cities: Vec<City>,
    pub districts: Vec<District>,
    pub property_types: Vec<PropertyType>,
    pub layouts: Vec<PropertyLayout>,
}

impl Catalog {
    pub fn city(&self, id: i64) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    pub fn district(&self, id: i64) -> Option<&District> {
        self.districts.iter().find(|d| d.id == id)
    }

    pub fn property_type(&self, id: i64) -> Option<&PropertyType> {
        self.property_types.iter().find(|t| t.id == id)
    }

    pub fn layout(&self, id: i64) -> Option<&PropertyLayout> {
        self.layouts.iter().find(|l| l.id == id)
    }
}

/// A bare but fully-populated listing for domain tests.
#[cfg(test)]
pub(crate) fn sample_property(id: i64) -> Property {
    use chrono::NaiveDate;

    Property {
        id,
        title: Localized::new("", "Test listing", ""),
        legacy_title: None,
        description: Localized::default(),
        price: Some(1000.0),
        currency: "TRY".to_string(),
        listing_type: ListingType::Sale,
        status: PropertyStatus::Available,
        city_id: None,
        district_id: None,
        property_type_id: None,
        layout_id: None,
        bedrooms: None,
        bathrooms: None,
        area_sqm: None,
        is_featured: false,
        images: Vec::new(),
        cover_image: None,
        views_count: 0,
        owner_id: None,
        created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_falls_back_to_legacy_field() {
        let mut property = sample_property(1);
        property.title = Localized::default();
        property.legacy_title = Some("Old import".to_string());
        assert_eq!(property.title_in(Language::English), "Old import");

        property.title = Localized::new("", "Sea view flat", "");
        assert_eq!(property.title_in(Language::Arabic), "Sea view flat");
    }

    #[test]
    fn pending_and_hidden_are_not_public() {
        assert!(PropertyStatus::Available.is_public());
        assert!(PropertyStatus::Sold.is_public());
        assert!(PropertyStatus::Rented.is_public());
        assert!(!PropertyStatus::Pending.is_public());
        assert!(!PropertyStatus::Hidden.is_public());
    }

    #[test]
    fn listing_type_accepts_legacy_spellings() {
        assert_eq!(ListingType::parse("for_sale"), Some(ListingType::Sale));
        assert_eq!(ListingType::parse("rent"), Some(ListingType::Rent));
        assert_eq!(ListingType::parse("lease"), None);
    }
}
