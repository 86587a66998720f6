// src/db/properties.rs

use crate::db::connection::Database;
use crate::domain::language::Localized;
use crate::domain::property::{ListingType, Property, PropertyStatus};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension, Row};

const PROPERTY_COLUMNS: &str = r#"
    id,
    title_ar, title_en, title_tr, legacy_title,
    description_ar, description_en, description_tr,
    price, currency, listing_type, status,
    city_id, district_id, property_type_id, layout_id,
    bedrooms, bathrooms, area_sqm,
    is_featured, images, cover_image, views_count,
    owner_id, created_at
"#;

fn property_from_row(row: &Row) -> rusqlite::Result<Property> {
    let images_json: String = row.get("images")?;
    let listing_type: String = row.get("listing_type")?;
    let status: String = row.get("status")?;

    Ok(Property {
        id: row.get("id")?,
        title: Localized {
            ar: row.get("title_ar")?,
            en: row.get("title_en")?,
            tr: row.get("title_tr")?,
        },
        legacy_title: row.get("legacy_title")?,
        description: Localized {
            ar: row.get("description_ar")?,
            en: row.get("description_en")?,
            tr: row.get("description_tr")?,
        },
        price: row.get("price")?,
        currency: row.get("currency")?,
        // Unknown stored values degrade rather than fail: an unreadable
        // listing type sells, an unreadable status stays off the public site.
        listing_type: ListingType::parse(&listing_type).unwrap_or(ListingType::Sale),
        status: PropertyStatus::parse(&status).unwrap_or(PropertyStatus::Hidden),
        city_id: row.get("city_id")?,
        district_id: row.get("district_id")?,
        property_type_id: row.get("property_type_id")?,
        layout_id: row.get("layout_id")?,
        bedrooms: row.get("bedrooms")?,
        bathrooms: row.get("bathrooms")?,
        area_sqm: row.get("area_sqm")?,
        is_featured: row.get("is_featured")?,
        images: serde_json::from_str(&images_json).unwrap_or_default(),
        cover_image: row.get("cover_image")?,
        views_count: row.get("views_count")?,
        owner_id: row.get("owner_id")?,
        created_at: row.get("created_at")?,
    })
}

/// Every listing, newest first.
pub fn list_properties(db: &Database) -> Result<Vec<Property>, ServerError> {
    db.with_conn(|conn| {
        let sql = format!("SELECT {PROPERTY_COLUMNS} FROM properties ORDER BY created_at DESC, id DESC");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], property_from_row)?;

        let mut properties = Vec::new();
        for row in rows {
            properties.push(row?);
        }
        Ok(properties)
    })
}

pub fn get_property(db: &Database, id: i64) -> Result<Option<Property>, ServerError> {
    db.with_conn(|conn| {
        let sql = format!("SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = ?1");
        let property = conn
            .query_row(&sql, params![id], property_from_row)
            .optional()?;
        Ok(property)
    })
}

/// Fields supplied when a listing is created. Ids reference the catalog
/// tables; images are stored as a JSON array.
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub title: Localized,
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
    pub owner_id: Option<i64>,
}

impl Default for NewProperty {
    fn default() -> Self {
        NewProperty {
            title: Localized::default(),
            legacy_title: None,
            description: Localized::default(),
            price: None,
            currency: "TRY".to_string(),
            listing_type: ListingType::Sale,
            status: PropertyStatus::Pending,
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
            owner_id: None,
        }
    }
}

pub fn insert_property(
    db: &Database,
    prop: &NewProperty,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    let images = serde_json::to_string(&prop.images)
        .map_err(|e| ServerError::DbError(format!("serialize images: {e}")))?;

    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO properties (
                title_ar, title_en, title_tr, legacy_title,
                description_ar, description_en, description_tr,
                price, currency, listing_type, status,
                city_id, district_id, property_type_id, layout_id,
                bedrooms, bathrooms, area_sqm,
                is_featured, images, cover_image,
                owner_id, created_at
            ) VALUES (
                ?1, ?2, ?3, ?4,
                ?5, ?6, ?7,
                ?8, ?9, ?10, ?11,
                ?12, ?13, ?14, ?15,
                ?16, ?17, ?18,
                ?19, ?20, ?21,
                ?22, ?23
            )
            "#,
            params![
                &prop.title.ar,
                &prop.title.en,
                &prop.title.tr,
                &prop.legacy_title,
                &prop.description.ar,
                &prop.description.en,
                &prop.description.tr,
                &prop.price,
                &prop.currency,
                prop.listing_type.as_str(),
                prop.status.as_str(),
                &prop.city_id,
                &prop.district_id,
                &prop.property_type_id,
                &prop.layout_id,
                &prop.bedrooms,
                &prop.bathrooms,
                &prop.area_sqm,
                prop.is_featured,
                &images,
                &prop.cover_image,
                &prop.owner_id,
                now,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

pub fn set_status(db: &Database, id: i64, status: PropertyStatus) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let updated = conn.execute(
            "UPDATE properties SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        if updated == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}

pub fn delete_property(db: &Database, id: i64) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let deleted = conn.execute("DELETE FROM properties WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}

/// Bumps the view counter for a detail-page visit.
pub fn record_view(db: &Database, id: i64) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            "UPDATE properties SET views_count = views_count + 1 WHERE id = ?1",
            params![id],
        )?;
        Ok(())
    })
}
