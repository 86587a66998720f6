// src/tests/utils.rs

use crate::db::connection::{init_db, Database};
use crate::db::properties::NewProperty;
use crate::domain::language::Localized;
use crate::domain::property::PropertyStatus;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::params;

/// Fresh in-memory database with the production schema applied. The
/// connection is thread-local and each test runs on its own thread, so
/// tests never see each other's data.
pub fn init_test_db() -> Database {
    let db = Database::new(":memory:");

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn seed_city(db: &Database, name_ar: &str, name_en: &str, name_tr: &str) -> i64 {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO cities (name_ar, name_en, name_tr) VALUES (?1, ?2, ?3)",
            params![name_ar, name_en, name_tr],
        )
        .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))?;
        Ok(conn.last_insert_rowid())
    })
    .expect("Failed to seed city")
}

pub fn seed_district(db: &Database, city_id: i64, name_en: &str) -> i64 {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO districts (city_id, name_ar, name_en, name_tr) VALUES (?1, '', ?2, ?3)",
            params![city_id, name_en, name_en],
        )
        .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))?;
        Ok(conn.last_insert_rowid())
    })
    .expect("Failed to seed district")
}

/// An available, priced listing; tests override what they care about.
pub fn listing(title_en: &str) -> NewProperty {
    NewProperty {
        title: Localized::new("", title_en, ""),
        status: PropertyStatus::Available,
        price: Some(1000.0),
        ..NewProperty::default()
    }
}
