// src/db/reference.rs

use crate::db::connection::Database;
use crate::domain::language::Localized;
use crate::domain::property::{Catalog, City, District, PropertyLayout, PropertyType};
use crate::errors::ServerError;
use rusqlite::Connection;
use std::fs;

/// Loads the full reference catalog (cities, districts, types, layouts).
pub fn load_catalog(db: &Database) -> Result<Catalog, ServerError> {
    db.with_conn(|conn| {
        Ok(Catalog {
            cities: load_cities(conn)?,
            districts: load_districts(conn)?,
            property_types: load_property_types(conn)?,
            layouts: load_layouts(conn)?,
        })
    })
}

fn load_cities(conn: &Connection) -> Result<Vec<City>, ServerError> {
    let mut stmt = conn.prepare("SELECT id, name_ar, name_en, name_tr FROM cities ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(City {
            id: row.get(0)?,
            name: Localized {
                ar: row.get(1)?,
                en: row.get(2)?,
                tr: row.get(3)?,
            },
        })
    })?;

    let mut cities = Vec::new();
    for row in rows {
        cities.push(row?);
    }
    Ok(cities)
}

fn load_districts(conn: &Connection) -> Result<Vec<District>, ServerError> {
    let mut stmt =
        conn.prepare("SELECT id, city_id, name_ar, name_en, name_tr FROM districts ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(District {
            id: row.get(0)?,
            city_id: row.get(1)?,
            name: Localized {
                ar: row.get(2)?,
                en: row.get(3)?,
                tr: row.get(4)?,
            },
        })
    })?;

    let mut districts = Vec::new();
    for row in rows {
        districts.push(row?);
    }
    Ok(districts)
}

fn load_property_types(conn: &Connection) -> Result<Vec<PropertyType>, ServerError> {
    let mut stmt =
        conn.prepare("SELECT id, name_ar, name_en, name_tr FROM property_types ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(PropertyType {
            id: row.get(0)?,
            name: Localized {
                ar: row.get(1)?,
                en: row.get(2)?,
                tr: row.get(3)?,
            },
        })
    })?;

    let mut types = Vec::new();
    for row in rows {
        types.push(row?);
    }
    Ok(types)
}

fn load_layouts(conn: &Connection) -> Result<Vec<PropertyLayout>, ServerError> {
    let mut stmt = conn.prepare(
        "SELECT id, property_type_id, name_ar, name_en, name_tr FROM property_layouts ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(PropertyLayout {
            id: row.get(0)?,
            property_type_id: row.get(1)?,
            name: Localized {
                ar: row.get(2)?,
                en: row.get(3)?,
                tr: row.get(4)?,
            },
        })
    })?;

    let mut layouts = Vec::new();
    for row in rows {
        layouts.push(row?);
    }
    Ok(layouts)
}

/// Applies the seed file on a fresh install. A populated cities table means
/// the install is not fresh and the file is skipped.
pub fn seed_reference_data(db: &Database, seed_path: &str) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let cities: i64 = conn.query_row("SELECT COUNT(*) FROM cities", [], |row| row.get(0))?;
        if cities > 0 {
            return Ok(());
        }

        let seed_sql = fs::read_to_string(seed_path)
            .map_err(|e| ServerError::DbError(format!("failed to read seed file: {e}")))?;
        conn.execute_batch(&seed_sql)
            .map_err(|e| ServerError::DbError(format!("failed to apply seeds: {e}")))?;
        Ok(())
    })
}
