// src/router.rs

use crate::db::connection::Database;
use crate::db::{properties, reference, users};
use crate::domain::accounts::{derive_standing, AccountStanding, User};
use crate::domain::filters::{self, FilterState, SortKey, SortOrder};
use crate::domain::language::Language;
use crate::domain::price_range::{self, PriceBounds};
use crate::domain::property::{ListingType, Property, PropertyStatus};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, redirect_response, ResultResp};
use crate::templates::pages::{
    admin_page, property_page, search_page, AdminVm, PropertyVm, SearchVm,
};
use astra::{Body, Request};
use chrono::{Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let (parts, body) = req.into_parts();
    let method = parts.method.as_str();
    let path = parts.uri.path();
    let query = parse_query(parts.uri.query());
    let lang = query
        .get("lang")
        .map(|code| Language::from_code(code))
        .unwrap_or_default();

    match (method, path) {
        ("GET", "/") => search(db, &query, lang),
        ("GET", "/api/properties") => api_properties(db, &query, lang),
        ("GET", "/admin") => admin(db, &query, lang),
        _ => {
            if method == "GET" {
                if let Some(id) = path_id(path, "/property/") {
                    return property_detail(db, id, lang);
                }
            }
            if method == "POST" {
                let form = parse_form(body);
                if let Some(id) = action_id(path, "/admin/properties/", "/status") {
                    return set_property_status(db, id, &form);
                }
                if let Some(id) = action_id(path, "/admin/properties/", "/delete") {
                    return delete_property(db, id);
                }
                if let Some(id) = action_id(path, "/admin/users/", "/suspend") {
                    return suspend_user(db, id, &form);
                }
                if let Some(id) = action_id(path, "/admin/users/", "/unsuspend") {
                    return unsuspend_user(db, id);
                }
            }
            Err(ServerError::NotFound)
        }
    }
}

// --- handlers ---------------------------------------------------------------

fn search(db: &Database, query: &HashMap<String, String>, lang: Language) -> ResultResp {
    let catalog = reference::load_catalog(db)?;
    let all = properties::list_properties(db)?;
    let mut state = filter_state_from_query(query);

    // Pending and hidden listings stay off the public site.
    let public: Vec<Property> = all.into_iter().filter(|p| p.status.is_public()).collect();

    let bounds = price_range::derive_bounds(&public, PriceBounds::default());
    if let Some(selection) = state.price_range {
        state.price_range = Some(price_range::reconcile_selection(selection, bounds));
    }

    let visible = filters::apply(&public, &state, &catalog);

    let vm = SearchVm {
        lang,
        state: &state,
        catalog: &catalog,
        bounds,
        properties: &visible,
        total_public: public.len(),
    };
    html_response(search_page(&vm))
}

fn property_detail(db: &Database, id: i64, lang: Language) -> ResultResp {
    // Count the visit first so the rendered counter includes it.
    properties::record_view(db, id)?;
    let property = properties::get_property(db, id)?.ok_or(ServerError::NotFound)?;
    let catalog = reference::load_catalog(db)?;

    let vm = PropertyVm {
        lang,
        catalog: &catalog,
        property: &property,
    };
    html_response(property_page(&vm))
}

fn admin(db: &Database, query: &HashMap<String, String>, lang: Language) -> ResultResp {
    let catalog = reference::load_catalog(db)?;
    let all = properties::list_properties(db)?;
    let mut state = filter_state_from_query(query);
    // The back-office list is never price-filtered; derived bounds only
    // feed the slider display on the public page.
    state.price_range = None;

    let mut visible = filters::apply(&all, &state, &catalog);
    filters::sort_properties(&mut visible, state.sort_by, state.sort_order, lang);

    let now = Utc::now().naive_utc();
    let user_rows: Vec<(User, AccountStanding)> = users::list_users(db)?
        .into_iter()
        .map(|user| {
            let standing = derive_standing(&user, now);
            (user, standing)
        })
        .collect();

    let vm = AdminVm {
        lang,
        state: &state,
        catalog: &catalog,
        properties: &visible,
        users: &user_rows,
    };
    html_response(admin_page(&vm))
}

/// Flat listing shape for the JSON endpoint, localized to the request
/// language.
#[derive(Serialize)]
struct ApiProperty {
    id: i64,
    title: String,
    price: Option<f64>,
    currency: String,
    listing_type: ListingType,
    status: PropertyStatus,
    city: Option<String>,
    district: Option<String>,
    bedrooms: Option<i64>,
    bathrooms: Option<i64>,
    area_sqm: Option<f64>,
    is_featured: bool,
    cover_image: Option<String>,
    views_count: i64,
}

fn api_properties(db: &Database, query: &HashMap<String, String>, lang: Language) -> ResultResp {
    let catalog = reference::load_catalog(db)?;
    let all = properties::list_properties(db)?;
    let mut state = filter_state_from_query(query);

    let public: Vec<Property> = all.into_iter().filter(|p| p.status.is_public()).collect();

    let bounds = price_range::derive_bounds(&public, PriceBounds::default());
    if let Some(selection) = state.price_range {
        state.price_range = Some(price_range::reconcile_selection(selection, bounds));
    }

    let listings: Vec<ApiProperty> = filters::apply(&public, &state, &catalog)
        .into_iter()
        .map(|p| ApiProperty {
            id: p.id,
            title: p.title_in(lang).to_string(),
            price: p.price,
            currency: p.currency.clone(),
            listing_type: p.listing_type,
            status: p.status,
            city: p
                .city_id
                .and_then(|id| catalog.city(id))
                .map(|c| c.name.in_lang(lang).to_string()),
            district: p
                .district_id
                .and_then(|id| catalog.district(id))
                .map(|d| d.name.in_lang(lang).to_string()),
            bedrooms: p.bedrooms,
            bathrooms: p.bathrooms,
            area_sqm: p.area_sqm,
            is_featured: p.is_featured,
            cover_image: p.cover_image.clone(),
            views_count: p.views_count,
        })
        .collect();

    json_response(&listings)
}

fn set_property_status(db: &Database, id: i64, form: &HashMap<String, String>) -> ResultResp {
    let status = form
        .get("status")
        .and_then(|value| PropertyStatus::parse(value))
        .ok_or_else(|| ServerError::BadRequest("unknown property status".to_string()))?;

    properties::set_status(db, id, status)?;
    redirect_response("/admin")
}

fn delete_property(db: &Database, id: i64) -> ResultResp {
    properties::delete_property(db, id)?;
    redirect_response("/admin")
}

fn suspend_user(db: &Database, id: i64, form: &HashMap<String, String>) -> ResultResp {
    let now = Utc::now().naive_utc();
    // No `days` field means an indefinite suspension.
    let until = form
        .get("days")
        .and_then(|value| value.parse::<i64>().ok())
        .filter(|days| *days > 0)
        .map(|days| now + Duration::days(days));

    users::suspend_user(db, id, until, now)?;
    redirect_response("/admin")
}

fn unsuspend_user(db: &Database, id: i64) -> ResultResp {
    users::lift_suspension(db, id)?;
    redirect_response("/admin")
}

// --- request parsing --------------------------------------------------------

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    match query {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

fn parse_form(mut body: Body) -> HashMap<String, String> {
    let mut raw = String::new();
    if body.reader().read_to_string(&mut raw).is_err() {
        return HashMap::new();
    }
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}

/// Builds the filter state from query parameters. Absent, empty, and
/// unparseable values all mean "all".
fn filter_state_from_query(query: &HashMap<String, String>) -> FilterState {
    let mut state = FilterState::default();
    state.city = id_param(query, "city");
    state.district = id_param(query, "district");
    state.property_type = id_param(query, "type");
    state.layout = id_param(query, "layout");
    state.listing_type = query
        .get("listing_type")
        .and_then(|value| ListingType::parse(value));
    state.status = query
        .get("status")
        .and_then(|value| PropertyStatus::parse(value));

    if let (Some(min), Some(max)) = (price_param(query, "min_price"), price_param(query, "max_price")) {
        if min <= max {
            state.price_range = Some((min, max));
        }
    }

    if let Some(q) = query.get("q") {
        state.search = q.clone();
    }
    if let Some(key) = query.get("sort").and_then(|value| SortKey::parse(value)) {
        state.sort_by = key;
    }
    if let Some(order) = query.get("order").and_then(|value| SortOrder::parse(value)) {
        state.sort_order = order;
    }
    state
}

fn id_param(query: &HashMap<String, String>, name: &str) -> Option<i64> {
    query.get(name).and_then(|value| value.parse().ok())
}

fn price_param(query: &HashMap<String, String>, name: &str) -> Option<f64> {
    query
        .get(name)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|price| price.is_finite() && *price >= 0.0)
}

/// The numeric tail of paths like `/property/42`.
fn path_id(path: &str, prefix: &str) -> Option<i64> {
    path.strip_prefix(prefix)?.parse().ok()
}

/// The id segment of action paths like `/admin/users/42/suspend`.
fn action_id(path: &str, prefix: &str, suffix: &str) -> Option<i64> {
    path.strip_prefix(prefix)?.strip_suffix(suffix)?.parse().ok()
}
