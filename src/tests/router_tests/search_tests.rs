// src/tests/router_tests/search_tests.rs

use crate::db::properties::{get_property, insert_property};
use crate::domain::language::Localized;
use crate::domain::property::PropertyStatus;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{fixed_now, init_test_db, listing, seed_city, seed_district};
use astra::Body;
use http::{Method, Request};
use std::io::Read;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

#[test]
fn search_page_lists_only_public_properties() {
    let db = init_test_db();
    let now = fixed_now();

    insert_property(&db, &listing("Seaside flat"), now).unwrap();
    let mut hidden = listing("Secret cellar");
    hidden.status = PropertyStatus::Hidden;
    insert_property(&db, &hidden, now).unwrap();

    let resp = handle(get("/"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Seaside flat"));
    assert!(!body.contains("Secret cellar"));
}

#[test]
fn city_filter_narrows_the_public_list() {
    let db = init_test_db();
    let now = fixed_now();
    let antalya = seed_city(&db, "أنطاليا", "Antalya", "Antalya");
    let izmir = seed_city(&db, "إزمير", "Izmir", "İzmir");

    let mut coastal = listing("Coastal villa");
    coastal.city_id = Some(antalya);
    insert_property(&db, &coastal, now).unwrap();

    let mut urban = listing("Urban loft");
    urban.city_id = Some(izmir);
    insert_property(&db, &urban, now).unwrap();

    let resp = handle(get(&format!("/?city={antalya}")), &db).expect("Handler failed");
    let body = body_string(resp);
    assert!(body.contains("Coastal villa"));
    assert!(!body.contains("Urban loft"));
}

#[test]
fn district_filter_narrows_within_a_city() {
    let db = init_test_db();
    let now = fixed_now();
    let antalya = seed_city(&db, "أنطاليا", "Antalya", "Antalya");
    let konyaalti = seed_district(&db, antalya, "Konyaalti");
    let alanya = seed_district(&db, antalya, "Alanya");

    let mut beachfront = listing("Beachfront flat");
    beachfront.city_id = Some(antalya);
    beachfront.district_id = Some(konyaalti);
    insert_property(&db, &beachfront, now).unwrap();

    let mut castle_view = listing("Castle view flat");
    castle_view.city_id = Some(antalya);
    castle_view.district_id = Some(alanya);
    insert_property(&db, &castle_view, now).unwrap();

    let resp = handle(
        get(&format!("/?city={antalya}&district={konyaalti}")),
        &db,
    )
    .expect("Handler failed");
    let body = body_string(resp);
    assert!(body.contains("Beachfront flat"));
    assert!(!body.contains("Castle view flat"));
}

#[test]
fn free_text_search_matches_city_name_case_insensitively() {
    let db = init_test_db();
    let now = fixed_now();
    let antalya = seed_city(&db, "أنطاليا", "Antalya", "Antalya");

    let mut coastal = listing("Coastal villa");
    coastal.city_id = Some(antalya);
    insert_property(&db, &coastal, now).unwrap();
    insert_property(&db, &listing("Urban loft"), now).unwrap();

    let resp = handle(get("/?q=antalya"), &db).expect("Handler failed");
    let body = body_string(resp);
    assert!(body.contains("Coastal villa"));
    assert!(!body.contains("Urban loft"));
}

#[test]
fn in_bounds_price_selection_filters_the_list() {
    let db = init_test_db();
    let now = fixed_now();

    let mut cheap = listing("Starter studio");
    cheap.price = Some(100.0);
    insert_property(&db, &cheap, now).unwrap();

    let mut dear = listing("Penthouse");
    dear.price = Some(900.0);
    insert_property(&db, &dear, now).unwrap();

    // Derived bounds are [90, 990]; this selection fits and is honored.
    let resp = handle(get("/?min_price=100&max_price=500"), &db).expect("Handler failed");
    let body = body_string(resp);
    assert!(body.contains("Starter studio"));
    assert!(!body.contains("Penthouse"));
}

#[test]
fn out_of_bounds_price_selection_resets_to_full_range() {
    let db = init_test_db();
    let now = fixed_now();

    let mut cheap = listing("Starter studio");
    cheap.price = Some(100.0);
    insert_property(&db, &cheap, now).unwrap();

    let mut dear = listing("Penthouse");
    dear.price = Some(900.0);
    insert_property(&db, &dear, now).unwrap();

    // Lower bound 10 falls below the derived minimum of 90, so the
    // selection resets and both listings stay visible.
    let resp = handle(get("/?min_price=10&max_price=500"), &db).expect("Handler failed");
    let body = body_string(resp);
    assert!(body.contains("Starter studio"));
    assert!(body.contains("Penthouse"));
}

#[test]
fn empty_result_set_renders_the_no_results_state() {
    let db = init_test_db();
    insert_property(&db, &listing("Seaside flat"), fixed_now()).unwrap();

    let resp = handle(get("/?q=nonexistent"), &db).expect("Handler failed");
    let body = body_string(resp);
    assert!(body.contains("No properties match your search."));
}

#[test]
fn property_detail_bumps_the_view_counter() {
    let db = init_test_db();
    let id = insert_property(&db, &listing("Seaside flat"), fixed_now()).unwrap();

    let resp = handle(get(&format!("/property/{id}")), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Seaside flat"));

    let property = get_property(&db, id).unwrap().unwrap();
    assert_eq!(property.views_count, 1);
}

#[test]
fn unknown_property_is_not_found() {
    let db = init_test_db();

    let err = handle(get("/property/999"), &db).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn api_returns_listings_localized_to_the_requested_language() {
    let db = init_test_db();
    let now = fixed_now();
    let antalya = seed_city(&db, "أنطاليا", "Antalya", "Antalya");

    let mut coastal = listing("Coastal villa");
    coastal.title = Localized::new("فيلا ساحلية", "Coastal villa", "Sahil villası");
    coastal.city_id = Some(antalya);
    insert_property(&db, &coastal, now).unwrap();

    let resp = handle(get("/api/properties?lang=ar"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json; charset=utf-8"
    );

    let body = body_string(resp);
    assert!(body.contains("فيلا ساحلية"));
    assert!(body.contains("أنطاليا"));
}
