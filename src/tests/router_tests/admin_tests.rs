// src/tests/router_tests/admin_tests.rs

use crate::db::properties::{get_property, insert_property};
use crate::db::users::{get_user, insert_user};
use crate::domain::accounts::{derive_standing, UserRole};
use crate::domain::property::PropertyStatus;
use crate::router::handle;
use crate::tests::utils::{fixed_now, init_test_db, listing};
use astra::Body;
use chrono::{Duration, Utc};
use http::{Method, Request};
use std::io::Read;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
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
fn admin_page_lists_all_properties_and_users() {
    let db = init_test_db();
    let now = fixed_now();

    insert_property(&db, &listing("Seaside flat"), now).unwrap();
    let mut hidden = listing("Unlisted attic");
    hidden.status = PropertyStatus::Hidden;
    insert_property(&db, &hidden, now).unwrap();

    insert_user(&db, "office@example.com", "Sahil Emlak", UserRole::Office, None, now).unwrap();

    let resp = handle(get("/admin"), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Admin Dashboard"));
    // The back office sees hidden listings too.
    assert!(body.contains("Seaside flat"));
    assert!(body.contains("Unlisted attic"));
    assert!(body.contains("office@example.com"));
}

#[test]
fn status_filter_narrows_the_admin_list() {
    let db = init_test_db();
    let now = fixed_now();

    insert_property(&db, &listing("Seaside flat"), now).unwrap();
    let mut sold = listing("Closed deal");
    sold.status = PropertyStatus::Sold;
    insert_property(&db, &sold, now).unwrap();

    let resp = handle(get("/admin?status=sold"), &db).expect("Handler failed");
    let body = body_string(resp);
    assert!(body.contains("Closed deal"));
    assert!(!body.contains("Seaside flat"));
}

#[test]
fn admin_list_sorts_by_price_ascending() {
    let db = init_test_db();
    let now = fixed_now();

    let mut dear = listing("Penthouse");
    dear.price = Some(900.0);
    insert_property(&db, &dear, now).unwrap();

    let mut cheap = listing("Starter studio");
    cheap.price = Some(100.0);
    insert_property(&db, &cheap, now).unwrap();

    let resp = handle(get("/admin?sort=price&order=asc"), &db).expect("Handler failed");
    let body = body_string(resp);

    let cheap_at = body.find("Starter studio").expect("cheap listing missing");
    let dear_at = body.find("Penthouse").expect("dear listing missing");
    assert!(cheap_at < dear_at, "cheapest listing should come first");
}

#[test]
fn admin_list_is_not_price_filtered() {
    let db = init_test_db();
    let now = fixed_now();

    let mut cheap = listing("Starter studio");
    cheap.price = Some(100.0);
    insert_property(&db, &cheap, now).unwrap();

    let mut dear = listing("Penthouse");
    dear.price = Some(900.0);
    insert_property(&db, &dear, now).unwrap();

    // The same parameters narrow the public page, but the back office
    // always shows the full list.
    let resp = handle(get("/admin?min_price=100&max_price=500"), &db).expect("Handler failed");
    let body = body_string(resp);
    assert!(body.contains("Starter studio"));
    assert!(body.contains("Penthouse"));
}

#[test]
fn setting_a_property_status_redirects_and_persists() {
    let db = init_test_db();
    let id = insert_property(&db, &listing("Seaside flat"), fixed_now()).unwrap();

    let resp = handle(
        post_form(&format!("/admin/properties/{id}/status"), "status=sold"),
        &db,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/admin"
    );

    let property = get_property(&db, id).unwrap().unwrap();
    assert_eq!(property.status, PropertyStatus::Sold);
}

#[test]
fn timed_suspension_is_applied_and_lifted() {
    let db = init_test_db();
    let user_id = insert_user(
        &db,
        "agent@example.com",
        "Agent",
        UserRole::Agent,
        None,
        fixed_now(),
    )
    .unwrap();

    let resp = handle(
        post_form(&format!("/admin/users/{user_id}/suspend"), "days=7"),
        &db,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 302);

    // The handler stamps the suspension with the wall clock, so standing
    // checks are made relative to it.
    let now = Utc::now().naive_utc();
    let user = get_user(&db, user_id).unwrap().unwrap();
    assert!(derive_standing(&user, now + Duration::days(1)).is_suspended());
    // But the suspension has an end date a week out.
    assert!(!derive_standing(&user, now + Duration::days(8)).is_suspended());

    let resp = handle(
        post_form(&format!("/admin/users/{user_id}/unsuspend"), ""),
        &db,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 302);

    let user = get_user(&db, user_id).unwrap().unwrap();
    assert!(!derive_standing(&user, now + Duration::days(1)).is_suspended());
}

#[test]
fn deleting_a_property_removes_it() {
    let db = init_test_db();
    let id = insert_property(&db, &listing("Seaside flat"), fixed_now()).unwrap();

    let resp = handle(post_form(&format!("/admin/properties/{id}/delete"), ""), &db)
        .expect("Handler failed");
    assert_eq!(resp.status(), 302);

    assert!(get_property(&db, id).unwrap().is_none());
}

#[test]
fn suspension_without_days_is_indefinite() {
    let db = init_test_db();
    let now = fixed_now();
    let user_id = insert_user(&db, "agent@example.com", "Agent", UserRole::Agent, None, now).unwrap();

    handle(
        post_form(&format!("/admin/users/{user_id}/suspend"), ""),
        &db,
    )
    .expect("Handler failed");

    let user = get_user(&db, user_id).unwrap().unwrap();
    assert!(derive_standing(&user, now + Duration::days(365)).is_suspended());
}

#[test]
fn bad_status_value_is_rejected() {
    let db = init_test_db();
    let id = insert_property(&db, &listing("Seaside flat"), fixed_now()).unwrap();

    let err = handle(
        post_form(&format!("/admin/properties/{id}/status"), "status=vaporized"),
        &db,
    )
    .unwrap_err();

    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
}
