//! End-to-end resource behaviour through the full application stack.

use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use dealership::middleware::ErrorHandler;

mod support;

use support::{build_app, in_memory_state, send};

fn customer_body() -> Value {
    json!({"name": "John", "address": "1 Main Street", "email": "john@x.com"})
}

#[rstest]
#[actix_web::test]
async fn creating_a_customer_assigns_id_and_system_actors() {
    let app = test::init_service(build_app(in_memory_state(), ErrorHandler::new())).await;

    let reply = send(
        &app,
        TestRequest::post().uri("/customers").set_json(customer_body()),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    let id = reply.body["id"].as_str().expect("id present");
    assert!(Uuid::parse_str(id).is_ok(), "generated id is a uuid: {id}");
    assert_eq!(reply.body["name"], "John");
    assert_eq!(reply.body["phone"], Value::Null);
    assert_eq!(reply.body["created_by"], "system");
    assert_eq!(reply.body["updated_by"], "system");
    assert_eq!(reply.body["created_at"], reply.body["updated_at"]);
}

#[rstest]
#[actix_web::test]
async fn creating_with_caller_values_keeps_them() {
    let app = test::init_service(build_app(in_memory_state(), ErrorHandler::new())).await;

    let reply = send(
        &app,
        TestRequest::post().uri("/suppliers").set_json(json!({
            "id": "supp-1",
            "name": "Acme",
            "address": "5 Depot Road",
            "phone": "555-0100",
            "email": "sales@acme.example",
            "created_by": "alice"
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body["id"], "supp-1");
    assert_eq!(reply.body["created_by"], "alice");
    assert_eq!(reply.body["updated_by"], "alice");
}

#[rstest]
#[case(json!({"name": "John", "address": "1 Main Street"}), "email is required")]
#[case(json!({"address": "1 Main Street", "email": "john@x.com"}), "name is required")]
#[case(
    json!({"name": "John", "address": "1 Main Street", "email": "john"}),
    "email must be a valid email address"
)]
#[actix_web::test]
async fn invalid_customers_are_rejected_before_storage(
    #[case] body: Value,
    #[case] message: &str,
) {
    let app = test::init_service(build_app(in_memory_state(), ErrorHandler::new())).await;

    let reply = send(&app, TestRequest::post().uri("/customers").set_json(body)).await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body, json!({"code": "INVALID_INPUT", "message": message}));

    let listed = send(&app, TestRequest::get().uri("/customers")).await;
    assert_eq!(listed.body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn unknown_customer_is_not_found() {
    let app = test::init_service(build_app(in_memory_state(), ErrorHandler::new())).await;

    let reply = send(&app, TestRequest::get().uri("/customers/unknown-id")).await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(
        reply.body,
        json!({"code": "NOT_FOUND", "message": "Customer with ID 'unknown-id' not found"})
    );
}

#[rstest]
#[actix_web::test]
async fn negative_car_price_is_rejected_on_update() {
    let app = test::init_service(build_app(in_memory_state(), ErrorHandler::new())).await;
    let created = send(
        &app,
        TestRequest::post().uri("/cars").set_json(json!({
            "id": "car-1", "name": "Roadster", "supplier_id": "supp-1", "price": 2_500_000
        })),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let reply = send(
        &app,
        TestRequest::put().uri("/cars/car-1").set_json(json!({
            "name": "Roadster", "supplier_id": "supp-1", "price": -5
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "INVALID_INPUT");
    assert_eq!(reply.body["message"], "price must be greater than zero");

    let stored = send(&app, TestRequest::get().uri("/cars/car-1")).await;
    assert_eq!(stored.body["price"], 2_500_000);
}

#[rstest]
#[actix_web::test]
async fn deleting_a_relationship_twice_reports_not_found() {
    let app = test::init_service(build_app(in_memory_state(), ErrorHandler::new())).await;
    send(
        &app,
        TestRequest::post()
            .uri("/customer-cars")
            .set_json(json!({"id": "cc-1", "car_id": "car-1", "customer_id": "cust-1"})),
    )
    .await;

    let first = send(&app, TestRequest::delete().uri("/customer-cars/cc-1")).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(
        first.body,
        json!({"message": "Customer car relationship deleted successfully"})
    );

    let second = send(&app, TestRequest::delete().uri("/customer-cars/cc-1")).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
    assert_eq!(
        second.body,
        json!({
            "code": "NOT_FOUND",
            "message": "Customer car relationship with ID 'cc-1' not found"
        })
    );
}

#[rstest]
#[actix_web::test]
async fn update_replaces_fields_and_defaults_actor() {
    let app = test::init_service(build_app(in_memory_state(), ErrorHandler::new())).await;
    send(
        &app,
        TestRequest::post().uri("/customers").set_json(json!({
            "id": "cust-1", "name": "John", "address": "1 Main Street",
            "email": "john@x.com", "created_by": "alice"
        })),
    )
    .await;

    let reply = send(
        &app,
        TestRequest::put().uri("/customers/cust-1").set_json(json!({
            "name": "John Smith", "address": "2 High Street", "email": "js@x.com"
        })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        reply.body,
        json!({"message": "Customer updated successfully"})
    );

    let stored = send(&app, TestRequest::get().uri("/customers/cust-1")).await;
    assert_eq!(stored.body["name"], "John Smith");
    assert_eq!(stored.body["created_by"], "alice");
    assert_eq!(stored.body["updated_by"], "system");
}

#[rstest]
#[actix_web::test]
async fn updating_a_missing_supplier_is_not_found() {
    let app = test::init_service(build_app(in_memory_state(), ErrorHandler::new())).await;

    let reply = send(
        &app,
        TestRequest::put().uri("/suppliers/ghost").set_json(json!({
            "name": "Acme", "address": "5 Depot Road", "email": "sales@acme.example"
        })),
    )
    .await;

    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(
        reply.body["message"],
        "Supplier with ID 'ghost' not found"
    );
}

#[rstest]
#[actix_web::test]
async fn reusing_an_id_conflicts() {
    let app = test::init_service(build_app(in_memory_state(), ErrorHandler::new())).await;
    let car = json!({"id": "car-9", "name": "Coupe", "supplier_id": "s", "price": 10});
    send(&app, TestRequest::post().uri("/cars").set_json(car.clone())).await;

    let reply = send(&app, TestRequest::post().uri("/cars").set_json(car)).await;

    assert_eq!(reply.status, StatusCode::CONFLICT);
    assert_eq!(
        reply.body,
        json!({"code": "ALREADY_EXISTS", "message": "Car with ID 'car-9' already exists"})
    );
}

#[rstest]
#[actix_web::test]
async fn lists_are_newest_first() {
    let app = test::init_service(build_app(in_memory_state(), ErrorHandler::new())).await;
    for id in ["s-1", "s-2", "s-3"] {
        send(
            &app,
            TestRequest::post().uri("/suppliers").set_json(json!({
                "id": id, "name": "Acme", "address": "Depot", "email": "a@b.co"
            })),
        )
        .await;
    }

    let reply = send(&app, TestRequest::get().uri("/suppliers")).await;

    let ids: Vec<&str> = reply
        .body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|item| item["id"].as_str())
        .collect();
    assert_eq!(ids, ["s-3", "s-2", "s-1"]);
}

#[rstest]
#[actix_web::test]
async fn ownership_lookups_filter_by_side() {
    let app = test::init_service(build_app(in_memory_state(), ErrorHandler::new())).await;
    for (id, car, customer) in [
        ("cc-1", "car-1", "cust-1"),
        ("cc-2", "car-2", "cust-1"),
        ("cc-3", "car-1", "cust-2"),
    ] {
        send(
            &app,
            TestRequest::post()
                .uri("/customer-cars")
                .set_json(json!({"id": id, "car_id": car, "customer_id": customer})),
        )
        .await;
    }

    let cars = send(&app, TestRequest::get().uri("/customers/cust-1/cars")).await;
    let owners = send(&app, TestRequest::get().uri("/cars/car-1/customers")).await;
    let nobody = send(&app, TestRequest::get().uri("/customers/cust-9/cars")).await;

    let ids = |reply: &support::Reply| -> Vec<String> {
        reply
            .body
            .as_array()
            .expect("array body")
            .iter()
            .filter_map(|item| item["id"].as_str().map(str::to_owned))
            .collect()
    };
    assert_eq!(ids(&cars), ["cc-2", "cc-1"]);
    assert_eq!(ids(&owners), ["cc-3", "cc-1"]);
    assert_eq!(nobody.body, json!([]));
}

#[rstest]
#[case::malformed("{\"name\": ", "application/json")]
#[case::wrong_type(r#"{"name": "Coupe", "supplier_id": "s", "price": "cheap"}"#, "application/json")]
#[case::wrong_content_type(r#"{"name": "Coupe"}"#, "text/plain")]
#[actix_web::test]
async fn unreadable_bodies_are_invalid_input(#[case] body: &str, #[case] content_type: &str) {
    let app = test::init_service(build_app(in_memory_state(), ErrorHandler::new())).await;

    let reply = send(
        &app,
        TestRequest::post()
            .uri("/cars")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body.to_owned()),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "INVALID_INPUT");
}
