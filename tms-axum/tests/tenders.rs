use axum::http::StatusCode;
use rstest::*;
use serde_json::{Value, json};
use tms_core::ports::TenderRepository as _;

mod app;
use app::{World, id_of, names};

#[test_log::test(tokio::test)]
async fn ping_answers_ok() {
    let world = World::new().await;
    let response = world.server.get("/ping").await;
    response.assert_status_ok();
    response.assert_text("ok");
}

#[test_log::test(tokio::test)]
async fn published_tender_rolled_back_leaves_the_public_list() {
    let world = World::new().await;

    let response = world
        .server
        .post("/tenders/new")
        .json(&json!({
            "name": "Delivery Kazan - Moscow",
            "description": "Ship the robotics kits",
            "service_type": "Delivery",
            "organization_id": world.avito.id,
            "creator_username": "alice",
        }))
        .await;
    response.assert_status_ok();
    let created: Value = response.json();
    assert_eq!(created["status"], "Created");
    assert_eq!(created["version"], 1);
    let tender_id = id_of(&created);

    let response = world
        .server
        .patch(&format!("/tenders/{tender_id}/status"))
        .add_query_param("username", "alice")
        .add_query_param("status", "Published")
        .await;
    response.assert_status_ok();
    let published: Value = response.json();
    assert_eq!(published["status"], "Published");
    assert_eq!(published["version"], 2);

    let listed: Value = world.server.get("/tenders").await.json();
    assert_eq!(names(&listed), vec!["Delivery Kazan - Moscow"]);

    let response = world
        .server
        .put(&format!("/tenders/{tender_id}/rollback/1"))
        .add_query_param("username", "alice")
        .await;
    response.assert_status_ok();
    let rolled_back: Value = response.json();
    assert_eq!(rolled_back["status"], "Created");
    assert_eq!(rolled_back["version"], 3);

    let listed: Value = world.server.get("/tenders").await.json();
    assert!(names(&listed).is_empty());
}

#[rstest]
#[case::unknown_organization(false, "mallory", StatusCode::NOT_FOUND)]
#[case::unknown_creator(true, "mallory", StatusCode::UNAUTHORIZED)]
#[case::not_responsible(true, "bob", StatusCode::FORBIDDEN)]
#[case::responsible(true, "alice", StatusCode::OK)]
#[test_log::test(tokio::test)]
async fn creating_a_tender_checks_the_organization_then_the_creator(
    #[case] known_organization: bool,
    #[case] creator: &str,
    #[case] expected: StatusCode,
) {
    let world = World::new().await;
    let organization_id = if known_organization {
        world.avito.id.0
    } else {
        uuid::Uuid::new_v4()
    };

    let response = world
        .server
        .post("/tenders/new")
        .json(&json!({
            "name": "Office renovation",
            "description": "",
            "service_type": "Construction",
            "organization_id": organization_id,
            "creator_username": creator,
        }))
        .await;
    response.assert_status(expected);
}

#[test_log::test(tokio::test)]
async fn unpublished_tenders_are_private_to_their_organization() {
    let world = World::new().await;
    let tender_id = world.tender("Cleaning", "Manufacture").await;
    let status = |username: &'static str| {
        world
            .server
            .get(&format!("/tenders/{tender_id}/status"))
            .add_query_param("username", username)
    };

    let response = status("alice").await;
    response.assert_status_ok();
    response.assert_json(&json!("Created"));

    status("carol").await.assert_status(StatusCode::FORBIDDEN);
    status("mallory").await.assert_status(StatusCode::UNAUTHORIZED);

    world.set_tender_status(&tender_id, "Published").await;
    let response = status("carol").await;
    response.assert_status_ok();
    response.assert_json(&json!("Published"));

    let response = world
        .server
        .get(&format!("/tenders/{}/status", uuid::Uuid::new_v4()))
        .add_query_param("username", "alice")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "reason": "tender not found" }));
}

#[test_log::test(tokio::test)]
async fn setting_the_current_status_is_rejected() {
    let world = World::new().await;
    let tender_id = world.tender("Cleaning", "Manufacture").await;

    let response = world
        .server
        .patch(&format!("/tenders/{tender_id}/status"))
        .add_query_param("username", "alice")
        .add_query_param("status", "Created")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "reason": "the new status cannot be the same as the current one"
    }));

    // Nothing was archived: version 1 is still live and cannot be restored
    world
        .server
        .put(&format!("/tenders/{tender_id}/rollback/1"))
        .add_query_param("username", "alice")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    let history = world
        .db
        .get_tender_history(tender_id.parse().unwrap())
        .await
        .unwrap();
    assert!(history.is_empty());

    let response = world
        .server
        .patch(&format!("/tenders/{tender_id}/status"))
        .add_query_param("username", "bob")
        .add_query_param("new_status", "Closed")
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[test_log::test(tokio::test)]
async fn edits_only_touch_the_given_fields() {
    let world = World::new().await;
    let tender_id = world.tender("Cleaning", "Manufacture").await;

    let response = world
        .server
        .patch(&format!("/tenders/{tender_id}/edit"))
        .add_query_param("username", "alice")
        .json(&json!({ "name": "Deep cleaning" }))
        .await;
    response.assert_status_ok();
    let edited: Value = response.json();
    assert_eq!(edited["name"], "Deep cleaning");
    assert_eq!(edited["description"], "Cleaning description");
    assert_eq!(edited["service_type"], "Manufacture");
    assert_eq!(edited["version"], 2);

    let response = world
        .server
        .patch(&format!("/tenders/{tender_id}/edit"))
        .add_query_param("username", "alice")
        .json(&json!({ "name": "" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let response = world
        .server
        .patch(&format!("/tenders/{tender_id}/edit"))
        .add_query_param("username", "alice")
        .json(&json!({ "budget": 100 }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let response = world
        .server
        .patch(&format!("/tenders/{tender_id}/edit"))
        .add_query_param("username", "alice")
        .text("{\"name\":")
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[rstest]
#[case::zero("0", StatusCode::BAD_REQUEST)]
#[case::negative("-2", StatusCode::BAD_REQUEST)]
#[case::never_archived("9", StatusCode::NOT_FOUND)]
#[case::not_a_number("latest", StatusCode::UNPROCESSABLE_ENTITY)]
#[test_log::test(tokio::test)]
async fn rollback_needs_an_archived_version(#[case] version: &str, #[case] expected: StatusCode) {
    let world = World::new().await;
    let tender_id = world.tender("Cleaning", "Manufacture").await;
    world.set_tender_status(&tender_id, "Published").await;

    let response = world
        .server
        .put(&format!("/tenders/{tender_id}/rollback/{version}"))
        .add_query_param("username", "alice")
        .await;
    response.assert_status(expected);
}

#[test_log::test(tokio::test)]
async fn public_list_filters_by_repeated_service_types() {
    let world = World::new().await;
    for (name, service_type) in [
        ("Bridge", "Construction"),
        ("Parcel", "Delivery"),
        ("Widgets", "Manufacture"),
        ("Archive", "Delivery"),
    ] {
        let tender_id = world.tender(name, service_type).await;
        world.set_tender_status(&tender_id, "Published").await;
    }
    world.tender("Draft", "Delivery").await;

    let all: Value = world.server.get("/tenders").await.json();
    assert_eq!(names(&all), vec!["Archive", "Bridge", "Parcel", "Widgets"]);

    let response = world
        .server
        .get("/tenders")
        .add_raw_query_param("service_type=Delivery&service_type=Construction")
        .await;
    response.assert_status_ok();
    let value: Value = response.json();
    assert_eq!(names(&value), vec!["Archive", "Bridge", "Parcel"]);

    let response = world
        .server
        .get("/tenders")
        .add_query_param("limit", 2)
        .add_query_param("offset", 1)
        .await;
    let value: Value = response.json();
    assert_eq!(names(&value), vec!["Bridge", "Parcel"]);

    world
        .server
        .get("/tenders")
        .add_query_param("limit", 0)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    world
        .server
        .get("/tenders")
        .add_query_param("service_type", "Gardening")
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_log::test(tokio::test)]
async fn my_tenders_by_author_or_responsibility() {
    let world = World::new().await;
    world.tender("Cleaning", "Manufacture").await;
    world.tender("Bridge", "Construction").await;

    let mine = |username: &'static str, query_type: &'static str| {
        world
            .server
            .get("/tenders/my")
            .add_query_param("username", username)
            .add_query_param("query_type", query_type)
    };

    let value: Value = mine("alice", "responsible").await.json();
    assert_eq!(names(&value), vec!["Bridge", "Cleaning"]);

    let value: Value = mine("alice", "author").await.json();
    assert_eq!(names(&value), vec!["Bridge", "Cleaning"]);

    let response = mine("carol", "responsible").await;
    response.assert_status_ok();
    response.assert_json(&json!([]));

    mine("mallory", "author")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[test_log::test(tokio::test)]
async fn the_openapi_document_lists_every_route() {
    let world = World::new().await;
    let response = world.server.get("/docs/api.json").await;
    response.assert_status_ok();
    let document: Value = response.json();
    for path in ["/ping", "/tenders/new", "/bids/{id}/reviews"] {
        assert!(document["paths"].get(path).is_some(), "missing {path}");
    }
}
