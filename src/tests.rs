//! Integration tests for the Retro Board backend.
//!
//! Each test spawns its own server over a freshly seeded store, so tests
//! never observe each other's mutations.

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::store::RetroStore;
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

impl TestFixture {
    async fn new() -> Self {
        let state = AppState {
            store: Arc::new(RwLock::new(RetroStore::seeded())),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> Value {
        self.client
            .get(self.url(path))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_seeded_collections() {
    let fixture = TestFixture::new().await;

    let retros = fixture.get_json("/api/retros").await;
    assert_eq!(retros["success"], true);
    assert_eq!(retros["data"].as_array().unwrap().len(), 6);
    assert_eq!(retros["data"][0]["title"], "Sprint 23 Retrospective");
    assert_eq!(retros["data"][0]["items"][0]["votes"], 3);
    assert_eq!(retros["data"][0]["items"][0]["type"], "positive");

    let teams = fixture.get_json("/api/teams").await;
    assert_eq!(teams["data"].as_array().unwrap().len(), 3);
    assert_eq!(teams["data"][0]["name"], "Frontend Team");
    assert_eq!(teams["data"][0]["members"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_initial_selection() {
    let fixture = TestFixture::new().await;

    let selection = fixture.get_json("/api/selection").await;
    assert_eq!(selection["data"]["currentRetro"], Value::Null);
    assert_eq!(selection["data"]["currentTeam"]["id"], "1");
    assert_eq!(selection["data"]["loading"], false);
}

#[tokio::test]
async fn test_create_retro_forces_empty_items() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/retros"))
        .json(&json!({
            "title": "Sprint 24 Retrospective",
            "description": "Fresh sprint",
            "date": "2024-02-01",
            "teamId": "2",
            "status": "upcoming",
            "items": [{
                "id": "smuggled",
                "content": "should not survive",
                "type": "positive",
                "votes": 99,
                "author": "Nobody",
                "createdAt": "2024-02-01T00:00:00Z"
            }]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);
    let retro_id = body["data"]["id"].as_str().unwrap();

    // Appended at the end of the collection.
    let retros = fixture.get_json("/api/retros").await;
    let list = retros["data"].as_array().unwrap();
    assert_eq!(list.len(), 7);
    assert_eq!(list[6]["id"], retro_id);
}

#[tokio::test]
async fn test_create_retro_requires_title() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/retros"))
        .json(&json!({
            "title": "   ",
            "date": "2024-02-01",
            "teamId": "1"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_item_lifecycle() {
    let fixture = TestFixture::new().await;

    // Add an item to the upcoming retro (seeded empty).
    let add_resp = fixture
        .client
        .post(fixture.url("/api/retros/3/items"))
        .json(&json!({
            "content": "Prepare quarterly goals ahead of time",
            "type": "action",
            "votes": 0,
            "author": "Jane Smith"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(add_resp.status(), 200);
    let add_body: Value = add_resp.json().await.unwrap();
    let item_id = add_body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(add_body["data"]["type"], "action");
    assert_eq!(add_body["data"]["votes"], 0);
    assert!(add_body["data"]["createdAt"].as_str().unwrap().contains('T'));

    // Shallow merge: only the supplied field changes.
    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/retros/3/items/{}", item_id)))
        .json(&json!({ "content": "Prepare goals and metrics" }))
        .send()
        .await
        .unwrap();
    assert_eq!(update_resp.status(), 200);
    let update_body: Value = update_resp.json().await.unwrap();
    assert_eq!(update_body["data"]["content"], "Prepare goals and metrics");
    assert_eq!(update_body["data"]["author"], "Jane Smith");
    assert_eq!(update_body["data"]["type"], "action");

    // Vote twice.
    for expected in [1, 2] {
        let vote_resp = fixture
            .client
            .post(fixture.url(&format!("/api/retros/3/items/{}/vote", item_id)))
            .send()
            .await
            .unwrap();
        let vote_body: Value = vote_resp.json().await.unwrap();
        assert_eq!(vote_body["data"]["votes"], expected);
    }

    // Delete it again.
    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/retros/3/items/{}", item_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    let retro = fixture.get_json("/api/retros/3").await;
    assert_eq!(retro["data"]["items"].as_array().unwrap().len(), 0);

    // Deleting twice is a not-found.
    let delete_again = fixture
        .client
        .delete(fixture.url(&format!("/api/retros/3/items/{}", item_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_again.status(), 404);
}

#[tokio::test]
async fn test_vote_monotonicity_on_seed_item() {
    let fixture = TestFixture::new().await;

    // Item 101 starts at 3 votes; three votes yield 6.
    for _ in 0..3 {
        let resp = fixture
            .client
            .post(fixture.url("/api/retros/1/items/101/vote"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let retro = fixture.get_json("/api/retros/1").await;
    let items = retro["data"]["items"].as_array().unwrap();
    assert_eq!(items[0]["id"], "101");
    assert_eq!(items[0]["votes"], 6);
    // No other item in the retro changes.
    assert_eq!(items[1]["votes"], 2);
    assert_eq!(items[2]["votes"], 4);
}

#[tokio::test]
async fn test_selection_resync_after_item_added() {
    let fixture = TestFixture::new().await;

    let select_resp = fixture
        .client
        .put(fixture.url("/api/selection/retro"))
        .json(&json!({ "retroId": "1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(select_resp.status(), 200);
    let select_body: Value = select_resp.json().await.unwrap();
    assert_eq!(select_body["data"]["currentRetro"]["id"], "1");

    fixture
        .client
        .post(fixture.url("/api/retros/1/items"))
        .json(&json!({
            "content": "Retro board stayed focused",
            "type": "positive",
            "votes": 0,
            "author": "Alex Johnson"
        }))
        .send()
        .await
        .unwrap();

    // The selection tracks the updated object, not a stale snapshot.
    let selection = fixture.get_json("/api/selection").await;
    let current_items = selection["data"]["currentRetro"]["items"]
        .as_array()
        .unwrap();
    assert_eq!(current_items.len(), 4);
    assert_eq!(current_items[3]["content"], "Retro board stayed focused");
}

#[tokio::test]
async fn test_selection_set_and_clear() {
    let fixture = TestFixture::new().await;

    // Unknown retro id answers 404 and leaves the selection unset.
    let bad_resp = fixture
        .client
        .put(fixture.url("/api/selection/retro"))
        .json(&json!({ "retroId": "no-such-retro" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_resp.status(), 404);

    let selection = fixture.get_json("/api/selection").await;
    assert_eq!(selection["data"]["currentRetro"], Value::Null);

    // Switch the current team, then clear it.
    let team_resp = fixture
        .client
        .put(fixture.url("/api/selection/team"))
        .json(&json!({ "teamId": "3" }))
        .send()
        .await
        .unwrap();
    let team_body: Value = team_resp.json().await.unwrap();
    assert_eq!(team_body["data"]["currentTeam"]["name"], "Design Team");

    let clear_resp = fixture
        .client
        .put(fixture.url("/api/selection/team"))
        .json(&json!({ "teamId": null }))
        .send()
        .await
        .unwrap();
    let clear_body: Value = clear_resp.json().await.unwrap();
    assert_eq!(clear_body["data"]["currentTeam"], Value::Null);
}

#[tokio::test]
async fn test_analytics_seed_scenario() {
    let fixture = TestFixture::new().await;

    let body = fixture.get_json("/api/analytics").await;
    assert_eq!(body["success"], true);

    let by_team = body["data"]["retrosByTeam"].as_array().unwrap();
    assert_eq!(by_team.len(), 3);
    assert_eq!(by_team[0], json!({ "teamId": "1", "count": 3 }));
    assert_eq!(by_team[1], json!({ "teamId": "2", "count": 2 }));
    assert_eq!(by_team[2], json!({ "teamId": "3", "count": 1 }));

    let by_type = body["data"]["itemsByType"].as_array().unwrap();
    assert_eq!(by_type[0], json!({ "name": "positive", "value": 7 }));
    assert_eq!(by_type[1], json!({ "name": "negative", "value": 5 }));
    assert_eq!(by_type[2], json!({ "name": "action", "value": 5 }));

    let by_month = body["data"]["retrosByMonth"].as_array().unwrap();
    assert_eq!(by_month[0], json!({ "month": "May", "count": 2 }));

    assert_eq!(body["data"]["statusCounts"]["upcoming"], 1);
    assert_eq!(body["data"]["statusCounts"]["completed"], 5);
}

#[tokio::test]
async fn test_analytics_follow_mutations() {
    let fixture = TestFixture::new().await;

    fixture
        .client
        .post(fixture.url("/api/retros"))
        .json(&json!({
            "title": "Team 3 Catch-up",
            "date": "2024-07-04",
            "teamId": "3"
        }))
        .send()
        .await
        .unwrap();

    let body = fixture.get_json("/api/analytics").await;
    let by_team = body["data"]["retrosByTeam"].as_array().unwrap();
    assert_eq!(by_team[2], json!({ "teamId": "3", "count": 2 }));

    let by_month = body["data"]["retrosByMonth"].as_array().unwrap();
    assert_eq!(by_month.last().unwrap(), &json!({ "month": "Jul", "count": 1 }));
}

#[tokio::test]
async fn test_not_found_errors() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/retros/non-existent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let resp2 = fixture
        .client
        .get(fixture.url("/api/teams/non-existent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp2.status(), 404);

    // Item mutators on unknown targets are rejected without touching state.
    let resp3 = fixture
        .client
        .post(fixture.url("/api/retros/1/items/999/vote"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp3.status(), 404);

    let retro = fixture.get_json("/api/retros/1").await;
    assert_eq!(retro["data"]["items"][0]["votes"], 3);
}
