//! HTTP API integration tests.
//!
//! Drives the participants / messages / status endpoints end to end.

mod fixtures;

use std::time::Duration;

use fixtures::TestServer;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

async fn join(client: &Client, server: &TestServer, name: &str) -> StatusCode {
    client
        .post(format!("{}/participants", server.base_url()))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send request")
        .status()
}

async fn send(
    client: &Client,
    server: &TestServer,
    from: &str,
    to: &str,
    text: &str,
    kind: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/messages", server.base_url()))
        .header("User", from)
        .json(&json!({ "to": to, "text": text, "type": kind }))
        .send()
        .await
        .expect("Failed to send request")
}

async fn messages(
    client: &Client,
    server: &TestServer,
    viewer: &str,
    limit: usize,
) -> Vec<Value> {
    client
        .get(format!("{}/messages?limit={limit}", server.base_url()))
        .header("User", viewer)
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON")
}

fn texts(messages: &[Value]) -> Vec<&str> {
    messages
        .iter()
        .map(|m| m["text"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /api/health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start(&[]).await;
    let client = Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_join_and_list_participants() {
    // テスト項目: 参加すると 201、同名の再参加は 409、一覧に表示される
    // given (前提条件):
    let server = TestServer::start(&[]).await;
    let client = Client::new();

    // when (操作):
    let first = join(&client, &server, "Ana").await;
    let second = join(&client, &server, "Ana").await;
    let empty = join(&client, &server, "").await;

    // then (期待する結果):
    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(empty, StatusCode::UNPROCESSABLE_ENTITY);

    let participants: Vec<Value> = client
        .get(format!("{}/participants", server.base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0]["name"], "Ana");
    assert!(participants[0]["lastStatus"].is_i64());
}

#[tokio::test]
async fn test_room_scenario_visibility() {
    // テスト項目: 入室通知・全体宛・個人宛メッセージの可視性が閲覧者ごとに正しい
    // given (前提条件):
    let server = TestServer::start(&[]).await;
    let client = Client::new();
    join(&client, &server, "Ana").await;

    // when (操作):
    let hi = send(&client, &server, "Ana", "Todos", "hi", "message").await;

    // then (期待する結果): 入室通知 + "hi"
    assert_eq!(hi.status(), StatusCode::CREATED);
    let for_ana = messages(&client, &server, "Ana", 10).await;
    assert_eq!(for_ana.len(), 2);
    assert_eq!(for_ana[0]["type"], "status");
    assert_eq!(for_ana[0]["from"], "Ana");
    assert_eq!(for_ana[1]["text"], "hi");
    assert_eq!(for_ana[1]["time"].as_str().unwrap().len(), 8);

    // when (操作): Bob が入室し、Ana が Bob に個人宛を送る
    join(&client, &server, "Bob").await;
    let secret = send(&client, &server, "Ana", "Bob", "secret", "private_message").await;
    let from_carla = send(&client, &server, "Carla", "Todos", "hey", "message").await;

    // then (期待する結果):
    assert_eq!(secret.status(), StatusCode::CREATED);
    assert_eq!(from_carla.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(texts(&messages(&client, &server, "Bob", 10).await).contains(&"secret"));
    assert!(!texts(&messages(&client, &server, "Carla", 10).await).contains(&"secret"));
}

#[tokio::test]
async fn test_send_message_validation() {
    // テスト項目: 不正な type・空の本文・User ヘッダー無しは 422
    // given (前提条件):
    let server = TestServer::start(&[]).await;
    let client = Client::new();
    join(&client, &server, "Ana").await;

    // when (操作):
    let bad_type = send(&client, &server, "Ana", "Todos", "hi", "shout").await;
    let empty_text = send(&client, &server, "Ana", "Todos", "", "message").await;
    let system_type = send(&client, &server, "Ana", "Todos", "fake", "status").await;
    let no_user = client
        .post(format!("{}/messages", server.base_url()))
        .json(&json!({ "to": "Todos", "text": "hi", "type": "message" }))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(bad_type.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(empty_text.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(system_type.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(no_user.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unreadable_json_bodies_are_unprocessable() {
    // テスト項目: Content-Type 無し・壊れた JSON の本文も 422 になる（415 / 400 にならない）
    // given (前提条件):
    let server = TestServer::start(&[]).await;
    let client = Client::new();
    join(&client, &server, "Ana").await;

    // when (操作):
    let join_without_content_type = client
        .post(format!("{}/participants", server.base_url()))
        .body(r#"{"name":"Bob"}"#)
        .send()
        .await
        .expect("Failed to send request");
    let join_malformed = client
        .post(format!("{}/participants", server.base_url()))
        .header("Content-Type", "application/json")
        .body(r#"{"name":"#)
        .send()
        .await
        .expect("Failed to send request");
    let send_without_content_type = client
        .post(format!("{}/messages", server.base_url()))
        .header("User", "Ana")
        .body(r#"{"to":"Todos","text":"hi","type":"message"}"#)
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果): エラー本文は JSON で返り、参加者は増えていない
    assert_eq!(
        join_without_content_type.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(join_malformed.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        send_without_content_type.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    let body: Value = join_malformed.json().await.expect("Failed to parse JSON");
    assert!(body["error"].is_string());

    let participants: Vec<Value> = client
        .get(format!("{}/participants", server.base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(participants.len(), 1);
}

#[tokio::test]
async fn test_edit_and_delete_ownership() {
    // テスト項目: 他人の編集・削除は 401、本人は成功し一覧に反映される
    // given (前提条件):
    let server = TestServer::start(&[]).await;
    let client = Client::new();
    join(&client, &server, "Ana").await;
    join(&client, &server, "Bob").await;
    let created: Value = send(&client, &server, "Ana", "Todos", "helo", "message")
        .await
        .json()
        .await
        .expect("Failed to parse JSON");
    let url = format!(
        "{}/messages/{}",
        server.base_url(),
        created["id"].as_str().unwrap()
    );

    // when (操作): Bob が編集・削除を試みる
    let edit_by_bob = client
        .put(&url)
        .header("User", "Bob")
        .json(&json!({ "text": "pwned" }))
        .send()
        .await
        .expect("Failed to send request");
    let delete_by_bob = client
        .delete(&url)
        .header("User", "Bob")
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(edit_by_bob.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(delete_by_bob.status(), StatusCode::UNAUTHORIZED);
    assert!(texts(&messages(&client, &server, "Ana", 0).await).contains(&"helo"));

    // when (操作): Ana が編集し、その後削除する
    let edit_by_ana = client
        .put(&url)
        .header("User", "Ana")
        .json(&json!({ "text": "hello" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(edit_by_ana.status(), StatusCode::OK);
    assert!(texts(&messages(&client, &server, "Ana", 0).await).contains(&"hello"));

    let delete_by_ana = client
        .delete(&url)
        .header("User", "Ana")
        .send()
        .await
        .expect("Failed to send request");
    let delete_again = client
        .delete(&url)
        .header("User", "Ana")
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(delete_by_ana.status(), StatusCode::OK);
    assert_eq!(delete_again.status(), StatusCode::NOT_FOUND);
    assert!(!texts(&messages(&client, &server, "Ana", 0).await).contains(&"hello"));
}

#[tokio::test]
async fn test_status_unknown_participant_not_found() {
    // テスト項目: 未登録の参加者の /status は 404 で、メッセージは増えない
    // given (前提条件):
    let server = TestServer::start(&[]).await;
    let client = Client::new();

    // when (操作):
    let response = client
        .post(format!("{}/status", server.base_url()))
        .header("User", "Ghost")
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(messages(&client, &server, "Ghost", 0).await.is_empty());
}

#[tokio::test]
async fn test_inactive_participant_is_swept() {
    // テスト項目: ハートビートの無い参加者は削除され、退室通知が 1 件だけ追加される
    // given (前提条件):
    let server = TestServer::start(&[
        "--participant-ttl-secs",
        "1",
        "--sweep-interval-secs",
        "1",
    ])
    .await;
    let client = Client::new();
    join(&client, &server, "Ana").await;

    // when (操作): TTL と sweep 間隔を十分に超えるまで待つ
    let mut gone = false;
    for _ in 0..40 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let participants: Vec<Value> = client
            .get(format!("{}/participants", server.base_url()))
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse JSON");
        if participants.is_empty() {
            gone = true;
            break;
        }
    }

    // then (期待する結果):
    assert!(gone, "participant should have been swept");
    tokio::time::sleep(Duration::from_millis(100)).await;
    let log = messages(&client, &server, "Ana", 0).await;
    let departures: Vec<&Value> = log
        .iter()
        .filter(|m| m["type"] == "status" && m["text"] == "left the room...")
        .collect();
    assert_eq!(departures.len(), 1);
    assert_eq!(departures[0]["from"], "Ana");

    let heartbeat = client
        .post(format!("{}/status", server.base_url()))
        .header("User", "Ana")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(heartbeat.status(), StatusCode::NOT_FOUND);
}
