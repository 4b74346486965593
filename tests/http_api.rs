//! HTTP API integration tests.
//!
//! Tests for the message board endpoints: join, heartbeat, participant
//! listing, message posting, and per-viewer message retrieval.

mod fixtures;
use fixtures::TestServer;

use serde_json::{Value, json};

async fn join(client: &reqwest::Client, base: &str, name: &str) -> reqwest::Response {
    client
        .post(format!("{base}/participants"))
        .json(&json!({"name": name}))
        .send()
        .await
        .expect("Failed to send request")
}

async fn messages_for(client: &reqwest::Client, base: &str, viewer: &str) -> Vec<Value> {
    let response = client
        .get(format!("{base}/messages"))
        .header("user", viewer)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    response.json().await.expect("Failed to parse JSON")
}

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start(19090).await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_join_registers_participant_and_status_notice() {
    // テスト項目: 入室すると参加者一覧と status 通知に反映される
    // given (前提条件):
    let server = TestServer::start(19091).await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = join(&client, &server.base_url(), "Ana").await;

    // then (期待する結果):
    assert_eq!(response.status(), 200);

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

    let messages = messages_for(&client, &server.base_url(), "Ana").await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["from"], "Ana");
    assert_eq!(messages[0]["to"], "Todos");
    assert_eq!(messages[0]["type"], "status");
    assert_eq!(messages[0]["text"], "entra na sala...");
}

#[tokio::test]
async fn test_join_duplicate_name_returns_conflict() {
    // テスト項目: 使用中の名前での入室は 409 になる
    // given (前提条件):
    let server = TestServer::start(19092).await;
    let client = reqwest::Client::new();
    join(&client, &server.base_url(), "Ana").await;

    // when (操作):
    let response = join(&client, &server.base_url(), "Ana").await;

    // then (期待する結果):
    assert_eq!(response.status(), 409);
    assert_eq!(response.text().await.unwrap(), "Name is already in use");
}

#[tokio::test]
async fn test_join_sanitizes_markup_before_uniqueness_check() {
    // テスト項目: 名前はサニタイズ後に一意性が判定される
    // given (前提条件): タグ付きの "Ana" が入室済み
    let server = TestServer::start(19093).await;
    let client = reqwest::Client::new();
    let response = join(&client, &server.base_url(), " <b>Ana</b> ").await;
    assert_eq!(response.status(), 200);

    // when (操作): プレーンな "Ana" で入室を試みる
    let response = join(&client, &server.base_url(), "Ana").await;

    // then (期待する結果): サニタイズ後は同名なので 409
    assert_eq!(response.status(), 409);
}

#[tokio::test]
async fn test_join_rejects_invalid_names() {
    // テスト項目: 空・欠落・文字列以外の名前は 400 になる
    // given (前提条件):
    let server = TestServer::start(19094).await;
    let client = reqwest::Client::new();
    let url = format!("{}/participants", server.base_url());

    // when (操作) / then (期待する結果):
    // タグのみ（空にサニタイズされる）
    let response = client
        .post(&url)
        .json(&json!({"name": "<i></i>"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // name フィールド欠落
    let response = client.post(&url).json(&json!({})).send().await.unwrap();
    assert_eq!(response.status(), 400);

    // 文字列以外
    let response = client
        .post(&url)
        .json(&json!({"name": 42}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_heartbeat_requires_known_user() {
    // テスト項目: ハートビートは登録済みの参加者にのみ 200 を返す
    // given (前提条件):
    let server = TestServer::start(19095).await;
    let client = reqwest::Client::new();
    let url = format!("{}/status", server.base_url());

    // when (操作): 未登録のユーザでハートビート
    let response = client.post(&url).header("user", "Ghost").send().await.unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "User not found");

    // 入室後は 200
    join(&client, &server.base_url(), "Ana").await;
    let response = client.post(&url).header("user", "Ana").send().await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_post_broadcast_message_visible_to_everyone() {
    // テスト項目: 公開メッセージは入室していない閲覧者にも見える
    // given (前提条件):
    let server = TestServer::start(19096).await;
    let client = reqwest::Client::new();
    join(&client, &server.base_url(), "Ana").await;

    // when (操作):
    let response = client
        .post(format!("{}/messages", server.base_url()))
        .header("user", "Ana")
        .json(&json!({"to": "Todos", "text": "oi galera", "type": "message"}))
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let messages = messages_for(&client, &server.base_url(), "Bob").await;
    assert!(messages.iter().any(|m| m["text"] == "oi galera"));
}

#[tokio::test]
async fn test_private_message_visibility() {
    // テスト項目: private_message は送信者と宛先にのみ見える
    // given (前提条件):
    let server = TestServer::start(19097).await;
    let client = reqwest::Client::new();
    join(&client, &server.base_url(), "Ana").await;
    join(&client, &server.base_url(), "Bob").await;

    // when (操作): Ana が Bob 宛てのプライベートメッセージを投稿
    let response = client
        .post(format!("{}/messages", server.base_url()))
        .header("user", "Ana")
        .json(&json!({"to": "Bob", "text": "segredo", "type": "private_message"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // then (期待する結果):
    let for_carol = messages_for(&client, &server.base_url(), "Carol").await;
    assert!(!for_carol.iter().any(|m| m["text"] == "segredo"));

    let for_bob = messages_for(&client, &server.base_url(), "Bob").await;
    assert!(for_bob.iter().any(|m| m["text"] == "segredo"));

    let for_ana = messages_for(&client, &server.base_url(), "Ana").await;
    assert!(for_ana.iter().any(|m| m["text"] == "segredo"));
}

#[tokio::test]
async fn test_post_rejects_invalid_payloads() {
    // テスト項目: 不正な type・欠落フィールドは 400 になる
    // given (前提条件):
    let server = TestServer::start(19098).await;
    let client = reqwest::Client::new();
    join(&client, &server.base_url(), "Ana").await;
    let url = format!("{}/messages", server.base_url());

    // when (操作) / then (期待する結果):
    // クライアントは status を指定できない
    let response = client
        .post(&url)
        .header("user", "Ana")
        .json(&json!({"to": "Todos", "text": "oi", "type": "status"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // text フィールド欠落
    let response = client
        .post(&url)
        .header("user", "Ana")
        .json(&json!({"to": "Todos", "type": "message"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    // 未知の type
    let response = client
        .post(&url)
        .header("user", "Ana")
        .json(&json!({"to": "Todos", "text": "oi", "type": "shout"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_post_from_unregistered_sender_rejected() {
    // テスト項目: 在室していない送信者の投稿は 400 になる
    // given (前提条件):
    let server = TestServer::start(19099).await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .post(format!("{}/messages", server.base_url()))
        .header("user", "Ghost")
        .json(&json!({"to": "Todos", "text": "oi", "type": "message"}))
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Sender is not on the list");
}

#[tokio::test]
async fn test_messages_limit_returns_tail_in_order() {
    // テスト項目: limit 指定時は可視列の末尾 N 件が元の順序で返る
    // given (前提条件): 入室通知 1 件 + 公開メッセージ 4 件
    let server = TestServer::start(19100).await;
    let client = reqwest::Client::new();
    join(&client, &server.base_url(), "Ana").await;
    for text in ["m1", "m2", "m3", "m4"] {
        let response = client
            .post(format!("{}/messages", server.base_url()))
            .header("user", "Ana")
            .json(&json!({"to": "Todos", "text": text, "type": "message"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }

    // when (操作):
    let response = client
        .get(format!("{}/messages?limit=2", server.base_url()))
        .header("user", "Bob")
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let messages: Vec<Value> = response.json().await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["text"], "m3");
    assert_eq!(messages[1]["text"], "m4");
}

#[tokio::test]
async fn test_messages_requires_viewer_identity() {
    // テスト項目: user ヘッダの無い閲覧リクエストは 400 になる
    // given (前提条件):
    let server = TestServer::start(19101).await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/messages", server.base_url()))
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_messages_ignores_unparsable_limit() {
    // テスト項目: 数値でない limit は無視され、全可視メッセージが返る
    // given (前提条件):
    let server = TestServer::start(19102).await;
    let client = reqwest::Client::new();
    join(&client, &server.base_url(), "Ana").await;

    // when (操作):
    let response = client
        .get(format!("{}/messages?limit=abc", server.base_url()))
        .header("user", "Ana")
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let messages: Vec<Value> = response.json().await.unwrap();
    assert_eq!(messages.len(), 1);
}
