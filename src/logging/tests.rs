use crate::logging::quickwit::{encode_ndjson, index_for, QuickwitLayer, Record};
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing_subscriber::layer::SubscriberExt;

fn routes() -> HashMap<String, String> {
    HashMap::from([
        (String::from("http_request"), String::from("http_requests")),
        (String::from("round_scored"), String::from("rounds_scored")),
    ])
}

fn record(value: serde_json::Value) -> Record {
    value.as_object().cloned().unwrap_or_default()
}

#[test]
fn test_index_for() {
    let routes = routes();

    assert_eq!(
        index_for("task", &routes, &record(json!({ "task": "http_request" }))),
        Some("http_requests")
    );
    assert_eq!(
        index_for("task", &routes, &record(json!({ "task": "unknown" }))),
        None
    );
    assert_eq!(
        index_for("task", &routes, &record(json!({ "message": "hi" }))),
        None
    );
    assert_eq!(index_for("task", &routes, &record(json!({ "task": 3 }))), None);
}

#[test]
fn test_encode_ndjson() {
    let records = vec![
        record(json!({ "a": 1 })),
        record(json!({ "b": "two" })),
    ];

    let body = encode_ndjson(&records);

    assert_eq!(String::from_utf8(body).unwrap(), "{\"a\":1}\n{\"b\":\"two\"}\n");
}

#[test]
fn test_layer_only_forwards_routed_events() {
    let (sender, mut receiver) = mpsc::channel(16);
    let layer = QuickwitLayer::from_parts(sender, String::from("task"), routes());
    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(task = "round_scored", distance_km = 343.5, score = 4914_u64);
        tracing::info!(task = "something_else", score = 1_u64);
        tracing::info!("No marker at all.");
    });

    let document = receiver.try_recv().unwrap();
    assert_eq!(document.index_id, "rounds_scored");
    assert_eq!(document.record["task"], json!("round_scored"));
    assert_eq!(document.record["score"], json!(4914));
    assert_eq!(document.record["distance_km"], json!(343.5));
    assert!(document.record.contains_key("timestamp"));
    assert!(receiver.try_recv().is_err());
}
