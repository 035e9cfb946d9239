//! Ships selected tracing events to Quickwit indexes.
//!
//! Events are picked by the value of a marker field (`task = "http_request"` and so on); each
//! marker value maps to one index. Everything else only goes to the other layers.

use crate::logging::consts::QUICKWIT_CHANNEL_CAPACITY;
use reqwest::Client;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::field::{Field, Visit};
use tracing_core::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;
use url::Url;

pub type Record = Map<String, Value>;

pub struct QuickwitLayerBuilder {
    quickwit_url: Url,
    marker_field: String,
    routes: HashMap<String, String>,
    batch_size: usize,
    flush_interval: Duration,
}

impl QuickwitLayerBuilder {
    pub fn new(quickwit_url: Url) -> Self {
        Self {
            quickwit_url,
            marker_field: String::from("task"),
            routes: HashMap::new(),
            batch_size: 1,
            flush_interval: Duration::from_secs(1),
        }
    }

    pub fn marker_field(mut self, field: &str) -> Self {
        self.marker_field = field.to_string();
        self
    }

    /// Sends events whose marker field equals `marker` to `index_id`.
    pub fn route(mut self, marker: &str, index_id: &str) -> Self {
        self.routes.insert(marker.to_string(), index_id.to_string());
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Partial batches are sent at least this often.
    pub fn flush_interval(mut self, flush_interval: Duration) -> Self {
        self.flush_interval = flush_interval;
        self
    }

    /// Spawns the shipping task, so this has to be called from within a tokio runtime.
    pub fn build(self) -> QuickwitLayer {
        let (sender, receiver) = mpsc::channel(QUICKWIT_CHANNEL_CAPACITY);
        let ingest_client = IngestClient {
            http_client: Client::new(),
            quickwit_url: self.quickwit_url,
        };
        tokio::spawn(ship(
            ingest_client,
            receiver,
            self.batch_size,
            self.flush_interval,
        ));
        QuickwitLayer::from_parts(sender, self.marker_field, self.routes)
    }
}

#[derive(Debug)]
pub struct Document {
    pub index_id: String,
    pub record: Record,
}

pub struct QuickwitLayer {
    sender: mpsc::Sender<Document>,
    marker_field: String,
    routes: HashMap<String, String>,
}

impl QuickwitLayer {
    pub(crate) fn from_parts(
        sender: mpsc::Sender<Document>,
        marker_field: String,
        routes: HashMap<String, String>,
    ) -> Self {
        Self {
            sender,
            marker_field,
            routes,
        }
    }
}

impl<S: Subscriber> Layer<S> for QuickwitLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);
        let Some(index_id) = index_for(&self.marker_field, &self.routes, &visitor.record) else {
            return;
        };
        let mut record = visitor.record;
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        record.insert(String::from("timestamp"), timestamp.into());
        // A full channel drops the event, request handling never waits on log shipping.
        let _ = self.sender.try_send(Document {
            index_id: index_id.to_string(),
            record,
        });
    }
}

pub fn index_for<'r>(
    marker_field: &str,
    routes: &'r HashMap<String, String>,
    record: &Record,
) -> Option<&'r str> {
    record
        .get(marker_field)
        .and_then(Value::as_str)
        .and_then(|marker| routes.get(marker))
        .map(String::as_str)
}

pub fn encode_ndjson(records: &[Record]) -> Vec<u8> {
    let mut body = Vec::new();
    for record in records {
        if serde_json::to_writer(&mut body, record).is_ok() {
            body.push(b'\n');
        }
    }
    body
}

struct IngestClient {
    http_client: Client,
    quickwit_url: Url,
}

impl IngestClient {
    async fn ingest(&self, index_id: &str, records: &[Record]) {
        let url = match self
            .quickwit_url
            .join(&format!("api/v1/{index_id}/ingest"))
        {
            Ok(url) => url,
            Err(err) => {
                eprintln!("Bad Quickwit ingest URL for index `{index_id}`: {err}");
                return;
            }
        };
        let result = self
            .http_client
            .post(url)
            .body(encode_ndjson(records))
            .send()
            .await
            .and_then(|response| response.error_for_status());
        if let Err(err) = result {
            eprintln!(
                "Failed to ship {} log records to Quickwit index `{index_id}`: {err}",
                records.len()
            );
        }
    }
}

async fn ship(
    ingest_client: IngestClient,
    mut receiver: mpsc::Receiver<Document>,
    batch_size: usize,
    flush_interval: Duration,
) {
    let mut buffers: HashMap<String, Vec<Record>> = HashMap::new();
    let mut ticker = tokio::time::interval(flush_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            document = receiver.recv() => {
                let Some(Document { index_id, record }) = document else {
                    break;
                };
                let buffer = buffers.entry(index_id.clone()).or_default();
                buffer.push(record);
                if buffer.len() >= batch_size {
                    let batch = std::mem::take(buffer);
                    ingest_client.ingest(&index_id, &batch).await;
                }
            }
            _ = ticker.tick() => {
                flush_all(&ingest_client, &mut buffers).await;
            }
        }
    }

    flush_all(&ingest_client, &mut buffers).await;
}

async fn flush_all(ingest_client: &IngestClient, buffers: &mut HashMap<String, Vec<Record>>) {
    for (index_id, buffer) in buffers.iter_mut() {
        if buffer.is_empty() {
            continue;
        }
        let batch = std::mem::take(buffer);
        ingest_client.ingest(index_id, &batch).await;
    }
}

#[derive(Default)]
struct RecordVisitor {
    record: Record,
}

impl RecordVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        self.record.insert(field.name().to_string(), value);
    }
}

impl Visit for RecordVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        // NaN and infinities have no JSON representation.
        let value = serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number);
        self.insert(field, value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_u128(&mut self, field: &Field, value: u128) {
        // Quickwit stores u64.
        self.insert(field, u64::try_from(value).unwrap_or(u64::MAX).into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.insert(field, format!("{value:?}").into());
    }
}
