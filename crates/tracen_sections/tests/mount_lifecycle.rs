use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;
use tracen_content::InMemoryClient;
use tracen_core::{ContentClient, ContentEntry, ContentQuery, EntryPage, Phase, Result};
use tracen_sections::sections::content::Faq;
use tracen_sections::Mount;

/// Holds every query until the test opens the gate.
struct GatedClient {
    inner: InMemoryClient,
    started: Notify,
    gate: Notify,
}

impl GatedClient {
    fn new() -> Self {
        let entries = vec![
            ContentEntry::new("q1", "faq")
                .with_field("question", json!("When does the school year start?"))
                .with_field("answer", json!("In the first week of September."))
                .with_field("order", json!(1)),
            ContentEntry::new("q2", "faq")
                .with_field("question", json!("Is there a bus service?"))
                .with_field("order", json!(2)),
        ];
        Self {
            inner: InMemoryClient::with_entries(entries),
            started: Notify::new(),
            gate: Notify::new(),
        }
    }
}

#[async_trait]
impl ContentClient for GatedClient {
    fn name(&self) -> &str {
        "gated"
    }

    async fn get_entries(&self, query: &ContentQuery) -> Result<EntryPage> {
        self.started.notify_one();
        self.gate.notified().await;
        self.inner.get_entries(query).await
    }
}

#[tokio::test]
async fn test_unmount_before_resolution_leaves_state_untouched() {
    let client = Arc::new(GatedClient::new());
    let mount = Mount::spawn(Box::new(Faq), client.clone());
    let handle = mount.handle();

    client.started.notified().await;
    let task = mount.unmount().await.expect("fetch task is returned");

    client.gate.notify_one();
    task.await.unwrap();

    let view = handle.snapshot().await;
    assert_eq!(view.phase, Phase::Loading);
    assert!(view.items.is_empty());
    assert_eq!(view.notice.unwrap().message, "Loading questions...");
}

#[tokio::test]
async fn test_settled_returns_final_state() {
    let client = Arc::new(GatedClient::new());
    let mut mount = Mount::spawn(Box::new(Faq), client.clone());

    client.started.notified().await;
    assert_eq!(mount.snapshot().await.phase, Phase::Loading);

    client.gate.notify_one();
    let view = mount.settled().await;
    assert_eq!(view.phase, Phase::Success);
    let titles: Vec<_> = view.items.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["When does the school year start?", "Is there a bus service?"]);
    assert_eq!(view.items[1].body, "No additional details provided.");
}

#[tokio::test]
async fn test_dropped_mount_discards_late_response() {
    let client = Arc::new(GatedClient::new());
    let mount = Mount::spawn(Box::new(Faq), client.clone());
    let handle = mount.handle();

    client.started.notified().await;
    drop(mount);
    client.gate.notify_one();

    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(handle.snapshot().await.phase, Phase::Loading);
}
