use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracen_core::{ContentClient, ContentEntry, ContentQuery, EntryPage, Error, Result, ViewState};

use crate::adapter::SectionAdapter;
use crate::sections::Section;

/// A client whose every query fails at the network layer.
pub struct FailingClient;

#[async_trait]
impl ContentClient for FailingClient {
    fn name(&self) -> &str {
        "failing"
    }

    async fn get_entries(&self, _query: &ContentQuery) -> Result<EntryPage> {
        Err(Error::Io(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

/// Counts queries and answers each with an empty page.
#[derive(Default)]
pub struct CountingClient {
    calls: AtomicUsize,
}

impl CountingClient {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentClient for CountingClient {
    fn name(&self) -> &str {
        "counting"
    }

    async fn get_entries(&self, _query: &ContentQuery) -> Result<EntryPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(EntryPage::from_items(Vec::new()))
    }
}

pub fn entry_with(id: &str, content_type: &str, fields: Value) -> ContentEntry {
    let mut entry = ContentEntry::new(id, content_type);
    if let Value::Object(map) = fields {
        for (name, value) in map {
            entry = entry.with_field(&name, value);
        }
    }
    entry
}

pub async fn load_with<S: Section + 'static>(section: S, client: Arc<dyn ContentClient>) -> ViewState {
    SectionAdapter::new(Box::new(section), client).load().await
}
