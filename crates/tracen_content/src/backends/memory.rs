use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracen_core::{ContentClient, ContentEntry, ContentQuery, Direction, EntryPage, Result};

use crate::wire::EntriesResponse;

/// Serves queries from entries held in memory. Fixture files use the same
/// JSON shape as a delivery API response.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClient {
    entries: Arc<RwLock<Vec<ContentEntry>>>,
}

impl InMemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<ContentEntry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    pub fn from_fixture_json(json: &str) -> Result<Self> {
        let response: EntriesResponse = serde_json::from_str(json)?;
        Ok(Self::with_entries(response.into_page().items))
    }

    pub fn from_fixture_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_fixture_json(&json)
    }

    pub async fn insert(&self, entry: ContentEntry) {
        let mut entries = self.entries.write().await;
        if let Some(existing) = entries.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry;
        } else {
            entries.push(entry);
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// Looks up `sys.*` and `fields.*` paths as used in filters and sort keys.
fn lookup(entry: &ContentEntry, path: &str) -> Option<Value> {
    if let Some(field) = path.strip_prefix("fields.") {
        return entry.field(field).cloned();
    }
    match path {
        "sys.id" => Some(Value::String(entry.id.clone())),
        "sys.contentType.sys.id" => Some(Value::String(entry.content_type.clone())),
        "sys.createdAt" => entry.created_at.map(|at| Value::String(at.to_rfc3339())),
        "sys.updatedAt" => entry.updated_at.map(|at| Value::String(at.to_rfc3339())),
        _ => None,
    }
}

fn matches(value: Option<Value>, expected: &str) -> bool {
    match value {
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        Some(Value::Bool(b)) => b.to_string() == expected,
        _ => false,
    }
}

fn compare(a: &Option<Value>, b: &Option<Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl ContentClient for InMemoryClient {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get_entries(&self, query: &ContentQuery) -> Result<EntryPage> {
        query.validate()?;
        let entries = self.entries.read().await;

        let mut items: Vec<ContentEntry> = entries
            .iter()
            .filter(|e| e.content_type == query.content_type)
            .filter(|e| {
                query
                    .filter
                    .as_ref()
                    .map_or(true, |f| matches(lookup(e, &f.field), &f.value))
            })
            .cloned()
            .collect();

        if let Some(order) = &query.order {
            // Stable sort; entries without the key go last in either direction.
            items.sort_by(|a, b| {
                let (ka, kb) = (lookup(a, &order.field), lookup(b, &order.field));
                match (order.direction, &ka, &kb) {
                    (Direction::Descending, Some(_), Some(_)) => compare(&kb, &ka),
                    _ => compare(&ka, &kb),
                }
            });
        }

        let total = items.len() as u64;
        if let Some(limit) = query.limit {
            items.truncate(limit.get() as usize);
        }
        let limit = items.len() as u64;

        Ok(EntryPage {
            items,
            total,
            skip: 0,
            limit,
        })
    }
}
