//! Delivery API response shapes and link resolution.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracen_core::{ContentEntry, EntryPage};

/// How deep linked entries are followed through `includes`.
const MAX_LINK_DEPTH: usize = 2;

#[derive(Debug, Deserialize)]
pub struct EntriesResponse {
    #[serde(default)]
    pub items: Vec<RawEntry>,
    #[serde(default)]
    pub includes: Includes,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct Includes {
    #[serde(rename = "Asset", default)]
    pub assets: Vec<Value>,
    #[serde(rename = "Entry", default)]
    pub entries: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawEntry {
    pub sys: EntrySys,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySys {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub content_type: Option<ContentTypeLink>,
}

#[derive(Debug, Deserialize)]
pub struct ContentTypeLink {
    pub sys: LinkSys,
}

#[derive(Debug, Deserialize)]
pub struct LinkSys {
    pub id: String,
}

type LinkKey = (String, String);

struct Linker {
    targets: HashMap<LinkKey, Value>,
}

impl Linker {
    fn new(includes: &Includes) -> Self {
        let mut targets = HashMap::new();
        for (link_type, values) in [("Asset", &includes.assets), ("Entry", &includes.entries)] {
            for value in values {
                if let Some(id) = sys_str(value, "id") {
                    targets.insert((link_type.to_string(), id.to_string()), value.clone());
                }
            }
        }
        Self { targets }
    }

    fn resolve(&self, value: &Value, depth: usize) -> Value {
        match value {
            Value::Array(values) => Value::Array(values.iter().map(|v| self.resolve(v, depth)).collect()),
            Value::Object(_) if sys_str(value, "type") == Some("Link") => {
                let key = (
                    sys_str(value, "linkType").unwrap_or_default().to_string(),
                    sys_str(value, "id").unwrap_or_default().to_string(),
                );
                match self.targets.get(&key) {
                    Some(target) if depth < MAX_LINK_DEPTH => self.resolve_fields(target, depth + 1),
                    Some(target) => target.clone(),
                    None => {
                        tracing::debug!("Unresolved {} link {}", key.0, key.1);
                        value.clone()
                    }
                }
            }
            _ => value.clone(),
        }
    }

    fn resolve_fields(&self, target: &Value, depth: usize) -> Value {
        let mut target = target.clone();
        if let Some(Value::Object(fields)) = target.get_mut("fields") {
            for value in fields.values_mut() {
                *value = self.resolve(value, depth);
            }
        }
        target
    }
}

fn sys_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get("sys").and_then(|sys| sys.get(key)).and_then(Value::as_str)
}

impl EntriesResponse {
    /// Converts the response into entries whose link fields are replaced by
    /// the included assets and entries they point to.
    pub fn into_page(self) -> EntryPage {
        let linker = Linker::new(&self.includes);
        let items = self
            .items
            .into_iter()
            .map(|raw| {
                let fields = raw
                    .fields
                    .iter()
                    .map(|(name, value)| (name.clone(), linker.resolve(value, 0)))
                    .collect();
                ContentEntry {
                    id: raw.sys.id,
                    content_type: raw.sys.content_type.map(|ct| ct.sys.id).unwrap_or_default(),
                    created_at: raw.sys.created_at,
                    updated_at: raw.sys.updated_at,
                    fields,
                }
            })
            .collect();

        EntryPage {
            items,
            total: self.total,
            skip: self.skip,
            limit: self.limit,
        }
    }
}
