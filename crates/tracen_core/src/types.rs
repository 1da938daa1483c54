use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of the content repository, as handed over by a client.
///
/// Linked assets are expected to be resolved in place, so an image field
/// holds `{ "sys": { "id": .. }, "fields": { "file": { "url": .. } } }`
/// rather than a bare link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub id: String,
    pub content_type: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub fields: Map<String, Value>,
}

impl ContentEntry {
    pub fn new(id: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content_type: content_type.into(),
            created_at: None,
            updated_at: None,
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Text value of a field, `None` when absent, null, blank or not a string.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.field(name)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(Value::as_f64)
    }

    pub fn asset(&self, name: &str) -> Option<AssetRef> {
        self.field(name).and_then(AssetRef::from_value)
    }
}

/// A resolved reference from an entry field to a binary resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub mime_type: Option<String>,
}

impl AssetRef {
    /// Reads the nested asset shape. Returns `None` only when the value is not
    /// an object at all; partial shapes yield an `AssetRef` with missing parts.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let id = object
            .get("sys")
            .and_then(|sys| sys.get("id"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let fields = object.get("fields");
        let title = fields
            .and_then(|f| f.get("title"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let file = fields.and_then(|f| f.get("file"));
        let url = file
            .and_then(|f| f.get("url"))
            .and_then(Value::as_str)
            .filter(|u| !u.trim().is_empty())
            .map(str::to_string);
        let mime_type = file
            .and_then(|f| f.get("contentType"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Self { id, title, url, mime_type })
    }
}

/// Flat, display-ready projection of a [`ContentEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub image: String,
    pub body: String,
    pub slug: Option<String>,
    pub link: Option<String>,
}

impl DisplayRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// One page of query results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryPage {
    pub items: Vec<ContentEntry>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl EntryPage {
    pub fn from_items(items: Vec<ContentEntry>) -> Self {
        let total = items.len() as u64;
        Self {
            items,
            total,
            skip: 0,
            limit: total,
        }
    }
}
