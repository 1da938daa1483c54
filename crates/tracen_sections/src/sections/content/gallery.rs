use tracen_core::normalize::resolve_asset_url;
use tracen_core::{ContentEntry, ContentQuery, DisplayRecord, FallbackPolicy, Result, Sort};

use crate::sections::{Messages, Section};

pub const SLOTS: usize = 5;

/// Grid cell shape of each slot, in slot order.
pub const LAYOUT: [&str; SLOTS] = ["large", "small", "small", "tall", "medium"];

const PLACEHOLDERS: [(&str, &str); SLOTS] = [
    ("https://picsum.photos/600/600?random=10", "Science Lab"),
    ("https://picsum.photos/600/400?random=11", "Sports"),
    ("https://picsum.photos/600/400?random=12", "Classroom"),
    ("https://picsum.photos/600/800?random=13", "Library"),
    ("https://picsum.photos/600/600?random=14", "Art Class"),
];

pub fn placeholders() -> Vec<DisplayRecord> {
    PLACEHOLDERS
        .iter()
        .zip(LAYOUT)
        .enumerate()
        .map(|(slot, ((url, alt), size))| {
            DisplayRecord::new(format!("placeholder-{}", slot), *alt)
                .with_subtitle(size)
                .with_image(*url)
        })
        .collect()
}

/// The five-cell campus photo grid. Shows placeholders until photos arrive
/// and keeps them if the fetch fails.
#[derive(Debug, Clone)]
pub struct Gallery {
    fallback: FallbackPolicy,
}

impl Gallery {
    pub fn new() -> Self {
        Self {
            fallback: FallbackPolicy::slots(placeholders()).seeded(),
        }
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for Gallery {
    fn name(&self) -> &str {
        "gallery"
    }

    fn query(&self) -> ContentQuery {
        ContentQuery::new("galleryImage")
            .order(Sort::asc("fields.order"))
            .limit(SLOTS as u32)
    }

    fn normalize(&self, position: usize, entry: &ContentEntry) -> Result<Option<DisplayRecord>> {
        let slot = self.fallback.placeholder(position);
        let asset = entry.asset("image");
        let image = resolve_asset_url(
            asset.as_ref().and_then(|a| a.url.as_deref()),
            slot.map(|p| p.image.as_str()).unwrap_or(PLACEHOLDERS[0].0),
        );
        let title = entry
            .text("title")
            .map(str::to_string)
            .or_else(|| asset.and_then(|a| a.title))
            .unwrap_or_default();

        Ok(Some(DisplayRecord {
            id: entry.id.clone(),
            title,
            subtitle: LAYOUT[position % SLOTS].to_string(),
            image,
            ..DisplayRecord::default()
        }))
    }

    fn messages(&self) -> Messages {
        Messages::new(
            "Loading photos...",
            "No photos yet.",
            "Photos could not be loaded. Please try again later.",
        )
    }

    fn fallback(&self) -> FallbackPolicy {
        self.fallback.clone()
    }
}
