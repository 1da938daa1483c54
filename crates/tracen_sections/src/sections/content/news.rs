use tracen_core::normalize::{asset_url, date_field, text};
use tracen_core::{ContentEntry, ContentQuery, DisplayRecord, Result, Sort};

use crate::sections::{Messages, Section};

pub const CARD_IMAGE_FALLBACK: &str = "https://picsum.photos/600/400";

/// Projection shared by the news cards and the article page.
pub(crate) fn news_record(entry: &ContentEntry, image_fallback: &str) -> Result<DisplayRecord> {
    Ok(DisplayRecord {
        id: entry.id.clone(),
        title: text(entry, "title"),
        subtitle: text(entry, "category"),
        date: date_field(entry, "date")?,
        image: asset_url(entry, "image", image_fallback),
        body: text(entry, "description"),
        slug: entry.text("slug").map(str::to_string),
        link: None,
    })
}

/// The three most recent news and events.
#[derive(Debug, Clone, Copy)]
pub struct News;

impl Section for News {
    fn name(&self) -> &str {
        "news"
    }

    fn query(&self) -> ContentQuery {
        ContentQuery::new("news").order(Sort::desc("fields.date")).limit(3)
    }

    fn normalize(&self, _position: usize, entry: &ContentEntry) -> Result<Option<DisplayRecord>> {
        news_record(entry, CARD_IMAGE_FALLBACK).map(Some)
    }

    fn messages(&self) -> Messages {
        Messages::new(
            "Loading news...",
            "No news yet. Check back soon.",
            "News could not be loaded right now.",
        )
    }
}
