use tracen_core::normalize::{optional_asset_url, text_or};
use tracen_core::{ContentEntry, ContentQuery, DisplayRecord, Result};

use crate::sections::{Messages, Section};

/// Download link for the academic calendar PDF.
#[derive(Debug, Clone, Copy)]
pub struct Calendar;

impl Section for Calendar {
    fn name(&self) -> &str {
        "calendar"
    }

    fn query(&self) -> ContentQuery {
        ContentQuery::new("schoolAsset")
            .filter("fields.slug", "calendar")
            .limit(1)
    }

    fn normalize(&self, _position: usize, entry: &ContentEntry) -> Result<Option<DisplayRecord>> {
        let Some(url) = optional_asset_url(entry, "file") else {
            return Ok(None);
        };
        Ok(Some(DisplayRecord {
            id: entry.id.clone(),
            title: text_or(entry, "title", "Academic Calendar"),
            slug: entry.text("slug").map(str::to_string),
            link: Some(url),
            ..DisplayRecord::default()
        }))
    }

    fn messages(&self) -> Messages {
        Messages::new(
            "Loading...",
            "Calendar Unavailable",
            "The calendar could not be loaded. Please try again later.",
        )
    }
}
