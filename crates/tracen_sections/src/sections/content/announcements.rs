use tracen_core::normalize::{date_field, optional_asset_url, text};
use tracen_core::{ContentEntry, ContentQuery, DisplayRecord, Result, Sort};

use crate::sections::{Messages, Section};

/// Latest notices and circulars, newest first, with an optional PDF.
#[derive(Debug, Clone, Copy)]
pub struct Announcements;

impl Section for Announcements {
    fn name(&self) -> &str {
        "announcements"
    }

    fn query(&self) -> ContentQuery {
        ContentQuery::new("announcement")
            .order(Sort::desc("fields.date"))
            .limit(4)
    }

    fn normalize(&self, _position: usize, entry: &ContentEntry) -> Result<Option<DisplayRecord>> {
        Ok(Some(DisplayRecord {
            id: entry.id.clone(),
            title: text(entry, "title"),
            date: date_field(entry, "date")?,
            link: optional_asset_url(entry, "file"),
            ..DisplayRecord::default()
        }))
    }

    fn messages(&self) -> Messages {
        Messages::new(
            "Loading announcements...",
            "There are no announcements right now.",
            "Announcements could not be loaded. Please try again later.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry_with, load_with, FailingClient};
    use serde_json::json;
    use std::sync::Arc;
    use tracen_content::InMemoryClient;
    use tracen_core::Phase;

    #[tokio::test]
    async fn test_network_failure_shows_static_error() {
        let view = load_with(Announcements, Arc::new(FailingClient)).await;
        assert_eq!(view.phase, Phase::Error);
        assert!(view.items.is_empty());
        let notice = view.notice.unwrap();
        assert_eq!(notice.message, "Announcements could not be loaded. Please try again later.");
        assert!(!notice.message.contains("connection"));
    }

    #[tokio::test]
    async fn test_newest_first_with_pdf_link() {
        let client = InMemoryClient::with_entries(vec![
            entry_with("a1", "announcement", json!({
                "title": "Swimming Club Registration 2024 - Deadline Extended",
                "date": "2025-07-20"
            })),
            entry_with("a2", "announcement", json!({
                "title": "Report Card Day - First Monthly Exam 2024-25, Term-1",
                "date": "2025-07-24",
                "file": { "sys": { "id": "pdf" }, "fields": { "file": { "url": "//assets.ctfassets.net/report.pdf" } } }
            })),
        ]);

        let view = load_with(Announcements, Arc::new(client)).await;
        assert_eq!(view.phase, Phase::Success);
        assert_eq!(view.items[0].id, "a2");
        assert_eq!(view.items[0].date, "July 24, 2025");
        assert_eq!(view.items[0].link.as_deref(), Some("https://assets.ctfassets.net/report.pdf"));
        assert_eq!(view.items[1].date, "July 20, 2025");
        assert_eq!(view.items[1].link, None);
    }

    #[tokio::test]
    async fn test_no_entries_is_empty_not_error() {
        let view = load_with(Announcements, Arc::new(InMemoryClient::new())).await;
        assert_eq!(view.phase, Phase::Empty);
        assert_eq!(view.notice.unwrap().message, "There are no announcements right now.");
    }
}
