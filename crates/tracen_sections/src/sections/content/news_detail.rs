use tracen_core::routes::NEWS_LISTING;
use tracen_core::{ContentEntry, ContentQuery, DisplayRecord, Notice, Result, Route};

use super::news::news_record;
use crate::sections::{Messages, Section};

pub const HERO_IMAGE_FALLBACK: &str = "https://picsum.photos/1200/600";

/// One article addressed by its slug.
#[derive(Debug, Clone)]
pub struct NewsDetail {
    slug: String,
}

impl NewsDetail {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl Section for NewsDetail {
    fn name(&self) -> &str {
        "news-detail"
    }

    fn query(&self) -> ContentQuery {
        ContentQuery::new("news")
            .filter("fields.slug", self.slug.clone())
            .limit(1)
    }

    fn normalize(&self, _position: usize, entry: &ContentEntry) -> Result<Option<DisplayRecord>> {
        news_record(entry, HERO_IMAGE_FALLBACK).map(Some)
    }

    fn messages(&self) -> Messages {
        Messages {
            loading: Notice::new("Loading article..."),
            empty: Notice::new("Article not found.").with_link("Back to News", NEWS_LISTING),
            error: Notice::new("Failed to load the article.").with_link("Back to Home", Route::Home.path()),
        }
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

    fn client() -> InMemoryClient {
        InMemoryClient::with_entries(vec![entry_with("n1", "news", json!({
            "title": "Annual Sports Meet 2024",
            "category": "Sports",
            "date": "2024-02-28",
            "slug": "sports-meet-2024",
            "description": "A day filled with energy.\n\nTrue sportsmanship on display.",
            "image": { "sys": { "id": "a" }, "fields": { "file": { "url": "//images.ctfassets.net/meet.jpg" } } }
        }))])
    }

    #[tokio::test]
    async fn test_unknown_slug_is_not_found() {
        let view = load_with(NewsDetail::new("robotics-2024"), Arc::new(client())).await;
        assert_eq!(view.phase, Phase::Empty);
        assert!(view.items.is_empty());
        let notice = view.notice.unwrap();
        assert_eq!(notice.message, "Article not found.");
        let link = notice.link.unwrap();
        assert_eq!(link.href, NEWS_LISTING);
        assert_eq!(Route::parse(&link.href), Some(Route::Home));
    }

    #[tokio::test]
    async fn test_known_slug() {
        let view = load_with(NewsDetail::new("sports-meet-2024"), Arc::new(client())).await;
        assert_eq!(view.phase, Phase::Success);
        let article = &view.items[0];
        assert_eq!(article.title, "Annual Sports Meet 2024");
        assert_eq!(article.date, "February 28, 2024");
        assert_eq!(article.image, "https://images.ctfassets.net/meet.jpg");
        assert!(article.body.contains("\n\n"));
    }

    #[tokio::test]
    async fn test_failure_differs_from_not_found() {
        let view = load_with(NewsDetail::new("sports-meet-2024"), Arc::new(FailingClient)).await;
        assert_eq!(view.phase, Phase::Error);
        assert_eq!(view.notice.unwrap().message, "Failed to load the article.");
    }

    #[test]
    fn test_query_targets_slug() {
        let query = NewsDetail::new("robotics-2024").query();
        let filter = query.filter.unwrap();
        assert_eq!(filter.field, "fields.slug");
        assert_eq!(filter.value, "robotics-2024");
        assert_eq!(query.limit.map(|l| l.get()), Some(1));
    }
}
