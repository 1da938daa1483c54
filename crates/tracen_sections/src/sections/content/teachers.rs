use tracen_core::normalize::{asset_url, text, text_or, NO_DETAILS};
use tracen_core::{ContentEntry, ContentQuery, DisplayRecord, Result, Sort};

use crate::sections::{Messages, Section};

pub const PHOTO_FALLBACK: &str = "https://picsum.photos/600/600";

/// The faculty directory, alphabetical by name.
#[derive(Debug, Clone, Copy)]
pub struct Teachers;

impl Section for Teachers {
    fn name(&self) -> &str {
        "teachers"
    }

    fn query(&self) -> ContentQuery {
        ContentQuery::new("teacher").order(Sort::asc("fields.name"))
    }

    fn normalize(&self, _position: usize, entry: &ContentEntry) -> Result<Option<DisplayRecord>> {
        Ok(Some(DisplayRecord {
            id: entry.id.clone(),
            title: text(entry, "name"),
            subtitle: text(entry, "subject"),
            image: asset_url(entry, "photo", PHOTO_FALLBACK),
            body: text_or(entry, "bio", NO_DETAILS),
            link: entry.text("email").map(str::to_string),
            ..DisplayRecord::default()
        }))
    }

    fn messages(&self) -> Messages {
        Messages::new(
            "Loading faculty...",
            "No faculty profiles have been published yet.",
            "The faculty directory could not be loaded.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{entry_with, load_with};
    use serde_json::json;
    use std::sync::Arc;
    use tracen_content::InMemoryClient;
    use tracen_core::Selection;

    fn client() -> InMemoryClient {
        InMemoryClient::with_entries(vec![
            entry_with("t2", "teacher", json!({
                "name": "Mrs. Marie Curie",
                "subject": "Chemistry",
                "email": "m.curie@tracen.edu",
                "bio": "Leads the annual science fair.",
                "photo": { "sys": { "id": "p2" }, "fields": { "file": { "url": "//images.ctfassets.net/curie.jpg" } } }
            })),
            entry_with("t1", "teacher", json!({
                "name": "Dr. Alan Grant",
                "subject": "Mathematics"
            })),
        ])
    }

    #[tokio::test]
    async fn test_directory_by_name_with_defaults() {
        let view = load_with(Teachers, Arc::new(client())).await;
        assert_eq!(view.items[0].title, "Dr. Alan Grant");
        assert_eq!(view.items[0].body, NO_DETAILS);
        assert_eq!(view.items[0].link, None);
        assert_eq!(view.items[0].image, PHOTO_FALLBACK);

        assert_eq!(view.items[1].link.as_deref(), Some("m.curie@tracen.edu"));
        assert_eq!(view.items[1].image, "https://images.ctfassets.net/curie.jpg");
    }

    #[tokio::test]
    async fn test_profile_modal_targets_teacher() {
        let mut view = load_with(Teachers, Arc::new(client())).await;
        assert!(view.select_id("t2"));
        assert_eq!(view.selection, Selection::Id("t2".to_string()));
        assert_eq!(view.selected().unwrap().subtitle, "Chemistry");
        view.clear_selection();
        assert!(view.selected().is_none());
    }
}
