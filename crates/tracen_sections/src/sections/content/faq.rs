use tracen_core::normalize::{text, text_or, NO_DETAILS};
use tracen_core::{ContentEntry, ContentQuery, DisplayRecord, Result, Sort};

use crate::sections::{Messages, Section};

/// Accordion of common questions, ordered by their rank field.
#[derive(Debug, Clone, Copy)]
pub struct Faq;

impl Section for Faq {
    fn name(&self) -> &str {
        "faq"
    }

    fn query(&self) -> ContentQuery {
        ContentQuery::new("faq").order(Sort::asc("fields.order"))
    }

    fn normalize(&self, _position: usize, entry: &ContentEntry) -> Result<Option<DisplayRecord>> {
        Ok(Some(
            DisplayRecord::new(entry.id.clone(), text(entry, "question"))
                .with_body(text_or(entry, "answer", NO_DETAILS)),
        ))
    }

    fn messages(&self) -> Messages {
        Messages::new(
            "Loading questions...",
            "No questions have been published yet.",
            "Questions could not be loaded. Please try again later.",
        )
    }
}
