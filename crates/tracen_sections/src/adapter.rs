use std::sync::Arc;

use tracen_core::{ContentClient, DisplayRecord, Error, ViewState};

use crate::logging::Logger;
use crate::sections::Section;

/// Result of the single query a mount performs.
#[derive(Debug)]
pub enum Outcome {
    Fetched {
        items: Vec<DisplayRecord>,
        rejected: Vec<(String, Error)>,
    },
    Failed(Error),
}

/// Fetches, normalizes and pads one section's content.
pub struct SectionAdapter {
    section: Box<dyn Section>,
    client: Arc<dyn ContentClient>,
    logger: Logger,
}

impl SectionAdapter {
    pub fn new(section: Box<dyn Section>, client: Arc<dyn ContentClient>) -> Self {
        let logger = Logger::new()
            .with_prefix(format!("[{}]", section.name()))
            .with_prefix(format!("[{}]", client.name()));
        Self {
            section,
            client,
            logger,
        }
    }

    pub fn section(&self) -> &dyn Section {
        self.section.as_ref()
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// What a freshly mounted view shows before the fetch settles.
    pub fn initial_state(&self) -> ViewState {
        ViewState::loading(
            self.section.fallback().initial_items(),
            Some(self.section.messages().loading),
        )
    }

    /// Issues exactly one query and maps what comes back.
    pub async fn fetch(&self) -> Outcome {
        let query = self.section.query();
        self.logger.debug(&format!("Fetching {:?}", query.to_params()));

        let page = match self.client.get_entries(&query).await {
            Ok(page) => page,
            Err(e) => {
                self.logger.error(&format!("Fetch failed: {}", e));
                return Outcome::Failed(e);
            }
        };

        let mut items = Vec::with_capacity(page.items.len());
        let mut rejected = Vec::new();
        for (position, entry) in page.items.iter().enumerate() {
            match self.section.normalize(position, entry) {
                Ok(Some(record)) => items.push(record),
                Ok(None) => self.logger.debug(&format!("Skipping unusable entry {}", entry.id)),
                Err(e) => {
                    self.logger.warn(&format!("Rejecting entry {}: {}", entry.id, e));
                    rejected.push((entry.id.clone(), e));
                }
            }
        }

        let fetched = items.len();
        let items = self.section.fallback().apply(items);
        if items.len() > fetched {
            self.logger.info(&format!(
                "Fetched {} entries, padded with {} placeholders",
                fetched,
                items.len() - fetched
            ));
        } else {
            self.logger.info(&format!("Fetched {} entries", fetched));
        }

        Outcome::Fetched { items, rejected }
    }

    /// Settles a loading view with a fetch outcome.
    pub fn apply(&self, view: &mut ViewState, outcome: Outcome) {
        let messages = self.section.messages();
        let settled = match outcome {
            Outcome::Fetched { items, rejected } => {
                if view.is_loading() {
                    for (id, reason) in rejected {
                        view.reject(id, reason.to_string());
                    }
                }
                view.succeed(items, messages.empty)
            }
            Outcome::Failed(_) => view.fail(messages.error),
        };
        if let Err(e) = settled {
            self.logger.warn(&format!("Ignoring outcome: {}", e));
        }
    }

    /// `load(contentType, filter, sort, limit)`: one query, one view state.
    pub async fn load(&self) -> ViewState {
        let mut view = self.initial_state();
        let outcome = self.fetch().await;
        self.apply(&mut view, outcome);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::content::{Faq, Gallery};
    use crate::test_support::{CountingClient, FailingClient};
    use tracen_core::Phase;

    #[tokio::test]
    async fn test_one_query_per_load() {
        let client = Arc::new(CountingClient::default());
        let adapter = SectionAdapter::new(Box::new(Faq), client.clone());
        adapter.load().await;
        assert_eq!(client.calls(), 1);
        adapter.load().await;
        assert_eq!(client.calls(), 2);
    }

    #[test]
    fn test_initial_state() {
        let faq = SectionAdapter::new(Box::new(Faq), Arc::new(FailingClient));
        let view = faq.initial_state();
        assert_eq!(view.phase, Phase::Loading);
        assert!(view.items.is_empty());
        assert_eq!(view.notice.unwrap().message, "Loading questions...");

        let gallery = SectionAdapter::new(Box::new(Gallery::new()), Arc::new(FailingClient));
        let view = gallery.initial_state();
        assert_eq!(view.phase, Phase::Loading);
        assert_eq!(view.items.len(), 5);
    }

    #[tokio::test]
    async fn test_apply_only_settles_once() {
        let adapter = SectionAdapter::new(Box::new(Faq), Arc::new(CountingClient::default()));
        let mut view = adapter.load().await;
        assert_eq!(view.phase, Phase::Empty);

        let outcome = adapter.fetch().await;
        adapter.apply(&mut view, outcome);
        assert_eq!(view.phase, Phase::Empty);

        adapter.apply(&mut view, Outcome::Failed(Error::NotFound("late".to_string())));
        assert_eq!(view.phase, Phase::Empty);
    }
}
