use serde::{Deserialize, Serialize};

use crate::types::DisplayRecord;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Loading,
    Success,
    Empty,
    Error,
}

/// Which item is expanded, open in a lightbox, or targeted by a modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Selection {
    #[default]
    None,
    Index(usize),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Static, user-facing message for the loading, empty and error phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
    pub link: Option<Link>,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.link = Some(Link {
            label: label.into(),
            href: href.into(),
        });
        self
    }
}

/// An entry left out of the rendered list because of a malformed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejected {
    pub id: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub phase: Phase,
    pub items: Vec<DisplayRecord>,
    pub selection: Selection,
    pub notice: Option<Notice>,
    pub rejected: Vec<Rejected>,
}

impl ViewState {
    /// Initial state of a mount. `seed` is rendered while loading.
    pub fn loading(seed: Vec<DisplayRecord>, notice: Option<Notice>) -> Self {
        Self {
            phase: Phase::Loading,
            items: seed,
            selection: Selection::None,
            notice,
            rejected: Vec::new(),
        }
    }

    /// State of a section whose content is known up front.
    pub fn ready(items: Vec<DisplayRecord>) -> Self {
        let phase = if items.is_empty() { Phase::Empty } else { Phase::Success };
        Self {
            phase,
            items,
            selection: Selection::None,
            notice: None,
            rejected: Vec::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    fn settle(&self, to: Phase) -> Result<()> {
        if self.phase != Phase::Loading {
            return Err(Error::StateTransition(format!(
                "{:?} -> {:?}: fetch cycle already settled",
                self.phase, to
            )));
        }
        Ok(())
    }

    /// Settles a successful fetch. An empty list moves to `Empty` with the
    /// given notice.
    pub fn succeed(&mut self, items: Vec<DisplayRecord>, empty: Notice) -> Result<()> {
        if items.is_empty() {
            self.settle(Phase::Empty)?;
            self.phase = Phase::Empty;
            self.items.clear();
            self.notice = Some(empty);
        } else {
            self.settle(Phase::Success)?;
            self.phase = Phase::Success;
            self.items = items;
            self.notice = None;
        }
        Ok(())
    }

    /// Settles a failed fetch. Seeded placeholders stay visible; nothing
    /// fetched is ever shown.
    pub fn fail(&mut self, notice: Notice) -> Result<()> {
        self.settle(Phase::Error)?;
        self.phase = Phase::Error;
        self.notice = Some(notice);
        Ok(())
    }

    pub fn reject(&mut self, id: impl Into<String>, reason: impl Into<String>) {
        self.rejected.push(Rejected {
            id: id.into(),
            reason: reason.into(),
        });
    }

    /// Accordion behaviour: opens `index`, collapsing whatever was open, or
    /// collapses `index` if it is the open one.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.selection = match self.selection {
            Selection::Index(open) if open == index => Selection::None,
            _ => Selection::Index(index),
        };
        true
    }

    /// Lightbox: opens the item at `index`.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.selection = Selection::Index(index);
        true
    }

    pub fn step_forward(&mut self) -> bool {
        self.step(1)
    }

    pub fn step_back(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> bool {
        let len = self.items.len();
        match self.selection {
            Selection::Index(current) if len > 0 => {
                let next = (current as isize + delta).rem_euclid(len as isize) as usize;
                self.selection = Selection::Index(next);
                true
            }
            _ => false,
        }
    }

    /// Modal target. Only ids of rendered items can be selected.
    pub fn select_id(&mut self, id: &str) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            return false;
        }
        self.selection = Selection::Id(id.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    pub fn selected(&self) -> Option<&DisplayRecord> {
        match &self.selection {
            Selection::None => None,
            Selection::Index(index) => self.items.get(*index),
            Selection::Id(id) => self.items.iter().find(|item| &item.id == id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<DisplayRecord> {
        (0..n)
            .map(|i| DisplayRecord::new(format!("r{}", i), format!("Record {}", i)))
            .collect()
    }

    fn settled(n: usize) -> ViewState {
        let mut view = ViewState::loading(Vec::new(), None);
        view.succeed(records(n), Notice::new("Nothing here yet.")).unwrap();
        view
    }

    #[test]
    fn test_success_and_empty() {
        let view = settled(3);
        assert_eq!(view.phase, Phase::Success);
        assert_eq!(view.items.len(), 3);
        assert!(view.notice.is_none());

        let view = settled(0);
        assert_eq!(view.phase, Phase::Empty);
        assert!(view.items.is_empty());
        assert_eq!(view.notice.unwrap().message, "Nothing here yet.");
    }

    #[test]
    fn test_transitions_are_monotonic() {
        let mut view = settled(2);
        assert!(view.fail(Notice::new("late failure")).is_err());
        assert!(view.succeed(records(1), Notice::new("x")).is_err());
        assert_eq!(view.phase, Phase::Success);
        assert_eq!(view.items.len(), 2);

        let mut failed = ViewState::loading(Vec::new(), None);
        failed.fail(Notice::new("Could not load.")).unwrap();
        assert!(failed.succeed(records(2), Notice::new("x")).is_err());
        assert_eq!(failed.phase, Phase::Error);
        assert!(failed.items.is_empty());
    }

    #[test]
    fn test_failure_keeps_seeded_items() {
        let mut view = ViewState::loading(records(5), None);
        view.fail(Notice::new("Could not load photos.")).unwrap();
        assert_eq!(view.phase, Phase::Error);
        assert_eq!(view.items.len(), 5);
    }

    #[test]
    fn test_accordion_toggle() {
        let mut view = settled(3);
        assert!(view.toggle(0));
        assert_eq!(view.selection, Selection::Index(0));
        assert!(view.toggle(1));
        assert_eq!(view.selection, Selection::Index(1));
        assert!(view.toggle(1));
        assert_eq!(view.selection, Selection::None);
        assert!(!view.toggle(3));
        assert_eq!(view.selection, Selection::None);
    }

    #[test]
    fn test_lightbox_wraps() {
        let mut view = settled(3);
        assert!(!view.step_forward());
        assert!(view.open(2));
        assert!(view.step_forward());
        assert_eq!(view.selection, Selection::Index(0));
        assert!(view.step_back());
        assert_eq!(view.selection, Selection::Index(2));
        assert_eq!(view.selected().map(|r| r.id.as_str()), Some("r2"));
        view.clear_selection();
        assert!(view.selected().is_none());
    }

    #[test]
    fn test_modal_target_by_id() {
        let mut view = settled(2);
        assert!(view.select_id("r1"));
        assert_eq!(view.selected().map(|r| r.title.as_str()), Some("Record 1"));
        assert!(!view.select_id("missing"));
        assert_eq!(view.selection, Selection::Id("r1".to_string()));
    }
}
