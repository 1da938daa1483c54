//! Sections whose content ships with the site instead of the repository.

use tracen_core::{DisplayRecord, ViewState};

pub mod about;
pub mod hero;
pub mod stats;

pub const STATIC_SECTIONS: [&str; 3] = ["hero", "stats", "about"];

pub fn static_items(name: &str) -> Option<Vec<DisplayRecord>> {
    match name {
        "hero" => Some(hero::slides()),
        "stats" => Some(stats::statistics()),
        "about" => Some(about::tabs()),
        _ => None,
    }
}

/// Settled view of a static section; no fetch is involved.
pub fn static_view(name: &str) -> Option<ViewState> {
    static_items(name).map(ViewState::ready)
}
