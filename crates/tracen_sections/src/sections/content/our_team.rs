use tracen_core::normalize::{asset_url, text};
use tracen_core::{ContentEntry, ContentQuery, DisplayRecord, Result, Sort};

use crate::sections::{Messages, Section};

pub const PORTRAIT_FALLBACK: &str = "https://picsum.photos/600/800";

/// School leadership shown on the home page, in the order they were added.
#[derive(Debug, Clone, Copy)]
pub struct OurTeam;

impl Section for OurTeam {
    fn name(&self) -> &str {
        "our-team"
    }

    fn query(&self) -> ContentQuery {
        ContentQuery::new("teamMember")
            .order(Sort::asc("sys.createdAt"))
            .limit(3)
    }

    fn normalize(&self, _position: usize, entry: &ContentEntry) -> Result<Option<DisplayRecord>> {
        Ok(Some(
            DisplayRecord::new(entry.id.clone(), text(entry, "name"))
                .with_subtitle(text(entry, "role"))
                .with_body(text(entry, "subRole"))
                .with_image(asset_url(entry, "photo", PORTRAIT_FALLBACK)),
        ))
    }

    fn messages(&self) -> Messages {
        Messages::new(
            "Loading our leadership...",
            "Leadership profiles are coming soon.",
            "Leadership profiles could not be loaded.",
        )
    }
}
