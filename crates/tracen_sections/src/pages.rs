use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracen_core::{ContentClient, Error, Result, Route, ViewState};

use crate::mount::Mount;
use crate::sections::content::NewsDetail;
use crate::sections::static_content::static_view;
use crate::sections::{section_by_name, Section};

/// Top to bottom order of the home page.
pub const HOME_SECTIONS: [&str; 9] = [
    "hero",
    "stats",
    "about",
    "our-team",
    "gallery",
    "news",
    "calendar",
    "announcements",
    "faq",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSection {
    pub name: String,
    pub view: ViewState,
}

async fn mount_and_settle(section: Box<dyn Section>, client: Arc<dyn ContentClient>) -> ViewState {
    let mut mount = Mount::spawn(section, client);
    mount.settled().await
}

/// Settled view of any named section, static or content-backed.
pub async fn load_section(name: &str, client: Arc<dyn ContentClient>) -> Result<ViewState> {
    if let Some(view) = static_view(name) {
        return Ok(view);
    }
    let section = section_by_name(name)
        .ok_or_else(|| Error::NotFound(format!("Unknown section: {}", name)))?;
    Ok(mount_and_settle(section, client).await)
}

pub async fn load_article(slug: &str, client: Arc<dyn ContentClient>) -> ViewState {
    mount_and_settle(Box::new(NewsDetail::new(slug)), client).await
}

/// Loads every section of a page, one mount at a time.
pub async fn load_page(route: &Route, client: Arc<dyn ContentClient>) -> Result<Vec<PageSection>> {
    match route {
        Route::Home => {
            let mut sections = Vec::with_capacity(HOME_SECTIONS.len());
            for name in HOME_SECTIONS {
                let view = load_section(name, client.clone()).await?;
                sections.push(PageSection {
                    name: name.to_string(),
                    view,
                });
            }
            Ok(sections)
        }
        Route::Teachers => Ok(vec![PageSection {
            name: "teachers".to_string(),
            view: load_section("teachers", client).await?,
        }]),
        Route::NewsDetail { slug } => Ok(vec![PageSection {
            name: "news-detail".to_string(),
            view: load_article(slug, client).await,
        }]),
    }
}
