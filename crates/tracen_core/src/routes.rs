use serde::{Deserialize, Serialize};

/// Anchor of the news listing on the home page.
pub const NEWS_LISTING: &str = "/#news";

/// Navigable pages of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    Home,
    Teachers,
    NewsDetail { slug: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Teachers => "/teachers".to_string(),
            Route::NewsDetail { slug } => format!("/news/{}", slug),
        }
    }

    /// Matches a request path, ignoring any query string or fragment.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/teachers" => Some(Route::Teachers),
            _ => {
                let slug = trimmed.strip_prefix("/news/")?;
                if slug.is_empty() || slug.contains('/') {
                    None
                } else {
                    Some(Route::NewsDetail { slug: slug.to_string() })
                }
            }
        }
    }
}
