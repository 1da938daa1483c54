use std::path::Path;
use std::sync::Arc;

use tracen_core::{ContentClient, Error, Result};

pub mod backends;
pub mod config;
pub mod wire;

pub use backends::*;
pub use config::ContentfulConfig;

/// Picks a backend: fixtures when a file is given, Contentful otherwise.
pub fn create_client(
    config: Option<ContentfulConfig>,
    fixtures: Option<&Path>,
) -> Result<Arc<dyn ContentClient>> {
    match (fixtures, config) {
        (Some(path), _) => {
            let client = InMemoryClient::from_fixture_file(path)?;
            tracing::info!("📂 Serving content from fixtures at {}", path.display());
            Ok(Arc::new(client))
        }
        (None, Some(config)) => {
            tracing::info!("🌐 Serving content from Contentful space {}", config.space_id);
            Ok(Arc::new(ContentfulClient::new(config)?))
        }
        (None, None) => Err(Error::Config(
            "Either Contentful credentials or a fixtures file is required".to_string(),
        )),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::config::ContentfulConfig;
    pub use super::create_client;
}
