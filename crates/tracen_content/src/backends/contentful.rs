use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use tracen_core::{ContentClient, ContentQuery, EntryPage, Result};
use url::Url;

use crate::config::ContentfulConfig;
use crate::wire::EntriesResponse;

/// Content Delivery API client for one space and environment.
pub struct ContentfulClient {
    client: Client,
    config: ContentfulConfig,
    entries_url: Url,
}

impl ContentfulClient {
    pub fn new(config: ContentfulConfig) -> Result<Self> {
        config.validate()?;
        let entries_url = config.entries_url()?;
        Ok(Self {
            client: Client::new(),
            config,
            entries_url,
        })
    }

    pub fn config(&self) -> &ContentfulConfig {
        &self.config
    }
}

impl fmt::Debug for ContentfulClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentfulClient")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl ContentClient for ContentfulClient {
    fn name(&self) -> &str {
        "contentful"
    }

    async fn get_entries(&self, query: &ContentQuery) -> Result<EntryPage> {
        query.validate()?;
        tracing::debug!("GET {} {:?}", self.entries_url, query.to_params());

        let response = self
            .client
            .get(self.entries_url.clone())
            .bearer_auth(&self.config.access_token)
            .query(&query.to_params())
            .send()
            .await?
            .error_for_status()?
            .json::<EntriesResponse>()
            .await?;

        Ok(response.into_page())
    }
}
