use std::env;
use std::fmt;

use tracen_core::{Error, Result};
use url::Url;

pub const DEFAULT_ENVIRONMENT: &str = "master";
pub const DEFAULT_HOST: &str = "cdn.contentful.com";

pub const SPACE_ID_VAR: &str = "CONTENTFUL_SPACE_ID";
pub const ACCESS_TOKEN_VAR: &str = "CONTENTFUL_ACCESS_TOKEN";
pub const ENVIRONMENT_VAR: &str = "CONTENTFUL_ENVIRONMENT";
pub const HOST_VAR: &str = "CONTENTFUL_HOST";

/// Credentials and location of a Contentful space.
#[derive(Clone, PartialEq, Eq)]
pub struct ContentfulConfig {
    pub space_id: String,
    pub access_token: String,
    pub environment: String,
    pub host: String,
}

impl ContentfulConfig {
    pub fn new(space_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            space_id: space_id.into(),
            access_token: access_token.into(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Either a bare host name (`cdn.contentful.com`, served over https) or a
    /// full base URL such as `http://127.0.0.1:8080`.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        let space_id = env::var(SPACE_ID_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", SPACE_ID_VAR)))?;
        let access_token = env::var(ACCESS_TOKEN_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", ACCESS_TOKEN_VAR)))?;

        let mut config = Self::new(space_id, access_token);
        if let Ok(environment) = env::var(ENVIRONMENT_VAR) {
            config = config.with_environment(environment);
        }
        if let Ok(host) = env::var(HOST_VAR) {
            config = config.with_host(host);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("space id", &self.space_id),
            ("access token", &self.access_token),
            ("environment", &self.environment),
            ("host", &self.host),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{} must not be empty", name)));
            }
        }
        self.entries_url().map(|_| ())
    }

    /// `https://{host}/spaces/{space}/environments/{env}/entries`
    pub fn entries_url(&self) -> Result<Url> {
        let base = if self.host.contains("://") {
            self.host.clone()
        } else {
            format!("https://{}", self.host)
        };
        let mut url = Url::parse(&base)
            .map_err(|e| Error::Config(format!("Invalid host {}: {}", self.host, e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Host cannot be a base URL: {}", self.host)))?
            .pop_if_empty()
            .extend(["spaces", self.space_id.as_str(), "environments", self.environment.as_str(), "entries"]);
        Ok(url)
    }
}

impl fmt::Debug for ContentfulConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentfulConfig")
            .field("space_id", &self.space_id)
            .field("access_token", &"<redacted>")
            .field("environment", &self.environment)
            .field("host", &self.host)
            .finish()
    }
}
