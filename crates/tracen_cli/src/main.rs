use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracen_content::{create_client, ContentfulConfig};
use tracen_core::{ContentClient, Error, Result};
use tracen_sections::{handle_command, init_logging, SectionArgs, SectionCommands};
use tracen_web::{create_app, AppState};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "CONTENTFUL_SPACE_ID")]
    space_id: Option<String>,
    #[arg(long, env = "CONTENTFUL_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,
    #[arg(long, env = "CONTENTFUL_ENVIRONMENT", default_value = "master")]
    environment: String,
    #[arg(long, env = "CONTENTFUL_HOST", default_value = "cdn.contentful.com")]
    host: String,
    /// Serve content from a delivery API response saved to disk
    #[arg(long)]
    fixtures: Option<PathBuf>,
    #[arg(long, default_value = "info")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List available sections
    Sections,
    /// Load one section and print its items
    Show { name: String },
    /// Load a news article by its slug
    Article { slug: String },
    /// Load every section of a page path (e.g. /, /teachers, /news/<slug>)
    Page { path: String },
    /// Serve the JSON surface
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

impl Cli {
    fn contentful_config(&self) -> Result<Option<ContentfulConfig>> {
        match (&self.space_id, &self.access_token) {
            (Some(space_id), Some(access_token)) => {
                let config = ContentfulConfig::new(space_id.as_str(), access_token.as_str())
                    .with_environment(self.environment.as_str())
                    .with_host(self.host.as_str());
                config.validate()?;
                Ok(Some(config))
            }
            (None, None) => Ok(None),
            _ => Err(Error::Config(
                "Both --space-id and --access-token are required".to_string(),
            )),
        }
    }

    fn client(&self) -> Result<Arc<dyn ContentClient>> {
        let config = if self.fixtures.is_some() {
            None
        } else {
            self.contentful_config()?
        };
        create_client(config, self.fixtures.as_deref())
    }
}

async fn serve(addr: SocketAddr, client: Arc<dyn ContentClient>) -> Result<()> {
    let app = create_app(AppState::new(client));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🚀 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let client = cli.client()?;
    info!("📚 Content backend initialized (using {})", client.name());

    let command = match cli.command {
        Commands::Serve { addr } => return serve(addr, client).await,
        Commands::Sections => SectionCommands::List,
        Commands::Show { name } => SectionCommands::Show { name },
        Commands::Article { slug } => SectionCommands::Article { slug },
        Commands::Page { path } => SectionCommands::Page { path },
    };
    handle_command(SectionArgs { command }, client).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["tracen", "--fixtures", "content.json", "serve", "--addr", "0.0.0.0:8080"])
            .unwrap();
        match cli.command {
            Commands::Serve { addr } => assert_eq!(addr.port(), 8080),
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.environment, "master");
    }

    #[test]
    fn test_empty_token_rejected() {
        let cli = Cli::try_parse_from(["tracen", "--space-id", "school", "--access-token", "", "sections"]).unwrap();
        assert!(cli.contentful_config().is_err());
    }

    #[tokio::test]
    async fn test_fixtures_client() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let fixture = serde_json::json!({
            "items": [{
                "sys": { "id": "q1", "contentType": { "sys": { "id": "faq" } } },
                "fields": { "question": "Is lunch provided?", "order": 1 }
            }],
            "total": 1,
            "skip": 0,
            "limit": 100
        });
        write!(file, "{}", fixture).unwrap();

        let path = file.path().to_string_lossy().to_string();
        let cli = Cli::try_parse_from(["tracen", "--fixtures", path.as_str(), "show", "faq"]).unwrap();
        let client = cli.client().unwrap();
        assert_eq!(client.name(), "memory");

        let args = SectionArgs {
            command: SectionCommands::Show { name: "faq".to_string() },
        };
        assert!(handle_command(args, client).await.is_ok());
    }
}
