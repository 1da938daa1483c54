use std::sync::Arc;

use clap::{Args, Subcommand};
use tracen_core::{ContentClient, Error, Phase, Result, Route, ViewState};

use crate::pages::{load_article, load_page, load_section};
use crate::sections::section_names;
use crate::sections::static_content::STATIC_SECTIONS;

#[derive(Args, Debug, Clone)]
pub struct SectionArgs {
    #[command(subcommand)]
    pub command: SectionCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SectionCommands {
    /// List available sections
    List,
    /// Load one section and print its items
    Show {
        /// Section name (e.g. faq, gallery, news)
        name: String,
    },
    /// Load a news article by its slug
    Article { slug: String },
    /// Load every section of a page path (e.g. /, /teachers, /news/<slug>)
    Page { path: String },
}

pub async fn handle_command(args: SectionArgs, client: Arc<dyn ContentClient>) -> Result<()> {
    match args.command {
        SectionCommands::List => {
            println!("Available sections:");
            for name in STATIC_SECTIONS {
                println!("  {} (static)", name);
            }
            for name in section_names() {
                println!("  {}", name);
            }
        }
        SectionCommands::Show { name } => {
            let view = load_section(&name, client).await?;
            print_view(&name, &view);
        }
        SectionCommands::Article { slug } => {
            let view = load_article(&slug, client).await;
            print_view("news-detail", &view);
        }
        SectionCommands::Page { path } => {
            let route = Route::parse(&path)
                .ok_or_else(|| Error::NotFound(format!("No page at {}", path)))?;
            for section in load_page(&route, client).await? {
                print_view(&section.name, &section.view);
            }
        }
    }
    Ok(())
}

fn phase_emoji(phase: Phase) -> &'static str {
    match phase {
        Phase::Loading => "⏳",
        Phase::Success => "✅",
        Phase::Empty => "📭",
        Phase::Error => "❌",
    }
}

pub fn print_view(name: &str, view: &ViewState) {
    println!("{} {} ({} items)", phase_emoji(view.phase), name, view.items.len());
    if let Some(notice) = &view.notice {
        match &notice.link {
            Some(link) => println!("   {} [{} → {}]", notice.message, link.label, link.href),
            None => println!("   {}", notice.message),
        }
    }
    for item in &view.items {
        let mut line = format!("   • {}", item.title);
        if !item.subtitle.is_empty() {
            line.push_str(&format!(" | {}", item.subtitle));
        }
        if !item.date.is_empty() {
            line.push_str(&format!(" | {}", item.date));
        }
        println!("{}", line);
    }
    for rejected in &view.rejected {
        eprintln!("   ⚠️ Skipped {}: {}", rejected.id, rejected.reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingClient, FailingClient};

    #[tokio::test]
    async fn test_handle_command() {
        let client: Arc<dyn ContentClient> = Arc::new(CountingClient::default());
        let list = SectionArgs { command: SectionCommands::List };
        assert!(handle_command(list, client.clone()).await.is_ok());

        let show = SectionArgs {
            command: SectionCommands::Show { name: "faq".to_string() },
        };
        assert!(handle_command(show, client.clone()).await.is_ok());

        let unknown = SectionArgs {
            command: SectionCommands::Show { name: "invalid".to_string() },
        };
        assert!(handle_command(unknown, client.clone()).await.is_err());

        let bad_page = SectionArgs {
            command: SectionCommands::Page { path: "/news/".to_string() },
        };
        assert!(handle_command(bad_page, client).await.is_err());
    }

    #[tokio::test]
    async fn test_failures_are_rendered_not_returned() {
        let args = SectionArgs {
            command: SectionCommands::Article { slug: "robotics-2024".to_string() },
        };
        assert!(handle_command(args, Arc::new(FailingClient)).await.is_ok());
    }
}
