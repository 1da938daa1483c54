pub mod adapter;
pub mod carousel;
pub mod cli;
pub mod logging;
pub mod mount;
pub mod pages;
pub mod sections;

#[cfg(test)]
mod test_support;

pub use adapter::{Outcome, SectionAdapter};
pub use cli::{handle_command, SectionArgs, SectionCommands};
pub use logging::{init_logging, Logger};
pub use mount::{Mount, ViewHandle};
pub use pages::{load_article, load_page, load_section, PageSection, HOME_SECTIONS};
pub use sections::{get_section_factories, section_by_name, section_names, Section};

pub mod prelude {
    pub use super::mount::Mount;
    pub use super::sections::Section;
    pub use tracen_core::{ContentClient, Error, Phase, Result, ViewState};
}
