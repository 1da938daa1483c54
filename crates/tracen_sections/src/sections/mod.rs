use tracen_core::{ContentEntry, ContentQuery, DisplayRecord, FallbackPolicy, Notice, Result};

pub mod content;
pub mod static_content;

use content::{Announcements, Calendar, Faq, Gallery, News, OurTeam, Teachers};

/// Static messages a section shows instead of its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub loading: Notice,
    pub empty: Notice,
    pub error: Notice,
}

impl Messages {
    pub fn new(loading: &str, empty: &str, error: &str) -> Self {
        Self {
            loading: Notice::new(loading),
            empty: Notice::new(empty),
            error: Notice::new(error),
        }
    }
}

/// A content-backed view of the site.
pub trait Section: Send + Sync {
    /// Name used on the command line and in the JSON surface
    fn name(&self) -> &str;

    /// The one query issued per mount
    fn query(&self) -> ContentQuery;

    /// Maps the entry received at `position` to a display record.
    ///
    /// `Ok(None)` marks an entry that cannot be shown at all; an `Err` is a
    /// malformed field that gets reported alongside the rendered list.
    fn normalize(&self, position: usize, entry: &ContentEntry) -> Result<Option<DisplayRecord>>;

    fn messages(&self) -> Messages;

    fn fallback(&self) -> FallbackPolicy {
        FallbackPolicy::none()
    }
}

pub type SectionFactory = Box<dyn Fn() -> Box<dyn Section> + Send + Sync>;

/// Factories for every named content-backed section. Article detail is
/// parameterized by a slug and built through [`content::NewsDetail::new`].
pub fn get_section_factories() -> Vec<SectionFactory> {
    vec![
        Box::new(|| Box::new(Announcements)),
        Box::new(|| Box::new(Faq)),
        Box::new(|| Box::new(Gallery::new())),
        Box::new(|| Box::new(News)),
        Box::new(|| Box::new(OurTeam)),
        Box::new(|| Box::new(Teachers)),
        Box::new(|| Box::new(Calendar)),
    ]
}

pub fn section_by_name(name: &str) -> Option<Box<dyn Section>> {
    get_section_factories()
        .into_iter()
        .map(|factory| factory())
        .find(|section| section.name() == name)
}

pub fn section_names() -> Vec<String> {
    get_section_factories()
        .into_iter()
        .map(|factory| factory().name().to_string())
        .collect()
}
