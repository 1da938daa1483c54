pub mod client;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod query;
pub mod routes;
pub mod types;
pub mod view;

pub use client::ContentClient;
pub use error::{Error, Result};
pub use fallback::FallbackPolicy;
pub use query::{ContentQuery, Direction, Filter, Sort};
pub use routes::Route;
pub use types::{AssetRef, ContentEntry, DisplayRecord, EntryPage};
pub use view::{Link, Notice, Phase, Rejected, Selection, ViewState};
