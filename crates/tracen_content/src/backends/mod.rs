pub mod contentful;
pub mod memory;

pub use contentful::ContentfulClient;
pub use memory::InMemoryClient;
