pub mod config;
pub mod content;
pub mod error;
pub mod metadata;
pub mod page;
pub mod registry;
pub mod schema;
pub mod site;
pub mod types;

pub use config::{SAMPLE_SITE_TOML, parse_site_toml, parse_site_toml_str};
pub use content::ContentTable;
pub use error::{Error, Result};
pub use metadata::PageMetadata;
pub use page::{PageViewModel, RELATED_LIMIT, RelatedService, assemble};
pub use registry::SlugRegistry;
pub use site::{Category, PagePath, Site};
pub use types::*;
