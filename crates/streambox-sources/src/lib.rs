pub mod traits;
pub mod builtin;
pub mod file;
pub mod http;
pub mod factory;
pub mod error;

pub use traits::{CatalogSource, parse_catalog};
pub use builtin::BuiltinCatalog;
pub use file::FileCatalog;
pub use http::HttpCatalog;
pub use factory::catalog_from_config;
pub use error::SourceError;
