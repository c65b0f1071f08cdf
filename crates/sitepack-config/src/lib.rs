pub mod bundle;
pub mod config;
pub mod defaults;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod paths;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use config::*;
pub use defaults::{DEFAULT_PORT, build_configuration};
pub use dev::*;
pub use error::*;
pub use paths::{ProjectPaths, resolve_paths};

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, discover};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
