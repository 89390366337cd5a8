mod error;
mod reader;
mod writer;

pub use error::ManifestError;
pub use reader::{read_config, read_package};
pub use writer::{write_config, write_package};

/// File name every package manifest lives under.
pub const MANIFEST_FILE: &str = "package.json";
