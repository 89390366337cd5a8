use thiserror::Error;

pub type Result<T> = std::result::Result<T, VersionError>;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("invalid semantic version '{version}'")]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },
}
