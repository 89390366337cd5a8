mod error;
mod repository;

pub use error::GitError;
pub use repository::Repository;

pub type Result<T> = std::result::Result<T, GitError>;
