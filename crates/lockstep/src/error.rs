use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("git error")]
    Git(#[from] lockstep_git::GitError),

    #[error("operation failed")]
    Operation(#[from] lockstep_operations::OperationError),

    #[error("invalid version argument")]
    Version(#[from] lockstep_version::VersionError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("failed to resolve current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("cancelled at the prompt")]
    Cancelled,

    #[error("interactive mode requires a terminal, pass --version or --bump instead")]
    NotATty,

    #[error("no release tag found, pass --version to choose the first version")]
    NoReleaseTag,
}

pub type Result<T> = std::result::Result<T, CliError>;
