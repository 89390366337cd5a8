mod bump;
mod status;

use std::path::Path;

use clap::{Args, Subcommand};
use lockstep_core::BumpLevel;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Bump every changed package and its dependents to a shared version
    Bump(BumpArgs),
    /// Show which packages the next bump would release
    Status,
}

#[derive(Args)]
pub(crate) struct BumpArgs {
    /// Exact version to release, e.g. 1.4.0 (takes precedence over --bump)
    #[arg(long)]
    version: Option<String>,

    /// Increment the last released version by this level
    #[arg(long, value_enum)]
    bump: Option<BumpLevel>,

    /// Plan the release without writing any manifest
    #[arg(long)]
    dry_run: bool,
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path) -> Result<()> {
        match self {
            Self::Bump(args) => bump::run(&args, start_path),
            Self::Status => status::run(start_path),
        }
    }
}
