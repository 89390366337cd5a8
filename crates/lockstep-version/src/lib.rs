mod error;

pub use error::{Result, VersionError};

use lockstep_core::BumpLevel;
use semver::{BuildMetadata, Prerelease, Version};

/// Parses a version string leniently: surrounding whitespace and any leading
/// `v`/`=` characters are stripped first, so release tags like `v1.2.3`
/// parse directly.
///
/// # Errors
///
/// Returns [`VersionError::InvalidVersion`] when the remainder is not a
/// valid semantic version.
pub fn parse_version(input: &str) -> Result<Version> {
    let cleaned = input.trim().trim_start_matches(['=', 'v']);
    Version::parse(cleaned).map_err(|source| VersionError::InvalidVersion {
        version: input.to_owned(),
        source,
    })
}

/// Returns `version` incremented by `level`. Pre-release and build metadata
/// do not survive an increment.
#[must_use]
pub fn increment(version: &Version, level: BumpLevel) -> Version {
    let mut next = version.clone();

    match level {
        BumpLevel::Major => {
            next.major += 1;
            next.minor = 0;
            next.patch = 0;
        }
        BumpLevel::Minor => {
            next.minor += 1;
            next.patch = 0;
        }
        BumpLevel::Patch => {
            next.patch += 1;
        }
    }

    next.pre = Prerelease::EMPTY;
    next.build = BuildMetadata::EMPTY;
    next
}

/// Strips pre-release and build components, keeping the numeric base.
#[must_use]
pub fn finalize(version: &Version) -> Version {
    Version::new(version.major, version.minor, version.patch)
}

/// Candidate versions a release could move to from `previous`.
///
/// A pre-release yields exactly one candidate, its finalized base: leaving
/// pre-release requires no increment. Any other version yields the patch,
/// minor and major increments in that order.
///
/// # Errors
///
/// Returns [`VersionError::InvalidVersion`] when `previous` cannot be
/// parsed.
pub fn generate_versions(previous: &str) -> Result<Vec<Version>> {
    let version = parse_version(previous)?;

    if !version.pre.is_empty() {
        return Ok(vec![finalize(&version)]);
    }

    Ok(vec![
        increment(&version, BumpLevel::Patch),
        increment(&version, BumpLevel::Minor),
        increment(&version, BumpLevel::Major),
    ])
}
