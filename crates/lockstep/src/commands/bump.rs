use std::path::Path;

use lockstep_git::Repository;
use lockstep_operations::operations::{BumpInput, BumpOperation, BumpOutcome, BumpOutput};
use lockstep_operations::providers::{
    FileSystemManifestStore, FileSystemProjectProvider, Git2Provider,
};
use lockstep_version::{generate_versions, increment, parse_version};
use semver::Version;

use super::BumpArgs;
use crate::error::{CliError, Result};
use crate::interaction;

pub(crate) fn run(args: &BumpArgs, start_path: &Path) -> Result<()> {
    let last_tag = Repository::open(start_path)?.last_release_tag()?;
    let version = resolve_target_version(args, last_tag.as_deref())?;

    let operation = BumpOperation::new(
        FileSystemProjectProvider::new(),
        Git2Provider::new(),
        FileSystemManifestStore::new(),
    );
    let input = BumpInput {
        since: last_tag,
        version,
        dry_run: args.dry_run,
    };
    let outcome = operation.execute(start_path, &input)?;

    print_outcome(&outcome);

    Ok(())
}

/// `--version` wins over `--bump`, which wins over the interactive prompt.
/// `--bump` and the candidate prompt both derive from the last release tag,
/// so without one only an explicit version can start the history. A tag
/// that does not parse as a version downgrades the prompt to free-form
/// entry.
fn resolve_target_version(args: &BumpArgs, last_tag: Option<&str>) -> Result<Version> {
    if let Some(version) = &args.version {
        return Ok(parse_version(version)?);
    }

    if let Some(level) = args.bump {
        let tag = last_tag.ok_or(CliError::NoReleaseTag)?;
        return Ok(increment(&parse_version(tag)?, level));
    }

    match last_tag {
        Some(tag) => match generate_versions(tag) {
            Ok(candidates) => interaction::prompt_for_version(tag, &candidates),
            Err(error) => {
                eprintln!("warning: cannot derive candidates from tag '{tag}': {error}");
                interaction::prompt_for_custom_version()
            }
        },
        None => interaction::prompt_for_custom_version(),
    }
}

fn print_outcome(outcome: &BumpOutcome) {
    match outcome {
        BumpOutcome::UpToDate => {
            println!("Nothing changed since the last release.");
        }
        BumpOutcome::DryRun(output) => {
            println!("Dry run - no manifests will be written.\n");
            print_bump_output(output);
        }
        BumpOutcome::Executed(output) => {
            print_bump_output(output);
            println!(
                "\nBumped {} package(s) to {}.",
                output.bumped.len(),
                output.version
            );
        }
    }
}

fn print_bump_output(output: &BumpOutput) {
    println!("Releasing version {}:", output.version);
    for bump in &output.bumped {
        println!(
            "  {} {} -> {}",
            bump.name, bump.previous_version, output.version
        );
    }

    if !output.unchanged.is_empty() {
        println!("\nUnchanged packages:");
        for name in &output.unchanged {
            println!("  {name}");
        }
    }

    if !output.skipped_circular.is_empty() {
        println!("\nNot diffed (marked circular):");
        for name in &output.skipped_circular {
            println!("  {name}");
        }
    }
}
