use std::path::Path;

use lockstep_git::Repository;
use lockstep_operations::operations::{StatusInput, StatusOperation, StatusOutput};
use lockstep_operations::providers::{FileSystemProjectProvider, Git2Provider};

use crate::error::Result;

pub(crate) fn run(start_path: &Path) -> Result<()> {
    let repository = Repository::open(start_path)?;
    // A freshly initialized repository has no HEAD to report.
    let head = repository.head_sha().ok();
    let last_tag = repository.last_release_tag()?;

    let operation = StatusOperation::new(FileSystemProjectProvider::new(), Git2Provider::new());
    let output = operation.execute(
        start_path,
        &StatusInput {
            since: last_tag.clone(),
        },
    )?;

    print_status(head.as_deref(), last_tag.as_deref(), &output);

    Ok(())
}

fn print_status(head: Option<&str>, last_tag: Option<&str>, output: &StatusOutput) {
    if let Some(head) = head {
        println!("HEAD: {head}");
    }
    match last_tag {
        Some(tag) => println!("Last release: {tag}"),
        None => println!("No release yet."),
    }

    if output.impacted.is_empty() {
        println!("All {} package(s) are up to date.", output.packages.len());
        return;
    }

    if !output.changed.is_empty() {
        println!("\nChanged packages:");
        for name in &output.changed {
            println!("  {name}");
        }
    }

    println!("\nThe next bump would release:");
    for name in &output.impacted {
        println!("  {name}");
    }

    if !output.skipped_circular.is_empty() {
        println!("\nNot diffed (marked circular):");
        for name in &output.skipped_circular {
            println!("  {name}");
        }
    }
}
