use dialoguer::{Input, Select};
use lockstep_version::parse_version;
use semver::Version;

use crate::environment;
use crate::error::{CliError, Result};

/// Asks which version the release should get, offering `candidates` first
/// and a free-form entry last. The first candidate is the default.
pub(crate) fn prompt_for_version(previous: &str, candidates: &[Version]) -> Result<Version> {
    if !environment::is_interactive() {
        return Err(CliError::NotATty);
    }

    let mut items: Vec<String> = candidates.iter().map(ToString::to_string).collect();
    items.push("custom".to_owned());

    let selection = Select::new()
        .with_prompt(format!("Select the next version (last release: {previous})"))
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| match e {
            dialoguer::Error::IO(io_err) => CliError::Io(io_err),
        })?;

    match selection {
        Some(index) if index < candidates.len() => Ok(candidates[index].clone()),
        Some(_) => prompt_for_custom_version(),
        None => Err(CliError::Cancelled),
    }
}

/// Asks for a version outright, validating the input as it is typed.
pub(crate) fn prompt_for_custom_version() -> Result<Version> {
    if !environment::is_interactive() {
        return Err(CliError::NotATty);
    }

    let input: String = Input::new()
        .with_prompt("Version")
        .validate_with(|value: &String| match parse_version(value) {
            Ok(_) => Ok(()),
            Err(error) => Err(error.to_string()),
        })
        .interact_text()
        .map_err(|e| match e {
            dialoguer::Error::IO(io_err) => CliError::Io(io_err),
        })?;

    Ok(parse_version(&input)?)
}
