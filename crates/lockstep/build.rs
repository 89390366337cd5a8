use std::process::Command;

use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    println!("cargo:rustc-env=LOCKSTEP_VERSION={}", version_string());
}

/// `x.y.z` when HEAD carries the release tag for the crate version,
/// otherwise `x.y.z+<short-hash>.<utc-timestamp>` so dev builds are
/// traceable.
fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");

    let Some(hash) = git(&["rev-parse", "--short", "HEAD"]) else {
        return format!("{version}+unknown");
    };

    let release_tag = format!("v{version}");
    let tagged = git(&["tag", "--points-at", "HEAD"])
        .is_some_and(|tags| tags.lines().any(|line| line.trim() == release_tag));

    if tagged {
        version.to_owned()
    } else {
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        format!("{version}+{hash}.{timestamp}")
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    Some(stdout.trim().to_owned())
}
