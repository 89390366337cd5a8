use std::path::{Path, PathBuf};

use globset::GlobBuilder;
use indexmap::IndexMap;
use lockstep_core::Package;
use lockstep_manifest::{MANIFEST_FILE, read_package};

use crate::error::ProjectError;
use crate::manifest::{RootManifest, read_root_manifest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Workspace,
    SinglePackage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub root: PathBuf,
    pub kind: ProjectKind,
    pub packages: Vec<Package>,
}

/// Locates the project containing `start_dir` and loads its packages.
///
/// The nearest ancestor manifest declaring npm `workspaces` wins and its
/// member globs are expanded; without one, the nearest plain manifest forms
/// a single-package project.
///
/// # Errors
///
/// Returns `ProjectError` if no manifest can be found, a member manifest
/// fails to load, or two members share a name.
pub fn discover_project(start_dir: &Path) -> Result<Project, ProjectError> {
    let start_dir = start_dir
        .canonicalize()
        .map_err(|source| ProjectError::StartDir {
            path: start_dir.to_path_buf(),
            source,
        })?;

    let (root, manifest) = find_project_root(&start_dir)?;

    let (kind, packages) = match &manifest.workspaces {
        Some(workspaces) => {
            let packages = collect_packages(&root, workspaces.patterns())?;
            (ProjectKind::Workspace, packages)
        }
        None => {
            let package = read_package(&root)?;
            (ProjectKind::SinglePackage, vec![package])
        }
    };

    ensure_unique_names(&packages)?;

    Ok(Project {
        root,
        kind,
        packages,
    })
}

fn find_project_root(start_dir: &Path) -> Result<(PathBuf, RootManifest), ProjectError> {
    let mut plain_manifest_dir: Option<PathBuf> = None;

    for dir in start_dir.ancestors() {
        let manifest_path = dir.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            continue;
        }

        let manifest = read_root_manifest(&manifest_path)?;
        if manifest.workspaces.is_some() {
            return Ok((dir.to_path_buf(), manifest));
        }

        // The closest plain manifest is only a fallback; a workspace root
        // further up still claims the directory.
        if plain_manifest_dir.is_none() {
            plain_manifest_dir = Some(dir.to_path_buf());
        }
    }

    match plain_manifest_dir {
        Some(root) => {
            let manifest = read_root_manifest(&root.join(MANIFEST_FILE))?;
            Ok((root, manifest))
        }
        None => Err(ProjectError::NotFound {
            start_dir: start_dir.to_path_buf(),
        }),
    }
}

fn collect_packages(root: &Path, patterns: &[String]) -> Result<Vec<Package>, ProjectError> {
    let patterns = MemberPatterns::compile(patterns)?;

    let mut dirs = Vec::new();
    walk_member_dirs(root, root, &patterns, &mut dirs)?;
    dirs.sort();

    let mut packages = Vec::new();
    for dir in dirs {
        if dir.join(MANIFEST_FILE).exists() {
            packages.push(read_package(&dir)?);
        }
    }

    Ok(packages)
}

fn ensure_unique_names(packages: &[Package]) -> Result<(), ProjectError> {
    let mut seen: IndexMap<&str, &Path> = IndexMap::new();

    for package in packages {
        if let Some(first) = seen.insert(&package.name, &package.path) {
            return Err(ProjectError::DuplicatePackage {
                name: package.name.clone(),
                first: first.to_path_buf(),
                second: package.path.clone(),
            });
        }
    }

    Ok(())
}

/// Compiled `workspaces` globs. A leading `!` negates a pattern, and a
/// negation removes matches instead of pruning whole subtrees, the way npm
/// reads these lists.
struct MemberPatterns {
    include: Vec<globset::GlobMatcher>,
    exclude: Vec<globset::GlobMatcher>,
}

impl MemberPatterns {
    fn compile(patterns: &[String]) -> Result<Self, ProjectError> {
        let mut compiled = Self {
            include: Vec::new(),
            exclude: Vec::new(),
        };

        for pattern in patterns {
            let (list, body) = match pattern.strip_prefix('!') {
                Some(rest) => (&mut compiled.exclude, rest),
                None => (&mut compiled.include, pattern.as_str()),
            };

            let matcher = GlobBuilder::new(body)
                .literal_separator(true)
                .build()
                .map_err(|source| ProjectError::GlobPattern {
                    pattern: pattern.clone(),
                    source,
                })?
                .compile_matcher();
            list.push(matcher);
        }

        Ok(compiled)
    }

    fn is_member(&self, relative: &Path) -> bool {
        self.include.iter().any(|glob| glob.is_match(relative))
            && !self.exclude.iter().any(|glob| glob.is_match(relative))
    }
}

fn walk_member_dirs(
    root: &Path,
    dir: &Path,
    patterns: &MemberPatterns,
    found: &mut Vec<PathBuf>,
) -> Result<(), ProjectError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if !path.is_dir() {
            continue;
        }

        // Installed dependencies carry their own manifests and must never
        // count as workspace members.
        if path.file_name().is_some_and(|name| name == "node_modules") {
            continue;
        }

        // Patterns are matched relative to the project root.
        let relative = path.strip_prefix(root).unwrap_or(&path);
        if patterns.is_member(relative) {
            found.push(path.clone());
        }

        walk_member_dirs(root, &path, patterns, found)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, contents: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(MANIFEST_FILE), contents)?;
        Ok(())
    }

    fn setup_workspace() -> anyhow::Result<TempDir> {
        let dir = TempDir::new()?;
        write_manifest(
            dir.path(),
            r#"{ "name": "root", "private": true, "workspaces": ["packages/*"] }"#,
        )?;
        write_manifest(
            &dir.path().join("packages/pkg-a"),
            r#"{ "name": "pkg-a", "version": "1.0.0" }"#,
        )?;
        write_manifest(
            &dir.path().join("packages/pkg-b"),
            r#"{ "name": "pkg-b", "version": "1.0.0", "dependencies": { "pkg-a": "^1.0.0" } }"#,
        )?;
        Ok(dir)
    }

    #[test]
    fn discovers_workspace_members() -> anyhow::Result<()> {
        let dir = setup_workspace()?;

        let project = discover_project(dir.path())?;

        assert_eq!(project.kind, ProjectKind::Workspace);
        assert_eq!(project.root, dir.path().canonicalize()?);
        let names: Vec<&str> = project.packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["pkg-a", "pkg-b"]);
        Ok(())
    }

    #[test]
    fn discovers_from_nested_directory() -> anyhow::Result<()> {
        let dir = setup_workspace()?;

        let project = discover_project(&dir.path().join("packages/pkg-a"))?;

        assert_eq!(project.kind, ProjectKind::Workspace);
        assert_eq!(project.root, dir.path().canonicalize()?);
        assert_eq!(project.packages.len(), 2);
        Ok(())
    }

    #[test]
    fn falls_back_to_single_package() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        write_manifest(dir.path(), r#"{ "name": "solo", "version": "0.1.0" }"#)?;

        let project = discover_project(dir.path())?;

        assert_eq!(project.kind, ProjectKind::SinglePackage);
        assert_eq!(project.packages.len(), 1);
        assert_eq!(project.packages[0].name, "solo");
        assert_eq!(project.packages[0].path, project.root);
        Ok(())
    }

    #[test]
    fn workspace_object_form_is_supported() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        write_manifest(
            dir.path(),
            r#"{ "name": "root", "workspaces": { "packages": ["libs/*"] } }"#,
        )?;
        write_manifest(
            &dir.path().join("libs/pkg-a"),
            r#"{ "name": "pkg-a", "version": "1.0.0" }"#,
        )?;

        let project = discover_project(dir.path())?;
        assert_eq!(project.packages.len(), 1);
        assert_eq!(project.packages[0].name, "pkg-a");
        Ok(())
    }

    #[test]
    fn negated_patterns_exclude_members() -> anyhow::Result<()> {
        let dir = setup_workspace()?;
        write_manifest(
            dir.path(),
            r#"{ "name": "root", "workspaces": ["packages/*", "!packages/pkg-b"] }"#,
        )?;

        let project = discover_project(dir.path())?;

        let names: Vec<&str> = project.packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["pkg-a"]);
        Ok(())
    }

    #[test]
    fn directories_without_manifest_are_skipped() -> anyhow::Result<()> {
        let dir = setup_workspace()?;
        std::fs::create_dir_all(dir.path().join("packages/not-a-package"))?;

        let project = discover_project(dir.path())?;
        assert_eq!(project.packages.len(), 2);
        Ok(())
    }

    #[test]
    fn node_modules_is_never_traversed() -> anyhow::Result<()> {
        let dir = setup_workspace()?;
        write_manifest(
            dir.path(),
            r#"{ "name": "root", "workspaces": ["packages/*", "**/vendored/*"] }"#,
        )?;
        write_manifest(
            &dir.path().join("node_modules/vendored/sneaky"),
            r#"{ "name": "sneaky", "version": "9.9.9" }"#,
        )?;

        let project = discover_project(dir.path())?;

        assert!(project.packages.iter().all(|p| p.name != "sneaky"));
        Ok(())
    }

    #[test]
    fn duplicate_package_names_fail() -> anyhow::Result<()> {
        let dir = setup_workspace()?;
        write_manifest(
            &dir.path().join("packages/pkg-a-copy"),
            r#"{ "name": "pkg-a", "version": "2.0.0" }"#,
        )?;

        let result = discover_project(dir.path());
        assert!(matches!(
            result,
            Err(ProjectError::DuplicatePackage { name, .. }) if name == "pkg-a"
        ));
        Ok(())
    }

    #[test]
    fn missing_manifest_reports_not_found() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let result = discover_project(dir.path());
        // The walk may escape the fixture and legitimately find an enclosing
        // project, so only the error shape is asserted when it fails.
        if let Err(err) = result {
            assert!(matches!(err, ProjectError::NotFound { .. }));
        }
    }

    #[test]
    fn root_config_is_loaded_from_root_manifest() -> anyhow::Result<()> {
        let dir = setup_workspace()?;
        write_manifest(
            dir.path(),
            r#"{
                "name": "root",
                "workspaces": ["packages/*"],
                "lockstep": { "circular": ["pkg-b"] }
            }"#,
        )?;

        let project = discover_project(dir.path())?;
        let config = crate::load_root_config(&project)?;

        assert!(config.is_circular("pkg-b"));
        assert!(!config.is_circular("pkg-a"));
        Ok(())
    }

    #[test]
    fn root_config_defaults_when_key_is_absent() -> anyhow::Result<()> {
        let dir = setup_workspace()?;

        let project = discover_project(dir.path())?;
        let config = crate::load_root_config(&project)?;

        assert!(config.circular().is_empty());
        Ok(())
    }
}
