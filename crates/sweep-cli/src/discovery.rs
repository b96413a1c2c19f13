//! File selection for a run: every matching file, explicit paths, or the
//! files git reports as changed.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use sweep_config::LintConfig;
use tokio::process::Command as TokioCommand;

const CHANGED_FILE_COMMANDS: [&[&str]; 3] = [
    &["diff", "--name-only", "--diff-filter=ACMR"],
    &["diff", "--cached", "--name-only", "--diff-filter=ACMR"],
    &["ls-files", "--others", "--exclude-standard"],
];

/// `[lint] files` and `ignores` compiled into glob sets.
#[derive(Debug, Clone)]
pub struct FileFilter {
    include: GlobSet,
    exclude: GlobSet,
}

impl FileFilter {
    pub fn new(lint: &LintConfig) -> anyhow::Result<Self> {
        Ok(Self {
            include: glob_set(&lint.files)?,
            exclude: glob_set(&lint.ignores)?,
        })
    }

    /// Whether a project-relative path should be linted.
    #[must_use]
    pub fn matches(&self, relative: &Path) -> bool {
        self.include.is_match(relative) && !self.exclude.is_match(relative)
    }

    /// Keep the paths under `project` that match. Paths outside the project
    /// are matched as given.
    #[must_use]
    pub fn retain(&self, project: &Path, files: Vec<PathBuf>) -> Vec<PathBuf> {
        files
            .into_iter()
            .filter(|path| self.matches(path.strip_prefix(project).unwrap_or(path)))
            .collect()
    }
}

fn glob_set(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).with_context(|| format!("invalid glob \"{pattern}\""))?);
    }
    Ok(builder.build()?)
}

/// Walk `project` honoring `.gitignore`, returning matching files sorted.
pub fn all_files(project: &Path, filter: &FileFilter) -> anyhow::Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(project);
    builder.require_git(false);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.context("failed to walk project directory")?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let relative = entry.path().strip_prefix(project).unwrap_or(entry.path());
        if filter.matches(relative) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    tracing::debug!(count = files.len(), "walked project");
    Ok(files)
}

/// Resolve `--file` arguments against the project directory.
#[must_use]
pub fn explicit_files(project: &Path, files: &[PathBuf]) -> Vec<PathBuf> {
    files.iter().map(|file| project.join(file)).collect()
}

/// Union of unstaged, staged and untracked files, first occurrence wins.
pub async fn changed_files(project: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let (unstaged, staged, untracked) = tokio::try_join!(
        git_list(project, CHANGED_FILE_COMMANDS[0]),
        git_list(project, CHANGED_FILE_COMMANDS[1]),
        git_list(project, CHANGED_FILE_COMMANDS[2]),
    )?;

    let mut seen = HashSet::new();
    Ok(unstaged
        .into_iter()
        .chain(staged)
        .chain(untracked)
        .filter(|name| seen.insert(name.clone()))
        .map(|name| project.join(name))
        .collect())
}

async fn git_list(project: &Path, args: &[&str]) -> anyhow::Result<Vec<String>> {
    let output = TokioCommand::new("git")
        .args(args)
        .current_dir(project)
        .output()
        .await
        .with_context(|| format!("failed to run \"git {}\"", args.join(" ")))?;

    if !output.status.success() {
        bail!(
            "Failed to list changed files with \"git {}\" in {}.\n{}",
            args.join(" "),
            project.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
