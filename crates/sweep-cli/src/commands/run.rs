use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use sweep_config::SweepConfig;
use sweep_rules::{FileReport, Linter};

use crate::cli::{GlobalFlags, RunArgs, Selection};
use crate::discovery::{self, FileFilter};
use crate::output::{self, Summary};

/// Reports for one lint run.
#[derive(Debug)]
pub struct RunResult {
    pub project: PathBuf,
    pub reports: Vec<FileReport>,
}

/// Handle the default command: lint and print.
pub async fn handle(args: &RunArgs, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    let Some(result) = collect(args, flags).await? else {
        return Ok(ExitCode::SUCCESS);
    };

    let rendered = output::render(&result.reports, flags.format, &result.project)?;
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end());
    }

    if Summary::of(&result.reports).errors > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Resolve the project and toolchain, select files and lint them.
/// `None` when no file was selected.
pub async fn collect(args: &RunArgs, flags: &GlobalFlags) -> anyhow::Result<Option<RunResult>> {
    let project = resolve_project(&args.project_dir)?;
    let toolchain_dir = ensure_toolchain(&project)?;
    flags.status(format!("Using Sweepi toolchain in {}", toolchain_dir.display()));

    let config = SweepConfig::load(&project).context("failed to load Sweepi configuration")?;
    let filter = FileFilter::new(&config.lint)?;

    let selection = args.selection();
    let files = match &selection {
        Selection::All => discovery::all_files(&project, &filter)?,
        Selection::Files(files) => filter.retain(&project, discovery::explicit_files(&project, files)),
        Selection::Changed => filter.retain(&project, discovery::changed_files(&project).await?),
    };

    if files.is_empty() {
        flags.status(match selection {
            Selection::Changed => "No changed files to lint.",
            Selection::All | Selection::Files(_) => "No files to lint.",
        });
        return Ok(None);
    }

    let linter = Linter::new(&config).context("invalid rule configuration")?;
    tracing::debug!(files = files.len(), rules = linter.rule_names().count(), "linting");
    let reports = tokio::task::spawn_blocking(move || linter.lint_paths(&files))
        .await
        .context("lint worker failed")?;

    Ok(Some(RunResult { project, reports }))
}

fn resolve_project(dir: &Path) -> anyhow::Result<PathBuf> {
    let project = std::path::absolute(dir).with_context(|| format!("invalid project path {}", dir.display()))?;
    if !project.is_dir() {
        bail!("Project directory does not exist: {}", project.display());
    }
    Ok(project)
}

fn ensure_toolchain(project: &Path) -> anyhow::Result<PathBuf> {
    let toolchain = SweepConfig::toolchain(project)?;
    let (Some(dir), Some(config)) = (toolchain.resolved_dir(), toolchain.config_path()) else {
        bail!("could not determine the home directory; set SWEEPI_TOOLCHAIN__DIR");
    };
    if !config.is_file() {
        bail!(
            "Sweepi toolchain is not initialized in {}. Run \"sweepi init\" first.",
            dir.display()
        );
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use sweep_config::{PROJECT_CONFIG_FILE, TOOLCHAIN_CONFIG_FILE};

    use super::*;

    const QUIET: GlobalFlags = GlobalFlags {
        format: crate::cli::OutputFormat::Stylish,
        quiet: true,
    };

    /// A project whose `.sweepi.toml` points at a toolchain inside the tempdir.
    fn project(initialized: bool) -> tempfile::TempDir {
        let temp = tempfile::tempdir().unwrap();
        let toolchain = temp.path().join("toolchain");
        fs::create_dir_all(&toolchain).unwrap();
        if initialized {
            fs::write(
                toolchain.join(TOOLCHAIN_CONFIG_FILE),
                SweepConfig::toolchain_template().unwrap(),
            )
            .unwrap();
        }
        fs::write(
            temp.path().join(PROJECT_CONFIG_FILE),
            format!("[toolchain]\ndir = {:?}\n", toolchain.display().to_string()),
        )
        .unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(
            temp.path().join("src/counter.ts"),
            "let count = 1;\nexport const value = count;\n",
        )
        .unwrap();
        fs::write(temp.path().join("src/clean.ts"), "export const ready = true;\n").unwrap();
        temp
    }

    fn args(dir: &Path, all: bool, file: Vec<PathBuf>) -> RunArgs {
        RunArgs {
            project_dir: dir.to_path_buf(),
            all,
            file,
        }
    }

    #[tokio::test]
    async fn missing_project_directory() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("nope");
        let error = collect(&args(&missing, true, vec![]), &QUIET).await.unwrap_err();
        assert_eq!(
            error.to_string(),
            format!("Project directory does not exist: {}", missing.display())
        );
    }

    #[tokio::test]
    async fn uninitialized_toolchain() {
        let temp = project(false);
        let error = collect(&args(temp.path(), true, vec![]), &QUIET).await.unwrap_err();
        assert_eq!(
            error.to_string(),
            format!(
                "Sweepi toolchain is not initialized in {}. Run \"sweepi init\" first.",
                temp.path().join("toolchain").display()
            )
        );
    }

    #[tokio::test]
    async fn all_lints_every_matching_file() {
        let temp = project(true);
        let result = collect(&args(temp.path(), true, vec![]), &QUIET)
            .await
            .unwrap()
            .unwrap();

        let paths: Vec<PathBuf> = result.reports.iter().map(|report| report.path.clone()).collect();
        assert_eq!(
            paths,
            vec![temp.path().join("src/clean.ts"), temp.path().join("src/counter.ts")]
        );
        let counter = &result.reports[1];
        assert!(counter.messages.iter().any(|message| message.rule == Some("prefer-const")));
        assert!(Summary::of(&result.reports).errors > 0);
        assert!(result.reports[0].is_clean());
    }

    #[tokio::test]
    async fn explicit_files_skip_non_matching_paths() {
        let temp = project(true);
        fs::write(temp.path().join("README.md"), "# readme\n").unwrap();
        let result = collect(
            &args(
                temp.path(),
                false,
                vec![PathBuf::from("src/clean.ts"), PathBuf::from("README.md")],
            ),
            &QUIET,
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.reports[0].path, temp.path().join("src/clean.ts"));
    }

    #[tokio::test]
    async fn nothing_selected_is_not_an_error() {
        let temp = project(true);
        let result = collect(&args(temp.path(), false, vec![PathBuf::from("notes.md")]), &QUIET)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
