//! The user-level toolchain directory: Node check, bootstrap files and the
//! LLM skill install.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;

use anyhow::{Context, bail};
use semver::Version;
use sweep_config::{SweepConfig, TOOLCHAIN_CONFIG_FILE};
use tokio::process::Command as TokioCommand;

pub const MIN_NODE_VERSION: Version = Version::new(22, 13, 0);

const PACKAGE_JSON: &str = "package.json";

pub const SKILL_COMMAND: &str = "npx";
pub const SKILL_ARGS: &[&str] = &["skills", "add", "jjenzz/sweepi", "--skill", "sweepi", "--global", "--yes"];

/// Runs the external skill installer.
pub trait Installer {
    async fn install(&self, command: &str, args: &[&str], cwd: &Path) -> anyhow::Result<()>;
}

/// Spawns the installer as a subprocess, echoing its stderr.
#[derive(Debug, Default)]
pub struct ProcessInstaller;

impl Installer for ProcessInstaller {
    async fn install(&self, command: &str, args: &[&str], cwd: &Path) -> anyhow::Result<()> {
        tracing::debug!(command, ?args, cwd = %cwd.display(), "running installer");
        let output = TokioCommand::new(command)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .await
            .with_context(|| format!("failed to run \"{command}\""))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            eprint!("{stderr}");
        }
        if !output.status.success() {
            let code = output
                .status
                .code()
                .map_or_else(|| "unknown".to_string(), |code| code.to_string());
            bail!("{}", install_failure(&code, command, args, cwd, !stderr.trim().is_empty()));
        }
        Ok(())
    }
}

fn install_failure(code: &str, command: &str, args: &[&str], cwd: &Path, had_stderr: bool) -> String {
    let mut lines = vec![
        format!("Failed to initialize Sweepi toolchain (exit code {code})."),
        format!("Command: {command} {}", args.join(" ")),
        format!("Working directory: {}", cwd.display()),
    ];
    if had_stderr {
        lines.push("See installer output above for full error details.".to_string());
    }
    lines.join("\n")
}

/// Check `node --version` output against [`MIN_NODE_VERSION`].
pub fn check_node_version(reported: &str) -> anyhow::Result<Version> {
    let trimmed = reported.trim();
    let version = Version::parse(trimmed.trim_start_matches('v'))
        .with_context(|| format!("could not parse Node.js version \"{trimmed}\""))?;
    if version < MIN_NODE_VERSION {
        bail!("Sweepi requires Node.js >= {MIN_NODE_VERSION}. Detected v{version}.");
    }
    Ok(version)
}

/// Run `node --version` and check it.
pub async fn detect_node() -> anyhow::Result<Version> {
    let output = TokioCommand::new("node")
        .arg("--version")
        .output()
        .await
        .with_context(|| format!("Sweepi requires Node.js >= {MIN_NODE_VERSION}, but \"node\" could not be run"))?;
    check_node_version(&String::from_utf8_lossy(&output.stdout))
}

/// Result of bootstrapping the toolchain directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub dir: PathBuf,
    pub wrote_config: bool,
}

impl InitOutcome {
    #[must_use]
    pub fn summary(&self) -> String {
        if self.wrote_config {
            format!("Initialized Sweepi toolchain in {}", self.dir.display())
        } else {
            format!("Sweepi toolchain already initialized in {}", self.dir.display())
        }
    }
}

/// Create `dir` with its config and package manifest, then install the skill.
///
/// Existing files are left untouched unless `force` removes the whole
/// directory first.
pub async fn initialize(
    dir: &Path,
    force: bool,
    installer: &impl Installer,
    mut status: impl FnMut(&str),
) -> anyhow::Result<InitOutcome> {
    if force {
        status(&format!("Removing existing Sweepi toolchain in {}", dir.display()));
        match tokio::fs::remove_dir_all(dir).await {
            Ok(()) => {}
            Err(error) if error.kind() == ErrorKind::NotFound => {}
            Err(error) => {
                return Err(error).with_context(|| format!("failed to remove {}", dir.display()));
            }
        }
    }

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let wrote_config = ensure_file(&dir.join(TOOLCHAIN_CONFIG_FILE), &SweepConfig::toolchain_template()?).await?;
    let manifest = serde_json::to_string_pretty(&serde_json::json!({
        "name": "sweepi-toolchain",
        "private": true,
    }))?;
    ensure_file(&dir.join(PACKAGE_JSON), &format!("{manifest}\n")).await?;

    if wrote_config {
        status(&format!("Initializing Sweepi toolchain in {}", dir.display()));
    }

    status("Installing Sweepi LLM skill...");
    let started = Instant::now();
    installer.install(SKILL_COMMAND, SKILL_ARGS, dir).await?;
    status(&format!(
        "Installed Sweepi LLM skill in {:.1}s",
        started.elapsed().as_secs_f64()
    ));

    Ok(InitOutcome {
        dir: dir.to_path_buf(),
        wrote_config,
    })
}

/// Write `contents` to `path` unless it already exists. Returns whether it wrote.
async fn ensure_file(path: &Path, contents: &str) -> anyhow::Result<bool> {
    if tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("failed to inspect {}", path.display()))?
    {
        return Ok(false);
    }
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[derive(Default)]
    struct RecordingInstaller {
        calls: Mutex<Vec<(String, Vec<String>, PathBuf)>>,
        fail: bool,
    }

    impl Installer for RecordingInstaller {
        async fn install(&self, command: &str, args: &[&str], cwd: &Path) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push((
                command.to_string(),
                args.iter().map(ToString::to_string).collect(),
                cwd.to_path_buf(),
            ));
            if self.fail {
                bail!("{}", install_failure("1", command, args, cwd, true));
            }
            Ok(())
        }
    }

    #[rstest]
    #[case("v22.13.0\n")]
    #[case("v24.1.0")]
    #[case("22.14.2")]
    fn supported_node_versions(#[case] reported: &str) {
        assert!(check_node_version(reported).is_ok());
    }

    #[test]
    fn old_node_is_rejected() {
        let error = check_node_version("v20.11.1\n").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Sweepi requires Node.js >= 22.13.0. Detected v20.11.1."
        );
    }

    #[test]
    fn garbage_version_is_an_error() {
        assert!(check_node_version("not a version").is_err());
    }

    #[tokio::test]
    async fn fresh_init_writes_files_and_installs_skill() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("toolchain");
        let installer = RecordingInstaller::default();
        let mut lines = Vec::new();

        let outcome = initialize(&dir, false, &installer, |line| lines.push(line.to_string()))
            .await
            .unwrap();

        assert!(outcome.wrote_config);
        assert_eq!(outcome.summary(), format!("Initialized Sweepi toolchain in {}", dir.display()));
        let config = std::fs::read_to_string(dir.join(TOOLCHAIN_CONFIG_FILE)).unwrap();
        assert!(config.contains("presets"));
        assert!(config.contains("**/node_modules/**"));
        let manifest: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.join(PACKAGE_JSON)).unwrap()).unwrap();
        assert_eq!(manifest, serde_json::json!({"name": "sweepi-toolchain", "private": true}));

        let calls = installer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "npx");
        assert_eq!(calls[0].1, SKILL_ARGS.iter().map(ToString::to_string).collect::<Vec<_>>());
        assert_eq!(calls[0].2, dir);

        assert_eq!(lines[0], format!("Initializing Sweepi toolchain in {}", dir.display()));
        assert_eq!(lines[1], "Installing Sweepi LLM skill...");
        assert!(lines[2].starts_with("Installed Sweepi LLM skill in "));
    }

    #[tokio::test]
    async fn existing_config_is_kept() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().to_path_buf();
        std::fs::write(dir.join(TOOLCHAIN_CONFIG_FILE), "[lint]\npresets = [\"core\"]\n").unwrap();

        let outcome = initialize(&dir, false, &RecordingInstaller::default(), |_| {})
            .await
            .unwrap();

        assert!(!outcome.wrote_config);
        assert_eq!(
            outcome.summary(),
            format!("Sweepi toolchain already initialized in {}", dir.display())
        );
        assert_eq!(
            std::fs::read_to_string(dir.join(TOOLCHAIN_CONFIG_FILE)).unwrap(),
            "[lint]\npresets = [\"core\"]\n"
        );
        assert!(dir.join(PACKAGE_JSON).exists());
    }

    #[tokio::test]
    async fn force_recreates_the_directory() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("toolchain");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(TOOLCHAIN_CONFIG_FILE), "custom").unwrap();
        std::fs::write(dir.join("stale.txt"), "old").unwrap();
        let mut lines = Vec::new();

        let outcome = initialize(&dir, true, &RecordingInstaller::default(), |line| lines.push(line.to_string()))
            .await
            .unwrap();

        assert!(outcome.wrote_config);
        assert!(!dir.join("stale.txt").exists());
        assert_ne!(std::fs::read_to_string(dir.join(TOOLCHAIN_CONFIG_FILE)).unwrap(), "custom");
        assert_eq!(lines[0], format!("Removing existing Sweepi toolchain in {}", dir.display()));
    }

    #[tokio::test]
    async fn installer_failure_propagates() {
        let temp = tempfile::tempdir().unwrap();
        let installer = RecordingInstaller {
            fail: true,
            ..RecordingInstaller::default()
        };

        let error = initialize(temp.path(), false, &installer, |_| {}).await.unwrap_err();
        let message = error.to_string();
        let lines: Vec<&str> = message.lines().collect();

        assert_eq!(lines[0], "Failed to initialize Sweepi toolchain (exit code 1).");
        assert_eq!(lines[1], "Command: npx skills add jjenzz/sweepi --skill sweepi --global --yes");
        assert_eq!(lines[2], format!("Working directory: {}", temp.path().display()));
        assert_eq!(lines[3], "See installer output above for full error details.");
    }

    #[test]
    fn failure_without_stderr_has_three_lines() {
        let message = install_failure("unknown", "npx", &["skills"], Path::new("/tmp/t"), false);
        assert_eq!(message.lines().count(), 3);
    }
}
