//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars. Every test points
//! `SWEEPI_TOOLCHAIN__DIR` into the jail so the real home directory is never read.

use figment::Jail;
use pretty_assertions::assert_eq;
use serde_json::json;
use sweep_config::{ConfigError, RuleSetting, SweepConfig};
use sweep_core::Severity;

fn make_toolchain(jail: &mut Jail, contents: &str) -> figment::error::Result<()> {
    let dir = jail.directory().join("toolchain");
    std::fs::create_dir_all(&dir).map_err(|error| error.to_string())?;
    jail.set_env("SWEEPI_TOOLCHAIN__DIR", dir.display());
    jail.create_file("toolchain/sweepi.toml", contents)?;
    Ok(())
}

fn load(jail: &Jail) -> figment::error::Result<SweepConfig> {
    Ok(SweepConfig::load(jail.directory()).map_err(|error| error.to_string())?)
}

#[test]
fn defaults_apply_without_files() {
    Jail::expect_with(|jail| {
        jail.set_env("SWEEPI_TOOLCHAIN__DIR", jail.directory().join("missing").display());

        let config = load(jail)?;
        assert_eq!(config.lint.presets, vec!["core", "react"]);
        assert_eq!(config.lint.files, vec!["**/*.ts", "**/*.tsx"]);
        assert!(config.rules.is_empty());
        Ok(())
    });
}

#[test]
fn project_file_overrides_toolchain_file() {
    Jail::expect_with(|jail| {
        make_toolchain(
            jail,
            r#"
[lint]
presets = ["core", "react"]
ignores = ["**/vendor/**"]

[rules.complexity]
level = "warn"
"#,
        )?;
        jail.create_file(
            ".sweepi.toml",
            r#"
[lint]
presets = ["react"]

[rules.complexity]
level = "error"
options = { max = 10, variant = "classic" }

[rules]
no-array-props = "off"
"#,
        )?;

        let config = load(jail)?;
        assert_eq!(config.lint.presets, vec!["react"]);
        assert_eq!(config.lint.ignores, vec!["**/vendor/**"]);

        let complexity = config.rule("complexity").expect("complexity override");
        assert_eq!(complexity.level(), Some(Severity::Error));
        assert_eq!(
            complexity.options(),
            Some(&json!({"max": 10, "variant": "classic"}))
        );
        assert_eq!(
            config.rule("no-array-props"),
            Some(&RuleSetting::Level(Severity::Off))
        );
        Ok(())
    });
}

#[test]
fn env_var_overrides_files() {
    Jail::expect_with(|jail| {
        make_toolchain(jail, "[lint]\npresets = [\"core\"]\n")?;
        jail.create_file(".sweepi.toml", "[rules.max-params]\nlevel = \"warn\"\n")?;
        jail.set_env("SWEEPI_LINT__PRESETS", "[\"react\"]");
        jail.set_env("SWEEPI_RULES__MAX_PARAMS__LEVEL", "error");

        let config = load(jail)?;
        assert_eq!(config.lint.presets, vec!["react"]);
        assert_eq!(
            config.rule("max-params").and_then(RuleSetting::level),
            Some(Severity::Error)
        );
        Ok(())
    });
}

#[test]
fn toolchain_dir_comes_from_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(".sweepi.toml", "[toolchain]\ndir = \"/opt/sweepi\"\n")?;

        let toolchain = SweepConfig::toolchain(jail.directory()).map_err(|error| error.to_string())?;
        assert_eq!(toolchain.dir, Some("/opt/sweepi".into()));
        Ok(())
    });
}

#[test]
fn malformed_level_is_a_config_error() {
    Jail::expect_with(|jail| {
        jail.set_env("SWEEPI_TOOLCHAIN__DIR", jail.directory().join("missing").display());
        jail.create_file(".sweepi.toml", "[rules]\ncomplexity = \"loud\"\n")?;

        let error = SweepConfig::load(jail.directory()).unwrap_err();
        assert!(matches!(error, ConfigError::Figment(_)));
        Ok(())
    });
}
