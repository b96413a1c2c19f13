use anyhow::Context;
use sweep_config::SweepConfig;

use crate::cli::{GlobalFlags, InitArgs};
use crate::toolchain::{self, ProcessInstaller};

/// Handle `sweepi init`.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let node = toolchain::detect_node().await?;
    tracing::debug!(%node, "node version accepted");

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let dir = SweepConfig::toolchain(&cwd)?
        .resolved_dir()
        .context("could not determine the home directory; set SWEEPI_TOOLCHAIN__DIR")?;

    let outcome = toolchain::initialize(&dir, args.force, &ProcessInstaller, |line| flags.status(line)).await?;
    println!("{}", outcome.summary());
    Ok(())
}
