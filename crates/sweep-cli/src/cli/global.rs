use clap::ValueEnum;

/// How lint reports are printed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Stylish,
    Json,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl GlobalFlags {
    /// Print a status line unless quiet. JSON output keeps stdout for the
    /// report, so status lines move to stderr there.
    pub fn status(&self, line: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Stylish => println!("{}", line.as_ref()),
            OutputFormat::Json => eprintln!("{}", line.as_ref()),
        }
    }
}
