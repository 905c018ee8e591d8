use clap::Parser;
use std::path::PathBuf;

const LONG_ABOUT: &str = "Vixen Dio Pro Synthesis Flow

This tool runs the complete OpenROAD synthesis flow for
the Vixen Dio Pro processor targeting 130nm process technology.";

#[derive(Parser, Debug)]
#[command(
    name = "vixen-flow",
    version,
    about = "Vixen Dio Pro Synthesis Flow",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        value_name = "DIR",
        help = "Project root holding config/, scripts/, results/, reports/ and logs/ (default: current directory)"
    )]
    pub project_root: Option<PathBuf>,
    /// Extra arguments are accepted for compatibility and ignored; the full flow always runs.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Absolute project root; the tool runs from it, so relative paths would not survive.
    pub fn project_root(&self) -> anyhow::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        match &self.project_root {
            Some(p) if p.is_absolute() => Ok(p.clone()),
            Some(p) => Ok(cwd.join(p)),
            None => Ok(cwd),
        }
    }
}
