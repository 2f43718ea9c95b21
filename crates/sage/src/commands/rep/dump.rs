use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use sage_rep::ReplayFile;
use std::{fs::File, path::PathBuf};

#[derive(Args)]
pub struct DumpArgs {
    /// An input replay file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl DumpArgs {
    pub fn handle(&self) -> Result<()> {
        let f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let replay = ReplayFile::read(f)?;

        let json = serde_json::to_string_pretty(&replay).into_diagnostic()?;
        println!("{json}");

        Ok(())
    }
}
