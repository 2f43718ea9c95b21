use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use sage_rep::ReplayFile;
use std::{fs::File, path::PathBuf};

#[derive(Args)]
pub struct InfoArgs {
    /// An input replay file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl InfoArgs {
    pub fn handle(&self) -> Result<()> {
        let f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let replay = ReplayFile::read(f)?;

        let header = &replay.header;
        println!("{} {}", "file:".bold(), header.filename);
        println!(
            "{} {} (build {})",
            "version:".bold(),
            header.version,
            header.build_date
        );
        println!(
            "{} {:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            "recorded:".bold(),
            header.date_time.year,
            header.date_time.month,
            header.date_time.day,
            header.date_time.hour,
            header.date_time.minute,
            header.date_time.second,
        );
        println!("{} {}", "options:".bold(), header.game_options);
        println!("{} {}", "timecodes:".bold(), header.num_timecodes);
        println!("{} {}", "chunks:".bold(), replay.chunks.len());

        Ok(())
    }
}
