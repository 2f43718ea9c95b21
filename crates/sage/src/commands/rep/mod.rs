pub mod dump;
pub mod info;

#[derive(clap::Subcommand)]
pub enum RepCommands {
    /// Summarize a replay file
    Info(info::InfoArgs),
    /// Dump a replay file as JSON
    Dump(dump::DumpArgs),
}

impl RepCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            RepCommands::Info(info) => info.handle(),
            RepCommands::Dump(dump) => dump.handle(),
        }
    }
}
