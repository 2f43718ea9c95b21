pub mod rep;
pub mod tex;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle replay files
    Rep {
        #[command(subcommand)]
        command: rep::RepCommands,
    },
    /// Handle texture files
    Tex {
        #[command(subcommand)]
        command: tex::TexCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Rep { command } => command.handle(),
            Commands::Tex { command } => command.handle(),
        }
    }
}
