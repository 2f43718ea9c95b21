pub mod info;

#[derive(clap::Subcommand)]
pub enum TexCommands {
    /// Summarize a texture file
    Info(info::InfoArgs),
}

impl TexCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            TexCommands::Info(info) => info.handle(),
        }
    }
}
