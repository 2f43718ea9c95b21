use clap::Args;
use miette::{miette, Result};
use owo_colors::OwoColorize;
use sage_tex::{load_texture, TextureOptions, EXTENSION_PRIORITY};
use std::{fs::File, path::PathBuf};
use tracing::debug;

#[derive(Args)]
pub struct InfoArgs {
    /// A texture path; the extension is treated as a preference, not a
    /// requirement, and sibling files with the other known extensions are
    /// tried as well
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Synthesize a full mip chain for single-image containers
    #[arg(long, default_value_t = false)]
    mips: bool,
}

impl InfoArgs {
    pub fn handle(&self) -> Result<()> {
        let options = TextureOptions {
            generate_mip_maps: self.mips,
        };

        let descriptor = load_texture(
            &EXTENSION_PRIORITY,
            |kind| {
                let candidate = self.file.with_extension(kind.extension());
                debug!("trying {}", candidate.display());
                File::open(candidate).ok()
            },
            &options,
        )?
        .ok_or_else(|| miette!("no texture found for {}", self.file.display()))?;

        println!(
            "{} {}x{}",
            "dimensions:".bold(),
            descriptor.width,
            descriptor.height
        );
        println!("{} {:?}", "format:".bold(), descriptor.format);
        println!("{} {}", "mip levels:".bold(), descriptor.mip_count());
        for (level, mip) in descriptor.mips.iter().enumerate() {
            println!(
                "  {level:>2}: {}x{} ({} bytes)",
                mip.width,
                mip.height,
                mip.data.len()
            );
        }

        Ok(())
    }
}
