//! Canonical texture types shared by all three container decoders

/// Pixel format of the canonical descriptor.
///
/// Closed set: the block-compressed formats the engine ships plus the one
/// raw format every conversion path converges on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelFormat {
    /// BC1 (DXT1), 8 bytes per 4x4 block
    Bc1,
    /// BC2 (DXT3), 16 bytes per 4x4 block
    Bc2,
    /// BC3 (DXT5), 16 bytes per 4x4 block
    Bc3,
    /// 8-bit per channel RGBA, rows top-down
    Rgba8,
}

impl PixelFormat {
    /// Bytes per 4x4 block for the compressed formats.
    pub fn block_size(&self) -> Option<usize> {
        match self {
            PixelFormat::Bc1 => Some(8),
            PixelFormat::Bc2 | PixelFormat::Bc3 => Some(16),
            PixelFormat::Rgba8 => None,
        }
    }

    /// Exact byte size of one mip level with the given dimensions.
    pub fn bytes_for_level(&self, width: u32, height: u32) -> usize {
        match self.block_size() {
            Some(block) => {
                let blocks_wide = width.div_ceil(4) as usize;
                let blocks_high = height.div_ceil(4) as usize;
                blocks_wide * blocks_high * block
            }
            None => width as usize * height as usize * 4,
        }
    }
}

/// One level of a mip chain.
#[derive(Debug, Clone, PartialEq)]
pub struct MipLevel {
    pub width: u32,
    pub height: u32,
    /// Raw bytes, sized exactly per the descriptor's format and this level's
    /// dimensions
    pub data: Box<[u8]>,
}

/// Canonical decoded texture, container-agnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDescriptor {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    /// Mip chain in descending size order; never empty
    pub mips: Vec<MipLevel>,
}

impl TextureDescriptor {
    pub fn mip_count(&self) -> usize {
        self.mips.len()
    }
}

/// The container formats a texture reference can resolve to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ContainerKind {
    Dds,
    Tga,
    Jpeg,
}

impl ContainerKind {
    /// Canonical file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ContainerKind::Dds => "dds",
            ContainerKind::Tga => "tga",
            ContainerKind::Jpeg => "jpg",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "dds" => Some(ContainerKind::Dds),
            "tga" => Some(ContainerKind::Tga),
            "jpg" | "jpeg" => Some(ContainerKind::Jpeg),
            _ => None,
        }
    }
}

/// The probe order the engine uses when a texture reference carries no
/// extension.
pub const EXTENSION_PRIORITY: [ContainerKind; 3] =
    [ContainerKind::Dds, ContainerKind::Tga, ContainerKind::Jpeg];
