//! DDS container decoding
//!

use binrw::BinRead;
use std::io::{self, Read, Seek};
use tracing::trace;

use crate::{
    error::{Error, Result},
    types::{MipLevel, PixelFormat, TextureDescriptor},
};

/// Structure size the header must declare for itself.
const HEADER_SIZE: u32 = 124;
/// Largest texture edge the engine's renderer accepts (D3D limit).
const MAX_DIMENSION: u32 = 0x4000;
/// Structure size of the pixel format sub-header.
const PIXEL_FORMAT_SIZE: u32 = 32;

/// `DDSD_MIPMAPCOUNT`: the mip count field is valid.
const FLAG_MIP_MAP_COUNT: u32 = 0x0002_0000;
/// `DDPF_FOURCC`: the pixel format is identified by its FourCC.
const FLAG_FOUR_CC: u32 = 0x0000_0004;
/// `DDPF_RGB`: uncompressed data with explicit channel masks.
const FLAG_RGB: u32 = 0x0000_0040;

const FOUR_CC_DXT1: u32 = u32::from_le_bytes(*b"DXT1");
const FOUR_CC_DXT3: u32 = u32::from_le_bytes(*b"DXT3");
const FOUR_CC_DXT5: u32 = u32::from_le_bytes(*b"DXT5");

/// DDS file header, everything after the 4-byte magic.
#[derive(BinRead, Debug, Clone, PartialEq)]
#[br(little, magic = b"DDS ")]
pub struct DdsHeader {
    pub size: u32,
    pub flags: u32,
    pub height: u32,
    pub width: u32,
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    pub mip_map_count: u32,
    pub reserved1: [u32; 11],
    pub pixel_format: DdsPixelFormat,
    pub caps: u32,
    pub caps2: u32,
    pub caps3: u32,
    pub caps4: u32,
    pub reserved2: u32,
}

/// Pixel format sub-header.
#[derive(BinRead, Debug, Clone, PartialEq)]
#[br(little)]
pub struct DdsPixelFormat {
    pub size: u32,
    pub flags: u32,
    pub four_cc: u32,
    pub rgb_bit_count: u32,
    pub r_bit_mask: u32,
    pub g_bit_mask: u32,
    pub b_bit_mask: u32,
    pub a_bit_mask: u32,
}

/// Byte order of an uncompressed 32-bit payload, derived from the channel
/// masks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ChannelOrder {
    Rgba,
    Bgra,
}

fn classify(pixel_format: &DdsPixelFormat) -> Result<(PixelFormat, Option<ChannelOrder>)> {
    if pixel_format.flags & FLAG_FOUR_CC != 0 {
        return match pixel_format.four_cc {
            FOUR_CC_DXT1 => Ok((PixelFormat::Bc1, None)),
            FOUR_CC_DXT3 => Ok((PixelFormat::Bc2, None)),
            FOUR_CC_DXT5 => Ok((PixelFormat::Bc3, None)),
            _ => Err(Error::UnsupportedPixelFormat),
        };
    }

    if pixel_format.flags & FLAG_RGB != 0 && pixel_format.rgb_bit_count == 32 {
        let order = match pixel_format.r_bit_mask {
            0x0000_00FF => ChannelOrder::Rgba,
            0x00FF_0000 => ChannelOrder::Bgra,
            _ => return Err(Error::UnsupportedPixelFormat),
        };
        return Ok((PixelFormat::Rgba8, Some(order)));
    }

    Err(Error::UnsupportedPixelFormat)
}

/// Decode a DDS container into the canonical descriptor.
///
/// Mip levels are stored largest-first; each level is read with the exact
/// byte size its format and dimensions dictate, so a truncated payload is
/// caught at the level it first goes missing.
pub fn read<R: Read + Seek>(mut reader: R) -> Result<TextureDescriptor> {
    let header = DdsHeader::read(&mut reader)?;

    if header.size != HEADER_SIZE || header.pixel_format.size != PIXEL_FORMAT_SIZE {
        return Err(Error::InvalidHeader);
    }
    if header.width == 0 || header.height == 0 {
        return Err(Error::InvalidHeader);
    }
    if header.width > MAX_DIMENSION || header.height > MAX_DIMENSION {
        return Err(Error::InvalidHeader);
    }

    let (format, channel_order) = classify(&header.pixel_format)?;

    let mip_count = if header.flags & FLAG_MIP_MAP_COUNT != 0 {
        header.mip_map_count.max(1)
    } else {
        1
    };
    // A full chain stops at 1x1; a count past that cannot match any payload.
    if mip_count > header.width.max(header.height).ilog2() + 1 {
        return Err(Error::InvalidHeader);
    }

    trace!(
        width = header.width,
        height = header.height,
        mip_count,
        ?format,
        "decoding dds"
    );

    let mut position = reader.stream_position()?;
    let mut mips = Vec::with_capacity(mip_count as usize);
    for level in 0..mip_count {
        let width = (header.width >> level).max(1);
        let height = (header.height >> level).max(1);

        let mut data = vec![0u8; format.bytes_for_level(width, height)];
        reader.read_exact(&mut data).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                Error::OutOfData { offset: position }
            } else {
                Error::IOError(e)
            }
        })?;
        position += data.len() as u64;

        if channel_order == Some(ChannelOrder::Bgra) {
            for pixel in data.chunks_exact_mut(4) {
                pixel.swap(0, 2);
            }
        }

        mips.push(MipLevel {
            width,
            height,
            data: data.into_boxed_slice(),
        });
    }

    Ok(TextureDescriptor {
        width: header.width,
        height: header.height,
        format,
        mips,
    })
}
