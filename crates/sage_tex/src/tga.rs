//! TGA image decoding
//!

use binrw::BinRead;
use std::io::{self, Read, Seek};
use tracing::trace;

use crate::{
    error::{Error, Result},
    types::{MipLevel, PixelFormat, TextureDescriptor},
};

/// Uncompressed color-mapped image.
pub const IMAGE_TYPE_COLOR_MAPPED: u8 = 1;
/// Uncompressed truecolor image.
pub const IMAGE_TYPE_TRUE_COLOR: u8 = 2;

/// Bit 5 of the image descriptor: rows are stored top-down.
const DESCRIPTOR_TOP_DOWN: u8 = 0x20;

/// 18-byte TGA file header. The format has no magic number.
#[derive(BinRead, Debug, Clone, PartialEq)]
#[br(little)]
pub struct TgaHeader {
    pub id_length: u8,
    pub color_map_type: u8,
    pub image_type: u8,
    pub color_map_origin: u16,
    pub color_map_length: u16,
    pub color_map_entry_size: u8,
    pub x_origin: u16,
    pub y_origin: u16,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub image_descriptor: u8,
}

impl TgaHeader {
    /// Whether the header describes an image this decoder can read.
    ///
    /// Used as the format probe: TGA has no magic, so header plausibility is
    /// the only detection signal available.
    pub fn is_supported(&self) -> bool {
        match self.image_type {
            IMAGE_TYPE_COLOR_MAPPED => {
                self.color_map_type == 1
                    && self.bits_per_pixel == 8
                    && matches!(self.color_map_entry_size, 24 | 32)
            }
            IMAGE_TYPE_TRUE_COLOR => matches!(self.bits_per_pixel, 24 | 32),
            _ => false,
        }
    }

    fn is_top_down(&self) -> bool {
        self.image_descriptor & DESCRIPTOR_TOP_DOWN != 0
    }
}

/// Decode a TGA image into the canonical descriptor with a single mip level.
///
/// All source encodings (8-bit color-mapped, 24-bit BGR, 32-bit BGRA) are
/// converted to 8-bit RGBA with rows top-down, flipping bottom-up images per
/// the header's orientation flag.
pub fn read<R: Read + Seek>(mut reader: R) -> Result<TextureDescriptor> {
    let header = TgaHeader::read(&mut reader)?;

    if header.width == 0 || header.height == 0 {
        return Err(Error::InvalidHeader);
    }
    if !header.is_supported() {
        return Err(Error::UnsupportedImageType(header.image_type));
    }

    let width = header.width as usize;
    let height = header.height as usize;

    trace!(
        width,
        height,
        image_type = header.image_type,
        bits_per_pixel = header.bits_per_pixel,
        "decoding tga"
    );

    let mut position = reader.stream_position()?;
    let mut read_block = |reader: &mut R, len: usize| -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; len];
        reader.read_exact(&mut buffer).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                Error::OutOfData { offset: position }
            } else {
                Error::IOError(e)
            }
        })?;
        position += len as u64;
        Ok(buffer)
    };

    // Image id field, opaque.
    read_block(&mut reader, header.id_length as usize)?;

    let palette = if header.color_map_type == 1 {
        let entry_bytes = header.color_map_entry_size as usize / 8;
        Some((
            read_block(
                &mut reader,
                header.color_map_length as usize * entry_bytes,
            )?,
            entry_bytes,
        ))
    } else {
        None
    };

    let pixel_bytes = header.bits_per_pixel as usize / 8;
    let pixels = read_block(&mut reader, width * height * pixel_bytes)?;

    let mut rgba = vec![0u8; width * height * 4];
    for row in 0..height {
        let source_row = if header.is_top_down() {
            row
        } else {
            height - 1 - row
        };

        for column in 0..width {
            let source = (source_row * width + column) * pixel_bytes;
            let target = (row * width + column) * 4;

            let (b, g, r, a) = match header.image_type {
                IMAGE_TYPE_COLOR_MAPPED => {
                    let (entries, entry_bytes) = palette.as_ref().ok_or(Error::InvalidHeader)?;
                    // Pixel values index the palette relative to its origin.
                    let index = (pixels[source] as usize)
                        .checked_sub(header.color_map_origin as usize)
                        .ok_or(Error::InvalidHeader)?
                        * entry_bytes;
                    let entry = entries
                        .get(index..index + *entry_bytes)
                        .ok_or(Error::InvalidHeader)?;
                    let alpha = if *entry_bytes == 4 { entry[3] } else { 0xFF };
                    (entry[0], entry[1], entry[2], alpha)
                }
                _ => {
                    let alpha = if pixel_bytes == 4 {
                        pixels[source + 3]
                    } else {
                        0xFF
                    };
                    (pixels[source], pixels[source + 1], pixels[source + 2], alpha)
                }
            };

            rgba[target] = r;
            rgba[target + 1] = g;
            rgba[target + 2] = b;
            rgba[target + 3] = a;
        }
    }

    Ok(TextureDescriptor {
        width: header.width as u32,
        height: header.height as u32,
        format: PixelFormat::Rgba8,
        mips: vec![MipLevel {
            width: header.width as u32,
            height: header.height as u32,
            data: rgba.into_boxed_slice(),
        }],
    })
}
