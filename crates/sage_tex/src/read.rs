//! Candidate resolution and format detection
//!

use binrw::BinRead;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};
use tracing::{debug, trace};

use crate::{
    dds,
    error::{Error, Result},
    tga::{self, TgaHeader},
    types::{ContainerKind, MipLevel, PixelFormat, TextureDescriptor},
};

/// Decode-time options.
#[derive(Debug, Default, Copy, Clone)]
pub struct TextureOptions {
    /// Synthesize a full mip chain for containers that store a single image
    /// (TGA, JPEG). DDS mip chains are always taken as stored.
    pub generate_mip_maps: bool,
}

/// Resolve a texture through an ordered list of candidate containers.
///
/// `open` is the caller's file lookup: handed a [`ContainerKind`], it returns
/// a byte source when a file with that extension exists. The first candidate
/// that exists and passes its format probe is decoded; a candidate named
/// `.dds` whose magic probe fails is re-probed as TGA, since misnamed files
/// ship in real game data.
///
/// Returns `Ok(None)` when no candidate exists at all — a missing optional
/// texture is an ordinary result. [`Error::UnrecognizedFormat`] is returned
/// only when candidates existed but every probe failed. A decode error after
/// a successful probe is fatal.
pub fn load_texture<R, F>(
    priority: &[ContainerKind],
    mut open: F,
    options: &TextureOptions,
) -> Result<Option<TextureDescriptor>>
where
    R: Read + Seek,
    F: FnMut(ContainerKind) -> Option<R>,
{
    let mut any_candidate = false;

    for &candidate in priority {
        let Some(mut reader) = open(candidate) else {
            continue;
        };
        any_candidate = true;

        for &attempt in probe_order(candidate) {
            if probe(attempt, &mut reader)? {
                debug!(?candidate, ?attempt, "texture candidate accepted");
                return decode_as(attempt, reader, options).map(Some);
            }
            trace!(?candidate, ?attempt, "probe failed");
        }
    }

    if any_candidate {
        Err(Error::UnrecognizedFormat)
    } else {
        Ok(None)
    }
}

/// The decoders to try for a candidate, in order.
fn probe_order(candidate: ContainerKind) -> &'static [ContainerKind] {
    match candidate {
        // Files named .dds that are really TGA images exist in shipped data.
        ContainerKind::Dds => &[ContainerKind::Dds, ContainerKind::Tga],
        ContainerKind::Tga => &[ContainerKind::Tga],
        ContainerKind::Jpeg => &[ContainerKind::Jpeg],
    }
}

/// Check whether the stream looks like the given container, restoring the
/// cursor afterwards. This peek/reset is the only place the cursor moves
/// backwards.
fn probe<R: Read + Seek>(kind: ContainerKind, reader: &mut R) -> Result<bool> {
    Ok(match kind {
        ContainerKind::Dds => peek(reader, 4)?.as_deref() == Some(b"DDS "),
        ContainerKind::Tga => match peek(reader, 18)? {
            Some(prefix) => match TgaHeader::read(&mut Cursor::new(prefix)) {
                Ok(header) => header.width > 0 && header.height > 0 && header.is_supported(),
                Err(_) => false,
            },
            None => false,
        },
        ContainerKind::Jpeg => peek(reader, 2)?.as_deref() == Some(&[0xFF, 0xD8][..]),
    })
}

/// Read up to `len` bytes and seek back to where the read started. Returns
/// `None` when the stream is shorter than `len`.
fn peek<R: Read + Seek>(reader: &mut R, len: usize) -> io::Result<Option<Vec<u8>>> {
    let mut buffer = vec![0u8; len];
    let mut filled = 0;
    while filled < len {
        let count = reader.read(&mut buffer[filled..])?;
        if count == 0 {
            break;
        }
        filled += count;
    }
    reader.seek(SeekFrom::Current(-(filled as i64)))?;

    Ok((filled == len).then_some(buffer))
}

fn decode_as<R: Read + Seek>(
    kind: ContainerKind,
    reader: R,
    options: &TextureOptions,
) -> Result<TextureDescriptor> {
    let mut descriptor = match kind {
        ContainerKind::Dds => dds::read(reader)?,
        ContainerKind::Tga => tga::read(reader)?,
        ContainerKind::Jpeg => read_jpeg(reader)?,
    };

    if options.generate_mip_maps && kind != ContainerKind::Dds {
        synthesize_mip_chain(&mut descriptor)?;
    }

    Ok(descriptor)
}

/// Decode a JPEG into the canonical descriptor with a single RGBA mip level.
fn read_jpeg<R: Read + Seek>(reader: R) -> Result<TextureDescriptor> {
    let decoded = image::load(BufReader::new(reader), image::ImageFormat::Jpeg)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidHeader);
    }

    Ok(TextureDescriptor {
        width,
        height,
        format: PixelFormat::Rgba8,
        mips: vec![MipLevel {
            width,
            height,
            data: decoded.into_raw().into_boxed_slice(),
        }],
    })
}

/// Extend a single-level RGBA descriptor into a full mip chain, downsampling
/// from the base image until 1x1.
fn synthesize_mip_chain(descriptor: &mut TextureDescriptor) -> Result<()> {
    if descriptor.format != PixelFormat::Rgba8 || descriptor.mips.len() != 1 {
        return Ok(());
    }

    let base = &descriptor.mips[0];
    let base_image = RgbaImage::from_raw(base.width, base.height, base.data.to_vec())
        .ok_or(Error::InvalidHeader)?;

    let mut level = 1u32;
    while descriptor.width >> level > 0 || descriptor.height >> level > 0 {
        let width = (descriptor.width >> level).max(1);
        let height = (descriptor.height >> level).max(1);

        let resized = imageops::resize(&base_image, width, height, FilterType::Triangle);
        descriptor.mips.push(MipLevel {
            width,
            height,
            data: resized.into_raw().into_boxed_slice(),
        });

        level += 1;
    }

    Ok(())
}
