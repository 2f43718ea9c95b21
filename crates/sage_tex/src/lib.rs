//! # SAGE Texture Container Documentation
//!
//! This crate decodes the three texture container formats consumed by the
//! *SAGE* engine's rendering pipeline and normalizes them into one canonical
//! [`TextureDescriptor`]: width, height, pixel format tag and an ordered mip
//! chain of raw byte buffers. Downstream consumers never see which container
//! a texture came from.
//!
//! ## Containers
//!
//! - **DDS**: block-compressed (`DXT1`/`DXT3`/`DXT5`) or uncompressed 32-bit
//!   textures with a stored mip chain. Identified by the `DDS ` magic.
//! - **TGA**: uncompressed truecolor or color-mapped images. No magic; the
//!   header itself is the only validation available. Decoded to canonical
//!   8-bit RGBA, honoring the vertical-flip flag, with optional mip
//!   synthesis.
//! - **JPEG**: decoded through the `image` crate; used for photographic
//!   assets such as loading screens.
//!
//! ## Resolution
//!
//! Texture references in game data carry no extension. The engine probes a
//! fixed list of candidate extensions in priority order (`.dds`, `.tga`,
//! `.jpg`) and takes the first file that exists *and* passes its format
//! probe. Files misnamed `.dds` that are really TGA images exist in shipped
//! game data, so a failed DDS magic probe falls through to the TGA decoder
//! instead of failing. A texture with no candidate file at all is an
//! ordinary empty result, not an error; see [`read::load_texture`].
//!
//! ## Additional Information
//!
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Canonical pixel layout**: 8-bit RGBA, rows top-down

pub mod dds;
pub mod error;
pub mod read;
pub mod tga;
pub mod types;

pub use read::{load_texture, TextureOptions};
pub use types::{ContainerKind, MipLevel, PixelFormat, TextureDescriptor, EXTENSION_PRIORITY};
