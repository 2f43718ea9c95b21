//! The sequential reader used to walk SAGE binary streams
//!

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read};
use tracing::trace;
use widestring::U16String;

use crate::{
    error::{Error, Result},
    types::Vector3,
};

/// Forward-only cursor over a byte source with typed little-endian reads.
///
/// The reader tracks the absolute offset of every byte it consumes. A read
/// that runs past the end of the source fails with [`Error::OutOfData`]
/// carrying the offset reached before the read started, so that the caller
/// can report exactly where a truncated or malformed file stopped making
/// sense.
///
/// ```no_run
/// use std::io::Cursor;
///
/// fn read_header(data: &[u8]) -> sage_io::error::Result<(u32, bool)> {
///     let mut reader = sage_io::StreamReader::new(Cursor::new(data));
///     let id = reader.read_u32()?;
///     let active = reader.read_bool()?;
///     Ok((id, active))
/// }
/// ```
pub struct StreamReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> StreamReader<R> {
    /// Wrap a byte source, starting the offset count at zero.
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Absolute offset of the next byte to be read.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Unwrap and return the inner reader object
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn map_io(&self, e: io::Error) -> Error {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Error::OutOfData {
                offset: self.position,
            }
        } else {
            Error::IOError(e)
        }
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let value = self.inner.read_u8().map_err(|e| self.map_io(e))?;
        self.position += 1;
        Ok(value)
    }

    /// Read a one-byte boolean. Values other than 0 and 1 are rejected.
    pub fn read_bool(&mut self) -> Result<bool> {
        let offset = self.position;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(Error::InvalidBoolean { offset, value }),
        }
    }

    /// Read a little-endian u16.
    pub fn read_u16(&mut self) -> Result<u16> {
        let value = self
            .inner
            .read_u16::<LittleEndian>()
            .map_err(|e| self.map_io(e))?;
        self.position += 2;
        Ok(value)
    }

    /// Read a little-endian u32.
    pub fn read_u32(&mut self) -> Result<u32> {
        let value = self
            .inner
            .read_u32::<LittleEndian>()
            .map_err(|e| self.map_io(e))?;
        self.position += 4;
        Ok(value)
    }

    /// Read a little-endian i32.
    pub fn read_i32(&mut self) -> Result<i32> {
        let value = self
            .inner
            .read_i32::<LittleEndian>()
            .map_err(|e| self.map_io(e))?;
        self.position += 4;
        Ok(value)
    }

    /// Read a little-endian f32.
    pub fn read_f32(&mut self) -> Result<f32> {
        let value = self
            .inner
            .read_f32::<LittleEndian>()
            .map_err(|e| self.map_io(e))?;
        self.position += 4;
        Ok(value)
    }

    /// Read three consecutive f32 values as a [`Vector3`].
    pub fn read_vector3(&mut self) -> Result<Vector3> {
        Ok(Vector3 {
            x: self.read_f32()?,
            y: self.read_f32()?,
            z: self.read_f32()?,
        })
    }

    /// Read exactly `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; count];
        self.inner
            .read_exact(&mut buffer)
            .map_err(|e| self.map_io(e))?;
        self.position += count as u64;
        Ok(buffer)
    }

    /// Read a fixed-length string of `len` bytes, validated as UTF-8.
    pub fn read_fixed_string(&mut self, len: usize) -> Result<String> {
        let raw = self.read_bytes(len)?;
        Ok(String::from_utf8(raw)?)
    }

    /// Read single bytes up to (and consuming) a NUL terminator, validated
    /// as UTF-8.
    pub fn read_null_terminated_ascii(&mut self) -> Result<String> {
        let mut raw = Vec::new();
        loop {
            let byte = self.read_u8()?;
            if byte == b'\0' {
                break;
            }
            raw.push(byte);
        }
        Ok(String::from_utf8(raw)?)
    }

    /// Read u16 code units up to (and consuming) a NUL terminator.
    pub fn read_null_terminated_utf16(&mut self) -> Result<U16String> {
        let mut buffer = Vec::new();
        loop {
            let unit = self.read_u16()?;
            if unit == 0 {
                break;
            }
            buffer.push(unit);
        }
        Ok(U16String::from_vec(buffer))
    }

    /// Consume exactly `count` bytes of an undocumented region.
    ///
    /// The contents are discarded without validation; only the width and
    /// position of the region are part of the format contract.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        trace!(count, offset = self.position, "skipping opaque region");

        let mut remaining = count;
        let mut buffer = [0u8; 64];
        while remaining > 0 {
            let take = remaining.min(buffer.len());
            self.inner
                .read_exact(&mut buffer[..take])
                .map_err(|e| self.map_io(e))?;
            self.position += take as u64;
            remaining -= take;
        }
        Ok(())
    }
}
