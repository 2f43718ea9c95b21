//! Types for reading GENREP replay files
//!

use sage_io::StreamReader;
use std::io::{Read, Seek, SeekFrom};
use tracing::trace;

use crate::{
    error::{Error, Result},
    types::{ChunkHeader, OrderArgument, ReplayChunk, ReplayDateTime, ReplayHeader},
};

/// A fully decoded replay.
///
/// ```no_run
/// use std::fs::File;
///
/// fn chunk_count(path: &str) -> sage_rep::error::Result<usize> {
///     let file = File::open(path)?;
///     let replay = sage_rep::ReplayFile::read(file)?;
///     Ok(replay.chunks.len())
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayFile {
    pub header: ReplayHeader,
    pub chunks: Vec<ReplayChunk>,
}

impl ReplayFile {
    /// Read a replay, collecting every chunk until the stream is exhausted.
    ///
    /// The underlying stream length is the only loop-termination signal; the
    /// format carries no chunk count. After the loop the header's declared
    /// timecode total must match the final chunk's timecode or the whole
    /// replay is rejected.
    pub fn read<R: Read + Seek>(mut reader: R) -> Result<ReplayFile> {
        let length = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        let mut reader = StreamReader::new(reader);
        let header = Self::read_header(&mut reader)?;

        let mut chunks = Vec::new();
        while reader.position() < length {
            chunks.push(Self::read_chunk(&mut reader)?);
        }

        let Some(last) = chunks.last() else {
            return Err(Error::EmptyReplay);
        };
        if last.header.timecode != header.num_timecodes {
            return Err(Error::TimecodeMismatch {
                expected: header.num_timecodes,
                actual: last.header.timecode,
            });
        }

        Ok(ReplayFile { header, chunks })
    }

    fn read_header<R: Read>(reader: &mut StreamReader<R>) -> Result<ReplayHeader> {
        let magic = reader.read_bytes(6)?;
        if magic != b"GENREP" {
            return Err(Error::InvalidReplay);
        }

        let begin_timestamp = reader.read_u32()?;
        let end_timestamp = reader.read_u32()?;
        let num_timecodes = reader.read_u32()?;

        reader.skip(12)?; // unconfirmed

        let filename = String::from_utf16(reader.read_null_terminated_utf16()?.as_slice())?;
        let date_time = ReplayDateTime {
            year: reader.read_u16()?,
            month: reader.read_u16()?,
            day_of_week: reader.read_u16()?,
            day: reader.read_u16()?,
            hour: reader.read_u16()?,
            minute: reader.read_u16()?,
            second: reader.read_u16()?,
            millisecond: reader.read_u16()?,
        };
        let version = String::from_utf16(reader.read_null_terminated_utf16()?.as_slice())?;
        let build_date = String::from_utf16(reader.read_null_terminated_utf16()?.as_slice())?;
        let version_minor = reader.read_u16()?;
        let version_major = reader.read_u16()?;
        let game_options = reader.read_null_terminated_ascii()?;

        reader.skip(10)?; // unconfirmed (u16 + 2 x u32)

        trace!(
            num_timecodes,
            version_major,
            version_minor,
            "decoded replay header"
        );

        Ok(ReplayHeader {
            begin_timestamp,
            end_timestamp,
            num_timecodes,
            filename,
            date_time,
            version,
            build_date,
            version_minor,
            version_major,
            game_options,
        })
    }

    fn read_chunk<R: Read>(reader: &mut StreamReader<R>) -> Result<ReplayChunk> {
        let header = ChunkHeader {
            timecode: reader.read_u32()?,
            order_type: reader.read_u32()?,
            player_id: reader.read_u32()?,
        };

        let unique_argument_types = reader.read_u8()?;
        let mut type_table = Vec::with_capacity(unique_argument_types as usize);
        for _ in 0..unique_argument_types {
            let tag_offset = reader.position();
            let tag = reader.read_u8()?;
            let count = reader.read_u8()?;
            type_table.push((tag, count, tag_offset));
        }

        let mut arguments = Vec::new();
        for (tag, count, tag_offset) in type_table {
            for _ in 0..count {
                arguments.push(Self::read_argument(reader, tag, tag_offset)?);
            }
        }

        trace!(
            timecode = header.timecode,
            order_type = header.order_type,
            arguments = arguments.len(),
            "decoded chunk"
        );

        Ok(ReplayChunk { header, arguments })
    }

    fn read_argument<R: Read>(
        reader: &mut StreamReader<R>,
        tag: u8,
        tag_offset: u64,
    ) -> Result<OrderArgument> {
        Ok(match tag {
            0 => OrderArgument::Integer(reader.read_i32()?),
            1 => OrderArgument::Float(reader.read_f32()?),
            2 => OrderArgument::Boolean(reader.read_bool()?),
            3 => OrderArgument::ObjectId(reader.read_u32()?),
            6 => OrderArgument::Position(reader.read_vector3()?),
            7 => OrderArgument::ScreenPosition {
                x: reader.read_i32()?,
                y: reader.read_i32()?,
            },
            8 => OrderArgument::ScreenRectangle {
                x1: reader.read_i32()?,
                y1: reader.read_i32()?,
                x2: reader.read_i32()?,
                y2: reader.read_i32()?,
            },
            tag => {
                return Err(Error::UnknownArgumentType {
                    tag,
                    offset: tag_offset,
                })
            }
        })
    }
}
