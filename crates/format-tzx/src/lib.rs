//! TZX tape image parser.
//!
//! TZX preserves cassette software as a sequence of self-describing blocks:
//! pulse-accurate data blocks for the signal, informational blocks for
//! archival metadata, and control blocks that alter which block plays next
//! (loops, jumps, called sequences, branching on an external choice).
//!
//! # Format
//!
//! A TZX file starts with a 10-byte header (`"ZXTape!" + 0x1A + major +
//! minor`) followed by blocks back to back. Each block starts with an ID
//! byte that determines its layout; the full table lives in [`Block`].
//!
//! Parsing yields the blocks in raw file order. The order a tape deck
//! would actually play them is a separate, purely computational question
//! answered by [`TzxFile::playback`].
//!
//! Reference: <https://worldofspectrum.net/TZXformat.html>

mod block;
mod play;

pub use block::{Block, HardwareInfo, SelectOption};
pub use play::{Playback, PlaybackError};

use format_core::{ReadError, Reader};
use log::{debug, trace};
use thiserror::Error;

/// TZX header magic: "ZXTape!" + 0x1A.
const MAGIC: &[u8; 8] = b"ZXTape!\x1A";

/// A structural problem in the byte stream. Decoding stops at the first
/// one: block boundaries downstream of a bad length field cannot be
/// trusted, so there is no partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TzxError {
    #[error("file too short for TZX header: need 10 bytes, got {0}")]
    HeaderTooShort(usize),
    #[error("bad TZX signature (expected \"ZXTape!\" + 0x1A)")]
    BadSignature,
    #[error("unknown block ID ${id:02X} at offset {offset}")]
    UnknownBlockId { id: u8, offset: usize },
    #[error("block ${id:02X} at offset {offset} declares a length shorter than its fixed fields")]
    BlockLengthUnderflow { id: u8, offset: usize },
    #[error(transparent)]
    Truncated(#[from] ReadError),
}

/// A parsed TZX file: format revision plus the blocks in raw file order.
///
/// The block list is immutable once built and block indices are stable —
/// the playback resolver and any inspection code index into the same list.
#[derive(Debug, Clone)]
pub struct TzxFile {
    pub major: u8,
    pub minor: u8,
    blocks: Vec<Block>,
}

impl TzxFile {
    /// Parse a TZX file from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the header is invalid, a block ID is unknown,
    /// or the input ends mid-block.
    pub fn parse(data: &[u8]) -> Result<Self, TzxError> {
        if data.len() < 10 {
            return Err(TzxError::HeaderTooShort(data.len()));
        }
        if &data[0..8] != MAGIC {
            return Err(TzxError::BadSignature);
        }
        let major = data[8];
        let minor = data[9];

        let mut reader = Reader::new(data);
        reader.skip(10)?;

        let mut blocks = Vec::new();
        while !reader.is_empty() {
            let offset = reader.position();
            let block = Block::parse(&mut reader)?;
            trace!(
                "block ${:02X} ({}) at offset {offset}",
                block.id(),
                block.name()
            );
            blocks.push(block);
        }

        debug!("parsed TZX r{major}.{minor}: {} blocks", blocks.len());
        Ok(Self {
            major,
            minor,
            blocks,
        })
    }

    /// The blocks in raw file order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Walk the blocks in the order a tape deck would play them,
    /// interpreting loop, jump, call and select blocks. See [`Playback`]
    /// for choosers and step limits.
    #[must_use]
    pub fn playback(&self) -> Playback<'_> {
        Playback::new(&self.blocks)
    }
}
