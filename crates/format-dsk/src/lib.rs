//! DSK disk image parser.
//!
//! Parses the standard CPC-emu disk image format used by Amstrad CPC and
//! Spectrum +3 software: a 256-byte disk information block, then one track
//! block per track and side, back to back, each `track_size` bytes. Track
//! decoding itself lives in [`track`].
//!
//! The extended ("EXTENDED CPC DSK File") variant stores per-track sizes
//! and per-sector data lengths; it is recognised and rejected rather than
//! misparsed as a standard image.
//!
//! Unlike the tape side there is no playback-order question here — a disk
//! is pure geometry.

pub mod track;

pub use track::{SectorInformation, TrackInformation};

use format_core::{ReadError, Reader};
use log::debug;
use thiserror::Error;

const STANDARD_SIGNATURE: &[u8] = b"MV - CPCEMU Disk-File\r\nDisk-Info\r\n";
const EXTENDED_SIGNATURE: &[u8] = b"EXTENDED CPC DSK File\r\nDisk-Info\r\n";

/// Disk information block size; the first track block starts here.
const DISK_HEADER_SIZE: usize = 0x100;

/// A structural problem in the image. Decoding stops at the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DskError {
    #[error("file too short for DSK header: need 256 bytes, got {0}")]
    HeaderTooShort(usize),
    #[error("not a DSK image (unrecognised signature)")]
    BadSignature,
    #[error("extended DSK images store per-sector sizes and are not supported")]
    ExtendedNotSupported,
    #[error("track {track} side {side}: {count} sector descriptors overrun the data area")]
    TrackHeaderOverflow { track: u8, side: u8, count: u8 },
    #[error("track {track} side {side}: sector size code {code} names no real sector size")]
    InvalidSectorSize { track: u8, side: u8, code: u8 },
    #[error(transparent)]
    Truncated(#[from] ReadError),
}

/// A parsed DSK image: the decoded tracks plus the disk-level geometry
/// declared in the information block.
#[derive(Debug, Clone)]
pub struct DskImage {
    /// Creator name from the information block, NUL padding stripped.
    pub creator: String,
    pub track_count: u8,
    pub sides: u8,
    pub tracks: Vec<TrackInformation>,
}

impl DskImage {
    /// Parse a standard DSK image from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error for a bad or extended signature, a malformed
    /// track, or an image shorter than its declared geometry.
    pub fn parse(data: &[u8]) -> Result<Self, DskError> {
        if data.len() < DISK_HEADER_SIZE {
            return Err(DskError::HeaderTooShort(data.len()));
        }
        if data[..EXTENDED_SIGNATURE.len()] == *EXTENDED_SIGNATURE {
            return Err(DskError::ExtendedNotSupported);
        }
        if data[..STANDARD_SIGNATURE.len()] != *STANDARD_SIGNATURE {
            return Err(DskError::BadSignature);
        }

        let creator = String::from_utf8_lossy(&data[0x22..0x30])
            .trim_end_matches('\0')
            .to_string();
        let track_count = data[0x30];
        let sides = data[0x31];
        let track_size = usize::from(u16::from_le_bytes([data[0x32], data[0x33]]));

        let total = usize::from(track_count) * usize::from(sides);
        let mut tracks = Vec::with_capacity(total);
        for i in 0..total {
            let start = DISK_HEADER_SIZE + i * track_size;
            if start + track_size > data.len() {
                return Err(DskError::Truncated(ReadError {
                    offset: start,
                    needed: track_size,
                    remaining: data.len().saturating_sub(start),
                }));
            }
            let mut reader = Reader::new(data);
            reader.skip(start)?;
            tracks.push(TrackInformation::parse(&mut reader)?);
        }

        debug!(
            "parsed DSK by {creator:?}: {track_count} tracks, {sides} side(s)"
        );
        Ok(Self {
            creator,
            track_count,
            sides,
            tracks,
        })
    }

    /// Look up a sector's payload by track number, side, and sector ID
    /// (the R value from its descriptor).
    #[must_use]
    pub fn read_sector(&self, track: u8, side: u8, sector_id: u8) -> Option<&[u8]> {
        let trk = self
            .tracks
            .iter()
            .find(|t| t.track == track && t.side == side)?;
        let idx = trk.sectors.iter().position(|s| s.r == sector_id)?;
        trk.data.get(idx).map(Vec::as_slice)
    }
}
