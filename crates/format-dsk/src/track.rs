//! Track block decoding.
//!
//! A track block is a 24-byte "Track-Info" header, a table of 8-byte
//! sector descriptors, padding, and then the sector payloads. The payloads
//! always start 0x100 bytes after the start of the track header and are
//! stored in the same order as the descriptors — both are fixed layout
//! facts of the format. Every sector on a track shares the size declared
//! by the track's sector-size code (actual bytes = 128 << code).

use format_core::{ReadError, Reader};
use log::{trace, warn};

use crate::DskError;

/// Track header size, up to and including the filler byte.
pub const TRACK_HEADER_SIZE: usize = 24;
/// One entry in the sector information list.
pub const SECTOR_DESCRIPTOR_SIZE: usize = 8;
/// Sector payloads start here, relative to the track header.
pub const DATA_START: usize = 0x100;

/// One sector descriptor from the sector information list.
///
/// Field names follow the FDC ID field: C (cylinder), H (head),
/// R (sector ID), N (size code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorInformation {
    pub c: u8,
    pub h: u8,
    pub r: u8,
    pub n: u8,
    /// FDC status register 1 (kept for copy protection schemes).
    pub st1: u8,
    /// FDC status register 2 (kept for copy protection schemes).
    pub st2: u8,
}

impl SectorInformation {
    fn parse(reader: &mut Reader<'_>) -> Result<Self, ReadError> {
        let sector = Self {
            c: reader.read_u8()?,
            h: reader.read_u8()?,
            r: reader.read_u8()?,
            n: reader.read_u8()?,
            st1: reader.read_u8()?,
            st2: reader.read_u8()?,
        };
        reader.skip(2)?; // unused in standard images
        Ok(sector)
    }
}

/// A decoded track: header fields, sector descriptors, and the payloads
/// in descriptor order. `sectors.len() == data.len()` always holds after
/// a successful decode.
#[derive(Debug, Clone)]
pub struct TrackInformation {
    /// Header marker, "Track-Info\r\n" in well-formed images.
    pub identifier: [u8; 13],
    pub track: u8,
    pub side: u8,
    /// Sector size code, uniform across the track.
    pub sector_size: u8,
    pub sectors_count: u8,
    /// GAP#3 length.
    pub gap_length: u8,
    pub filler_byte: u8,
    pub sectors: Vec<SectorInformation>,
    pub data: Vec<Vec<u8>>,
}

impl TrackInformation {
    /// Decode one track block. The reader must sit on the first byte of
    /// the track header; on success it sits just past the last payload.
    ///
    /// # Errors
    ///
    /// `TrackHeaderOverflow` when the descriptor table reaches the 0x100
    /// data area, `InvalidSectorSize` for a size code that names no real
    /// sector size, `Truncated` when the input runs out.
    pub fn parse(r: &mut Reader<'_>) -> Result<Self, DskError> {
        let track_start = r.position();

        let identifier = r.read_array::<13>()?;
        if !identifier.starts_with(b"Track-Info") {
            warn!("track block at offset {track_start} has an unexpected marker");
        }
        r.skip(3)?;
        let track = r.read_u8()?;
        let side = r.read_u8()?;
        r.skip(2)?;
        let sector_size = r.read_u8()?;
        let sectors_count = r.read_u8()?;
        let gap_length = r.read_u8()?;
        let filler_byte = r.read_u8()?;

        let mut sectors = Vec::with_capacity(sectors_count as usize);
        for _ in 0..sectors_count {
            sectors.push(SectorInformation::parse(r)?);
        }

        // The descriptor table must leave room before the data area
        let used = TRACK_HEADER_SIZE + sectors_count as usize * SECTOR_DESCRIPTOR_SIZE;
        if used >= DATA_START {
            return Err(DskError::TrackHeaderOverflow {
                track,
                side,
                count: sectors_count,
            });
        }
        r.skip(DATA_START - used)?;

        if sector_size > 7 {
            return Err(DskError::InvalidSectorSize {
                track,
                side,
                code: sector_size,
            });
        }
        let sector_len = 128usize << sector_size;

        let mut data = Vec::with_capacity(sectors.len());
        for _ in &sectors {
            data.push(r.read_bytes(sector_len)?.to_vec());
        }

        trace!(
            "track {track} side {side}: {sectors_count} sectors of {sector_len} bytes"
        );
        Ok(Self {
            identifier,
            track,
            side,
            sector_size,
            sectors_count,
            gap_length,
            filler_byte,
            sectors,
            data,
        })
    }

    /// Actual sector size in bytes, from the track's size code.
    #[must_use]
    pub fn sector_byte_size(&self) -> usize {
        128 << self.sector_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a track block: header, descriptors, padding to 0x100, then
    /// one payload per descriptor filled with the sector's R value.
    fn track_block(track: u8, side: u8, size_code: u8, sector_ids: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"Track-Info\r\n\0");
        bytes.extend_from_slice(&[0; 3]);
        bytes.push(track);
        bytes.push(side);
        bytes.extend_from_slice(&[0; 2]);
        bytes.push(size_code);
        bytes.push(sector_ids.len() as u8);
        bytes.push(0x4E); // GAP#3
        bytes.push(0xE5); // filler

        for &id in sector_ids {
            bytes.extend_from_slice(&[track, side, id, size_code, 0, 0, 0, 0]);
        }
        bytes.resize(DATA_START, 0);

        let sector_len = 128usize << size_code;
        for &id in sector_ids {
            bytes.extend_from_slice(&vec![id; sector_len]);
        }
        bytes
    }

    #[test]
    fn header_fields_are_captured() {
        let bytes = track_block(5, 1, 2, &[0xC1, 0xC2]);
        let mut r = Reader::new(&bytes);
        let track = TrackInformation::parse(&mut r).expect("valid track");

        assert_eq!(track.track, 5);
        assert_eq!(track.side, 1);
        assert_eq!(track.sector_size, 2);
        assert_eq!(track.gap_length, 0x4E);
        assert_eq!(track.filler_byte, 0xE5);
        assert!(track.identifier.starts_with(b"Track-Info"));
    }

    #[test]
    fn sector_counts_and_sizes_agree() {
        let bytes = track_block(0, 0, 1, &[1, 2, 3, 4]);
        let mut r = Reader::new(&bytes);
        let track = TrackInformation::parse(&mut r).expect("valid track");

        assert_eq!(track.sectors_count, 4);
        assert_eq!(track.sectors.len(), 4);
        assert_eq!(track.data.len(), 4);
        assert_eq!(track.sector_byte_size(), 256);
        for payload in &track.data {
            assert_eq!(payload.len(), 256);
        }
    }

    #[test]
    fn payloads_follow_descriptor_order() {
        let bytes = track_block(0, 0, 0, &[9, 3, 7]);
        let mut r = Reader::new(&bytes);
        let track = TrackInformation::parse(&mut r).expect("valid track");

        let ids: Vec<u8> = track.sectors.iter().map(|s| s.r).collect();
        assert_eq!(ids, [9, 3, 7]);
        for (sector, payload) in track.sectors.iter().zip(&track.data) {
            assert!(payload.iter().all(|&b| b == sector.r));
        }
    }

    #[test]
    fn parse_stops_exactly_after_the_last_payload() {
        let mut bytes = track_block(0, 0, 0, &[1]);
        bytes.extend_from_slice(&[0xAB; 4]); // start of the next track block
        let mut r = Reader::new(&bytes);
        TrackInformation::parse(&mut r).expect("valid track");
        assert_eq!(r.remaining(), 4);
    }

    #[test]
    fn descriptor_table_reaching_data_area_is_rejected() {
        // 29 descriptors: 24 + 29*8 = 256 = the data area offset
        let ids: Vec<u8> = (0..29).collect();
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"Track-Info\r\n\0");
        bytes.extend_from_slice(&[0; 3]);
        bytes.push(0);
        bytes.push(0);
        bytes.extend_from_slice(&[0; 2]);
        bytes.push(0);
        bytes.push(ids.len() as u8);
        bytes.push(0x4E);
        bytes.push(0xE5);
        for &id in &ids {
            bytes.extend_from_slice(&[0, 0, id, 0, 0, 0, 0, 0]);
        }
        bytes.resize(0x400, 0);

        let mut r = Reader::new(&bytes);
        assert!(matches!(
            TrackInformation::parse(&mut r),
            Err(DskError::TrackHeaderOverflow { count: 29, .. })
        ));
    }

    #[test]
    fn twenty_eight_descriptors_still_fit() {
        let ids: Vec<u8> = (1..=28).collect();
        let bytes = track_block(0, 0, 0, &ids);
        let mut r = Reader::new(&bytes);
        let track = TrackInformation::parse(&mut r).expect("28 sectors fit");
        assert_eq!(track.sectors.len(), 28);
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let mut bytes = track_block(0, 0, 1, &[1, 2]);
        bytes.truncate(DATA_START + 256 + 10); // second payload cut short
        let mut r = Reader::new(&bytes);
        match TrackInformation::parse(&mut r) {
            Err(DskError::Truncated(e)) => {
                assert_eq!(e.needed, 256);
                assert_eq!(e.remaining, 10);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn absurd_size_code_is_rejected() {
        let mut bytes = track_block(3, 0, 0, &[1]);
        bytes[0x14] = 0xE5; // sector size byte stomped by a bad dump
        let mut r = Reader::new(&bytes);
        assert!(matches!(
            TrackInformation::parse(&mut r),
            Err(DskError::InvalidSectorSize {
                track: 3,
                code: 0xE5,
                ..
            })
        ));
    }
}
