//! TZX block set and per-block decode routines.
//!
//! Every block starts with a one-byte ID that selects its layout. The ID
//! table is closed: an ID outside it is a decode error, because the length
//! of an unrecognised block cannot be trusted and everything after it would
//! be garbage.
//!
//! Each decode routine consumes the block's entire declared body, so the
//! reader is always left on the next ID byte.

use format_core::{ReadError, Reader};

use crate::TzxError;

/// One machine/hardware entry in a Hardware Type block.
///
/// `info` encodes the relationship: 0 = runs on it, 1 = uses its special
/// features, 2 = runs but doesn't use them, 3 = doesn't run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareInfo {
    pub hardware_type: u8,
    pub id: u8,
    pub info: u8,
}

/// One candidate in a Select block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub description: String,
    /// Relative offset to the candidate's first block.
    pub offset: i16,
}

/// A single TZX block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Block $10: Standard speed data (ROM timing).
    StandardSpeed { pause_ms: u16, data: Vec<u8> },
    /// Block $11: Turbo speed data (custom timing).
    TurboSpeed {
        pilot_pulse: u16,
        sync1: u16,
        sync2: u16,
        zero_pulse: u16,
        one_pulse: u16,
        pilot_count: u16,
        used_bits: u8,
        pause_ms: u16,
        data: Vec<u8>,
    },
    /// Block $12: Pure tone (repeated single pulse).
    PureTone { pulse_len: u16, count: u16 },
    /// Block $13: Pulse sequence (arbitrary pulse lengths).
    PulseSequence { pulses: Vec<u16> },
    /// Block $14: Pure data (no pilot or sync, just data bits).
    PureData {
        zero_pulse: u16,
        one_pulse: u16,
        used_bits: u8,
        pause_ms: u16,
        data: Vec<u8>,
    },
    /// Block $15: Direct recording (raw samples).
    DirectRecording {
        tstates_per_sample: u16,
        pause_ms: u16,
        used_bits: u8,
        data: Vec<u8>,
    },
    /// Block $18: CSW recording (compressed square wave).
    CswRecording {
        pause_ms: u16,
        sample_rate: u32,
        compression: u8,
        pulse_count: u32,
        data: Vec<u8>,
    },
    /// Block $19: Generalized data. Kept as an opaque payload.
    GeneralizedData { data: Vec<u8> },
    /// Block $20: Pause the tape. A duration of 0 means "stop".
    Pause { duration_ms: u16 },
    /// Block $21: Group start.
    GroupStart { name: String },
    /// Block $22: Group end.
    GroupEnd,
    /// Block $23: Jump to a block at a relative offset.
    JumpTo { offset: i16 },
    /// Block $24: Loop start.
    LoopStart { count: u16 },
    /// Block $25: Loop end.
    LoopEnd,
    /// Block $26: Call a sequence of blocks at relative offsets.
    CallSequence { offsets: Vec<i16> },
    /// Block $27: Return from a called sequence.
    ReturnFromSequence,
    /// Block $28: Branch on an externally supplied choice.
    Select { options: Vec<SelectOption> },
    /// Block $2A: Stop the tape if in 48K mode.
    StopIf48K,
    /// Block $2B: Set signal level.
    SetSignalLevel { level: bool },
    /// Block $30: Text description.
    TextDescription { text: String },
    /// Block $31: Message to display for a number of seconds.
    Message { display_seconds: u8, text: String },
    /// Block $32: Archive info (id/text pairs).
    ArchiveInfo { entries: Vec<(u8, String)> },
    /// Block $33: Hardware compatibility list.
    HardwareType { machines: Vec<HardwareInfo> },
    /// Block $35: Custom info written by a utility.
    CustomInfo {
        identification: [u8; 10],
        info: Vec<u8>,
    },
    /// Block $5A: Glue block left behind when two tape files are merged.
    Glue { value: [u8; 9] },
}

impl Block {
    /// Decode one block: the ID byte, then the variant's body.
    ///
    /// On success the reader is positioned on the next ID byte.
    ///
    /// # Errors
    ///
    /// `UnknownBlockId` for an ID outside the table, `Truncated` when the
    /// input ends mid-field.
    pub fn parse(r: &mut Reader<'_>) -> Result<Self, TzxError> {
        let offset = r.position();
        let id = r.read_u8()?;

        let block = match id {
            0x10 => parse_standard_speed(r)?,
            0x11 => parse_turbo_speed(r)?,
            0x12 => parse_pure_tone(r)?,
            0x13 => parse_pulse_sequence(r)?,
            0x14 => parse_pure_data(r)?,
            0x15 => parse_direct_recording(r)?,
            0x18 => parse_csw_recording(r, offset)?,
            0x19 => parse_generalized_data(r)?,
            0x20 => Block::Pause {
                duration_ms: r.read_u16()?,
            },
            0x21 => Block::GroupStart {
                name: parse_short_string(r)?,
            },
            0x22 => Block::GroupEnd,
            0x23 => Block::JumpTo {
                offset: r.read_i16()?,
            },
            0x24 => Block::LoopStart {
                count: r.read_u16()?,
            },
            0x25 => Block::LoopEnd,
            0x26 => parse_call_sequence(r)?,
            0x27 => Block::ReturnFromSequence,
            0x28 => parse_select(r)?,
            0x2A => parse_stop_if_48k(r)?,
            0x2B => parse_set_signal_level(r, offset)?,
            0x30 => Block::TextDescription {
                text: parse_short_string(r)?,
            },
            0x31 => parse_message(r)?,
            0x32 => parse_archive_info(r, offset)?,
            0x33 => parse_hardware_type(r)?,
            0x35 => parse_custom_info(r)?,
            0x5A => parse_glue(r)?,
            id => return Err(TzxError::UnknownBlockId { id, offset }),
        };

        Ok(block)
    }

    /// The block's ID byte.
    #[must_use]
    pub fn id(&self) -> u8 {
        match self {
            Block::StandardSpeed { .. } => 0x10,
            Block::TurboSpeed { .. } => 0x11,
            Block::PureTone { .. } => 0x12,
            Block::PulseSequence { .. } => 0x13,
            Block::PureData { .. } => 0x14,
            Block::DirectRecording { .. } => 0x15,
            Block::CswRecording { .. } => 0x18,
            Block::GeneralizedData { .. } => 0x19,
            Block::Pause { .. } => 0x20,
            Block::GroupStart { .. } => 0x21,
            Block::GroupEnd => 0x22,
            Block::JumpTo { .. } => 0x23,
            Block::LoopStart { .. } => 0x24,
            Block::LoopEnd => 0x25,
            Block::CallSequence { .. } => 0x26,
            Block::ReturnFromSequence => 0x27,
            Block::Select { .. } => 0x28,
            Block::StopIf48K => 0x2A,
            Block::SetSignalLevel { .. } => 0x2B,
            Block::TextDescription { .. } => 0x30,
            Block::Message { .. } => 0x31,
            Block::ArchiveInfo { .. } => 0x32,
            Block::HardwareType { .. } => 0x33,
            Block::CustomInfo { .. } => 0x35,
            Block::Glue { .. } => 0x5A,
        }
    }

    /// The block's display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Block::StandardSpeed { .. } => "Standard Speed Data",
            Block::TurboSpeed { .. } => "Turbo Speed Data",
            Block::PureTone { .. } => "Pure Tone",
            Block::PulseSequence { .. } => "Pulse Sequence",
            Block::PureData { .. } => "Pure Data",
            Block::DirectRecording { .. } => "Direct Recording",
            Block::CswRecording { .. } => "CSW Recording",
            Block::GeneralizedData { .. } => "Generalized Data",
            Block::Pause { .. } => "Pause",
            Block::GroupStart { .. } => "Group Start",
            Block::GroupEnd => "Group End",
            Block::JumpTo { .. } => "Jump To",
            Block::LoopStart { .. } => "Loop Start",
            Block::LoopEnd => "Loop End",
            Block::CallSequence { .. } => "Call Sequence",
            Block::ReturnFromSequence => "Return from Sequence",
            Block::Select { .. } => "Select",
            Block::StopIf48K => "Stop If 48K",
            Block::SetSignalLevel { .. } => "Set Signal Level",
            Block::TextDescription { .. } => "Text Description",
            Block::Message { .. } => "Message",
            Block::ArchiveInfo { .. } => "Archive Info",
            Block::HardwareType { .. } => "Hardware Type",
            Block::CustomInfo { .. } => "Custom Info",
            Block::Glue { .. } => "Glue",
        }
    }
}

// ---------------------------------------------------------------------------
// Block parsers
// ---------------------------------------------------------------------------

/// One-byte-length-prefixed string.
fn parse_short_string(r: &mut Reader<'_>) -> Result<String, ReadError> {
    let len = r.read_u8()? as usize;
    Ok(String::from_utf8_lossy(r.read_bytes(len)?).into_owned())
}

fn parse_standard_speed(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let pause_ms = r.read_u16()?;
    let len = r.read_u16()? as usize;
    Ok(Block::StandardSpeed {
        pause_ms,
        data: r.read_bytes(len)?.to_vec(),
    })
}

fn parse_turbo_speed(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let pilot_pulse = r.read_u16()?;
    let sync1 = r.read_u16()?;
    let sync2 = r.read_u16()?;
    let zero_pulse = r.read_u16()?;
    let one_pulse = r.read_u16()?;
    let pilot_count = r.read_u16()?;
    let used_bits = r.read_u8()?;
    let pause_ms = r.read_u16()?;
    let len = r.read_u24()? as usize;
    Ok(Block::TurboSpeed {
        pilot_pulse,
        sync1,
        sync2,
        zero_pulse,
        one_pulse,
        pilot_count,
        used_bits,
        pause_ms,
        data: r.read_bytes(len)?.to_vec(),
    })
}

fn parse_pure_tone(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    Ok(Block::PureTone {
        pulse_len: r.read_u16()?,
        count: r.read_u16()?,
    })
}

fn parse_pulse_sequence(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let count = r.read_u8()? as usize;
    let mut pulses = Vec::with_capacity(count);
    for _ in 0..count {
        pulses.push(r.read_u16()?);
    }
    Ok(Block::PulseSequence { pulses })
}

fn parse_pure_data(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let zero_pulse = r.read_u16()?;
    let one_pulse = r.read_u16()?;
    let used_bits = r.read_u8()?;
    let pause_ms = r.read_u16()?;
    let len = r.read_u24()? as usize;
    Ok(Block::PureData {
        zero_pulse,
        one_pulse,
        used_bits,
        pause_ms,
        data: r.read_bytes(len)?.to_vec(),
    })
}

fn parse_direct_recording(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let tstates_per_sample = r.read_u16()?;
    let pause_ms = r.read_u16()?;
    let used_bits = r.read_u8()?;
    let len = r.read_u24()? as usize;
    Ok(Block::DirectRecording {
        tstates_per_sample,
        pause_ms,
        used_bits,
        data: r.read_bytes(len)?.to_vec(),
    })
}

/// $18: the 4-byte length counts everything after itself; the fixed fields
/// take 10 of those bytes, the rest is CSW sample data.
fn parse_csw_recording(r: &mut Reader<'_>, offset: usize) -> Result<Block, TzxError> {
    let len = r.read_u32()? as usize;
    let data_len = len
        .checked_sub(10)
        .ok_or(TzxError::BlockLengthUnderflow { id: 0x18, offset })?;
    let pause_ms = r.read_u16()?;
    let sample_rate = r.read_u24()?;
    let compression = r.read_u8()?;
    let pulse_count = r.read_u32()?;
    Ok(Block::CswRecording {
        pause_ms,
        sample_rate,
        compression,
        pulse_count,
        data: r.read_bytes(data_len)?.to_vec(),
    })
}

fn parse_generalized_data(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let len = r.read_u32()? as usize;
    Ok(Block::GeneralizedData {
        data: r.read_bytes(len)?.to_vec(),
    })
}

fn parse_call_sequence(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let count = r.read_u16()? as usize;
    let mut offsets = Vec::with_capacity(count);
    for _ in 0..count {
        offsets.push(r.read_i16()?);
    }
    Ok(Block::CallSequence { offsets })
}

fn parse_select(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let count = r.read_u8()? as usize;
    let mut options = Vec::with_capacity(count);
    for _ in 0..count {
        let description = parse_short_string(r)?;
        let offset = r.read_i16()?;
        options.push(SelectOption {
            description,
            offset,
        });
    }
    Ok(Block::Select { options })
}

/// $2A: body is a 4-byte length (0 in well-formed files) plus that many
/// bytes, carried by merge utilities that pad the block.
fn parse_stop_if_48k(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let len = r.read_u32()? as usize;
    r.skip(len)?;
    Ok(Block::StopIf48K)
}

fn parse_set_signal_level(r: &mut Reader<'_>, offset: usize) -> Result<Block, TzxError> {
    let len = r.read_u32()? as usize;
    if len == 0 {
        return Err(TzxError::BlockLengthUnderflow { id: 0x2B, offset });
    }
    let level = r.read_u8()? != 0;
    r.skip(len - 1)?;
    Ok(Block::SetSignalLevel { level })
}

fn parse_message(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let display_seconds = r.read_u8()?;
    let text = parse_short_string(r)?;
    Ok(Block::Message {
        display_seconds,
        text,
    })
}

/// $32: the entry list must fit the declared block length exactly; trailing
/// slack is skipped, overrun means the length field lied.
fn parse_archive_info(r: &mut Reader<'_>, offset: usize) -> Result<Block, TzxError> {
    let block_len = r.read_u16()? as usize;
    let body_start = r.position();

    let count = r.read_u8()? as usize;
    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        let id = r.read_u8()?;
        let text = parse_short_string(r)?;
        entries.push((id, text));
    }

    let consumed = r.position() - body_start;
    let slack = block_len
        .checked_sub(consumed)
        .ok_or(TzxError::BlockLengthUnderflow { id: 0x32, offset })?;
    r.skip(slack)?;

    Ok(Block::ArchiveInfo { entries })
}

fn parse_hardware_type(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let count = r.read_u8()? as usize;
    let mut machines = Vec::with_capacity(count);
    for _ in 0..count {
        machines.push(HardwareInfo {
            hardware_type: r.read_u8()?,
            id: r.read_u8()?,
            info: r.read_u8()?,
        });
    }
    Ok(Block::HardwareType { machines })
}

fn parse_custom_info(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let identification = r.read_array::<10>()?;
    let len = r.read_u32()? as usize;
    Ok(Block::CustomInfo {
        identification,
        info: r.read_bytes(len)?.to_vec(),
    })
}

fn parse_glue(r: &mut Reader<'_>) -> Result<Block, ReadError> {
    let value = r.read_array::<9>()?;
    if &value[..7] != b"XTape!\x1A" {
        log::warn!("glue block carries an unexpected marker: {value:02X?}");
    }
    Ok(Block::Glue { value })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(bytes: &[u8]) -> Block {
        let mut r = Reader::new(bytes);
        let block = Block::parse(&mut r).expect("valid block");
        assert!(r.is_empty(), "block did not consume its whole body");
        block
    }

    #[test]
    fn unknown_id_reports_id_and_offset() {
        let mut r = Reader::new(&[0xFF, 0x00]);
        match Block::parse(&mut r) {
            Err(TzxError::UnknownBlockId { id, offset }) => {
                assert_eq!(id, 0xFF);
                assert_eq!(offset, 0);
            }
            other => panic!("expected UnknownBlockId, got {other:?}"),
        }
    }

    #[test]
    fn call_sequence_consumes_two_plus_two_n_bytes() {
        // N = 3 offsets, each i16: body is 2 + 2*3 bytes
        let mut bytes = vec![0x26];
        bytes.extend_from_slice(&3u16.to_le_bytes());
        bytes.extend_from_slice(&2i16.to_le_bytes());
        bytes.extend_from_slice(&(-4i16).to_le_bytes());
        bytes.extend_from_slice(&7i16.to_le_bytes());
        // A trailing byte that must NOT be consumed
        bytes.push(0xEE);

        let mut r = Reader::new(&bytes);
        let block = Block::parse(&mut r).expect("call sequence");
        assert_eq!(r.remaining(), 1);
        match block {
            Block::CallSequence { offsets } => assert_eq!(offsets, vec![2, -4, 7]),
            other => panic!("expected CallSequence, got {other:?}"),
        }
    }

    #[test]
    fn return_and_loop_end_have_no_body() {
        assert_eq!(parse_one(&[0x27]), Block::ReturnFromSequence);
        assert_eq!(parse_one(&[0x25]), Block::LoopEnd);
        assert_eq!(parse_one(&[0x22]), Block::GroupEnd);
    }

    #[test]
    fn jump_and_loop_start() {
        let mut bytes = vec![0x23];
        bytes.extend_from_slice(&(-3i16).to_le_bytes());
        assert_eq!(parse_one(&bytes), Block::JumpTo { offset: -3 });

        let mut bytes = vec![0x24];
        bytes.extend_from_slice(&5u16.to_le_bytes());
        assert_eq!(parse_one(&bytes), Block::LoopStart { count: 5 });
    }

    #[test]
    fn select_options_in_order() {
        let mut bytes = vec![0x28, 2];
        bytes.push(4);
        bytes.extend_from_slice(b"side");
        bytes.extend_from_slice(&2i16.to_le_bytes());
        bytes.push(5);
        bytes.extend_from_slice(b"level");
        bytes.extend_from_slice(&(-6i16).to_le_bytes());

        match parse_one(&bytes) {
            Block::Select { options } => {
                assert_eq!(options.len(), 2);
                assert_eq!(options[0].description, "side");
                assert_eq!(options[0].offset, 2);
                assert_eq!(options[1].description, "level");
                assert_eq!(options[1].offset, -6);
            }
            other => panic!("expected Select, got {other:?}"),
        }
    }

    #[test]
    fn hardware_type_entries() {
        let bytes = [0x33, 2, 0x00, 0x03, 0x01, 0x01, 0x15, 0x00];
        match parse_one(&bytes) {
            Block::HardwareType { machines } => {
                assert_eq!(machines.len(), 2);
                assert_eq!(
                    machines[0],
                    HardwareInfo {
                        hardware_type: 0x00,
                        id: 0x03,
                        info: 0x01,
                    }
                );
            }
            other => panic!("expected HardwareType, got {other:?}"),
        }
    }

    #[test]
    fn custom_info_length_prefixed_payload() {
        let mut bytes = vec![0x35];
        bytes.extend_from_slice(b"POKEs     ");
        bytes.extend_from_slice(&3u32.to_le_bytes());
        bytes.extend_from_slice(&[1, 2, 3]);

        match parse_one(&bytes) {
            Block::CustomInfo {
                identification,
                info,
            } => {
                assert_eq!(&identification, b"POKEs     ");
                assert_eq!(info, vec![1, 2, 3]);
            }
            other => panic!("expected CustomInfo, got {other:?}"),
        }
    }

    #[test]
    fn custom_info_declared_length_past_eof_is_truncation() {
        let mut bytes = vec![0x35];
        bytes.extend_from_slice(b"ABCDEFGHIJ");
        bytes.extend_from_slice(&100u32.to_le_bytes());
        bytes.extend_from_slice(&[1, 2, 3]);

        let mut r = Reader::new(&bytes);
        match Block::parse(&mut r) {
            Err(TzxError::Truncated(e)) => {
                assert_eq!(e.needed, 100);
                assert_eq!(e.remaining, 3);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn glue_block_is_nine_bytes() {
        let mut bytes = vec![0x5A];
        bytes.extend_from_slice(b"XTape!\x1A");
        bytes.push(1);
        bytes.push(20);
        match parse_one(&bytes) {
            Block::Glue { value } => assert_eq!(&value[..7], b"XTape!\x1A"),
            other => panic!("expected Glue, got {other:?}"),
        }
    }

    #[test]
    fn message_block() {
        let mut bytes = vec![0x31, 5, 4];
        bytes.extend_from_slice(b"Stop");
        assert_eq!(
            parse_one(&bytes),
            Block::Message {
                display_seconds: 5,
                text: "Stop".to_string(),
            }
        );
    }

    #[test]
    fn archive_info_skips_trailing_slack() {
        // Declared length 10: count(1) + entry(2+5) = 8 used, 2 slack
        let mut bytes = vec![0x32];
        bytes.extend_from_slice(&10u16.to_le_bytes());
        bytes.push(1);
        bytes.push(0x00);
        bytes.push(5);
        bytes.extend_from_slice(b"Title");
        bytes.extend_from_slice(&[0xAA, 0xBB]);

        match parse_one(&bytes) {
            Block::ArchiveInfo { entries } => {
                assert_eq!(entries, vec![(0x00, "Title".to_string())]);
            }
            other => panic!("expected ArchiveInfo, got {other:?}"),
        }
    }

    #[test]
    fn archive_info_overrunning_its_length_is_rejected() {
        // Declared length 3 but the single entry needs 8 bytes
        let mut bytes = vec![0x32];
        bytes.extend_from_slice(&3u16.to_le_bytes());
        bytes.push(1);
        bytes.push(0x00);
        bytes.push(5);
        bytes.extend_from_slice(b"Title");

        let mut r = Reader::new(&bytes);
        assert!(matches!(
            Block::parse(&mut r),
            Err(TzxError::BlockLengthUnderflow { id: 0x32, .. })
        ));
    }

    #[test]
    fn csw_length_includes_fixed_fields() {
        let mut bytes = vec![0x18];
        bytes.extend_from_slice(&12u32.to_le_bytes()); // 10 fixed + 2 data
        bytes.extend_from_slice(&0u16.to_le_bytes()); // pause
        bytes.extend_from_slice(&[0x44, 0xAC, 0x00]); // 44100 Hz
        bytes.push(2); // Z-RLE
        bytes.extend_from_slice(&100u32.to_le_bytes()); // pulses
        bytes.extend_from_slice(&[0xDE, 0xAD]);

        match parse_one(&bytes) {
            Block::CswRecording {
                sample_rate,
                compression,
                pulse_count,
                data,
                ..
            } => {
                assert_eq!(sample_rate, 44100);
                assert_eq!(compression, 2);
                assert_eq!(pulse_count, 100);
                assert_eq!(data, vec![0xDE, 0xAD]);
            }
            other => panic!("expected CswRecording, got {other:?}"),
        }
    }

    #[test]
    fn csw_length_below_fixed_fields_is_rejected() {
        let mut bytes = vec![0x18];
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(&[0; 10]);

        let mut r = Reader::new(&bytes);
        assert!(matches!(
            Block::parse(&mut r),
            Err(TzxError::BlockLengthUnderflow { id: 0x18, .. })
        ));
    }

    #[test]
    fn set_signal_level_consumes_declared_length() {
        let mut bytes = vec![0x2B];
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.push(1);
        assert_eq!(parse_one(&bytes), Block::SetSignalLevel { level: true });
    }

    #[test]
    fn ids_round_trip_through_accessors() {
        let block = parse_one(&{
            let mut b = vec![0x26];
            b.extend_from_slice(&0u16.to_le_bytes());
            b
        });
        assert_eq!(block.id(), 0x26);
        assert_eq!(block.name(), "Call Sequence");

        assert_eq!(parse_one(&[0x27]).id(), 0x27);
        assert_eq!(parse_one(&[0x27]).name(), "Return from Sequence");
    }
}
