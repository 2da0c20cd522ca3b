//! Playback-order resolution.
//!
//! The block list holds the tape in raw file order, but five block kinds
//! are control instructions rather than content: Jump To, Loop Start/End,
//! Call Sequence / Return from Sequence, and Select. This module walks the
//! list interpreting them, yielding the blocks a tape deck would actually
//! play, in the order it would play them.
//!
//! The walk is a state machine over an immutable slice: position index,
//! call stack, loop stack. Loops can make the played sequence longer than
//! the list itself, so the walk is lazy — an iterator the caller drives,
//! and may abandon at any point. Positions are plain indices; falling off
//! either end of the list via ordinary advancement is the end of the tape.

use thiserror::Error;

use crate::block::{Block, SelectOption};

/// A control block broke the format's sequencing rules.
///
/// Every variant carries the index of the offending block in the raw list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("loop start at block {index} while the loop at block {open_at} is still open")]
    NestedLoop { index: usize, open_at: usize },
    #[error("loop start at block {index} declares zero repetitions")]
    InvalidLoopCount { index: usize },
    #[error("call at block {index} while the call at block {open_at} is still active")]
    NestedCall { index: usize, open_at: usize },
    #[error("return at block {index} with no call in progress")]
    ReturnWithoutCall { index: usize },
    #[error("block {index} targets position {target}, outside the block list")]
    TargetOutOfRange { index: usize, target: i64 },
    #[error("playback exceeded the step limit of {limit}")]
    StepLimitExceeded { limit: usize },
}

/// An in-progress Call Sequence: where it sits and which of its targets
/// have been dispatched. The format forbids nesting, so at most one is
/// active; kept as a stack so the return rules are checked against state,
/// not recursion depth.
#[derive(Debug, Clone, Copy)]
struct CallFrame<'a> {
    call_index: usize,
    targets: &'a [i16],
    next: usize,
}

/// An in-progress loop: first body block and repetitions left.
#[derive(Debug, Clone, Copy)]
struct LoopFrame {
    start: usize,
    body: usize,
    remaining: u16,
}

type Chooser<'a> = dyn FnMut(&[SelectOption]) -> Option<usize> + 'a;

/// Lazy iterator over the effective play order.
///
/// Yields `(raw index, block)` for every playable block; control blocks
/// are interpreted, never yielded. Each call to [`TzxFile::playback`] or
/// [`Playback::new`] starts a fresh walk from the first block.
///
/// [`TzxFile::playback`]: crate::TzxFile::playback
pub struct Playback<'a> {
    blocks: &'a [Block],
    pos: usize,
    calls: Vec<CallFrame<'a>>,
    loops: Vec<LoopFrame>,
    steps: usize,
    step_limit: Option<usize>,
    chooser: Option<Box<Chooser<'a>>>,
    done: bool,
}

impl<'a> Playback<'a> {
    #[must_use]
    pub fn new(blocks: &'a [Block]) -> Self {
        Self {
            blocks,
            pos: 0,
            calls: Vec::new(),
            loops: Vec::new(),
            steps: 0,
            step_limit: None,
            chooser: None,
            done: false,
        }
    }

    /// Fail after visiting `limit` positions. Jump cycles with no data
    /// blocks between them never yield, so the limit counts visited
    /// positions, not yielded blocks.
    #[must_use]
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Install a Select resolver. Given the candidate list it returns the
    /// chosen index; `None` or an out-of-range answer takes the first
    /// candidate.
    #[must_use]
    pub fn with_chooser(
        mut self,
        chooser: impl FnMut(&[SelectOption]) -> Option<usize> + 'a,
    ) -> Self {
        self.chooser = Some(Box::new(chooser));
        self
    }

    /// Relative-offset arithmetic with bounds check. A target of exactly
    /// `len` is the natural end of the tape, not an error.
    fn resolve(&self, index: usize, offset: i16) -> Result<usize, PlaybackError> {
        let target = index as i64 + i64::from(offset);
        if target < 0 || target > self.blocks.len() as i64 {
            return Err(PlaybackError::TargetOutOfRange { index, target });
        }
        Ok(target as usize)
    }

    /// Jump offsets 0 and 1 both mean "carry on with the next block".
    fn resolve_jump(&self, index: usize, offset: i16) -> Result<usize, PlaybackError> {
        if offset == 0 || offset == 1 {
            Ok(index + 1)
        } else {
            self.resolve(index, offset)
        }
    }

    fn fail(&mut self, err: PlaybackError) -> Option<<Self as Iterator>::Item> {
        self.done = true;
        Some(Err(err))
    }
}

impl<'a> Iterator for Playback<'a> {
    type Item = Result<(usize, &'a Block), PlaybackError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let blocks = self.blocks;

        loop {
            if self.pos >= blocks.len() {
                self.done = true;
                return None;
            }

            self.steps += 1;
            if let Some(limit) = self.step_limit {
                if self.steps > limit {
                    return self.fail(PlaybackError::StepLimitExceeded { limit });
                }
            }

            let index = self.pos;
            match &blocks[index] {
                Block::JumpTo { offset } => match self.resolve_jump(index, *offset) {
                    Ok(target) => self.pos = target,
                    Err(e) => return self.fail(e),
                },

                Block::LoopStart { count } => {
                    if let Some(open) = self.loops.last() {
                        let open_at = open.start;
                        return self.fail(PlaybackError::NestedLoop { index, open_at });
                    }
                    if *count == 0 {
                        return self.fail(PlaybackError::InvalidLoopCount { index });
                    }
                    self.loops.push(LoopFrame {
                        start: index,
                        body: index + 1,
                        remaining: *count,
                    });
                    self.pos = index + 1;
                }

                Block::LoopEnd => {
                    if let Some(frame) = self.loops.last_mut() {
                        frame.remaining -= 1;
                        if frame.remaining == 0 {
                            self.loops.pop();
                            self.pos = index + 1;
                        } else {
                            self.pos = frame.body;
                        }
                    } else {
                        // Unpaired loop end constrains nothing
                        self.pos = index + 1;
                    }
                }

                Block::CallSequence { offsets } => {
                    if let Some(active) = self.calls.last() {
                        let open_at = active.call_index;
                        return self.fail(PlaybackError::NestedCall { index, open_at });
                    }
                    if let Some(&first) = offsets.first() {
                        self.calls.push(CallFrame {
                            call_index: index,
                            targets: offsets,
                            next: 1,
                        });
                        match self.resolve(index, first) {
                            Ok(target) => self.pos = target,
                            Err(e) => return self.fail(e),
                        }
                    } else {
                        self.pos = index + 1;
                    }
                }

                Block::ReturnFromSequence => match self.calls.last_mut() {
                    None => return self.fail(PlaybackError::ReturnWithoutCall { index }),
                    Some(frame) if frame.next < frame.targets.len() => {
                        let call_index = frame.call_index;
                        let offset = frame.targets[frame.next];
                        frame.next += 1;
                        match self.resolve(call_index, offset) {
                            Ok(target) => self.pos = target,
                            Err(e) => return self.fail(e),
                        }
                    }
                    Some(_) => {
                        // All targets done: the return marker is where
                        // control rejoins the main flow
                        self.calls.pop();
                        self.pos = index + 1;
                    }
                },

                Block::Select { options } => {
                    if options.is_empty() {
                        self.pos = index + 1;
                    } else {
                        let chosen = self
                            .chooser
                            .as_mut()
                            .and_then(|choose| choose(options))
                            .filter(|&c| c < options.len())
                            .unwrap_or(0);
                        match self.resolve_jump(index, options[chosen].offset) {
                            Ok(target) => self.pos = target,
                            Err(e) => return self.fail(e),
                        }
                    }
                }

                block => {
                    self.pos = index + 1;
                    return Some(Ok((index, block)));
                }
            }
        }
    }
}
