use crate::buffer::{CharBuffer, TERMINATOR_SLOT};
use std::fmt;

pub const CWE_ID: u32 = 464;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    /// A zero byte sits in front of the slot reserved for the terminator,
    /// so every string consumer stops early.
    EmbeddedSentinel {
        position: usize,
        intended: usize,
        lost: usize,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Finding::EmbeddedSentinel {
                position,
                intended,
                lost,
            } => write!(
                f,
                "reason: unintended null byte (CWE-{})\nposition: {} (terminator expected at {})\nbytes hidden: {}",
                CWE_ID, position, intended, lost
            ),
        }
    }
}

pub fn inspect(buffer: &CharBuffer) -> Option<Finding> {
    match buffer.terminator() {
        Some(position) if position < TERMINATOR_SLOT => Some(Finding::EmbeddedSentinel {
            position,
            intended: TERMINATOR_SLOT,
            lost: TERMINATOR_SLOT - position,
        }),
        _ => None,
    }
}
