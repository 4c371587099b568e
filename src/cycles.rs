//! Static cycle-count annotation.
//!
//! The disassembler cannot know register values, so an instruction whose cost
//! depends on the runtime path is reported as a "best/worst" pair. Method after
//! Nick Bensema's guide to cycle counting on the Atari 2600.

use std::fmt;

use crate::opcodes::{CycleExceptions, OpcodeMetadata};

/// Cycle cost reported for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleCount {
    /// The instruction always takes this many cycles.
    Fixed(u8),

    /// The instruction takes `min` cycles on its short path and `max` on its long path.
    Range { min: u8, max: u8 },
}

impl fmt::Display for CycleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleCount::Fixed(cycles) => write!(f, "{}", cycles),
            CycleCount::Range { min, max } => write!(f, "{}/{}", min, max),
        }
    }
}

/// True when `a` and `b` are on different 256-byte pages.
///
/// Only the high bytes are compared.
#[inline]
pub const fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Compute the cycle annotation for an instruction.
///
/// `next_pc` is the address immediately after the instruction and `target`
/// the resolved branch destination. `target` is ignored unless the entry is
/// a branch (both exception flags set).
///
/// A branch's page is taken from `next_pc + 1`, so a branch whose last byte
/// sits at `$xxFE` counts as leaving its page.
pub fn cycles_for(entry: &OpcodeMetadata, next_pc: u16, target: u16) -> CycleCount {
    let base = entry.base_cycles;
    let exceptions = entry.cycle_exceptions;

    if exceptions.is_empty() {
        return CycleCount::Fixed(base);
    }

    if exceptions.contains(CycleExceptions::PAGE_CROSS | CycleExceptions::BRANCH_TAKEN) {
        // Branch: page crossing is known statically from the displacement.
        if crosses_page(next_pc.wrapping_add(1), target) {
            CycleCount::Range {
                min: base + 1,
                max: base + 2,
            }
        } else {
            CycleCount::Range {
                min: base,
                max: base + 1,
            }
        }
    } else {
        // Indexed access: crossing depends on X/Y at runtime.
        CycleCount::Range {
            min: base,
            max: base + 1,
        }
    }
}
