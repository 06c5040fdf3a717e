//! Point-mutation operator for candidate programs.
//!
//! Edits treat the program as a flat 28-slot array and ignore the
//! segment boundaries, so one call can shift instructions from Main into
//! Sub1 or drop a call into a segment that forbids it. Callers that need
//! a valid result reapply the whole operator until [`Program::is_valid`]
//! passes; [`mutate_valid`] wraps that loop. Edits compound across
//! retries, which is part of the search's exploration distribution.

// The slot selectors are small draws used as indices
#![allow(clippy::cast_possible_truncation)]

use crate::program::{Instruction, Program, PROGRAM_LEN};
use crate::rng::BitRng;

/// Last slot index, where deletions park their fresh instruction.
const LAST: usize = PROGRAM_LEN - 1;

/// Apply between one and eight random point edits to `program`.
///
/// Each edit draws a 5-bit selector: 30 and 31 insert at a folded random
/// slot and shift the tail right (the last instruction falls off), 28 and
/// 29 delete a folded random slot and shift the tail left, and anything
/// lower overwrites that slot directly. Every edit finishes by writing a
/// freshly drawn instruction into the slot it targeted or vacated. The
/// result may violate the segment rules.
pub fn mutate(program: &mut Program, rng: &mut BitRng) {
    let edits = rng.draw_bits(3) + 1;
    for _ in 0..edits {
        let selector = rng.draw_bits(5);
        let slot = if selector >= 30 {
            let slot = shift_slot(rng);
            program.cmds.copy_within(slot..LAST, slot + 1);
            slot
        } else if selector >= 28 {
            let slot = shift_slot(rng);
            program.cmds.copy_within(slot + 1.., slot);
            LAST
        } else {
            selector as usize
        };
        program.cmds[slot] = Instruction::from_bits(rng.draw_bits(3));
    }
}

/// Reapply [`mutate`] until the program satisfies the segment rules.
///
/// The program is not reset between attempts, so failed edits stay in
/// the working copy and the next attempt builds on them.
pub fn mutate_valid(program: &mut Program, rng: &mut BitRng) {
    loop {
        mutate(program, rng);
        if program.is_valid() {
            return;
        }
    }
}

/// Draw the target slot for an insertion or deletion, folded into 0..=26.
fn shift_slot(rng: &mut BitRng) -> usize {
    let drawn = rng.draw_bits(5);
    let slot = if drawn > 26 { drawn - 26 } else { drawn };
    slot as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nops() -> Program {
        "____________________________".parse().unwrap()
    }

    #[test]
    fn test_mutate_is_reproducible() {
        let mut rng = BitRng::new();
        let mut program = nops();
        mutate(&mut program, &mut rng);
        assert_eq!(
            program.to_string().replace(' ', ""),
            "___*__L_____________________"
        );
    }

    #[test]
    fn test_mutate_valid_yields_valid_programs() {
        let mut rng = BitRng::new();
        let mut program = nops();
        for _ in 0..200 {
            mutate_valid(&mut program, &mut rng);
            assert!(program.is_valid());
        }
    }

    #[test]
    fn test_mutate_eventually_breaks_segment_rules() {
        // Unconstrained edits must be able to produce invalid programs,
        // otherwise the post-hoc validation loop would be dead code.
        let mut rng = BitRng::new();
        let mut seen_invalid = false;
        for _ in 0..200 {
            let mut program = nops();
            mutate(&mut program, &mut rng);
            seen_invalid |= !program.is_valid();
        }
        assert!(seen_invalid);
    }
}
