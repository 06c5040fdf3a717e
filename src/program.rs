//! Fixed-length program representation and its segment rules.
//!
//! A program is 28 instructions split into Main (slots 0-11), Sub1
//! (slots 12-19) and Sub2 (slots 20-27). Sub1 may not call itself and
//! Sub2 may call nothing, which bounds the call graph to depth two.
//! [`Program::random`] keeps those rules by construction; the mutation
//! operator edits the flat array and may break them, so its callers
//! re-check with [`Program::is_valid`].

use crate::error::ParseError;
use crate::rng::BitRng;
use std::fmt::{self, Write};
use std::str::FromStr;

/// Total number of instruction slots.
pub const PROGRAM_LEN: usize = 28;
/// First slot of the Sub1 segment, and the address execution halts on.
pub const SUB1_START: usize = 12;
/// First slot of the Sub2 segment.
pub const SUB2_START: usize = 20;

/// One micro-language instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Instruction {
    /// Rotate a quarter turn clockwise.
    TurnRight = 0,
    /// Rotate a quarter turn counter-clockwise.
    TurnLeft = 1,
    /// Call the Sub1 segment.
    CallSub1 = 2,
    /// Call the Sub2 segment.
    CallSub2 = 3,
    /// Toggle the light on the current cell, if it carries one.
    ToggleLight = 4,
    /// Step ahead onto terrain of equal height.
    Forward = 5,
    /// Leap ahead, down any drop or up exactly one.
    Jump = 6,
    /// Do nothing.
    Nop = 7,
}

impl Instruction {
    /// The textual alphabet, indexed by instruction value.
    pub const SYMBOLS: [char; 8] = ['R', 'L', '1', '2', '*', 'F', '^', '_'];

    /// Decode the low three bits of `bits`; higher bits are ignored.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 7 {
            0 => Self::TurnRight,
            1 => Self::TurnLeft,
            2 => Self::CallSub1,
            3 => Self::CallSub2,
            4 => Self::ToggleLight,
            5 => Self::Forward,
            6 => Self::Jump,
            _ => Self::Nop,
        }
    }

    /// The instruction a symbol character stands for, if any.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'R' => Some(Self::TurnRight),
            'L' => Some(Self::TurnLeft),
            '1' => Some(Self::CallSub1),
            '2' => Some(Self::CallSub2),
            '*' => Some(Self::ToggleLight),
            'F' => Some(Self::Forward),
            '^' => Some(Self::Jump),
            '_' => Some(Self::Nop),
            _ => None,
        }
    }

    /// The symbol character for this instruction.
    #[must_use]
    pub const fn symbol(self) -> char {
        Self::SYMBOLS[self as usize]
    }
}

/// A complete 28-instruction program.
///
/// Programs are plain values: the search driver copies them freely and
/// every simulation reads them immutably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Program {
    pub(crate) cmds: [Instruction; PROGRAM_LEN],
}

impl Program {
    /// Draw a uniformly random program that honors the segment rules.
    ///
    /// Main draws from all eight instructions, Sub1 redraws away
    /// [`Instruction::CallSub1`], and Sub2 redraws away both call
    /// instructions, so the result is always valid.
    #[must_use]
    pub fn random(rng: &mut BitRng) -> Self {
        let mut cmds = [Instruction::Nop; PROGRAM_LEN];
        for cmd in &mut cmds[..SUB1_START] {
            *cmd = Instruction::from_bits(rng.draw_bits(3));
        }
        for cmd in &mut cmds[SUB1_START..SUB2_START] {
            *cmd = loop {
                let drawn = Instruction::from_bits(rng.draw_bits(3));
                if drawn != Instruction::CallSub1 {
                    break drawn;
                }
            };
        }
        for cmd in &mut cmds[SUB2_START..] {
            *cmd = loop {
                let drawn = Instruction::from_bits(rng.draw_bits(3));
                if !matches!(drawn, Instruction::CallSub1 | Instruction::CallSub2) {
                    break drawn;
                }
            };
        }
        Self { cmds }
    }

    /// Whether both segment rules hold: no [`Instruction::CallSub1`] in
    /// Sub1, and no call instruction at all in Sub2.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let sub1_clean = self.cmds[SUB1_START..SUB2_START]
            .iter()
            .all(|&cmd| cmd != Instruction::CallSub1);
        let sub2_clean = self.cmds[SUB2_START..]
            .iter()
            .all(|&cmd| !matches!(cmd, Instruction::CallSub1 | Instruction::CallSub2));
        sub1_clean && sub2_clean
    }
}

impl FromStr for Program {
    type Err = ParseError;

    /// Decode 28 symbol characters into a program.
    ///
    /// Unlike a diagnostic-and-continue decoder, any unknown symbol
    /// fails the whole parse; no slot is ever left undefined.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != PROGRAM_LEN {
            return Err(ParseError::BadLength(length));
        }
        let mut cmds = [Instruction::Nop; PROGRAM_LEN];
        for (index, symbol) in s.chars().enumerate() {
            cmds[index] = Instruction::from_symbol(symbol)
                .ok_or(ParseError::UnknownSymbol { symbol, index })?;
        }
        Ok(Self { cmds })
    }
}

impl fmt::Display for Program {
    /// Formats the three segments separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, cmd) in self.cmds.iter().enumerate() {
            if slot == SUB1_START || slot == SUB2_START {
                f.write_char(' ')?;
            }
            f.write_char(cmd.symbol())?;
        }
        Ok(())
    }
}
