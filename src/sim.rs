//! Deterministic execution of one program against the fixed grid.
//!
//! Every run owns a pristine terrain copy and a small machine state:
//! program counter, facing, position, a two-entry return-address stack
//! and the highest terrain a jump has landed on. Execution starts at
//! slot 0 and halts when control reaches slot 12, the address just past
//! Main. Blocked moves, blocked toggles and steps over the grid edge are
//! ordinary no-ops, never errors.

// Fitness packs two small fields into one word
#![allow(clippy::cast_possible_truncation, clippy::cast_lossless)]

use crate::grid::{Coord, Direction, Grid, GOAL_COUNT, START, START_FACING};
use crate::program::{Instruction, Program, PROGRAM_LEN, SUB1_START, SUB2_START};

/// Last slot of the Sub1 segment, which returns to the caller.
const SUB1_LAST: usize = SUB2_START - 1;
/// Last slot of the Sub2 segment, which returns to the caller.
const SUB2_LAST: usize = PROGRAM_LEN - 1;

/// Scalar ranking key for one execution.
///
/// Lit goal lights dominate and the highest terrain reached breaks
/// ties, so comparing the packed word is exactly the lexicographic
/// comparison of the pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fitness(u32);

impl Fitness {
    /// Fitness of a run that lit nothing and never left ground level.
    pub const ZERO: Self = Self(0);

    const fn new(lights_lit: u8, max_height: u8) -> Self {
        Self(((lights_lit as u32) << 8) | max_height as u32)
    }

    /// How many goal cells ended the run lit.
    #[must_use]
    pub const fn lights_lit(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The greatest height any successful jump landed on.
    #[must_use]
    pub const fn max_height(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// The packed ordering key, `lights_lit * 256 + max_height`.
    #[must_use]
    pub const fn score(self) -> u32 {
        self.0
    }

    /// Whether every goal light ended the run lit.
    #[must_use]
    pub const fn is_solution(self) -> bool {
        self.lights_lit() == GOAL_COUNT
    }
}

/// Run `program` against a fresh copy of the terrain.
///
/// The grid copy is private to the call, so lit state never leaks
/// between runs and equal programs always produce equal fitness.
/// Execution halts for any instruction array, valid or not: a call with
/// a full return stack refuses to jump, popping an empty stack yields
/// the halt address, and a return past the last slot also halts.
#[must_use]
pub fn execute(program: &Program) -> Fitness {
    Machine::new().run(program)
}

/// Forward walks only across level ground.
const fn forward_allowed(from: u8, to: u8) -> bool {
    to == from
}

/// Jump descends any drop or climbs exactly one.
const fn jump_allowed(from: u8, to: u8) -> bool {
    to < from || to == from + 1
}

/// Fixed two-slot return-address stack.
///
/// Valid programs bound call depth to two, so overflow and underflow
/// are unreachable for them; the graceful fallbacks keep execution of
/// arbitrary instruction arrays finite.
#[derive(Debug, Clone, Copy, Default)]
struct ReturnStack {
    slots: [usize; 2],
    depth: usize,
}

impl ReturnStack {
    /// Push a return address; reports whether there was room.
    fn push(&mut self, address: usize) -> bool {
        if self.depth == self.slots.len() {
            return false;
        }
        self.slots[self.depth] = address;
        self.depth += 1;
        true
    }

    /// Pop the most recent return address, or the halt address when
    /// empty.
    fn pop(&mut self) -> usize {
        if self.depth == 0 {
            return SUB1_START;
        }
        self.depth -= 1;
        self.slots[self.depth]
    }
}

/// Mutable state of one execution.
#[derive(Debug)]
struct Machine {
    grid: Grid,
    position: Coord,
    facing: Direction,
    pc: usize,
    calls: ReturnStack,
    max_height: u8,
}

impl Machine {
    fn new() -> Self {
        Self {
            grid: Grid::new(),
            position: START,
            facing: START_FACING,
            pc: 0,
            calls: ReturnStack::default(),
            max_height: 0,
        }
    }

    fn run(mut self, program: &Program) -> Fitness {
        loop {
            if self.dispatch(program.cmds[self.pc]) {
                continue;
            }
            self.pc = match self.pc {
                SUB1_LAST | SUB2_LAST => self.calls.pop(),
                _ => self.pc + 1,
            };
            if self.pc == SUB1_START || self.pc >= PROGRAM_LEN {
                break;
            }
        }
        Fitness::new(self.grid.lights_lit(), self.max_height)
    }

    /// Execute one instruction. Returns true when control has already
    /// moved to a new slot and the step rule must not run.
    fn dispatch(&mut self, cmd: Instruction) -> bool {
        match cmd {
            Instruction::TurnRight => self.facing = self.facing.clockwise(),
            Instruction::TurnLeft => self.facing = self.facing.counter_clockwise(),
            Instruction::CallSub1 => return self.call(SUB1_START),
            Instruction::CallSub2 => return self.call(SUB2_START),
            Instruction::ToggleLight => {
                if self.grid.get(self.position).has_light() {
                    self.grid.toggle_light(self.position);
                }
            }
            Instruction::Forward => {
                let ahead = self.position.ahead(self.facing);
                if forward_allowed(self.height_at(self.position), self.height_at(ahead)) {
                    self.position = ahead;
                }
            }
            Instruction::Jump => {
                let ahead = self.position.ahead(self.facing);
                let landing = self.height_at(ahead);
                if jump_allowed(self.height_at(self.position), landing) {
                    self.max_height = self.max_height.max(landing);
                    self.position = ahead;
                }
            }
            Instruction::Nop => {}
        }
        false
    }

    fn call(&mut self, target: usize) -> bool {
        if self.calls.push(self.pc + 1) {
            self.pc = target;
            return true;
        }
        false
    }

    fn height_at(&self, coord: Coord) -> u8 {
        self.grid.get(coord).height()
    }
}
