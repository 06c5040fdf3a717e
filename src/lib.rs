// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Lumen: randomized hill-climbing search for grid-robot light programs.
//!
//! This crate couples a deterministic grid-walking interpreter with a
//! stack-based hill-climbing search driver. Candidate programs in an
//! eight-instruction micro-language are generated and mutated from a
//! reproducible bit-stream generator, scored by the interpreter against
//! a fixed height-mapped grid, and stacked as strictly improving
//! checkpoints with backtracking. Given the fixed seed, a whole run is
//! bit-for-bit reproducible.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          Search Driver              │
//! ├──────────────────┬──────────────────┤
//! │ Generate/Mutate  │    Simulator     │
//! ├──────────────────┴──────────────────┤
//! │  Program · Grid · Bit-stream PRNG   │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod grid;
pub mod mutation;
pub mod program;
pub mod rng;
pub mod search;
pub mod sim;

pub use error::ParseError;
pub use mutation::{mutate, mutate_valid};
pub use program::{Instruction, Program};
pub use rng::BitRng;
pub use search::{search, SearchConfig, SearchStats};
pub use sim::{execute, Fitness};
