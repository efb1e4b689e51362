//! # Block Tokenization
//!
//! Single-pass split of a raw report string into typed blocks.
//!
//! ## Phases
//!
//! 1. **Fence detection** (`fence`): a line whose trimmed form starts with
//!    three backticks delimits a code block and optionally declares a
//!    language tag. Fence lines are consumed, never emitted as content.
//!
//! 2. **Block folding** (`blocks`): lines are folded through a single
//!    accumulator that alternates between prose and code mode, emitting a
//!    completed [`Block`] at every fence boundary and flushing whatever
//!    remains at end of input.
//!
//! ## Key Invariants
//!
//! - Every non-fence input line lands in exactly one block, verbatim.
//! - A block with zero accumulated lines is never emitted, so consecutive
//!   fences produce no stray empty block.
//! - An unterminated fence still flushes its lines as a final code block.
//! - Tokenization is total: any input yields a valid (possibly empty)
//!   block sequence.

pub mod blocks;
pub mod fence;

pub use blocks::{Block, tokenize};
pub use fence::Fence;
