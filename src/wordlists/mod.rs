//! Word lists and word supply
//!
//! Provides the embedded word list compiled into the binary, file loading for
//! custom lists, and the suppliers that hand a fresh target word to each game.

mod embedded;
pub mod loader;
mod supplier;

pub use embedded::{WORDS, WORDS_COUNT};
pub use supplier::{RandomWordSupplier, SequenceSupplier, SupplierError, WordSupplier};
