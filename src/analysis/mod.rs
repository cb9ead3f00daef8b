//! Password analysis primitives
//!
//! Pure functions, one per signal: entropy estimate, predictable-sequence
//! detection, repetition runs, character-class presence. The evaluator
//! combines their outputs; nothing here produces suggestions itself.

mod classes;
mod entropy;
mod repetition;
mod sequence;

pub use classes::character_classes;
pub use entropy::shannon_entropy;
pub use repetition::max_repetition_run;
pub use sequence::{DEFAULT_SEQ_LEN, has_sequence};
