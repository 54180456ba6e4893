//! Random sources used to draw tile orientations
//!
//! This module contains:
//! - The `RandomSource` trait the grid engine draws from
//! - A scripted source replaying fixed draws
//! - The default label-seeded source with scoped reseeding

/// Label-seeded generator with scoped reseeding
pub mod seeded;
/// Random source abstraction and scripted replay
pub mod source;

pub use seeded::SeededRandom;
pub use source::{RandomSource, ScriptedSource};
