//! Name blind-box library.
//!
//! This crate provides the logic behind the name blind box:
//! - Character-to-imagery lexicon, built in or loaded from disk
//! - Name analysis into two candidate imagery lists
//! - Curated or randomly synthesized element combinations
//! - Prompt, report and selection helpers used by the front ends
//!
//! Everything is pure apart from the random source, which callers pass in.

/// Lexicon, analyzer, combination generator and their companions.
pub mod model;

pub use model::analyzer::{ImageryOptions, NameAnalyzer};
pub use model::combination::CombinationGenerator;
pub use model::element::{Catalog, Combination, Element};
pub use model::lexicon::Lexicon;
