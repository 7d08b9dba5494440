//! Top-level module for the name blind-box logic.
//!
//! This module provides:
//! - The imagery lexicon (`Lexicon`) and its file format
//! - The name analyzer (`NameAnalyzer`) producing two candidate lists
//! - The element catalog and the random combination generator
//! - Image prompts, box reports, symbol selection and the offline blind box

/// Immutable character → imagery table.
///
/// Built-in table, explicit construction, or a lexicon file with a
/// compiled postcard cache.
pub mod lexicon;

/// Name analysis over an injected lexicon.
pub mod analyzer;

/// Elements, combinations and the catalog they come from.
pub mod element;

/// Curated-or-random combination drawing with an injected random source.
pub mod combination;

/// Image styles and generation prompts.
pub mod prompt;

/// Rarity tiers, analysis sentences and generated boxes.
pub mod report;

/// Two-symbol selection and the fixed symbol library.
pub mod selection;

/// Shake / open / reset lifecycle of the offline blind box.
pub mod blind_box;
