//! Error types for the front end.
//!
//! Parse errors never abort a parse. They are collected on the parser and
//! carry the source position they were raised at, so a caller can report
//! every problem found in one pass.

pub mod errors;
