//! graphgen - layered random graph generator with JSON export
//!
//! This crate grows random graphs whose vertices sit on depth levels: a
//! random tree first, then colored cross-links between and within levels.
//! The result can be written out as a JSON document.

pub mod export;
pub mod generator;
pub mod graph;
pub mod input;
pub mod logging;
