//! Graph generation.
//!
//! [`generate`] grows a layered random graph from a [`GeneratorConfig`] and a
//! [`RandomSource`]. Randomness is always passed in: use
//! [`RngSource::seeded`] for reproducible graphs and
//! [`RngSource::time_seeded`] otherwise.
//!
//! # Example
//!
//! ```rust
//! use graphgen::generator::{generate, GeneratorConfig, RngSource};
//! use graphgen::graph::tree_edges_span;
//!
//! let config = GeneratorConfig::new(4, 3).unwrap();
//! let generated = generate(&config, &mut RngSource::seeded(17)).unwrap();
//!
//! assert!(tree_edges_span(&generated.graph));
//! assert_eq!(generated.depth_map.level(0).unwrap().first, 0);
//! ```

mod custom;
mod depth_map;
mod layered;
pub mod random;

pub use custom::build_custom;
pub use depth_map::{DepthMap, LevelRange};
pub use layered::{
    add_cross_links, generate, grow_tree, GenerateError, GeneratedGraph, GeneratorConfig,
    DOUBLE_SKIP_PROBABILITY, SAME_LEVEL_PROBABILITY, SELF_LOOP_PROBABILITY,
};
pub use random::{wall_clock_seed, RandomSource, RngSource};
