//! **pathviz-gen**: builds the structures searches run over.
//!
//! - [`TreeGen`] draws random trees under a node budget, lays them out for
//!   an 800-unit viewport and marks one leaf as goal.
//! - [`add_weights`] / [`remove_weights`] overlay and clear edge weights.
//! - [`sample_tree`] and [`large_tree`] are fixed demonstration trees.
//! - [`GridConfig`] builds the fixed-size grid board.
//!
//! Randomness always comes from a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces the same structures.

pub mod config;
pub mod samples;
pub mod treegen;
pub mod weights;

pub use config::{GridConfig, LabelStyle, TreeGenConfig};
pub use samples::{from_table, large_tree, sample_tree};
pub use treegen::{ROOT_ID, TreeGen, node_label};
pub use weights::{WEIGHT_RANGE, add_weights, remove_weights};
