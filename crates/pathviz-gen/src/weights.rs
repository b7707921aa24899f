//! Edge-weight overlay for trees.

use std::ops::RangeInclusive;

use pathviz_core::{NodeId, Tree};
use rand::{Rng, RngExt};

/// Weights drawn by [`add_weights`].
pub const WEIGHT_RANGE: RangeInclusive<u32> = 1..=9;

/// Give every non-root node a uniformly random edge weight from
/// [`WEIGHT_RANGE`]. Existing weights are overwritten.
pub fn add_weights(tree: &mut Tree, rng: &mut impl Rng) {
    for i in 1..tree.len() {
        tree[NodeId(i)].weight = Some(rng.random_range(WEIGHT_RANGE));
    }
    log::debug!("weighted {} edges", tree.len().saturating_sub(1));
}

/// Clear every edge weight.
pub fn remove_weights(tree: &mut Tree) {
    for i in 0..tree.len() {
        tree[NodeId(i)].weight = None;
    }
}
