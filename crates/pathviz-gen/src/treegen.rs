//! Random tree generation.

use pathviz_core::{NodeId, Pos, Tree};
use rand::{Rng, RngExt};

use crate::config::{LabelStyle, TreeGenConfig};

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Id of the root of every generated tree.
pub const ROOT_ID: &str = "Start";

/// Random tree builder.
///
/// Holds its own generator so a seeded `R` reproduces the same sequence of
/// trees.
pub struct TreeGen<R: Rng> {
    pub rng: R,
    pub config: TreeGenConfig,
}

impl<R: Rng> TreeGen<R> {
    /// Create a generator with the given settings.
    pub fn new(config: TreeGenConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Create a generator with [`TreeGenConfig::default`].
    pub fn with_rng(rng: R) -> Self {
        Self::new(TreeGenConfig::default(), rng)
    }

    /// Build a new random tree.
    ///
    /// 1. Draw the depth uniformly from `min_depth..=max_depth`.
    /// 2. Expand depth-first: each child is created and its whole subtree
    ///    built before its next sibling, so ids follow pre-order and the
    ///    leftmost branches spend the node budget first. Each node gets 1 to
    ///    3 children, at most 2 once 5 or fewer slots remain below
    ///    `max_nodes`, and never more than the slots left. Children are
    ///    spread evenly across the parent's band, which narrows by
    ///    `band_shrink` per level.
    /// 3. Mark one leaf below the root, picked uniformly, as the goal.
    pub fn generate(&mut self) -> Tree {
        let Self { rng, config: cfg } = self;

        let lo = cfg.min_depth.min(cfg.max_depth);
        let hi = cfg.min_depth.max(cfg.max_depth);
        let depth = rng.random_range(lo..=hi);

        let root_value = match cfg.labels {
            LabelStyle::Letters => ROOT_ID.to_string(),
            LabelStyle::Numbers => "0".to_string(),
        };
        let mut tree = Tree::new(ROOT_ID, root_value, cfg.root_pos);
        let mut counter = 1usize;
        let root = tree.root();
        grow(&mut tree, rng, cfg, root, cfg.band_width, depth, &mut counter);

        let leaves: Vec<_> = tree
            .leaves()
            .into_iter()
            .filter(|&id| tree[id].level >= 1)
            .collect();
        if leaves.is_empty() {
            log::warn!("generated tree has no leaf below the root; no goal set");
        } else {
            let goal = leaves[rng.random_range(0..leaves.len())];
            match tree.set_goal(goal) {
                Ok(()) => log::debug!("goal {} at {}", tree[goal].id, tree[goal].pos),
                Err(e) => log::warn!("could not mark goal: {e}"),
            }
        }

        log::debug!(
            "generated tree: {} nodes, depth {} (drawn {}), {} leaves",
            tree.len(),
            tree.max_depth(),
            depth,
            leaves.len()
        );
        tree
    }
}

/// Give `parent` its children, then recurse into each before creating the
/// next sibling.
fn grow<R: Rng>(
    tree: &mut Tree,
    rng: &mut R,
    cfg: &TreeGenConfig,
    parent: NodeId,
    width: f64,
    depth: u32,
    counter: &mut usize,
) {
    let (level, center) = (tree[parent].level, tree[parent].pos);
    if level >= depth {
        return;
    }
    let remaining = cfg.max_nodes.saturating_sub(tree.len());
    if remaining == 0 {
        return;
    }
    let cap = if remaining <= 5 { 2 } else { 3 };
    let count = rng.random_range(1..=cap).min(remaining);
    let spacing = width / (count + 1) as f64;

    for i in 0..count {
        if tree.len() >= cfg.max_nodes {
            break;
        }
        let x = cfg.clamp_x(center.x - width / 2.0 + spacing * (i + 1) as f64);
        let pos = Pos::new(x, center.y + cfg.level_height);
        let (id, value) = node_label(cfg.labels, *counter);
        *counter += 1;
        match tree.add_child(parent, id, value, pos) {
            Ok(child) => grow(tree, rng, cfg, child, width * cfg.band_shrink, depth, counter),
            Err(e) => log::warn!("tree generation skipped a node: {e}"),
        }
    }
}

/// Id and display value of the `n`-th created node.
///
/// Ids always carry the cycle number (`B0`, `A1`); letter values drop it on
/// the first cycle (`B`, `A1`).
pub fn node_label(style: LabelStyle, n: usize) -> (String, String) {
    let letter = LETTERS[n % LETTERS.len()] as char;
    let cycle = n / LETTERS.len();
    let id = format!("{letter}{cycle}");
    let value = match style {
        LabelStyle::Letters if cycle == 0 => letter.to_string(),
        LabelStyle::Letters => id.clone(),
        LabelStyle::Numbers => n.to_string(),
    };
    (id, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn trees(config: TreeGenConfig, count: u64) -> impl Iterator<Item = Tree> {
        (0..count).map(move |seed| {
            TreeGen::new(config.clone(), StdRng::seed_from_u64(seed)).generate()
        })
    }

    #[test]
    fn labels() {
        assert_eq!(node_label(LabelStyle::Letters, 1), ("B0".into(), "B".into()));
        assert_eq!(node_label(LabelStyle::Letters, 26), ("A1".into(), "A1".into()));
        assert_eq!(node_label(LabelStyle::Letters, 28), ("C1".into(), "C1".into()));
        assert_eq!(node_label(LabelStyle::Numbers, 7), ("H0".into(), "7".into()));
    }

    #[test]
    fn respects_node_budget_and_depth() {
        for t in trees(TreeGenConfig::default(), 200) {
            assert!(t.len() <= 10, "{} nodes", t.len());
            assert!(t.len() >= 2);
            let d = t.max_depth();
            assert!((1..=4).contains(&d), "depth {d}");
            for id in t.ids() {
                assert!(t.children(id).len() <= 3);
            }
        }
    }

    #[test]
    fn exactly_one_goal_leaf_below_root() {
        for t in trees(TreeGenConfig::default(), 200) {
            let goals: Vec<_> = t.ids().filter(|&id| t[id].is_goal).collect();
            assert_eq!(goals.len(), 1);
            let g = goals[0];
            assert!(t[g].is_leaf());
            assert!(t[g].level >= 1);
            assert_eq!(t[g].display_label(), "Goal");
            assert_eq!(t.goal(), Some(g));
        }
    }

    #[test]
    fn layout_stays_in_viewport() {
        let cfg = TreeGenConfig::default();
        for t in trees(cfg.clone(), 200) {
            for id in t.ids() {
                let n = &t[id];
                assert!(n.pos.x >= cfg.margin && n.pos.x <= cfg.viewport_width - cfg.margin);
                assert_eq!(n.pos.y, cfg.root_pos.y + cfg.level_height * n.level as f64);
            }
        }
    }

    #[test]
    fn children_are_ordered_left_to_right() {
        for t in trees(TreeGenConfig::default(), 100) {
            for id in t.ids() {
                let xs: Vec<f64> = t.children(id).iter().map(|&c| t[c].pos.x).collect();
                assert!(xs.windows(2).all(|w| w[0] <= w[1]), "{xs:?}");
            }
        }
    }

    #[test]
    fn big_budget_can_reach_full_depth() {
        let cfg = TreeGenConfig {
            max_nodes: 200,
            min_depth: 4,
            max_depth: 4,
            ..TreeGenConfig::default()
        };
        for t in trees(cfg, 20) {
            assert_eq!(t.max_depth(), 4);
            assert!(t.ids().all(|id| t[id].is_leaf() || t[id].level < 4));
        }
    }

    #[test]
    fn seed_reproduces_tree() {
        let a = TreeGen::with_rng(StdRng::seed_from_u64(42)).generate();
        let b = TreeGen::with_rng(StdRng::seed_from_u64(42)).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn numeric_labels_parse() {
        let cfg = TreeGenConfig {
            labels: LabelStyle::Numbers,
            ..TreeGenConfig::default()
        };
        for t in trees(cfg, 20) {
            for id in t.ids() {
                assert!(t[id].numeric_label().is_some());
            }
        }
    }

    #[test]
    fn ids_follow_pre_order() {
        for t in trees(TreeGenConfig::default(), 100) {
            let mut order = Vec::new();
            let mut stack = vec![t.root()];
            while let Some(id) = stack.pop() {
                order.push(id);
                stack.extend(t.children(id).iter().rev());
            }
            assert_eq!(order, t.ids().collect::<Vec<_>>());
            for (n, &id) in order.iter().enumerate().skip(1) {
                assert_eq!(t[id].id, node_label(LabelStyle::Letters, n).0);
            }
        }
    }

    #[test]
    fn first_branch_is_built_before_its_sibling() {
        for t in trees(TreeGenConfig::default(), 100) {
            let kids = t.children(t.root());
            if kids.len() < 2 {
                continue;
            }
            // The second child comes after every node under the first.
            let mut stack = vec![kids[0]];
            while let Some(id) = stack.pop() {
                assert!(id.0 < kids[1].0);
                stack.extend_from_slice(t.children(id));
            }
        }
    }
}
