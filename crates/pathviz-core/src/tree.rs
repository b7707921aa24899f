//! Rooted search trees stored in an arena.
//!
//! Nodes live in a flat `Vec` and refer to each other through [`NodeId`]
//! indices: `children` owns the downward links, `parent` is a plain index
//! back up. The root is always `NodeId(0)` and is the search start.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::ModelError;
use crate::geom::Pos;

/// Index of a node inside its [`Tree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: Self = Self(0);

    /// Underlying arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tree node with layout data and per-run search state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    /// Unique identity within the tree.
    pub id: String,
    /// Display label.
    pub value: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    /// Layout coordinate, used for rendering and the A* estimate.
    pub pos: Pos,
    /// Depth below the root.
    pub level: u32,
    pub is_start: bool,
    pub is_goal: bool,
    pub is_visited: bool,
    pub is_path: bool,
    pub is_blocked: bool,
    /// Cost of the edge to the parent; `None` outside weighted mode.
    pub weight: Option<u32>,
    /// Position in the settle order of the last search.
    pub visit_order: Option<u32>,
}

impl TreeNode {
    fn new(id: String, value: String, parent: Option<NodeId>, pos: Pos, level: u32) -> Self {
        Self {
            id,
            value,
            children: Vec::new(),
            parent,
            pos,
            level,
            is_start: false,
            is_goal: false,
            is_visited: false,
            is_path: false,
            is_blocked: false,
            weight: None,
            visit_order: None,
        }
    }

    /// Children in insertion order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent index, `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Label shown to the user; the goal is always shown as "Goal".
    pub fn display_label(&self) -> &str {
        if self.is_goal { "Goal" } else { self.value.as_str() }
    }

    /// Leading integer of the label, read the way `parseInt` reads it:
    /// optional whitespace, optional sign, then at least one digit.
    /// Anything after the digits is ignored. Digit runs too long for `i64`
    /// saturate at `i64::MAX` (or `-i64::MAX`).
    pub fn numeric_label(&self) -> Option<i64> {
        let s = self.value.trim_start();
        let (neg, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let n = rest.bytes().take(digits).fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });
        Some(if neg { -n } else { n })
    }

    fn clear_search(&mut self) {
        self.is_visited = false;
        self.is_path = false;
        self.visit_order = None;
    }
}

/// A parent→child link with its render state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeEdge {
    pub from: NodeId,
    pub to: NodeId,
    /// Both endpoints lie on the found path.
    pub is_path: bool,
    /// Both endpoints were visited or lie on the path.
    pub is_traversed: bool,
}

/// A single-rooted tree whose root is the search start.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    /// Create a tree holding only its root (the start node).
    pub fn new(id: impl Into<String>, value: impl Into<String>, pos: Pos) -> Self {
        let mut root = TreeNode::new(id.into(), value.into(), None, pos, 0);
        root.is_start = true;
        Self { nodes: vec![root] }
    }

    /// Append a child under `parent`. The child's level is derived from the
    /// parent's.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        id: impl Into<String>,
        value: impl Into<String>,
        pos: Pos,
    ) -> Result<NodeId, ModelError> {
        let id = id.into();
        let level = match self.get(parent) {
            Some(p) => p.level + 1,
            None => return Err(ModelError::UnknownNode(parent.to_string())),
        };
        if self.find(&id).is_some() {
            return Err(ModelError::DuplicateId(id));
        }
        let nid = NodeId(self.nodes.len());
        self.nodes
            .push(TreeNode::new(id, value.into(), Some(parent), pos, level));
        self.nodes[parent.0].children.push(nid);
        Ok(nid)
    }

    /// The root node, which is also the start.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The start node (always the root).
    #[inline]
    pub fn start(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node lookup by index.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Mutable node lookup by index.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(id.0)
    }

    /// Find a node by its string id.
    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.id == id).map(NodeId)
    }

    /// Children of `id`.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self[id].children
    }

    /// Parent of `id`.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    /// Whether `child` hangs directly under `parent`.
    pub fn is_edge(&self, parent: NodeId, child: NodeId) -> bool {
        self.get(child).and_then(|c| c.parent) == Some(parent)
    }

    /// Every node index in arena (creation) order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Every node in breadth-first order from the root.
    pub fn bfs_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        order.push(self.root());
        let mut i = 0;
        while i < order.len() {
            let id = order[i];
            order.extend_from_slice(self.children(id));
            i += 1;
        }
        order
    }

    /// Leaves in breadth-first order.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.bfs_order()
            .into_iter()
            .filter(|&id| self[id].is_leaf())
            .collect()
    }

    /// Depth of the deepest node, computed by a full traversal.
    pub fn max_depth(&self) -> u32 {
        self.depth_below(self.root())
    }

    /// Height of the subtree rooted at `id` (0 for a leaf).
    pub fn depth_below(&self, id: NodeId) -> u32 {
        fn walk(tree: &Tree, id: NodeId, depth: u32) -> u32 {
            tree.children(id)
                .iter()
                .map(|&c| walk(tree, c, depth + 1))
                .fold(depth, u32::max)
        }
        walk(self, id, 0)
    }

    /// The current goal, if any.
    pub fn goal(&self) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.is_goal).map(NodeId)
    }

    /// Make `id` the goal, clearing the previous one. The new goal is
    /// unblocked.
    pub fn set_goal(&mut self, id: NodeId) -> Result<(), ModelError> {
        let node = self
            .get(id)
            .ok_or_else(|| ModelError::UnknownNode(id.to_string()))?;
        if node.is_start {
            return Err(ModelError::StartNode(node.id.clone()));
        }
        self.clear_goal();
        let node = &mut self[id];
        node.is_goal = true;
        node.is_blocked = false;
        Ok(())
    }

    /// Remove the goal mark from every node.
    pub fn clear_goal(&mut self) {
        for n in self.nodes.iter_mut() {
            n.is_goal = false;
        }
    }

    /// Block or unblock a node. Blocking the goal clears the goal mark.
    pub fn set_blocked(&mut self, id: NodeId, blocked: bool) -> Result<(), ModelError> {
        let node = self
            .get_mut(id)
            .ok_or_else(|| ModelError::UnknownNode(id.to_string()))?;
        if node.is_start {
            return Err(ModelError::StartNode(node.id.clone()));
        }
        node.is_blocked = blocked;
        if blocked {
            node.is_goal = false;
        }
        Ok(())
    }

    /// Flip the blocked flag, returning the new value.
    pub fn toggle_blocked(&mut self, id: NodeId) -> Result<bool, ModelError> {
        let blocked = !self
            .get(id)
            .ok_or_else(|| ModelError::UnknownNode(id.to_string()))?
            .is_blocked;
        self.set_blocked(id, blocked)?;
        Ok(blocked)
    }

    /// Clear visited/path flags and visit order on every node. Topology,
    /// weights, blocks and start/goal marks are untouched.
    pub fn reset_search(&mut self) {
        for n in self.nodes.iter_mut() {
            n.clear_search();
        }
    }

    /// Whether any node carries an edge weight.
    pub fn has_weights(&self) -> bool {
        self.nodes.iter().any(|n| n.weight.is_some())
    }

    /// Cost of stepping from the parent into `child`.
    ///
    /// In weighted mode this is the child's weight (1 when unset), otherwise
    /// every edge costs 1.
    #[inline]
    pub fn edge_cost(&self, child: NodeId, weighted: bool) -> u32 {
        if weighted {
            self[child].weight.unwrap_or(1)
        } else {
            1
        }
    }

    /// Summed edge cost along a root-first path.
    pub fn path_cost(&self, path: &[NodeId], weighted: bool) -> u32 {
        path.iter()
            .skip(1)
            .map(|&id| self.edge_cost(id, weighted))
            .sum()
    }

    /// All parent→child edges in breadth-first order of their parent.
    pub fn edges(&self) -> Vec<TreeEdge> {
        let mut edges = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        for from in self.bfs_order() {
            let f = &self[from];
            for &to in f.children() {
                let t = &self[to];
                edges.push(TreeEdge {
                    from,
                    to,
                    is_path: f.is_path && t.is_path,
                    is_traversed: (f.is_visited || f.is_path) && (t.is_visited || t.is_path),
                });
            }
        }
        edges
    }
}

impl Index<NodeId> for Tree {
    type Output = TreeNode;

    #[inline]
    fn index(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Tree {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A → {B, C}, B → D.
    fn small() -> (Tree, [NodeId; 4]) {
        let mut t = Tree::new("A", "A", Pos::new(400.0, 50.0));
        let a = t.root();
        let b = t.add_child(a, "B", "B", Pos::new(200.0, 150.0)).unwrap();
        let c = t.add_child(a, "C", "C", Pos::new(600.0, 150.0)).unwrap();
        let d = t.add_child(b, "D", "D", Pos::new(100.0, 250.0)).unwrap();
        (t, [a, b, c, d])
    }

    #[test]
    fn build_links_parent_and_children() {
        let (t, [a, b, c, d]) = small();
        assert_eq!(t.len(), 4);
        assert!(t[a].is_start);
        assert_eq!(t.children(a), &[b, c]);
        assert_eq!(t.parent(d), Some(b));
        assert_eq!(t.parent(a), None);
        assert_eq!(t[d].level, 2);
        assert!(t.is_edge(b, d));
        assert!(!t.is_edge(a, d));
        assert_eq!(t.find("C"), Some(c));
        assert_eq!(t.find("Z"), None);
    }

    #[test]
    fn add_child_rejects_duplicates_and_unknown_parent() {
        let (mut t, [a, ..]) = small();
        assert_eq!(
            t.add_child(a, "B", "B", Pos::default()),
            Err(ModelError::DuplicateId("B".into()))
        );
        assert!(matches!(
            t.add_child(NodeId(99), "X", "X", Pos::default()),
            Err(ModelError::UnknownNode(_))
        ));
    }

    #[test]
    fn traversal_helpers() {
        let (t, [a, b, c, d]) = small();
        assert_eq!(t.bfs_order(), vec![a, b, c, d]);
        assert_eq!(t.leaves(), vec![c, d]);
        assert_eq!(t.max_depth(), 2);
        assert_eq!(t.depth_below(b), 1);
        assert_eq!(t.depth_below(c), 0);
    }

    #[test]
    fn only_one_goal_at_a_time() {
        let (mut t, [a, b, c, d]) = small();
        t.set_blocked(d, true).unwrap();
        t.set_goal(d).unwrap();
        assert!(!t[d].is_blocked);
        assert_eq!(t.goal(), Some(d));
        t.set_goal(c).unwrap();
        assert_eq!(t.goal(), Some(c));
        assert!(!t[d].is_goal);
        assert_eq!(t.set_goal(a), Err(ModelError::StartNode("A".into())));
        assert_eq!(t.goal(), Some(c));
        assert_eq!(t.toggle_blocked(c), Ok(true));
        assert_eq!(t.goal(), None);
        assert!(t.toggle_blocked(a).is_err());
        assert!(!t[b].is_blocked);
    }

    #[test]
    fn reset_clears_only_search_state() {
        let (mut t, [_, b, _, d]) = small();
        t.set_goal(d).unwrap();
        t[b].weight = Some(4);
        t[b].is_visited = true;
        t[b].is_path = true;
        t[b].visit_order = Some(1);
        t.reset_search();
        assert!(!t[b].is_visited && !t[b].is_path);
        assert_eq!(t[b].visit_order, None);
        assert_eq!(t[b].weight, Some(4));
        assert_eq!(t.goal(), Some(d));
    }

    #[test]
    fn edge_cost_and_path_cost() {
        let (mut t, [a, b, _, d]) = small();
        t[b].weight = Some(5);
        t[d].weight = Some(2);
        assert!(t.has_weights());
        assert_eq!(t.path_cost(&[a, b, d], true), 7);
        assert_eq!(t.path_cost(&[a, b, d], false), 2);
        assert_eq!(t.path_cost(&[a], true), 0);
    }

    #[test]
    fn edges_reflect_flags() {
        let (mut t, [a, b, c, d]) = small();
        for id in [a, b, d] {
            t[id].is_path = true;
        }
        t[c].is_visited = true;
        let edges = t.edges();
        assert_eq!(edges.len(), 3);
        let ab = edges.iter().find(|e| e.from == a && e.to == b).unwrap();
        assert!(ab.is_path && ab.is_traversed);
        let ac = edges.iter().find(|e| e.to == c).unwrap();
        assert!(!ac.is_path && ac.is_traversed);
    }

    #[test]
    fn numeric_label_reads_leading_integer() {
        let (mut t, [_, b, ..]) = small();
        for (value, want) in [
            ("42", Some(42)),
            ("  -7", Some(-7)),
            ("+3", Some(3)),
            ("12abc", Some(12)),
            ("B", None),
            ("A0", None),
            ("", None),
            ("-", None),
            ("99999999999999999999", Some(i64::MAX)),
            ("-99999999999999999999x", Some(-i64::MAX)),
        ] {
            t[b].value = value.into();
            assert_eq!(t[b].numeric_label(), want, "label {value:?}");
        }
    }

    #[test]
    fn goal_has_distinguished_label() {
        let (mut t, [_, _, c, _]) = small();
        assert_eq!(t[c].display_label(), "C");
        t.set_goal(c).unwrap();
        assert_eq!(t[c].display_label(), "Goal");
    }
}
