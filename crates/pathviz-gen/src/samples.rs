//! Fixed demonstration trees.

use pathviz_core::{ModelError, Pos, Tree};

/// One row of a tree table: id (also the label), parent id, layout x, y.
pub type TableRow<'a> = (&'a str, &'a str, f64, f64);

/// Build a tree from a table of child rows. Every parent must appear before
/// its children.
pub fn from_table(root: &str, root_pos: Pos, rows: &[TableRow<'_>]) -> Result<Tree, ModelError> {
    let mut tree = Tree::new(root, root, root_pos);
    for &(id, parent, x, y) in rows {
        let parent = tree
            .find(parent)
            .ok_or_else(|| ModelError::UnknownNode(parent.to_string()))?;
        tree.add_child(parent, id, id, Pos::new(x, y))?;
    }
    Ok(tree)
}

/// Eleven nodes over four levels, goal `F`:
///
/// ```text
///             A
///        B         C
///     D     E    F   G
///    H I   J K
/// ```
pub fn sample_tree() -> Result<Tree, ModelError> {
    let mut tree = from_table(
        "A",
        Pos::new(400.0, 50.0),
        &[
            ("B", "A", 200.0, 150.0),
            ("C", "A", 600.0, 150.0),
            ("D", "B", 100.0, 250.0),
            ("E", "B", 300.0, 250.0),
            ("F", "C", 500.0, 250.0),
            ("G", "C", 700.0, 250.0),
            ("H", "D", 50.0, 350.0),
            ("I", "D", 150.0, 350.0),
            ("J", "E", 250.0, 350.0),
            ("K", "E", 350.0, 350.0),
        ],
    )?;
    let goal = tree.find("F").ok_or_else(|| ModelError::UnknownNode("F".into()))?;
    tree.set_goal(goal)?;
    Ok(tree)
}

/// Twenty-one nodes in three differently shaped branches under `Root`.
///
/// The goal is the leaf at 60% of the breadth-first leaf list: deep, but not
/// the deepest.
pub fn large_tree() -> Result<Tree, ModelError> {
    let mut tree = from_table(
        "Root",
        Pos::new(400.0, 50.0),
        &[
            ("A", "Root", 200.0, 120.0),
            ("B", "Root", 400.0, 120.0),
            ("C", "Root", 600.0, 120.0),
            // A splits in two, B in three, C has one child.
            ("D", "A", 150.0, 200.0),
            ("E", "A", 250.0, 200.0),
            ("F", "B", 320.0, 200.0),
            ("G", "B", 400.0, 200.0),
            ("H", "B", 480.0, 200.0),
            ("I", "C", 600.0, 200.0),
            ("J", "D", 100.0, 280.0),
            ("K", "D", 200.0, 280.0),
            ("L", "E", 250.0, 280.0),
            ("M", "F", 320.0, 280.0),
            ("N", "G", 380.0, 280.0),
            ("O", "G", 420.0, 280.0),
            ("P", "I", 560.0, 280.0),
            ("Q", "I", 640.0, 280.0),
            ("R", "K", 230.0, 360.0),
            ("S", "N", 400.0, 360.0),
            ("T", "P", 620.0, 360.0),
        ],
    )?;
    let leaves = tree.leaves();
    let idx = leaves.len() * 3 / 5;
    if let Some(&goal) = leaves.get(idx) {
        tree.set_goal(goal)?;
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_tree_shape() {
        let t = sample_tree().unwrap();
        assert_eq!(t.len(), 11);
        assert_eq!(t.max_depth(), 3);
        let f = t.find("F").unwrap();
        assert_eq!(t.goal(), Some(f));
        assert_eq!(t[f].level, 2);
        assert!(t[t.root()].is_start);
        let labels: Vec<&str> = t.bfs_order().iter().map(|&id| t[id].value.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"]);
    }

    #[test]
    fn large_tree_goal_is_q() {
        let t = large_tree().unwrap();
        assert_eq!(t.len(), 21);
        assert_eq!(t.max_depth(), 4);
        let leaves: Vec<&str> = t.leaves().iter().map(|&id| t[id].id.as_str()).collect();
        assert_eq!(leaves, ["H", "J", "L", "M", "O", "Q", "R", "S", "T"]);
        assert_eq!(t.goal(), t.find("Q"));
        assert_eq!(t[t.find("B").unwrap()].level, 1);
        assert_eq!(t.children(t.find("G").unwrap()).len(), 2);
    }

    #[test]
    fn table_rejects_missing_parent() {
        let err = from_table("r", Pos::default(), &[("a", "nope", 0.0, 0.0)]).unwrap_err();
        assert_eq!(err, ModelError::UnknownNode("nope".into()));
    }
}
