//! Text rendering shared by the demo binaries.
//!
//! Trees print as an indented outline, grids as one character per cell.

use pathviz_core::{Grid, NodeId, Tree};
use pathviz_paths::{SearchResult, SearchStats};

/// Indented outline of `tree`, one node per line with its marks.
///
/// ```text
/// Start
///   B [w3] *
///     D visited
/// ```
pub fn render_tree(tree: &Tree) -> String {
    let mut out = String::new();
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        let n = &tree[id];
        out.push_str(&"  ".repeat(n.level as usize));
        out.push_str(n.display_label());
        if let Some(w) = n.weight {
            out.push_str(&format!(" [w{w}]"));
        }
        if n.is_blocked {
            out.push_str(" blocked");
        }
        if n.is_path {
            out.push_str(" *");
        } else if n.is_visited {
            out.push_str(" visited");
        }
        out.push('\n');
        stack.extend(tree.children(id).iter().rev());
    }
    out
}

/// One character per cell: `S` start, `E` end, `#` wall, `*` path,
/// `.` visited, space otherwise.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.bounds().len() + grid.rows() as usize);
    let mut row = 0;
    for cell in grid.iter() {
        if cell.row != row {
            out.push('\n');
            row = cell.row;
        }
        let ch = if cell.is_start {
            'S'
        } else if cell.is_end {
            'E'
        } else if cell.is_wall {
            '#'
        } else if cell.is_path {
            '*'
        } else if cell.is_visited {
            '.'
        } else {
            ' '
        };
        out.push(ch);
    }
    out.push('\n');
    out
}

/// Labels of `ids`, joined by spaces.
pub fn labels(tree: &Tree, ids: &[NodeId]) -> String {
    ids.iter()
        .map(|&id| tree[id].display_label())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line summary of a run.
pub fn summary<N>(result: &SearchResult<N>, total_nodes: usize) -> String {
    let s = SearchStats::from_result(result, total_nodes);
    format!(
        "visited {} ({:.0}%), path {}, {}",
        s.visited_count,
        s.explored_pct(),
        s.path_length,
        if s.found { "found" } else { "not found" }
    )
}
