//! Terminal walkthrough: every search over a random tree, the fixed trees
//! and the grid board.
//!
//! Run: cargo run --bin pathviz [seed]

use pathviz_core::{Point, Tree};
use pathviz_demos::{labels, render_grid, render_tree, summary};
use pathviz_gen::{
    GridConfig, LabelStyle, TreeGen, TreeGenConfig, add_weights, large_tree, sample_tree,
};
use pathviz_paths::{GridAlgorithm, TreeAlgorithm};
use pathviz_replay::{GridSession, SessionError, TreeSession};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn run_all(title: &str, tree: &Tree, weighted: bool) {
    let Some(goal) = tree.goal() else {
        println!("{title}: no goal\n");
        return;
    };
    println!("== {title} (goal {}) ==", tree[goal].value);
    print!("{}", render_tree(tree));
    for algo in TreeAlgorithm::ALL {
        let mut t = tree.clone();
        let start = t.start();
        let r = algo.run(&mut t, start, goal, weighted);
        println!("{:<20} {}", algo.name(), summary(&r, t.len()));
        println!("{:<20} visited: {}", "", labels(&t, &r.visited));
        if r.found {
            println!(
                "{:<20} path:    {} (cost {})",
                "",
                labels(&t, &r.path),
                t.path_cost(&r.path, weighted)
            );
        }
    }
    println!();
}

fn tree_session(seed: u64) -> Result<(), SessionError> {
    let treegen = TreeGen::with_rng(StdRng::seed_from_u64(seed));
    let mut session = TreeSession::new(treegen);
    session.set_algorithm(TreeAlgorithm::AStar);
    let stats = session.visualize(0)?;
    let mut now = 0;
    while session.is_in_flight() {
        now += 1;
        session.tick(now);
    }
    println!("== tree session: A* replayed in {now} ms ==");
    println!("{stats:?}");
    print!("{}", render_tree(session.tree()));
    println!();
    Ok(())
}

fn grid_session() -> Result<(), SessionError> {
    let mut session = GridSession::new(GridConfig::default())?;
    // A wall between start and end with a gap at the bottom.
    for row in 2..18 {
        session.toggle_wall(Point::at(row, 25))?;
    }
    for algo in GridAlgorithm::ALL {
        session.set_algorithm(algo);
        let stats = session.visualize(0)?;
        let end = session.grid().bounds().len() as u64 * 60;
        session.tick(end);
        println!("== grid: {algo} ==");
        println!(
            "visited {} ({:.0}%), path {}",
            stats.visited_count,
            stats.explored_pct(),
            stats.path_length
        );
        print!("{}", render_grid(session.grid()));
        session.clear_path()?;
    }
    Ok(())
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    println!("seed {seed}\n");

    let mut treegen = TreeGen::new(
        TreeGenConfig {
            labels: LabelStyle::Numbers,
            ..TreeGenConfig::default()
        },
        StdRng::seed_from_u64(seed),
    );
    let mut tree = treegen.generate();
    run_all("random tree", &tree, false);
    add_weights(&mut tree, &mut treegen.rng);
    run_all("random tree, weighted", &tree, true);

    match (sample_tree(), large_tree()) {
        (Ok(sample), Ok(large)) => {
            run_all("sample tree", &sample, false);
            run_all("large tree", &large, false);
        }
        (Err(e), _) | (_, Err(e)) => eprintln!("Error: {e}"),
    }

    if let Err(e) = tree_session(seed).and_then(|()| grid_session()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
