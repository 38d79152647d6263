use pathviz_core::{bfs, dfs, Graph, TraversalError, TraversalResult};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: pathviz-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all      Run all generators and benchmark each (default)");
        println!("  chain    Single path of maximum depth (deep-search worst case)");
        println!("  tree     Branching tree (wide frontier, shallow target)");
        println!("  random   Uniform random edges (no structure)");
        println!();
        println!("Default node_count: 1000000");
        return;
    }

    let generators: Vec<(&str, fn(usize) -> Graph)> = match mode {
        "chain" => vec![("Chain (max depth)", gen_chain)],
        "tree" => vec![("Tree (branching 3)", gen_tree)],
        "random" => vec![("Uniform random", gen_random)],
        "all" => vec![
            ("Chain (max depth)", gen_chain as fn(usize) -> Graph),
            ("Tree (branching 3)", gen_tree),
            ("Uniform random", gen_random),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    println!("pathviz-bench");
    println!("=============");
    println!();

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> Graph, node_count: usize) {
    println!("--- {} ---", name);

    let t = Instant::now();
    let graph = generator(node_count);
    println!(
        "Generated in {:.2}s: {} nodes, {} edges",
        t.elapsed().as_secs_f64(),
        graph.node_count(),
        graph.edge_count()
    );
    println!();

    // Far probe (node 0 to the last generated node) plus a miss probe that
    // forces full exhaustion of the reachable set.
    let far = id(node_count.saturating_sub(1));
    let probes = [("far", far.as_str()), ("miss", "unreachable")];

    println!("{:>6} {:>6} {:>10} {:>12} {:>10}", "algo", "probe", "distance", "visited", "time");
    println!("{:->6} {:->6} {:->10} {:->12} {:->10}", "", "", "", "", "");

    for (label, target) in probes {
        for (algo, run) in [("bfs", bfs as SearchFn), ("dfs", dfs as SearchFn)] {
            let t = Instant::now();
            match run(&graph, "n0", target) {
                Ok(result) => println!(
                    "{:>6} {:>6} {:>10} {:>12} {:>8.1}ms",
                    algo,
                    label,
                    result.distance,
                    result.visited.len(),
                    t.elapsed().as_secs_f64() * 1000.0
                ),
                Err(err) => println!("{:>6} {:>6} {}", algo, label, err),
            }
        }
    }
    println!();
}

type SearchFn = fn(&Graph, &str, &str) -> Result<TraversalResult, TraversalError>;

fn id(i: usize) -> String {
    format!("n{i}")
}

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
}

/// One straight path n0→n1→…→n{N-1}: the deepest graph possible for its
/// size. The recursive depth-first formulation would blow the call stack
/// here; the explicit-stack rewrite walks it flat.
fn gen_chain(node_count: usize) -> Graph {
    let mut graph = Graph::with_capacity(node_count);
    for i in 0..node_count.saturating_sub(1) {
        graph.add_edge(id(i), id(i + 1));
    }
    graph
}

/// Branching tree: each node gets 3 children, breadth grows exponentially.
/// The far probe (last generated node) sits on the deepest frontier.
fn gen_tree(node_count: usize) -> Graph {
    let branching = 3;
    let mut graph = Graph::with_capacity(node_count);
    graph.add_node(id(0));

    let mut next = 1;
    let mut frontier = vec![0];

    while next < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next >= node_count {
                    break;
                }
                let child = next;
                next += 1;
                graph.add_edge(id(parent), id(child));
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    graph
}

/// Uniform random edges, ~4 per node: baseline topology with no structure.
fn gen_random(node_count: usize) -> Graph {
    let target_edges = node_count * 4;
    let mut graph = Graph::with_capacity(node_count);
    let mut rng = FastRng::new(54321);

    for i in 0..node_count {
        graph.add_node(id(i));
    }

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            graph.add_edge(id(from), id(to));
        }
    }

    graph
}
