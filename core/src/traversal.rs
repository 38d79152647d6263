use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::error::TraversalError;
use crate::graph::{Graph, NodeId};

/// A first-discovery event, in chronological order.
///
/// The replay layer animates these one by one. The root step has no parent
/// and serializes without the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalStep {
    pub node: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
}

/// Outcome of one path search, consumed by the visualization layer.
///
/// `distance` is `-1` exactly when `path` is empty; the replay layer keys
/// on that sentinel to report unreachability. `visited` lists each node at
/// most once, in first-discovery order. `steps` is advisory replay data:
/// it mirrors `visited` with parent links and is never consulted when
/// computing `distance` or `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    pub distance: i32,
    pub path: Vec<NodeId>,
    pub visited: Vec<NodeId>,
    pub steps: Vec<TraversalStep>,
}

impl TraversalResult {
    /// Unreachable-target outcome: sentinel distance, empty path, with the
    /// exploration log still populated so the replay can show the work.
    fn unreachable(visited: Vec<NodeId>, steps: Vec<TraversalStep>) -> Self {
        Self {
            distance: -1,
            path: Vec::new(),
            visited,
            steps,
        }
    }
}

/// Breadth-first search from `source` to `target`.
///
/// Level-order exploration over a FIFO queue; the returned path is shortest
/// by edge count. Ties break by adjacency order. The target check fires on
/// each neighbor before any discovery bookkeeping, so the first edge out of
/// any dequeued node that reaches the target ends the search.
///
/// An unreachable target is a normal result (`distance: -1`, empty path).
/// Only an unknown `source` is an error; an unknown `target` is simply
/// never reached.
#[tracing::instrument(skip(graph), fields(%source, %target, nodes = graph.node_count()))]
pub fn bfs(graph: &Graph, source: &str, target: &str) -> Result<TraversalResult, TraversalError> {
    if !graph.contains(source) {
        return Err(TraversalError::UnknownSource(source.to_string()));
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
    let mut steps: Vec<TraversalStep> = Vec::new();

    visited.insert(source.to_string());
    order.push(source.to_string());
    steps.push(TraversalStep {
        node: source.to_string(),
        parent: None,
    });

    if source == target {
        return Ok(TraversalResult {
            distance: 0,
            path: vec![source.to_string()],
            visited: order,
            steps,
        });
    }

    // The queue carries (node, edge count from source); a node's queued
    // depth is exact because BFS dequeues in non-decreasing depth order.
    let mut queue: VecDeque<(NodeId, i32)> = VecDeque::new();
    queue.push_back((source.to_string(), 0));

    while let Some((u, depth)) = queue.pop_front() {
        for edge in graph.neighbors(&u) {
            let v = edge.target.as_str();

            if v == target {
                order.push(v.to_string());
                steps.push(TraversalStep {
                    node: v.to_string(),
                    parent: Some(u.clone()),
                });
                let result = TraversalResult {
                    distance: depth + 1,
                    path: reconstruct_path(&parents, source, &u, target),
                    visited: order,
                    steps,
                };
                tracing::debug!(distance = result.distance, "target reached");
                return Ok(result);
            }

            if !visited.contains(v) {
                visited.insert(v.to_string());
                order.push(v.to_string());
                parents.insert(v.to_string(), u.clone());
                steps.push(TraversalStep {
                    node: v.to_string(),
                    parent: Some(u.clone()),
                });
                queue.push_back((v.to_string(), depth + 1));
            }
        }
    }

    tracing::debug!(visited = order.len(), "queue exhausted, target unreachable");
    Ok(TraversalResult::unreachable(order, steps))
}

/// Walk the parent map backward from `tail` to `source`, append the target,
/// and return the path in forward order. Every non-source node on the walk
/// has a parent entry, recorded when the node was discovered.
fn reconstruct_path(
    parents: &HashMap<NodeId, NodeId>,
    source: &str,
    tail: &str,
    target: &str,
) -> Vec<NodeId> {
    let mut path: Vec<NodeId> = vec![target.to_string()];
    let mut current = tail;
    while current != source {
        path.push(current.to_string());
        current = parents[current].as_str();
    }
    path.push(source.to_string());
    path.reverse();
    path
}

/// Stack frame for the iterative depth-first search. Each entered node is
/// pushed a second time as an unwind marker; popping that marker removes
/// the node from the in-progress path once all its branches are exhausted.
struct DfsFrame {
    node: NodeId,
    parent: Option<NodeId>,
    depth: i32,
    unwinding: bool,
}

/// Depth-first search from `source` to `target`.
///
/// Follows adjacency order and returns the first path discovered, not
/// necessarily the shortest. Already-visited nodes are never re-entered,
/// which terminates cycles and keeps each node's subtree explored at most
/// once.
///
/// Runs on an explicit heap-allocated stack rather than recursion, so a
/// deep chain cannot exhaust call-stack capacity. Discovery order matches
/// the recursive formulation exactly: a node's first child subtree is fully
/// explored before its next sibling is considered, and finding the target
/// stops the search with the in-progress path left intact.
#[tracing::instrument(skip(graph), fields(%source, %target, nodes = graph.node_count()))]
pub fn dfs(graph: &Graph, source: &str, target: &str) -> Result<TraversalResult, TraversalError> {
    if !graph.contains(source) {
        return Err(TraversalError::UnknownSource(source.to_string()));
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut path: Vec<NodeId> = Vec::new();
    let mut steps: Vec<TraversalStep> = Vec::new();
    let mut distance = -1;
    let mut found = false;

    let mut stack: Vec<DfsFrame> = vec![DfsFrame {
        node: source.to_string(),
        parent: None,
        depth: 0,
        unwinding: false,
    }];

    while let Some(frame) = stack.pop() {
        if frame.unwinding {
            // Every branch below this node dead-ended: backtrack.
            path.pop();
            continue;
        }
        // A frame can go stale between push and pop when an earlier
        // sibling's subtree reaches the same node first.
        if visited.contains(frame.node.as_str()) {
            continue;
        }

        visited.insert(frame.node.clone());
        order.push(frame.node.clone());
        path.push(frame.node.clone());
        steps.push(TraversalStep {
            node: frame.node.clone(),
            parent: frame.parent,
        });

        if frame.node == target {
            // Stop here. The unwind markers still on the stack are never
            // processed, which leaves `path` intact from source to target,
            // the same short-circuit the recursive form gets from its
            // found-flag.
            distance = frame.depth;
            found = true;
            break;
        }

        let depth = frame.depth;
        let current = frame.node;
        stack.push(DfsFrame {
            node: current.clone(),
            parent: None,
            depth,
            unwinding: true,
        });
        // Children pushed in reverse so they pop in adjacency order.
        for edge in graph.neighbors(&current).iter().rev() {
            if !visited.contains(edge.target.as_str()) {
                stack.push(DfsFrame {
                    node: edge.target.clone(),
                    parent: Some(current.clone()),
                    depth: depth + 1,
                    unwinding: false,
                });
            }
        }
    }

    if found {
        tracing::debug!(distance, "target reached");
        Ok(TraversalResult {
            distance,
            path,
            visited: order,
            steps,
        })
    } else {
        tracing::debug!(visited = order.len(), "exploration exhausted, target unreachable");
        Ok(TraversalResult::unreachable(order, steps))
    }
}
