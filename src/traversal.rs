//! Reachability and shortest-path queries over a graph's edges.
//!
//! These back editor features such as the breadcrumb trail and path highlighting.
//! They share `GraphIndex` with the compiler and never fail: unknown ids simply
//! have no edges.

use crate::graph::{Edge, GraphIndex};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Everything reached from a node, and the edges walked to reach it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reachability {
    pub nodes: AHashSet<String>,
    pub edges: AHashSet<String>,
}

impl Reachability {
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edges.contains(id)
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// Nodes and edges reachable by following edges forward from `node_id` (inclusive).
pub fn downstream(index: &GraphIndex<'_>, node_id: &str) -> Reachability {
    reach(index, node_id, Direction::Forward)
}

/// Nodes and edges reachable by following edges backward from `node_id` (inclusive).
pub fn upstream(index: &GraphIndex<'_>, node_id: &str) -> Reachability {
    reach(index, node_id, Direction::Backward)
}

fn reach(index: &GraphIndex<'_>, node_id: &str, direction: Direction) -> Reachability {
    let mut result = Reachability::default();
    result.nodes.insert(node_id.to_string());

    let mut queue = VecDeque::from([node_id.to_string()]);
    while let Some(current) = queue.pop_front() {
        for edge in edges_from(index, &current, direction) {
            result.edges.insert(edge.id.clone());
            let next = match direction {
                Direction::Forward => &edge.target,
                Direction::Backward => &edge.source,
            };
            if result.nodes.insert(next.clone()) {
                queue.push_back(next.clone());
            }
        }
    }
    result
}

fn edges_from<'i, 'a>(
    index: &'i GraphIndex<'a>,
    id: &str,
    direction: Direction,
) -> &'i [&'a Edge] {
    match direction {
        Direction::Forward => index.outgoing(id),
        Direction::Backward => index.incoming(id),
    }
}

/// The shortest forward path from `source` to `target`, both ends included.
///
/// Breadth-first over edges in document order, so among equally short paths the one
/// through earlier edges wins. Returns `None` when `target` is unreachable.
pub fn shortest_path(index: &GraphIndex<'_>, source: &str, target: &str) -> Option<Vec<String>> {
    if source == target {
        return Some(vec![source.to_string()]);
    }

    let mut parents: AHashMap<String, String> = AHashMap::new();
    let mut seen: AHashSet<String> = AHashSet::new();
    seen.insert(source.to_string());
    let mut queue = VecDeque::from([source.to_string()]);

    while let Some(current) = queue.pop_front() {
        for edge in index.outgoing(&current) {
            if !seen.insert(edge.target.clone()) {
                continue;
            }
            parents.insert(edge.target.clone(), current.clone());
            if edge.target == target {
                return Some(unwind(&parents, source, target));
            }
            queue.push_back(edge.target.clone());
        }
    }
    None
}

fn unwind(parents: &AHashMap<String, String>, source: &str, target: &str) -> Vec<String> {
    let mut path = vec![target.to_string()];
    let mut current = target;
    while current != source {
        match parents.get(current) {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
