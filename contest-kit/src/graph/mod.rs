//! # Graph snippets
//!
//! Adjacency-list graphs with BFS distance computation, recursive DFS
//! marking and connected-component counting. Unreachable vertices are
//! reported as `None`, never as a sentinel distance.

use std::collections::VecDeque;

/// Undirected graph over the vertex set `0..vertices()`.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a graph of `vertices` isolated vertices.
    pub fn new(vertices: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Number of vertices.
    pub fn vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Adds the undirected edge between `u` and `v`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of this graph; the
    /// graph is left unchanged in that case.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let count = self.vertices();
        assert!(
            u < count && v < count,
            "edge ({u}, {v}) outside vertex range 0..{count}"
        );
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
    }

    /// Neighbors of `vertex`, in edge insertion order.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }
}

/// Distance in edges from `start` to every vertex; `None` marks vertices
/// no path reaches.
///
/// # Panics
///
/// Panics if `start` is not a vertex of the graph.
///
/// # Example
///
/// ```
/// # use contest_kit::graph::{bfs_distances, Graph};
/// let mut graph = Graph::new(6);
/// graph.add_edge(0, 1);
/// graph.add_edge(0, 2);
/// graph.add_edge(1, 3);
/// graph.add_edge(2, 3);
/// graph.add_edge(3, 4);
/// let distances = bfs_distances(&graph, 0);
/// assert_eq!(
///     distances,
///     vec![Some(0), Some(1), Some(1), Some(2), Some(3), None]
/// );
/// ```
pub fn bfs_distances(graph: &Graph, start: usize) -> Vec<Option<u64>> {
    let mut distance = vec![None; graph.vertices()];
    let mut frontier = VecDeque::new();
    distance[start] = Some(0);
    frontier.push_back((start, 0u64));
    while let Some((vertex, depth)) = frontier.pop_front() {
        for &next in graph.neighbors(vertex) {
            if distance[next].is_none() {
                distance[next] = Some(depth + 1);
                frontier.push_back((next, depth + 1));
            }
        }
    }
    distance
}

/// Recursively marks every vertex reachable from `vertex` in `visited`.
///
/// Already-marked vertices are not re-entered, so recursion depth is
/// bounded by the size of the component.
///
/// # Panics
///
/// Panics if `vertex` is out of range or `visited` has fewer slots than
/// the graph has vertices.
pub fn dfs_visit(graph: &Graph, vertex: usize, visited: &mut [bool]) {
    visited[vertex] = true;
    for &next in graph.neighbors(vertex) {
        if !visited[next] {
            dfs_visit(graph, next, visited);
        }
    }
}

/// Number of connected components.
///
/// # Example
///
/// ```
/// # use contest_kit::graph::{count_components, Graph};
/// let mut graph = Graph::new(5);
/// graph.add_edge(0, 1);
/// graph.add_edge(2, 3);
/// assert_eq!(count_components(&graph), 3);
/// ```
pub fn count_components(graph: &Graph) -> usize {
    let mut visited = vec![false; graph.vertices()];
    let mut components = 0;
    for vertex in 0..graph.vertices() {
        if !visited[vertex] {
            dfs_visit(graph, vertex, &mut visited);
            components += 1;
        }
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new(6);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);
        graph
    }

    #[test]
    fn bfs_distances_on_sample_graph() {
        let distances = bfs_distances(&sample_graph(), 0);
        assert_eq!(
            distances,
            vec![Some(0), Some(1), Some(1), Some(2), Some(3), None]
        );
    }

    #[test]
    fn bfs_from_interior_vertex() {
        let distances = bfs_distances(&sample_graph(), 3);
        assert_eq!(
            distances,
            vec![Some(2), Some(1), Some(1), Some(0), Some(1), None]
        );
    }

    #[test]
    fn bfs_single_vertex() {
        assert_eq!(bfs_distances(&Graph::new(1), 0), vec![Some(0)]);
    }

    #[test]
    fn dfs_marks_exactly_the_reachable_set() {
        let graph = sample_graph();
        let mut visited = vec![false; graph.vertices()];
        dfs_visit(&graph, 0, &mut visited);
        assert_eq!(visited, vec![true, true, true, true, true, false]);
    }

    #[test]
    fn component_counts() {
        assert_eq!(count_components(&sample_graph()), 2);
        assert_eq!(count_components(&Graph::new(4)), 4);
        assert_eq!(count_components(&Graph::new(0)), 0);
        let mut chain = Graph::new(4);
        chain.add_edge(0, 1);
        chain.add_edge(1, 2);
        chain.add_edge(2, 3);
        assert_eq!(count_components(&chain), 1);
    }

    #[test]
    #[should_panic(expected = "outside vertex range")]
    fn add_edge_rejects_unknown_vertex() {
        Graph::new(2).add_edge(0, 2);
    }

    #[test]
    fn neighbors_follow_insertion_order() {
        let graph = sample_graph();
        assert_eq!(graph.neighbors(3), &[1, 2, 4]);
        assert_eq!(graph.neighbors(5), &[] as &[usize]);
    }
}
