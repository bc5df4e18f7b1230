//! Minimum spanning tree over room centers, Manhattan-weighted.

use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Edge {
    pub(super) a: usize,
    pub(super) b: usize,
    pub(super) weight: u32,
}

pub(super) fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Kruskal over the complete room graph. Edges are generated in pair order
/// `(a, b), a < b` and stable-sorted by weight, so equal weights keep
/// generation order; the tie-break pins down which tree a seed produces.
pub(super) fn spanning_edges(centers: &[Pos]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(centers.len() * centers.len().saturating_sub(1) / 2);
    for a in 0..centers.len() {
        for b in (a + 1)..centers.len() {
            edges.push(Edge { a, b, weight: manhattan(centers[a], centers[b]) });
        }
    }
    edges.sort_by_key(|edge| edge.weight);

    let mut components = DisjointSet::new(centers.len());
    edges.into_iter().filter(|edge| components.union(edge.a, edge.b)).collect()
}

struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self { parent: (0..len).collect() }
    }

    // Iterative find with path halving.
    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// Merge the two components, returns false when already joined.
    /// The first root is attached under the second.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_a] = root_b;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_has_one_edge_less_than_node_count() {
        let centers = [
            Pos { y: 2, x: 2 },
            Pos { y: 9, x: 14 },
            Pos { y: 20, x: 5 },
            Pos { y: 30, x: 33 },
            Pos { y: 6, x: 28 },
        ];
        let edges = spanning_edges(&centers);
        assert_eq!(edges.len(), centers.len() - 1);
    }

    #[test]
    fn tree_connects_every_center() {
        let centers = [
            Pos { y: 0, x: 0 },
            Pos { y: 0, x: 10 },
            Pos { y: 10, x: 0 },
            Pos { y: 10, x: 10 },
        ];
        let edges = spanning_edges(&centers);

        let mut components = DisjointSet::new(centers.len());
        for edge in &edges {
            components.union(edge.a, edge.b);
        }
        let root = components.find(0);
        for node in 1..centers.len() {
            assert_eq!(components.find(node), root);
        }
    }

    #[test]
    fn equal_weights_keep_pair_generation_order() {
        // All four corners of a square: several edges tie at weight 10.
        let centers = [
            Pos { y: 0, x: 0 },
            Pos { y: 0, x: 10 },
            Pos { y: 10, x: 0 },
            Pos { y: 10, x: 10 },
        ];
        let edges = spanning_edges(&centers);
        assert_eq!(
            edges,
            vec![
                Edge { a: 0, b: 1, weight: 10 },
                Edge { a: 0, b: 2, weight: 10 },
                Edge { a: 1, b: 3, weight: 10 },
            ]
        );
    }

    #[test]
    fn single_room_yields_no_edges() {
        assert!(spanning_edges(&[Pos { y: 5, x: 5 }]).is_empty());
    }
}
