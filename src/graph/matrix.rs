//! 邻接矩阵存储
//!
//! n×n 存在性矩阵，单元 (i, j) 置位表示存在边 i -> j。
//! 邻居按列下标升序枚举。

use super::{AdjacencyStore, Neighbors, VertexTable};
use tracing::debug;

/// 邻接矩阵图
#[derive(Debug, Clone)]
pub struct MatrixGraph {
    /// 顶点表
    vertices: VertexTable,
    /// 行优先存储的存在性矩阵
    cells: Vec<bool>,
    /// 矩阵边长（等于容量）
    size: usize,
}

impl MatrixGraph {
    /// 创建容量为 `capacity` 的空图，矩阵全部未置位
    pub fn new(capacity: usize) -> Self {
        Self {
            vertices: VertexTable::with_capacity(capacity),
            cells: vec![false; capacity * capacity],
            size: capacity,
        }
    }

    fn cell(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.size + col]
    }

    fn set(&mut self, row: usize, col: usize) {
        self.cells[row * self.size + col] = true;
    }

    fn resolve(&self, from: &str, to: &str) -> Option<(usize, usize)> {
        match (self.vertices.index_of(from), self.vertices.index_of(to)) {
            (Some(i), Some(j)) => Some((i, j)),
            _ => {
                debug!(from, to, "忽略端点不存在的边");
                None
            }
        }
    }

    /// 已置位单元数
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

impl AdjacencyStore for MatrixGraph {
    fn vertices(&self) -> &VertexTable {
        &self.vertices
    }

    fn vertices_mut(&mut self) -> &mut VertexTable {
        &mut self.vertices
    }

    fn add_directed_edge(&mut self, from: &str, to: &str) -> bool {
        match self.resolve(from, to) {
            Some((i, j)) => {
                self.set(i, j);
                true
            }
            None => false,
        }
    }

    fn add_undirected_edge(&mut self, from: &str, to: &str) -> bool {
        match self.resolve(from, to) {
            Some((i, j)) => {
                self.set(i, j);
                self.set(j, i);
                true
            }
            None => false,
        }
    }

    fn neighbors(&self, index: usize) -> Neighbors {
        if index >= self.size {
            return Neighbors::new();
        }
        (0..self.vertices.len())
            .filter(|&col| self.cell(index, col))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn abc() -> MatrixGraph {
        let mut g = MatrixGraph::new(3);
        for label in ["A", "B", "C"] {
            g.add_vertex(label).unwrap();
        }
        g
    }

    #[test]
    fn test_new_is_empty() {
        let g = MatrixGraph::new(4);
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.neighbors(0).is_empty());
    }

    #[test]
    fn test_add_vertex_over_capacity() {
        let mut g = abc();
        assert!(matches!(
            g.add_vertex("D"),
            Err(Error::CapacityExceeded { capacity: 3, .. })
        ));
    }

    #[test]
    fn test_directed_edge_one_way() {
        let mut g = abc();
        assert!(g.add_directed_edge("A", "B"));
        assert!(g.is_adjacent("A", "B"));
        assert!(!g.is_adjacent("B", "A"));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_undirected_edge_symmetric() {
        let mut g = abc();
        assert!(g.add_undirected_edge("A", "C"));
        assert!(g.is_adjacent("A", "C"));
        assert!(g.is_adjacent("C", "A"));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_missing_endpoint_ignored() {
        let mut g = abc();
        assert!(!g.add_directed_edge("A", "X"));
        assert!(!g.add_undirected_edge("X", "A"));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_neighbors_ascending() {
        let mut g = abc();
        g.add_directed_edge("A", "C");
        g.add_directed_edge("A", "B");
        assert_eq!(g.neighbors(0).as_slice(), &[1, 2]);
    }

    #[test]
    fn test_find_index() {
        let g = abc();
        assert_eq!(g.find_index("C"), Some(2));
        assert_eq!(g.find_index("Z"), None);
    }
}
