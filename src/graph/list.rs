//! 邻接表存储
//!
//! 每个顶点持有一个邻居序列，新邻居总在表头（后加先枚举）。
//! 这一顺序决定了 BFS/DFS 在兄弟节点间的先后，不能改变。

use super::{AdjacencyStore, Neighbors, VertexTable};
use smallvec::SmallVec;
use tracing::debug;

/// 单个顶点的邻居序列
///
/// 内部按加入顺序追加，枚举时倒序输出，等价于头插链表。
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    entries: SmallVec<[usize; 4]>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入到表头
    pub fn prepend(&mut self, index: usize) {
        self.entries.push(index);
    }

    /// 从表头开始枚举
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 邻接表图
#[derive(Debug, Clone)]
pub struct ListGraph {
    /// 顶点表
    vertices: VertexTable,
    /// 与顶点表下标对齐的邻居序列
    adjacency: Vec<AdjacencyList>,
}

impl ListGraph {
    /// 创建容量为 `capacity` 的空图
    pub fn new(capacity: usize) -> Self {
        Self {
            vertices: VertexTable::with_capacity(capacity),
            adjacency: vec![AdjacencyList::new(); capacity],
        }
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

    /// 按枚举顺序返回邻居标签
    pub fn neighbor_labels(&self, label: &str) -> Vec<&str> {
        let Some(index) = self.vertices.index_of(label) else {
            return Vec::new();
        };
        self.adjacency[index]
            .iter()
            .filter_map(|j| self.vertices.get(j).map(|v| v.label()))
            .collect()
    }

    /// 邻居条目总数（无向边计两次）
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(AdjacencyList::len).sum()
    }
}

impl AdjacencyStore for ListGraph {
    fn vertices(&self) -> &VertexTable {
        &self.vertices
    }

    fn vertices_mut(&mut self) -> &mut VertexTable {
        &mut self.vertices
    }

    fn add_directed_edge(&mut self, from: &str, to: &str) -> bool {
        match self.resolve(from, to) {
            Some((i, j)) => {
                self.adjacency[i].prepend(j);
                true
            }
            None => false,
        }
    }

    fn add_undirected_edge(&mut self, from: &str, to: &str) -> bool {
        match self.resolve(from, to) {
            Some((i, j)) => {
                self.adjacency[i].prepend(j);
                self.adjacency[j].prepend(i);
                true
            }
            None => false,
        }
    }

    fn neighbors(&self, index: usize) -> Neighbors {
        self.adjacency
            .get(index)
            .map(|list| list.iter().collect())
            .unwrap_or_default()
    }
}
