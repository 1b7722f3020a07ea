//! 图核心模块
//!
//! 顶点表加两种边存储形式：邻接矩阵和邻接表。
//! 遍历引擎通过 [`AdjacencyStore`] 统一访问两者。

mod index;
mod list;
mod matrix;
mod vertex;

pub use index::VertexTable;
pub use list::{AdjacencyList, ListGraph};
pub use matrix::MatrixGraph;
pub use vertex::Vertex;

use crate::error::Result;
use crate::types::{Orientation, VisitStatus};
use smallvec::SmallVec;

/// 邻居下标序列，按存储定义的枚举顺序排列
pub type Neighbors = SmallVec<[usize; 8]>;

/// 图存储的公共能力
///
/// 实现者只需提供顶点表访问、加边和邻居枚举，其余由默认方法给出。
pub trait AdjacencyStore {
    /// 顶点表
    fn vertices(&self) -> &VertexTable;

    /// 可变顶点表
    fn vertices_mut(&mut self) -> &mut VertexTable;

    /// 添加有向边 `from -> to`；任一端点不存在时忽略并返回 false
    fn add_directed_edge(&mut self, from: &str, to: &str) -> bool;

    /// 添加无向边；任一端点不存在时忽略并返回 false
    fn add_undirected_edge(&mut self, from: &str, to: &str) -> bool;

    /// 按存储顺序枚举邻居下标
    fn neighbors(&self, index: usize) -> Neighbors;

    /// 添加顶点
    fn add_vertex(&mut self, label: &str) -> Result<usize> {
        self.vertices_mut().insert(label)
    }

    /// 按图的方向性添加边
    fn add_edge(&mut self, from: &str, to: &str, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Directed => self.add_directed_edge(from, to),
            Orientation::Undirected => self.add_undirected_edge(from, to),
        }
    }

    /// 查找顶点下标
    fn find_index(&self, label: &str) -> Option<usize> {
        self.vertices().index_of(label)
    }

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    fn label(&self, index: usize) -> Option<&str> {
        self.vertices().get(index).map(|v| v.label())
    }

    fn status(&self, index: usize) -> Option<VisitStatus> {
        self.vertices().get(index).map(|v| v.status())
    }

    /// 顶点是否尚未被发现；下标越界视为否
    fn is_fresh(&self, index: usize) -> bool {
        self.vertices().get(index).is_some_and(Vertex::is_fresh)
    }

    /// 推进顶点状态，只允许向前迁移
    fn advance(&mut self, index: usize, next: VisitStatus) -> bool {
        self.vertices_mut().advance(index, next)
    }

    /// 从 `from` 是否可直接到达 `to`
    fn is_adjacent(&self, from: &str, to: &str) -> bool {
        match (self.find_index(from), self.find_index(to)) {
            (Some(i), Some(j)) => self.neighbors(i).contains(&j),
            _ => false,
        }
    }
}
