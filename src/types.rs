//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点访问状态
///
/// 单次遍历中只能按 `Fresh -> Opened -> Closed` 前进。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitStatus {
    /// 尚未发现
    Fresh,
    /// 已发现，位于队列/栈中
    Opened,
    /// 已处理完毕
    Closed,
}

impl Default for VisitStatus {
    fn default() -> Self {
        VisitStatus::Fresh
    }
}

impl VisitStatus {
    /// 是否允许迁移到 `next`
    pub fn can_advance_to(self, next: VisitStatus) -> bool {
        matches!(
            (self, next),
            (VisitStatus::Fresh, VisitStatus::Opened) | (VisitStatus::Opened, VisitStatus::Closed)
        )
    }
}

/// 图的方向性（全图统一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Undirected,
    Directed,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Undirected
    }
}

impl Orientation {
    pub fn is_directed(&self) -> bool {
        matches!(self, Orientation::Directed)
    }
}

/// 遍历算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraversalKind {
    /// 广度优先
    Bfs,
    /// 深度优先
    Dfs,
}

impl TraversalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalKind::Bfs => "BFS",
            TraversalKind::Dfs => "DFS",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 图的存储形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Representation {
    /// 邻接表
    List,
    /// 邻接矩阵
    Matrix,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::List => write!(f, "adjacency-list"),
            Representation::Matrix => write!(f, "adjacency-matrix"),
        }
    }
}

/// 变体：存储形式 + 遍历算法，编号 1-4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    ListBfs,
    ListDfs,
    MatrixBfs,
    MatrixDfs,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::ListBfs,
        Variant::ListDfs,
        Variant::MatrixBfs,
        Variant::MatrixDfs,
    ];

    /// 从编号解析，编号不在 1-4 内时返回 None
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Variant::ListBfs),
            2 => Some(Variant::ListDfs),
            3 => Some(Variant::MatrixBfs),
            4 => Some(Variant::MatrixDfs),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Variant::ListBfs => 1,
            Variant::ListDfs => 2,
            Variant::MatrixBfs => 3,
            Variant::MatrixDfs => 4,
        }
    }

    pub fn representation(&self) -> Representation {
        match self {
            Variant::ListBfs | Variant::ListDfs => Representation::List,
            Variant::MatrixBfs | Variant::MatrixDfs => Representation::Matrix,
        }
    }

    pub fn kind(&self) -> TraversalKind {
        match self {
            Variant::ListBfs | Variant::MatrixBfs => TraversalKind::Bfs,
            Variant::ListDfs | Variant::MatrixDfs => TraversalKind::Dfs,
        }
    }

    /// 菜单中显示的说明
    pub fn description(&self) -> &'static str {
        match self {
            Variant::ListBfs => "邻接表广度优先搜索 - LIST_BFS",
            Variant::ListDfs => "邻接表深度优先搜索 - LIST_DFS",
            Variant::MatrixBfs => "邻接矩阵广度优先搜索 - MATRIX_BFS",
            Variant::MatrixDfs => "邻接矩阵深度优先搜索 - MATRIX_DFS",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.code(), self.representation(), self.kind())
    }
}
