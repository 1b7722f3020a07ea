//! graphwalk - 邻接矩阵 / 邻接表上的图遍历
//!
//! 读取文本形式的图描述，按所选变体执行：
//! - 邻接表或邻接矩阵两种存储
//! - 广度优先（BFS）或深度优先（DFS）遍历
//! - 结果同时输出到控制台和文件

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod runner;
pub mod types;

// 重导出常用类型
pub use algorithm::{TraversalResult, Visit};
pub use error::{Error, Result};
pub use graph::{AdjacencyStore, ListGraph, MatrixGraph, Vertex};
pub use import::GraphInput;
pub use runner::{RunConfig, RunOutcome, Runner};
pub use types::{Orientation, Representation, TraversalKind, Variant, VisitStatus};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
