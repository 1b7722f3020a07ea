//! 图算法模块
//!
//! 包含广度优先和深度优先遍历

pub mod traversal;

pub use traversal::{
    bfs, dfs, result_header, run, traverse, Frontier, TraversalResult, TraversalStats, Visit,
};
