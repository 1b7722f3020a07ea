//! 广度优先 / 深度优先遍历
//!
//! 两种算法共用一个引擎，区别只在待处理集合：BFS 用 FIFO 队列，DFS 用 LIFO 栈。
//! 顶点在被发现时立即标记为 Opened，因此每个顶点最多入队/入栈一次。

use crate::error::{Error, Result};
use crate::graph::AdjacencyStore;
use crate::types::{TraversalKind, VisitStatus};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, trace, warn};

/// 待处理顶点集合
pub trait Frontier {
    fn push(&mut self, index: usize);
    fn pop(&mut self) -> Option<usize>;
    fn is_empty(&self) -> bool;
}

/// FIFO，用于 BFS
impl Frontier for VecDeque<usize> {
    fn push(&mut self, index: usize) {
        self.push_back(index);
    }

    fn pop(&mut self) -> Option<usize> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

/// LIFO，用于 DFS
impl Frontier for Vec<usize> {
    fn push(&mut self, index: usize) {
        Vec::push(self, index);
    }

    fn pop(&mut self) -> Option<usize> {
        Vec::pop(self)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

/// 一次关闭事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// 被关闭的顶点
    pub label: String,
    /// 发现它的顶点，起点为 None
    pub discovered_by: Option<String>,
}

/// 遍历计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    pub vertices_opened: usize,
    pub vertices_closed: usize,
    /// 扫描过的邻接关系数（含指向已发现顶点的）
    pub edges_scanned: usize,
}

/// 遍历结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraversalResult {
    pub kind: TraversalKind,
    pub start: String,
    /// 按关闭顺序排列的访问序列
    pub visits: Vec<Visit>,
    pub stats: TraversalStats,
}

impl TraversalResult {
    pub fn labels(&self) -> Vec<&str> {
        self.visits.iter().map(|v| v.label.as_str()).collect()
    }

    /// 访问序列，以 ", " 分隔
    pub fn order(&self) -> String {
        self.labels().join(", ")
    }

    /// 结果行表头，如 `BFS(A): `
    pub fn header(&self) -> String {
        result_header(self.kind, &self.start)
    }
}

/// 结果行表头，遍历开始前即可确定
pub fn result_header(kind: TraversalKind, start: &str) -> String {
    format!("{}({}): ", kind, start)
}

impl fmt::Display for TraversalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.header(), self.order())
    }
}

/// 遍历引擎
///
/// 每关闭一个顶点就调用一次 `visitor`，第二个参数表示是否为最后一个，
/// 其判断依据是展开邻居之后待处理集合是否为空。
pub fn traverse<S, F, V>(
    store: &mut S,
    start: &str,
    kind: TraversalKind,
    mut frontier: F,
    mut visitor: V,
) -> Result<TraversalResult>
where
    S: AdjacencyStore + ?Sized,
    F: Frontier,
    V: FnMut(&Visit, bool),
{
    let start_index = store
        .find_index(start)
        .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;

    debug!(%kind, start, vertices = store.vertex_count(), "开始遍历");

    let mut parents: Vec<Option<usize>> = vec![None; store.vertex_count()];
    let mut visits = Vec::with_capacity(store.vertex_count());
    let mut stats = TraversalStats::default();

    if !store.advance(start_index, VisitStatus::Opened) {
        warn!(start, "起点不是 Fresh 状态，图可能已被遍历过");
    }
    stats.vertices_opened += 1;
    frontier.push(start_index);

    while let Some(current) = frontier.pop() {
        for next in store.neighbors(current) {
            stats.edges_scanned += 1;
            if store.is_fresh(next) {
                store.advance(next, VisitStatus::Opened);
                parents[next] = Some(current);
                frontier.push(next);
                stats.vertices_opened += 1;
                trace!(from = current, to = next, "发现顶点");
            }
        }

        store.advance(current, VisitStatus::Closed);
        stats.vertices_closed += 1;

        let visit = Visit {
            label: store.label(current).unwrap_or_default().to_string(),
            discovered_by: parents[current]
                .and_then(|p| store.label(p))
                .map(str::to_string),
        };
        visitor(&visit, frontier.is_empty());
        visits.push(visit);
    }

    debug!(
        %kind,
        closed = stats.vertices_closed,
        scanned = stats.edges_scanned,
        "遍历结束"
    );

    Ok(TraversalResult {
        kind,
        start: start.to_string(),
        visits,
        stats,
    })
}

/// 广度优先遍历
pub fn bfs<S: AdjacencyStore + ?Sized>(store: &mut S, start: &str) -> Result<TraversalResult> {
    traverse(store, start, TraversalKind::Bfs, VecDeque::<usize>::new(), |_, _| {})
}

/// 深度优先遍历
pub fn dfs<S: AdjacencyStore + ?Sized>(store: &mut S, start: &str) -> Result<TraversalResult> {
    traverse(store, start, TraversalKind::Dfs, Vec::<usize>::new(), |_, _| {})
}

/// 按算法类型遍历，同时把每次关闭交给 `visitor`
pub fn run<S, V>(
    store: &mut S,
    start: &str,
    kind: TraversalKind,
    visitor: V,
) -> Result<TraversalResult>
where
    S: AdjacencyStore + ?Sized,
    V: FnMut(&Visit, bool),
{
    match kind {
        TraversalKind::Bfs => traverse(store, start, kind, VecDeque::<usize>::new(), visitor),
        TraversalKind::Dfs => traverse(store, start, kind, Vec::<usize>::new(), visitor),
    }
}
