//! 输入解析模块
//!
//! 把空白分隔的记号流解析为变体编号、起点和边集合。
//! 记号依次为：变体编号、起点标签、若干边记号，单独的 `!` 或输入结束表示边结束。
//!
//! 边记号：
//! - `A=B` 无向边
//! - `A>B` 有向边 A -> B
//! - `A<B` 有向边 B -> A
//!
//! 只要出现一个有向记号，整张图就按有向图处理。

use crate::error::{Error, Result};
use crate::graph::{AdjacencyStore, ListGraph, MatrixGraph};
use crate::types::{Orientation, Variant};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// 边结束记号
pub const TERMINATOR: &str = "!";

/// 边记号中的运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeOperator {
    /// `=`
    Undirected,
    /// `>`
    Forward,
    /// `<`
    Backward,
}

impl EdgeOperator {
    pub fn is_directed(&self) -> bool {
        !matches!(self, EdgeOperator::Undirected)
    }
}

/// 一条已解析的边，`from`/`to` 已按运算符归一化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub operator: EdgeOperator,
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            EdgeOperator::Undirected => write!(f, "{}={}", self.from, self.to),
            _ => write!(f, "{}>{}", self.from, self.to),
        }
    }
}

fn is_operator(c: char) -> bool {
    matches!(c, '=' | '>' | '<')
}

/// 解析变体编号
pub fn parse_variant(token: &str) -> Result<i64> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::ParseError(format!("变体编号应为整数: \"{}\"", token)))
}

/// 解析单个边记号
///
/// 运算符判定顺序为 `=`、`>`、`<`；连续的运算符字符视为一个分隔符。
pub fn parse_edge(token: &str) -> Result<EdgeSpec> {
    let operator = if token.contains('=') {
        EdgeOperator::Undirected
    } else if token.contains('>') {
        EdgeOperator::Forward
    } else if token.contains('<') {
        EdgeOperator::Backward
    } else {
        return Err(Error::ParseError(format!("边记号缺少运算符: \"{}\"", token)));
    };

    let starts_or_ends_with_op = token.starts_with(is_operator) || token.ends_with(is_operator);
    let parts: Vec<&str> = token.split(is_operator).filter(|p| !p.is_empty()).collect();
    if starts_or_ends_with_op || parts.len() != 2 {
        return Err(Error::ParseError(format!("边记号格式错误: \"{}\"", token)));
    }

    let (left, right) = (parts[0].to_string(), parts[1].to_string());
    let (from, to) = match operator {
        EdgeOperator::Backward => (right, left),
        _ => (left, right),
    };

    Ok(EdgeSpec { from, to, operator })
}

/// 解析进度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// 等待变体编号
    Variant,
    /// 等待起点
    Start,
    /// 读取边
    Edges,
    /// 已遇到终止符
    Done,
}

/// 增量解析器
///
/// 可以逐行或逐记号喂入，交互模式和文件模式共用。
#[derive(Debug, Default)]
pub struct InputParser {
    variant: Option<i64>,
    start: Option<String>,
    vertices: IndexSet<String>,
    edges: Vec<EdgeSpec>,
    orientation: Orientation,
    terminated: bool,
}

impl InputParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前解析进度
    pub fn stage(&self) -> Stage {
        if self.variant.is_none() {
            Stage::Variant
        } else if self.start.is_none() {
            Stage::Start
        } else if self.terminated {
            Stage::Done
        } else {
            Stage::Edges
        }
    }

    /// 已解析的变体编号
    pub fn variant_code(&self) -> Option<i64> {
        self.variant
    }

    /// 目前出现过的顶点
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(String::as_str)
    }

    /// 喂入一个记号，返回是否已结束
    pub fn feed_token(&mut self, token: &str) -> Result<bool> {
        match self.stage() {
            Stage::Done => {}
            Stage::Variant => self.variant = Some(parse_variant(token)?),
            Stage::Start => self.start = Some(token.to_string()),
            Stage::Edges if token == TERMINATOR => self.terminated = true,
            Stage::Edges => {
                let edge = parse_edge(token)?;
                self.push_edge(edge);
            }
        }
        Ok(self.terminated)
    }

    /// 喂入一行文本，返回是否已结束
    pub fn feed_line(&mut self, line: &str) -> Result<bool> {
        for token in line.split_whitespace() {
            if self.feed_token(token)? {
                break;
            }
        }
        Ok(self.terminated)
    }

    fn push_edge(&mut self, edge: EdgeSpec) {
        if edge.operator.is_directed() {
            self.orientation = Orientation::Directed;
        }
        // 顶点顺序按记号中的书写顺序，而不是归一化后的方向
        let (first, second) = match edge.operator {
            EdgeOperator::Backward => (&edge.to, &edge.from),
            _ => (&edge.from, &edge.to),
        };
        self.vertices.insert(first.clone());
        self.vertices.insert(second.clone());
        self.edges.push(edge);
    }

    /// 结束解析
    pub fn finish(self) -> Result<GraphInput> {
        let variant = self
            .variant
            .ok_or_else(|| Error::ParseError("缺少变体编号".to_string()))?;
        let start = self
            .start
            .ok_or_else(|| Error::ParseError("缺少起点".to_string()))?;

        debug!(
            variant,
            start = %start,
            vertices = self.vertices.len(),
            edges = self.edges.len(),
            directed = self.orientation.is_directed(),
            "输入解析完成"
        );

        Ok(GraphInput {
            variant,
            start,
            vertices: self.vertices,
            edges: self.edges,
            orientation: self.orientation,
        })
    }
}

/// 解析后的图描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphInput {
    /// 原始变体编号（可能不在 1-4 内）
    pub variant: i64,
    pub start: String,
    /// 按首次出现顺序排列的顶点
    pub vertices: IndexSet<String>,
    pub edges: Vec<EdgeSpec>,
    pub orientation: Orientation,
}

impl GraphInput {
    /// 从字符串解析
    pub fn parse_str(text: &str) -> Result<Self> {
        let mut parser = InputParser::new();
        for line in text.lines() {
            if parser.feed_line(line)? {
                break;
            }
        }
        parser.finish()
    }

    /// 从任意读取器解析
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut parser = InputParser::new();
        for line in reader.lines() {
            if parser.feed_line(&line?)? {
                break;
            }
        }
        parser.finish()
    }

    /// 从文件解析
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::parse_reader(BufReader::new(file))
    }

    /// 变体编号对应的变体
    pub fn variant(&self) -> Option<Variant> {
        Variant::from_code(self.variant)
    }

    /// 依次加入全部顶点和边
    pub fn populate<S: AdjacencyStore>(&self, mut store: S) -> Result<S> {
        for label in &self.vertices {
            store.add_vertex(label)?;
        }
        for edge in &self.edges {
            store.add_edge(&edge.from, &edge.to, self.orientation);
        }
        Ok(store)
    }

    pub fn list_graph(&self) -> Result<ListGraph> {
        self.populate(ListGraph::new(self.vertices.len()))
    }

    pub fn matrix_graph(&self) -> Result<MatrixGraph> {
        self.populate(MatrixGraph::new(self.vertices.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_edge_operators() {
        let e = parse_edge("A=B").unwrap();
        assert_eq!((e.from.as_str(), e.to.as_str()), ("A", "B"));
        assert_eq!(e.operator, EdgeOperator::Undirected);

        let e = parse_edge("A>B").unwrap();
        assert_eq!((e.from.as_str(), e.to.as_str()), ("A", "B"));
        assert_eq!(e.operator, EdgeOperator::Forward);

        let e = parse_edge("A<B").unwrap();
        assert_eq!((e.from.as_str(), e.to.as_str()), ("B", "A"));
        assert_eq!(e.to_string(), "B>A");
    }

    #[test]
    fn test_parse_edge_operator_precedence() {
        let e = parse_edge("A=>B").unwrap();
        assert_eq!(e.operator, EdgeOperator::Undirected);
        assert_eq!(e.to, "B");

        let e = parse_edge("A<>B").unwrap();
        assert_eq!(e.operator, EdgeOperator::Forward);
    }

    #[test]
    fn test_parse_edge_malformed() {
        for token in ["AB", "=B", "A=", "A=B=C", ">", "A<<"] {
            assert!(
                matches!(parse_edge(token), Err(Error::ParseError(_))),
                "token {} should fail",
                token
            );
        }
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!(parse_variant("3").unwrap(), 3);
        assert_eq!(parse_variant("7").unwrap(), 7);
        assert!(matches!(parse_variant("x"), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_parse_undirected_input() {
        let input = GraphInput::parse_str("1 A A=B B=C !").unwrap();
        assert_eq!(input.variant(), Some(Variant::ListBfs));
        assert_eq!(input.start, "A");
        assert_eq!(input.orientation, Orientation::Undirected);
        assert_eq!(
            input.vertices.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        assert_eq!(input.edges.len(), 2);
    }

    #[test]
    fn test_any_directed_token_forces_directed() {
        let input = GraphInput::parse_str("3 A\nA=B\nC<B\n!").unwrap();
        assert_eq!(input.orientation, Orientation::Directed);
        // 书写顺序：A, B, C
        assert_eq!(
            input.vertices.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );

        let g = input.matrix_graph().unwrap();
        assert!(g.is_adjacent("A", "B"));
        assert!(!g.is_adjacent("B", "A"));
        assert!(g.is_adjacent("B", "C"));
    }

    #[test]
    fn test_terminator_stops_reading() {
        let input = GraphInput::parse_str("2 A A=B ! this is ignored").unwrap();
        assert_eq!(input.edges.len(), 1);
    }

    #[test]
    fn test_missing_terminator_reads_to_end() {
        let input = GraphInput::parse_str("4 X X>Y\nY>Z").unwrap();
        assert_eq!(input.edges.len(), 2);
        assert_eq!(input.variant(), Some(Variant::MatrixDfs));
    }

    #[test]
    fn test_unknown_variant_kept() {
        let input = GraphInput::parse_str("9 A A=B").unwrap();
        assert_eq!(input.variant, 9);
        assert_eq!(input.variant(), None);
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(GraphInput::parse_str(""), Err(Error::ParseError(_))));
        assert!(matches!(GraphInput::parse_str("1"), Err(Error::ParseError(_))));
        assert!(matches!(GraphInput::parse_str("one A A=B"), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_incremental_stages() {
        let mut parser = InputParser::new();
        assert_eq!(parser.stage(), Stage::Variant);
        parser.feed_line("2").unwrap();
        assert_eq!(parser.variant_code(), Some(2));
        assert_eq!(parser.stage(), Stage::Start);
        parser.feed_line("A").unwrap();
        assert_eq!(parser.stage(), Stage::Edges);
        assert!(!parser.feed_line("A=B B=C").unwrap());
        assert!(parser.feed_line("!").unwrap());
        assert_eq!(parser.stage(), Stage::Done);
        assert!(parser.feed_token("C=D").unwrap());

        let input = parser.finish().unwrap();
        assert_eq!(input.edges.len(), 2);
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1").unwrap();
        writeln!(file, "A").unwrap();
        writeln!(file, "A>B A>C").unwrap();
        writeln!(file, "!").unwrap();

        let input = GraphInput::parse_file(file.path()).unwrap();
        let g = input.list_graph().unwrap();
        assert_eq!(g.neighbor_labels("A"), vec!["C", "B"]);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = GraphInput::parse_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
