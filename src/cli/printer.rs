//! 结果打印器
//!
//! 提供菜单、访问轨迹表格和 JSON 格式的输出

use crate::algorithm::TraversalResult;
use crate::error::Result;
use crate::types::Variant;
use prettytable::{format, row, Table};

/// 结果打印器
pub struct Printer;

impl Printer {
    /// 变体选择菜单
    pub fn menu() -> String {
        let mut out = String::from("请选择以下变体之一:\n");
        for v in Variant::ALL {
            out.push_str(&format!("{}) {}\n", v.code(), v.description()));
        }
        out
    }

    /// 访问轨迹表格：步骤、顶点、发现者
    pub fn format_trace(result: &TraversalResult) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["#", "Vertex", "Discovered By"]);

        for (i, visit) in result.visits.iter().enumerate() {
            let parent = visit.discovered_by.as_deref().unwrap_or("-");
            table.add_row(row![i + 1, visit.label, parent]);
        }

        format!(
            "{}{} vertex(es) closed, {} edge(s) scanned\n",
            table,
            result.stats.vertices_closed,
            result.stats.edges_scanned
        )
    }

    /// JSON 格式
    pub fn format_json(result: &TraversalResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::bfs;
    use crate::import::GraphInput;

    fn sample() -> TraversalResult {
        let input = GraphInput::parse_str("3 A A=B A=C !").unwrap();
        let mut g = input.matrix_graph().unwrap();
        bfs(&mut g, &input.start).unwrap()
    }

    #[test]
    fn test_menu_lists_all_variants() {
        let menu = Printer::menu();
        for code in 1..=4 {
            assert!(menu.contains(&format!("{})", code)));
        }
    }

    #[test]
    fn test_format_trace() {
        let out = Printer::format_trace(&sample());
        assert!(out.contains("Discovered By"));
        assert!(out.contains("3 vertex(es) closed"));
    }

    #[test]
    fn test_format_json() {
        let json = Printer::format_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "Bfs");
        assert_eq!(value["start"], "A");
        assert_eq!(value["visits"][1]["label"], "B");
        assert_eq!(value["visits"][1]["discovered_by"], "A");
    }
}
