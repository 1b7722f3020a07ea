//! 运行编排
//!
//! 输入 -> 图存储 -> 遍历 -> 输出。库代码只返回错误，由调用方决定进程退出码。

use crate::algorithm::{self, result_header, TraversalResult, Visit};
use crate::cli::{OutputSink, Printer, VisitWriter, DEFAULT_OUTPUT_FILE};
use crate::error::Result;
use crate::graph::AdjacencyStore;
use crate::import::GraphInput;
use crate::types::{Representation, Variant};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, trace, warn};

/// 运行配置
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 结果文件，None 表示只写控制台
    pub output_path: Option<PathBuf>,
    /// 追加而不是截断结果文件
    pub append: bool,
    /// 额外输出 JSON
    pub json: bool,
    /// 额外输出访问轨迹表格
    pub trace: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_path: Some(PathBuf::from(DEFAULT_OUTPUT_FILE)),
            append: false,
            json: false,
            trace: false,
        }
    }
}

/// 运行结果
#[derive(Debug)]
pub enum RunOutcome {
    /// 遍历完成
    Completed(TraversalResult),
    /// 变体编号不在 1-4 内，未执行遍历
    UnsupportedVariant(i64),
}

fn traverse_store<S, V>(
    mut store: S,
    input: &GraphInput,
    variant: Variant,
    visitor: &mut V,
) -> Result<TraversalResult>
where
    S: AdjacencyStore,
    V: FnMut(&Visit, bool),
{
    algorithm::run(&mut store, &input.start, variant.kind(), |visit, last| {
        trace!(label = %visit.label, last, "关闭顶点");
        visitor(visit, last);
    })
}

/// 按变体构建图并遍历，每关闭一个顶点调用一次 `visitor`
pub fn execute<V: FnMut(&Visit, bool)>(input: &GraphInput, mut visitor: V) -> Result<RunOutcome> {
    let Some(variant) = input.variant() else {
        warn!(code = input.variant, "不支持的变体");
        return Ok(RunOutcome::UnsupportedVariant(input.variant));
    };

    info!(
        %variant,
        vertices = input.vertices.len(),
        edges = input.edges.len(),
        directed = input.orientation.is_directed(),
        "构建图"
    );

    let result = match variant.representation() {
        Representation::List => traverse_store(input.list_graph()?, input, variant, &mut visitor)?,
        Representation::Matrix => {
            traverse_store(input.matrix_graph()?, input, variant, &mut visitor)?
        }
    };

    info!(kind = %result.kind, visited = result.visits.len(), "遍历完成");
    Ok(RunOutcome::Completed(result))
}

/// 运行器
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// 执行一次完整运行，遍历过程中逐个写出结果
    ///
    /// 起点不存在时直接返回错误，控制台和结果文件都不会被写入。
    pub fn run<W: Write>(&self, input: &GraphInput, console: W) -> Result<RunOutcome> {
        let header = input
            .variant()
            .map(|v| result_header(v.kind(), &input.start))
            .unwrap_or_default();
        let mut writer = VisitWriter::new(console, header);
        if let Some(path) = &self.config.output_path {
            writer = writer.with_output_file(path.clone(), self.config.append);
        }

        let outcome = execute(input, |visit, last| writer.visit(&visit.label, last))?;
        let mut sink = writer.finish()?;

        match &outcome {
            RunOutcome::Completed(result) => {
                if let Some(path) = &self.config.output_path {
                    info!(path = %path.display(), "结果已写入文件");
                }

                // 以下只写控制台
                let mut console = OutputSink::new(sink.into_console());
                if self.config.trace {
                    console.write_output(&Printer::format_trace(result))?;
                }
                if self.config.json {
                    console.write_output(&Printer::format_json(result)?)?;
                    console.write_output("\n")?;
                }
                console.flush()?;
            }
            RunOutcome::UnsupportedVariant(code) => {
                sink.write_output(&format!("变体 {} 未实现!\n", code))?;
                sink.flush()?;
            }
        }

        Ok(outcome)
    }
}
