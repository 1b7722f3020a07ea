//! 交互式输入
//!
//! 基于 rustyline 逐行读取变体、起点和边，边输入支持顶点标签的 Tab 补全

use crate::error::{Error, Result};
use crate::import::{GraphInput, InputParser, Stage, TERMINATOR};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::io;
use tracing::debug;

/// 顶点标签补全器
#[derive(Default)]
pub struct LabelCompleter {
    labels: Vec<String>,
}

impl LabelCompleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录新出现的标签
    pub fn extend<'a>(&mut self, labels: impl IntoIterator<Item = &'a str>) {
        for label in labels {
            if !self.labels.iter().any(|l| l == label) {
                self.labels.push(label.to_string());
            }
        }
    }

    /// 对光标前的片段给出候选，返回 (替换起点, 候选)
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let line_to_cursor = &line[..pos];
        let start = line_to_cursor
            .rfind(|c: char| c.is_whitespace() || matches!(c, '=' | '<' | '>'))
            .map(|i| i + 1)
            .unwrap_or(0);
        let fragment = &line_to_cursor[start..];

        let mut out: Vec<String> = self
            .labels
            .iter()
            .filter(|l| l.starts_with(fragment))
            .cloned()
            .collect();
        if fragment.is_empty() && start == 0 {
            out.push(TERMINATOR.to_string());
        }
        (start, out)
    }
}

impl Completer for LabelCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, labels) = self.candidates(line, pos);
        let pairs = labels
            .into_iter()
            .map(|l| Pair {
                display: l.clone(),
                replacement: l,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for LabelCompleter {
    type Hint = String;
}

impl Highlighter for LabelCompleter {}

impl Validator for LabelCompleter {}

impl Helper for LabelCompleter {}

fn readline_error(e: ReadlineError) -> Error {
    match e {
        ReadlineError::Io(e) => Error::IoError(e),
        other => Error::IoError(io::Error::new(io::ErrorKind::Other, other.to_string())),
    }
}

/// 从终端交互读取图描述
///
/// 边输入阶段遇到 `!` 或 EOF（Ctrl-D）结束；Ctrl-C 视为中断。
pub fn read_interactive() -> Result<GraphInput> {
    let mut rl: Editor<LabelCompleter, DefaultHistory> = Editor::new().map_err(readline_error)?;
    rl.set_helper(Some(LabelCompleter::new()));

    let mut parser = InputParser::new();
    let mut edges_announced = false;

    loop {
        let prompt = match parser.stage() {
            Stage::Variant => "变体: ",
            Stage::Start => "起点: ",
            Stage::Edges => {
                if !edges_announced {
                    println!("边（以 {} 结束）:", TERMINATOR);
                    edges_announced = true;
                }
                "> "
            }
            Stage::Done => break,
        };

        match rl.readline(prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                parser.feed_line(&line)?;
                debug!(variant = ?parser.variant_code(), stage = ?parser.stage(), "读取一行输入");
                if let Some(helper) = rl.helper_mut() {
                    helper.extend(parser.vertices());
                }
            }
            Err(ReadlineError::Eof) => {
                debug!("交互输入遇到 EOF");
                break;
            }
            Err(ReadlineError::Interrupted) => {
                return Err(Error::ParseError("输入被中断".to_string()));
            }
            Err(e) => return Err(readline_error(e)),
        }
    }

    parser.finish()
}
