//! 结果输出
//!
//! 结果行同时写到控制台和输出文件

use crate::error::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 默认输出文件
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// 打开输出文件，`append` 为 false 时截断
pub fn open_output_file<P: AsRef<Path>>(path: P, append: bool) -> Result<File> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    Ok(file)
}

/// 输出端：控制台 + 可选的文件
pub struct OutputSink<W: Write> {
    console: W,
    file: Option<File>,
}

impl<W: Write> OutputSink<W> {
    pub fn new(console: W) -> Self {
        Self {
            console,
            file: None,
        }
    }

    /// 写入输出（同时写入控制台和文件）
    pub fn write_output(&mut self, content: &str) -> Result<()> {
        self.console.write_all(content.as_bytes())?;
        if let Some(ref mut file) = self.file {
            file.write_all(content.as_bytes())?;
        }
        Ok(())
    }

    /// 写入一个访问标签：非最后一个后跟 ", "，最后一个后跟换行
    pub fn emit(&mut self, label: &str, last: bool) -> Result<()> {
        let separator = if last { "\n" } else { ", " };
        self.write_output(&format!("{}{}", label, separator))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.console.flush()?;
        if let Some(ref mut file) = self.file {
            file.flush()?;
        }
        Ok(())
    }

    /// 取回控制台写入端
    pub fn into_console(self) -> W {
        self.console
    }
}

/// 遍历访问者：每关闭一个顶点就写出一个标签
///
/// 表头和结果文件都推迟到第一个标签到来时才写入/打开，
/// 所以起点不存在时不会产生任何输出，也不会创建文件。
/// 写入失败后忽略后续标签，错误由 [`VisitWriter::finish`] 返回。
pub struct VisitWriter<W: Write> {
    sink: OutputSink<W>,
    header: String,
    output: Option<(PathBuf, bool)>,
    started: bool,
    error: Option<Error>,
}

impl<W: Write> VisitWriter<W> {
    pub fn new(console: W, header: String) -> Self {
        Self {
            sink: OutputSink::new(console),
            header,
            output: None,
            started: false,
            error: None,
        }
    }

    /// 同时写入结果文件，`append` 为 false 时截断
    pub fn with_output_file(mut self, path: PathBuf, append: bool) -> Self {
        self.output = Some((path, append));
        self
    }

    /// 交给遍历引擎的回调，`last` 由引擎给出
    pub fn visit(&mut self, label: &str, last: bool) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_visit(label, last) {
            self.error = Some(e);
        }
    }

    fn write_visit(&mut self, label: &str, last: bool) -> Result<()> {
        if !self.started {
            self.started = true;
            if let Some((path, append)) = self.output.take() {
                self.sink.file = Some(open_output_file(&path, append)?);
            }
            self.sink.write_output(&self.header)?;
        }
        self.sink.emit(label, last)
    }

    /// 结束写入，返回第一个写入错误或刷新后的输出端
    pub fn finish(mut self) -> Result<OutputSink<W>> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.sink.flush()?;
        Ok(self.sink)
    }
}
