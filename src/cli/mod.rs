//! 命令行支持
//!
//! 结果输出、打印格式和交互式输入

pub mod printer;
pub mod prompt;
pub mod sink;

pub use printer::Printer;
pub use prompt::{read_interactive, LabelCompleter};
pub use sink::{open_output_file, OutputSink, VisitWriter, DEFAULT_OUTPUT_FILE};
