//! graphwalk 命令行入口
//!
//! 从文件或交互输入读取图描述，执行 BFS/DFS 并输出访问顺序

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use graphwalk::cli::{read_interactive, Printer, DEFAULT_OUTPUT_FILE};
use graphwalk::{GraphInput, RunConfig, RunOutcome, Runner};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(about = "邻接表 / 邻接矩阵上的 BFS 与 DFS 遍历")]
#[command(version)]
struct Args {
    /// 输入文件路径，省略时进入交互模式
    input: Option<PathBuf>,

    /// 结果文件
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// 不写结果文件
    #[arg(long)]
    no_output_file: bool,

    /// 追加到结果文件而不是覆盖
    #[arg(short, long)]
    append: bool,

    /// 额外输出 JSON 格式结果
    #[arg(long)]
    json: bool,

    /// 额外输出访问轨迹表格
    #[arg(long)]
    trace: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{} {:#}", "错误:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    print!("{}", Printer::menu());

    let input = match &args.input {
        Some(path) => {
            let input = GraphInput::parse_file(path)
                .with_context(|| format!("无法读取输入文件 \"{}\"", path.display()))?;
            println!("变体: {}", input.variant);
            input
        }
        None => read_interactive().context("交互输入失败")?,
    };
    println!();

    let config = RunConfig {
        output_path: (!args.no_output_file).then(|| args.output.clone()),
        append: args.append,
        json: args.json,
        trace: args.trace,
    };

    let runner = Runner::new(config);
    if let RunOutcome::UnsupportedVariant(code) = runner.run(&input, io::stdout())? {
        eprintln!("{}", format!("可选变体为 1-4，收到 {}", code).yellow());
    }

    Ok(())
}
