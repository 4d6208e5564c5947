//! # keygrade - 答题卡批改工具
//!
//! 读取含答案键与学生答案的文本文件，逐个评分并输出统计报告。
//!
//! ## 输出
//! - 逐个学生的等级与百分比
//! - 学生总数
//! - 平均分
//! - 等级分布（A, B, C, D, F）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (批改流程)
//!   │     ├── parsers/   (答题文件解析)
//!   │     ├── models/    (结果集与学生视图)
//!   │     └── reports/   (报告、表格、CSV)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod reports;
mod utils;

use clap::Parser;
use cli::Cli;
use error::GraderError;
use std::panic::{self, AssertUnwindSafe};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = run_guarded(|| commands::run(cli)) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

/// 运行命令；panic 转为 `GraderError::Other`，不经默认 hook 输出到 stderr
fn run_guarded<F: FnOnce() -> error::Result<()>>(f: F) -> error::Result<()> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);

    outcome.unwrap_or_else(|payload| Err(GraderError::Other(panic_message(payload.as_ref()))))
}

/// 提取 panic 信息
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
