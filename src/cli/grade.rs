//! # grade 命令 CLI 定义
//!
//! 读取答题文件并输出成绩统计。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/grade.rs`

use clap::Args;
use std::path::PathBuf;

/// grade 参数
#[derive(Args, Debug)]
pub struct GradeArgs {
    /// Path to the answer file (answer key on the first line, one student per line after)
    #[arg(default_value = "scores.txt")]
    pub input: PathBuf,

    /// Reject student lines that are missing an ID or answers
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Also print a per-student results table
    #[arg(long, default_value_t = false)]
    pub table: bool,

    /// Export per-student scores to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print progress and warnings while grading
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
