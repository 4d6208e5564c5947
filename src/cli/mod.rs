//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: grade

pub mod grade;

use clap::Parser;

/// keygrade - 按答案键批改答题卡并统计成绩
#[derive(Parser, Debug)]
#[command(name = "keygrade")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Score student answer sheets against an answer key", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub grade: grade::GradeArgs,
}
