//! # 命令执行模块
//!
//! 实现批改流程的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `reports/`, `utils/`
//! - 子模块: grade

pub mod grade;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    grade::execute(cli.grade)
}
