//! # 报告模块
//!
//! 基于学生视图生成文本报告、表格与 CSV 导出。
//!
//! ## 依赖关系
//! - 被 `commands/grade.rs` 使用
//! - 使用 `models/`, `utils/output.rs`
//! - 子模块: summary, table, export

pub mod export;
pub mod summary;
pub mod table;
