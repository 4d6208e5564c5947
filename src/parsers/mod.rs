//! # 解析器模块
//!
//! 提供答题文件的解析。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: scores

pub mod scores;

pub use scores::{parse_scores_content, ParseMode};
