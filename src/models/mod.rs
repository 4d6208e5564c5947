//! # 数据模型模块
//!
//! 定义答题结果集、学生视图与字母等级。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`reports/` 和 `commands/` 使用
//! - 子模块: results, student, grade

pub mod grade;
pub mod results;
pub mod student;

pub use grade::Grade;
pub use results::ResultSet;
pub use student::StudentView;
