//! # CSV 导出
//!
//! 将每位学生的得分写入 CSV 文件。
//!
//! ## 依赖关系
//! - 被 `commands/grade.rs` 调用
//! - 使用 `csv` + `serde` 序列化

use crate::error::{GraderError, Result};
use crate::models::{Grade, StudentView};

use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// CSV 记录
#[derive(Debug, Serialize)]
struct ScoreRecord<'a> {
    student_id: &'a str,
    correct: usize,
    total: usize,
    percent: u8,
    grade: Grade,
}

/// 写入任意输出流
pub fn write_csv<W: Write>(students: &[StudentView], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for s in students {
        wtr.serialize(ScoreRecord {
            student_id: s.id().unwrap_or(""),
            correct: s.correct_count(),
            total: s.total(),
            percent: s.percent(),
            grade: s.grade(),
        })?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// 导出到文件
pub fn to_csv(students: &[StudentView], output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path).map_err(|e| GraderError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_csv(students, file)
}
