//! # 答题文件解析器
//!
//! 将答题文本解析为 `ResultSet`。
//!
//! ## 格式说明
//! ```text
//! ABCDABCD            <- 第 0 行：答案键（不区分大小写）
//! s1 ABCDABCA         <- 第 i 行：学生 ID + 空白 + 答案
//! s2 abcdabcd
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/grade.rs` 使用
//! - 构造 `models/results.rs`

use crate::error::{GraderError, Result};
use crate::models::ResultSet;
use regex::Regex;

/// 不完整学生行的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// 保留为 ID 缺失的占位记录
    #[default]
    Lenient,
    /// 直接报错
    Strict,
}

/// 从字符串内容解析答题结果
pub fn parse_scores_content(content: &str, source: &str, mode: ParseMode) -> Result<ResultSet> {
    let lines: Vec<&str> = content.lines().collect();
    parse_scores_lines(&lines, source, mode)
}

/// 逐行解析答题结果
///
/// 第一行为答案键，其余每行对应一名学生。学生数恒为 `lines.len() - 1`。
/// 遇到第一处答案数量不符即中止。
pub fn parse_scores_lines<S: AsRef<str>>(
    lines: &[S],
    source: &str,
    mode: ParseMode,
) -> Result<ResultSet> {
    let parse_error = |line: usize, reason: String| GraderError::ParseError {
        path: source.to_string(),
        line: Some(line),
        reason,
    };

    let (key_line, student_lines) = lines
        .split_first()
        .ok_or_else(|| parse_error(0, "There is no answer key.".to_string()))?;

    let answer_key: Vec<char> = key_line.as_ref().to_uppercase().chars().collect();

    // 在第一段连续空白处切分为两段
    let separator = Regex::new(r"\s+").map_err(|e| GraderError::Other(e.to_string()))?;

    let mut student_ids = Vec::with_capacity(student_lines.len());
    let mut answers = Vec::with_capacity(student_lines.len());

    for (i, line) in student_lines.iter().enumerate() {
        let line_no = i + 1;
        let tokens: Vec<&str> = separator.splitn(line.as_ref(), 2).collect();

        if tokens.len() < 2 {
            if mode == ParseMode::Strict {
                return Err(parse_error(
                    line_no,
                    format!("Line {} is missing a student ID or answers.", line_no),
                ));
            }
            student_ids.push(None);
            answers.push(Vec::new());
            continue;
        }

        let id = tokens[0];
        let student_answers: Vec<char> = tokens[1].to_uppercase().chars().collect();

        if student_answers.len() != answer_key.len() {
            return Err(parse_error(
                line_no,
                format!(
                    "Student {} has the wrong number of answers (line {}: expected {}, found {}).",
                    id,
                    line_no,
                    answer_key.len(),
                    student_answers.len()
                ),
            ));
        }

        student_ids.push(Some(id.to_string()));
        answers.push(student_answers);
    }

    Ok(ResultSet::new(answer_key, student_ids, answers))
}
