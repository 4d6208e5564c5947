//! # 结果表格
//!
//! 使用 `tabled` 打印每位学生的得分表。
//!
//! ## 依赖关系
//! - 被 `commands/grade.rs` 调用
//! - 使用 `utils/output.rs`

use crate::models::StudentView;
use crate::reports::summary::UNKNOWN_ID;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct StudentRow {
    #[tabled(rename = "Student")]
    student: String,
    #[tabled(rename = "Correct")]
    correct: String,
    #[tabled(rename = "Percent")]
    percent: String,
    #[tabled(rename = "Grade")]
    grade: String,
}

fn rows(students: &[StudentView]) -> Vec<StudentRow> {
    students
        .iter()
        .map(|s| StudentRow {
            student: s.id().unwrap_or(UNKNOWN_ID).to_string(),
            correct: format!("{}/{}", s.correct_count(), s.total()),
            percent: format!("{}%", s.percent()),
            grade: s.grade().to_string(),
        })
        .collect()
}

/// 渲染表格字符串
pub fn render_table(students: &[StudentView]) -> String {
    Table::new(rows(students)).to_string()
}

/// 打印学生结果表
pub fn print_table(students: &[StudentView]) {
    if students.is_empty() {
        output::print_warning("No students to tabulate.");
        return;
    }
    output::print_header(&format!("Results for {} Students", students.len()));
    println!("{}", render_table(students));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::scores::parse_scores_lines;
    use crate::parsers::ParseMode;

    #[test]
    fn test_render_table_columns() {
        let results =
            parse_scores_lines(&["ABCD", "s1 ABCD", "s2 ABCE"], "test", ParseMode::Lenient)
                .unwrap();
        let students = StudentView::all(&results);
        let table = render_table(&students);
        assert!(table.contains("Student"));
        assert!(table.contains("Correct"));
        assert!(table.contains("3/4"));
        assert!(table.contains("75%"));
    }
}
