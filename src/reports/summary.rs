//! # 统计报告
//!
//! 四种文本报告：逐个学生、总人数、平均分、等级分布。
//! 每种报告都是学生视图的纯函数，返回待输出的行。
//!
//! ## 依赖关系
//! - 被 `commands/grade.rs` 调用
//! - 使用 `models/student.rs`, `models/grade.rs`

use crate::models::{Grade, StudentView};

/// 占位记录显示的 ID
pub const UNKNOWN_ID: &str = "(unknown)";

/// 逐个学生：`Student <id>: <grade> (<percent>%)`
pub fn individual_lines(students: &[StudentView]) -> Vec<String> {
    students
        .iter()
        .map(|s| {
            format!(
                "Student {}: {} ({}%)",
                s.id().unwrap_or(UNKNOWN_ID),
                s.grade(),
                s.percent()
            )
        })
        .collect()
}

pub fn count_line(students: &[StudentView]) -> String {
    format!("Total Student Count: {}", students.len())
}

/// 平均得分比例；无学生时为 `None`
pub fn average_score(students: &[StudentView]) -> Option<f64> {
    if students.is_empty() {
        return None;
    }
    let sum: f64 = students.iter().map(|s| s.score()).sum();
    Some(sum / students.len() as f64)
}

/// 平均分，保留两位小数
pub fn average_line(students: &[StudentView]) -> String {
    match average_score(students) {
        Some(avg) => format!("Average Score: {:.2}%", avg * 100.0),
        None => "Average Score: n/a".to_string(),
    }
}

/// 各等级人数，按 A, B, C, D, F 排列
pub fn grade_frequencies(students: &[StudentView]) -> [(Grade, usize); 5] {
    Grade::ALL.map(|grade| {
        let count = students.iter().filter(|s| s.grade() == grade).count();
        (grade, count)
    })
}

/// 等级分布：标题行加固定五行
pub fn frequency_lines(students: &[StudentView]) -> Vec<String> {
    let mut lines = vec!["Grade Frequencies:".to_string()];
    for (grade, count) in grade_frequencies(students) {
        let label = if count == 1 { "student" } else { "students" };
        lines.push(format!(" {}: {} {}", grade, count, label));
    }
    lines
}

/// 按固定顺序输出四种报告
pub fn print_all(students: &[StudentView]) {
    for line in individual_lines(students) {
        println!("{}", line);
    }
    println!("{}", count_line(students));
    println!("{}", average_line(students));
    for line in frequency_lines(students) {
        println!("{}", line);
    }
}
