//! # 答题结果集
//!
//! 解析后的不可变数据：答案键、学生 ID 与每位学生的答案。
//!
//! ## 依赖关系
//! - 由 `parsers/scores.rs` 构造
//! - 被 `models/student.rs` 借用

/// 答题结果集
///
/// 构造后不再修改，只暴露只读访问器。`student_ids` 与 `answers` 长度一致；
/// 格式不完整的学生行保留为 ID 为 `None`、答案为空的占位记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    answer_key: Vec<char>,
    student_ids: Vec<Option<String>>,
    answers: Vec<Vec<char>>,
}

impl ResultSet {
    /// 由解析器调用；两个学生序列长度必须一致
    pub(crate) fn new(
        answer_key: Vec<char>,
        student_ids: Vec<Option<String>>,
        answers: Vec<Vec<char>>,
    ) -> Self {
        debug_assert_eq!(student_ids.len(), answers.len());
        ResultSet {
            answer_key,
            student_ids,
            answers,
        }
    }

    pub fn answer_key(&self) -> &[char] {
        &self.answer_key
    }

    pub fn student_ids(&self) -> &[Option<String>] {
        &self.student_ids
    }

    pub fn answers(&self) -> &[Vec<char>] {
        &self.answers
    }

    /// 学生数（含占位记录）
    pub fn student_count(&self) -> usize {
        self.student_ids.len()
    }

    /// 占位记录数
    pub fn phantom_count(&self) -> usize {
        self.student_ids.iter().filter(|id| id.is_none()).count()
    }
}
