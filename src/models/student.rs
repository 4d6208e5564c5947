//! # 学生视图
//!
//! 按索引引用 `ResultSet` 中的一名学生，惰性计算并缓存得分指标。
//!
//! ## 依赖关系
//! - 借用 `models/results.rs`
//! - 使用 `models/grade.rs`
//! - 被 `reports/` 和 `commands/grade.rs` 使用

use super::{Grade, ResultSet};
use std::cell::OnceCell;

/// 单个学生的视图（不复制数据）
///
/// 各指标首次访问时计算，之后复用缓存值。借用保证结果集在视图存活期间不变。
#[derive(Debug)]
pub struct StudentView<'a> {
    context: &'a ResultSet,
    index: usize,
    correct: OnceCell<usize>,
    score: OnceCell<f64>,
    percent: OnceCell<u8>,
    grade: OnceCell<Grade>,
}

impl<'a> StudentView<'a> {
    pub fn new(context: &'a ResultSet, index: usize) -> Self {
        StudentView {
            context,
            index,
            correct: OnceCell::new(),
            score: OnceCell::new(),
            percent: OnceCell::new(),
            grade: OnceCell::new(),
        }
    }

    /// 按文件顺序为每名学生创建视图
    pub fn all(context: &'a ResultSet) -> Vec<StudentView<'a>> {
        (0..context.student_count())
            .map(|i| StudentView::new(context, i))
            .collect()
    }

    /// 学生 ID；占位记录返回 `None`
    pub fn id(&self) -> Option<&'a str> {
        self.context.student_ids()[self.index].as_deref()
    }

    pub fn answers(&self) -> &'a [char] {
        &self.context.answers()[self.index]
    }

    /// 题目总数（答案键长度）
    pub fn total(&self) -> usize {
        self.context.answer_key().len()
    }

    /// 答对题数，逐位比较到较短者为止
    pub fn correct_count(&self) -> usize {
        *self.correct.get_or_init(|| {
            self.context
                .answer_key()
                .iter()
                .zip(self.answers())
                .filter(|(key, answer)| key == answer)
                .count()
        })
    }

    /// 得分比例，范围 [0.0, 1.0]；答案键为空时返回 0.0
    pub fn score(&self) -> f64 {
        *self.score.get_or_init(|| {
            let total = self.total();
            if total == 0 {
                0.0
            } else {
                self.correct_count() as f64 / total as f64
            }
        })
    }

    /// 百分制得分，四舍五入到整数
    pub fn percent(&self) -> u8 {
        *self
            .percent
            .get_or_init(|| rounded_ratio(self.correct_count(), self.total(), 100) as u8)
    }

    /// 字母等级，由十分制取整结果查表得到
    pub fn grade(&self) -> Grade {
        *self.grade.get_or_init(|| {
            Grade::from_tenths(rounded_ratio(self.correct_count(), self.total(), 10))
        })
    }
}

/// 整数运算的 round(correct / total * scale)，0.5 向上取整；total 为 0 时返回 0
fn rounded_ratio(correct: usize, total: usize, scale: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct * scale * 2 + total) / (total * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(key: &str, rows: &[(&str, &str)]) -> ResultSet {
        ResultSet::new(
            key.chars().collect(),
            rows.iter().map(|(id, _)| Some(id.to_string())).collect(),
            rows.iter().map(|(_, a)| a.chars().collect()).collect(),
        )
    }

    /// 构造 total 道题中答对 correct 道的学生
    fn fraction(correct: usize, total: usize) -> ResultSet {
        let key = "A".repeat(total);
        let answers = "A".repeat(correct) + &"B".repeat(total - correct);
        results(&key, &[("s", &answers)])
    }

    #[test]
    fn test_correct_count_and_score() {
        let set = results("ABCD", &[("s1", "ABCD"), ("s2", "ABCE")]);
        let views = StudentView::all(&set);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].correct_count(), 4);
        assert_eq!(views[0].percent(), 100);
        assert_eq!(views[0].grade(), Grade::A);
        assert_eq!(views[1].correct_count(), 3);
        assert!((views[1].score() - 0.75).abs() < 1e-12);
        assert_eq!(views[1].percent(), 75);
        assert_eq!(views[1].grade(), Grade::C);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(StudentView::new(&fraction(20, 20), 0).grade(), Grade::A);
        // 0.95 → 9.5 → 10
        assert_eq!(StudentView::new(&fraction(19, 20), 0).grade(), Grade::A);
        // 0.85 → 8.5 → 9
        assert_eq!(StudentView::new(&fraction(17, 20), 0).grade(), Grade::B);
        assert_eq!(StudentView::new(&fraction(13, 20), 0).grade(), Grade::C);
        assert_eq!(StudentView::new(&fraction(11, 20), 0).grade(), Grade::D);
        // 0.44 → 4.4 → 4
        assert_eq!(StudentView::new(&fraction(11, 25), 0).grade(), Grade::F);
        assert_eq!(StudentView::new(&fraction(0, 20), 0).grade(), Grade::F);
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(StudentView::new(&fraction(1, 8), 0).percent(), 13);
        // 2/3 = 66.67%
        assert_eq!(StudentView::new(&fraction(2, 3), 0).percent(), 67);
        assert_eq!(StudentView::new(&fraction(1, 3), 0).percent(), 33);
    }

    #[test]
    fn test_score_within_bounds() {
        for total in 1..=12 {
            for correct in 0..=total {
                let set = fraction(correct, total);
                let view = StudentView::new(&set, 0);
                assert!(view.correct_count() <= total);
                assert!((0.0..=1.0).contains(&view.score()));
                assert!(view.percent() <= 100);
            }
        }
    }

    #[test]
    fn test_shorter_answers_compare_prefix() {
        let set = results("ABCD", &[("s1", "AB")]);
        let view = StudentView::new(&set, 0);
        assert_eq!(view.correct_count(), 2);
        assert_eq!(view.percent(), 50);
    }

    #[test]
    fn test_empty_answer_key_uses_zero_sentinel() {
        let set = results("", &[("s1", "")]);
        let view = StudentView::new(&set, 0);
        assert_eq!(view.correct_count(), 0);
        assert_eq!(view.score(), 0.0);
        assert_eq!(view.percent(), 0);
        assert_eq!(view.grade(), Grade::F);
    }

    #[test]
    fn test_phantom_row_scores_zero() {
        let set = ResultSet::new(
            "AB".chars().collect(),
            vec![None],
            vec![Vec::new()],
        );
        let view = StudentView::new(&set, 0);
        assert_eq!(view.id(), None);
        assert_eq!(view.correct_count(), 0);
        assert_eq!(view.grade(), Grade::F);
    }

    #[test]
    fn test_metrics_are_memoized() {
        let set = results("AB", &[("s1", "AB")]);
        let view = StudentView::new(&set, 0);
        assert!(view.grade.get().is_none());
        assert_eq!(view.grade(), Grade::A);
        assert_eq!(view.correct.get(), Some(&2));
        assert_eq!(view.grade.get(), Some(&Grade::A));
        assert_eq!(view.grade(), Grade::A);
    }
}
