//! # 字母等级
//!
//! 将十分制取整结果映射为 A/B/C/D/F。
//!
//! ## 依赖关系
//! - 被 `models/student.rs`、`reports/` 使用

use serde::Serialize;

/// 字母等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// 报告输出顺序
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// 查表映射：10→A, 9→B, 8/7→C, 6/5→D, 其余→F
    pub fn from_tenths(tenths: u32) -> Self {
        match tenths {
            10 => Grade::A,
            9 => Grade::B,
            8 | 7 => Grade::C,
            6 | 5 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
