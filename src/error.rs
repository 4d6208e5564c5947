//! # 统一错误处理模块
//!
//! 定义 keygrade 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// keygrade 统一错误类型
#[derive(Error, Debug)]
pub enum GraderError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unable to find file: {path}")]
    FileNotFound { path: String },

    #[error("Unable to read from file: {path} ({source})")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    /// `line` 为文件中的行号（答案键为第 0 行）
    #[error("Could not parse file: {path}\n{reason}")]
    ParseError {
        path: String,
        line: Option<usize>,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Unexpected error: {0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GraderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_path_and_reason() {
        let err = GraderError::ParseError {
            path: "scores.txt".to_string(),
            line: Some(1),
            reason: "Student s1 has the wrong number of answers (expected 2, found 3).".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Could not parse file: scores.txt\n"));
        assert!(msg.contains("Student s1"));
    }

    #[test]
    fn test_file_not_found_display() {
        let err = GraderError::FileNotFound {
            path: "missing.txt".to_string(),
        };
        assert_eq!(err.to_string(), "Unable to find file: missing.txt");
    }
}
