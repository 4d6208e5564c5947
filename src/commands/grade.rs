//! # grade 命令实现
//!
//! 读取答题文件、解析、评分并输出报告。
//!
//! ## 流程
//! - 打开文件（不存在 → `FileNotFound`，其他 I/O 错误 → `FileReadError`）
//! - 读取全部内容后立即释放文件句柄
//! - 解析为 `ResultSet`（失败 → `ParseError`）
//! - 为每名学生创建视图，依次输出逐个学生、人数、平均分、等级分布
//! - 可选：结果表格、CSV 导出
//!
//! 任一步失败即返回错误，后续报告不再输出。
//!
//! ## 依赖关系
//! - 使用 `cli/grade.rs` 定义的参数
//! - 使用 `parsers/`, `models/`, `reports/`
//! - 使用 `utils/output.rs`

use crate::cli::grade::GradeArgs;
use crate::error::{GraderError, Result};
use crate::models::StudentView;
use crate::parsers::{self, ParseMode};
use crate::reports::{export, summary, table};
use crate::utils::output;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// 执行 grade 命令
pub fn execute(args: GradeArgs) -> Result<()> {
    let source = args.input.display().to_string();

    if args.verbose {
        output::print_info(&format!("Reading '{}'", source));
    }

    let content = read_scores_file(&args.input)?;

    let mode = if args.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let results = parsers::parse_scores_content(&content, &source, mode)?;

    if args.verbose {
        output::print_info(&format!(
            "Parsed {} students against a {}-question answer key",
            results.student_count(),
            results.answer_key().len()
        ));
        let phantoms = results.phantom_count();
        if phantoms > 0 {
            output::print_warning(&format!(
                "{} malformed student line(s) kept as unknown students",
                phantoms
            ));
        }
    }

    let students = StudentView::all(&results);

    summary::print_all(&students);

    if args.table {
        table::print_table(&students);
    }

    if let Some(csv_path) = &args.csv {
        export::to_csv(&students, csv_path)?;
        output::print_success(&format!("Scores exported to '{}'", csv_path.display()));
    }

    Ok(())
}

/// 读取答题文件的全部内容
pub fn read_scores_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GraderError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => GraderError::FileReadError {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    // file 离开作用域时关闭
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| GraderError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

    Ok(content)
}
