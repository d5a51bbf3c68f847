//! 成绩查询行与导出格式

use std::fmt;
use std::str::FromStr;

use crate::errors::MarkFeedError;

/// 学生视角的成绩行（提交 × 反馈 × 作业）
#[derive(Debug, Clone, PartialEq)]
pub struct StudentMarkRow {
    pub assign_name: String,
    pub mark: f64,
    pub comment: String,
    pub total_marks: f64,
}

/// 名册导出行（提交 × 反馈 × 作业 × 用户）
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub comment: String,
    pub mark: f64,
    pub total_marks: f64,
}

/// 名册导出文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub const XLSX: &'static str = "xlsx";
    pub const CSV: &'static str = "csv";

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Csv => "text/csv",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "student_marks.xlsx",
            ExportFormat::Csv => "student_marks.csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Xlsx => write!(f, "{}", ExportFormat::XLSX),
            ExportFormat::Csv => write!(f, "{}", ExportFormat::CSV),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = MarkFeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ExportFormat::XLSX => Ok(ExportFormat::Xlsx),
            ExportFormat::CSV => Ok(ExportFormat::Csv),
            _ => Err(MarkFeedError::invalid_format(
                "Invalid format specified. Use either \"xlsx\" or \"csv\".",
            )),
        }
    }
}

/// 已渲染的导出文件
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}
