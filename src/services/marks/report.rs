//! 成绩报表渲染
//!
//! 学生视图渲染为 JSON，名册导出渲染为 XLSX 或 CSV。两种文件格式共用
//! 同一张有序列定义表 [`ROSTER_COLUMNS`]，表头与字段顺序只在这里维护。

use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook};

use super::score::{DerivedScore, derive_score};
use crate::errors::{MarkFeedError, Result};
use crate::models::marks::entities::{ExportFile, ExportFormat, RosterRow, StudentMarkRow};
use crate::models::marks::responses::{StudentMarkItem, StudentMarksResponse};

/// 导出工作表名称
pub const SHEET_NAME: &str = "Student Marks";

/// Excel 单元格可容纳的最大字符数
pub const MAX_CELL_CHARS: usize = 32_767;

/// 附带计算结果的名册行
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRosterRow {
    pub row: RosterRow,
    pub score: DerivedScore,
}

impl From<RosterRow> for ScoredRosterRow {
    fn from(row: RosterRow) -> Self {
        let score = derive_score(row.mark, row.total_marks);
        Self { row, score }
    }
}

/// 单元格取值
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(f64),
    /// 百分比，无法计算时为空
    Percentage(Option<f64>),
}

impl<'a> CellValue<'a> {
    /// 文本单元格，超出 [`MAX_CELL_CHARS`] 的部分截去，两种格式输出一致
    pub fn text(value: &'a str) -> Self {
        let end = value
            .char_indices()
            .nth(MAX_CELL_CHARS)
            .map_or(value.len(), |(idx, _)| idx);
        CellValue::Text(&value[..end])
    }

    fn csv_field(&self) -> String {
        match self {
            CellValue::Text(text) => (*text).to_string(),
            CellValue::Number(value) => value.to_string(),
            CellValue::Percentage(Some(pct)) => format!("{pct:.2}"),
            CellValue::Percentage(None) => String::new(),
        }
    }
}

/// 导出列定义
pub struct RosterColumn {
    /// XLSX 表头
    pub label: &'static str,
    /// CSV 字段名
    pub field: &'static str,
    pub value: for<'a> fn(&'a ScoredRosterRow) -> CellValue<'a>,
}

fn first_name(r: &ScoredRosterRow) -> CellValue<'_> {
    CellValue::text(&r.row.first_name)
}

fn last_name(r: &ScoredRosterRow) -> CellValue<'_> {
    CellValue::text(&r.row.last_name)
}

fn username(r: &ScoredRosterRow) -> CellValue<'_> {
    CellValue::text(&r.row.username)
}

fn comment(r: &ScoredRosterRow) -> CellValue<'_> {
    CellValue::text(&r.row.comment)
}

fn mark(r: &ScoredRosterRow) -> CellValue<'_> {
    CellValue::Number(r.row.mark)
}

fn total_marks(r: &ScoredRosterRow) -> CellValue<'_> {
    CellValue::Number(r.row.total_marks)
}

fn percentage(r: &ScoredRosterRow) -> CellValue<'_> {
    CellValue::Percentage(r.score.percentage)
}

pub static ROSTER_COLUMNS: [RosterColumn; 7] = [
    RosterColumn {
        label: "First Name",
        field: "StudentFirstName",
        value: first_name,
    },
    RosterColumn {
        label: "Last Name",
        field: "StudentLastName",
        value: last_name,
    },
    RosterColumn {
        label: "Username",
        field: "StudentUsername",
        value: username,
    },
    RosterColumn {
        label: "Comment",
        field: "FeedbackComment",
        value: comment,
    },
    RosterColumn {
        label: "Mark",
        field: "Mark",
        value: mark,
    },
    RosterColumn {
        label: "Total Marks",
        field: "TotalMarks",
        value: total_marks,
    },
    RosterColumn {
        label: "Percentage",
        field: "PercentageMark",
        value: percentage,
    },
];

/// 学生视图：每行一个条目，保持查询顺序
pub fn build_student_marks(rows: &[StudentMarkRow]) -> StudentMarksResponse {
    let feedback = rows
        .iter()
        .map(|row| StudentMarkItem {
            assign_name: row.assign_name.clone(),
            mark_formatted: derive_score(row.mark, row.total_marks).formatted,
            comment: row.comment.clone(),
        })
        .collect();

    StudentMarksResponse { feedback }
}

/// 按导出格式渲染名册
pub fn render_roster(rows: Vec<RosterRow>, format: ExportFormat) -> Result<ExportFile> {
    let scored: Vec<ScoredRosterRow> = rows.into_iter().map(ScoredRosterRow::from).collect();

    let bytes = match format {
        ExportFormat::Xlsx => render_xlsx(&scored)?,
        ExportFormat::Csv => render_csv(&scored)?,
    };

    Ok(ExportFile { format, bytes })
}

/// 渲染 CSV
pub fn render_csv(rows: &[ScoredRosterRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(ROSTER_COLUMNS.iter().map(|c| c.field))?;
    for row in rows {
        writer.write_record(ROSTER_COLUMNS.iter().map(|c| (c.value)(row).csv_field()))?;
    }

    writer
        .into_inner()
        .map_err(|e| MarkFeedError::report_generation(format!("CSV: {e}")))
}

/// 渲染 XLSX
///
/// 工作簿创建时间固定，相同输入得到相同字节。
pub fn render_xlsx(rows: &[ScoredRosterRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new().set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let header_format = Format::new().set_bold();
    let percentage_format = Format::new().set_num_format("0.00");

    let sheet = workbook.add_worksheet().set_name(SHEET_NAME)?;

    for (col, column) in ROSTER_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, column.label, &header_format)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let excel_row = index as u32 + 1;
        for (col, column) in ROSTER_COLUMNS.iter().enumerate() {
            let col = col as u16;
            match (column.value)(row) {
                CellValue::Text(text) => {
                    sheet.write_string(excel_row, col, text)?;
                }
                CellValue::Number(value) => {
                    sheet.write_number(excel_row, col, value)?;
                }
                CellValue::Percentage(Some(pct)) => {
                    sheet.write_number_with_format(excel_row, col, pct, &percentage_format)?;
                }
                // 留空
                CellValue::Percentage(None) => {}
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
