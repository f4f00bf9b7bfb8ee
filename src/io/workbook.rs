//! Render a report layout into an `.xlsx` workbook.
//!
//! Styling: a blue banner per team, bold bordered headers, bordered player
//! rows, and a green total row.

use std::path::Path;

use rust_xlsxwriter::{Color, ColNum, Format, FormatAlign, FormatBorder, RowNum, Workbook, Worksheet, XlsxError};

use crate::error::AppError;
use crate::io::write_atomic;
use crate::report::{COLUMN_HEADERS, COLUMN_WIDTHS, ReportLayout, ReportRow, TOTAL_LABEL, top_flag};

pub const SHEET_NAME: &str = "Player Stats";

const BANNER_FILL: u32 = 0x4472C4;
const TOTAL_FILL: u32 = 0x70AD47;
const LAST_COL: ColNum = 3;

struct Styles {
    banner: Format,
    header: Format,
    cell: Format,
    total_label: Format,
    total_value: Format,
}

impl Styles {
    fn new() -> Self {
        let banner = Format::new()
            .set_bold()
            .set_font_size(14)
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(BANNER_FILL))
            .set_align(FormatAlign::Center);
        let header = Format::new()
            .set_bold()
            .set_font_size(12)
            .set_border(FormatBorder::Thin);
        let cell = Format::new().set_border(FormatBorder::Thin);
        let total = Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(TOTAL_FILL));

        Self {
            banner,
            header,
            cell,
            total_label: total.clone().set_align(FormatAlign::Right),
            total_value: total.set_border(FormatBorder::Thin),
        }
    }
}

/// Build the workbook for `layout` and serialize it in memory.
pub fn render_workbook(layout: &ReportLayout) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    fill_sheet(sheet, layout).map_err(|e| AppError::report_write(format!("Failed to build report sheet: {e}")))?;
    workbook
        .save_to_buffer()
        .map_err(|e| AppError::report_write(format!("Failed to serialize workbook: {e}")))
}

/// Write the report to `path`, replacing any previous run's file.
pub fn write_report_xlsx(path: &Path, layout: &ReportLayout) -> Result<(), AppError> {
    let bytes = render_workbook(layout)?;
    write_atomic(path, &bytes)
}

fn fill_sheet(sheet: &mut Worksheet, layout: &ReportLayout) -> Result<(), XlsxError> {
    let styles = Styles::new();
    sheet.set_name(SHEET_NAME)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as ColNum, *width)?;
    }

    for (idx, row) in layout.rows.iter().enumerate() {
        let r = idx as RowNum;
        match row {
            ReportRow::Banner { team } => {
                sheet.merge_range(r, 0, r, LAST_COL, team, &styles.banner)?;
            }
            ReportRow::Header => {
                for (col, title) in COLUMN_HEADERS.iter().enumerate() {
                    sheet.write_string_with_format(r, col as ColNum, *title, &styles.header)?;
                }
            }
            ReportRow::Player { record, in_top, .. } => {
                sheet.write_string_with_format(r, 0, &record.name, &styles.cell)?;
                sheet.write_string_with_format(r, 1, &record.ipl_team, &styles.cell)?;
                sheet.write_number_with_format(r, 2, record.points as f64, &styles.cell)?;
                sheet.write_string_with_format(r, 3, top_flag(*in_top), &styles.cell)?;
            }
            ReportRow::Total { points } => {
                sheet.merge_range(r, 0, r, LAST_COL - 1, TOTAL_LABEL, &styles.total_label)?;
                sheet.write_number_with_format(r, LAST_COL, *points as f64, &styles.total_value)?;
            }
            ReportRow::Blank => {}
        }
    }

    Ok(())
}
