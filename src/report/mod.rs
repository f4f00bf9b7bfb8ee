//! Report assembly: the row-by-row layout of the spreadsheet and a plain-text
//! summary for the terminal.
//!
//! The layout is independent of the file format so its shape can be checked
//! without opening a workbook; `io::workbook` turns it into cells and styles.

pub mod format;
pub mod layout;

pub use format::format_run_summary;
pub use layout::*;
