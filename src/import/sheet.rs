//! Worker import from an already-decoded workbook sheet. The caller hands
//! over the sheet as rows of cells; this module only does header discovery
//! and row extraction, so it stays independent of any workbook reader.

use super::{ImportError, ImportResult};
use crate::project::fresh_id;
use crate::worker::ExternalWorker;

/// One spreadsheet cell, already decoded from the workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Numeric reading of a cell; anything non-numeric degrades to 0.
    fn as_number(&self) -> f64 {
        match self {
            CellValue::Empty => 0.0,
            CellValue::Number(n) => *n,
            CellValue::Text(text) => text.trim().parse().unwrap_or(0.0),
        }
    }

    fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(text) => text.trim().to_string(),
        }
    }
}

/// The marker column that identifies the header row.
const NAME_HEADERS: [&str; 2] = ["작업자 이름", "worker name"];
const COMPANY_HEADERS: [&str; 2] = ["소속", "company"];
const RANK_HEADERS: [&str; 2] = ["직급", "rank"];
const RATE_HEADERS: [&str; 2] = ["단가", "daily rate"];
const TOTAL_HEADERS: [&str; 2] = ["합계", "total"];

const HEADER_SCAN_ROWS: usize = 10;

fn header_matches(cell: &CellValue, candidates: &[&str]) -> bool {
    let text = cell.as_text();
    candidates
        .iter()
        .any(|candidate| text.eq_ignore_ascii_case(candidate))
}

fn find_column(header_row: &[CellValue], candidates: &[&str]) -> Option<usize> {
    header_row
        .iter()
        .position(|cell| header_matches(cell, candidates))
}

fn find_month_column(header_row: &[CellValue], month: usize) -> Option<usize> {
    let korean = format!("{month}월");
    let english = format!("month {month}");
    header_row.iter().position(|cell| {
        let text = cell.as_text();
        text == korean || text.eq_ignore_ascii_case(&english)
    })
}

/// Extract workers from sheet rows. The header row is located within the
/// first ten rows by its worker-name column; sibling columns are optional
/// and may appear in any order. Rows without a name are skipped, and
/// workers whose total man-days is exactly 0 are dropped.
pub fn parse_worker_sheet(rows: &[Vec<CellValue>]) -> ImportResult<Vec<ExternalWorker>> {
    if rows.is_empty() {
        return Err(ImportError::EmptyInput);
    }

    let (header_index, header_row) = rows
        .iter()
        .take(HEADER_SCAN_ROWS)
        .enumerate()
        .find(|(_, row)| row.iter().any(|cell| header_matches(cell, &NAME_HEADERS)))
        .ok_or(ImportError::MissingHeader)?;

    let name_idx = find_column(header_row, &NAME_HEADERS).ok_or(ImportError::MissingHeader)?;
    let company_idx = find_column(header_row, &COMPANY_HEADERS);
    let rank_idx = find_column(header_row, &RANK_HEADERS);
    let rate_idx = find_column(header_row, &RATE_HEADERS);
    let total_idx = find_column(header_row, &TOTAL_HEADERS);
    let month_indices: Vec<Option<usize>> = (1..=12)
        .map(|month| find_month_column(header_row, month))
        .collect();

    let cell = |row: &[CellValue], idx: Option<usize>| -> CellValue {
        idx.and_then(|i| row.get(i).cloned())
            .unwrap_or(CellValue::Empty)
    };

    let mut workers = Vec::new();
    for row in rows.iter().skip(header_index + 1) {
        let person_name = cell(row, Some(name_idx)).as_text();
        if person_name.is_empty() {
            continue;
        }

        let monthly_man_days: Vec<f64> = month_indices
            .iter()
            .map(|idx| cell(row, *idx).as_number())
            .collect();
        let total_man_days = match total_idx {
            Some(idx) => cell(row, Some(idx)).as_number(),
            None => monthly_man_days.iter().sum(),
        };
        if total_man_days == 0.0 {
            continue;
        }

        workers.push(ExternalWorker {
            id: fresh_id("ext"),
            person_name,
            company: cell(row, company_idx).as_text(),
            rank: cell(row, rank_idx).as_text(),
            daily_rate: cell(row, rate_idx).as_number(),
            total_man_days,
            project_man_days: Some(total_man_days),
            monthly_man_days,
            ..ExternalWorker::default()
        });
    }

    Ok(workers)
}
