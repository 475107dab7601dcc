//! Worker import from delimited text fetched from a remote sheet service.
//! Headers there are maintained by hand, so columns are matched by
//! case-insensitive substring against synonym lists instead of exact text.

use super::{ImportError, ImportResult};
use crate::category::CostCategory;
use crate::project::fresh_id;
use crate::worker::ExternalWorker;

const NAME_SYNONYMS: [&str; 2] = ["이름", "name"];
const COMPANY_SYNONYMS: [&str; 3] = ["업체", "소속", "company"];
const RANK_SYNONYMS: [&str; 3] = ["직급", "rank", "position"];
const RATE_SYNONYMS: [&str; 3] = ["일당", "단가", "rate"];
const MAN_DAYS_SYNONYMS: [&str; 4] = ["투입일수", "공수", "man-days", "days"];
const CATEGORY_SYNONYMS: [&str; 3] = ["비용항목", "항목", "category"];

fn find_column(headers: &csv::StringRecord, synonyms: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim().to_lowercase();
        synonyms.iter().any(|synonym| header.contains(synonym))
    })
}

/// Normalize free-text category labels by keyword. Unrecognized labels land
/// in wiring, the bulk category of this line of work.
pub fn category_from_text(text: &str) -> CostCategory {
    let text = text.trim().to_lowercase();
    if text.contains("설계") || text.contains("design") {
        CostCategory::Design
    } else if text.contains("판넬") || text.contains("panel") {
        CostCategory::Panel
    } else if text.contains("배선") || text.contains("wiring") {
        CostCategory::Wiring
    } else if text.contains("셋업") || text.contains("시운전") || text.contains("setup") {
        CostCategory::Setup
    } else if text.contains("기타") || text.contains("other") {
        CostCategory::Other
    } else {
        CostCategory::Wiring
    }
}

fn parse_number(field: Option<&str>) -> f64 {
    field
        .map(|f| f.trim().parse().unwrap_or(0.0))
        .unwrap_or(0.0)
}

fn parse_text(field: Option<&str>) -> String {
    field.map(|f| f.trim().to_string()).unwrap_or_default()
}

/// Parse delimited worker text. The first record is the header; rows
/// without a name are skipped and numeric parse failures degrade to 0.
pub fn parse_remote_workers(text: &str) -> ImportResult<Vec<ExternalWorker>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let headers = match records.next() {
        Some(record) => record?,
        None => return Err(ImportError::EmptyInput),
    };

    let name_idx = find_column(&headers, &NAME_SYNONYMS).ok_or(ImportError::MissingHeader)?;
    let company_idx = find_column(&headers, &COMPANY_SYNONYMS);
    let rank_idx = find_column(&headers, &RANK_SYNONYMS);
    let rate_idx = find_column(&headers, &RATE_SYNONYMS);
    let man_days_idx = find_column(&headers, &MAN_DAYS_SYNONYMS);
    let category_idx = find_column(&headers, &CATEGORY_SYNONYMS);

    let mut workers = Vec::new();
    for record in records {
        let record = record?;
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i));

        let person_name = parse_text(field(Some(name_idx)));
        if person_name.is_empty() {
            continue;
        }

        let man_days = parse_number(field(man_days_idx));
        workers.push(ExternalWorker {
            id: fresh_id("ext"),
            person_name,
            company: parse_text(field(company_idx)),
            rank: parse_text(field(rank_idx)),
            daily_rate: parse_number(field(rate_idx)),
            total_man_days: man_days,
            project_man_days: Some(man_days),
            cost_category: category_from_text(&parse_text(field(category_idx))),
            ..ExternalWorker::default()
        });
    }

    Ok(workers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_match_by_substring_synonym() {
        let text = "작업자 이름,업체명,직급,일당,투입일수,비용항목\n\
                    홍길동,ABC전기,기사,250000,10,배선공사\n";
        let workers = parse_remote_workers(text).unwrap();
        assert_eq!(workers.len(), 1);
        assert_eq!(workers[0].person_name, "홍길동");
        assert_eq!(workers[0].company, "ABC전기");
        assert_eq!(workers[0].daily_rate, 250_000.0);
        assert_eq!(workers[0].total_man_days, 10.0);
        assert_eq!(workers[0].project_man_days, Some(10.0));
        assert_eq!(workers[0].cost_category, CostCategory::Wiring);
    }

    #[test]
    fn workbook_style_company_header_is_recognized() {
        let text = "이름,소속,일당,투입일수\n\
                    Hong,ABC전기,250000,10\n";
        let workers = parse_remote_workers(text).unwrap();
        assert_eq!(workers[0].company, "ABC전기");
    }

    #[test]
    fn english_headers_and_quoted_fields_are_accepted() {
        let text = "Name,Company,Rate,Man-Days,Category\n\
                    \"Hong, Gildong\",ABC,200000,5,design\n";
        let workers = parse_remote_workers(text).unwrap();
        assert_eq!(workers[0].person_name, "Hong, Gildong");
        assert_eq!(workers[0].cost_category, CostCategory::Design);
    }

    #[test]
    fn unrecognized_category_defaults_to_wiring() {
        assert_eq!(category_from_text("설계업무"), CostCategory::Design);
        assert_eq!(category_from_text("판넬 조립"), CostCategory::Panel);
        assert_eq!(category_from_text("시운전 지원"), CostCategory::Setup);
        assert_eq!(category_from_text("기타"), CostCategory::Other);
        assert_eq!(category_from_text("???"), CostCategory::Wiring);
    }

    #[test]
    fn nameless_rows_and_bad_numbers_degrade() {
        let text = "이름,일당,투입일수\n\
                    ,100000,3\n\
                    Kim,not-a-number,2\n";
        let workers = parse_remote_workers(text).unwrap();
        assert_eq!(workers.len(), 1);
        assert_eq!(workers[0].person_name, "Kim");
        assert_eq!(workers[0].daily_rate, 0.0);
        assert_eq!(workers[0].total_man_days, 2.0);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            parse_remote_workers(""),
            Err(ImportError::EmptyInput)
        ));
    }
}
