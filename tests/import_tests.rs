use cost_tool::import::sheet::CellValue;
use cost_tool::{CostCategory, LaborCost, parse_remote_workers, parse_worker_sheet};

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn num(n: f64) -> CellValue {
    CellValue::Number(n)
}

#[test]
fn sheet_import_with_full_header_set() {
    let rows = vec![
        vec![text("공수표")],
        vec![
            text("작업자 이름"),
            text("소속"),
            text("직급"),
            text("단가"),
            text("1월"),
            text("2월"),
            text("합계"),
        ],
        vec![
            text("홍길동"),
            text("ABC전기"),
            text("기사"),
            num(250_000.0),
            num(4.0),
            num(6.0),
            num(10.0),
        ],
        vec![text(""), text(""), text(""), num(0.0), num(0.0), num(0.0), num(0.0)],
    ];

    let workers = parse_worker_sheet(&rows).unwrap();
    assert_eq!(workers.len(), 1);
    let worker = &workers[0];
    assert_eq!(worker.person_name, "홍길동");
    assert_eq!(worker.company, "ABC전기");
    assert_eq!(worker.rank, "기사");
    assert_eq!(worker.daily_rate, 250_000.0);
    assert_eq!(worker.total_man_days, 10.0);
    assert_eq!(worker.project_man_days, Some(10.0));
    assert_eq!(worker.monthly_man_days.len(), 12);
    assert_eq!(worker.monthly_man_days[0], 4.0);
    assert_eq!(worker.monthly_man_days[1], 6.0);
    assert_eq!(worker.cost_category, CostCategory::Wiring);
}

#[test]
fn sheet_import_tolerates_reordered_and_missing_columns() {
    let rows = vec![
        vec![text("합계"), text("작업자 이름")],
        vec![num(5.0), text("Kim")],
    ];
    let workers = parse_worker_sheet(&rows).unwrap();
    assert_eq!(workers[0].person_name, "Kim");
    assert_eq!(workers[0].total_man_days, 5.0);
    assert_eq!(workers[0].company, "");
    assert_eq!(workers[0].daily_rate, 0.0);
}

#[test]
fn remote_import_replaces_external_workers_and_stamps_provenance() {
    let csv_text = "이름,업체명,직급,일당,투입일수,비용항목\n\
                    홍길동,ABC전기,기사,250000,10,배선공사\n\
                    김설계,DEF,대리,200000,5,설계\n";
    let workers = parse_remote_workers(csv_text).unwrap();
    assert_eq!(workers.len(), 2);
    assert_eq!(workers[1].cost_category, CostCategory::Design);

    let mut labor = LaborCost::default();
    labor.add_external().person_name = "manual".into();
    labor.replace_external(workers, Some("sheet.csv".into()));
    assert_eq!(labor.external_workers.len(), 2);
    assert_eq!(labor.source_file.as_deref(), Some("sheet.csv"));
    assert!(labor.imported_at.is_some());
}
