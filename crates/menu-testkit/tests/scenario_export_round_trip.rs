//! Scenario: orders placed through the desk survive export.
//!
//! - the text export parses back into exactly the placed (item, qty) pairs
//! - the CSV export has the fixed header and one row per order line
//! - a failed write raises the generic notice and keeps the history

use menu_desk::NoticeKind;
use menu_history::ExportFormat;
use menu_schemas::OrderLine;
use menu_testkit::{
    catalog_from_json, desk_with, fixed_time, load_export_csv, parse_text_export,
};
use std::fs;

const MENU: &str = r#"[
    {"category":"Mains","limit":3,"items":[{"name":"Pasta"},{"name":"Fish, grilled"}]},
    {"category":"Drinks","items":[{"name":"Juice"}]}
]"#;

fn placed_desk() -> anyhow::Result<menu_desk::OrderDesk<menu_testkit::RecordingNotifier>> {
    let mut desk = desk_with(catalog_from_json(MENU)?)?;

    desk.set_quantity("Fish, grilled", 2)?;
    desk.set_quantity("Juice", 4)?;
    desk.place_order_at(fixed_time(19, 30, 0));

    desk.set_quantity("Pasta", 1)?;
    desk.place_order_at(fixed_time(19, 45, 10));
    Ok(desk)
}

#[test]
fn text_export_recovers_the_orders() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("order_history.txt");
    let mut desk = placed_desk()?;

    let report = desk.export(&path)?;
    assert_eq!(report.format, ExportFormat::Text);
    assert_eq!((report.records, report.lines), (2, 3));

    let parsed = parse_text_export(&fs::read_to_string(&path)?)?;
    assert_eq!(
        parsed,
        vec![
            (
                "01/15/2025 19:30:00".to_string(),
                vec![
                    OrderLine::new("Fish, grilled", 2),
                    OrderLine::new("Juice", 4)
                ]
            ),
            (
                "01/15/2025 19:45:10".to_string(),
                vec![OrderLine::new("Pasta", 1)]
            ),
        ]
    );

    let last = desk.notifier().last().map(|n| n.kind);
    assert_eq!(last, Some(NoticeKind::ExportSucceeded));
    Ok(())
}

#[test]
fn csv_export_has_one_row_per_line() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("orders.CSV");
    let mut desk = placed_desk()?;

    let report = desk.export(&path)?;
    assert_eq!(report.format, ExportFormat::Csv);

    let rows = load_export_csv(&path)?;
    assert_eq!(
        rows,
        vec![
            ("01/15/2025 19:30:00".to_string(), "Fish, grilled".to_string(), 2),
            ("01/15/2025 19:30:00".to_string(), "Juice".to_string(), 4),
            ("01/15/2025 19:45:10".to_string(), "Pasta".to_string(), 1),
        ]
    );
    Ok(())
}

#[test]
fn failed_write_keeps_history() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing").join("orders.csv");
    let mut desk = placed_desk()?;

    assert!(desk.export(&path).is_err());
    assert_eq!(desk.history().len(), 2);

    let notice = desk.notifier().last().cloned();
    assert_eq!(notice.as_ref().map(|n| n.kind), Some(NoticeKind::ExportFailed));
    assert_eq!(
        notice.map(|n| n.message),
        Some("An error occurred while exporting.".to_string())
    );
    Ok(())
}
