//! Shared fixtures for the end-to-end scenarios under `tests/`.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use menu_catalog::{load_catalog_str, Catalog};
use menu_config::{MenuConfig, DEFAULT_CATEGORY_LIMIT};
use menu_desk::{Notice, NoticeKind, Notifier, OrderDesk};
use menu_schemas::OrderLine;
use std::path::Path;

pub const DRINKS_JSON: &str =
    r#"[{"category":"Drinks","limit":5,"items":[{"name":"A"},{"name":"B"}]}]"#;

pub fn catalog_from_json(raw: &str) -> Result<Catalog> {
    load_catalog_str(raw, DEFAULT_CATEGORY_LIMIT).context("fixture catalog")
}

/// One category "Drinks", limit 5, items A and B.
pub fn drinks_catalog() -> Result<Catalog> {
    catalog_from_json(DRINKS_JSON)
}

/// 2025-01-15 at the given wall-clock time.
pub fn fixed_time(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .unwrap_or_default()
}

/// Keeps every notice for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl RecordingNotifier {
    pub fn kinds(&self) -> Vec<NoticeKind> {
        self.notices.iter().map(|n| n.kind).collect()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn count(&self, kind: NoticeKind) -> usize {
        self.notices.iter().filter(|n| n.kind == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

pub fn desk_with(catalog: Catalog) -> Result<OrderDesk<RecordingNotifier>> {
    OrderDesk::with_catalog(MenuConfig::default(), catalog, RecordingNotifier::default())
}

/// Read a text export back into `(timestamp, lines)` pairs.
pub fn parse_text_export(text: &str) -> Result<Vec<(String, Vec<OrderLine>)>> {
    let mut out = Vec::new();
    for block in text.split("\n\n").filter(|b| !b.trim().is_empty()) {
        let mut lines = block.lines();
        let Some(ts) = lines.next() else {
            continue;
        };
        if lines.next() != Some("Order:") {
            bail!("block for '{ts}' lacks an 'Order:' line");
        }
        let mut items = Vec::new();
        for l in lines {
            let (item, qty) = l
                .rsplit_once(" x ")
                .with_context(|| format!("bad order line: {l}"))?;
            let qty: u32 = qty.parse().with_context(|| format!("bad quantity: {l}"))?;
            items.push(OrderLine::new(item, qty));
        }
        out.push((ts.to_string(), items));
    }
    Ok(out)
}

/// Rows of a CSV export as `(timestamp, item, quantity)`.
pub fn load_export_csv(path: &Path) -> Result<Vec<(String, String, u32)>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("open export csv: {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    if headers.iter().collect::<Vec<_>>() != ["Timestamp", "Item", "Quantity"] {
        bail!("unexpected csv header: {:?}", headers);
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let qty: u32 = rec[2].parse().context("parse quantity")?;
        out.push((rec[0].to_string(), rec[1].to_string(), qty));
    }
    Ok(out)
}
