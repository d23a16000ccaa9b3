use std::fmt::{self, Write as _};

use chrono::{Local, NaiveDate, NaiveDateTime};
use menu_schemas::OrderLine;
use tracing::info;

/// `MM/dd/yyyy HH:mm:ss`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimestampFormat(pub String);

impl fmt::Display for InvalidTimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid order timestamp format: '{}'", self.0)
    }
}

impl std::error::Error for InvalidTimestampFormat {}

/// One placed order. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    timestamp: String,
    lines: Vec<OrderLine>,
}

impl OrderRecord {
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// `"<timestamp>\nOrder:\n<item> x <qty>\n..."` without a trailing newline.
    pub fn to_block(&self) -> String {
        let mut out = format!("{}\nOrder:", self.timestamp);
        for line in &self.lines {
            out.push_str(&format!("\n{} x {}", line.item, line.quantity));
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    Placed { index: usize },
    /// The snapshot had no non-zero lines; history is unchanged.
    NothingToOrder,
}

#[derive(Debug, Clone)]
pub struct OrderHistory {
    records: Vec<OrderRecord>,
    timestamp_format: String,
}

impl Default for OrderHistory {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl OrderHistory {
    /// `timestamp_format` is a chrono strftime pattern. It is test-rendered
    /// once here (unknown specifiers and zone fields fail on a naive time), so
    /// stamping an order cannot fail later.
    pub fn new(timestamp_format: &str) -> Result<Self, InvalidTimestampFormat> {
        let renders = NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|sample| {
                let mut probe = String::new();
                write!(probe, "{}", sample.format(timestamp_format)).is_ok()
            })
            .unwrap_or(false);
        if timestamp_format.trim().is_empty() || !renders {
            return Err(InvalidTimestampFormat(timestamp_format.to_string()));
        }
        Ok(Self {
            records: Vec::new(),
            timestamp_format: timestamp_format.to_string(),
        })
    }

    /// Append `lines` stamped with the local wall clock.
    pub fn place(&mut self, lines: Vec<OrderLine>) -> PlaceOutcome {
        self.place_at(lines, Local::now().naive_local())
    }

    pub fn place_at(&mut self, lines: Vec<OrderLine>, at: NaiveDateTime) -> PlaceOutcome {
        let lines: Vec<OrderLine> = lines.into_iter().filter(|l| l.quantity > 0).collect();
        if lines.is_empty() {
            return PlaceOutcome::NothingToOrder;
        }

        let record = OrderRecord {
            timestamp: at.format(&self.timestamp_format).to_string(),
            lines,
        };
        info!(
            timestamp = %record.timestamp,
            lines = record.lines.len(),
            total_quantity = record.total_quantity(),
            "new order placed"
        );

        self.records.push(record);
        PlaceOutcome::Placed {
            index: self.records.len() - 1,
        }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&OrderRecord> {
        self.records.last()
    }

    /// Human-readable transcript: a heading, then every block followed by a blank line.
    pub fn render(&self) -> String {
        let mut out = String::from("Order History:\n");
        for r in &self.records {
            out.push_str(&r.to_block());
            out.push_str("\n\n");
        }
        out
    }
}
