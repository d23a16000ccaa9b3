use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    About,
    CatalogLoadFailed,
    NothingToOrder,
    OrderPlaced,
    NothingToExport,
    ExportSucceeded,
    ExportFailed,
}

/// A blocking acknowledgement shown to the user. Not a return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub header: Option<String>,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            header: None,
            message: message.into(),
        }
    }

    pub fn about(version: &str) -> Self {
        Self {
            header: Some("Menu App".to_string()),
            ..Self::new(
                NoticeKind::About,
                "About",
                format!("Version {version}\nDeveloped by Mackenzie © 2025"),
            )
        }
    }

    pub fn catalog_load_failed() -> Self {
        Self::new(NoticeKind::CatalogLoadFailed, "Error", "Unable to load menu data.")
    }

    pub fn nothing_to_order() -> Self {
        Self::new(
            NoticeKind::NothingToOrder,
            "Order",
            "Nothing to order: select at least one item.",
        )
    }

    pub fn order_placed() -> Self {
        Self::new(NoticeKind::OrderPlaced, "Notification", "Order placed successfully!")
    }

    pub fn nothing_to_export() -> Self {
        Self::new(NoticeKind::NothingToExport, "Export", "No orders to export.")
    }

    pub fn export_succeeded(path: &Path) -> Self {
        Self::new(
            NoticeKind::ExportSucceeded,
            "Export",
            format!(
                "Order history exported successfully to:\n{}",
                path.display()
            ),
        )
    }

    /// Generic on purpose; the cause goes to the log only.
    pub fn export_failed() -> Self {
        Self::new(
            NoticeKind::ExportFailed,
            "Export Error",
            "An error occurred while exporting.",
        )
    }
}

/// Presentation-side sink for notices.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Collects notices in order; handy for tests and headless runs.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
