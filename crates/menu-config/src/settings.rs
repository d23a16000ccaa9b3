use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

pub const DEFAULT_CATEGORY_LIMIT: u32 = 8;
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "images/placeholder.png";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "order_history.txt";

/// Typed view over the merged configuration tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuConfig {
    /// Catalog definition on disk. `None` selects the definition bundled in the binary.
    pub catalog_path: Option<PathBuf>,
    pub default_limit: u32,
    pub assets_root: PathBuf,
    /// Relative to `assets_root`.
    pub placeholder_image: String,
    /// chrono strftime pattern used for order timestamps.
    pub timestamp_format: String,
    pub export_file_name: String,
    pub log_level: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_limit: DEFAULT_CATEGORY_LIMIT,
            assets_root: PathBuf::from("assets"),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl MenuConfig {
    pub fn from_json(v: &Value) -> Result<Self> {
        let d = Self::default();

        let catalog_path = opt_str(v, "/catalog/path")?.map(PathBuf::from);

        let default_limit = match v.pointer("/catalog/default_limit") {
            None | Some(Value::Null) => d.default_limit,
            Some(raw) => match raw.as_u64().and_then(|n| u32::try_from(n).ok()) {
                Some(n) => n,
                None => bail!(
                    "CONFIG_INVALID leaf=/catalog/default_limit: expected a non-negative integer, got {}",
                    raw
                ),
            },
        };

        let assets_root = opt_str(v, "/assets/root")?
            .map(PathBuf::from)
            .unwrap_or(d.assets_root);
        let placeholder_image =
            opt_str(v, "/assets/placeholder_image")?.unwrap_or(d.placeholder_image);
        let timestamp_format =
            opt_str(v, "/order/timestamp_format")?.unwrap_or(d.timestamp_format);
        let export_file_name =
            opt_str(v, "/export/default_file_name")?.unwrap_or(d.export_file_name);
        let log_level = opt_str(v, "/log/level")?.unwrap_or(d.log_level);

        if timestamp_format.trim().is_empty() {
            bail!("CONFIG_INVALID leaf=/order/timestamp_format: must not be empty");
        }

        Ok(Self {
            catalog_path,
            default_limit,
            assets_root,
            placeholder_image,
            timestamp_format,
            export_file_name,
            log_level,
        })
    }
}

fn opt_str(v: &Value, ptr: &str) -> Result<Option<String>> {
    match v.pointer(ptr) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => bail!("CONFIG_INVALID leaf={}: expected a string, got {}", ptr, other),
    }
}
