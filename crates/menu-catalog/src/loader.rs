use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use menu_schemas::CategoryDef;
use tracing::{error, info};

use crate::model::{Catalog, Category};

/// Definition shipped inside the binary; used when no catalog path is configured.
pub const BUNDLED_CATALOG_JSON: &str = include_str!("../assets/food_menu.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The definition file could not be read.
    Read { path: PathBuf, reason: String },
    /// The definition is not valid JSON of the expected shape.
    Parse(String),
    /// Two categories share a name.
    DuplicateCategory(String),
    /// An item name appears more than once, in the same or in different categories.
    DuplicateItem {
        item: String,
        first_category: String,
        second_category: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Read { path, reason } => {
                write!(f, "catalog read failed for '{}': {reason}", path.display())
            }
            CatalogError::Parse(msg) => write!(f, "catalog definition is malformed: {msg}"),
            CatalogError::DuplicateCategory(name) => {
                write!(f, "catalog defines category '{name}' more than once")
            }
            CatalogError::DuplicateItem {
                item,
                first_category,
                second_category,
            } => write!(
                f,
                "catalog item '{item}' appears in '{first_category}' and again in '{second_category}'"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Where the definition comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    Path(PathBuf),
}

impl CatalogSource {
    pub fn from_config(path: Option<&Path>) -> Self {
        match path {
            Some(p) => CatalogSource::Path(p.to_path_buf()),
            None => CatalogSource::Bundled,
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => f.write_str("bundled"),
            CatalogSource::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Result of [`load_or_empty`]: always a usable catalog, plus the failure if there was one.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub error: Option<CatalogError>,
}

pub fn parse_definition(raw: &str) -> Result<Vec<CategoryDef>, CatalogError> {
    // Strip UTF-8 BOM; hand-edited definitions on Windows often carry one.
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))
}

impl Catalog {
    /// Apply defaults and reject duplicate category or item names.
    pub fn from_definition(defs: Vec<CategoryDef>, default_limit: u32) -> Result<Self, CatalogError> {
        let mut seen_categories: HashSet<String> = HashSet::new();
        let mut item_owner: HashMap<String, String> = HashMap::new();
        let mut categories = Vec::with_capacity(defs.len());

        for def in defs {
            if !seen_categories.insert(def.category.clone()) {
                return Err(CatalogError::DuplicateCategory(def.category));
            }
            for item in &def.items {
                if let Some(first) = item_owner.insert(item.name.clone(), def.category.clone()) {
                    return Err(CatalogError::DuplicateItem {
                        item: item.name.clone(),
                        first_category: first,
                        second_category: def.category.clone(),
                    });
                }
            }
            categories.push(Category::from_def(def, default_limit));
        }

        Ok(Catalog::from_categories(categories))
    }
}

pub fn load_catalog_str(raw: &str, default_limit: u32) -> Result<Catalog, CatalogError> {
    let defs = parse_definition(raw)?;
    Catalog::from_definition(defs, default_limit)
}

pub fn load_catalog_path(path: impl AsRef<Path>, default_limit: u32) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    load_catalog_str(&raw, default_limit)
}

pub fn load_bundled(default_limit: u32) -> Result<Catalog, CatalogError> {
    load_catalog_str(BUNDLED_CATALOG_JSON, default_limit)
}

/// Load from `source`; on failure log it and fall back to an empty catalog.
pub fn load_or_empty(source: &CatalogSource, default_limit: u32) -> CatalogLoad {
    let res = match source {
        CatalogSource::Bundled => load_bundled(default_limit),
        CatalogSource::Path(p) => load_catalog_path(p, default_limit),
    };

    match res {
        Ok(catalog) => {
            info!(
                source = %source,
                categories = catalog.categories().len(),
                items = catalog.item_count(),
                "catalog loaded"
            );
            CatalogLoad {
                catalog,
                error: None,
            }
        }
        Err(e) => {
            error!(source = %source, error = %e, "failed to load catalog");
            CatalogLoad {
                catalog: Catalog::empty(),
                error: Some(e),
            }
        }
    }
}
