use std::path::PathBuf;

use tracing::warn;

use crate::model::CatalogItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub path: PathBuf,
    /// True when the placeholder was substituted.
    pub fallback: bool,
}

/// Maps an item's image reference to a file under the assets root.
///
/// Missing or unresolvable references resolve to the placeholder. Decoding the
/// file is left to whoever displays it.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    assets_root: PathBuf,
    placeholder: String,
}

impl ImageResolver {
    pub fn new(assets_root: impl Into<PathBuf>, placeholder: impl Into<String>) -> Self {
        Self {
            assets_root: assets_root.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn placeholder_path(&self) -> PathBuf {
        self.assets_root.join(&self.placeholder)
    }

    pub fn resolve(&self, item: &CatalogItem) -> ResolvedImage {
        let wanted = match item.image.as_deref() {
            Some(r) => r,
            None => {
                return ResolvedImage {
                    path: self.placeholder_path(),
                    fallback: true,
                }
            }
        };

        let candidate = self.assets_root.join(wanted.trim_start_matches('/'));
        if candidate.is_file() {
            return ResolvedImage {
                path: candidate,
                fallback: false,
            };
        }

        warn!(item = %item.name, image = %wanted, "image not found, using fallback");
        ResolvedImage {
            path: self.placeholder_path(),
            fallback: true,
        }
    }
}
