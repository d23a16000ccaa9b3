//! menu-catalog
//!
//! Loads the static catalog definition (categories with an ordering limit and
//! their items) into an immutable [`Catalog`].
//!
//! Loading never aborts the application: [`load_or_empty`] logs the failure,
//! hands the error back for the caller to show, and yields an empty catalog.

mod image;
mod loader;
mod model;

pub use image::{ImageResolver, ResolvedImage};
pub use loader::{
    load_bundled, load_catalog_path, load_catalog_str, load_or_empty, parse_definition,
    CatalogError, CatalogLoad, CatalogSource, BUNDLED_CATALOG_JSON,
};
pub use model::{Catalog, CatalogItem, Category};
