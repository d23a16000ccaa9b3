use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use menu_catalog::{load_or_empty, Catalog, CatalogSource, ImageResolver, ResolvedImage};
use menu_config::MenuConfig;
use menu_form::{FormError, FormModel, QuantityChange};
use menu_history::{ExportError, ExportReport, OrderHistory, PlaceOutcome};
use tracing::{error, info};

use crate::notice::{Notice, Notifier};
use crate::view::render_form;

/// The whole application state: one catalog, one form over it, one history.
///
/// Owned by the presentation layer and driven through `&mut self`. Every
/// method leaves the desk usable, whatever happened.
pub struct OrderDesk<N: Notifier> {
    config: MenuConfig,
    catalog: Catalog,
    images: HashMap<String, ResolvedImage>,
    form: FormModel,
    history: OrderHistory,
    notifier: N,
}

impl<N: Notifier> OrderDesk<N> {
    /// Load the catalog named by `config` and build the form over it.
    ///
    /// A catalog that cannot be loaded leaves the desk open with an empty form
    /// and raises a notice. Only an unusable timestamp format is an error.
    pub fn open(config: MenuConfig, notifier: N) -> Result<Self> {
        let source = CatalogSource::from_config(config.catalog_path.as_deref());
        let load = load_or_empty(&source, config.default_limit);

        let mut desk = Self::with_catalog(config, load.catalog, notifier)?;
        if load.error.is_some() {
            desk.raise(Notice::catalog_load_failed());
        }
        Ok(desk)
    }

    pub fn with_catalog(config: MenuConfig, catalog: Catalog, notifier: N) -> Result<Self> {
        let history = OrderHistory::new(&config.timestamp_format)
            .context("order.timestamp_format is not a usable strftime pattern")?;

        let resolver = ImageResolver::new(
            config.assets_root.clone(),
            config.placeholder_image.clone(),
        );
        let images = catalog
            .categories()
            .iter()
            .flat_map(|c| c.items.iter())
            .map(|item| (item.name.clone(), resolver.resolve(item)))
            .collect();

        let form = FormModel::initialize(&catalog);
        Ok(Self {
            config,
            catalog,
            images,
            form,
            history,
            notifier,
        })
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn image(&self, item: &str) -> Option<&ResolvedImage> {
        self.images.get(item)
    }

    pub fn set_quantity(&mut self, item: &str, qty: u32) -> Result<QuantityChange, FormError> {
        self.form.set_quantity(item, qty)
    }

    /// Clear every selection without ordering.
    pub fn clear(&mut self) {
        self.form.reset_all();
    }

    pub fn place_order(&mut self) -> PlaceOutcome {
        self.place_order_at(Local::now().naive_local())
    }

    /// Record the current non-zero selections as one order, then reset the form.
    ///
    /// An empty selection is refused with a notice; neither history nor form change.
    pub fn place_order_at(&mut self, at: NaiveDateTime) -> PlaceOutcome {
        let lines = self.form.snapshot_non_zero();
        let outcome = self.history.place_at(lines, at);
        match outcome {
            PlaceOutcome::Placed { .. } => {
                self.form.reset_all();
                self.raise(Notice::order_placed());
            }
            PlaceOutcome::NothingToOrder => self.raise(Notice::nothing_to_order()),
        }
        outcome
    }

    pub fn history_view(&self) -> String {
        self.history.render()
    }

    pub fn form_view(&self) -> String {
        render_form(&self.catalog, &self.form, &self.images)
    }

    pub fn default_export_path(&self) -> PathBuf {
        PathBuf::from(&self.config.export_file_name)
    }

    /// Export the history to `path`; the outcome is also raised as a notice.
    pub fn export(&mut self, path: impl AsRef<Path>) -> Result<ExportReport, ExportError> {
        let path = path.as_ref();
        let result = self.history.export(path);
        match &result {
            Ok(report) => {
                let shown =
                    std::path::absolute(&report.path).unwrap_or_else(|_| report.path.clone());
                info!(
                    path = %shown.display(),
                    records = report.records,
                    lines = report.lines,
                    "order history exported"
                );
                self.raise(Notice::export_succeeded(&shown));
            }
            Err(ExportError::EmptyHistory) => self.raise(Notice::nothing_to_export()),
            Err(e) => {
                error!(path = %path.display(), error = %e, "order history export failed");
                self.raise(Notice::export_failed());
            }
        }
        result
    }

    pub fn about(&mut self) {
        self.raise(Notice::about(env!("CARGO_PKG_VERSION")));
    }

    fn raise(&mut self, notice: Notice) {
        info!(title = %notice.title, message = %notice.message, "notice raised");
        self.notifier.notify(notice);
    }
}
