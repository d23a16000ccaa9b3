use std::collections::HashMap;
use std::fmt;

use menu_catalog::Catalog;
use menu_schemas::OrderLine;
use tracing::{debug, info};

use crate::control::QuantityControl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    UnknownItem(String),
    UnknownCategory(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownItem(name) => write!(f, "no menu item named '{name}'"),
            FormError::UnknownCategory(name) => write!(f, "no menu category named '{name}'"),
        }
    }
}

impl std::error::Error for FormError {}

/// Outcome of one [`FormModel::set_quantity`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityChange {
    pub item: String,
    pub category: String,
    pub previous: u32,
    pub requested: u32,
    /// What the control actually holds after clamping.
    pub applied: u32,
    /// Category allowance left after the recompute.
    pub remaining: u32,
}

impl QuantityChange {
    pub fn was_clamped(&self) -> bool {
        self.applied != self.requested
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryView<'a> {
    pub name: &'a str,
    pub limit: u32,
    pub used: u32,
    pub remaining: u32,
}

#[derive(Debug, Clone)]
struct ItemSlot {
    name: String,
    category: usize,
    control: QuantityControl,
}

#[derive(Debug, Clone)]
struct CategorySlot {
    name: String,
    limit: u32,
    /// Indices into `FormModel::items`, in catalog order.
    items: Vec<usize>,
    remaining: u32,
}

/// Selection state for every item of a catalog.
///
/// Items are stored in catalog order, so snapshots are stable.
#[derive(Debug, Clone, Default)]
pub struct FormModel {
    categories: Vec<CategorySlot>,
    items: Vec<ItemSlot>,
    item_index: HashMap<String, usize>,
    category_index: HashMap<String, usize>,
}

impl FormModel {
    /// One allowance counter per category seeded to its limit, one control per
    /// item bounded to `[0, limit]`.
    pub fn initialize(catalog: &Catalog) -> Self {
        let mut form = FormModel::default();

        for category in catalog.categories() {
            let c_idx = form.categories.len();
            let mut slot = CategorySlot {
                name: category.name.clone(),
                limit: category.limit,
                items: Vec::with_capacity(category.items.len()),
                remaining: category.limit,
            };

            for item in &category.items {
                let i_idx = form.items.len();
                form.items.push(ItemSlot {
                    name: item.name.clone(),
                    category: c_idx,
                    control: QuantityControl::new(category.limit),
                });
                form.item_index.insert(item.name.clone(), i_idx);
                slot.items.push(i_idx);
            }

            form.category_index.insert(category.name.clone(), c_idx);
            form.categories.push(slot);
        }

        debug!(
            categories = form.categories.len(),
            items = form.items.len(),
            "order form initialized"
        );
        form
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Set `item` to `qty`, clamped to its control's bounds, then recompute its category.
    pub fn set_quantity(&mut self, item: &str, qty: u32) -> Result<QuantityChange, FormError> {
        let i_idx = *self
            .item_index
            .get(item)
            .ok_or_else(|| FormError::UnknownItem(item.to_string()))?;

        let slot = &mut self.items[i_idx];
        let previous = slot.control.value();
        let applied = slot.control.set(qty);
        let c_idx = slot.category;

        let remaining = self.recompute(c_idx);

        let change = QuantityChange {
            item: item.to_string(),
            category: self.categories[c_idx].name.clone(),
            previous,
            requested: qty,
            applied,
            remaining,
        };
        debug!(
            item = %change.item,
            category = %change.category,
            previous,
            requested = qty,
            applied,
            remaining,
            "quantity changed"
        );
        Ok(change)
    }

    /// Recompute a category by name; returns its remaining allowance.
    pub fn recompute_category(&mut self, category: &str) -> Result<u32, FormError> {
        let c_idx = *self
            .category_index
            .get(category)
            .ok_or_else(|| FormError::UnknownCategory(category.to_string()))?;
        Ok(self.recompute(c_idx))
    }

    fn recompute(&mut self, c_idx: usize) -> u32 {
        let cat = &self.categories[c_idx];
        let used: u32 = cat.items.iter().map(|&i| self.items[i].control.value()).sum();
        let remaining = cat.limit.saturating_sub(used);

        for &i in &cat.items {
            self.items[i].control.rebound(remaining);
        }
        self.categories[c_idx].remaining = remaining;
        remaining
    }

    /// Non-zero selections in catalog order.
    pub fn snapshot_non_zero(&self) -> Vec<OrderLine> {
        self.items
            .iter()
            .filter(|s| s.control.value() > 0)
            .map(|s| OrderLine::new(s.name.clone(), s.control.value()))
            .collect()
    }

    /// Every quantity back to 0; every category back to its full allowance.
    pub fn reset_all(&mut self) {
        for slot in &mut self.items {
            slot.control.set(0);
        }
        for c_idx in 0..self.categories.len() {
            self.recompute(c_idx);
        }
        info!("selection cleared");
    }

    pub fn quantity(&self, item: &str) -> Option<u32> {
        self.control(item).map(|c| c.value())
    }

    pub fn control(&self, item: &str) -> Option<QuantityControl> {
        self.item_index.get(item).map(|&i| self.items[i].control)
    }

    pub fn remaining(&self, category: &str) -> Option<u32> {
        self.category_index
            .get(category)
            .map(|&c| self.categories[c].remaining)
    }

    pub fn category_of(&self, item: &str) -> Option<&str> {
        self.item_index
            .get(item)
            .map(|&i| self.categories[self.items[i].category].name.as_str())
    }

    pub fn categories(&self) -> impl Iterator<Item = CategoryView<'_>> + '_ {
        self.categories.iter().map(|c| CategoryView {
            name: &c.name,
            limit: c.limit,
            used: c.limit - c.remaining,
            remaining: c.remaining,
        })
    }

    pub fn category(&self, name: &str) -> Option<CategoryView<'_>> {
        self.category_index.get(name).map(|&c| {
            let c = &self.categories[c];
            CategoryView {
                name: &c.name,
                limit: c.limit,
                used: c.limit - c.remaining,
                remaining: c.remaining,
            }
        })
    }

    /// True when every category's total is within its limit.
    pub fn within_limits(&self) -> bool {
        self.categories.iter().all(|c| {
            let used: u32 = c.items.iter().map(|&i| self.items[i].control.value()).sum();
            used <= c.limit
        })
    }
}
