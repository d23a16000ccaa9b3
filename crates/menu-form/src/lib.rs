//! menu-form
//!
//! Selection state for the order form: one bounded quantity control per item
//! and one remaining-allowance counter per category.
//!
//! Invariant: for every category, the sum of its item quantities never
//! exceeds the category limit. Every quantity change goes through
//! [`FormModel::set_quantity`], which recomputes the owning category once and
//! re-bounds the controls so no single further edit can break the invariant.
//!
//! Deterministic, pure logic. No IO, no time.

mod control;
mod model;

pub use control::QuantityControl;
pub use model::{CategoryView, FormError, FormModel, QuantityChange};
