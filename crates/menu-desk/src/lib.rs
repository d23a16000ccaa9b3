//! menu-desk
//!
//! Wires the catalog, the order form and the order history into one owned
//! [`OrderDesk`] that a presentation layer drives with discrete user actions.
//!
//! Every user-visible outcome (order placed, nothing to export, load failure,
//! ...) is raised as a [`Notice`] through the [`Notifier`] seam. Nothing here
//! is fatal: failures degrade to a notice plus a no-op.

mod desk;
mod notice;
mod view;

pub use desk::OrderDesk;
pub use notice::{Notice, NoticeKind, Notifier};
pub use view::render_form;
