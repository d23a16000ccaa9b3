use std::collections::HashMap;

use menu_catalog::{Catalog, CatalogItem, ResolvedImage};
use menu_form::{CategoryView, FormModel};
use tracing::error;

/// Text rendering of the order form: one section per category, one row per item.
///
/// An element the form cannot account for is logged and left out; the rest of
/// the form still renders.
pub fn render_form(
    catalog: &Catalog,
    form: &FormModel,
    images: &HashMap<String, ResolvedImage>,
) -> String {
    let mut out = String::new();

    for category in catalog.categories() {
        let Some(view) = form.category(&category.name) else {
            error!(category = %category.name, "category missing from order form, skipped");
            continue;
        };
        render_category(&mut out, &view);

        for item in &category.items {
            render_item(&mut out, item, &view, form, images);
        }
        out.push('\n');
    }
    out
}

fn render_category(out: &mut String, view: &CategoryView<'_>) {
    out.push_str(&format!(
        "== {} ==  limit {}  Remaining: {}\n",
        view.name, view.limit, view.remaining
    ));
}

fn render_item(
    out: &mut String,
    item: &CatalogItem,
    category: &CategoryView<'_>,
    form: &FormModel,
    images: &HashMap<String, ResolvedImage>,
) {
    let Some(control) = form.control(&item.name) else {
        error!(item = %item.name, category = category.name, "item missing from order form, skipped");
        return;
    };

    out.push_str(&format!(
        "  {:<24} {:>8}  qty {}/{}  Remaining: {}\n",
        item.name,
        item.price,
        control.value(),
        control.max(),
        category.remaining
    ));
    if !item.description.is_empty() {
        out.push_str(&format!("      {}\n", item.description));
    }
    match images.get(&item.name) {
        Some(img) if img.fallback => {
            out.push_str(&format!("      image: {} (placeholder)\n", img.path.display()));
        }
        Some(img) => out.push_str(&format!("      image: {}\n", img.path.display())),
        None => {}
    }
}
