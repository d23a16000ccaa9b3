use menu_schemas::{CategoryDef, ItemDef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: String,
    pub description: String,
    /// Display string, shown as-is.
    pub price: String,
    /// Reference relative to the assets root. Empty strings are normalized to `None`.
    pub image: Option<String>,
}

impl From<ItemDef> for CatalogItem {
    fn from(d: ItemDef) -> Self {
        Self {
            name: d.name,
            description: d.description,
            price: d.price,
            image: d.image.filter(|s| !s.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    /// Maximum total quantity across all items of this category.
    pub limit: u32,
    pub items: Vec<CatalogItem>,
}

impl Category {
    pub(crate) fn from_def(d: CategoryDef, default_limit: u32) -> Self {
        Self {
            name: d.category,
            limit: d.limit.unwrap_or(default_limit),
            items: d.items.into_iter().map(CatalogItem::from).collect(),
        }
    }

    pub fn item(&self, name: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.name == name)
    }
}

/// Ordered categories, fixed after load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category owning `item`, together with the item itself.
    pub fn find_item(&self, item: &str) -> Option<(&Category, &CatalogItem)> {
        self.categories
            .iter()
            .find_map(|c| c.item(item).map(|i| (c, i)))
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}
