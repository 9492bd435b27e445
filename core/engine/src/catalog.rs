//! FILENAME: core/engine/src/catalog.rs
//! PURPOSE: The fixed set of item types a ticket may request.
//! CONTEXT: The pivot never consults this list; column order there comes from
//! the data. The catalog only gates what the form accepts.

use serde::{Deserialize, Serialize};

/// Item types offered by the support desk out of the box.
pub const DEFAULT_ITEM_TYPES: &[&str] = &[
    "Mouse Dell",
    "Mouse Logitech",
    "Mouse Multilazer",
    "Teclado Dell",
    "Teclado Multilazer",
    "Headset Jabra",
    "Headset Logitech",
    "Pilhas AA",
    "Pilhas AAA",
    "Carregador de notebook Dell Type C",
    "Carregador de notebook Lenovo Type C",
    "Carregador de notebook Dell 3420",
    "Carregador de notebook Dell 7490",
    "Carregador de MacBook",
    "Dockstation Prata",
    "Dockstation Preta",
    "Cabo de Rede",
    "Cabo de Energia",
    "Cabo HDMI",
    "Monitor Dell 24 polegadas",
    "Monitor Lenovo 23 polegadas",
];

/// Header of the trailing totals column of the pivot. An item type with this
/// name would collide with it, so no catalog may contain it.
pub const TOTALS_COLUMN: &str = "Totals";

/// Ordered list of known item types.
///
/// Serialized as a plain list of names. Deserializing goes through
/// [`ItemCatalog::new`], so names loaded from config are cleaned the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ItemCatalog {
    types: Vec<String>,
}

impl ItemCatalog {
    /// Builds a catalog, keeping the first occurrence of each name.
    /// Blank names and the reserved [`TOTALS_COLUMN`] name are dropped.
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in types {
            let name = name.into().trim().to_string();
            if name.is_empty() || name == TOTALS_COLUMN || unique.contains(&name) {
                continue;
            }
            unique.push(name);
        }
        ItemCatalog { types: unique }
    }

    pub fn contains(&self, item_type: &str) -> bool {
        self.types.iter().any(|t| t == item_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.types.clone()
    }
}

impl From<Vec<String>> for ItemCatalog {
    fn from(types: Vec<String>) -> Self {
        ItemCatalog::new(types)
    }
}

impl From<ItemCatalog> for Vec<String> {
    fn from(catalog: ItemCatalog) -> Self {
        catalog.types
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        ItemCatalog::new(DEFAULT_ITEM_TYPES.iter().copied())
    }
}
