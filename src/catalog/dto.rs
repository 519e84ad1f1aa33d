use serde::{Deserialize, Serialize};

/// A selectable food in the static catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodCatalogEntry {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub quantities: Vec<String>,
    pub image_id: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderImage {
    pub id: String,
    pub description: String,
    pub image_url: String,
    pub image_hint: String,
}

/// Catalog entry with its image resolved, as returned to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodView {
    #[serde(flatten)]
    pub food: FoodCatalogEntry,
    pub image: Option<PlaceholderImage>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}
