use super::dto::{FoodCatalogEntry, FoodView};
use super::repo;

/// Case-insensitive substring match on name. A blank query keeps everything.
pub fn search<'a>(foods: &'a [FoodCatalogEntry], query: &str) -> Vec<&'a FoodCatalogEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return foods.iter().collect();
    }
    foods
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn with_image(food: &FoodCatalogEntry) -> FoodView {
    FoodView {
        food: food.clone(),
        image: repo::image_by_id(&food.image_id).cloned(),
    }
}

#[cfg(test)]
mod catalog_tests {
    use super::*;

    fn entry(id: &str, name: &str) -> FoodCatalogEntry {
        FoodCatalogEntry {
            id: id.into(),
            name: name.into(),
            icon: "x".into(),
            quantities: vec!["100g".into()],
            image_id: format!("food-{}", id),
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let foods = vec![entry("banana", "Banana"), entry("bread", "Bread")];
        let hits = search(&foods, "ban");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Banana");

        let hits = search(&foods, "BREAD");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bread");
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let foods = vec![entry("banana", "Banana"), entry("bread", "Bread")];
        let hits = search(&foods, "  ");
        assert_eq!(hits.iter().map(|f| f.id.as_str()).collect::<Vec<_>>(), ["banana", "bread"]);
    }

    #[test]
    fn no_match_is_empty() {
        let foods = vec![entry("banana", "Banana")];
        assert!(search(&foods, "kiwi").is_empty());
    }

    #[test]
    fn with_image_resolves_from_static_catalog() {
        let banana = repo::find_by_id("banana").unwrap();
        let view = with_image(banana);
        assert_eq!(view.image.unwrap().id, "food-banana");

        let view = with_image(&entry("ghost", "Ghost"));
        assert!(view.image.is_none());
    }
}
