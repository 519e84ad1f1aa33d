use lazy_static::lazy_static;

use super::dto::{FoodCatalogEntry, PlaceholderImage};

fn food(id: &str, name: &str, icon: &str, quantities: &[&str]) -> FoodCatalogEntry {
    FoodCatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        quantities: quantities.iter().map(|q| q.to_string()).collect(),
        image_id: format!("food-{}", id),
    }
}

fn image(id: &str, description: &str, hint: &str) -> PlaceholderImage {
    PlaceholderImage {
        id: format!("food-{}", id),
        description: description.to_string(),
        image_url: format!("https://picsum.photos/seed/{}/600/400", id),
        image_hint: hint.to_string(),
    }
}

lazy_static! {
    static ref FOODS: Vec<FoodCatalogEntry> = vec![
        food("apple", "Apple", "apple", &["1 piece", "100g", "1 cup sliced"]),
        food("banana", "Banana", "banana", &["1 piece", "100g", "1 cup sliced"]),
        food("bread", "Bread", "croissant", &["1 slice", "2 slices", "100g"]),
        food("rice", "Rice", "wheat", &["1 cup cooked", "100g", "1 plate"]),
        food("chicken-breast", "Chicken Breast", "drumstick", &["100g", "1 piece", "200g"]),
        food("egg", "Egg", "egg", &["1 piece", "2 pieces", "3 pieces"]),
        food("oatmeal", "Oatmeal", "soup", &["1 bowl", "50g", "100g"]),
        food("salmon", "Salmon", "fish", &["100g", "1 fillet", "200g"]),
        food("broccoli", "Broccoli", "salad", &["1 cup", "100g", "200g"]),
        food("pizza", "Pizza", "pizza", &["1 slice", "2 slices", "1 plate"]),
        food("milk", "Milk", "milk", &["1 glass", "250ml", "500ml"]),
        food("almonds", "Almonds", "nut", &["10 pieces", "28g", "100g"]),
        food("avocado", "Avocado", "leaf", &["1 piece", "half", "100g"]),
        food("yogurt", "Greek Yogurt", "cup-soda", &["1 cup", "150g", "100g"]),
    ];
    static ref IMAGES: Vec<PlaceholderImage> = vec![
        image("apple", "A red apple", "red apple"),
        image("banana", "A ripe banana", "banana fruit"),
        image("bread", "Sliced bread loaf", "bread loaf"),
        image("rice", "A bowl of white rice", "rice bowl"),
        image("chicken-breast", "Grilled chicken breast", "grilled chicken"),
        image("egg", "Boiled eggs", "boiled egg"),
        image("oatmeal", "A bowl of oatmeal", "oatmeal bowl"),
        image("salmon", "Salmon fillet", "salmon fillet"),
        image("broccoli", "Fresh broccoli", "broccoli"),
        image("pizza", "A slice of pizza", "pizza slice"),
        image("milk", "A glass of milk", "milk glass"),
        image("almonds", "A handful of almonds", "almonds"),
        image("avocado", "Halved avocado", "avocado"),
        image("yogurt", "Greek yogurt in a bowl", "yogurt bowl"),
    ];
}

pub fn all() -> &'static [FoodCatalogEntry] {
    &FOODS
}

pub fn find_by_id(id: &str) -> Option<&'static FoodCatalogEntry> {
    FOODS.iter().find(|f| f.id == id)
}

pub fn image_by_id(image_id: &str) -> Option<&'static PlaceholderImage> {
    IMAGES.iter().find(|i| i.id == image_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique_and_quantities_present() {
        let ids: HashSet<_> = all().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), all().len());
        assert!(all().iter().all(|f| !f.quantities.is_empty()));
    }

    #[test]
    fn every_food_has_an_image() {
        for f in all() {
            assert!(image_by_id(&f.image_id).is_some(), "no image for {}", f.id);
        }
    }
}
