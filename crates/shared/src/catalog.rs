use serde::{Deserialize, Serialize};

use crate::mealplan::Category;

pub const DEFAULT_MAX_ITEMS: usize = 20;

/// Allowed values per category, stored as `{protein, vegetable, starch, cuisine}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AttributeCatalog {
    pub protein: Vec<String>,
    pub vegetable: Vec<String>,
    pub starch: Vec<String>,
    pub cuisine: Vec<String>,
}

impl Default for AttributeCatalog {
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            protein: owned(&["Chicken", "Beef", "Fish", "Pork", "Tofu"]),
            vegetable: owned(&["Carrots", "Broccoli", "Spinach", "Asparagus"]),
            starch: owned(&["Rice", "Potatoes", "Quinoa", "Pasta"]),
            cuisine: owned(&["Asian", "Italian", "American", "Indian", "Mexican"]),
        }
    }
}

impl AttributeCatalog {
    pub fn items(&self, category: Category) -> &[String] {
        match category {
            Category::Protein => &self.protein,
            Category::Vegetable => &self.vegetable,
            Category::Starch => &self.starch,
            Category::Cuisine => &self.cuisine,
        }
    }

    fn items_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Protein => &mut self.protein,
            Category::Vegetable => &mut self.vegetable,
            Category::Starch => &mut self.starch,
            Category::Cuisine => &mut self.cuisine,
        }
    }

    pub fn contains(&self, category: Category, value: &str) -> bool {
        self.items(category).iter().any(|item| item == value)
    }

    /// Appends a trimmed value. Returns false without touching the catalog when
    /// the value is blank, already present, or the category is full.
    pub fn add(&mut self, category: Category, value: &str, max_items: usize) -> bool {
        let value = value.trim();
        if value.is_empty() || self.contains(category, value) {
            return false;
        }

        let items = self.items_mut(category);
        if items.len() >= max_items {
            return false;
        }

        items.push(value.to_owned());
        true
    }

    /// Removes the first exact match. A category may end up empty.
    pub fn remove(&mut self, category: Category, value: &str) -> bool {
        let items = self.items_mut(category);
        match items.iter().position(|item| item == value) {
            Some(pos) => {
                items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces a whole category, keeping the first occurrence of each trimmed,
    /// non-blank value up to `max_items`. Returns true if the list changed.
    pub fn replace<I, S>(&mut self, category: Category, values: I, max_items: usize) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next: Vec<String> = Vec::new();
        for value in values {
            let value = value.as_ref().trim();
            if value.is_empty() || next.iter().any(|item| item == value) {
                continue;
            }
            if next.len() >= max_items {
                break;
            }
            next.push(value.to_owned());
        }

        let items = self.items_mut(category);
        if *items == next {
            return false;
        }

        *items = next;
        true
    }
}
