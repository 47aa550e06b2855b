use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Value used in place of a draw from an empty category.
pub const PLACEHOLDER_VALUE: &str = "none";

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Protein,
    Vegetable,
    Starch,
    Cuisine,
}

impl Category {
    /// Position of the category inside a card's attribute list.
    pub fn index(self) -> usize {
        match self {
            Category::Protein => 0,
            Category::Vegetable => 1,
            Category::Starch => 2,
            Category::Cuisine => 3,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MealAttribute {
    pub category: Category,
    pub value: String,
}

impl MealAttribute {
    pub fn new(category: Category, value: impl Into<String>) -> Self {
        Self {
            category,
            value: value.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MealCard {
    pub id: String,
    pub date: String,
    pub display_date: String,
    pub attributes: [MealAttribute; 4],
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub recipe_title: String,
}

impl MealCard {
    pub fn card_id(week_offset: i64, day_index: usize) -> String {
        format!("{week_offset}-{day_index}")
    }

    pub fn attribute(&self, category: Category) -> &str {
        &self.attributes[category.index()].value
    }

    pub fn set_attribute(&mut self, category: Category, value: impl Into<String>) {
        self.attributes[category.index()].value = value.into();
    }

    pub fn has_title(&self) -> bool {
        !self.recipe_title.is_empty()
    }

    /// Attributes are stored one per category in the fixed Protein, Vegetable,
    /// Starch, Cuisine order.
    pub fn is_well_formed(&self) -> bool {
        self.attributes
            .iter()
            .zip(Category::VARIANTS)
            .all(|(attr, category)| attr.category == *category)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct WeekPlan {
    cards: Vec<MealCard>,
}

impl WeekPlan {
    pub const DAYS: usize = 7;

    pub fn new(cards: Vec<MealCard>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[MealCard] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [MealCard] {
        &mut self.cards
    }

    pub fn find(&self, id: &str) -> Option<&MealCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut MealCard> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    pub fn is_well_formed(&self) -> bool {
        self.cards.len() == Self::DAYS && self.cards.iter().all(MealCard::is_well_formed)
    }
}
