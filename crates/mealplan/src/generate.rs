use mealdeck_shared::mealplan::{Category, MealAttribute, MealCard, PLACEHOLDER_VALUE, WeekPlan};
use mealdeck_shared::{AttributeCatalog, Error, Result};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::WeekInfo;

/// Draws one value of `category` uniformly at random.
pub fn sample<R: Rng + ?Sized>(
    catalog: &AttributeCatalog,
    category: Category,
    rng: &mut R,
) -> Result<String> {
    catalog
        .items(category)
        .choose(rng)
        .cloned()
        .ok_or(Error::EmptyCategory(category))
}

/// Like [`sample`] but an empty category yields the placeholder value so the
/// rest of the card can still be drawn.
pub fn sample_or_placeholder<R: Rng + ?Sized>(
    catalog: &AttributeCatalog,
    category: Category,
    rng: &mut R,
) -> String {
    sample(catalog, category, rng).unwrap_or_else(|err| {
        tracing::warn!(%category, "{err}, using placeholder");
        PLACEHOLDER_VALUE.to_owned()
    })
}

pub fn generate_attributes<R: Rng + ?Sized>(
    catalog: &AttributeCatalog,
    rng: &mut R,
) -> [MealAttribute; 4] {
    [
        Category::Protein,
        Category::Vegetable,
        Category::Starch,
        Category::Cuisine,
    ]
    .map(|category| MealAttribute::new(category, sample_or_placeholder(catalog, category, rng)))
}

pub fn generate_card<R: Rng + ?Sized>(
    week_offset: i64,
    day_index: usize,
    day_name: &str,
    display_date: &str,
    catalog: &AttributeCatalog,
    rng: &mut R,
) -> MealCard {
    MealCard {
        id: MealCard::card_id(week_offset, day_index),
        date: format!("{day_name}, {display_date}"),
        display_date: display_date.to_owned(),
        attributes: generate_attributes(catalog, rng),
        is_locked: false,
        recipe_title: String::new(),
    }
}

pub fn generate_week<R: Rng + ?Sized>(
    week_offset: i64,
    week: &WeekInfo,
    catalog: &AttributeCatalog,
    rng: &mut R,
) -> WeekPlan {
    let cards = week
        .days
        .iter()
        .enumerate()
        .map(|(i, day)| generate_card(week_offset, i, &day.name, &day.display_date, catalog, rng))
        .collect();

    WeekPlan::new(cards)
}
