use std::fmt::Write;

use mealdeck_mealplan::WeekInfo;
use mealdeck_shared::AttributeCatalog;
use mealdeck_shared::mealplan::{Category, MealCard, WeekPlan};
use strum::VariantArray;

fn week_label(week_offset: i64) -> String {
    match week_offset {
        0 => "this week".to_owned(),
        1 => "next week".to_owned(),
        -1 => "last week".to_owned(),
        n if n > 0 => format!("{n} weeks ahead"),
        n => format!("{} weeks ago", -n),
    }
}

fn render_card(out: &mut String, card: &MealCard) {
    let lock = if card.is_locked { "[locked]" } else { "" };
    let _ = writeln!(out, "{:<6} {:<18} {}", card.id, card.date, lock);

    for attribute in &card.attributes {
        let _ = writeln!(out, "       {:<10} {}", attribute.category, attribute.value);
    }

    if card.has_title() {
        let _ = writeln!(out, "       -> {}", card.recipe_title);
    }
}

/// Plain-text board for one week, one block per card.
pub fn render_board(week: &WeekInfo, week_offset: i64, plan: &WeekPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}, offset {})",
        week.display_range,
        week_label(week_offset),
        week_offset
    );
    let _ = writeln!(out);

    for card in plan.cards() {
        render_card(&mut out, card);
    }

    out
}

pub fn render_catalog(catalog: &AttributeCatalog, max_items: usize) -> String {
    let mut out = String::new();

    for category in Category::VARIANTS {
        let items = catalog.items(*category);
        let _ = writeln!(
            out,
            "{} ({}/{}): {}",
            category,
            items.len(),
            max_items,
            items.join(", ")
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealdeck_mealplan::{compute_week_from, generate_week};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::date;

    fn board(week_offset: i64) -> (WeekInfo, WeekPlan) {
        let week = compute_week_from(date!(2025 - 01 - 08), week_offset).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let plan = generate_week(week_offset, &week, &AttributeCatalog::default(), &mut rng);

        (week, plan)
    }

    #[test]
    fn test_week_label() {
        assert_eq!(week_label(0), "this week");
        assert_eq!(week_label(1), "next week");
        assert_eq!(week_label(-1), "last week");
        assert_eq!(week_label(3), "3 weeks ahead");
        assert_eq!(week_label(-2), "2 weeks ago");
    }

    #[test]
    fn test_render_board() {
        let (week, mut plan) = board(0);
        plan.cards_mut()[1].is_locked = true;
        plan.cards_mut()[2].recipe_title = "Crispy Tofu with Rice".to_owned();

        let out = render_board(&week, 0, &plan);

        assert!(out.starts_with("January 5 - 11 (this week, offset 0)"));
        assert!(out.contains("0-0"));
        assert!(out.contains("Sunday, Jan 5"));
        assert!(out.contains("Saturday, Jan 11"));
        assert_eq!(out.matches("[locked]").count(), 1);
        assert!(out.contains("-> Crispy Tofu with Rice"));
        assert_eq!(out.matches("Cuisine").count(), 7);
    }

    #[test]
    fn test_render_catalog() {
        let mut catalog = AttributeCatalog::default();
        catalog.starch.clear();

        let out = render_catalog(&catalog, 20);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Protein (5/20): Chicken, Beef, Fish, Pork, Tofu");
        assert_eq!(lines[2], "Starch (0/20): ");
    }
}
