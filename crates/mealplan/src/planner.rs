use std::collections::HashMap;

use mealdeck_db::Storage;
use mealdeck_shared::mealplan::{Category, MealCard, WeekPlan};
use mealdeck_shared::{AttributeCatalog, DEFAULT_MAX_ITEMS, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use time::Date;

use crate::{MealPlanStore, WeekInfo};

/// How the plan of a week offset was obtained during this session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanState {
    Unloaded,
    LoadedPersisted,
    LoadedGenerated,
}

#[derive(Clone, Debug)]
pub struct PlannerOptions {
    /// Per-category catalog cap.
    pub max_items: usize,
    /// IANA timezone used to decide what "today" is.
    pub timezone: Option<String>,
    /// Store generated titles on the card instead of only returning them.
    pub cache_titles: bool,
    /// Pins "today" instead of reading the clock.
    pub today: Option<Date>,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            timezone: None,
            cache_titles: false,
            today: None,
        }
    }
}

/// Owns the catalog and the plan of the week being viewed. Every mutation
/// that changes something is written back to the store before returning.
pub struct Planner<S> {
    store: MealPlanStore<S>,
    options: PlannerOptions,
    rng: StdRng,
    catalog: AttributeCatalog,
    week_offset: i64,
    week: WeekInfo,
    plan: WeekPlan,
    states: HashMap<i64, PlanState>,
}

impl<S: Storage> Planner<S> {
    pub async fn open(storage: S, options: PlannerOptions) -> Result<Self> {
        Self::open_with_rng(storage, options, StdRng::from_os_rng()).await
    }

    /// Loads the catalog (or the defaults) and enters the current week.
    pub async fn open_with_rng(
        storage: S,
        options: PlannerOptions,
        mut rng: StdRng,
    ) -> Result<Self> {
        let store = MealPlanStore::new(storage);
        let catalog = match store.load_catalog().await {
            Some(catalog) => catalog,
            None => {
                let catalog = AttributeCatalog::default();
                store.save_catalog(&catalog).await;
                catalog
            }
        };

        let (week, plan, state) =
            fetch_week(&store, &catalog, &mut rng, resolve_today(&options), 0).await?;

        Ok(Self {
            store,
            options,
            rng,
            catalog,
            week_offset: 0,
            week,
            plan,
            states: HashMap::from([(0, state)]),
        })
    }

    pub fn catalog(&self) -> &AttributeCatalog {
        &self.catalog
    }

    pub fn week_offset(&self) -> i64 {
        self.week_offset
    }

    pub fn week(&self) -> &WeekInfo {
        &self.week
    }

    pub fn plan(&self) -> &WeekPlan {
        &self.plan
    }

    pub fn plan_state(&self, week_offset: i64) -> PlanState {
        self.states
            .get(&week_offset)
            .copied()
            .unwrap_or(PlanState::Unloaded)
    }

    pub async fn stored_weeks(&self) -> Vec<i64> {
        self.store.stored_weeks().await
    }

    async fn persist(&self) {
        self.store.save_plan(self.week_offset, &self.plan).await;
    }

    #[tracing::instrument(skip(self))]
    async fn enter_week(&mut self, week_offset: i64) -> Result<()> {
        let today = resolve_today(&self.options);
        let (week, plan, state) =
            fetch_week(&self.store, &self.catalog, &mut self.rng, today, week_offset).await?;

        self.week_offset = week_offset;
        self.week = week;
        self.plan = plan;
        self.states.insert(week_offset, state);

        Ok(())
    }

    /// Switches the active week. Re-selecting the active week keeps the
    /// in-memory plan, which stays authoritative even when a write failed.
    /// An out-of-range offset leaves the active week untouched.
    pub async fn load_or_generate(&mut self, week_offset: i64) -> Result<&WeekPlan> {
        if week_offset != self.week_offset {
            self.enter_week(week_offset).await?;
        }

        Ok(&self.plan)
    }

    pub async fn previous_week(&mut self) -> Result<&WeekPlan> {
        self.load_or_generate(self.week_offset - 1).await
    }

    pub async fn next_week(&mut self) -> Result<&WeekPlan> {
        self.load_or_generate(self.week_offset + 1).await
    }

    pub async fn add_item(&mut self, category: Category, value: &str) -> &AttributeCatalog {
        if self.catalog.add(category, value, self.options.max_items) {
            self.store.save_catalog(&self.catalog).await;
        }

        &self.catalog
    }

    pub async fn remove_item(&mut self, category: Category, value: &str) -> &AttributeCatalog {
        if self.catalog.remove(category, value) {
            self.store.save_catalog(&self.catalog).await;
        }

        &self.catalog
    }

    pub async fn set_category<I, V>(&mut self, category: Category, values: I) -> &AttributeCatalog
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        if self
            .catalog
            .replace(category, values, self.options.max_items)
        {
            self.store.save_catalog(&self.catalog).await;
        }

        &self.catalog
    }

    pub async fn toggle_lock(&mut self, card_id: &str) {
        let Some(card) = self.plan.find_mut(card_id) else {
            return;
        };

        card.is_locked = !card.is_locked;
        tracing::debug!(card_id, locked = card.is_locked, "lock toggled");
        self.persist().await;
    }

    fn unlocked_card_mut(&mut self, card_id: &str) -> Option<&mut MealCard> {
        self.plan.find_mut(card_id).filter(|card| !card.is_locked)
    }

    pub async fn redraw_attribute(&mut self, card_id: &str, category: Category) {
        let value = crate::sample_or_placeholder(&self.catalog, category, &mut self.rng);
        let Some(card) = self.unlocked_card_mut(card_id) else {
            return;
        };

        card.set_attribute(category, value);
        card.recipe_title.clear();
        self.persist().await;
    }

    pub async fn redraw_card(&mut self, card_id: &str) {
        let attributes = crate::generate_attributes(&self.catalog, &mut self.rng);
        let Some(card) = self.unlocked_card_mut(card_id) else {
            return;
        };

        card.attributes = attributes;
        card.recipe_title.clear();
        self.persist().await;
    }

    /// Permutes unlocked cards among their own slots. Locked cards keep their
    /// index; no card's contents change.
    pub async fn shuffle_unlocked(&mut self) {
        let slots: Vec<usize> = self
            .plan
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.is_locked)
            .map(|(i, _)| i)
            .collect();

        if slots.len() < 2 {
            return;
        }

        let mut order = slots.clone();
        order.shuffle(&mut self.rng);

        let original = self.plan.cards().to_vec();
        let cards = self.plan.cards_mut();
        for (slot, from) in slots.into_iter().zip(order) {
            cards[slot] = original[from].clone();
        }

        self.persist().await;
    }

    pub async fn draw_all_unlocked(&mut self) {
        let mut changed = false;
        for i in 0..self.plan.cards().len() {
            if self.plan.cards()[i].is_locked {
                continue;
            }

            let attributes = crate::generate_attributes(&self.catalog, &mut self.rng);
            let card = &mut self.plan.cards_mut()[i];
            card.attributes = attributes;
            card.recipe_title.clear();
            changed = true;
        }

        if changed {
            self.persist().await;
        }
    }

    /// Composes a title for the card. The title is only written to the card
    /// when title caching is enabled.
    pub async fn generate_title(&mut self, card_id: &str) -> Option<String> {
        let attributes = self.plan.find(card_id)?.attributes.clone();
        let title = crate::compose_title(&attributes, &mut self.rng);

        if self.options.cache_titles {
            if let Some(card) = self.plan.find_mut(card_id) {
                card.recipe_title = title.clone();
            }
            self.persist().await;
        }

        Some(title)
    }

    pub fn suggest_cooking_method(&mut self, card_id: &str) -> Option<&'static str> {
        let card = self.plan.find(card_id)?;
        Some(crate::suggest_cooking_method(&card.attributes, &mut self.rng))
    }
}

fn resolve_today(options: &PlannerOptions) -> Date {
    options
        .today
        .unwrap_or_else(|| crate::today(options.timezone.as_deref()))
}

async fn fetch_week<S: Storage>(
    store: &MealPlanStore<S>,
    catalog: &AttributeCatalog,
    rng: &mut StdRng,
    today: Date,
    week_offset: i64,
) -> Result<(WeekInfo, WeekPlan, PlanState)> {
    let week = crate::compute_week_from(today, week_offset)?;

    let (plan, state) = match store.load_plan(week_offset).await {
        Some(plan) => (plan, PlanState::LoadedPersisted),
        None => {
            let plan = crate::generate_week(week_offset, &week, catalog, rng);
            store.save_plan(week_offset, &plan).await;
            (plan, PlanState::LoadedGenerated)
        }
    };

    tracing::debug!(week_offset, ?state, range = %week.display_range, "week entered");

    Ok((week, plan, state))
}
