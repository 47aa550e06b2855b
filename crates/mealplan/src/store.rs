use std::collections::BTreeMap;

use mealdeck_db::Storage;
use mealdeck_shared::mealplan::WeekPlan;
use mealdeck_shared::{AttributeCatalog, Error, Result};

pub const MEAL_PLANS_KEY: &str = "mealDeck_mealPlans";
pub const ATTRIBUTES_KEY: &str = "mealDeck_attributes";

/// Week plans keyed by offset, kept as raw JSON so one damaged week does not
/// hide the others.
type StoredPlans = BTreeMap<i64, serde_json::Value>;

/// Reads and writes the two persisted records. Reads never fail: missing or
/// malformed data comes back as `None`. Writes log and swallow their errors.
pub struct MealPlanStore<S> {
    storage: S,
}

impl<S: Storage> MealPlanStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Fails only when the backend cannot be read. Unparseable content counts
    /// as no plans so the next save starts a fresh map.
    async fn read_plans(&self) -> Result<StoredPlans> {
        let raw = self
            .storage
            .get(MEAL_PLANS_KEY)
            .await
            .map_err(|e| Error::PersistenceRead(e.to_string()))?;

        let Some(raw) = raw else {
            return Ok(StoredPlans::new());
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(key = MEAL_PLANS_KEY, "stored meal plans are unreadable: {err}");
            StoredPlans::new()
        }))
    }

    async fn plans_or_empty(&self) -> StoredPlans {
        self.read_plans().await.unwrap_or_else(|err| {
            tracing::warn!(key = MEAL_PLANS_KEY, "{err}");
            StoredPlans::new()
        })
    }

    pub async fn load_plan(&self, week_offset: i64) -> Option<WeekPlan> {
        let value = self.plans_or_empty().await.remove(&week_offset)?;

        match serde_json::from_value::<WeekPlan>(value) {
            Ok(plan) if plan.is_well_formed() => Some(plan),
            Ok(plan) => {
                tracing::warn!(
                    week_offset,
                    cards = plan.cards().len(),
                    "stored week plan is malformed, ignoring"
                );
                None
            }
            Err(err) => {
                tracing::warn!(week_offset, "stored week plan is unreadable: {err}");
                None
            }
        }
    }

    /// Offsets that currently have a stored plan.
    pub async fn stored_weeks(&self) -> Vec<i64> {
        self.plans_or_empty().await.into_keys().collect()
    }

    /// Rewrites the plan map with this week replaced. Nothing is written when
    /// the current map could not be read, so other weeks are never dropped.
    pub async fn try_save_plan(&self, week_offset: i64, plan: &WeekPlan) -> Result<()> {
        let mut plans = self.read_plans().await?;
        let value =
            serde_json::to_value(plan).map_err(|e| Error::PersistenceWrite(e.to_string()))?;
        plans.insert(week_offset, value);

        let raw =
            serde_json::to_string(&plans).map_err(|e| Error::PersistenceWrite(e.to_string()))?;
        self.storage
            .set(MEAL_PLANS_KEY, &raw)
            .await
            .map_err(|e| Error::PersistenceWrite(e.to_string()))
    }

    pub async fn save_plan(&self, week_offset: i64, plan: &WeekPlan) {
        if let Err(err) = self.try_save_plan(week_offset, plan).await {
            tracing::error!(week_offset, "error saving meal plans: {err}");
        }
    }

    pub async fn load_catalog(&self) -> Option<AttributeCatalog> {
        let raw = match self.storage.get(ATTRIBUTES_KEY).await {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(key = ATTRIBUTES_KEY, "error retrieving attributes: {err}");
                return None;
            }
        };

        serde_json::from_str(&raw)
            .inspect_err(|err| {
                tracing::warn!(key = ATTRIBUTES_KEY, "stored attributes are unreadable: {err}")
            })
            .ok()
    }

    pub async fn try_save_catalog(&self, catalog: &AttributeCatalog) -> Result<()> {
        let raw =
            serde_json::to_string(catalog).map_err(|e| Error::PersistenceWrite(e.to_string()))?;
        self.storage
            .set(ATTRIBUTES_KEY, &raw)
            .await
            .map_err(|e| Error::PersistenceWrite(e.to_string()))
    }

    pub async fn save_catalog(&self, catalog: &AttributeCatalog) {
        if let Err(err) = self.try_save_catalog(catalog).await {
            tracing::error!("error saving attributes: {err}");
        }
    }
}
