use anyhow::Result;
use mealdeck::Config;
use mealdeck::render::render_board;
use mealdeck_db::SqliteStorage;
use mealdeck_mealplan::Planner;
use mealdeck_shared::mealplan::Category;

pub enum Action {
    Show,
    Lock(String),
    Redraw {
        card_id: String,
        category: Option<Category>,
    },
    Shuffle,
    DrawAll,
    Title(String),
    Suggest(String),
}

fn ensure_card(planner: &Planner<SqliteStorage>, card_id: &str) -> Result<()> {
    if planner.plan().find(card_id).is_none() {
        anyhow::bail!(
            "card {card_id} is not part of week {}",
            planner.week_offset()
        );
    }

    Ok(())
}

async fn apply(planner: &mut Planner<SqliteStorage>, action: Action) -> Result<()> {
    match action {
        Action::Show => {}
        Action::Lock(card_id) => {
            ensure_card(planner, &card_id)?;
            planner.toggle_lock(&card_id).await;
        }
        Action::Redraw { card_id, category } => {
            ensure_card(planner, &card_id)?;
            if planner.plan().find(&card_id).is_some_and(|card| card.is_locked) {
                tracing::warn!("card {card_id} is locked, nothing redrawn");
            }

            match category {
                Some(category) => planner.redraw_attribute(&card_id, category).await,
                None => planner.redraw_card(&card_id).await,
            }
        }
        Action::Shuffle => planner.shuffle_unlocked().await,
        Action::DrawAll => planner.draw_all_unlocked().await,
        Action::Title(card_id) => {
            ensure_card(planner, &card_id)?;
            if let Some(title) = planner.generate_title(&card_id).await {
                println!("{title}");
                println!();
            }
        }
        Action::Suggest(card_id) => {
            ensure_card(planner, &card_id)?;
            if let Some(method) = planner.suggest_cooking_method(&card_id) {
                println!("{method}");
                println!();
            }
        }
    }

    Ok(())
}

#[tracing::instrument(skip(config, action))]
pub async fn run(config: Config, week_offset: i64, action: Action) -> Result<()> {
    let mut planner = mealdeck::open_planner(&config).await?;
    planner.load_or_generate(week_offset).await?;

    apply(&mut planner, action).await?;

    print!(
        "{}",
        render_board(planner.week(), planner.week_offset(), planner.plan())
    );

    Ok(())
}

pub async fn weeks(config: Config) -> Result<()> {
    let planner = mealdeck::open_planner(&config).await?;

    let timezone = config.planner.timezone.as_deref();
    for week_offset in planner.stored_weeks().await {
        match mealdeck_mealplan::compute_week(week_offset, timezone) {
            Ok(week) => println!("{week_offset:>4}  {}", week.display_range),
            Err(err) => tracing::warn!("skipping stored week: {err}"),
        }
    }

    Ok(())
}
