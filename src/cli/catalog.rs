use anyhow::Result;
use mealdeck::Config;
use mealdeck::render::render_catalog;
use mealdeck_shared::mealplan::Category;

pub enum Action {
    List,
    Add(Category, String),
    Remove(Category, String),
    Set(Category, Vec<String>),
}

pub async fn run(config: Config, action: Action) -> Result<()> {
    let mut planner = mealdeck::open_planner(&config).await?;
    let max_items = config.planner.max_items;

    match action {
        Action::List => {}
        Action::Add(category, value) => {
            let before = planner.catalog().items(category).len();
            if planner.add_item(category, &value).await.items(category).len() == before {
                tracing::warn!(
                    "{value:?} not added to {category}: blank, duplicate or category full"
                );
            }
        }
        Action::Remove(category, value) => {
            if !planner.catalog().contains(category, &value) {
                tracing::warn!("{value:?} is not in {category}");
            }
            planner.remove_item(category, &value).await;
        }
        Action::Set(category, values) => {
            planner.set_category(category, values).await;
        }
    }

    print!("{}", render_catalog(planner.catalog(), max_items));

    Ok(())
}
