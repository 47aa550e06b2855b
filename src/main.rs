use anyhow::Result;
use clap::{Parser, Subcommand};
use mealdeck_mealplan::MAX_WEEK_OFFSET;
use mealdeck_shared::mealplan::Category;

mod cli;

/// mealdeck - weekly meal planning board
#[derive(Parser)]
#[command(name = "mealdeck")]
#[command(about = "Plan a week of meals from random attribute cards", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Week offset relative to the current week
    #[arg(
        long,
        global = true,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-MAX_WEEK_OFFSET..=MAX_WEEK_OFFSET)
    )]
    week: i64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board of the selected week
    Show,
    /// Toggle the lock of a card
    Lock {
        #[arg(allow_hyphen_values = true)]
        card_id: String,
    },
    /// Redraw a whole card, or a single attribute of it
    Redraw {
        #[arg(allow_hyphen_values = true)]
        card_id: String,

        #[arg(long)]
        category: Option<Category>,
    },
    /// Move unlocked cards between their days
    Shuffle,
    /// Redraw every unlocked card
    DrawAll,
    /// Compose a recipe title for a card
    Title {
        #[arg(allow_hyphen_values = true)]
        card_id: String,
    },
    /// Suggest a cooking method for a card
    Suggest {
        #[arg(allow_hyphen_values = true)]
        card_id: String,
    },
    /// Manage the attribute catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// List the weeks that have a stored plan
    Weeks,
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// Print every category
    List,
    /// Add a value to a category
    Add { category: Category, value: String },
    /// Remove a value from a category
    Remove { category: Category, value: String },
    /// Replace all values of a category
    Set {
        category: Category,
        values: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealdeck::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealdeck::observability::init_observability(
        "mealdeck",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    use cli::board::Action;

    match cli.command {
        Commands::Show => cli::board::run(config, cli.week, Action::Show).await,
        Commands::Lock { card_id } => {
            cli::board::run(config, cli.week, Action::Lock(card_id)).await
        }
        Commands::Redraw { card_id, category } => {
            cli::board::run(config, cli.week, Action::Redraw { card_id, category }).await
        }
        Commands::Shuffle => cli::board::run(config, cli.week, Action::Shuffle).await,
        Commands::DrawAll => cli::board::run(config, cli.week, Action::DrawAll).await,
        Commands::Title { card_id } => {
            cli::board::run(config, cli.week, Action::Title(card_id)).await
        }
        Commands::Suggest { card_id } => {
            cli::board::run(config, cli.week, Action::Suggest(card_id)).await
        }
        Commands::Catalog { command } => {
            let action = match command {
                CatalogCommands::List => cli::catalog::Action::List,
                CatalogCommands::Add { category, value } => {
                    cli::catalog::Action::Add(category, value)
                }
                CatalogCommands::Remove { category, value } => {
                    cli::catalog::Action::Remove(category, value)
                }
                CatalogCommands::Set { category, values } => {
                    cli::catalog::Action::Set(category, values)
                }
            };
            cli::catalog::run(config, action).await
        }
        Commands::Weeks => cli::board::weeks(config).await,
        Commands::Migrate => cli::database::migrate(config).await,
        Commands::Reset => cli::database::reset(config).await,
    }
}
