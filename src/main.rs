use clap::Parser;
use food_diary::application::{EntryStore, Outcome, Rejection};
use food_diary::cli::{format_descriptor_list, format_entry, format_entry_list, Cli, Commands};
use food_diary::domain::{Conditions, Descriptor, DiaryEntry};
use food_diary::error::Result;
use food_diary::infrastructure::config::{resolve_home, Config};
use food_diary::infrastructure::FileSlotStore;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FOOD_DIARY_LOG";
const REJECTED_EXIT_CODE: i32 = 5;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(None) => std::process::exit(0),
        Ok(Some(rejection)) => {
            eprintln!("Not saved: {}", rejection);
            std::process::exit(REJECTED_EXIT_CODE);
        }
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// Run one command. Returns the rejection if a mutation was not applied.
fn run(cli: Cli) -> Result<Option<Rejection>> {
    let home = resolve_home(cli.dir.as_deref())?;
    let config = Config::load_from_dir(&home)?;
    let mut store = EntryStore::open(FileSlotStore::new(home), config.slot.clone());

    let Some(command) = cli.command else {
        println!("food-diary - Terminal food diary");
        println!("Use --help for usage information");
        return Ok(None);
    };

    match command {
        Commands::Add {
            food,
            feeling,
            reactions,
        } => {
            let feeling = feeling.map(|name| config.feeling(&name)).transpose()?;
            let conditions = lookup_reactions(&config, &reactions)?;
            report(store.add_entry(&food, feeling, conditions)?, "Added")
        }
        Commands::Edit {
            id,
            food,
            feeling,
            reactions,
            no_reactions,
        } => {
            let current = store.resolve(&id)?.clone();
            let food = food.unwrap_or_else(|| current.food().to_string());
            let feeling = match feeling {
                Some(name) => Some(config.feeling(&name)?),
                None => current.feeling().cloned(),
            };
            let conditions = if no_reactions {
                Conditions::new()
            } else if reactions.is_empty() {
                current.conditions().clone()
            } else {
                lookup_reactions(&config, &reactions)?
            };
            report(
                store.update_entry(current.id(), &food, feeling, conditions)?,
                "Updated",
            )
        }
        Commands::Remove { id } => {
            let id = store.resolve(&id)?.id().clone();
            report(store.remove_entry(&id)?, "Removed")
        }
        Commands::List { limit } => {
            let mut entries = store.entries_by_date_desc();
            if let Some(limit) = limit {
                entries.truncate(limit);
            }
            print!("{}", format_entry_list(&entries, &chrono::Local));
            if entries.is_empty() {
                println!();
            }
            Ok(None)
        }
        Commands::Show { id } => {
            let entry = store.resolve(&id)?;
            println!("{}", serde_json::to_string_pretty(entry)?);
            Ok(None)
        }
        Commands::Feelings => {
            print!("{}", format_descriptor_list(&config.feelings));
            Ok(None)
        }
        Commands::Reactions => {
            print!("{}", format_descriptor_list(&config.reactions));
            Ok(None)
        }
    }
}

fn lookup_reactions(config: &Config, names: &[String]) -> Result<Conditions> {
    names
        .iter()
        .map(|name| config.reaction(name))
        .collect::<Result<Vec<Descriptor>>>()
        .map(Conditions::from)
}

fn report(outcome: Outcome<DiaryEntry>, verb: &str) -> Result<Option<Rejection>> {
    match outcome {
        Outcome::Applied(entry) => {
            println!("{} {}", verb, entry.id());
            print!("{}", format_entry(&entry, &chrono::Local));
            Ok(None)
        }
        Outcome::Rejected(reason) => Ok(Some(reason)),
    }
}
