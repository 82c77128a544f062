use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use cast_core::{CastId, CastIn, CastStore};
use cast_settings::CastSettings;
use cast_store::{Database, SqliteCastStore};
use cast_telemetry::TelemetryConfig;

#[derive(Parser, Debug)]
#[command(name = "cast", version, about = "Manage cast members in a local SQLite store")]
struct Cli {
    /// Database file (overrides settings and CAST_DB_PATH).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Settings file (defaults to $CAST_HOME/settings.json).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert a cast member and print its id.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        nationality: String,
    },
    /// Print one cast member by id.
    Get { id: CastId },
    /// Print every cast member.
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings_file = cli.settings.clone().unwrap_or_else(cast_settings::settings_path);
    let mut settings: CastSettings = cast_settings::load_settings_from_path(&settings_file)
        .with_context(|| format!("loading settings from {}", settings_file.display()))?;
    if let Some(db) = cli.db.clone() {
        settings.database.path = db;
    }

    cast_telemetry::init_telemetry(&TelemetryConfig {
        log_level: settings.logging.level.clone(),
        module_levels: Vec::new(),
        json: settings.logging.json,
    })?;

    let db_path = &settings.database.path;
    let db = Database::open(db_path)
        .with_context(|| format!("opening database {}", db_path.display()))?;
    let store = SqliteCastStore::new(db);

    let output = run(&store, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run<S: CastStore>(store: &S, command: Command) -> anyhow::Result<serde_json::Value> {
    match command {
        Command::Add { name, nationality } => {
            let id = store.add_cast(CastIn::new(name, nationality)).await?;
            tracing::info!(cast_id = %id, "cast added");
            Ok(serde_json::json!({ "id": id }))
        }
        Command::Get { id } => match store.get_cast(id).await? {
            Some(cast) => Ok(serde_json::to_value(cast)?),
            None => bail!("cast {id} not found"),
        },
        Command::List => Ok(serde_json::to_value(store.get_all_casts().await?)?),
    }
}
