mod config;
mod shell;

use std::io::{BufRead, Write};
use std::sync::Arc;

use config::Config;
use meterbook_core::accounts::{AccountService, AccountServiceTrait};
use meterbook_storage_sqlite::accounts::AccountRepository;
use meterbook_storage_sqlite::db::{self, write_actor};
use shell::{FormShell, SaveOutcome};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::from_env();

    let service = open_store(&config);
    if service.is_none() {
        tracing::warn!("Store unavailable; entries will not be persisted this session");
    }

    let mut form = FormShell::new(service);
    run(&mut form).await;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

/// Opens the store and builds the account service.
///
/// Any failure is logged and yields `None`: the session continues with
/// every store action as a silent no-op, per the best-effort contract.
fn open_store(config: &Config) -> Option<Arc<dyn AccountServiceTrait>> {
    let db_path = match db::init(&config.data_dir) {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("Failed to open database: {}", e);
            return None;
        }
    };
    tracing::info!("Database path in use: {}", db_path);

    let pool = match db::create_pool(&db_path) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create connection pool: {}", e);
            return None;
        }
    };

    if let Err(e) = db::run_migrations(&pool) {
        tracing::error!("Failed to initialize schema: {}", e);
        return None;
    }

    let writer = write_actor::spawn_writer((*pool).clone());
    let repository = Arc::new(AccountRepository::new(pool, writer));
    Some(Arc::new(AccountService::new(repository)))
}

async fn run(form: &mut FormShell) {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Meterbook - offline account register");
    loop {
        println!();
        println!("[e]dit fields  [s]ave  [v]iew all data  [q]uit");
        let Some(command) = read_line(&mut lines, "> ") else {
            break;
        };

        match command.trim() {
            "e" | "edit" => edit_fields(form, &mut lines),
            "s" | "save" => match form.save().await {
                SaveOutcome::Saved => println!("Saved."),
                SaveOutcome::Incomplete => println!("All fields are required."),
                SaveOutcome::StoreUnavailable => println!("Store is unavailable."),
                SaveOutcome::Failed => println!("Save failed; your input was kept."),
            },
            "v" | "view" => {
                form.view_all();
                println!("{}", form.render());
            }
            "q" | "quit" => break,
            "" => {}
            other => println!("Unknown command: {other}"),
        }
    }
}

fn edit_fields(form: &mut FormShell, lines: &mut impl Iterator<Item = std::io::Result<String>>) {
    // Empty input keeps the current value.
    let draft = &mut form.draft;
    for (label, value) in [
        ("Name", &mut draft.name),
        ("Type", &mut draft.account_type),
        ("Address", &mut draft.address),
        ("Status", &mut draft.status),
        ("Area ID", &mut draft.area_id),
        ("Meter Size", &mut draft.meter_size),
        ("Meter No.", &mut draft.meter_no),
    ] {
        let prompt = format!("{} [{}]: ", label, value);
        match read_line(lines, &prompt) {
            Some(input) if !input.trim().is_empty() => *value = input.trim().to_string(),
            Some(_) => {}
            None => return,
        }
    }
}

fn read_line(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    prompt: &str,
) -> Option<String> {
    print!("{prompt}");
    let _ = std::io::stdout().flush();
    lines.next()?.ok()
}
