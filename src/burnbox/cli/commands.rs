//! # CLI Layer
//!
//! This module is **one possible UI client** for burnbox.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{print_config, print_created, print_document, print_messages};
use super::setup::{Cli, Commands};
use burnbox::api::{BurnApi, BurnPaths, ConfigAction};
use burnbox::config::BurnConfig;
use burnbox::error::{BurnError, Result};
use burnbox::lifecycle::Lifecycle;
use burnbox::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct AppContext {
    api: BurnApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Create {
            content,
            max_views,
            ttl_minutes,
            base_url,
        } => handle_create(
            &ctx,
            content,
            max_views.as_deref(),
            ttl_minutes.as_deref(),
            base_url.as_deref(),
        ),
        Commands::Read { id } => handle_read(&ctx, &id),
        Commands::Delete { id } => handle_delete(&ctx, &id),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Init => handle_init(&ctx),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "burnbox=debug" } else { "burnbox=warn" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "burnbox", "burnbox")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BurnError::Api("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };

    // A broken config file falls back to defaults; `burnbox config KEY VALUE` rewrites it.
    let config = BurnConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        BurnConfig::default()
    });

    let engine = Lifecycle::new(FileStore::new(&data_dir))
        .with_id_generator(config.id_generator()?)
        .with_settings(config.settings());
    let api = BurnApi::new(engine, BurnPaths::new(data_dir));

    Ok(AppContext { api })
}

fn handle_create(
    ctx: &AppContext,
    content: Option<String>,
    max_views: Option<&str>,
    ttl_minutes: Option<&str>,
    base_url: Option<&str>,
) -> Result<()> {
    let content = match content {
        Some(content) => content,
        None => read_stdin()?,
    };

    let result = ctx.api.create_document(content, max_views, ttl_minutes)?;
    if let Some(id) = &result.created {
        print_created(id, base_url);
    }
    print_messages(&result.messages);
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(BurnError::Api(
            "No content given: pass it as an argument or pipe it on stdin".to_string(),
        ));
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn handle_read(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.read_document(id)?;
    if let Some(doc) = &result.document {
        print_document(doc);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_document(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
