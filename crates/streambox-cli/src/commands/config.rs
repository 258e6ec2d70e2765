use super::AppContext;
use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;
use streambox_config::{CatalogSourceKind, Config};

pub fn run_config(ctx: &AppContext, cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(ctx, output),
        ConfigCommands::Init { force } => init_config(ctx, force, output),
    }
}

fn show_config(ctx: &AppContext, output: &Output) -> Result<()> {
    let config = &ctx.config;
    let config_file = ctx.paths.config_file();
    let storage_dir = config.storage_dir(&ctx.paths);

    let source = match config.catalog.source {
        CatalogSourceKind::Builtin => "builtin",
        CatalogSourceKind::File => "file",
        CatalogSourceKind::Http => "http",
    };
    let location = match config.catalog.source {
        CatalogSourceKind::Builtin => format!("bundled ({} ms simulated delay)", config.catalog.simulated_delay_ms),
        CatalogSourceKind::File => config.catalog.path.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        CatalogSourceKind::Http => config.catalog.url.clone().unwrap_or_default(),
    };

    if !output.is_human() {
        output.json(&json!({
            "type": "config",
            "config_file": config_file.display().to_string(),
            "config_file_exists": config_file.exists(),
            "storage_dir": storage_dir.display().to_string(),
            "ephemeral": ctx.ephemeral,
            "catalog": { "source": source, "location": location },
            "logging": {
                "level": config.logging.level,
                "json": config.logging.json,
                "file": config.logging.file.as_ref().map(|p| p.display().to_string()),
            },
        }));
        return Ok(());
    }

    if !config_file.exists() {
        output.warn(format!("No config file at {}; using defaults", config_file.display()));
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Config File"), Cell::new(config_file.display().to_string())]);
    table.add_row(vec![
        Cell::new("Storage"),
        Cell::new(if ctx.ephemeral { "in-memory (--ephemeral)".to_string() } else { storage_dir.display().to_string() }),
    ]);
    table.add_row(vec![Cell::new("Catalog Source").fg(comfy_table::Color::Cyan), Cell::new(source)]);
    table.add_row(vec![Cell::new("Catalog Location"), Cell::new(location)]);
    table.add_row(vec![Cell::new("Log Level"), Cell::new(&config.logging.level)]);
    table.add_row(vec![
        Cell::new("Log File"),
        Cell::new(config.logging.file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "stderr".to_string())),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    output.println(table.to_string());
    Ok(())
}

fn init_config(ctx: &AppContext, force: bool, output: &Output) -> Result<()> {
    let config_file = ctx.paths.config_file();
    if config_file.exists() && !force {
        return Err(eyre!(
            "Config file already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
    }

    ctx.paths.ensure_directories()
        .map_err(|e| eyre!("Failed to create StreamBox directories: {}", e))?;
    Config::default().save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default config to {}", config_file.display()));
    Ok(())
}
