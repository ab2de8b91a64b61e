//! CLI entry point for hypr-keybind-sheet
//!
//! Provides a command-line interface for listing, searching and
//! live-viewing the keybinds cheat sheet.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::*;
use hypr_keybind_sheet::config::{
    ConfigWatcher, KeybindSource, DEFAULT_KEYBINDS_PATH, KEYBINDS_PATH_ENV,
};
use hypr_keybind_sheet::core::{group_by_category, Keybind, KeybindFilter};
use hypr_keybind_sheet::logging;
use std::time::Duration;

/// How long `watch` blocks before checking again when nothing changes.
const WATCH_POLL: Duration = Duration::from_secs(60);

#[derive(Parser)]
#[command(name = "hypr-keybind-sheet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the keybinds file
    #[arg(short, long, global = true, env = KEYBINDS_PATH_ENV, default_value = DEFAULT_KEYBINDS_PATH)]
    config: String,

    /// Fail if the file cannot be read instead of showing an empty sheet
    #[arg(long, global = true)]
    strict: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List keybindings grouped by category
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the matching keybindings as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories with their keybinding counts
    Categories {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the sheet and refresh it whenever the file is saved
    Watch {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Only show keybindings whose description, key or modifiers contain this text
    #[arg(short, long)]
    search: Option<String>,

    /// Only show one category ("All" shows every category)
    #[arg(short = 'C', long)]
    category: Option<String>,

    /// Hide keybindings that are commented out
    #[arg(long)]
    hide_commented: bool,
}

impl FilterArgs {
    fn to_filter(&self) -> KeybindFilter {
        KeybindFilter {
            query: self.search.clone(),
            category: self.category.clone(),
            include_commented: !self.hide_commented,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let source = KeybindSource::from_user_path(&cli.config);

    match cli.command {
        Commands::List { filter, json } => list_keybinds(&source, cli.strict, &filter, json)?,
        Commands::Categories { json } => list_categories(&source, cli.strict, json)?,
        Commands::Watch { filter } => watch_keybinds(&source, cli.strict, &filter)?,
    }

    Ok(())
}

/// Reads the keybinds, honouring `--strict`
fn load_keybinds(source: &KeybindSource, strict: bool) -> anyhow::Result<Vec<Keybind>> {
    if strict {
        source
            .read()
            .with_context(|| format!("Failed to read {}", source.path().display()))
    } else {
        Ok(source.load())
    }
}

/// List all keybindings matching the filter
fn list_keybinds(
    source: &KeybindSource,
    strict: bool,
    filter: &FilterArgs,
    json: bool,
) -> anyhow::Result<()> {
    let keybinds = load_keybinds(source, strict)?;
    let matches = filter.to_filter().apply(&keybinds);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Keybindings from: {}\n", source.path().display()).bold()
    );
    print_sheet(&matches);
    println!(
        "\n{} Showing {} of {} bindings",
        "✓".green(),
        matches.len(),
        keybinds.len()
    );

    Ok(())
}

/// List categories in file order with counts
fn list_categories(source: &KeybindSource, strict: bool, json: bool) -> anyhow::Result<()> {
    let keybinds = load_keybinds(source, strict)?;
    let groups = group_by_category(&keybinds);

    if json {
        let summary: Vec<_> = groups
            .iter()
            .map(|g| serde_json::json!({ "category": g.category, "count": g.keybinds.len() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for group in &groups {
        println!(
            "{} {}",
            group.category.bold(),
            format!("({})", group.keybinds.len()).dimmed()
        );
    }

    Ok(())
}

/// Print the sheet, then reprint after every change to the file
fn watch_keybinds(source: &KeybindSource, strict: bool, filter: &FilterArgs) -> anyhow::Result<()> {
    let watcher = ConfigWatcher::new(source.path())
        .with_context(|| format!("Failed to watch {}", source.path().display()))?;

    let mut keybinds = load_keybinds(source, strict)?;

    loop {
        let matches = filter.to_filter().apply(&keybinds);

        println!(
            "{} {} ({} bindings)\n",
            "→".cyan(),
            source.path().display(),
            matches.len()
        );
        print_sheet(&matches);
        println!("\n{}", "Watching for changes, Ctrl+C to quit".dimmed());

        // Fresh parse on every change; nothing is cached between refreshes.
        // In strict mode a failed read keeps the last good sheet on screen.
        loop {
            while !watcher.wait_for_change(WATCH_POLL)? {}
            tracing::info!("keybinds file changed, reloading");

            if !strict {
                keybinds = source.load();
                break;
            }
            if source.refresh(&mut keybinds) {
                break;
            }
        }
        println!("\n{}\n", "↻ Reloaded".yellow());
    }
}

fn print_sheet(keybinds: &[&Keybind]) {
    if keybinds.is_empty() {
        println!("{}", "No keybindings found.".yellow());
        return;
    }

    for group in group_by_category(keybinds.iter().copied()) {
        println!("{}", group.category.bold().underline());

        for keybind in group.keybinds {
            print_keybind(keybind);
        }
        println!();
    }
}

fn print_keybind(keybind: &Keybind) {
    let combo = if keybind.modifiers.is_empty() {
        keybind.key.clone()
    } else {
        format!("{} + {}", keybind.modifiers, keybind.key)
    };
    let combo = format!("{:<28}", combo);

    if keybind.is_commented {
        println!(
            "  {} {} {}",
            combo.dimmed(),
            keybind.description.dimmed(),
            "(disabled)".dimmed().italic()
        );
        return;
    }

    if keybind.description == keybind.action {
        println!("  {} {}", combo.cyan().bold(), keybind.description.green());
    } else {
        println!(
            "  {} {} {}",
            combo.cyan().bold(),
            keybind.description,
            format!("[{}]", keybind.action).dimmed()
        );
    }
}
