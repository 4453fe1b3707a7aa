use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use nfind::output::{self, ColorMode};
use nfind::search::{FuzzySearch, SearchConfig};
use nfind::utils::{AppConfig, get_config_path, logging};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "nfind")]
#[command(about = "Find words that look like a query, using n-gram tolerance tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text to search in
    #[arg(short, long, conflicts_with = "file")]
    string: Option<String>,

    /// File whose contents to search in
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Word to look for
    #[arg(short, long)]
    query: Option<String>,

    /// Compare n-grams without case folding
    #[arg(short, long)]
    case_sensitive: bool,

    /// Characters per n-gram
    #[arg(short)]
    n: Option<usize>,

    /// Neighbouring n-gram positions checked on each side
    #[arg(short)]
    k: Option<usize>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    out_file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, conflicts_with = "out_file")]
    json: bool,

    /// When to highlight matches
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Config file (defaults to $NFIND_CONFIG or the user config directory)
    #[arg(long = "config", global = true)]
    config_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as JSON
    Show,
    /// Write the default configuration to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = match &cli.config_file {
        Some(path) => path.clone(),
        None => get_config_path()?,
    };

    match &cli.command {
        Some(Commands::Config { action }) => handle_config_command(action, &config_path),
        None => {
            let app_config = AppConfig::load_from(&config_path)?;
            run_search(&cli, &app_config)
        }
    }
}

fn run_search(cli: &Cli, app_config: &AppConfig) -> Result<()> {
    let text = read_text(cli)?;
    let Some(query) = cli.query.as_deref() else {
        bail!("No query given; pass --query <WORD>");
    };

    let config = effective_search_config(cli, app_config);
    let searcher = FuzzySearch::new(text, config).context("Invalid search settings")?;
    let results = searcher.find(query);
    info!(query, matches = results.len(), "search finished");

    if let Some(path) = &cli.out_file {
        output::write_report_file(path, query, &results)?;
        info!(path = %path.display(), "report written");
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        let color = cli.color.unwrap_or(app_config.color);
        output::print_report(searcher.text().raw(), &results, color)?;
    }

    Ok(())
}

/// Command-line flags override the config file
fn effective_search_config(cli: &Cli, app_config: &AppConfig) -> SearchConfig {
    let mut config = app_config.search;
    if cli.case_sensitive {
        config.case_sensitive = true;
    }
    if let Some(n) = cli.n {
        config.n = n;
    }
    if let Some(k) = cli.k {
        config.k = k;
    }
    config
}

fn read_text(cli: &Cli) -> Result<String> {
    match (&cli.string, &cli.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => {
            info!(path = %path.display(), "reading text");
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read text file {}", path.display()))
        }
        (None, None) => bail!("No text given; pass --string <TEXT> or --file <PATH>"),
    }
}

fn handle_config_command(action: &ConfigAction, config_path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = AppConfig::load_from(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { force } => {
            if config_path.exists() && !force {
                println!(
                    "Config already exists at {} (use --force to overwrite)",
                    config_path.display()
                );
                return Ok(());
            }
            AppConfig::default().save_to(config_path)?;
            println!("Wrote default config to {}", config_path.display());
        }
    }

    Ok(())
}
