// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the storefront TUI runs. Subcommands:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Print config file location
// - catalog: List cats, optionally filtered, without starting the TUI
// - ask: One question to PurrBot, answer printed to stdout

use crate::assistant::{ChatAssistant, Submission};
use crate::catalog::{self, BreedFilter, Cat};
use crate::config::{Config, LoggingConfig, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Sonu's Cat Shop - adopt a cat from your terminal
#[derive(Parser)]
#[command(name = "purrshop")]
#[command(version = VERSION)]
#[command(about = "Terminal storefront for Sonu's Cat Pet Shop", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// List available cats
    Catalog {
        /// Match against name or description (case-insensitive)
        #[arg(long, short)]
        search: Option<String>,

        /// Only show one breed, e.g. "Maine Coon"
        #[arg(long, short)]
        breed: Option<String>,
    },

    /// Ask PurrBot one question without starting the TUI
    Ask {
        /// The question, e.g. "a calm cat for a small flat?"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub async fn handle_cli() -> bool {
    let cli = Cli::parse();

    // Subcommands log straight to stdout; the TUI sets up its own logging
    let _guard = cli
        .command
        .as_ref()
        .and_then(|_| crate::logging::init(&LoggingConfig::default(), None));

    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else {
                // No flag provided, show help
                println!("Usage: purrshop config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            true
        }
        Some(Commands::Catalog { search, breed }) => {
            handle_catalog(search.as_deref(), breed.as_deref());
            true
        }
        Some(Commands::Ask { question }) => {
            handle_ask(&question.join(" ")).await;
            true
        }
        None => false, // No subcommand, run the storefront
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!(
        "storage_path = {:?}",
        config.storage_path.display().to_string()
    );
    println!();
    println!("[assistant]");
    println!("model = {:?}", config.assistant.model);
    println!("api_base = {:?}", config.assistant.api_base);
    println!("temperature = {}", config.assistant.temperature);
    println!(
        "# api_key: {}",
        if config.assistant.has_credential() {
            "set"
        } else {
            "not set (PurrBot offline)"
        }
    );
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

async fn handle_ask(question: &str) {
    let config = Config::from_env();
    let mut assistant =
        ChatAssistant::new(crate::build_generator(&config), config.assistant.settings());

    match ask_once(&mut assistant, question).await {
        Some(reply) => println!("{}", reply),
        None => {
            eprintln!("Error: Nothing to ask");
            std::process::exit(2);
        }
    }
}

/// Run one exchange and return PurrBot's reply, `None` for blank input
async fn ask_once(assistant: &mut ChatAssistant, question: &str) -> Option<String> {
    if let Submission::Ignored = assistant.ask(question).await {
        return None;
    }
    assistant.transcript().last().map(|turn| turn.text.clone())
}

fn handle_catalog(search: Option<&str>, breed: Option<&str>) {
    let filter = match breed {
        None => BreedFilter::All,
        Some(name) => match BreedFilter::parse(name) {
            Some(filter) => filter,
            None => {
                eprintln!("Error: Unknown breed {:?}", name);
                eprintln!(
                    "Known breeds: {}",
                    catalog::breeds()
                        .iter()
                        .map(|b| b.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                std::process::exit(2);
            }
        },
    };

    let cats = catalog::filter(search.unwrap_or(""), filter);
    print!("{}", format_catalog(&cats));
}

/// Plain-text listing, one cat per line
fn format_catalog(cats: &[&Cat]) -> String {
    if cats.is_empty() {
        return "No cats found matching your criteria.\n".to_string();
    }

    let mut out = String::new();
    for cat in cats {
        out.push_str(&format!(
            "{:<4} {:<8} {:<18} {:>3} mo  {:<6}  ${}\n",
            cat.id,
            cat.name,
            cat.breed.as_str(),
            cat.age,
            cat.gender,
            cat.price
        ));
    }
    out.push_str(&format!(
        "\n{} cat{}\n",
        cats.len(),
        if cats.len() == 1 { "" } else { "s" }
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::tests::ScriptedGenerator;
    use crate::assistant::{AssistantSettings, TextGenerator, OFFLINE_MESSAGE};
    use clap::CommandFactory;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_catalog_filters() {
        let cli = Cli::try_parse_from(["purrshop", "catalog", "--breed", "Sphynx", "-s", "cleo"])
            .unwrap();
        match cli.command {
            Some(Commands::Catalog { search, breed }) => {
                assert_eq!(search.as_deref(), Some("cleo"));
                assert_eq!(breed.as_deref(), Some("Sphynx"));
            }
            _ => panic!("expected catalog command"),
        }
    }

    #[test]
    fn parses_multi_word_question() {
        let cli = Cli::try_parse_from(["purrshop", "ask", "a", "calm", "cat?"]).unwrap();
        match cli.command {
            Some(Commands::Ask { question }) => assert_eq!(question.join(" "), "a calm cat?"),
            _ => panic!("expected ask command"),
        }
        assert!(Cli::try_parse_from(["purrshop", "ask"]).is_err());
    }

    #[tokio::test]
    async fn ask_once_returns_reply() {
        let generator = ScriptedGenerator::new(vec![Ok("Meet Bella!".to_string())]);
        let mut assistant = ChatAssistant::new(
            Some(generator.clone() as Arc<dyn TextGenerator>),
            AssistantSettings::default(),
        );

        assert_eq!(
            ask_once(&mut assistant, "a fluffy cat?").await.as_deref(),
            Some("Meet Bella!")
        );
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
        assert_eq!(ask_once(&mut assistant, "   ").await, None);
    }

    #[tokio::test]
    async fn ask_once_offline_gives_offline_reply() {
        let mut assistant = ChatAssistant::new(None, AssistantSettings::default());
        assert_eq!(
            ask_once(&mut assistant, "hello?").await.as_deref(),
            Some(OFFLINE_MESSAGE)
        );
    }

    #[test]
    fn no_subcommand_runs_tui() {
        let cli = Cli::try_parse_from(["purrshop"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn format_lists_each_cat() {
        let cats = catalog::filter("", BreedFilter::parse("Sphynx").unwrap());
        let out = format_catalog(&cats);
        assert!(out.contains("Cleo"));
        assert!(out.ends_with("\n1 cat\n"));
    }

    #[test]
    fn format_empty_state() {
        assert_eq!(
            format_catalog(&[]),
            "No cats found matching your criteria.\n"
        );
    }
}
