// Startup module - displays banner and module loading status
//
// Printed to the plain terminal before the TUI takes over the screen, and
// echoed into the log panel so the boot sequence stays visible.

use crate::config::{Config, VERSION};
use crate::shop::Shop;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Module loading result for display
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: String,
}

/// Print the startup banner and module status
pub fn print_startup(config: &Config, shop: &Shop) {
    use colors::*;

    println!();
    println!("  {BOLD}{MAGENTA}Sonu's Cat Shop{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Find your purrfect companion{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    println!("  {DIM}Loading modules...{RESET}");
    for module in module_status(config, shop) {
        print_module_status(&module);
    }
    println!();

    if !shop.assistant().is_online() {
        println!(
            "  {YELLOW}▸{RESET} {YELLOW}PurrBot offline{RESET} {DIM}(set GEMINI_API_KEY to chat){RESET}"
        );
        println!();
    }
}

/// Status of each part of the shop
fn module_status(config: &Config, shop: &Shop) -> Vec<ModuleStatus> {
    let session = match shop.user() {
        Some(user) => format!("Signed in as {}", user.name),
        None => "No saved session".to_string(),
    };

    let assistant = if shop.assistant().is_online() {
        format!("PurrBot ({})", config.assistant.model)
    } else {
        "PurrBot (no API key)".to_string()
    };

    vec![
        ModuleStatus {
            name: "catalog",
            enabled: true, // Static, always on
            description: format!("{} cats", crate::catalog::all().len()),
        },
        ModuleStatus {
            name: "storage",
            enabled: true,
            description: storage_line(config, shop),
        },
        ModuleStatus {
            name: "session",
            enabled: shop.session().is_signed_in(),
            description: session,
        },
        ModuleStatus {
            name: "assistant",
            enabled: shop.assistant().is_online(),
            description: assistant,
        },
    ]
}

/// Store location, noting when a session record is on disk
fn storage_line(config: &Config, shop: &Shop) -> String {
    let path = config.storage_path.display();
    match shop.session().persisted() {
        Some(_) => format!("{} (session saved)", path),
        None => path.to_string(),
    }
}

/// Print a single module's status
fn print_module_status(module: &ModuleStatus) {
    use colors::*;

    let (icon, style) = if module.enabled {
        (format!("{GREEN}✓{RESET}"), "")
    } else {
        (format!("{DIM}○{RESET}"), DIM)
    };

    println!(
        "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
        module.name, module.description
    );
}

/// Print startup messages to the TUI log panel
pub fn log_startup(config: &Config, shop: &Shop) {
    tracing::info!("═══════════════════════════════");
    tracing::info!("  SONU'S CAT SHOP v{}", VERSION);
    tracing::info!("═══════════════════════════════");

    for module in module_status(config, shop) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }

    tracing::info!("Ready. Press ? for help.");
}
