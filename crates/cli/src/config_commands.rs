use {anyhow::Result, clap::Subcommand, secrecy::Secret};

use casita_config::{CasitaConfig, Severity, validate};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Validate the configuration file and report errors/warnings.
    Check {
        /// Show informational diagnostics in addition to errors and warnings.
        #[arg(long)]
        verbose: bool,
    },
    /// Print the resolved config, or a single value by dotted key.
    Get { key: Option<String> },
    /// Print the path of the config file in use.
    Path,
}

pub fn handle_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Check { verbose } => check(verbose),
        ConfigAction::Get { key } => get(key.as_deref()),
        ConfigAction::Path => {
            println!("{}", casita_config::find_or_default_config_path().display());
            Ok(())
        },
    }
}

/// ANSI color codes.
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn check(verbose: bool) -> Result<()> {
    let path = casita_config::find_or_default_config_path();
    let config_path = path.exists().then_some(path);
    let result = validate(&casita_config::discover_and_load(), config_path);

    // Print which file we're checking
    if let Some(ref path) = result.config_path {
        eprintln!("Checking {}\n", path.display());
    } else {
        eprintln!("No config file found; checking defaults.\n");
    }

    let mut shown = 0;
    for d in &result.diagnostics {
        if d.severity == Severity::Info && !verbose {
            continue;
        }

        let (color, label) = match d.severity {
            Severity::Error => (RED, "error"),
            Severity::Warning => (YELLOW, "warning"),
            Severity::Info => (CYAN, "info"),
        };

        if d.path.is_empty() {
            eprintln!("  {BOLD}{color}{label}{RESET} {}", d.message);
        } else {
            eprintln!("  {BOLD}{color}{label}{RESET} {}: {}", d.path, d.message);
        }
        shown += 1;
    }

    let errors = result.count(Severity::Error);
    let warnings = result.count(Severity::Warning);

    if shown > 0 {
        eprintln!();
    }

    if errors == 0 && warnings == 0 {
        eprintln!("No issues found.");
    } else {
        eprintln!("{errors} error(s), {warnings} warning(s)");
    }

    if errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn get(key: Option<&str>) -> Result<()> {
    let config = redacted(casita_config::discover_and_load());

    let Some(key) = key else {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    };

    let root = serde_json::to_value(&config)?;
    let mut value = &root;
    for part in key.split('.') {
        value = value
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("no config value at {key:?}"))?;
    }

    match value {
        serde_json::Value::String(s) => println!("{s}"),
        other => println!("{}", serde_json::to_string_pretty(other)?),
    }
    Ok(())
}

/// Secrets never reach stdout; the placeholder shows the value is set.
fn redacted(mut config: CasitaConfig) -> CasitaConfig {
    if config.twilio.auth_token.is_some() {
        config.twilio.auth_token = Some(Secret::new("[REDACTED]".into()));
    }
    if config.content.llm.api_key.is_some() {
        config.content.llm.api_key = Some(Secret::new("[REDACTED]".into()));
    }
    config
}
