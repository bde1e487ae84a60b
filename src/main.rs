//! qrcode-i18n command-line tool
//!
//! Authoring and inspection helpers over the library: emit a template bundle,
//! validate a bundle file, resolve keys and inspect locale detection.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use qrcode_i18n::{
    config::Settings,
    i18n::{load_configured_bundles, HttpBundleFetcher, LocaleService, TranslationLoader, TranslationParams},
    utils::logging,
    I18nError,
};

#[derive(Debug, Parser)]
#[command(name = "qrcode-i18n", version, about = "Locale resolution for QR code scanner strings")]
struct Cli {
    /// Configuration file, extension optional
    #[arg(long, env = "QRCODE_I18N_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a template bundle for authoring a new locale
    Template,
    /// Validate a bundle file
    Validate { locale: String, file: PathBuf },
    /// Resolve a dotted key, e.g. html5QrcodeScanner.scanningStatus
    Translate {
        key: String,
        /// Locale to resolve against instead of the detected one
        #[arg(long)]
        locale: Option<String>,
        /// Placeholder value as name=value, repeatable
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Print the locale detected from the environment
    Detect,
    /// Print key counts per registered locale
    Stats,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got {}", raw))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(file) => Settings::from_file(file),
        None => Settings::new(),
    }
    .context("Failed to load settings")?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    match cli.command {
        Command::Template => {
            let template = TranslationLoader::build_template();
            println!("{}", serde_json::to_string_pretty(&template)?);
        }
        Command::Validate { locale, file } => {
            let mut loader = TranslationLoader::default();
            match loader.load_from_file(&locale, &file).await {
                Ok(bundle) => println!("{}: valid, {} keys", file.display(), bundle.key_count()),
                Err(I18nError::Validation { violations, .. }) => {
                    for violation in &violations {
                        println!("{}: {}", file.display(), violation);
                    }
                    bail!("{} schema violation(s) in {}", violations.len(), file.display());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Translate { key, locale, params } => {
            let mut service = bootstrap(&settings).await?;
            if let Some(locale) = locale {
                service.set_active_locale(&locale);
            }
            let params: TranslationParams = params.into_iter().collect();
            let params = (!params.is_empty()).then_some(&params);
            println!("{}", service.translate(&key, params));
        }
        Command::Detect => {
            let mut service = bootstrap(&settings).await?;
            println!("{}", service.detect_active_locale());
        }
        Command::Stats => {
            let mut service = bootstrap(&settings).await?;
            let stats = service.stats();
            println!("active: {}", stats.active_locale);
            for language in stats.languages {
                println!(
                    "{:<8} {:>4} keys {:>4} overrides",
                    language.code, language.key_count, language.override_count
                );
            }
        }
    }

    Ok(())
}

/// Build the service from settings: configured bundles, then detection
async fn bootstrap(settings: &Settings) -> anyhow::Result<LocaleService> {
    let fetcher = HttpBundleFetcher::new(&settings.http)?;
    let mut service =
        LocaleService::new(&settings.i18n).with_loader(TranslationLoader::new(fetcher));

    let failures = load_configured_bundles(&mut service, &settings.i18n.bundles).await;
    if !failures.is_empty() {
        warn!(count = failures.len(), "Some configured translation bundles failed to load");
    }

    if settings.i18n.detect_locale {
        let locale = service.detect_active_locale();
        info!(locale = %locale, "Active locale detected");
    }

    Ok(service)
}
