//! Artisan Locale - Command Line Entry Point
//!
//! Usage: `artisan-locale [LANGUAGE] [KEY...]`
//!
//! Restores the persisted language, optionally switches to `LANGUAGE`, then
//! prints the document root state and the requested translations.

use std::io::Write;

use anyhow::Result;
use artisan_locale::constants::LOG_FILE_PREFIX;
use artisan_locale::helpers::get_or_create_data_dir;
use artisan_locale::services::open_preferences;
use artisan_locale::{Dictionary, DocumentRoot, Language, Localization};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const SHOWCASE_KEYS: &[&str] = &[
    "nav.home",
    "nav.services",
    "nav.artisans",
    "hero.title",
    "createService.title",
    "requestService.title",
];

fn main() -> Result<()> {
    let _guard = init_tracing();

    let mut args = std::env::args().skip(1);
    let language = args.next();
    let keys: Vec<String> = args.collect();

    let preferences = open_preferences();
    let mut l10n = Localization::new(Dictionary::builtin(), preferences, DocumentRoot::new());

    if let Some(code) = language.as_deref() {
        l10n.set_language_code(code);
    }

    let mut out = std::io::stdout().lock();

    let active = l10n.active_language();
    writeln!(out, "language:  {} ({})", active.code(), active.display_name())?;
    writeln!(out, "direction: {}", l10n.direction())?;
    for (name, value) in l10n.root().attributes() {
        writeln!(out, "root[{name}] = {value}")?;
    }
    writeln!(
        out,
        "available: {}",
        Language::ALL
            .iter()
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(", ")
    )?;

    let untranslated = l10n.dictionary().untranslated(active);
    if !untranslated.is_empty() {
        tracing::warn!(count = untranslated.len(), language = %active, "Untranslated keys in dictionary");
    }

    writeln!(out)?;
    if keys.is_empty() {
        for key in SHOWCASE_KEYS {
            writeln!(out, "{key} = {}", l10n.translate(key))?;
        }
    } else {
        for key in &keys {
            writeln!(out, "{key} = {}", l10n.translate(key))?;
        }
    }

    Ok(())
}

/// Console logging on stderr plus a daily log file in the data directory
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_timer(LocalTime::rfc_3339())
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}
