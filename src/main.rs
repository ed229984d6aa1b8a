use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use xiaoliuren::config::{Config, OutputFormat};
use xiaoliuren::i18n::{self, Lang, Method};
use xiaoliuren::{calendar, divination, logger, render, reveal};

#[derive(Parser, Debug)]
#[command(name = "xiaoliuren", version, about = "Xiao Liu Ren (小六壬) divination")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Display language: zh or en
    #[arg(long, global = true)]
    lang: Option<Lang>,
    /// Print the reading as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Replay the three counting legs before the result
    #[arg(long, global = true)]
    animate: bool,
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Divine from a local date and time
    Date {
        /// YYYY-MM-DDTHH:MM[:SS]; defaults to now
        at: Option<String>,
    },
    /// Divine from three integers
    Numbers {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        #[arg(allow_hyphen_values = true)]
        c: String,
    },
    /// Divine from a text, e.g. 柳叶
    Text { text: String },
    /// Divine for a life event: marriage, wealth, health, legal or travel
    Event {
        kind: String,
        /// YYYY-MM-DDTHH:MM[:SS]; defaults to now
        at: Option<String>,
    },
    /// Show the palace at an index (wraps around)
    Palace {
        #[arg(allow_hyphen_values = true)]
        index: String,
    },
}

fn timestamp(at: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    match at {
        Some(s) => Ok(calendar::parse_datetime(s)?),
        None => Ok(Local::now().naive_local()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(lang) = cli.lang {
        config.lang = lang;
    }
    if cli.json {
        config.format = OutputFormat::Json;
    }
    if cli.animate {
        config.animation.enabled = true;
    }
    tracing::debug!(?config, "effective configuration");

    let (result, method) = match &cli.command {
        Commands::Date { at } => (
            divination::calculate_by_date(timestamp(at.as_deref())?)?,
            Method::Date,
        ),
        Commands::Numbers { a, b, c } => {
            let (a, b, c) = (
                divination::parse_number(a)?,
                divination::parse_number(b)?,
                divination::parse_number(c)?,
            );
            (divination::calculate_by_numbers(a, b, c), Method::Number)
        }
        Commands::Text { text } => (divination::calculate_by_text(text), Method::Text),
        Commands::Event { kind, at } => {
            match kind.parse() {
                Ok(event) => tracing::info!("{}", i18n::event_label(config.lang, event)),
                Err(reason) => tracing::warn!("{reason}, counting from Da An"),
            }
            (
                divination::calculate_by_event(kind, timestamp(at.as_deref())?)?,
                Method::Event,
            )
        }
        Commands::Palace { index } => {
            let palace = xiaoliuren::get_palace(divination::parse_number(index)?);
            match config.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(palace)?),
                OutputFormat::Text => {
                    let text = i18n::palace_text(config.lang, palace.palace);
                    println!(
                        "{} {} ({}, {})",
                        palace.palace.index(),
                        text.name,
                        palace.element,
                        palace.direction
                    );
                    println!("\"{}\"", text.meaning);
                }
            }
            return Ok(());
        }
    };

    let mut stdout = io::stdout().lock();
    if config.animation.enabled && config.format == OutputFormat::Text {
        let lang = config.lang;
        writeln!(stdout, "{}", i18n::ui(lang).calculating)?;
        reveal::play(
            &mut stdout,
            result.path(),
            &config.animation.timing,
            |stage| render::stage_label(lang, stage),
            |palace| i18n::palace_name(lang, palace),
        )?;
        writeln!(stdout)?;
    }
    match config.format {
        OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string_pretty(&result)?)?,
        OutputFormat::Text => write!(stdout, "{}", render::report(&result, method, config.lang))?,
    }
    Ok(())
}
