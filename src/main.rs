use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use regex::Regex;
use slugger::{Charmap, SlugOptions, Slugger};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slugger", about = "Turn text into URL-safe slugs")]
struct Cli {
    /// Text to slug; reads one input per line from stdin when omitted
    inputs: Vec<String>,

    /// JSON config applied over the defaults before any flag
    #[arg(long)]
    config: Option<PathBuf>,

    /// Delimiter placed between words
    #[arg(short, long)]
    replacement: Option<String>,

    /// Keep the original letter case
    #[arg(long)]
    keep_case: bool,

    /// Do not spell out symbols by their Unicode names
    #[arg(long)]
    no_symbols: bool,

    /// Regex deleted from every resolved character
    #[arg(long)]
    remove: Option<String>,

    /// Keep at most this many words
    #[arg(short, long)]
    limit: Option<usize>,

    /// Multi-character substitution, e.g. `--multichar '<3=love'`
    #[arg(long = "multichar", value_name = "FROM=TO")]
    multichars: Vec<String>,

    /// Extra transliteration on top of the bundled table, e.g. `--char '♞=knight'`
    #[arg(long = "char", value_name = "C=TO")]
    chars: Vec<String>,

    /// Print a JSON array instead of one slug per line
    #[arg(long)]
    json: bool,
}

fn split_pair(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=')
        .with_context(|| format!("expected FROM=TO, got `{raw}`"))
}

fn options(cli: &Cli) -> Result<SlugOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SlugOptions::from_json(&json)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => SlugOptions::default(),
    };

    if let Some(replacement) = &cli.replacement {
        options.replacement = replacement.clone();
    }
    if cli.keep_case {
        options.lower = false;
    }
    if cli.no_symbols {
        options.symbols = false;
    }
    if let Some(pattern) = &cli.remove {
        options.remove = Some(Regex::new(pattern).context("invalid --remove pattern")?);
    }
    if let Some(limit) = cli.limit {
        options.limit = std::num::NonZeroUsize::new(limit);
    }
    for raw in &cli.multichars {
        let (from, to) = split_pair(raw)?;
        options.multicharmap.insert(from.to_string(), to.to_string());
    }
    if !cli.chars.is_empty() {
        let mut extra = Vec::with_capacity(cli.chars.len());
        for raw in &cli.chars {
            let (from, to) = split_pair(raw)?;
            let mut it = from.chars();
            let (Some(c), None) = (it.next(), it.next()) else {
                bail!("--char key must be exactly one character, got `{from}`");
            };
            extra.push((c, to.to_string()));
        }
        options.charmap = match std::mem::take(&mut options.charmap) {
            Charmap::Bundled => Charmap::extended(extra),
            Charmap::Extended(mut map) => {
                map.extend(extra);
                Charmap::Extended(map)
            }
            Charmap::Custom(mut map) => {
                map.extend(extra);
                Charmap::Custom(map)
            }
        };
    }
    Ok(options)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let slugger = Slugger::new(options(&cli)?);
    debug!(options = ?slugger.options(), "slugger ready");

    let inputs: Vec<String> = if cli.inputs.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<_>>()
            .context("failed to read stdin")?
    } else {
        cli.inputs.clone()
    };

    let slugs: Vec<String> = inputs
        .iter()
        .map(|input| slugger.slug(input).into_owned())
        .collect();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.json {
        serde_json::to_writer(&mut out, &slugs)?;
        writeln!(out)?;
    } else {
        for slug in &slugs {
            writeln!(out, "{slug}")?;
        }
    }
    out.flush()?;
    Ok(())
}
