//! sitelen - command-line front end for the glyph input engine
//!
//! Usage:
//!   sitelen lookup ali
//!   sitelen simulate --script keys.txt
//!   sitelen table --format json --output glyphs.json
//!
//! A key script has one key per line: `<key> [timestamp_ms] [shift]`.
//! Keys are DOM-style names (`a`, `[`, `Space`, `ArrowUp`, `Tab`, ...).
//! Without a timestamp a key lands `--step-ms` after the previous one.
//! Blank lines and lines starting with `#` are ignored.

use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use libsitelen::{FieldContext, GlyphRegistry, InputController, SitelenConfig};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "sitelen")]
#[command(about = "Type sitelen pona glyphs from toki pona words")]
struct Args {
    /// TOML config file (chord window, space, glyph table, ...)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the glyphs whose word starts with a prefix
    Lookup {
        prefix: String,

        /// Print the suggestion list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a key script through an input field and print the result
    Simulate {
        /// Script file (defaults to stdin)
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Gap between keys without an explicit timestamp
        #[arg(long, default_value_t = 500)]
        step_ms: u64,

        /// Print the field after every key instead of only at the end
        #[arg(long)]
        verbose: bool,
    },

    /// Dump the active glyph table
    Table {
        /// Output format: toml or json
        #[arg(short, long, default_value = "toml")]
        format: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// One parsed line of a key script.
#[derive(Debug, PartialEq, Eq)]
struct ScriptKey {
    key: String,
    timestamp_ms: Option<u64>,
    shift: bool,
}

fn parse_script_line(line: &str) -> anyhow::Result<Option<ScriptKey>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let key = match parts.next() {
        Some(key) => key.to_string(),
        None => return Ok(None),
    };
    let mut timestamp_ms = None;
    let mut shift = false;
    for part in parts {
        if part == "shift" {
            shift = true;
        } else {
            let ms = part
                .parse::<u64>()
                .with_context(|| format!("bad timestamp '{}' for key '{}'", part, key))?;
            timestamp_ms = Some(ms);
        }
    }
    Ok(Some(ScriptKey {
        key,
        timestamp_ms,
        shift,
    }))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => SitelenConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SitelenConfig::default(),
    };
    let registry = config
        .load_registry()
        .context("failed to load glyph table")?;
    debug!(glyphs = registry.len(), "registry ready");

    match args.command {
        Command::Lookup { prefix, json } => lookup(&registry, &prefix, json),
        Command::Simulate {
            script,
            step_ms,
            verbose,
        } => simulate(registry, config, script, step_ms, verbose),
        Command::Table { format, output } => table(&registry, &format, output),
    }
}

fn lookup(registry: &GlyphRegistry, prefix: &str, json: bool) -> anyhow::Result<()> {
    let matches = registry.find_matches(prefix);
    if json {
        let forms: Vec<String> = matches.iter().flat_map(|g| g.display_forms()).collect();
        println!("{}", serde_json::to_string_pretty(&forms)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("  → (no glyphs for '{}')", prefix);
    }
    for glyph in matches {
        let mut line = format!(
            "{:<10} U+{:X} {}",
            glyph.word(),
            u32::from(glyph.codepoint()),
            glyph.glyph_string()
        );
        if let Some(variant) = glyph.variant_string() {
            line.push_str(&format!(" {}", variant));
        }
        if glyph.is_longable() {
            line.push_str(" (longable)");
        }
        println!("{}", line);
    }
    Ok(())
}

fn simulate(
    registry: Arc<GlyphRegistry>,
    config: SitelenConfig,
    script: Option<PathBuf>,
    step_ms: u64,
    verbose: bool,
) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = match &script {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut field = InputController::with_config(registry, config.into_base());
    let mut now = 0u64;
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(step) =
            parse_script_line(&line).with_context(|| format!("script line {}", number + 1))?
        else {
            continue;
        };
        now = step.timestamp_ms.unwrap_or(now + step_ms);
        field.type_key(&step.key, step.shift, now);
        if verbose {
            print_context(&field.context())?;
        }
    }

    if !verbose {
        print_context(&field.context())?;
    }
    Ok(())
}

fn print_context(context: &FieldContext) -> anyhow::Result<()> {
    println!("{}", context.to_json()?);
    Ok(())
}

fn table(registry: &GlyphRegistry, format: &str, output: Option<PathBuf>) -> anyhow::Result<()> {
    let content = match format {
        "toml" => registry.to_toml_string()?,
        "json" => registry.to_json_string()?,
        _ => bail!("Unsupported format: {}. Use 'toml' or 'json'", format),
    };

    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        print!("{}", content);
    }
    Ok(())
}
