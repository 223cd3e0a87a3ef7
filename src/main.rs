use clap::{Parser, Subcommand};
use measure_tagger::config::TaggerConfig;
use measure_tagger::text::TextTagger;
use measure_tagger::token::add_tokens;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "measure-tagger")]
#[command(about = "Tag measurement expressions for text normalization", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Unit lexicon (raw spelling <TAB> unit name), overrides the config
    #[arg(short, long, global = true)]
    lexicon: Option<PathBuf>,

    /// Keep every reading instead of the highest-priority one
    #[arg(long, global = true)]
    non_deterministic: bool,

    /// Print JSON instead of token text
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single span (e.g. "-12kg")
    Classify {
        /// Span to classify
        span: String,
    },

    /// Tag every measure in a text
    Tag {
        /// Text to tag (default: stdin)
        text: Option<String>,
    },

    /// List the unit lexicon
    Units,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let tagger = match build_tagger(&cli) {
        Ok(tagger) => tagger,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        Commands::Classify { span } => classify_span(&tagger, span, cli.json),
        Commands::Tag { text } => tag_text(&tagger, text.as_deref(), cli.json),
        Commands::Units => list_units(&tagger, cli.json),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn build_tagger(cli: &Cli) -> Result<TextTagger, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => TaggerConfig::load_from_file(path)?,
        None => TaggerConfig::default(),
    };

    if cli.non_deterministic {
        config.deterministic = false;
    }
    if let Some(lexicon) = &cli.lexicon {
        config.lexicon = Some(lexicon.clone());
    }

    Ok(TextTagger::from_config(&config)?)
}

/// Returns false when the span is not a measure
fn classify_span(
    tagger: &TextTagger,
    span: &str,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let candidates = tagger.grammar().classify(span);

    if json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        for candidate in &candidates {
            println!("{}", add_tokens(&candidate.annotation));
        }
    }

    if candidates.is_empty() {
        eprintln!("No measure recognized in '{}'", span);
        return Ok(false);
    }
    Ok(true)
}

fn tag_text(
    tagger: &TextTagger,
    text: Option<&str>,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let text = match text {
        Some(text) => text.to_string(),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if json {
        let segments = tagger.segments(&text);
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        println!("{}", tagger.render(text.trim_end()));
    }

    Ok(true)
}

fn list_units(tagger: &TextTagger, json: bool) -> Result<bool, Box<dyn std::error::Error>> {
    let entries = tagger.grammar().lexicon().entries();

    if json {
        let rows: Vec<_> = entries
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "raw": entry.raw_spelling,
                    "singular": entry.normalized_name,
                    "plural": entry.plural_name,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(true);
    }

    println!("Units ({}):", entries.len());
    for entry in entries {
        println!(
            "  - {} -> {} / {}",
            entry.raw_spelling, entry.normalized_name, entry.plural_name
        );
    }

    Ok(true)
}
