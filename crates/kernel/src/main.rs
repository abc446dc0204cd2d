//! navblock command-line interface.
//!
//! Renders parsed-block JSON through the block registry, lists registered
//! blocks, and runs the contrast checker.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use navblock_kernel::color_selector::{Color, ContrastChecker};
use navblock_kernel::{BlockRegistry, Config, ParsedBlock, register_core_blocks};

#[derive(Parser)]
#[command(name = "navblock", about = "Navigation menu block tools")]
struct Cli {
    /// Block library directory (overrides BLOCK_LIBRARY_DIR).
    #[arg(long, global = true)]
    blocks_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a parsed block (or an array of blocks) from a JSON file.
    Render {
        /// Path to the JSON file; `-` reads standard input.
        file: PathBuf,
    },
    /// List registered block types.
    Blocks,
    /// Report the contrast ratio of a background/text color pair.
    Contrast {
        background: String,
        text: String,
        /// Judge against the large-text threshold.
        #[arg(long)]
        large_text: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(dir) = cli.blocks_dir {
        config = config.with_block_library_dir(dir);
    }

    match cli.command {
        Command::Render { file } => {
            let registry = init_registry(&config)?;
            let blocks = read_blocks(&file)?;
            println!("{}", registry.render_all(&blocks));
        }
        Command::Blocks => {
            let registry = init_registry(&config)?;
            for name in registry.names() {
                let dynamic = registry.get(name).is_some_and(|b| b.is_dynamic());
                println!("{name}{}", if dynamic { " (dynamic)" } else { "" });
            }
        }
        Command::Contrast {
            background,
            text,
            large_text,
        } => {
            let bg: Color = background
                .parse()
                .with_context(|| format!("invalid background color '{background}'"))?;
            let fg: Color = text
                .parse()
                .with_context(|| format!("invalid text color '{text}'"))?;
            println!("contrast ratio {:.2}:1", bg.contrast_ratio(&fg));

            let checker = ContrastChecker::new(Some(background.as_str()), Some(text.as_str()))
                .large_text(large_text);
            match checker.check() {
                Some(warning) => println!("{warning}"),
                None => println!("passes WCAG AA ({:.1}:1 required)", checker.required_ratio()),
            }
        }
    }

    Ok(())
}

fn init_registry(config: &Config) -> Result<BlockRegistry> {
    let mut registry = BlockRegistry::new();
    register_core_blocks(&mut registry, config).context("failed to register core blocks")?;
    info!(blocks = registry.len(), "block registry ready");
    Ok(registry)
}

fn read_blocks(file: &Path) -> Result<Vec<ParsedBlock>> {
    let json = if file.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("failed to read standard input")?
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?
    };

    let value: serde_json::Value = serde_json::from_str(&json).context("input is not valid JSON")?;
    let blocks = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value),
        other => serde_json::from_value(other).map(|block| vec![block]),
    }
    .context("input is not a parsed block")?;

    Ok(blocks)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
