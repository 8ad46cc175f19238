use anyhow::{Context as _, Result};
use clap::Parser as _;
use lrcparse::{parse, ParseOptions};

mod args;

fn main() -> Result<()> {
    let args = args::Args::parse();
    args.init_tracing_subscriber();

    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let result = parse(
        &raw,
        &ParseOptions {
            parse_translations: args.translations,
            translation_divider: args.divider,
        },
    )
    .with_context(|| format!("Failed to parse {}", args.file.display()))?;

    serde_json::to_writer_pretty(std::io::stdout().lock(), &result)?;
    println!();
    Ok(())
}
