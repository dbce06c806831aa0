//! Price command - extract the total of a single invoice.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use invprice_core::{InvoiceDocument, PriceReport};

use super::output::{format_report, OutputFormat};
use super::{build_extractor, load_config, GeminiArgs};

/// Arguments for the price command.
#[derive(Args)]
pub struct PriceArgs {
    /// Input file (PDF or text), or "-" for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also read the price into an amount and currency
    #[arg(long)]
    parse_amount: bool,
}

pub async fn run(args: PriceArgs, config_path: Option<&Path>, gemini: &GeminiArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path, gemini)?;
    let extractor = build_extractor(&config)?;

    let document = if args.input.as_os_str() == "-" {
        InvoiceDocument::from_reader(io::stdin().lock())?
    } else {
        if !args.input.exists() {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        InvoiceDocument::load(&args.input)?
    };
    document.warn_if_sparse(config.input.min_pdf_text_length);

    info!("Looking up price for {}", document.source);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    spinner.set_message("Asking Gemini...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));

    let result = extractor.find_price(&document.text).await;
    spinner.finish_and_clear();
    let price = result?;

    let mut report = PriceReport::new(document.source, price);
    if args.parse_amount {
        report = report.with_parsed_amount();
    }

    let output = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
