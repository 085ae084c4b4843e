//! # tgarchive CLI
//!
//! Converts a Telegram HTML export into JSON, JSONL or CSV.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use tgarchive::TgArchiveError;
use tgarchive::cli::Args;
use tgarchive::core::{ExportStats, apply_filters};
use tgarchive::format::{OutputFormat, write_to_format};
use tgarchive::parser::ExportParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so they never mix with output written to stdout.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), TgArchiveError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();
    let filter_config = args.filter_config()?;

    println!("tgarchive v{}", env!("CARGO_PKG_VERSION"));
    println!("Input:   {}", args.input);
    println!("Output:  {output_path}");
    println!("Format:  {format}");
    if let Some(ref name) = args.self_name {
        println!("Me:      {name}");
    }
    println!();

    let parser = ExportParser::with_config(args.parser_config());
    let parse_start = Instant::now();
    let messages = parser.parse(Path::new(&args.input))?;
    let original_count = messages.len();
    println!(
        "Parsed {} messages ({:.2}s)",
        original_count,
        parse_start.elapsed().as_secs_f64()
    );

    let messages = if filter_config.is_active() {
        let filtered = apply_filters(messages, &filter_config);
        println!("Kept {} messages after filtering", filtered.len());
        filtered
    } else {
        messages
    };

    let stats = ExportStats::from_messages(&messages);
    write_to_format(&messages, &output_path, format, &args.output_config())?;

    println!();
    println!("Summary:");
    println!("   Messages:    {} ({} service)", stats.total, stats.service);
    println!(
        "   Outgoing:    {} ({:.1}%)",
        stats.outgoing,
        stats.outgoing_ratio()
    );
    println!("   Replies:     {}", stats.replies);
    println!("   Edited:      {}", stats.edited);
    println!("   Attachments: {}", stats.attachments());
    println!();
    println!(
        "Done in {:.2}s, output saved to {output_path}",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
