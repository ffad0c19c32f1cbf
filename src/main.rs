// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. If no URLs were given, ask for them (and for the page limit)
// 3. Crawl each seed URL in turn, downloading images as we go
// 4. Print a summary per seed
//
// Per-URL problems (bad URL, dead server, not an image) are logged and
// skipped; they never change the exit code. Only a failure to start at all
// exits with 2.
// =============================================================================

mod cli;
mod logging;
mod prompt;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use image_fetcher::{CrawlSummary, Crawler};
use std::io::{self, Write};
use tracing::error;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let interactive = cli.urls.is_empty();
    let (seeds, max_pages) = if interactive {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        // Keep stdout clean for the JSON report
        let mut output: Box<dyn Write> = if cli.json {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };

        match prompt::run_session(&mut input, &mut output, cli.max_pages)? {
            Some(answers) => answers,
            None => return Ok(0),
        }
    } else {
        let seeds: Vec<String> = cli
            .urls
            .iter()
            .flat_map(|arg| prompt::parse_seed_list(arg))
            .collect();
        let max_pages = cli
            .max_pages
            .unwrap_or(image_fetcher::config::DEFAULT_MAX_PAGES);
        (seeds, max_pages)
    };

    let settings = cli.settings(max_pages);
    let crawler = Crawler::new(settings.clone()).context("failed to build HTTP client")?;

    if !cli.json {
        println!(
            "🔍 Crawling {} site(s), up to {} page(s) each, saving into {}",
            seeds.len(),
            settings.max_pages,
            crawler.fetcher().output_dir().display()
        );
    }

    let mut summaries = Vec::new();
    for seed in &seeds {
        match crawler.crawl(seed, settings.max_pages).await {
            Ok(summary) => summaries.push(summary),
            Err(e) => error!(seed = %seed, error = %e, "skipping seed"),
        }
    }

    print_results(&summaries, cli.json)?;

    if interactive && !cli.json {
        println!("\nConnection strengthened. Community enriched.");
    }

    Ok(0)
}

// Prints the summaries either as a table or JSON
fn print_results(summaries: &[CrawlSummary], json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(summaries)?;
        println!("{}", json_output);
    } else {
        print_table(summaries);
    }
    Ok(())
}

fn print_table(summaries: &[CrawlSummary]) {
    println!();
    println!(
        "{:<50} {:>6} {:>7} {:>6} {:>6} {:>7}",
        "SEED", "PAGES", "IMAGES", "SAVED", "DUPES", "FAILED"
    );
    println!("{}", "=".repeat(87));

    for summary in summaries {
        // Truncate seed if too long for display
        let seed_display = if summary.seed.chars().count() > 47 {
            let head: String = summary.seed.chars().take(47).collect();
            format!("{}...", head)
        } else {
            summary.seed.clone()
        };

        println!(
            "{:<50} {:>6} {:>7} {:>6} {:>6} {:>7}",
            seed_display,
            summary.pages_visited,
            summary.images_found,
            summary.images_saved,
            summary.duplicates_skipped,
            summary.fetch_failures
        );
    }

    println!();

    let saved: usize = summaries.iter().map(|s| s.images_saved).sum();
    let duplicates: usize = summaries.iter().map(|s| s.duplicates_skipped).sum();
    let failed: usize = summaries.iter().map(|s| s.fetch_failures).sum();

    println!("📊 Summary:");
    println!("   ✅ Saved: {}", saved);
    println!("   ⚠️  Duplicates skipped: {}", duplicates);
    println!("   ❌ Failed: {}", failed);
}
