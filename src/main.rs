use anyhow::{Context, Result};
use clap::Parser;
use futures::stream::{self, StreamExt};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use podfeed::config::{Config, SkipList};
use podfeed::feed::{ElementStats, FeedParser};
use podfeed::model::{Feed, Temporal};
use podfeed::util::strip_control_chars;

#[derive(Parser, Debug)]
#[command(name = "podfeed", version, about = "Lenient RSS and Atom podcast feed parser")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print each feed as one line of JSON
    #[arg(long)]
    json: bool,

    /// Print statistics about elements the parser did not map
    #[arg(long)]
    stats: bool,

    /// Number of files parsed concurrently (overrides the config file)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,

    /// Feed documents to parse
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

/// Parses one file on the current (blocking) thread.
fn parse_file(path: &Path, filter: &SkipList) -> Result<(Feed, ElementStats)> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;

    let mut stats = ElementStats::new();
    let feed = FeedParser::new()
        .with_filter(filter)
        .parse_with(BufReader::new(file), &mut stats)
        .with_context(|| format!("Failed to parse '{}'", path.display()))?;
    Ok((feed, stats))
}

/// Strips control characters before anything publisher-controlled reaches
/// the terminal.
fn clean(text: Option<&str>) -> String {
    text.map(|t| strip_control_chars(t).into_owned())
        .unwrap_or_else(|| "(untitled)".to_string())
}

fn format_date(date: Option<&Temporal>) -> String {
    match date {
        Some(date) => date.date().format("%Y-%m-%d").to_string(),
        None => "----------".to_string(),
    }
}

fn print_summary(path: &Path, feed: &Feed) {
    println!(
        "{}: {:?} feed \"{}\", {} items",
        path.display(),
        feed.kind,
        clean(feed.title.as_deref()),
        feed.items.len()
    );
    for item in &feed.items {
        let duration = item
            .duration
            .map(|d| {
                let secs = d.as_secs();
                format!(" [{}:{:02}:{:02}]", secs / 3600, secs / 60 % 60, secs % 60)
            })
            .unwrap_or_default();
        println!(
            "  {} {}{}",
            format_date(item.published.as_ref()),
            clean(item.title.as_deref().or(item.episode_title.as_deref())),
            duration
        );
    }
}

fn print_stats(stats: &ElementStats) {
    eprintln!(
        "{} feeds, {} items, {} unknown-namespace elements, {} unmapped elements",
        stats.feeds,
        stats.items,
        stats.unknown_namespaces.len(),
        stats.unmapped_elements.len()
    );
    for (element, count) in &stats.unknown_namespaces {
        eprintln!("  unknown   {:>6}  {:?}  {}", count, element.level, element);
    }
    for (element, count) in &stats.unmapped_elements {
        eprintln!("  unmapped  {:>6}  {:?}  {}", count, element.level, element);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => Config::default(),
    };
    let jobs = args.jobs.unwrap_or(config.jobs).max(1);
    let filter = Arc::new(config.filter());
    tracing::debug!(files = args.files.len(), jobs, "Parsing feeds");

    let mut results: Vec<(usize, PathBuf, Result<(Feed, ElementStats)>)> =
        stream::iter(args.files.iter().cloned().enumerate())
            .map(|(index, path)| {
                let filter = Arc::clone(&filter);
                async move {
                    let task_path = path.clone();
                    let result = tokio::task::spawn_blocking(move || parse_file(&task_path, &filter))
                        .await
                        .context("Parser task failed")
                        .and_then(|result| result);
                    (index, path, result)
                }
            })
            .buffer_unordered(jobs)
            .collect()
            .await;
    results.sort_by_key(|(index, _, _)| *index);

    let mut totals = ElementStats::new();
    let mut failures = 0usize;
    for (_, path, result) in &results {
        match result {
            Ok((feed, stats)) => {
                if args.json {
                    println!("{}", serde_json::to_string(feed)?);
                } else {
                    print_summary(path, feed);
                }
                totals.merge(stats.clone());
            }
            Err(err) => {
                failures += 1;
                tracing::warn!(path = %path.display(), error = %err, "Feed failed");
                eprintln!("error: {err:#}");
            }
        }
    }

    if args.stats || config.report_unmapped {
        print_stats(&totals);
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} files failed to parse", results.len());
    }
    Ok(())
}
