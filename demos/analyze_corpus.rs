//! Scan a corpus directory and write the JSON and CSV reports.
//!
//! ```sh
//! RUST_LOG=ddcorpus=debug cargo run --example analyze_corpus -- <corpus-dir> [output-dir] [config.json]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use ddcorpus::{csv, json, scan, ScanConfig};
use tracing::{info, warn};

/// Collect every file name below `root`, recursively.
fn list_files(root: &Path, names: &mut Vec<String>) -> Result<()> {
    for entry in fs::read_dir(root).with_context(|| format!("reading {}", root.display()))? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            list_files(&path, names)?;
        } else if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        } else {
            warn!("Skipping non UTF-8 file name {}", path.display());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(root) = args.first().map(PathBuf::from) else {
        bail!("usage: analyze_corpus <corpus-dir> [output-dir] [config.json]");
    };
    let output = args
        .get(1)
        .map_or_else(|| PathBuf::from("dd_corpus_reports"), PathBuf::from);
    let config = match args.get(2) {
        Some(path) => ScanConfig::from_json_file(path)?,
        None => ScanConfig::default(),
    };

    let mut names = Vec::new();
    list_files(&root, &mut names)?;
    info!("Found {} files under {}", names.len(), root.display());

    let result = scan(&names, &config);
    let corpus = &result.corpus;
    let summary = corpus.index().summary();

    println!("Newspapers: {}", summary.total_newspapers);
    println!("Issues:     {}", summary.total_issues);
    println!("Pages:      {}", summary.total_pages);
    println!("Rejected:   {}", result.invalid.len());
    if let Some((first, last)) = summary.year_range {
        println!("Years:      {first}-{last}");
    }
    println!();

    for code in corpus.index().newspapers() {
        let estimate = corpus.frequency(code);
        let completeness = corpus
            .completeness_percentage(code)
            .map_or_else(|| "n/a".to_string(), |share| format!("{:.1}%", share * 100.0));
        println!(
            "{code}  {:<10} {:>5} issues  est. complete {completeness}",
            estimate.class.to_string(),
            corpus.index().issue_count_of(code)
        );
    }

    fs::create_dir_all(&output)?;
    let report = json::corpus_to_json(corpus)?;
    fs::write(output.join("corpus_report.json"), serde_json::to_string_pretty(&report)?)?;
    fs::write(output.join("corpus_pages.csv"), csv::pages_to_csv(corpus)?)?;
    fs::write(output.join("corpus_issues.csv"), csv::issues_to_csv(corpus)?)?;
    fs::write(output.join("library_holdings.csv"), csv::holdings_to_csv(corpus)?)?;
    fs::write(output.join("missing_issues.csv"), csv::missing_issues_to_csv(corpus)?)?;
    fs::write(output.join("corpus_pivot_table_data.csv"), csv::pivot_to_csv(corpus)?)?;
    fs::write(output.join("invalid_filenames.csv"), csv::invalid_to_csv(&result.invalid)?)?;
    info!("Reports written to {}", output.display());

    Ok(())
}
