pub mod config;
pub mod render;
pub mod walker;

use anyhow::Result;
use lexis_core::Retriever;
use std::io::Write;

pub use config::{Cli, Config, OutputMode};
pub use walker::{build_index, IndexReport, WalkOptions};

/// Index `config.data_dir`, resolve `config.query` and render the hits to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<IndexReport> {
    let (index, report) = build_index(&config.data_dir, &config.walk)?;
    tracing::info!(files = report.indexed, terms = index.num_terms(), "done indexing");
    if !report.skipped.is_empty() {
        tracing::warn!(skipped = report.skipped.len(), "some files were not indexed");
        for path in &report.skipped {
            tracing::warn!(path = %path.display(), "skipped");
        }
    }

    let retriever = Retriever::new(&index);
    let results = retriever.retrieve_results(&config.query);
    tracing::debug!(query = %config.query, matched_terms = results.len(), "query resolved");

    match config.out {
        OutputMode::Pretty => render::pretty(&retriever, &results, config.color, out)?,
        OutputMode::Raw => render::raw(&retriever, &results, out)?,
    }
    out.flush()?;
    Ok(report)
}
