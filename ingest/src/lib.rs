use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use analysis::tables::{TableOverrides, Tables};
use common::raw::RawSeries;
use common::series::SeriesRecord;

/// A raw input file holds either a single series or a list of them.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    One(RawSeries),
    Many(Vec<RawSeries>),
}

impl RawInput {
    pub fn into_vec(self) -> Vec<RawSeries> {
        match self {
            Self::One(s) => vec![s],
            Self::Many(s) => s,
        }
    }
}

/// Builds the tables for this run: the compiled-in defaults plus the overrides file, if any.
pub fn load_tables(path: Option<&Path>) -> anyhow::Result<Tables> {
    let path = match path {
        Some(p) => p,
        None => return Ok(Tables::default()),
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading tables from {}", path.display()))?;
    let overrides: TableOverrides = serde_json::from_str(&content)
        .with_context(|| format!("parsing tables from {}", path.display()))?;

    tracing::info!("Loaded table overrides from {}", path.display());

    Ok(Tables::from_overrides(overrides)?)
}

pub fn parse_input(content: &str) -> anyhow::Result<Vec<RawSeries>> {
    let input: RawInput = serde_json::from_str(content)?;
    Ok(input.into_vec())
}

/// Reads one input file and builds a record for every series in it.
#[tracing::instrument(skip(tables))]
pub async fn process_file(tables: Arc<Tables>, path: PathBuf) -> anyhow::Result<Vec<SeriesRecord>> {
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;

    let raws = parse_input(&content).with_context(|| format!("parsing {}", path.display()))?;

    let records = tokio::task::spawn_blocking(move || {
        raws.iter()
            .map(|raw| analysis::series::build(&tables, raw))
            .collect::<Result<Vec<_>, _>>()
    })
    .await??;

    tracing::info!("Built {} series", records.len());

    Ok(records)
}

/// Processes every file concurrently, returning the results in input order.
pub async fn process_files(
    tables: Arc<Tables>,
    paths: Vec<PathBuf>,
) -> Vec<(PathBuf, anyhow::Result<Vec<SeriesRecord>>)> {
    let tasks = paths.into_iter().map(|path| {
        let tables = tables.clone();
        async move {
            let result = process_file(tables, path.clone()).await;
            (path, result)
        }
    });

    futures::future::join_all(tasks).await
}
