//! Lead loader
//!
//! Resolves the configured source identifiers, fetches them all concurrently
//! and merges their records, in source-list order, into a `RecordStore`.
//! The load is all-or-nothing: the first failing source fails the whole load.

use std::path::{Path, PathBuf};

use reqwest::{Client, Url};
use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinSet;

use crate::messages::ServiceEvent;
use crate::model::{LeadRecord, RecordStore};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid source {name}: {reason}")]
    InvalidSource { name: String, reason: String },
    #[error("Failed to load {name}: {reason}")]
    Status {
        name: String,
        status: u16,
        reason: String,
    },
    #[error("Failed to load {name}: {source}")]
    Request {
        name: String,
        source: reqwest::Error,
    },
    #[error("Failed to load {name}: {source}")]
    Read {
        name: String,
        source: std::io::Error,
    },
    #[error("Failed to parse {name}: {source}")]
    Parse {
        name: String,
        source: serde_json::Error,
    },
    #[error("Loader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("No leads found in the source files.")]
    Empty,
}

/// Where a source's bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Remote(Url),
    Local(PathBuf),
}

/// A source identifier and its resolved location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    /// Identifier as listed in the config or on the command line
    pub name: String,
    pub location: Location,
}

/// Resolve source identifiers to locations.
///
/// Absolute http(s) URLs are fetched as-is. With a base URL, every other
/// identifier is joined onto it. Without one, identifiers are file paths,
/// relative ones joined onto `data_dir` when given.
pub fn resolve_sources(
    names: &[String],
    base_url: Option<&str>,
    data_dir: Option<&Path>,
) -> Result<Vec<DataSource>, LoadError> {
    let base = base_url
        .map(|base| {
            Url::parse(base).map_err(|e| LoadError::InvalidSource {
                name: base.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()?;

    names
        .iter()
        .map(|name| -> Result<DataSource, LoadError> {
            let location = if is_remote(name) {
                Location::Remote(Url::parse(name).map_err(|e| LoadError::InvalidSource {
                    name: name.clone(),
                    reason: e.to_string(),
                })?)
            } else if let Some(base) = &base {
                Location::Remote(base.join(name).map_err(|e| LoadError::InvalidSource {
                    name: name.clone(),
                    reason: e.to_string(),
                })?)
            } else {
                let path = PathBuf::from(name);
                match data_dir {
                    Some(dir) if path.is_relative() => Location::Local(dir.join(path)),
                    _ => Location::Local(path),
                }
            };
            Ok(DataSource {
                name: name.clone(),
                location,
            })
        })
        .collect()
}

fn is_remote(name: &str) -> bool {
    name.starts_with("http://") || name.starts_with("https://")
}

/// Records of one parsed source document.
///
/// A top-level array yields one record per element. Any other document is
/// skipped and yields nothing.
pub fn records_from_document(document: Value) -> Vec<LeadRecord> {
    match document {
        Value::Array(items) => items.into_iter().map(LeadRecord::from_value).collect(),
        _ => Vec::new(),
    }
}

/// Concatenate per-source batches, in order, into a store
pub fn merge_batches(
    batches: impl IntoIterator<Item = Vec<LeadRecord>>,
) -> Result<RecordStore, LoadError> {
    let records: Vec<LeadRecord> = batches.into_iter().flatten().collect();
    RecordStore::new(records).ok_or(LoadError::Empty)
}

async fn read_source(client: &Client, source: &DataSource) -> Result<Vec<u8>, LoadError> {
    match &source.location {
        Location::Remote(url) => {
            let response = client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| LoadError::Request {
                    name: source.name.clone(),
                    source: e,
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    name: source.name.clone(),
                    status: status.as_u16(),
                    reason: status
                        .canonical_reason()
                        .map(str::to_string)
                        .unwrap_or_else(|| status.as_str().to_string()),
                });
            }

            let body = response.bytes().await.map_err(|e| LoadError::Request {
                name: source.name.clone(),
                source: e,
            })?;
            Ok(body.to_vec())
        }
        Location::Local(path) => tokio::fs::read(path).await.map_err(|e| LoadError::Read {
            name: source.name.clone(),
            source: e,
        }),
    }
}

/// Fetch and parse one source
pub async fn fetch_source(client: &Client, source: &DataSource) -> Result<Vec<LeadRecord>, LoadError> {
    let body = read_source(client, source).await?;
    let document: Value = serde_json::from_slice(&body).map_err(|e| LoadError::Parse {
        name: source.name.clone(),
        source: e,
    })?;

    if !document.is_array() {
        tracing::debug!(source = %source.name, "skipping source: top-level value is not an array");
    }
    let records = records_from_document(document);
    tracing::info!(source = %source.name, records = records.len(), "source loaded");
    Ok(records)
}

/// Fetch every source concurrently and merge the results in list order.
///
/// Returns on the first failure to complete; the remaining fetches are
/// aborted when the join set is dropped.
pub async fn load_leads(client: &Client, sources: &[DataSource]) -> Result<RecordStore, LoadError> {
    let mut tasks = JoinSet::new();
    for (position, source) in sources.iter().cloned().enumerate() {
        let client = client.clone();
        tasks.spawn(async move { (position, fetch_source(&client, &source).await) });
    }

    let mut batches: Vec<Option<Vec<LeadRecord>>> = vec![None; sources.len()];
    while let Some(joined) = tasks.join_next().await {
        let (position, result) = joined?;
        batches[position] = Some(result?);
    }

    merge_batches(batches.into_iter().flatten())
}

/// Run the load in the background and report the outcome on `tx`
pub fn spawn_load(client: Client, sources: Vec<DataSource>, tx: UnboundedSender<ServiceEvent>) {
    tokio::spawn(async move {
        let result = load_leads(&client, &sources).await;
        let _ = tx.send(ServiceEvent::Loaded(result));
    });
}
