//! Inspect command: build URIs through the session builder and describe them.

use anyhow::{Context, Result};
use gsuri_core::storage_uri::{BucketUriClass, StorageUri};
use gsuri_core::StorageUriBuilder;
use serde::Serialize;
use std::io::{self, Write};

/// What a built URI names, as printed by `gsuri inspect`.
#[derive(Debug, Serialize)]
pub struct UriReport {
    pub uri: String,
    pub kind: &'static str,
    pub scheme: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bucket: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    pub is_latest: bool,
    pub debug: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl UriReport {
    pub fn from_uri(uri: &StorageUri) -> Result<Self> {
        let (generation, version_id, endpoint_url) = match uri.as_bucket() {
            Some(bucket) => (
                bucket.generation(),
                bucket.version_id().map(str::to_string),
                Some(bucket.endpoint_url()?.to_string()),
            ),
            None => (None, None, None),
        };
        Ok(Self {
            uri: uri.uri(),
            kind: kind_of(uri),
            scheme: uri.scheme().as_str(),
            bucket: uri.bucket_name().to_string(),
            object: uri.object_name().to_string(),
            generation,
            version_id,
            is_latest: uri.is_latest(),
            debug: uri.debug(),
            endpoint_url,
        })
    }

    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.uri)?;
        writeln!(out, "  {:<12}{}", "kind:", self.kind)?;
        writeln!(out, "  {:<12}{}", "scheme:", self.scheme)?;
        if !self.bucket.is_empty() {
            writeln!(out, "  {:<12}{}", "bucket:", self.bucket)?;
        }
        if !self.object.is_empty() {
            writeln!(out, "  {:<12}{}", "object:", self.object)?;
        }
        if let Some(generation) = self.generation {
            writeln!(out, "  {:<12}{}", "generation:", generation)?;
        }
        if let Some(version_id) = &self.version_id {
            writeln!(out, "  {:<12}{}", "version:", version_id)?;
        }
        if self.is_latest {
            writeln!(out, "  {:<12}yes", "latest:")?;
        }
        if let Some(url) = &self.endpoint_url {
            writeln!(out, "  {:<12}{}", "endpoint:", url)?;
        }
        Ok(())
    }
}

fn kind_of(uri: &StorageUri) -> &'static str {
    if uri.names_provider() {
        "provider"
    } else if uri.names_bucket() {
        "bucket"
    } else if uri.is_stream() {
        "stream"
    } else if uri.names_directory() {
        "directory"
    } else if uri.is_cloud_uri() {
        "object"
    } else {
        "file"
    }
}

/// Build each URI and print a description of it to stdout.
pub fn run_inspect<C: BucketUriClass>(
    builder: &StorageUriBuilder<C>,
    uris: &[String],
    latest: bool,
    json: bool,
) -> Result<()> {
    inspect_to(&mut io::stdout().lock(), builder, uris, latest, json)
}

fn inspect_to<C: BucketUriClass>(
    out: &mut dyn Write,
    builder: &StorageUriBuilder<C>,
    uris: &[String],
    latest: bool,
    json: bool,
) -> Result<()> {
    for uri_str in uris {
        let uri = builder
            .build_with_latest(uri_str, latest)
            .with_context(|| format!("invalid URI: {uri_str}"))?;
        let report = UriReport::from_uri(&uri)?;
        tracing::debug!(uri = %report.uri, kind = report.kind, "inspected");
        if json {
            serde_json::to_writer(&mut *out, &report).context("serialize report")?;
            writeln!(out)?;
        } else {
            report.write_text(out)?;
        }
    }
    Ok(())
}
