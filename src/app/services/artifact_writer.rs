//! Output artifacts: the validated dataset and the last-updated marker
//!
//! Each pipeline run fully replaces both files; there is no partial update.
//! The dataset is the sole contract with the consuming map UI, which treats
//! it as an opaque validated array and performs no re-validation.

use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

use crate::app::models::Garden;
use crate::config::Config;
use crate::{Error, Result};

/// Last-updated marker consumed by the UI footer, display only
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LastUpdated {
    last_updated: String,
}

/// Format the marker timestamp the way the UI footer displays it
pub fn format_last_updated(now: DateTime<Local>) -> String {
    now.format("%d.%m.%Y, %H:%M").to_string()
}

/// Write both artifacts. A failure on either is fatal to the run.
pub async fn write_artifacts(config: &Config, gardens: &[Garden]) -> Result<()> {
    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|e| {
            Error::io(
                format!(
                    "failed to create output directory {}",
                    config.output_dir.display()
                ),
                e,
            )
        })?;

    let gardens_path = config.gardens_json_path();
    write_pretty_json(&gardens_path, &gardens).await?;
    info!(
        "Wrote {} gardens to {}",
        gardens.len(),
        gardens_path.display()
    );

    let marker = LastUpdated {
        last_updated: format_last_updated(Local::now()),
    };
    let marker_path = config.last_updated_path();
    write_pretty_json(&marker_path, &marker).await?;
    info!("Wrote last-updated marker to {}", marker_path.display());

    Ok(())
}

async fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        Error::artifact_write(
            path.display().to_string(),
            "serialization failed",
            Box::new(e),
        )
    })?;

    tokio::fs::write(path, json).await.map_err(|e| {
        Error::artifact_write(path.display().to_string(), "write failed", Box::new(e))
    })
}
