//! Raw sheet acquisition
//!
//! Fetches the delimited text of one sheet from its configured location.
//! There is no partial-source mode and no retry: a failure for either sheet
//! is fatal to the whole run and propagates upward immediately.

use tracing::info;

use crate::config::SheetSource;
use crate::{Error, Result};

/// Fetch the raw delimited text of one sheet.
pub async fn fetch_sheet(name: &str, source: &SheetSource) -> Result<String> {
    match source {
        SheetSource::Url(url) => {
            info!("Fetching {} sheet from {}", name, url);

            let response = reqwest::get(url)
                .await
                .map_err(|e| Error::source_fetch(name, format!("request failed: {e}")))?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::source_fetch(
                    name,
                    format!("unexpected status {status} from {url}"),
                ));
            }

            response
                .text()
                .await
                .map_err(|e| Error::source_fetch(name, format!("reading response body failed: {e}")))
        }
        SheetSource::File(path) => {
            info!("Reading {} sheet from {}", name, path.display());

            tokio::fs::read_to_string(path).await.map_err(|e| {
                Error::source_fetch(name, format!("reading {} failed: {e}", path.display()))
            })
        }
    }
}
