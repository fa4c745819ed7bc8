//! Country suggestions for the search box.

use anyhow::Context;

use crate::directory_utils::directory_client::DirectoryClient;

/// Suggestions for `prefix`, the lookup prefix the search state already derived
/// from the query text. Only an empty prefix skips the directory.
pub async fn suggest_countries(prefix: String) -> anyhow::Result<Vec<String>> {
    if prefix.is_empty() {
        return Ok(vec![]);
    }
    let client = DirectoryClient::from_env()?;
    let suggestions = client
        .suggest_for_prefix(&prefix)
        .await
        .with_context(|| format!("suggesting countries for {:?}", prefix))?;
    tracing::info!("DIRECTORY SUGGEST: prefix = {:?}, suggestions = {}", prefix, suggestions.len());
    Ok(suggestions)
}
