//! Full country search against the directory.

use anyhow::Context;
use common::university::UniversityRecord;

use crate::directory_utils::directory_client::DirectoryClient;

pub async fn search_universities(country: String) -> anyhow::Result<Vec<UniversityRecord>> {
    let client = DirectoryClient::from_env()?;
    let t0 = std::time::Instant::now();
    let records = client
        .search(&country)
        .await
        .with_context(|| format!("searching universities for country {:?}", country))?;
    tracing::info!(
        "DIRECTORY SEARCH: country = {:?}, hits = {}, took {}ms",
        country,
        records.len(),
        t0.elapsed().as_millis()
    );
    Ok(records)
}
