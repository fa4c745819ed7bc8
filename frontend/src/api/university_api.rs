//! Client API calls for the university directory.

use common::university::UniversityRecord;
use dioxus::prelude::*;


#[server]
pub async fn search_universities(country: String) -> Result<Vec<UniversityRecord>, ServerFnError> {
    let x = backend::api::universities::search_universities(country).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{:#}", e), code: 500, details: None })
}

#[server]
pub async fn suggest_countries(prefix: String) -> Result<Vec<String>, ServerFnError> {
    let x = backend::api::universities::suggest_countries(prefix).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{:#}", e), code: 500, details: None })
}
