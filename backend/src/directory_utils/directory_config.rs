pub const DIRECTORY_URL_ENV: &str = "UNIVERSITY_DIRECTORY_URL";
pub const DEFAULT_DIRECTORY_URL: &str = "http://universities.hipolabs.com";

pub fn get_directory_url() -> String {
    directory_url_from(std::env::var(DIRECTORY_URL_ENV).ok())
}

/// Base URL without a trailing slash; blank values fall back to the public directory.
pub fn directory_url_from(value: Option<String>) -> String {
    let url = value.unwrap_or_default();
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        DEFAULT_DIRECTORY_URL.to_string()
    } else {
        url.to_string()
    }
}
