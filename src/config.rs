//! Build-time Configuration
//!
//! The backend base URL is baked in at build time (`MIN_NOW_API_URL`).
//! Unset or empty means same origin, served through `min-now-server`.

const API_URL: Option<&str> = option_env!("MIN_NOW_API_URL");

/// Backend base URL without trailing slash
pub fn api_base_url() -> String {
    match API_URL.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => page_origin(),
    }
}

/// Absolute URL for a backend path such as `/api/items`
pub fn api_url(path: &str) -> String {
    join_url(&api_base_url(), path)
}

/// URL for a route served by the local server, regardless of the backend base
pub fn local_url(path: &str) -> String {
    join_url(&page_origin(), path)
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:8000/", "/api/items"), "http://localhost:8000/api/items");
        assert_eq!(join_url("http://localhost:8000", "api/items"), "http://localhost:8000/api/items");
        assert_eq!(join_url("", "/api/items"), "/api/items");
    }
}
