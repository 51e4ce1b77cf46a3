//! URL construction helpers for the album API.

use crate::models::ApiConfig;
use url::Url;

/// Build the URL listing every photo.
pub fn build_photos_url(config: &ApiConfig) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/photos"));
    url.set_query(None);
    url
}

/// Build the URL listing the comments of one photo.
pub fn build_comments_url(config: &ApiConfig, post_id: i64) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/comments"));
    url.query_pairs_mut()
        .clear()
        .append_pair("postId", &post_id.to_string());
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_base(base: &str) -> ApiConfig {
        ApiConfig {
            base_url: Url::parse(base).unwrap(),
        }
    }

    #[test]
    fn test_build_photos_url_default() {
        let url = build_photos_url(&ApiConfig::default());
        assert_eq!(url.as_str(), "https://jsonplaceholder.typicode.com/photos");
    }

    #[test]
    fn test_build_comments_url_default() {
        let url = build_comments_url(&ApiConfig::default(), 42);
        assert_eq!(
            url.as_str(),
            "https://jsonplaceholder.typicode.com/comments?postId=42"
        );
    }

    #[test]
    fn test_build_urls_under_base_path() {
        let config = config_with_base("http://localhost:3000/api/v1/");

        assert_eq!(
            build_photos_url(&config).as_str(),
            "http://localhost:3000/api/v1/photos"
        );
        assert_eq!(
            build_comments_url(&config, 1).as_str(),
            "http://localhost:3000/api/v1/comments?postId=1"
        );
    }

    #[test]
    fn test_build_urls_drop_base_query() {
        let config = config_with_base("http://localhost:3000/?debug=1");
        assert_eq!(build_photos_url(&config).query(), None);
        assert_eq!(build_comments_url(&config, 5).query(), Some("postId=5"));
    }
}
