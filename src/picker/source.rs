//! Where food lists come from.
//!
//! Each category is one JSON document named `<category>.json`, either in a
//! local directory or under an HTTP base URL.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::FoodMenu;

/// Failure to retrieve or parse a category's food list
#[derive(Debug, Error)]
pub enum PoolLoadError {
    #[error("invalid category name `{0}`")]
    InvalidCategory(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed food list {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Retrieves the raw food list for a category
#[async_trait]
pub trait FoodSource: Send + Sync {
    async fn fetch(&self, category: &str) -> Result<FoodMenu, PoolLoadError>;
}

/// Category names address files and URLs, so keep them to a single path segment
pub fn validate_category(category: &str) -> Result<(), PoolLoadError> {
    let invalid = category.is_empty()
        || category == "."
        || category == ".."
        || category.contains(['/', '\\'])
        || category.chars().any(char::is_control);
    if invalid {
        return Err(PoolLoadError::InvalidCategory(category.to_string()));
    }
    Ok(())
}

/// Food lists stored as `<dir>/<category>.json`
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, category: &str) -> PathBuf {
        self.dir.join(format!("{category}.json"))
    }
}

#[async_trait]
impl FoodSource for DirSource {
    async fn fetch(&self, category: &str) -> Result<FoodMenu, PoolLoadError> {
        validate_category(category)?;
        let path = self.path_for(category);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| PoolLoadError::Io {
                path: path.clone(),
                source,
            })?;
        serde_json::from_str(&content).map_err(|source| PoolLoadError::Parse {
            location: path.display().to_string(),
            source,
        })
    }
}

/// Upper bound on a whole HTTP request, connect to last byte
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Food lists served as `<base_url>/<category>.json`
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Source whose requests fail with [`PoolLoadError::Http`] after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, category: &str) -> String {
        format!("{}/{category}.json", self.base_url)
    }
}

#[async_trait]
impl FoodSource for HttpSource {
    async fn fetch(&self, category: &str) -> Result<FoodMenu, PoolLoadError> {
        validate_category(category)?;
        let url = self.url_for(category);
        let http_err = |source| PoolLoadError::Http {
            url: url.clone(),
            source,
        };

        let body = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(http_err)?
            .text()
            .await
            .map_err(http_err)?;

        serde_json::from_str(&body).map_err(|source| PoolLoadError::Parse {
            location: url.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_food_file(dir: &tempfile::TempDir, name: &str, content: &str) {
        let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
        write!(file, "{}", content).unwrap();
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("android").is_ok());
        assert!(validate_category("late-night snacks").is_ok());
        assert!(validate_category("").is_err());
        assert!(validate_category("..").is_err());
        assert!(validate_category("../secrets").is_err());
        assert!(validate_category("a\\b").is_err());
    }

    #[tokio::test]
    async fn test_dir_source_reads_category_file() {
        let dir = tempfile::tempdir().unwrap();
        write_food_file(&dir, "android.json", r#"{"lunch": ["Noodles", "Noodles", "Rice"]}"#);

        let source = DirSource::new(dir.path());
        let menu = source.fetch("android").await.unwrap();
        // Raw lists come back as written; deduplication happens when caching
        assert_eq!(menu.items("lunch"), ["Noodles", "Noodles", "Rice"]);
    }

    #[tokio::test]
    async fn test_dir_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());
        let err = source.fetch("nowhere").await.unwrap_err();
        match err {
            PoolLoadError::Io { path, source } => {
                assert_eq!(path, dir.path().join("nowhere.json"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_dir_source_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        write_food_file(&dir, "broken.json", "{ invalid json }");

        let source = DirSource::new(dir.path());
        let err = source.fetch("broken").await.unwrap_err();
        assert!(matches!(err, PoolLoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_dir_source_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirSource::new(dir.path());
        let err = source.fetch("../etc").await.unwrap_err();
        assert!(matches!(err, PoolLoadError::InvalidCategory(name) if name == "../etc"));
    }

    #[test]
    fn test_http_source_url() {
        let source = HttpSource::new("https://example.com/food/").unwrap();
        assert_eq!(source.url_for("android"), "https://example.com/food/android.json");
    }

    #[tokio::test]
    async fn test_http_source_times_out_on_silent_server() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept the connection, never answer
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let source =
            HttpSource::with_timeout(format!("http://{addr}"), Duration::from_millis(200)).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), source.fetch("android"))
            .await
            .expect("fetch hung past its timeout");
        assert!(matches!(result, Err(PoolLoadError::Http { .. })));
        server.abort();
    }
}
