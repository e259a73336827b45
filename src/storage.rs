use crate::errors::AppError;
use crate::models::CacheData;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Load the local cache. A missing or malformed file is an empty cache, never
/// a startup failure; the parse error is logged and the file gets rewritten
/// on the next append.
pub async fn load_cache(path: &Path) -> CacheData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse cache file: {err}");
                CacheData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => CacheData::default(),
        Err(err) => {
            error!("failed to read cache file: {err}");
            CacheData::default()
        }
    }
}

pub async fn persist_cache(path: &Path, data: &CacheData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoredSignature;

    fn temp_path(tag: &str) -> std::path::PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("petition_cache_{tag}_{}_{nanos}.json", std::process::id()))
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let cache = load_cache(&temp_path("missing")).await;
        assert!(cache.signatures.is_empty());
        assert!(!cache.visited);
    }

    #[tokio::test]
    async fn malformed_file_loads_empty() {
        let path = temp_path("malformed");
        fs::write(&path, b"{not json").await.unwrap();
        let cache = load_cache(&path).await;
        assert!(cache.signatures.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn round_trips_signatures_and_flag() {
        let path = temp_path("roundtrip");
        let mut data = CacheData::default();
        data.visited = true;
        data.signatures.push(StoredSignature {
            id: "1".into(),
            name: "Priya Sharma".into(),
            email: "priya@example.com".into(),
            category: "alumni".into(),
            timestamp: "November 27, 2025 at 02:45:30 PM".into(),
        });

        persist_cache(&path, &data).await.unwrap();
        let loaded = load_cache(&path).await;
        assert!(loaded.visited);
        assert_eq!(loaded.signatures.len(), 1);
        assert_eq!(loaded.signatures[0].name, "Priya Sharma");
        let _ = fs::remove_file(&path).await;
    }
}
