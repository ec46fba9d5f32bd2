use ops_panel::config::PanelConfig;
use ops_panel::startup::{build_router, AppState, Application};
use std::path::PathBuf;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub root: PathBuf,
    pub base_dir: PathBuf,
    pub docs_dir: PathBuf,
}

/// Unique scratch directory under the crate's `target/`.
pub fn test_root() -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join(format!("test-panel-{}", Uuid::new_v4()))
}

/// Config pointing at fresh `data/` and `docs/` directories under `root`.
pub async fn test_config(root: &std::path::Path) -> PanelConfig {
    let base_dir = root.join("data");
    let docs_dir = root.join("docs");
    tokio::fs::create_dir_all(&base_dir).await.unwrap();
    tokio::fs::create_dir_all(&docs_dir).await.unwrap();

    let mut config = PanelConfig::with_dirs(base_dir, docs_dir);
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0; // Random port for testing
    config
}

/// Router over the given config, for `oneshot` tests.
pub fn router(config: &PanelConfig) -> axum::Router {
    build_router(AppState::from_config(config).expect("Failed to build state"))
}

impl TestApp {
    pub async fn spawn() -> Self {
        let root = test_root();
        let config = test_config(&root).await;
        Self::spawn_with(root, config).await
    }

    pub async fn spawn_with(root: PathBuf, config: PanelConfig) -> Self {
        let base_dir = config.storage.base_dir.clone();
        let docs_dir = config.documents.docs_dir.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            root,
            base_dir,
            docs_dir,
        }
    }

    pub async fn write_resource(&self, name: &str, data: &[u8]) -> PathBuf {
        let path = self.base_dir.join(name);
        tokio::fs::write(&path, data).await.unwrap();
        path
    }

    pub async fn write_doc(&self, file_name: &str, content: &str) {
        tokio::fs::write(self.docs_dir.join(file_name), content)
            .await
            .unwrap();
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_dir_all(&self.root).await;
    }
}
