#![allow(dead_code)]

use paragraph_analysis_service::config::AnalysisConfig;
use paragraph_analysis_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let mut config = AnalysisConfig::default();
        config.common.port = 0; // Random port for testing

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
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
            client,
        }
    }

    pub async fn analyze(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/paragraph/analyze", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}
