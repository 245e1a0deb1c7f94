use async_trait::async_trait;
use std::env;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct StoreContext {
    pub api_endpoint: String,
    pub anon_key: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub store: StoreContext,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct StoreConfig {
    pub api_endpoint: String,
    pub anon_key: String,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let store_api_endpoint =
            env::var("STORE_API_ENDPOINT").expect("STORE_API_ENDPOINT not set");
        let store_anon_key = env::var("STORE_ANON_KEY").expect("STORE_ANON_KEY not set");

        Self {
            app: AppConfig { host, port },
            store: StoreConfig {
                api_endpoint: store_api_endpoint,
                anon_key: store_anon_key,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            store: StoreContext {
                // a trailing slash would produce `//` in onward request paths
                api_endpoint: self.store.api_endpoint.trim_end_matches('/').to_string(),
                anon_key: self.store.anon_key,
            },
        }
    }
}
