//! 领域服务的装配
//!
//! 启动时读取一次配置，用 fetch 传输构建各个服务，并放入 Context。

use crate::web::FetchHttpClient;
use leptos::prelude::*;
use log::info;
use shortdash::config::ClientConfig;
use shortdash::{AuthService, Endpoint, LinkService};

#[derive(Clone)]
pub struct Services {
    pub auth: AuthService<FetchHttpClient>,
    pub links: LinkService<FetchHttpClient>,
    pub config: ClientConfig,
}

impl Services {
    pub fn new(config: ClientConfig) -> Self {
        let endpoint = Endpoint::new(config.backend_url.as_str());
        Self {
            auth: AuthService::new(FetchHttpClient, endpoint.clone()),
            links: LinkService::new(FetchHttpClient, endpoint),
            config,
        }
    }
}

pub fn provide_services() -> Services {
    let config = ClientConfig::from_env();
    info!("[services] backend at {}", config.backend_url);
    let services = Services::new(config);
    provide_context(services.clone());
    services
}

pub fn use_services() -> Services {
    use_context::<Services>().expect("Services should be provided")
}
