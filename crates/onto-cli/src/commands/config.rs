use onto_config::OntoConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ConfigResponse {
    active_base_url: String,
    base_url: String,
    proxy_url: String,
    use_proxy: bool,
    api_key: String,
    timeout_secs: u64,
    user_agent: String,
    language: String,
    page_size: u32,
    delay_ms: u64,
    ontologies: Vec<String>,
}

impl From<&OntoConfig> for ConfigResponse {
    fn from(config: &OntoConfig) -> Self {
        Self {
            active_base_url: config.service.active_base_url(),
            base_url: config.service.base_url.clone(),
            proxy_url: config.service.proxy_url.clone(),
            use_proxy: config.service.use_proxy,
            api_key: config.service.masked_api_key(),
            timeout_secs: config.service.timeout_secs,
            user_agent: config.service.user_agent.clone(),
            language: config.resolve.language.clone(),
            page_size: config.resolve.page_size,
            delay_ms: config.resolve.delay_ms,
            ontologies: config.resolve.ontologies.clone(),
        }
    }
}

pub fn run(config: &OntoConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ConfigResponse::from(config), flags.format)
}
