use anyhow::Context;
use onto_client::OlsClient;
use onto_config::OntoConfig;
use onto_resolve::ResolveOptions;

/// Configuration plus the service client built from it.
pub struct AppContext {
    pub config: OntoConfig,
    pub client: OlsClient,
}

impl AppContext {
    pub fn init(config: OntoConfig) -> anyhow::Result<Self> {
        let client = OlsClient::new(&config.service).context("failed to build service client")?;
        tracing::debug!(base_url = client.base_url(), "service client ready");
        Ok(Self { config, client })
    }

    /// Resolution options from configuration, with per-command overrides.
    pub fn resolve_options(&self, page_size: Option<u32>, delay_ms: Option<u64>) -> ResolveOptions {
        let mut options = ResolveOptions::from(&self.config.resolve);
        if let Some(page_size) = page_size {
            options.page_size = page_size.max(1);
        }
        if let Some(delay_ms) = delay_ms {
            options.delay = std::time::Duration::from_millis(delay_ms);
        }
        options
    }

    /// The ontology prefixes to search: the given selection plus `custom`,
    /// or the configured defaults when both are empty.
    pub fn ontologies(&self, selected: &[String], custom: Option<&str>) -> Vec<String> {
        let chosen = onto_core::terms::ontology_selection(selected, custom.unwrap_or_default());
        if chosen.is_empty() && custom.is_none() {
            onto_core::terms::ontology_selection(&self.config.resolve.ontologies, "")
        } else {
            chosen
        }
    }
}
