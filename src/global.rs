use std::sync::Arc;

use anyhow::Context as _;

use crate::client::{OpportunitiesClient, OpportunitySource};
use crate::config::Config;

pub struct Global {
    pub config: Config,
    pub source: Arc<dyn OpportunitySource>,
    pub started_at: std::time::Instant,
}

impl Global {
    pub fn init(config: Config) -> anyhow::Result<Arc<Self>> {
        let client = OpportunitiesClient::new(&config.backend).context("opportunities client")?;

        tracing::info!(base_url = %client.base_url(), "configured opportunities backend");

        Ok(Self::with_source(config, Arc::new(client)))
    }

    pub fn with_source(config: Config, source: Arc<dyn OpportunitySource>) -> Arc<Self> {
        Arc::new(Self {
            config,
            source,
            started_at: std::time::Instant::now(),
        })
    }
}
