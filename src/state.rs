use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::translate::{MyMemoryTranslator, TranslateInterface};

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn TranslateInterface>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let translator = MyMemoryTranslator::new(
            config.upstream_endpoint.clone(),
            Duration::from_secs(config.upstream_timeout_secs),
        )?;

        Ok(Self {
            translator: Arc::new(translator),
        })
    }
}
