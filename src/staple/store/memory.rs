use super::ConfigStore;
use crate::config::GenerationConfig;
use crate::error::Result;

#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    config: Option<GenerationConfig>,
}

impl InMemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GenerationConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load(&self) -> Option<GenerationConfig> {
        self.config.clone()
    }

    fn save(&mut self, config: &GenerationConfig) -> Result<()> {
        self.config = Some(config.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.config = None;
        Ok(())
    }
}
