use crate::commands::{CmdMessage, CmdResult};
use crate::config::GenerationConfig;
use crate::error::Result;
use crate::store::ConfigStore;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
    /// Persist a whole config, e.g. the options of the last generation.
    Save(GenerationConfig),
    Reset,
}

/// The stored options, or the defaults when nothing usable is stored.
pub fn effective<S: ConfigStore>(store: &S) -> GenerationConfig {
    store.load().unwrap_or_default()
}

pub fn run<S: ConfigStore>(store: &mut S, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(effective(store))),
        ConfigAction::ShowKey(key) => {
            let config = effective(store);
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = effective(store);
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            store.save(&config)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
        ConfigAction::Save(config) => {
            config.validate()?;
            store.save(&config)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success("Options saved"));
            Ok(result)
        }
        ConfigAction::Reset => {
            store.clear()?;
            let mut result = CmdResult::default().with_config(GenerationConfig::default());
            result.add_message(CmdMessage::success("Options reset to defaults"));
            Ok(result)
        }
    }
}
