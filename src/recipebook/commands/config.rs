use crate::commands::{CmdMessage, CmdResult};
use crate::config::RecipeConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = RecipeConfig::load(data_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = RecipeConfig::load(data_dir)?;
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
            let mut config = RecipeConfig::load(data_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(data_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::Backend;

    #[test]
    fn set_then_show() {
        let dir = tempfile::tempdir().unwrap();
        let set = run(
            dir.path(),
            ConfigAction::Set("backend".into(), "sqlite".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].content, "backend set to sqlite");

        let shown = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.config.unwrap().backend, Backend::Sqlite);

        let key = run(dir.path(), ConfigAction::ShowKey("backend".into())).unwrap();
        assert_eq!(key.messages[0].content, "sqlite");
    }

    #[test]
    fn bad_value_reports_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("backend".into(), "mongo".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(RecipeConfig::load(dir.path()).unwrap().backend == Backend::Json);
    }
}
