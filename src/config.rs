use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::Difficulty;

/// 启动配置，只在启动时读取一次，程序不会写回
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 开局难度，未配置时为简单
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// 从TOML文件加载配置，文件不存在时返回默认配置
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difficulty() {
        let config: Config = toml::from_str("difficulty = \"hard\"").unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/tapmatch/config.toml")).unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
    }
}
