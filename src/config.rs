// src/config.rs

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_preserve_case() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// 命令行配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// 未显式指定时 remove 是否保留大小写
    #[serde(default = "default_preserve_case")]
    pub preserve_case: bool,

    /// tracing 过滤指令（`RUST_LOG` 优先）
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preserve_case: default_preserve_case(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        Ok(config_dir.join("diacritics").join("config.json"))
    }

    /// 从指定路径加载
    ///
    /// 返回 (配置, 文件是否存在)。文件不存在或无法解析时返回默认配置。
    pub fn load_from(path: &Path) -> Result<(Self, bool)> {
        tracing::debug!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::debug!("配置文件不存在，使用默认配置");
            return Ok((Self::default(), false));
        }

        let content = std::fs::read_to_string(path)?;
        let config = match serde_json::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("解析配置失败，使用默认配置: {}", e);
                Self::default()
            }
        };

        Ok((config, true))
    }

    /// 原子写入：先写临时文件，再重命名覆盖
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");

        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("写入临时文件失败: {}", e);
            e
        })?;

        if let Err(e) = std::fs::rename(&temp_path, path) {
            tracing::error!("重命名临时文件失败: {}", e);
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::info!("保存配置到: {:?}", path);
        Ok(())
    }
}
