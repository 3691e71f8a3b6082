//! 注册表配置
//!
//! 宿主程序可以从任意配置源反序列化 [`RegistryOptions`]，缺省字段取默认值。

use serde::{Deserialize, Serialize};

/// 重复初始化策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReinitPolicy {
    /// 每次 `init` 都重新调用全部构造器并覆盖已有实例（包括 `replace` 放入的实例）
    #[default]
    Rerun,
    /// `init` 跳过已经持有实例的 Bean
    PreserveConstructed,
}

/// 注册表行为配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// 重复初始化策略
    pub reinit: ReinitPolicy,
    /// 是否在 `init` 时逐个记录构造日志
    pub log_construction: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            reinit: ReinitPolicy::Rerun,
            log_construction: true,
        }
    }
}

impl RegistryOptions {
    /// 设置重复初始化策略
    pub fn with_reinit(mut self, reinit: ReinitPolicy) -> Self {
        self.reinit = reinit;
        self
    }

    /// 设置是否记录构造日志
    pub fn with_log_construction(mut self, enabled: bool) -> Self {
        self.log_construction = enabled;
        self
    }

    /// 从 JSON 配置节绑定
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
