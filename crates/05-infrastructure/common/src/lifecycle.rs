//! Bean 生命周期状态

use serde::{Deserialize, Serialize};

/// Bean 生命周期状态
///
/// 状态只会向前推进：`Unregistered → Registered → Constructed`。
/// 对从未注册的名称调用 `replace` 会直接进入 `Constructed`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeanState {
    /// 未注册
    #[default]
    Unregistered,
    /// 已注册构造器，尚未构造
    Registered,
    /// 已持有实例
    Constructed,
}

impl BeanState {
    /// 是否已持有实例
    pub fn is_constructed(self) -> bool {
        matches!(self, Self::Constructed)
    }
}
