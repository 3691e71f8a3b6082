//! Bean 查找接口
//!
//! 构造器通过 [`BeanLookup`] 解析自己的依赖，运行期调用方也使用同一接口。

use crate::key::BeanKey;
use infrastructure_common::{BeanState, DependencyError, DependencyResult};
use std::any::Any;
use tracing::warn;

/// 类型擦除后的 Bean 实例
pub type BeanInstance = Box<dyn Any + Send + Sync>;

/// 只读 Bean 查找接口
pub trait BeanLookup {
    /// 按名称查找已构造的实例
    fn lookup(&self, name: &str) -> Option<&(dyn Any + Send + Sync)>;

    /// 查询 Bean 状态
    fn state(&self, name: &str) -> BeanState;

    /// 是否已注册构造器或已持有实例
    fn contains(&self, name: &str) -> bool {
        self.state(name) != BeanState::Unregistered
    }
}

/// 基于 [`BeanKey`] 的类型化查找
///
/// 对所有 [`BeanLookup`] 实现（包括 `dyn BeanLookup`）自动可用。
pub trait BeanLookupExt: BeanLookup {
    /// 获取已构造的 Bean
    ///
    /// 未构造或类型不匹配时返回 `None`。
    fn bean<T>(&self, key: BeanKey<T>) -> Option<T>
    where
        T: Clone + 'static,
    {
        let instance = self.lookup(key.name())?;
        let typed = instance.downcast_ref::<T>().cloned();
        if typed.is_none() {
            warn!("Bean 类型不匹配: {}, 期望类型 {}", key.name(), key.type_name());
        }
        typed
    }

    /// 严格获取已构造的 Bean
    fn require<T>(&self, key: BeanKey<T>) -> DependencyResult<T>
    where
        T: Clone + 'static,
    {
        let Some(instance) = self.lookup(key.name()) else {
            return Err(match self.state(key.name()) {
                BeanState::Unregistered => DependencyError::not_registered(key.name()),
                _ => DependencyError::not_constructed(key.name()),
            });
        };

        instance
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| DependencyError::type_mismatch(key.name(), key.type_name()))
    }
}

impl<L: BeanLookup + ?Sized> BeanLookupExt for L {}
