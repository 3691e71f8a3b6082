//! Bean 注册表抽象接口

use crate::key::BeanKey;
use crate::resolver::BeanLookup;
use infrastructure_common::BeanDescriptor;

/// Bean 注册表 trait
///
/// 提供注册、替换和初始化的核心接口。所有操作都不返回错误：
/// 重复注册只记录警告，查找失败返回 `None`。
pub trait BeanRegistry: BeanLookup {
    /// 注册构造器
    ///
    /// 名称已注册或已持有实例时忽略本次注册并记录警告。
    fn register<T, F>(&mut self, key: BeanKey<T>, constructor: F)
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&dyn BeanLookup) -> T + 'static,
    {
        self.register_with_dependencies(key, &[], constructor);
    }

    /// 注册构造器并显式声明依赖
    ///
    /// 声明的依赖会在初始化时先于本 Bean 构造。
    fn register_with_dependencies<T, F>(
        &mut self,
        key: BeanKey<T>,
        depends_on: &[&str],
        constructor: F,
    ) where
        T: Clone + Send + Sync + 'static,
        F: Fn(&dyn BeanLookup) -> T + 'static;

    /// 直接替换 Bean 实例，跳过构造
    fn replace<T>(&mut self, key: BeanKey<T>, instance: T)
    where
        T: Clone + Send + Sync + 'static;

    /// 按构造顺序调用全部构造器并保存实例
    fn init(&mut self);

    /// 按注册顺序返回所有 Bean 名称
    fn names(&self) -> Vec<&str>;

    /// 获取所有 Bean 的描述符
    fn descriptors(&self) -> Vec<BeanDescriptor>;
}
