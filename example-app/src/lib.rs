//! # 示例应用程序
//!
//! 演示如何使用 Bean 注册表组装一个简单的三层调用链：
//! `Controller → Service → Message`。

pub mod controller;
pub mod message;
pub mod service;

use controller::Controller;
use di_abstractions::{BeanLookup, BeanLookupExt, BeanRegistry};
use infrastructure_common::DependencyResult;
use std::sync::Arc;
use tracing::error;

/// 按依赖顺序注册全部示例组件
pub fn register_components(registry: &mut impl BeanRegistry) {
    message::register(registry);
    service::register(registry);
    controller::register(registry);
}

/// 以 `名称: 类型 [状态]` 的形式描述已注册组件
pub fn describe_components(registry: &impl BeanRegistry) -> Vec<String> {
    registry
        .descriptors()
        .iter()
        .map(|descriptor| {
            format!(
                "{}: {} [{:?}]",
                descriptor.name,
                descriptor.short_type_name(),
                descriptor.state
            )
        })
        .collect()
}

/// 解析控制器，失败时记录出错的 Bean
pub fn resolve_controller(beans: &impl BeanLookup) -> DependencyResult<Arc<dyn Controller>> {
    beans.require(controller::BEAN).map_err(|err| {
        error!("无法解析 Bean {}: {}", err.bean_name(), err);
        err
    })
}
