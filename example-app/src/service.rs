//! 服务组件

use crate::message::{self, Message};
use di_abstractions::{BeanKey, BeanLookup, BeanLookupExt, BeanRegistry};
use std::sync::Arc;
use tracing::warn;

/// 服务组件的 Bean 键
pub const BEAN: BeanKey<Arc<dyn Service>> = BeanKey::new("Service");

/// 服务组件接口
#[cfg_attr(test, mockall::automock)]
pub trait Service: Send + Sync {
    /// 返回消息组件提供的消息
    fn message(&self) -> String;
}

/// 默认服务实现
pub struct DefaultService {
    message: Option<Arc<dyn Message>>,
}

impl DefaultService {
    /// 使用给定的消息组件创建服务
    pub fn new(message: Arc<dyn Message>) -> Self {
        Self {
            message: Some(message),
        }
    }

    /// 在构造期从注册表解析依赖
    ///
    /// 消息组件尚未构造时服务仍然可以创建，之后返回空消息。
    pub fn from_beans(beans: &dyn BeanLookup) -> Self {
        let dependency = beans.bean(message::BEAN);
        if dependency.is_none() {
            warn!("服务构造时未找到依赖: {}", message::BEAN);
        }
        Self { message: dependency }
    }
}

impl Service for DefaultService {
    fn message(&self) -> String {
        self.message
            .as_ref()
            .map(|message| message.get())
            .unwrap_or_default()
    }
}

/// 注册服务组件
pub fn register(registry: &mut impl BeanRegistry) {
    registry.register_with_dependencies(BEAN, &[message::BEAN.name()], |beans| {
        Arc::new(DefaultService::from_beans(beans)) as Arc<dyn Service>
    });
}
