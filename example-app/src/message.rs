//! 消息组件

use di_abstractions::{BeanKey, BeanRegistry};
use std::sync::Arc;

/// 消息组件的 Bean 键
pub const BEAN: BeanKey<Arc<dyn Message>> = BeanKey::new("Message");

/// 默认消息内容
pub const DEFAULT_MESSAGE: &str = "Hello, World";

/// 消息组件接口
pub trait Message: Send + Sync {
    /// 返回消息
    fn get(&self) -> String;
}

/// 默认消息实现
#[derive(Debug, Clone)]
pub struct DefaultMessage {
    message: String,
}

impl DefaultMessage {
    /// 使用给定内容创建消息组件
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for DefaultMessage {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}

impl Message for DefaultMessage {
    fn get(&self) -> String {
        self.message.clone()
    }
}

/// 注册消息组件
pub fn register(registry: &mut impl BeanRegistry) {
    registry.register(BEAN, |_| Arc::new(DefaultMessage::default()) as Arc<dyn Message>);
}
