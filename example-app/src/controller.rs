//! 控制器组件
//!
//! 模拟一个只处理 GET 请求的 HTTP 控制器。

use crate::service::{self, Service};
use di_abstractions::{BeanKey, BeanLookup, BeanLookupExt, BeanRegistry};
use std::sync::Arc;
use tracing::warn;

/// 控制器组件的 Bean 键
pub const BEAN: BeanKey<Arc<dyn Controller>> = BeanKey::new("Controller");

/// 控制器接口
pub trait Controller: Send + Sync {
    /// 模拟 HTTP GET
    fn http_get(&self) -> String;
}

/// 默认控制器实现
pub struct DefaultController {
    service: Option<Arc<dyn Service>>,
}

impl DefaultController {
    /// 使用给定的服务创建控制器
    pub fn new(service: Arc<dyn Service>) -> Self {
        Self {
            service: Some(service),
        }
    }

    /// 在构造期从注册表解析依赖
    pub fn from_beans(beans: &dyn BeanLookup) -> Self {
        let dependency = beans.bean(service::BEAN);
        if dependency.is_none() {
            warn!("控制器构造时未找到依赖: {}", service::BEAN);
        }
        Self { service: dependency }
    }
}

impl Controller for DefaultController {
    fn http_get(&self) -> String {
        self.service
            .as_ref()
            .map(|service| service.message())
            .unwrap_or_default()
    }
}

/// 注册控制器组件
pub fn register(registry: &mut impl BeanRegistry) {
    registry.register_with_dependencies(BEAN, &[service::BEAN.name()], |beans| {
        Arc::new(DefaultController::from_beans(beans)) as Arc<dyn Controller>
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockService;
    use di_impl::Registry;

    const EXPECTED: &str = "mock Message";

    #[test]
    fn test_http_get_with_mock_service() {
        let mut mock = MockService::new();
        mock.expect_message()
            .times(1)
            .returning(|| EXPECTED.to_string());

        let controller = DefaultController::new(Arc::new(mock));
        assert_eq!(controller.http_get(), EXPECTED);
    }

    #[test]
    fn test_replaced_service_is_injected() {
        let mut mock = MockService::new();
        mock.expect_message().returning(|| EXPECTED.to_string());

        let mut registry = Registry::new();
        registry.replace(service::BEAN, Arc::new(mock) as Arc<dyn Service>);
        register(&mut registry);
        registry.init();

        let controller = registry.bean(BEAN).unwrap();
        assert_eq!(controller.http_get(), EXPECTED);
    }
}
