//! 示例组件与注册表的端到端集成测试

use di_abstractions::{BeanLookup, BeanLookupExt, BeanRegistry};
use di_impl::Registry;
use example_app::controller::{self, Controller, DefaultController};
use example_app::message::{self, DefaultMessage, Message, DEFAULT_MESSAGE};
use example_app::service::{self, Service};
use infrastructure_common::{BeanState, DependencyError, RegistryOptions, ReinitPolicy};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// 测试替身
struct StubService;

impl Service for StubService {
    fn message(&self) -> String {
        "mock Message".to_string()
    }
}

#[test]
fn test_controller_returns_hello_world() {
    init_test_logger();

    let mut registry = Registry::new();
    example_app::register_components(&mut registry);

    assert_eq!(registry.names(), vec!["Message", "Service", "Controller"]);
    assert!(registry.bean(controller::BEAN).is_none());

    registry.init();

    let controller = registry.require(controller::BEAN).unwrap();
    assert_eq!(controller.http_get(), DEFAULT_MESSAGE);
    assert_eq!(controller.http_get(), "Hello, World");
}

#[test]
fn test_registration_order_does_not_matter_with_declared_dependencies() {
    init_test_logger();

    let mut registry = Registry::new();
    controller::register(&mut registry);
    service::register(&mut registry);
    message::register(&mut registry);
    registry.init();

    let controller = registry.bean(controller::BEAN).unwrap();
    assert_eq!(controller.http_get(), "Hello, World");
}

#[test]
fn test_controller_with_stub_service() {
    init_test_logger();

    let controller = DefaultController::new(Arc::new(StubService));
    assert_eq!(controller.http_get(), "mock Message");
}

#[test]
fn test_replaced_message_flows_through_chain() {
    init_test_logger();

    let options = RegistryOptions::default().with_reinit(ReinitPolicy::PreserveConstructed);
    let mut registry = Registry::with_options(options);
    example_app::register_components(&mut registry);
    registry.replace(
        message::BEAN,
        Arc::new(DefaultMessage::new("replaced")) as Arc<dyn Message>,
    );
    registry.init();

    let controller = registry.bean(controller::BEAN).unwrap();
    assert_eq!(controller.http_get(), "replaced");
}

#[test]
fn test_strict_lookup_before_init() {
    init_test_logger();

    let mut registry = Registry::new();
    example_app::register_components(&mut registry);

    assert_eq!(registry.state("Controller"), BeanState::Registered);
    match registry.require(controller::BEAN) {
        Err(err) => assert_eq!(err, DependencyError::not_constructed("Controller")),
        Ok(_) => panic!("控制器不应在初始化前可用"),
    }
}

#[test]
fn test_duplicate_component_registration_is_ignored() {
    init_test_logger();

    let mut registry = Registry::new();
    example_app::register_components(&mut registry);
    example_app::register_components(&mut registry);

    assert_eq!(registry.len(), 3);
    registry.init();
    assert_eq!(
        registry.bean(controller::BEAN).unwrap().http_get(),
        "Hello, World"
    );
}
