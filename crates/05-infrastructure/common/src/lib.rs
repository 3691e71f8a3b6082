//! # Infrastructure Common
//!
//! 这个 crate 提供了 Bean 注册表基础设施层的公共类型。
//!
//! ## 核心类型
//!
//! - [`DependencyError`] - 严格解析时的依赖错误
//! - [`RegistryOptions`] - 注册表行为配置
//! - [`BeanState`] - Bean 的生命周期状态
//! - [`BeanDescriptor`] - 已注册 Bean 的描述信息
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的编译时安全
//! - 注册表本身不报告失败，只做静默降级
//! - 显式的注册表实例，不依赖隐藏的全局状态

pub mod configuration;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use configuration::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
