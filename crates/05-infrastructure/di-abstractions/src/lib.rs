//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义 Bean 注册和按名称解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`BeanKey`] - 带类型的 Bean 名称
//! - [`BeanLookup`] - 构造期和运行期共用的只读查找接口
//! - [`BeanLookupExt`] - 基于 [`BeanKey`] 的类型化查找
//! - [`BeanRegistry`] - 注册、替换和初始化接口

pub mod key;
pub mod registry;
pub mod resolver;

pub use key::*;
pub use registry::*;
pub use resolver::*;
