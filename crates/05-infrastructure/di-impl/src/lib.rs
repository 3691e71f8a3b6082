//! # 依赖注入具体实现
//!
//! 提供具体的 Bean 注册表 [`Registry`]：按名称登记构造器，初始化时按注册顺序
//! （满足显式声明的依赖）逐个构造并保存单例实例。
//!
//! ```rust
//! use di_abstractions::{BeanKey, BeanLookupExt, BeanRegistry};
//! use di_impl::Registry;
//!
//! const GREETING: BeanKey<String> = BeanKey::new("Greeting");
//! const LENGTH: BeanKey<usize> = BeanKey::new("Length");
//!
//! let mut registry = Registry::new();
//! registry.register(GREETING, |_| "Hello, World".to_string());
//! registry.register(LENGTH, |beans| beans.bean(GREETING).map_or(0, |g| g.len()));
//!
//! assert_eq!(registry.bean(LENGTH), None);
//! registry.init();
//! assert_eq!(registry.bean(LENGTH), Some(12));
//! ```

mod ordering;

use di_abstractions::{BeanInstance, BeanKey, BeanLookup, BeanRegistry};
use infrastructure_common::{BeanDescriptor, BeanState, RegistryOptions, ReinitPolicy};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

/// 类型擦除后的构造器
type BeanConstructor = Box<dyn Fn(&dyn BeanLookup) -> BeanInstance>;

/// Bean 注册信息
struct BeanRegistration {
    /// 实例类型名称
    type_name: &'static str,
    /// 显式声明的依赖
    depends_on: Vec<String>,
    /// 构造器
    constructor: BeanConstructor,
}

impl fmt::Debug for BeanRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanRegistration")
            .field("type_name", &self.type_name)
            .field("depends_on", &self.depends_on)
            .field("constructor", &"<function>")
            .finish()
    }
}

/// 构造期和运行期共用的查找视图
struct Beans<'a> {
    registrations: &'a HashMap<String, BeanRegistration>,
    instances: &'a HashMap<String, BeanInstance>,
}

impl<'a> Beans<'a> {
    /// 查找实例，返回的引用与注册表同寿命
    fn instance(&self, name: &str) -> Option<&'a (dyn Any + Send + Sync)> {
        self.instances.get(name).map(|instance| &**instance)
    }
}

impl BeanLookup for Beans<'_> {
    fn lookup(&self, name: &str) -> Option<&(dyn Any + Send + Sync)> {
        self.instance(name)
    }

    fn state(&self, name: &str) -> BeanState {
        if self.instances.contains_key(name) {
            BeanState::Constructed
        } else if self.registrations.contains_key(name) {
            BeanState::Registered
        } else {
            BeanState::Unregistered
        }
    }
}

/// Bean 注册表
///
/// 每个进程创建一个实例，并以 `&mut` 传给所有注册点。注册必须在 [`init`]
/// 之前完成；借用检查器保证同一注册表上注册和初始化不会交错。
///
/// [`init`]: BeanRegistry::init
pub struct Registry {
    /// 行为配置
    options: RegistryOptions,
    /// 注册顺序
    order: Vec<String>,
    /// 名称到构造器
    registrations: HashMap<String, BeanRegistration>,
    /// 名称到实例
    instances: HashMap<String, BeanInstance>,
}

impl Registry {
    /// 使用默认配置创建注册表
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    /// 使用指定配置创建注册表
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            options,
            order: Vec::new(),
            registrations: HashMap::new(),
            instances: HashMap::new(),
        }
    }

    /// 当前配置
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// 已注册构造器数量
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// 是否没有任何注册
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn beans(&self) -> Beans<'_> {
        Beans {
            registrations: &self.registrations,
            instances: &self.instances,
        }
    }

    fn warn_missing_dependencies(&self) {
        for name in &self.order {
            let Some(registration) = self.registrations.get(name) else {
                continue;
            };
            for dep in &registration.depends_on {
                if !self.registrations.contains_key(dep) && !self.instances.contains_key(dep) {
                    warn!("Bean {} 声明的依赖未注册: {}", name, dep);
                }
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut constructed: Vec<&str> = self.instances.keys().map(String::as_str).collect();
        constructed.sort_unstable();

        f.debug_struct("Registry")
            .field("options", &self.options)
            .field("order", &self.order)
            .field("constructed", &constructed)
            .finish()
    }
}

impl BeanLookup for Registry {
    fn lookup(&self, name: &str) -> Option<&(dyn Any + Send + Sync)> {
        self.beans().instance(name)
    }

    fn state(&self, name: &str) -> BeanState {
        self.beans().state(name)
    }
}

impl BeanRegistry for Registry {
    fn register_with_dependencies<T, F>(
        &mut self,
        key: BeanKey<T>,
        depends_on: &[&str],
        constructor: F,
    ) where
        T: Clone + Send + Sync + 'static,
        F: Fn(&dyn BeanLookup) -> T + 'static,
    {
        let name = key.name();
        if self.registrations.contains_key(name) || self.instances.contains_key(name) {
            warn!("重复注册 Bean: {}", name);
            return;
        }

        debug!("注册 Bean: {} ({})", name, key.type_name());

        let erased: BeanConstructor =
            Box::new(move |beans: &dyn BeanLookup| -> BeanInstance { Box::new(constructor(beans)) });

        self.order.push(name.to_string());
        self.registrations.insert(
            name.to_string(),
            BeanRegistration {
                type_name: key.type_name(),
                depends_on: depends_on.iter().map(|dep| (*dep).to_string()).collect(),
                constructor: erased,
            },
        );
    }

    fn replace<T>(&mut self, key: BeanKey<T>, instance: T)
    where
        T: Clone + Send + Sync + 'static,
    {
        debug!("替换 Bean 实例: {}", key.name());
        self.instances.insert(key.name().to_string(), Box::new(instance));
    }

    fn init(&mut self) {
        self.warn_missing_dependencies();

        let entries: Vec<(&str, &[String])> = self
            .order
            .iter()
            .filter_map(|name| {
                self.registrations
                    .get(name)
                    .map(|registration| (name.as_str(), registration.depends_on.as_slice()))
            })
            .collect();
        let order: Vec<String> = ordering::construction_order(&entries)
            .into_iter()
            .map(str::to_owned)
            .collect();

        let mut constructed = 0usize;
        for name in &order {
            if self.options.reinit == ReinitPolicy::PreserveConstructed
                && self.instances.contains_key(name)
            {
                debug!("保留已有实例: {}", name);
                continue;
            }

            let Some(registration) = self.registrations.get(name) else {
                continue;
            };

            if self.options.log_construction {
                info!("初始化 Bean: {}", name);
            }

            let instance = (registration.constructor)(&self.beans());
            self.instances.insert(name.clone(), instance);
            constructed += 1;
        }

        info!("初始化完成，构造了 {} 个 Bean", constructed);
    }

    fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    fn descriptors(&self) -> Vec<BeanDescriptor> {
        self.order
            .iter()
            .filter_map(|name| {
                self.registrations.get(name).map(|registration| {
                    BeanDescriptor::new(name.clone(), registration.type_name)
                        .with_dependencies(registration.depends_on.clone())
                        .with_state(self.state(name))
                })
            })
            .collect()
    }
}
