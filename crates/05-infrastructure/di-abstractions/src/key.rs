//! 类型化的 Bean 键

use std::fmt;
use std::marker::PhantomData;

/// 带类型的 Bean 名称
///
/// 每个 Bean 的键只声明一次，通常与它的能力 trait 放在一起：
///
/// ```rust
/// use di_abstractions::BeanKey;
/// use std::sync::Arc;
///
/// pub trait Message: Send + Sync {
///     fn get(&self) -> String;
/// }
///
/// pub const BEAN: BeanKey<Arc<dyn Message>> = BeanKey::new("Message");
/// assert_eq!(BEAN.name(), "Message");
/// ```
///
/// 注册和查找都经过同一个键，因此两端的类型在编译期保持一致。
pub struct BeanKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> BeanKey<T> {
    /// 创建新的 Bean 键
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Bean 名称
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Bean 实例的类型名称
    pub fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl<T> Clone for BeanKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BeanKey<T> {}

impl<T> fmt::Debug for BeanKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanKey")
            .field("name", &self.name)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> fmt::Display for BeanKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
