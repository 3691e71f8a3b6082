//! 错误类型定义

use thiserror::Error;

/// 依赖注入错误类型
///
/// 注册表的核心操作从不返回错误；只有严格解析接口 `require` 会用到它。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    #[error("Bean 未注册: {name}")]
    NotRegistered { name: String },

    #[error("Bean 已注册但尚未构造: {name}")]
    NotConstructed { name: String },

    #[error("Bean 类型不匹配: {name}, 期望类型 {expected}")]
    TypeMismatch { name: String, expected: String },
}

impl DependencyError {
    /// 创建未注册错误
    pub fn not_registered(name: impl Into<String>) -> Self {
        Self::NotRegistered { name: name.into() }
    }

    /// 创建未构造错误
    pub fn not_constructed(name: impl Into<String>) -> Self {
        Self::NotConstructed { name: name.into() }
    }

    /// 创建类型不匹配错误
    pub fn type_mismatch(name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected: expected.into(),
        }
    }

    /// 出错的 Bean 名称
    pub fn bean_name(&self) -> &str {
        match self {
            Self::NotRegistered { name }
            | Self::NotConstructed { name }
            | Self::TypeMismatch { name, .. } => name,
        }
    }
}

/// 结果类型别名
pub type DependencyResult<T> = Result<T, DependencyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_bean_name() {
        let err = DependencyError::not_registered("Service");
        assert_eq!(err.to_string(), "Bean 未注册: Service");
        assert_eq!(err.bean_name(), "Service");

        let err = DependencyError::type_mismatch("Message", "alloc::string::String");
        assert!(err.to_string().contains("alloc::string::String"));
        assert_eq!(err.bean_name(), "Message");
    }
}
