//! 元数据定义
//!
//! 提供已注册 Bean 的描述信息，用于诊断和日志

use crate::lifecycle::BeanState;

/// Bean 描述符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanDescriptor {
    /// Bean 名称
    pub name: String,
    /// 实例类型名称
    pub type_name: &'static str,
    /// 显式声明的依赖
    pub depends_on: Vec<String>,
    /// 当前状态
    pub state: BeanState,
}

impl BeanDescriptor {
    /// 创建新的 Bean 描述符
    pub fn new(name: impl Into<String>, type_name: &'static str) -> Self {
        Self {
            name: name.into(),
            type_name,
            depends_on: Vec::new(),
            state: BeanState::Registered,
        }
    }

    /// 设置依赖列表
    pub fn with_dependencies(mut self, depends_on: Vec<String>) -> Self {
        self.depends_on = depends_on;
        self
    }

    /// 设置状态
    pub fn with_state(mut self, state: BeanState) -> Self {
        self.state = state;
        self
    }

    /// 获取简短的类型名称（去掉所有模块路径，保留泛型结构）
    pub fn short_type_name(&self) -> String {
        let mut short = String::with_capacity(self.type_name.len());
        let mut segment_start = 0;
        for (index, ch) in self.type_name.char_indices() {
            if ch == ':' {
                continue;
            }
            if self.type_name[..index].ends_with("::") {
                short.truncate(segment_start);
            }
            short.push(ch);
            if !(ch.is_alphanumeric() || ch == '_') {
                segment_start = short.len();
            }
        }
        short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_type_name_strips_module_path() {
        let descriptor = BeanDescriptor::new("Message", "alloc::sync::Arc<dyn app::Message>");
        assert_eq!(descriptor.short_type_name(), "Arc<dyn Message>");

        let descriptor = BeanDescriptor::new(
            "Pair",
            "core::option::Option<(alloc::string::String, u8)>",
        );
        assert_eq!(descriptor.short_type_name(), "Option<(String, u8)>");

        let descriptor = BeanDescriptor::new("Count", "u32");
        assert_eq!(descriptor.short_type_name(), "u32");
    }
}
