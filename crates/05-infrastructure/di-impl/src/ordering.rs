//! 构造顺序计算

use std::collections::HashSet;
use tracing::warn;

/// 计算构造顺序
///
/// `entries` 按注册顺序给出每个 Bean 及其声明的依赖。每一步都选取依赖已满足且
/// 注册最早的 Bean，因此没有声明依赖时结果就是注册顺序。未注册的依赖不参与排序；
/// 互相依赖而无法排序的 Bean 按注册顺序追加到末尾。
pub(crate) fn construction_order<'a>(entries: &[(&'a str, &'a [String])]) -> Vec<&'a str> {
    let registered: HashSet<&str> = entries.iter().map(|(name, _)| *name).collect();
    let mut placed: HashSet<&str> = HashSet::with_capacity(entries.len());
    let mut order = Vec::with_capacity(entries.len());

    while let Some((name, _)) = entries.iter().find(|(name, depends_on)| {
        !placed.contains(name)
            && depends_on
                .iter()
                .map(String::as_str)
                .all(|dep| placed.contains(dep) || !registered.contains(dep))
    }) {
        placed.insert(*name);
        order.push(*name);
    }

    if order.len() < entries.len() {
        let unordered: Vec<&str> = entries
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| !placed.contains(name))
            .collect();
        warn!("存在无法满足的依赖顺序，按注册顺序构造: {:?}", unordered);
        order.extend(unordered);
    }

    order
}
