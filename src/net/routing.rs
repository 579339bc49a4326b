//! 路由表
//!
//! 路由表把网络前缀字符串映射到下一跳字符串。转发时按表的迭代顺序
//! （前缀第一次插入的顺序）逐条比较，目的地址以该前缀开头即命中。
//!
//! 这里的匹配是纯字符串前缀匹配，不解析 CIDR，也不做最长前缀匹配：
//! `"10.0."` 先于 `"10.0.1."` 插入时，`"10.0.1.5"` 会命中 `"10.0."`。

#[derive(Debug, Default, Clone)]
pub struct RoutingTable {
    /// (prefix, next_hop)，每个 prefix 至多出现一次
    routes: Vec<(String, String)>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖一条路由。覆盖时保留该前缀原来的位置。
    pub fn insert(&mut self, prefix: impl Into<String>, next_hop: impl Into<String>) {
        let prefix = prefix.into();
        let next_hop = next_hop.into();
        match self.routes.iter_mut().find(|(p, _)| *p == prefix) {
            Some((_, nh)) => *nh = next_hop,
            None => self.routes.push((prefix, next_hop)),
        }
    }

    /// 查找某个前缀对应的下一跳
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, nh)| nh.as_str())
    }

    /// 按迭代顺序返回第一个命中的 (prefix, next_hop)
    pub fn lookup(&self, destination: &str) -> Option<(&str, &str)> {
        self.routes
            .iter()
            .find(|(p, _)| destination.starts_with(p.as_str()))
            .map(|(p, nh)| (p.as_str(), nh.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(p, nh)| (p.as_str(), nh.as_str()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
