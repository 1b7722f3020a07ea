//! 顶点定义
//!
//! 顶点由唯一的字符串标签标识，并携带遍历过程中的访问状态

use crate::types::VisitStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点标签
    label: String,
    /// 访问状态
    status: VisitStatus,
}

impl Vertex {
    /// 创建新顶点（状态为 Fresh）
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status: VisitStatus::Fresh,
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 获取访问状态
    pub fn status(&self) -> VisitStatus {
        self.status
    }

    pub fn is_fresh(&self) -> bool {
        self.status == VisitStatus::Fresh
    }

    /// 推进访问状态
    ///
    /// 只接受 Fresh -> Opened 和 Opened -> Closed，其余迁移被拒绝并返回 false。
    pub fn advance(&mut self, next: VisitStatus) -> bool {
        if self.status.can_advance_to(next) {
            self.status = next;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_new() {
        let v = Vertex::new("A");
        assert_eq!(v.label(), "A");
        assert!(v.is_fresh());
        assert_eq!(v.to_string(), "A");
    }

    #[test]
    fn test_vertex_advance_forward_only() {
        let mut v = Vertex::new("A");
        assert!(!v.advance(VisitStatus::Closed));
        assert!(v.advance(VisitStatus::Opened));
        assert!(!v.advance(VisitStatus::Opened));
        assert!(v.advance(VisitStatus::Closed));
        assert!(!v.advance(VisitStatus::Fresh));
        assert_eq!(v.status(), VisitStatus::Closed);
    }
}
