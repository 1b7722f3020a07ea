//! 顶点表
//!
//! 固定容量的顶点数组，附带标签到下标的哈希索引

use crate::error::{Error, Result};
use crate::graph::vertex::Vertex;
use crate::types::VisitStatus;
use std::collections::HashMap;

/// 顶点表
///
/// 下标按插入顺序分配，容量在构造时确定。
#[derive(Debug, Clone)]
pub struct VertexTable {
    /// 顶点槽位
    vertices: Vec<Vertex>,
    /// 标签到下标的映射
    label_to_index: HashMap<String, usize>,
    /// 容量
    capacity: usize,
}

impl VertexTable {
    /// 创建指定容量的空表
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            label_to_index: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// 将顶点放入下一个空闲槽位，返回其下标
    pub fn insert(&mut self, label: &str) -> Result<usize> {
        if self.label_to_index.contains_key(label) {
            return Err(Error::VertexAlreadyExists(label.to_string()));
        }
        if self.vertices.len() >= self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
                label: label.to_string(),
            });
        }

        let index = self.vertices.len();
        self.vertices.push(Vertex::new(label));
        self.label_to_index.insert(label.to_string(), index);
        Ok(index)
    }

    /// 通过标签查找下标
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }

    pub fn get(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// 推进指定顶点的状态，下标越界或迁移非法时返回 false
    pub fn advance(&mut self, index: usize, next: VisitStatus) -> bool {
        self.vertices
            .get_mut(index)
            .map(|v| v.advance(next))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }
}
