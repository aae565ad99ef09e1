//! Binding chain: key/value objects inherited across child loggers
//!
//! Each `child()` derivation appends one immutable node to a persistent
//! linked list. Nodes are shared by reference between a parent and all of
//! its descendants; nothing is deep-merged, so the full lineage remains
//! observable, oldest binding first, at every level call.

use serde_json::{Map, Value};
use std::sync::Arc;

/// Nesting depth beyond which collection degrades to a single shallow level.
/// Guards against a corrupted or overflowed depth counter driving unbounded
/// iteration.
pub const MAX_BINDING_DEPTH: u16 = 1024;

#[derive(Debug)]
struct BindingNode {
    fields: Map<String, Value>,
    parent: Option<Arc<BindingNode>>,
    depth: u16,
}

/// The ordered set of bindings accumulated from root to this logger.
///
/// Cloning a chain is cheap: nodes are reference-counted and never mutated.
#[derive(Debug, Clone, Default)]
pub struct BindingChain {
    head: Option<Arc<BindingNode>>,
}

impl BindingChain {
    /// The empty chain of a root logger.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Derive a chain with `fields` appended as the newest binding.
    pub fn child(&self, fields: Map<String, Value>) -> Self {
        let depth = match &self.head {
            Some(node) => node.depth.saturating_add(1),
            None => 1,
        };
        Self {
            head: Some(Arc::new(BindingNode {
                fields,
                parent: self.head.clone(),
                depth,
            })),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of bindings that will be delivered, after clamping.
    pub fn depth(&self) -> usize {
        self.limit()
    }

    /// Collect the bindings oldest-first.
    ///
    /// Iteration is bounded by the stored depth counter; an out-of-range
    /// counter yields only the newest binding rather than walking the whole
    /// (possibly corrupt) ancestry.
    pub fn collect(&self) -> Vec<&Map<String, Value>> {
        let limit = self.limit();
        let mut out = Vec::with_capacity(limit);
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            if out.len() >= limit {
                break;
            }
            out.push(&current.fields);
            node = current.parent.as_deref();
        }
        out.reverse();
        out
    }

    fn limit(&self) -> usize {
        match &self.head {
            None => 0,
            Some(node) if node.depth >= MAX_BINDING_DEPTH => 1,
            Some(node) => node.depth as usize,
        }
    }
}
