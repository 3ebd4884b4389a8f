//! Virtual tree nodes.
//!
//! A [`VNode`] is a closed sum over three variants that share props,
//! ordered children and an optional [`Key`]:
//!
//! - [`StaticNode`]: plain element identified by an opaque tag
//! - [`RegularNode`]: component function, re-rendered on any props change
//! - [`MemoNode`]: component function gated by a [`Comparator`]
//!
//! Trees are immutable for the duration of a reconciliation pass; the engine
//! only ever borrows them.

use crate::model::props::{shallow_equal, PropValue, Props};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Caller-assigned sibling identity.
///
/// `Key::Str("1")` and `Key::Int(1)` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Str(String),
    Int(i64),
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => write!(f, "{s:?}"),
            Key::Int(n) => write!(f, "{n}"),
        }
    }
}

type RenderFn = dyn Fn(&Props) -> VNode + Send + Sync;
type CompareFn = dyn Fn(&Props, &Props) -> bool + Send + Sync;

/// A component function.
///
/// The engine never calls it; only tree producers do, via
/// [`Component::render`]. Clones share the same function.
#[derive(Clone)]
pub struct Component {
    name: Arc<str>,
    render: Arc<RenderFn>,
}

impl Component {
    pub fn new<F>(name: impl Into<Arc<str>>, render: F) -> Self
    where
        F: Fn(&Props) -> VNode + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            render: Arc::new(render),
        }
    }

    /// Display name, used in logs and summaries only
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the component for the given props.
    pub fn render(&self, props: &Props) -> VNode {
        (self.render)(props)
    }

    /// True when both handles share one function.
    pub fn ptr_eq(&self, other: &Component) -> bool {
        Arc::ptr_eq(&self.render, &other.render)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({} @ {:p})", self.name, Arc::as_ptr(&self.render))
    }
}

/// Props comparator attached to a memo component.
///
/// Returns `true` when the props change is *insignificant* and the
/// component should not be updated.
#[derive(Clone)]
pub struct Comparator {
    compare: Arc<CompareFn>,
}

impl Comparator {
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&Props, &Props) -> bool + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(compare),
        }
    }

    /// Comparator using shallow props equality.
    pub fn shallow() -> Self {
        Self::new(shallow_equal)
    }

    pub fn compare(&self, prev: &Props, next: &Props) -> bool {
        (self.compare)(prev, next)
    }

    pub fn ptr_eq(&self, other: &Comparator) -> bool {
        Arc::ptr_eq(&self.compare, &other.compare)
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comparator({:p})", Arc::as_ptr(&self.compare))
    }
}

/// Plain element node.
#[derive(Debug, Clone)]
pub struct StaticNode {
    pub tag: String,
    pub props: Props,
    pub children: Vec<VNode>,
    pub key: Option<Key>,
}

/// Component node without memoization.
#[derive(Debug, Clone)]
pub struct RegularNode {
    pub component: Component,
    pub props: Props,
    pub children: Vec<VNode>,
    pub key: Option<Key>,
}

/// Component node whose props updates are gated by `compare`.
#[derive(Debug, Clone)]
pub struct MemoNode {
    pub component: Component,
    pub compare: Comparator,
    pub props: Props,
    pub children: Vec<VNode>,
    pub key: Option<Key>,
}

/// One node of a virtual UI tree.
#[derive(Debug, Clone)]
pub enum VNode {
    Static(StaticNode),
    Regular(RegularNode),
    Memo(MemoNode),
}

impl VNode {
    /// New static element with no props, children or key.
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Static(StaticNode {
            tag: tag.into(),
            props: Props::new(),
            children: Vec::new(),
            key: None,
        })
    }

    /// New regular component node.
    pub fn component(component: Component) -> Self {
        VNode::Regular(RegularNode {
            component,
            props: Props::new(),
            children: Vec::new(),
            key: None,
        })
    }

    /// New memo component node.
    pub fn memo(component: Component, compare: Comparator) -> Self {
        VNode::Memo(MemoNode {
            component,
            compare,
            props: Props::new(),
            children: Vec::new(),
            key: None,
        })
    }

    pub fn props(&self) -> &Props {
        match self {
            VNode::Static(node) => &node.props,
            VNode::Regular(node) => &node.props,
            VNode::Memo(node) => &node.props,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Static(node) => &node.children,
            VNode::Regular(node) => &node.children,
            VNode::Memo(node) => &node.children,
        }
    }

    pub fn key(&self) -> Option<&Key> {
        match self {
            VNode::Static(node) => node.key.as_ref(),
            VNode::Regular(node) => node.key.as_ref(),
            VNode::Memo(node) => node.key.as_ref(),
        }
    }

    fn parts_mut(&mut self) -> (&mut Props, &mut Vec<VNode>, &mut Option<Key>) {
        match self {
            VNode::Static(node) => (&mut node.props, &mut node.children, &mut node.key),
            VNode::Regular(node) => (&mut node.props, &mut node.children, &mut node.key),
            VNode::Memo(node) => (&mut node.props, &mut node.children, &mut node.key),
        }
    }

    /// Replace the whole prop map.
    pub fn with_props(mut self, props: Props) -> Self {
        *self.parts_mut().0 = props;
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.parts_mut().0.insert(key, value);
        self
    }

    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        *self.parts_mut().2 = Some(key.into());
        self
    }

    /// Append children in order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = VNode>) -> Self {
        self.parts_mut().1.extend(children);
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        self.parts_mut().1.push(child);
        self
    }
}
