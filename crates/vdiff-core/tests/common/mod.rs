use proptest::prelude::*;
use std::sync::OnceLock;
use vdiff_core::model::{Comparator, Component, Key, Props, VNode};

/// Shared component handle so every tree refers to the same function
#[allow(dead_code)]
pub fn counter() -> Component {
    static COUNTER: OnceLock<Component> = OnceLock::new();
    COUNTER
        .get_or_init(|| Component::new("Counter", |_| VNode::element("div")))
        .clone()
}

#[allow(dead_code)]
pub fn label() -> Component {
    static LABEL: OnceLock<Component> = OnceLock::new();
    LABEL
        .get_or_init(|| {
            Component::new("Label", |props: &Props| {
                VNode::element("span").with_props(props.clone())
            })
        })
        .clone()
}

/// Comparator that reports every props change as insignificant
#[allow(dead_code)]
pub fn always_equal() -> Comparator {
    Comparator::new(|_, _| true)
}

/// Comparator that reports every props change as significant
#[allow(dead_code)]
pub fn never_equal() -> Comparator {
    Comparator::new(|_, _| false)
}

/// `<span id={id} key={key}>`
#[allow(dead_code)]
pub fn span_with_id(id: &str, key: &str) -> VNode {
    VNode::element("span").with_prop("id", id).with_key(key)
}

#[allow(dead_code)]
pub fn div(children: impl IntoIterator<Item = VNode>) -> VNode {
    VNode::element("div").with_children(children)
}

// ---------------------------------------------------------------------------
// Property-test strategies
// ---------------------------------------------------------------------------

/// Mostly unkeyed; keys drawn from a tiny space so collisions and
/// duplicates actually happen
#[allow(dead_code)]
pub fn arb_key() -> impl Strategy<Value = Option<Key>> {
    prop_oneof![
        3 => Just(None),
        1 => (0i64..4).prop_map(|k| Some(Key::Int(k))),
        1 => "[a-c]".prop_map(|s| Some(Key::Str(s))),
    ]
}

/// Small prop maps over a shared key space
#[allow(dead_code)]
pub fn arb_props() -> impl Strategy<Value = Props> {
    prop::collection::btree_map("[a-c]", 0i32..3, 0..3)
        .prop_map(|map| map.into_iter().collect::<Props>())
}

/// Node without props, key or children
#[allow(dead_code)]
pub fn arb_shell() -> impl Strategy<Value = VNode> {
    prop_oneof![
        4 => prop::sample::select(vec!["div", "span", "p"]).prop_map(|tag| VNode::element(tag)),
        1 => Just(()).prop_map(|_| VNode::component(counter())),
        1 => Just(()).prop_map(|_| VNode::memo(counter(), Comparator::shallow())),
    ]
}

#[allow(dead_code)]
fn assemble(shell: VNode, props: Props, key: Option<Key>, children: Vec<VNode>) -> VNode {
    let node = shell.with_props(props).with_children(children);
    match key {
        Some(key) => node.with_key(key),
        None => node,
    }
}

/// Trees up to four levels deep with at most four children per node
#[allow(dead_code)]
pub fn arb_vnode() -> impl Strategy<Value = VNode> {
    let leaf = (arb_shell(), arb_props(), arb_key())
        .prop_map(|(shell, props, key)| assemble(shell, props, key, Vec::new()));

    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            arb_shell(),
            arb_props(),
            arb_key(),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(shell, props, key, children)| assemble(shell, props, key, children))
    })
}
