pub mod node;
pub mod patch;
pub mod props;

pub use node::{Comparator, Component, Key, MemoNode, RegularNode, StaticNode, VNode};
pub use patch::Patch;
pub use props::{shallow_equal, Handler, PropValue, Props};
