//! Patch statistics and human-readable summary rendering.

use crate::model::{Patch, VNode};
use serde::{Deserialize, Serialize};
use vdiff_core_types::PatchKind;

/// Per-kind patch counts for one patch sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchStats {
    pub replace: usize,
    pub props: usize,
    pub reorder: usize,
    pub insert: usize,
    pub remove: usize,
    pub total: usize,
}

impl PatchStats {
    pub fn from_patches(patches: &[Patch<'_>]) -> Self {
        let mut stats = PatchStats::default();
        for patch in patches {
            match patch.kind() {
                PatchKind::Replace => stats.replace += 1,
                PatchKind::Props => stats.props += 1,
                PatchKind::Reorder => stats.reorder += 1,
                PatchKind::Insert => stats.insert += 1,
                PatchKind::Remove => stats.remove += 1,
            }
            stats.total += 1;
        }
        stats
    }

    pub fn count(&self, kind: PatchKind) -> usize {
        match kind {
            PatchKind::Replace => self.replace,
            PatchKind::Props => self.props,
            PatchKind::Reorder => self.reorder,
            PatchKind::Insert => self.insert,
            PatchKind::Remove => self.remove,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Compact one-line label for a node.
///
/// `<li key="a">` for elements, `Counter key=3` for components and
/// `memo(Counter)` for memo components.
pub fn describe_node(node: &VNode) -> String {
    match node {
        VNode::Static(n) => match &n.key {
            Some(key) => format!("<{} key={}>", n.tag, key),
            None => format!("<{}>", n.tag),
        },
        VNode::Regular(n) => keyed_label(n.component.name().to_string(), node),
        VNode::Memo(n) => keyed_label(format!("memo({})", n.component.name()), node),
    }
}

fn keyed_label(label: String, node: &VNode) -> String {
    match node.key() {
        Some(key) => format!("{label} key={key}"),
        None => label,
    }
}

/// Render a Markdown summary of a patch sequence.
///
/// Informational only; the patch sequence itself is the contract.
pub fn render_patch_summary(patches: &[Patch<'_>]) -> String {
    let mut out = String::new();

    out.push_str("## Patch Summary\n\n");

    if patches.is_empty() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    let stats = PatchStats::from_patches(patches);
    out.push_str(&format!(
        "**Total**: {} (replace {}, props {}, reorder {}, insert {}, remove {})\n\n",
        stats.total, stats.replace, stats.props, stats.reorder, stats.insert, stats.remove
    ));

    for (i, patch) in patches.iter().enumerate() {
        let line = match *patch {
            Patch::Replace { old_node, new_node } => format!(
                "{} {} -> {}",
                PatchKind::Replace,
                describe_node(old_node),
                describe_node(new_node)
            ),
            Patch::Props { node, new_props } => format!(
                "{} {} ({} props)",
                PatchKind::Props,
                describe_node(node),
                new_props.len()
            ),
            Patch::Reorder {
                node,
                from_index,
                to_index,
            } => format!(
                "{} {} from {} to {}",
                PatchKind::Reorder,
                describe_node(node),
                from_index,
                to_index
            ),
            Patch::Insert { node, index } => {
                format!("{} {} at {}", PatchKind::Insert, describe_node(node), index)
            }
            Patch::Remove { node } => format!("{} {}", PatchKind::Remove, describe_node(node)),
        };
        out.push_str(&format!("{}. {}\n", i + 1, line));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Comparator, Component};

    fn counter() -> Component {
        Component::new("Counter", |_| VNode::element("div"))
    }

    #[test]
    fn test_describe_node_variants() {
        assert_eq!(describe_node(&VNode::element("div")), "<div>");
        assert_eq!(
            describe_node(&VNode::element("li").with_key("a")),
            "<li key=\"a\">"
        );
        assert_eq!(
            describe_node(&VNode::component(counter()).with_key(3)),
            "Counter key=3"
        );
        assert_eq!(
            describe_node(&VNode::memo(counter(), Comparator::shallow())),
            "memo(Counter)"
        );
    }

    #[test]
    fn test_stats_counts_by_kind() {
        let a = VNode::element("a");
        let b = VNode::element("b");
        let patches = vec![
            Patch::Remove { node: &a },
            Patch::Insert { node: &b, index: 0 },
            Patch::Insert { node: &a, index: 1 },
        ];

        let stats = PatchStats::from_patches(&patches);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(PatchKind::Insert), 2);
        assert_eq!(stats.count(PatchKind::Remove), 1);
        assert!(!stats.is_empty());
    }

    #[test]
    fn test_empty_summary() {
        let summary = render_patch_summary(&[]);
        assert!(summary.starts_with("## Patch Summary"));
        assert!(summary.contains("_No changes detected._"));
    }
}
