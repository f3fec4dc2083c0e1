// src/analysis/leaves.rs
//! Flattens a subtree to its terminal nodes.
//!
//! Parameter usage is approximated by name-token matching against these
//! leaves. It is purely syntactic: a local variable or field that shadows a
//! parameter still counts as a use.

use std::collections::HashSet;

use super::tree::SyntaxNode;

/// Collects every descendant of `root` that has no children, left to right.
/// A childless `root` is its own single leaf.
#[must_use]
pub fn collect_leaves<N: SyntaxNode>(root: N) -> Vec<N> {
    let mut leaves = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let children = node.children();
        if children.is_empty() {
            leaves.push(node);
        } else {
            stack.extend(children.into_iter().rev());
        }
    }
    leaves
}

/// Identifier texts among the leaves of `root`.
#[must_use]
pub fn leaf_identifiers<N: SyntaxNode>(root: N) -> HashSet<String> {
    collect_leaves(root)
        .iter()
        .filter_map(SyntaxNode::identifier)
        .collect()
}
