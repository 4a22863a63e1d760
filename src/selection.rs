//! Hierarchical checklist used to scope a practice session.
//!
//! Nodes live in an arena keyed by their id; parent and child links are ids,
//! never owning pointers. Checked state is kept apart from the tree in a
//! [`Selection`], so a selection can be reset or replaced without rebuilding
//! the tree. Leaves are the source of truth; a group's flag is only a
//! projection of its leaf descendants and is recomputed after every edit.

use std::collections::HashMap;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Group,
    Leaf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub parent: Option<String>,
    pub children: Vec<String>,
}

impl SelectionNode {
    pub fn is_group(&self) -> bool {
        self.kind == NodeKind::Group
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionTree {
    nodes: HashMap<String, SelectionNode>,
    roots: Vec<String>,
}

impl SelectionTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_group(&mut self, id: &str, label: &str, parent: Option<&str>) -> Result<()> {
        self.insert(id, label, NodeKind::Group, parent)
    }

    pub fn add_leaf(&mut self, id: &str, label: &str, parent: Option<&str>) -> Result<()> {
        self.insert(id, label, NodeKind::Leaf, parent)
    }

    fn insert(&mut self, id: &str, label: &str, kind: NodeKind, parent: Option<&str>) -> Result<()> {
        if self.nodes.contains_key(id) {
            return Err(Error::DuplicateNode(id.to_string()));
        }

        match parent {
            Some(parent_id) => {
                let parent_node = self
                    .nodes
                    .get_mut(parent_id)
                    .ok_or_else(|| Error::UnknownNode(parent_id.to_string()))?;
                if !parent_node.is_group() {
                    return Err(Error::NotAGroup(parent_id.to_string()));
                }
                parent_node.children.push(id.to_string());
            }
            None => self.roots.push(id.to_string()),
        }

        self.nodes.insert(
            id.to_string(),
            SelectionNode {
                id: id.to_string(),
                label: label.to_string(),
                kind,
                parent: parent.map(str::to_string),
                children: Vec::new(),
            },
        );
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&SelectionNode> {
        self.nodes.get(id)
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a SelectionNode> + 'a {
        let mut next = self.nodes.get(id).and_then(|n| n.parent.as_deref());
        std::iter::from_fn(move || {
            let node = self.nodes.get(next?)?;
            next = node.parent.as_deref();
            Some(node)
        })
    }

    /// Leaf ids below `id` in display order. A leaf yields itself.
    pub fn leaves_under(&self, id: &str) -> Vec<&str> {
        let mut leaves = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            match node.kind {
                NodeKind::Leaf => leaves.push(node.id.as_str()),
                NodeKind::Group => stack.extend(node.children.iter().rev().map(String::as_str)),
            }
        }
        leaves
    }

    /// Every leaf id in display order.
    pub fn leaves(&self) -> Vec<&str> {
        self.roots
            .iter()
            .flat_map(|root| self.leaves_under(root))
            .collect()
    }

    /// Depth-first walk in display order, paired with each node's depth.
    pub fn walk(&self) -> Vec<(usize, &SelectionNode)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, &str)> = self.roots.iter().rev().map(|r| (0, r.as_str())).collect();
        while let Some((depth, id)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            out.push((depth, node));
            stack.extend(node.children.iter().rev().map(|c| (depth + 1, c.as_str())));
        }
        out
    }

    /// Orders every sibling list with groups first, then by label.
    pub fn sort_groups_first(&mut self) {
        let keys: HashMap<String, (bool, String)> = self
            .nodes
            .iter()
            .map(|(id, n)| (id.clone(), (!n.is_group(), n.label.clone())))
            .collect();
        let by_key = |a: &String, b: &String| keys[a].cmp(&keys[b]);

        self.roots.sort_by(by_key);
        for node in self.nodes.values_mut() {
            node.children.sort_by(by_key);
        }
    }
}

/// Checked flags for the nodes of one [`SelectionTree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    checked: HashMap<String, bool>,
    locked: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a selection from previously chosen leaf ids. Unknown ids are ignored.
    pub fn from_leaves<S: AsRef<str>>(tree: &SelectionTree, leaves: &[S]) -> Self {
        let mut selection = Self::new();
        for id in leaves {
            let id = id.as_ref();
            if matches!(tree.node(id), Some(n) if n.kind == NodeKind::Leaf) {
                selection.checked.insert(id.to_string(), true);
            }
        }
        selection.refresh_groups(tree);
        selection
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.get(id).copied().unwrap_or(false)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Checked leaf ids in display order.
    pub fn checked_leaves<'a>(&self, tree: &'a SelectionTree) -> Vec<&'a str> {
        tree.leaves()
            .into_iter()
            .filter(|id| self.is_checked(id))
            .collect()
    }

    pub fn toggle_leaf(&mut self, tree: &SelectionTree, id: &str, checked: bool) -> Result<()> {
        let node = tree.node(id).ok_or_else(|| Error::UnknownNode(id.to_string()))?;
        if node.kind != NodeKind::Leaf {
            return Err(Error::NotALeaf(id.to_string()));
        }
        if self.locked {
            return Err(Error::SelectionLocked);
        }

        self.checked.insert(id.to_string(), checked);
        self.refresh_ancestors(tree, id);
        Ok(())
    }

    pub fn toggle_group(&mut self, tree: &SelectionTree, id: &str, checked: bool) -> Result<()> {
        let node = tree.node(id).ok_or_else(|| Error::UnknownNode(id.to_string()))?;
        if node.kind != NodeKind::Group {
            return Err(Error::NotAGroup(id.to_string()));
        }
        if self.locked {
            return Err(Error::SelectionLocked);
        }

        for leaf in tree.leaves_under(id) {
            self.checked.insert(leaf.to_string(), checked);
        }
        self.refresh_groups(tree);
        Ok(())
    }

    /// Checks or clears every leaf. Checking everything also locks the
    /// individual controls until `select_all(false)` releases them.
    pub fn select_all(&mut self, tree: &SelectionTree, checked: bool) {
        for leaf in tree.leaves() {
            self.checked.insert(leaf.to_string(), checked);
        }
        self.locked = checked;
        self.refresh_groups(tree);
    }

    fn refresh_ancestors(&mut self, tree: &SelectionTree, id: &str) {
        for ancestor in tree.ancestors(id) {
            let all = self.all_leaves_checked(tree, &ancestor.id);
            self.checked.insert(ancestor.id.clone(), all);
        }
    }

    fn refresh_groups(&mut self, tree: &SelectionTree) {
        for (_, node) in tree.walk() {
            if node.is_group() {
                let all = self.all_leaves_checked(tree, &node.id);
                self.checked.insert(node.id.clone(), all);
            }
        }
    }

    // A group with no leaves is never checked.
    fn all_leaves_checked(&self, tree: &SelectionTree, id: &str) -> bool {
        let leaves = tree.leaves_under(id);
        !leaves.is_empty() && leaves.iter().all(|leaf| self.is_checked(leaf))
    }
}

/// Applies one checkbox edit and returns the resulting selection, leaving the
/// input untouched. Leaves and groups are dispatched by node kind.
pub fn apply_toggle(
    tree: &SelectionTree,
    selection: &Selection,
    id: &str,
    checked: bool,
) -> Result<Selection> {
    let node = tree.node(id).ok_or_else(|| Error::UnknownNode(id.to_string()))?;
    let mut next = selection.clone();
    match node.kind {
        NodeKind::Leaf => next.toggle_leaf(tree, id, checked)?,
        NodeKind::Group => next.toggle_group(tree, id, checked)?,
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // lib
    // ├── book1
    // │   ├── lesson1
    // │   └── lesson2
    // └── book2
    //     ├── unit
    //     │   └── lesson3
    //     └── lesson4
    fn library() -> SelectionTree {
        let mut tree = SelectionTree::new();
        tree.add_group("lib", "lib", None).unwrap();
        tree.add_group("lib/book1", "book1", Some("lib")).unwrap();
        tree.add_leaf("lib/book1/lesson1", "lesson1", Some("lib/book1")).unwrap();
        tree.add_leaf("lib/book1/lesson2", "lesson2", Some("lib/book1")).unwrap();
        tree.add_group("lib/book2", "book2", Some("lib")).unwrap();
        tree.add_group("lib/book2/unit", "unit", Some("lib/book2")).unwrap();
        tree.add_leaf("lib/book2/unit/lesson3", "lesson3", Some("lib/book2/unit")).unwrap();
        tree.add_leaf("lib/book2/lesson4", "lesson4", Some("lib/book2")).unwrap();
        tree
    }

    #[test]
    fn group_is_checked_once_every_leaf_is() {
        let tree = library();
        let mut sel = Selection::new();

        sel.toggle_leaf(&tree, "lib/book1/lesson1", true).unwrap();
        assert!(!sel.is_checked("lib/book1"));

        sel.toggle_leaf(&tree, "lib/book1/lesson2", true).unwrap();
        assert!(sel.is_checked("lib/book1"));
        assert!(!sel.is_checked("lib"));
    }

    #[test]
    fn unchecking_a_leaf_clears_every_ancestor() {
        let tree = library();
        let mut sel = Selection::new();
        sel.toggle_group(&tree, "lib", true).unwrap();
        assert!(sel.is_checked("lib"));
        assert!(sel.is_checked("lib/book2/unit"));

        sel.toggle_leaf(&tree, "lib/book2/unit/lesson3", false).unwrap();
        assert!(!sel.is_checked("lib/book2/unit"));
        assert!(!sel.is_checked("lib/book2"));
        assert!(!sel.is_checked("lib"));
        assert!(sel.is_checked("lib/book1"));
    }

    #[test]
    fn toggle_group_reaches_nested_leaves() {
        let tree = library();
        let mut sel = Selection::new();
        sel.toggle_group(&tree, "lib/book2", true).unwrap();

        assert_eq!(
            sel.checked_leaves(&tree),
            vec!["lib/book2/unit/lesson3", "lib/book2/lesson4"]
        );
        assert!(sel.is_checked("lib/book2/unit"));
    }

    #[test]
    fn select_all_locks_individual_edits() {
        let tree = library();
        let mut sel = Selection::new();
        sel.select_all(&tree, true);

        assert!(sel.is_locked());
        assert_eq!(sel.checked_leaves(&tree).len(), 4);
        assert_matches!(
            sel.toggle_leaf(&tree, "lib/book1/lesson1", false),
            Err(Error::SelectionLocked)
        );
        assert_matches!(
            sel.toggle_group(&tree, "lib/book1", false),
            Err(Error::SelectionLocked)
        );

        sel.select_all(&tree, false);
        assert!(!sel.is_locked());
        assert!(sel.checked_leaves(&tree).is_empty());
        sel.toggle_leaf(&tree, "lib/book1/lesson1", true).unwrap();
    }

    #[test]
    fn apply_toggle_leaves_input_untouched() {
        let tree = library();
        let before = Selection::new();
        let after = apply_toggle(&tree, &before, "lib/book1", true).unwrap();

        assert!(before.checked_leaves(&tree).is_empty());
        assert_eq!(
            after.checked_leaves(&tree),
            vec!["lib/book1/lesson1", "lib/book1/lesson2"]
        );
    }

    #[test]
    fn toggles_reject_wrong_kind_and_unknown_ids() {
        let tree = library();
        let mut sel = Selection::new();

        assert_matches!(sel.toggle_leaf(&tree, "lib/book1", true), Err(Error::NotALeaf(_)));
        assert_matches!(
            sel.toggle_group(&tree, "lib/book1/lesson1", true),
            Err(Error::NotAGroup(_))
        );
        assert_matches!(
            apply_toggle(&tree, &sel, "nope", true),
            Err(Error::UnknownNode(id)) if id == "nope"
        );
    }

    #[test]
    fn empty_group_is_never_checked() {
        let mut tree = library();
        tree.add_group("lib/empty", "empty", Some("lib")).unwrap();
        let mut sel = Selection::new();
        sel.select_all(&tree, true);

        assert!(!sel.is_checked("lib/empty"));
        assert!(sel.is_checked("lib"));
    }

    #[test]
    fn duplicate_and_orphan_inserts_fail() {
        let mut tree = library();
        assert_matches!(tree.add_leaf("lib/book1/lesson1", "x", Some("lib/book1")), Err(Error::DuplicateNode(_)));
        assert_matches!(tree.add_leaf("x", "x", Some("missing")), Err(Error::UnknownNode(_)));
        assert_matches!(
            tree.add_leaf("y", "y", Some("lib/book1/lesson1")),
            Err(Error::NotAGroup(_))
        );
    }

    #[test]
    fn restore_from_leaves_recomputes_groups() {
        let tree = library();
        let sel = Selection::from_leaves(&tree, &["lib/book1/lesson1", "lib/book1/lesson2", "lib/book1", "ghost"]);

        assert!(sel.is_checked("lib/book1"));
        assert_eq!(sel.checked_leaves(&tree).len(), 2);
    }

    #[test]
    fn walk_and_sort_keep_groups_first() {
        let mut tree = SelectionTree::new();
        tree.add_group("r", "r", None).unwrap();
        tree.add_leaf("r/a.json", "a.json", Some("r")).unwrap();
        tree.add_group("r/z", "z", Some("r")).unwrap();
        tree.add_leaf("r/z/b.json", "b.json", Some("r/z")).unwrap();
        tree.sort_groups_first();

        let order: Vec<(usize, &str)> = tree.walk().into_iter().map(|(d, n)| (d, n.id.as_str())).collect();
        assert_eq!(
            order,
            vec![(0, "r"), (1, "r/z"), (2, "r/z/b.json"), (1, "r/a.json")]
        );
        let ancestors: Vec<&str> = tree.ancestors("r/z/b.json").map(|n| n.id.as_str()).collect();
        assert_eq!(ancestors, vec!["r/z", "r"]);
    }
}
