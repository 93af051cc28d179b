//! District tree - unbalanced binary search tree keyed by district id
//!
//! Each node owns its district and both subtrees. No rebalancing is ever
//! performed, so the shape depends only on insertion order.
//!
//! ## Architecture
//! - Level 2: Tree operations (insert, find, remove)
//! - Level 3: Recursive node helpers, successor extraction
//! - Level 4: Traversal, statistics

use std::cmp::Ordering;

use crate::district::District;
use crate::person::DistrictId;

// ============================================================================
// TYPES
// ============================================================================

type Link = Option<Box<TreeNode>>;

/// A node in the district tree
#[derive(Clone, Debug)]
pub struct TreeNode {
    district: District,
    left: Link,
    right: Link,
}

impl TreeNode {
    fn leaf(district: District) -> Self {
        Self {
            district,
            left: None,
            right: None,
        }
    }

    pub fn district(&self) -> &District {
        &self.district
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }
}

/// Binary search tree of districts still in the game
#[derive(Clone, Debug, Default)]
pub struct DistrictTree {
    root: Link,
    len: usize,
}

// ============================================================================
// TREE OPERATIONS (Level 2)
// ============================================================================

impl DistrictTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Number of districts in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a district as a new leaf.
    ///
    /// Returns `false` and drops `district` when its id is already present;
    /// the existing node is left untouched.
    pub fn insert(&mut self, district: District) -> bool {
        let inserted = insert_node(&mut self.root, district);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Look up a district by id
    pub fn find(&self, id: DistrictId) -> Option<&District> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match id.cmp(&node.district.district_id()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.district),
            };
        }
        None
    }

    /// Look up a district by id for mutation
    pub fn find_mut(&mut self, id: DistrictId) -> Option<&mut District> {
        find_node_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: DistrictId) -> bool {
        self.find(id).is_some()
    }

    /// Remove a district, returning it if it was present.
    ///
    /// A node with two children takes over its in-order successor's district
    /// and the successor node is unlinked from the right subtree.
    pub fn remove(&mut self, id: DistrictId) -> Option<District> {
        let removed = remove_node(&mut self.root, id);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    // ========================================================================
    // TRAVERSAL (Level 4)
    // ========================================================================

    /// Districts in node-then-left-then-right order
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// District ids in ascending order
    pub fn ids_in_order(&self) -> Vec<DistrictId> {
        let mut ids = Vec::with_capacity(self.len);
        collect_in_order(self.root.as_deref(), &mut ids);
        ids
    }

    /// Longest root-to-leaf path, counted in nodes
    pub fn height(&self) -> usize {
        node_height(self.root.as_deref())
    }

    /// Every node's left subtree holds smaller ids and its right subtree larger ones
    pub fn is_ordered(&self) -> bool {
        self.ids_in_order().windows(2).all(|pair| pair[0] < pair[1])
    }

    /// Competitors across every district in the tree
    pub fn competitor_count(&self) -> usize {
        self.pre_order().map(District::size).sum()
    }
}

/// Pre-order iterator over the districts of a tree
pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a District;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.district)
    }
}

// ============================================================================
// NODE HELPERS (Level 3)
// ============================================================================

fn insert_node(link: &mut Link, district: District) -> bool {
    match link {
        None => {
            *link = Some(Box::new(TreeNode::leaf(district)));
            true
        }
        Some(node) => match district.district_id().cmp(&node.district.district_id()) {
            Ordering::Less => insert_node(&mut node.left, district),
            Ordering::Greater => insert_node(&mut node.right, district),
            Ordering::Equal => false,
        },
    }
}

fn find_node_mut(link: &mut Link, id: DistrictId) -> Option<&mut District> {
    let node = link.as_deref_mut()?;
    match id.cmp(&node.district.district_id()) {
        Ordering::Less => find_node_mut(&mut node.left, id),
        Ordering::Greater => find_node_mut(&mut node.right, id),
        Ordering::Equal => Some(&mut node.district),
    }
}

fn remove_node(link: &mut Link, id: DistrictId) -> Option<District> {
    let node = link.as_deref_mut()?;
    match id.cmp(&node.district.district_id()) {
        Ordering::Less => return remove_node(&mut node.left, id),
        Ordering::Greater => return remove_node(&mut node.right, id),
        Ordering::Equal => {}
    }

    let mut node = link.take()?;
    match (node.left.take(), node.right.take()) {
        (None, child) | (child, None) => {
            *link = child;
            Some(node.district)
        }
        (Some(left), Some(right)) => {
            let (successor, rest) = split_min(right);
            let removed = std::mem::replace(&mut node.district, successor);
            node.left = Some(left);
            node.right = rest;
            *link = Some(node);
            Some(removed)
        }
    }
}

/// Detach the leftmost district of a subtree, splicing its right child up.
/// Returns the district and what remains of the subtree.
fn split_min(mut node: Box<TreeNode>) -> (District, Link) {
    match node.left.take() {
        None => {
            let TreeNode { district, right, .. } = *node;
            (district, right)
        }
        Some(left) => {
            let (min, rest) = split_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}

fn collect_in_order(node: Option<&TreeNode>, ids: &mut Vec<DistrictId>) {
    if let Some(node) = node {
        collect_in_order(node.left(), ids);
        ids.push(node.district.district_id());
        collect_in_order(node.right(), ids);
    }
}

fn node_height(node: Option<&TreeNode>) -> usize {
    match node {
        None => 0,
        Some(node) => 1 + node_height(node.left()).max(node_height(node.right())),
    }
}
