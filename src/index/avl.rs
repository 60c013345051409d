//! AVL-balanced order tree
//!
//! Nodes own their children exclusively; rotations are ownership moves.
//! Every mutation rebalances bottom-up on the recursion unwind, so the
//! tree satisfies the AVL property after each public call returns.

use std::cmp::Ordering;

/// Unique order identifier used as the index key.
pub type OrderId = i64;

/// A single tree node: key, payload, owned children, cached subtree height.
///
/// An absent subtree has height 0; a fresh leaf has height 1.
#[derive(Debug)]
struct Node {
    order_id: OrderId,
    title: String,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
    height: u32,
}

impl Node {
    fn new(order_id: OrderId, title: String) -> Box<Node> {
        Box::new(Node {
            order_id,
            title,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Refresh the cached height from the children. Must run on every node
    /// whose child subtree changed, innermost first.
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left height minus right height. AVL keeps this in {-1, 0, 1}.
    fn balance_factor(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }
}

/// Height of an optional subtree: 0 for absent, else the cached field.
fn height(node: &Option<Box<Node>>) -> u32 {
    node.as_ref().map_or(0, |n| n.height)
}

/// Single right rotation. The left child becomes the subtree root; its right
/// subtree is handed over as the old root's new left subtree.
///
/// Heights are recomputed child-before-parent. Callers only invoke this when
/// a left child exists; a pivotless node is returned unchanged.
fn rotate_right(mut x: Box<Node>) -> Box<Node> {
    match x.left.take() {
        None => x,
        Some(mut y) => {
            x.left = y.right.take();
            x.update_height();
            y.right = Some(x);
            y.update_height();
            y
        }
    }
}

/// Single left rotation, mirror of [`rotate_right`].
fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    match x.right.take() {
        None => x,
        Some(mut y) => {
            x.right = y.left.take();
            x.update_height();
            y.left = Some(x);
            y.update_height();
            y
        }
    }
}

/// Restore the AVL property at `node`, whose children already carry fresh
/// heights. Covers all four imbalance cases:
///
/// - left-heavy, left child left-heavy or even: single right rotation (LL)
/// - left-heavy, left child right-heavy: left-rotate the child first (LR)
/// - right-heavy, mirrored (RR / RL)
///
/// Returns the (possibly new) subtree root.
fn rebalance(mut node: Box<Node>) -> Box<Node> {
    let factor = node.balance_factor();

    if factor > 1 {
        if let Some(left) = node.left.take() {
            node.left = Some(if left.balance_factor() < 0 {
                rotate_left(left)
            } else {
                left
            });
        }
        return rotate_right(node);
    }

    if factor < -1 {
        if let Some(right) = node.right.take() {
            node.right = Some(if right.balance_factor() > 0 {
                rotate_right(right)
            } else {
                right
            });
        }
        return rotate_left(node);
    }

    node
}

fn insert_node(
    node: Option<Box<Node>>,
    order_id: OrderId,
    title: String,
    created: &mut bool,
) -> Box<Node> {
    let mut node = match node {
        None => {
            *created = true;
            return Node::new(order_id, title);
        }
        Some(n) => n,
    };

    match order_id.cmp(&node.order_id) {
        Ordering::Less => {
            node.left = Some(insert_node(node.left.take(), order_id, title, created));
        }
        Ordering::Greater => {
            node.right = Some(insert_node(node.right.take(), order_id, title, created));
        }
        // Duplicate order ID: keep the existing entry untouched.
        Ordering::Equal => return node,
    }

    node.update_height();
    rebalance(node)
}

fn remove_node(
    node: Option<Box<Node>>,
    order_id: OrderId,
    removed: &mut bool,
) -> Option<Box<Node>> {
    let mut node = node?;

    match order_id.cmp(&node.order_id) {
        Ordering::Less => {
            node.left = remove_node(node.left.take(), order_id, removed);
        }
        Ordering::Greater => {
            node.right = remove_node(node.right.take(), order_id, removed);
        }
        Ordering::Equal => {
            *removed = true;
            node = match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => child,
                (left, Some(right)) => {
                    // Two children: overwrite this node's identity with the
                    // in-order successor (minimum of the right subtree), then
                    // delete the successor's original node. That deletion is
                    // always a zero- or one-child case.
                    let successor = min_node(&right);
                    node.order_id = successor.order_id;
                    node.title = successor.title.clone();
                    let succ_id = node.order_id;
                    node.left = left;
                    let mut spliced = false;
                    node.right = remove_node(Some(right), succ_id, &mut spliced);
                    node
                }
            };
        }
    }

    node.update_height();
    Some(rebalance(node))
}

fn min_node(node: &Node) -> &Node {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current
}

fn count_nodes(node: &Option<Box<Node>>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + count_nodes(&n.left) + count_nodes(&n.right),
    }
}

/// The balanced-tree engine.
///
/// Maps order IDs to titles, keeping insert, remove, and lookup O(log n).
/// Borrowed views returned by queries do not survive mutation: a two-child
/// removal overwrites a surviving node's key and title in place.
#[derive(Debug, Default)]
pub struct AvlTree {
    root: Option<Box<Node>>,
}

impl AvlTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Insert an entry. Returns true if a node was created, false if the
    /// order ID was already present (the existing title is preserved).
    pub fn insert(&mut self, order_id: OrderId, title: impl Into<String>) -> bool {
        let mut created = false;
        let root = insert_node(self.root.take(), order_id, title.into(), &mut created);
        self.root = Some(root);
        created
    }

    /// Remove an entry. Returns true if a node was removed, false if the
    /// order ID was absent.
    pub fn remove(&mut self, order_id: OrderId) -> bool {
        let mut removed = false;
        self.root = remove_node(self.root.take(), order_id, &mut removed);
        removed
    }

    /// Look up the title for an order ID.
    pub fn get(&self, order_id: OrderId) -> Option<&str> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match order_id.cmp(&node.order_id) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.title),
            };
        }
        None
    }

    /// Entry with the minimum order ID, or None for an empty tree.
    pub fn min(&self) -> Option<(OrderId, &str)> {
        let node = min_node(self.root.as_deref()?);
        Some((node.order_id, node.title.as_str()))
    }

    /// Entry with the maximum order ID, or None for an empty tree.
    pub fn max(&self) -> Option<(OrderId, &str)> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some((current.order_id, current.title.as_str()))
    }

    /// Cached tree height: 0 for empty, 1 for a single node.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Number of entries. O(n), not cached.
    pub fn len(&self) -> usize {
        count_nodes(&self.root)
    }

    /// Returns true when the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Lazy in-order iterator over `(order_id, title)`, ascending by key.
    pub fn iter(&self) -> InOrderIter<'_> {
        InOrderIter::new(&self.root)
    }
}

/// In-order traversal with an explicit stack of pending ancestors.
///
/// Restartable: each call to [`AvlTree::iter`] yields a fresh pass.
pub struct InOrderIter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrderIter<'a> {
    fn new(root: &'a Option<Box<Node>>) -> Self {
        let mut iter = InOrderIter { stack: Vec::new() };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = (OrderId, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((node.order_id, node.title.as_str()))
    }
}
