use crate::avl_tree::node::Node;
use crate::avl_tree::{Error, Result};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    trace!("Rotated left, subtree height is now {}", child.height);
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    trace!("Rotated right, subtree height is now {}", child.height);
    child
}

// Children must already carry up-to-date heights and balances.
pub fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update();

    if node.balance < -1 {
        let child = match node.left.take() {
            Some(child) => child,
            None => unreachable!(),
        };
        if child.balance <= 0 {
            node.left = Some(child);
        } else {
            node.left = Some(rotate_left(child));
        }
        rotate_right(node)
    } else if node.balance > 1 {
        let child = match node.right.take() {
            Some(child) => child,
            None => unreachable!(),
        };
        if child.balance >= 0 {
            node.right = Some(child);
        } else {
            node.right = Some(rotate_right(child));
        }
        rotate_left(node)
    } else {
        node
    }
}

// Detaches the rightmost node of a non-empty tree, rebalancing every node on the way back up.
// The returned node has no children.
fn remove_max<T>(mut node: Box<Node<T>>) -> (Tree<T>, Box<Node<T>>) {
    match node.right.take() {
        Some(right) => {
            let (right, max) = remove_max(right);
            node.right = right;
            (Some(rebalance(node)), max)
        },
        None => {
            let left = node.left.take();
            (left, node)
        },
    }
}

fn combine_subtrees<T>(left_tree: Tree<T>, right_tree: Tree<T>) -> Tree<T> {
    match (left_tree, right_tree) {
        (None, None) => None,
        (None, Some(right)) => Some(right),
        (Some(left), None) => Some(left),
        (Some(mut left), Some(right)) => {
            if left.right.is_none() {
                trace!("Promoting left child without a right subtree");
                left.right = Some(right);
                return Some(left);
            }

            trace!("Promoting in-order predecessor");
            let (left, mut new_root) = remove_max(left);
            new_root.left = left;
            new_root.right = Some(right);
            Some(new_root)
        },
    }
}

/// Inserts `value` into `tree`, returning the new root of the subtree and whether the value was
/// absent. An existing equal value leaves the subtree untouched.
pub fn insert<T>(tree: Tree<T>, value: T) -> (Box<Node<T>>, bool)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (Box::new(Node::new(value)), true),
    };

    let inserted = match value.cmp(&node.value) {
        Ordering::Less => {
            let (child, inserted) = insert(node.left.take(), value);
            node.left = Some(child);
            inserted
        },
        Ordering::Greater => {
            let (child, inserted) = insert(node.right.take(), value);
            node.right = Some(child);
            inserted
        },
        Ordering::Equal => false,
    };

    if inserted {
        (rebalance(node), true)
    } else {
        (node, false)
    }
}

/// Removes the value equal to `key` from `tree`, returning the new root of the subtree and the
/// removed value.
pub fn remove<T, Q>(tree: Tree<T>, key: &Q) -> (Tree<T>, Option<T>)
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (None, None),
    };

    let removed = match key.cmp(node.value.borrow()) {
        Ordering::Less => {
            let (child, removed) = remove(node.left.take(), key);
            node.left = child;
            removed
        },
        Ordering::Greater => {
            let (child, removed) = remove(node.right.take(), key);
            node.right = child;
            removed
        },
        Ordering::Equal => {
            let Node { value, left, right, .. } = *node;
            return (combine_subtrees(left, right).map(rebalance), Some(value));
        },
    };

    match removed {
        Some(_) => (Some(rebalance(node)), removed),
        None => (Some(node), None),
    }
}

pub fn contains<T, Q>(tree: &Tree<T>, key: &Q) -> bool
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.as_ref().map_or(false, |node| {
        match key.cmp(node.value.borrow()) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

pub fn for_each<'a, T, F>(tree: &'a Tree<T>, f: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(ref node) = tree {
        for_each(&node.left, f);
        f(&node.value);
        for_each(&node.right, f);
    }
}

/// Recomputes the height and balance of every node and compares them against the stored values.
/// Returns the height of the tree and the number of nodes in it.
pub fn check<T>(tree: &Tree<T>) -> Result<(usize, usize), &T> {
    let node = match tree {
        Some(ref node) => node,
        None => return Ok((0, 0)),
    };

    let (left_height, left_len) = check(&node.left)?;
    let (right_height, right_len) = check(&node.right)?;
    let height = cmp::max(left_height, right_height) + 1;
    let balance = right_height as i32 - left_height as i32;

    if height != node.height {
        return Err(Error::ImproperHeight {
            value: &node.value,
            expected: height,
            actual: node.height,
        });
    }

    if balance != node.balance {
        return Err(Error::ImproperBalance {
            value: &node.value,
            expected: balance,
            actual: node.balance,
        });
    }

    if balance.abs() > 1 {
        return Err(Error::Unbalanced {
            value: &node.value,
            balance,
        });
    }

    Ok((height, left_len + right_len + 1))
}
