//! An ordered set backed by a self-balancing AVL tree.

#[macro_use]
extern crate log;

pub mod avl_tree;
