use crate::avl_tree::tree::{self, Tree};
use std::cmp;

/// A struct representing an internal node of an avl tree.
#[derive(Clone)]
pub struct Node<T> {
    pub value: T,
    pub height: usize,
    pub balance: i32,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            height: 1,
            balance: 0,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let left_height = tree::height(&self.left);
        let right_height = tree::height(&self.right);
        self.height = cmp::max(left_height, right_height) + 1;
        self.balance = right_height as i32 - left_height as i32;
    }
}
