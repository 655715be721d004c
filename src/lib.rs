//! This crate exposes a Binary Search Tree (BST) of city names along with
//! the routines to inspect and print it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. Here a `Node` stores the name of
//! a city and may have up to two child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    city name less than its own.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    city name greater than its own.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! City names are compared byte by byte, exactly as [`str`] orders them. There
//! is no case folding, so `"Zurich" < "amsterdam"`.
//!
//! This tree does not balance itself. Searching takes `O(height)` and inserting
//! names in sorted order produces a "degenerate" tree whose height is one less
//! than its number of nodes. Every operation walks the tree without recursion so
//! even degenerate trees can't overflow the stack.
//!
//! # Examples
//!
//! ```
//! use citybst::Tree;
//!
//! let tree = Tree::new()
//!     .insert("London")
//!     .insert("Berlin")
//!     .insert("Tokyo");
//!
//! assert_eq!(tree.root().map(|n| n.city()), Some("London"));
//! assert_eq!(tree.find_min().map(|n| n.city()), Some("Berlin"));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), ["Berlin", "London", "Tokyo"]);
//!
//! let tree = tree.remove("London");
//! assert!(tree.search("London").is_none());
//! assert_eq!(tree.count_nodes(), 2);
//! assert_eq!(tree.height(), 1);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
mod print;
pub mod tree;


pub use error::Error;
pub use tree::{Iter, Node, Tree};
