//! An unbalanced BST of city names. Each [`Node`] owns its children outright
//! so a [`Tree`] is nothing more than the link to its root.
//!
//! Operations that change the shape of the tree do so by rewiring "slots".
//! A slot is the `Option<Box<Node>>` that owns a node: either the root link or
//! one of its parent's child links. Inserting fills an empty slot, removing
//! empties a slot or hands it to the removed node's only child.
//!
//! # Examples
//!
//! ```
//! use citybst::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search("Paris").is_none());
//! assert_eq!(tree.height(), -1);
//!
//! // `insert` hands the tree back so calls can be chained.
//! let tree = tree.insert("Paris").insert("Lyon").insert("Nice");
//! assert_eq!(tree.search("Lyon").map(|n| n.city()), Some("Lyon"));
//!
//! // Inserting a city that is already present does nothing.
//! let tree = tree.insert("Paris");
//! assert_eq!(tree.count_nodes(), 3);
//!
//! // And remove one for good measure.
//! let tree = tree.remove("Paris");
//! assert!(tree.search("Paris").is_none());
//! assert_eq!(tree.iter().collect::<Vec<_>>(), ["Lyon", "Nice"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::Error;

type Link = Option<Box<Node>>;

/// A Binary Search Tree of city names. This can be used for inserting,
/// searching and removing cities. It never rebalances itself.
pub struct Tree {
    root: Link,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for Tree {
    /// Copies every node, keeping the exact shape of this tree.
    fn clone(&self) -> Self {
        enum Visit<'a> {
            Enter(Option<&'a Node>),
            Build(&'a Node),
        }

        // Post-order: both subtrees of a node are built before the node itself.
        let mut visits = vec![Visit::Enter(self.root())];
        let mut built: Vec<Link> = Vec::new();
        while let Some(visit) = visits.pop() {
            match visit {
                Visit::Enter(None) => built.push(None),
                Visit::Enter(Some(node)) => {
                    visits.push(Visit::Build(node));
                    visits.push(Visit::Enter(node.right()));
                    visits.push(Visit::Enter(node.left()));
                }
                Visit::Build(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        city: node.city.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().flatten(),
        }
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree holds no cities.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns this tree with `city` added to it. Inserting a city that is
    /// already present leaves the tree unchanged.
    ///
    /// If the city's node can't be allocated the failure is logged and the
    /// tree is returned unchanged. Use [`Tree::try_insert`] to observe it.
    ///
    /// # Examples
    ///
    /// ```
    /// use citybst::Tree;
    ///
    /// let tree = Tree::new().insert("London").insert("Berlin").insert("Tokyo");
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.city(), "London");
    /// assert_eq!(root.left().map(|n| n.city()), Some("Berlin"));
    /// assert_eq!(root.right().map(|n| n.city()), Some("Tokyo"));
    /// ```
    pub fn insert(mut self, city: &str) -> Self {
        self.add(city);
        self
    }

    /// Inserts `city` in place. Returns `Ok(true)` if a node was created and
    /// `Ok(false)` if the city was already present. On error the tree is left
    /// exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use citybst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.try_insert("Madrid")?);
    /// assert!(!tree.try_insert("Madrid")?);
    /// assert_eq!(tree.count_nodes(), 1);
    /// # Ok::<(), citybst::Error>(())
    /// ```
    pub fn try_insert(&mut self, city: &str) -> Result<bool, Error> {
        let slot = locate(&mut self.root, city);
        if slot.is_some() {
            tracing::trace!(city, "city already present");
            return Ok(false);
        }

        *slot = Some(Node::new(city)?);
        tracing::debug!(city, "inserted city");
        Ok(true)
    }

    /// Potentially finds the node holding `city`. If no node has that city,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use citybst::Tree;
    ///
    /// let tree = Tree::new().insert("Amsterdam").insert("Brussels");
    ///
    /// assert_eq!(tree.search("Brussels").map(|n| n.city()), Some("Brussels"));
    /// assert!(tree.search("Budapest").is_none());
    /// ```
    pub fn search(&self, city: &str) -> Option<&Node> {
        let mut link = self.root();
        while let Some(node) = link {
            link = match city.cmp(node.city()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Returns `true` if the tree holds `city`.
    pub fn contains(&self, city: &str) -> bool {
        self.search(city).is_some()
    }

    /// The node holding the smallest city name, or `None` for an empty tree.
    pub fn find_min(&self) -> Option<&Node> {
        self.root().map(Node::find_min)
    }

    /// Returns this tree without `city`. Removing a city that isn't present
    /// leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use citybst::Tree;
    ///
    /// let tree = Tree::new().insert("Dublin").insert("Cork").insert("Galway");
    /// let tree = tree.remove("Cork");
    ///
    /// assert!(tree.search("Cork").is_none());
    /// assert_eq!(tree.count_nodes(), 2);
    /// ```
    pub fn remove(mut self, city: &str) -> Self {
        self.take(city);
        self
    }

    /// Removes `city` in place and returns the owned name that was stored, or
    /// `None` if the tree didn't hold it.
    ///
    /// A node with two children is not unlinked. Its in-order successor is
    /// unlinked instead and the successor's name moves into the node, so any
    /// address taken of the node before the call still points at it.
    ///
    /// # Examples
    ///
    /// ```
    /// use citybst::Tree;
    ///
    /// let mut tree = Tree::new().insert("Milan").insert("Florence").insert("Venice");
    ///
    /// assert_eq!(tree.take("Milan"), Some(String::from("Milan")));
    /// assert_eq!(tree.take("Milan"), None);
    /// assert_eq!(tree.root().map(|n| n.city()), Some("Venice"));
    /// ```
    pub fn take(&mut self, city: &str) -> Option<String> {
        let removed = unlink(locate(&mut self.root, city));
        match removed {
            Some(_) => tracing::debug!(city, "removed city"),
            None => tracing::trace!(city, "city not present"),
        }

        removed
    }

    /// The number of edges on the longest path from the root to a leaf. An
    /// empty tree has a height of `-1` and a lone root a height of `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use citybst::Tree;
    ///
    /// let tree: Tree = ["A", "B", "C", "D"].into_iter().collect();
    ///
    /// // Sorted input leaves every node with only a right child.
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> isize {
        self.walk(Order::Ascending)
            .map(|(depth, _)| depth as isize)
            .max()
            .unwrap_or(-1)
    }

    /// The number of cities in the tree.
    pub fn count_nodes(&self) -> usize {
        self.walk(Order::Ascending).count()
    }

    /// Iterates over the cities in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.walk(Order::Ascending))
    }

    /// Destroys the tree and every node in it. This is what dropping a `Tree`
    /// does; calling it spells the teardown out.
    pub fn delete_tree(mut self) {
        self.clear();
    }

    /// Destroys every node, leaving an empty tree behind.
    pub fn clear(&mut self) {
        let mut freed = 0_usize;
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            // Detach the children first so dropping `node` can't recurse.
            stack.extend(node.left.take());
            stack.extend(node.right.take());
            freed += 1;
        }

        if freed > 0 {
            tracing::trace!(nodes = freed, "tree torn down");
        }
    }

    /// Inserts `city`, logging rather than returning a failure.
    fn add(&mut self, city: &str) {
        if let Err(error) = self.try_insert(city) {
            tracing::warn!(city, %error, "city was not inserted");
        }
    }

    pub(crate) fn walk(&self, order: Order) -> Walk<'_> {
        Walk::new(self.root(), order)
    }
}

impl<S> FromIterator<S> for Tree
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<S> Extend<S> for Tree
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for city in iter {
            self.add(city.as_ref());
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` holds one city name and owns up to two children.
pub struct Node {
    city: String,
    left: Link,
    right: Link,
}

impl fmt::Debug for Node {
    // Children are shown by name only so deep trees don't recurse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("city", &self.city)
            .field("left", &self.left().map(Node::city))
            .field("right", &self.right().map(Node::city))
            .finish()
    }
}

impl Node {
    /// Allocates a childless node holding its own copy of `city`.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if the copy of `city` can't be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use citybst::Node;
    ///
    /// let node = Node::new("Stockholm")?;
    ///
    /// assert_eq!(node.city(), "Stockholm");
    /// assert!(node.is_leaf());
    /// # Ok::<(), citybst::Error>(())
    /// ```
    pub fn new(city: &str) -> Result<Box<Self>, Error> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(city.len())
            .map_err(|source| Error::Allocation {
                len: city.len(),
                source,
            })?;
        owned.push_str(city);

        Ok(Box::new(Self {
            city: owned,
            left: None,
            right: None,
        }))
    }

    /// The city stored in this node.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// The root of the left subtree, whose cities all sort before this one.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose cities all sort after this one.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The node holding the smallest city in the subtree rooted here.
    pub fn find_min(&self) -> &Node {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }

        node
    }
}

/// Returns the slot holding `city`, or the empty slot `city` would be inserted into.
fn locate<'a>(mut slot: &'a mut Link, city: &str) -> &'a mut Link {
    loop {
        match slot.as_deref().map(|node| city.cmp(node.city())) {
            None | Some(Ordering::Equal) => return slot,
            Some(ordering) => {
                if let Some(node) = slot {
                    slot = match ordering {
                        Ordering::Less => &mut node.left,
                        _ => &mut node.right,
                    };
                }
            }
        }
    }
}

/// Returns the slot holding the smallest node in the subtree owned by `slot`.
fn leftmost(mut slot: &mut Link) -> &mut Link {
    while slot.as_ref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = slot {
            slot = &mut node.left;
        }
    }

    slot
}

/// Removes the node owned by `slot` and returns its city. Returns `None` if
/// the slot is empty.
fn unlink(slot: &mut Link) -> Option<String> {
    let node = slot.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        // The successor has no left child so unlinking it can't land back here.
        let successor = unlink(leftmost(&mut node.right))?;
        return Some(mem::replace(&mut node.city, successor));
    }

    let mut node = slot.take()?;
    *slot = node.left.take().or_else(|| node.right.take());
    Some(node.city)
}

/// The direction of a [`Walk`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    /// Left subtree, node, right subtree.
    Ascending,
    /// Right subtree, node, left subtree.
    Descending,
}

/// An in-order walk with an explicit stack, yielding each node with its depth
/// (the root is at depth 0).
pub(crate) struct Walk<'a> {
    stack: Vec<(usize, &'a Node)>,
    order: Order,
}

impl<'a> Walk<'a> {
    fn new(root: Option<&'a Node>, order: Order) -> Self {
        let mut walk = Self {
            stack: Vec::new(),
            order,
        };
        walk.descend(root, 0);
        walk
    }

    /// Pushes `link` and the chain of children we visit before it.
    fn descend(&mut self, mut link: Option<&'a Node>, mut depth: usize) {
        while let Some(node) = link {
            self.stack.push((depth, node));
            link = match self.order {
                Order::Ascending => node.left(),
                Order::Descending => node.right(),
            };
            depth += 1;
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        let next = match self.order {
            Order::Ascending => node.right(),
            Order::Descending => node.left(),
        };
        self.descend(next, depth + 1);

        Some((depth, node))
    }
}

/// An iterator over the cities of a [`Tree`] in ascending order.
///
/// Created by [`Tree::iter`].
pub struct Iter<'a>(Walk<'a>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, node)| node.city())
    }
}
