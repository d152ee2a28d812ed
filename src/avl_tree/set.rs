use crate::avl_tree::tree::{self, Tree};
use crate::avl_tree::{Error, Result};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// Construction-time options for an `AvlSet<T>`.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::{AvlSet, Config};
///
/// let mut set = AvlSet::with_config(Config::new().check_consistency(true));
/// set.insert(1);
/// assert!(set.check_consistency().is_ok());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    check_consistency: bool,
}

impl Config {
    /// Constructs the default configuration with consistency checks disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables verifying the whole tree before and after every mutation. A
    /// violation panics with the offending value and the expected and actual bookkeeping.
    pub fn check_consistency(mut self, enabled: bool) -> Self {
        self.check_consistency = enabled;
        self
    }

    /// Returns `true` if consistency checks are enabled.
    pub fn checks_consistency(&self) -> bool {
        self.check_consistency
    }
}

fn check_set<T>(root: &Tree<T>, len: usize) -> Result<(), &T> {
    let (_, node_count) = tree::check(root)?;
    if node_count != len {
        return Err(Error::ImproperLength {
            expected: node_count,
            actual: len,
        });
    }
    Ok(())
}

fn assert_consistent<T>(root: &Tree<T>, len: usize)
where
    T: fmt::Debug,
{
    if let Err(error) = check_set(root, len) {
        debug!("Consistency check failed: {}", error);
        panic!("{}", error);
    }
}

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.to_string(), "[0, 3]");
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    root: Tree<T>,
    len: usize,
    config: Config,
    verify: Option<fn(&Tree<T>, usize)>,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet {
            root: None,
            len: 0,
            config: Config::default(),
            verify: None,
        }
    }

    /// Returns the configuration the set was constructed with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn verify(&self) {
        if let Some(verify) = self.verify {
            verify(&self.root, self.len);
        }
    }

    /// Inserts a value into the set. Returns `false` and leaves the set unchanged if an equal
    /// value is already present.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.verify();
        let (root, inserted) = tree::insert(self.root.take(), value);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        self.verify();
        inserted
    }

    /// Removes a value from the set. Returns `true` if the value was present.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes a value from the set and returns it, or `None` if it was not present.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(String::from("a"));
    /// assert_eq!(set.take("a"), Some(String::from("a")));
    /// assert_eq!(set.take("a"), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.verify();
        let (root, removed) = tree::remove(self.root.take(), value);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        self.verify();
        removed
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::contains(&self.root, value)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the height of the underlying tree. An empty set has height 0.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (0..10).collect();
    /// assert_eq!(set.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Calls `f` on every value of the set in ascending order.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![5, 10].into_iter().collect();
    /// let mut sum = 0;
    /// set.for_each(|value| sum += value);
    /// assert_eq!(sum, 15);
    /// ```
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        tree::for_each(&self.root, &mut f);
    }

    /// Returns references to every value of the set in ascending order.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![3, 1, 2].into_iter().collect();
    /// assert_eq!(set.traverse(), vec![&1, &2, &3]);
    /// ```
    pub fn traverse(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        tree::for_each(&self.root, &mut |value| ret.push(value));
        ret
    }

    /// Verifies the height and balance bookkeeping of every node and the element count.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (0..100).collect();
    /// assert_eq!(set.check_consistency(), Ok(()));
    /// ```
    pub fn check_consistency(&self) -> Result<(), &T> {
        check_set(&self.root, self.len)
    }
}

impl<T> AvlSet<T>
where
    T: Ord + fmt::Debug,
{
    /// Constructs a new, empty `AvlSet<T>` with the given configuration.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::{AvlSet, Config};
    ///
    /// let set: AvlSet<u32> = AvlSet::with_config(Config::new().check_consistency(true));
    /// assert!(set.config().checks_consistency());
    /// ```
    pub fn with_config(config: Config) -> Self {
        let verify: Option<fn(&Tree<T>, usize)> = if config.checks_consistency() {
            Some(assert_consistent::<T>)
        } else {
            None
        };

        AvlSet {
            root: None,
            len: 0,
            config,
            verify,
        }
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> fmt::Display for AvlSet<T>
where
    T: Ord + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.traverse().into_iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> fmt::Debug for AvlSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.traverse()).finish()
    }
}
