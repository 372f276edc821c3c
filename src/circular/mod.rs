//! A singly linked list closed into a ring: its logical tail links back to
//! the head.

use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::circular::iterator::Iter;

pub mod iterator;

/// The `CircularLinkedList` is a singly linked list whose last node links
/// back to the head, so a walk along `next` never runs off the end.
///
/// No tail pointer is kept: the *logical tail* (the node whose `next` is the
/// head) is found by walking the cycle, so both appending and prepending
/// take *O*(*n*) time.
///
/// # Ownership
///
/// The `next` chain from `head` up to the logical tail owns the nodes. The
/// wrap edge from the logical tail back to `head` is a back-reference: it is
/// never followed to release a node, so the cycle does not keep itself alive.
///
/// ```text
///             ┌──────────────────────────────────────────┐
///             ↓                                          │ (wrap)
///       ╔═══════════╗     ╔═══════════╗     ╔═══════════╗│
/// head ─║   next    ║ ──→ ║   next    ║ ──→ ║   next    ║┘
///       ╟───────────╢     ╟───────────╢     ╟───────────╢
///       ║  value T  ║     ║  value T  ║     ║  value T  ║
///       ╚═══════════╝     ╚═══════════╝     ╚═══════════╝
///          Node 0            Node 1         logical tail
/// ```
pub struct CircularLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    #[cfg(feature = "length")]
    /// the length of the list
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// A node of a [`CircularLinkedList`]. Its successor always exists: the
/// logical tail's successor is the head.
pub struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    /// Allocate a node that links to itself, the shape of a one-element
    /// cycle.
    fn new_looped(value: T) -> NonNull<Node<T>> {
        let mut ptr = NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            value,
        })));
        // SAFETY: the node was just allocated and is not shared.
        unsafe { ptr.as_mut().next = ptr };
        ptr
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The following node; the head after the logical tail.
    pub fn next(&self) -> &Node<T> {
        // SAFETY: `next` of a linked node always points to a live node of
        // the same list, which outlives the shared borrow of `self`.
        unsafe { &*self.next.as_ptr() }
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// private methods
impl<T> CircularLinkedList<T> {
    /// Walk from `head` to the node whose `next` is `head`.
    fn logical_tail(head: NonNull<Node<T>>) -> NonNull<Node<T>> {
        let mut current = head;
        // SAFETY: the cycle only contains live nodes and returns to `head`.
        unsafe {
            while current.as_ref().next != head {
                current = current.as_ref().next;
            }
        }
        current
    }

    /// Link a fresh node between the logical tail and `head`, returning it.
    /// The list must be non-empty.
    fn link_before_head(&mut self, head: NonNull<Node<T>>, value: T) -> NonNull<Node<T>> {
        let mut tail = Self::logical_tail(head);
        let mut node = Node::new_looped(value);
        // SAFETY: `tail` and `node` are live; `node` is not shared yet.
        unsafe {
            node.as_mut().next = head;
            tail.as_mut().next = node;
        }
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
        node
    }

    /// Start a one-node cycle in an empty list.
    fn link_first(&mut self, value: T) {
        debug_assert!(self.head.is_none());
        self.head = Some(Node::new_looped(value));
        #[cfg(feature = "length")]
        {
            self.len = 1;
        }
    }

    /// Unlink the successor of `prev` and take back its allocation.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the
    /// list, nor that its successor is not the only node.
    unsafe fn detach_after(&mut self, mut prev: NonNull<Node<T>>) -> Box<Node<T>> {
        let node = Box::from_raw(prev.as_ref().next.as_ptr());
        prev.as_mut().next = node.next;
        if self.head == Some(NonNull::from(&*node)) {
            self.head = Some(node.next);
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        node
    }

    /// Returns the node before the first match (in walking order from `head`)
    /// together with the match itself.
    fn find_with_prev(&self, value: &T) -> Option<(NonNull<Node<T>>, NonNull<Node<T>>)>
    where
        T: PartialEq,
    {
        let head = self.head?;
        // SAFETY: the cycle only contains live nodes.
        unsafe {
            if head.as_ref().value == *value {
                return Some((Self::logical_tail(head), head));
            }
            let mut prev = head;
            loop {
                let current = prev.as_ref().next;
                if current == head {
                    return None;
                }
                if current.as_ref().value == *value {
                    return Some((prev, current));
                }
                prev = current;
            }
        }
    }
}

impl<T> CircularLinkedList<T> {
    /// Create an empty `CircularLinkedList`
    ///
    /// # Examples
    /// ```
    /// use linked_lists::CircularLinkedList;
    /// let list: CircularLinkedList<u32> = CircularLinkedList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            #[cfg(feature = "length")]
            len: 0,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the list.
    ///
    /// # Complexity
    ///
    /// *O*(1) with `feature = "length"`, otherwise *O*(*n*).
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The entry node of the cycle, or `None` if the list is empty.
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        // SAFETY: `head` is live while the list is borrowed.
        self.head.map(|head| unsafe { &*head.as_ptr() })
    }

    /// Adds an element at the end of the cycle, just before the head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularLinkedList;
    ///
    /// let mut list = CircularLinkedList::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.to_string(), "1 -> 2 -> (head)");
    /// ```
    pub fn append(&mut self, value: T) {
        match self.head {
            Some(head) => {
                self.link_before_head(head, value);
            }
            None => self.link_first(value),
        }
    }

    /// Adds an element as the new head of the cycle.
    ///
    /// The logical tail has to be relinked to the new head, so this walks the
    /// whole cycle once.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularLinkedList;
    ///
    /// let mut list = CircularLinkedList::new();
    /// list.append(1);
    /// list.prepend(0);
    /// assert_eq!(list.to_string(), "0 -> 1 -> (head)");
    /// ```
    pub fn prepend(&mut self, value: T) {
        match self.head {
            Some(head) => {
                let node = self.link_before_head(head, value);
                self.head = Some(node);
            }
            None => self.link_first(value),
        }
    }

    /// Removes all elements from the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        let head = match self.head.take() {
            Some(head) => head,
            None => return,
        };
        let mut current = head;
        loop {
            // SAFETY: every node of the cycle is released once, and the
            // released `head` is only compared by address afterwards.
            let node = unsafe { Box::from_raw(current.as_ptr()) };
            current = node.next;
            drop(node);
            if current == head {
                break;
            }
        }
        #[cfg(feature = "length")]
        {
            self.len = 0;
        }
    }

    /// Provides an iterator over exactly one turn of the cycle, starting and
    /// ending at the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = CircularLinkedList::from_iter([0, 1, 2]);
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 1, 2]);
    /// // every call starts a fresh turn
    /// assert_eq!(list.iter().count(), 3);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: PartialEq> CircularLinkedList<T> {
    /// Removes the first node (walking from the head) holding `value` and
    /// returns its value, or `None` if there is no such node. A miss leaves
    /// the list untouched.
    ///
    /// Removing the head relinks the logical tail to the head's successor,
    /// which becomes the new head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::CircularLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularLinkedList::from_iter([0, 1, 2]);
    /// assert_eq!(list.delete_with_value(&0), Some(0));
    /// assert_eq!(list.to_string(), "1 -> 2 -> (head)");
    ///
    /// let mut single = CircularLinkedList::from_iter([5]);
    /// single.delete_with_value(&5);
    /// assert!(single.is_empty());
    /// ```
    pub fn delete_with_value(&mut self, value: &T) -> Option<T> {
        let (prev, node) = self.find_with_prev(value)?;
        if prev == node {
            // a one-node cycle is its own logical tail
            self.head = None;
            #[cfg(feature = "length")]
            {
                self.len = 0;
            }
            // SAFETY: the only node was owned by `head`, which is now cleared.
            return Some(unsafe { Box::from_raw(node.as_ptr()) }.value);
        }
        // SAFETY: `prev` belongs to this list and its successor is not alone.
        Some(unsafe { self.detach_after(prev) }.value)
    }

    /// Returns the first node holding `value`, checking each node of one
    /// turn starting at the head.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let head = self.head()?;
        let mut node = head;
        loop {
            if node.value == *value {
                return Some(node);
            }
            node = node.next();
            if std::ptr::eq(node, head) {
                return None;
            }
        }
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CircularLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for CircularLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();
        if self.head.is_none() {
            match iter.next() {
                Some(value) => self.link_first(value),
                None => return,
            }
        }
        let head = match self.head {
            Some(head) => head,
            None => return,
        };
        // Keep the logical tail at hand instead of walking the cycle per
        // element.
        let mut tail = Self::logical_tail(head);
        for value in iter {
            let mut node = Node::new_looped(value);
            // SAFETY: `tail` and `node` are live; `node` is not shared yet.
            unsafe {
                node.as_mut().next = head;
                tail.as_mut().next = node;
            }
            tail = node;
            #[cfg(feature = "length")]
            {
                self.len += 1;
            }
        }
    }
}

impl<T> FromIterator<T> for CircularLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for CircularLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for CircularLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for CircularLinkedList<T> {}

impl<T: Debug> Debug for CircularLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders one turn of the cycle as `0 -> 1 -> 2 -> (head)`, or
/// `List is empty`.
impl<T: Display> Display for CircularLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("List is empty");
        }
        for value in self {
            write!(f, "{} -> ", value)?;
        }
        f.write_str("(head)")
    }
}

unsafe impl<T: Send> Send for CircularLinkedList<T> {}

unsafe impl<T: Sync> Sync for CircularLinkedList<T> {}
