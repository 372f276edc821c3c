//! A doubly linked list with `head` and `tail` ends, walkable in both
//! directions.

use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::doubly::iterator::Iter;

pub mod iterator;

/// The `DoublyLinkedList` is a bidirectional chain with `head` and `tail`
/// pointers. Appending and prepending take *O*(1) time, deleting and finding
/// take *O*(*n*) time (*O*(1) once the node is located).
///
/// # Ownership
///
/// Nodes are heap allocated and owned through the `next` chain starting at
/// `head`. The `prev` links and the `tail` pointer are back-references used
/// for navigation only; a node is released exactly once, when it is unlinked
/// from the `next` chain.
///
/// The list keeps the following invariants after every operation:
/// - `head` is `None` iff `tail` is `None` iff the list is empty;
/// - for every node but the head, `node.prev.next == node`;
/// - for every node but the tail, `node.next.prev == node`.
pub struct DoublyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    #[cfg(feature = "length")]
    /// the length of the list
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// A node of a [`DoublyLinkedList`], handed out read-only by
/// [`DoublyLinkedList::find`], [`DoublyLinkedList::head`] and
/// [`DoublyLinkedList::tail`].
pub struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    /// Allocate a node that is not linked into any list yet.
    fn new_detached(
        value: T,
        prev: Option<NonNull<Node<T>>>,
        next: Option<NonNull<Node<T>>>,
    ) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { next, prev, value })))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The following node, or `None` at the tail.
    pub fn next(&self) -> Option<&Node<T>> {
        // SAFETY: a linked `next` always points to a live node of the same
        // list, which outlives the shared borrow of `self`.
        self.next.map(|next| unsafe { &*next.as_ptr() })
    }

    /// The preceding node, or `None` at the head.
    pub fn prev(&self) -> Option<&Node<T>> {
        // SAFETY: same as `next`.
        self.prev.map(|prev| unsafe { &*prev.as_ptr() })
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// private methods
impl<T> DoublyLinkedList<T> {
    /// Unlink `node` from the list and take back its allocation.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list. If it does not, this call makes the list ill-formed.
    unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let node = Box::from_raw(node.as_ptr());
        // The neighbours are patched through the detached node's own links,
        // which stay valid until `node` is dropped by the caller.
        match node.prev {
            Some(mut prev) => prev.as_mut().next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(mut next) => next.as_mut().prev = node.prev,
            None => self.tail = node.prev,
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        #[cfg(debug_assertions)]
        self.assert_ends();
        node
    }

    fn find_node(&self, value: &T) -> Option<NonNull<Node<T>>>
    where
        T: PartialEq,
    {
        let mut current = self.head;
        while let Some(node) = current {
            // SAFETY: every node reachable from `head` is live.
            let node_ref = unsafe { node.as_ref() };
            if node_ref.value == *value {
                return Some(node);
            }
            current = node_ref.next;
        }
        None
    }

    #[cfg(debug_assertions)]
    fn assert_ends(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none());
        unsafe {
            if let Some(head) = self.head {
                assert!(head.as_ref().prev.is_none());
            }
            if let Some(tail) = self.tail {
                assert!(tail.as_ref().next.is_none());
            }
        }
    }
}

impl<T> DoublyLinkedList<T> {
    /// Create an empty `DoublyLinkedList`
    ///
    /// # Examples
    /// ```
    /// use linked_lists::DoublyLinkedList;
    /// let list: DoublyLinkedList<u32> = DoublyLinkedList::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            #[cfg(feature = "length")]
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
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

    /// The first node, or `None` if the list is empty.
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        // SAFETY: `head` is live while the list is borrowed.
        self.head.map(|head| unsafe { &*head.as_ptr() })
    }

    /// The last node, or `None` if the list is empty.
    #[inline]
    pub fn tail(&self) -> Option<&Node<T>> {
        // SAFETY: `tail` is live while the list is borrowed.
        self.tail.map(|tail| unsafe { &*tail.as_ptr() })
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.append(1);
    /// list.append(3);
    /// assert_eq!(list.tail().map(|node| *node.value()), Some(3));
    /// ```
    pub fn append(&mut self, value: T) {
        let node = Node::new_detached(value, self.tail, None);
        match self.tail {
            // SAFETY: `tail` is a live node owned by this list.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.prepend(2);
    /// list.prepend(1);
    /// assert_eq!(list.head().map(|node| *node.value()), Some(1));
    /// ```
    pub fn prepend(&mut self, value: T) {
        let node = Node::new_detached(value, None, self.head);
        match self.head {
            // SAFETY: `head` is a live node owned by this list.
            Some(mut head) => unsafe { head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Removes all elements from the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        while let Some(node) = current {
            // SAFETY: each node is reached once through the `next` chain,
            // which owns it.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            current = node.next;
        }
        #[cfg(feature = "length")]
        {
            self.len = 0;
        }
    }

    /// Provides a double-ended iterator over the values. Use `iter().rev()`
    /// to traverse backwards from the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = DoublyLinkedList::from_iter([0, 1, 2]);
    /// assert_eq!(Vec::from_iter(list.iter().rev().copied()), vec![2, 1, 0]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Removes the first node (from the head) holding `value` and returns
    /// its value, or `None` if there is no such node. A miss leaves the list
    /// untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, of which the unlinking
    /// itself is *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::DoublyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = DoublyLinkedList::from_iter([0, 1, 2]);
    /// assert_eq!(list.delete_with_value(&1), Some(1));
    /// assert_eq!(list.to_string(), "0 <-> 2 <-> null");
    /// ```
    pub fn delete_with_value(&mut self, value: &T) -> Option<T> {
        let node = self.find_node(value)?;
        // SAFETY: `find_node` only returns nodes of this list.
        Some(unsafe { self.detach_node(node) }.value)
    }

    /// Returns the first node holding `value`, walking forward from the head.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        // SAFETY: the node is live while the list is borrowed.
        self.find_node(value)
            .map(|node| unsafe { &*node.as_ptr() })
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.append(value));
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `0 <-> 1 <-> 2 <-> null`.
impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{} <-> ", value)?;
        }
        f.write_str("null")
    }
}

unsafe impl<T: Send> Send for DoublyLinkedList<T> {}

unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}
