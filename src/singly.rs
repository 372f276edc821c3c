//! A singly linked list: every node exclusively owns its successor.

use std::fmt::{self, Debug, Display, Formatter};
use std::iter::{FromIterator, FusedIterator};

/// A singly linked list with owned nodes.
///
/// `head` owns the first node and each node owns the next one, so the whole
/// chain is a line of exclusive ownership ending in `None`.
///
/// Prepending takes *O*(1) time, appending, deleting and finding take *O*(*n*).
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    #[cfg(feature = "length")]
    len: usize,
}

/// A node of a [`SinglyLinkedList`], handed out read-only by
/// [`SinglyLinkedList::find`] and [`SinglyLinkedList::head`].
pub struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T, next: Option<Box<Node<T>>>) -> Box<Self> {
        Box::new(Node { value, next })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The following node, or `None` if this is the last one.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty `SinglyLinkedList`.
    ///
    /// # Examples
    /// ```
    /// use linked_lists::SinglyLinkedList;
    /// let list: SinglyLinkedList<u32> = SinglyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements.
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
        self.head.as_deref()
    }

    /// Adds an element at the end of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.to_string(), "1 -> 2 -> null");
    /// ```
    pub fn append(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Node::new(value, None));
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Adds an element as the new head of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.append(1);
    /// list.prepend(0);
    /// assert_eq!(list.head().map(|node| *node.value()), Some(0));
    /// ```
    pub fn prepend(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::new(value, next));
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Removes every element. Nodes are released one by one, so long lists
    /// do not recurse in their destructor.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        #[cfg(feature = "length")]
        {
            self.len = 0;
        }
    }

    /// Provides a forward iterator from the head to the last node.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
            #[cfg(feature = "length")]
            len: self.len,
        }
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Removes the first node holding `value` and returns its value, or
    /// `None` (leaving the list untouched) if there is no such node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = SinglyLinkedList::from_iter([0, 1, 2]);
    /// assert_eq!(list.delete_with_value(&1), Some(1));
    /// assert_eq!(list.delete_with_value(&7), None);
    /// assert_eq!(list.to_string(), "0 -> 2 -> null");
    /// ```
    pub fn delete_with_value(&mut self, value: &T) -> Option<T> {
        let mut link = &mut self.head;
        while link.as_ref().map_or(false, |node| node.value != *value) {
            link = &mut link.as_mut()?.next;
        }
        let node = *link.take()?;
        *link = node.next;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(node.value)
    }

    /// Returns the first node holding `value`, walking from the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_lists::SinglyLinkedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = SinglyLinkedList::from_iter([0, 1, 2]);
    /// let node = list.find(&1).unwrap();
    /// assert_eq!(node.next().map(|next| *next.value()), Some(2));
    /// assert!(list.find(&3).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut link = self.head.as_deref();
        while let Some(node) = link {
            if node.value == *value {
                return Some(node);
            }
            link = node.next.as_deref();
        }
        None
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

/// An iterator over the values of a [`SinglyLinkedList`], in link order.
pub struct Iter<'a, T> {
    node: Option<&'a Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.as_deref();
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&node.value)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node,
            #[cfg(feature = "length")]
            len: self.len,
        }
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Walk to the end once instead of once per element.
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        for value in iter {
            let node = link.get_or_insert(Node::new(value, None));
            link = &mut node.next;
            #[cfg(feature = "length")]
            {
                self.len += 1;
            }
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `0 -> 1 -> 2 -> null`.
impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{} -> ", value)?;
        }
        f.write_str("null")
    }
}

#[cfg(test)]
mod tests {
    use super::SinglyLinkedList;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    fn values<T: Clone>(list: &SinglyLinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn append_and_prepend() {
        let mut list = SinglyLinkedList::new();
        list.append(1);
        list.append(2);
        list.prepend(0);
        assert_eq!(values(&list), vec![0, 1, 2]);
        assert_eq!(list.to_string(), "0 -> 1 -> 2 -> null");
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 3);

        list.delete_with_value(&1);
        assert_eq!(values(&list), vec![0, 2]);
        assert_eq!(list.to_string(), "0 -> 2 -> null");
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn prepend_into_empty() {
        let mut list = SinglyLinkedList::new();
        list.prepend("a");
        assert_eq!(list.head().map(|node| *node.value()), Some("a"));
        assert!(list.head().and_then(|node| node.next()).is_none());
    }

    #[test]
    fn delete_head_middle_and_last() {
        let mut list = SinglyLinkedList::from_iter(0..5);
        assert_eq!(list.delete_with_value(&0), Some(0));
        assert_eq!(values(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.delete_with_value(&4), Some(4));
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.delete_with_value(&2), Some(2));
        assert_eq!(values(&list), vec![1, 3]);
        assert_eq!(list.delete_with_value(&1), Some(1));
        assert_eq!(list.delete_with_value(&3), Some(3));
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "null");
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn delete_only_first_match() {
        let mut list = SinglyLinkedList::from_iter([1, 2, 1, 2]);
        list.delete_with_value(&2);
        assert_eq!(values(&list), vec![1, 1, 2]);
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut empty = SinglyLinkedList::<i32>::new();
        assert_eq!(empty.delete_with_value(&1), None);
        assert!(empty.is_empty());

        let mut list = SinglyLinkedList::from_iter(0..3);
        let before = list.clone();
        assert_eq!(list.delete_with_value(&9), None);
        assert_eq!(list, before);
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn find_returns_first_match() {
        let list = SinglyLinkedList::from_iter([(1, 'a'), (2, 'b'), (1, 'c')]);
        let node = list.find(&(1, 'c')).unwrap();
        assert_eq!(node.value(), &(1, 'c'));
        assert!(node.next().is_none());
        assert!(list.contains(&(2, 'b')));
        assert!(!list.contains(&(3, 'd')));

        let empty = SinglyLinkedList::<i32>::new();
        assert!(empty.find(&0).is_none());
    }

    #[test]
    fn iter_is_restartable() {
        let list = SinglyLinkedList::from_iter(0..4);
        let mut iter = list.iter();
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.by_ref().count(), 3);
        assert_eq!(iter.next(), None);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn iter_clone_without_clone_values() {
        struct Opaque(u8);
        let list = SinglyLinkedList::from_iter((0..3).map(Opaque));
        let mut iter = list.iter();
        iter.next();
        let rest = iter.clone();
        assert_eq!(iter.map(|v| v.0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(rest.map(|v| v.0).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut list = SinglyLinkedList::from_iter(0..2);
        list.extend(2..4);
        assert_eq!(values(&list), vec![0, 1, 2, 3]);
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn long_list_drop() {
        let list = SinglyLinkedList::from_iter(0..200_000);
        drop(list);
    }

    #[test]
    fn list_drop() {
        struct DropChecker<'a> {
            value: i32,
            dropped: &'a RefCell<Vec<i32>>,
        }
        impl Drop for DropChecker<'_> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        impl PartialEq for DropChecker<'_> {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }
        let dropped = RefCell::new(Vec::new());
        let checker = |value| DropChecker {
            value,
            dropped: &dropped,
        };
        let mut list = SinglyLinkedList::new();
        list.append(checker(1));
        list.append(checker(2));
        list.append(checker(3));

        let removed = list.delete_with_value(&checker(2));
        assert_eq!(dropped.borrow().as_slice(), &[2]);
        drop(removed);
        assert_eq!(dropped.borrow().as_slice(), &[2, 2]);

        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[2, 2, 1, 3]);
    }
}
