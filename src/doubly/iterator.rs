use crate::doubly::{DoublyLinkedList, Node};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the values of a `DoublyLinkedList`.
///
/// It uses a pair of nodes `front..=back` to represent the closed range of
/// nodes still to be yielded; both are `None` once the range is exhausted.
///
/// The range is held as raw node pointers, so the lifetime `'a` is tied to
/// the list through a phantom `&'a DoublyLinkedList<T>`. The list stays
/// borrowed for as long as the iterator lives, which keeps `front` and `back`
/// from being freed under it.
///
/// # Examples
///
/// ```compile_fail
/// use linked_lists::DoublyLinkedList;
/// use std::iter::FromIterator;
///
/// let mut list = DoublyLinkedList::from_iter([1, 2, 3]);
/// let mut range = list.iter();
/// range.next();
///
/// // `back` still points at the node holding 3.
/// list.delete_with_value(&3);
/// println!("{:?}", range.next_back());
/// ```
pub struct Iter<'a, T: 'a> {
    front: Option<NonNull<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    #[cfg(feature = "length")]
    len: usize,
    _marker: PhantomData<&'a DoublyLinkedList<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>) -> Self {
        Self {
            front: list.head,
            back: list.tail,
            #[cfg(feature = "length")]
            len: list.len,
            _marker: PhantomData,
        }
    }

    /// Shrinks the range after `node` was yielded from either end.
    fn exhaust_if_last(&mut self, node: NonNull<Node<T>>) -> bool {
        if self.front == Some(node) && self.back == Some(node) {
            self.front = None;
            self.back = None;
            true
        } else {
            false
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            #[cfg(feature = "length")]
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        for value in self.clone() {
            f.field(value);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*front` and reset the iterating range to `front.next..=back`,
    /// or return `None` if the range is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.front?;
        // SAFETY: `front..=back` is always a valid range of a live list.
        let current = unsafe { &*node.as_ptr() };
        if !self.exhaust_if_last(node) {
            self.front = current.next;
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&current.value)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Return `*back` and reset the iterating range to `front..=back.prev`,
    /// or return `None` if the range is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.back?;
        // SAFETY: `front..=back` is always a valid range of a live list.
        let current = unsafe { &*node.as_ptr() };
        if !self.exhaust_if_last(node) {
            self.back = current.prev;
        }
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&current.value)
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::DoublyLinkedList;
    use std::iter::FromIterator;

    #[test]
    fn test_iter() {
        fn test_case(len: i32, mid: usize) {
            let vec = Vec::from_iter(0..len);
            let list = DoublyLinkedList::from_iter(vec.clone());

            let mut iter = list.iter();
            for item in vec.iter() {
                assert_eq!(iter.next(), Some(item));
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next_back(), None);

            let mut iter = list.iter().rev();
            for item in vec.iter().rev() {
                assert_eq!(iter.next(), Some(item));
            }
            assert_eq!(iter.next(), None);

            // meet in the middle from both ends
            let mut iter = list.iter();
            for item in vec.iter().take(mid) {
                assert_eq!(iter.next(), Some(item));
            }
            for item in vec.iter().skip(mid).rev() {
                assert_eq!(iter.next_back(), Some(item));
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next_back(), None);
            #[cfg(feature = "length")]
            assert_eq!(iter.len(), 0);
        }
        test_case(10, 10);
        test_case(10, 5);
        test_case(10, 0);
        test_case(2, 1);
        test_case(1, 1);
        test_case(1, 0);
        test_case(0, 0);
    }

    #[test]
    fn iter_clone_is_independent() {
        let list = DoublyLinkedList::from_iter(0..3);
        let mut iter = list.iter();
        iter.next();
        let cloned = iter.clone();
        assert_eq!(iter.count(), 2);
        assert_eq!(Vec::from_iter(cloned.copied()), vec![1, 2]);
    }
}
