use crate::circular::{CircularLinkedList, Node};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over one turn of a `CircularLinkedList`.
///
/// Unlike walking the nodes with [`Node::next`], which never ends, the
/// iterator stops as soon as the walk comes back to the head, so it yields
/// exactly `len` items and is fused.
///
/// [`Node::next`]: crate::circular::Node::next
pub struct Iter<'a, T: 'a> {
    current: Option<NonNull<Node<T>>>,
    head: Option<NonNull<Node<T>>>,
    #[cfg(feature = "length")]
    len: usize,
    _marker: PhantomData<&'a CircularLinkedList<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a CircularLinkedList<T>) -> Self {
        Self {
            current: list.head,
            head: list.head,
            #[cfg(feature = "length")]
            len: list.len,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            head: self.head,
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

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        // SAFETY: the iterator borrows the list, so every node of the cycle
        // stays live.
        let current = unsafe { &*node.as_ptr() };
        let head = self.head;
        self.current = Some(current.next).filter(|&next| Some(next) != head);
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
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a CircularLinkedList<T> {
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
    use crate::CircularLinkedList;
    use std::iter::FromIterator;

    #[test]
    fn test_iter() {
        for len in 0..5 {
            let list = CircularLinkedList::from_iter(0..len);
            let mut iter = list.iter();
            for item in 0..len {
                #[cfg(feature = "length")]
                assert_eq!(iter.len(), (len - item) as usize);
                assert_eq!(iter.next(), Some(&item));
            }
            // fused and non-cyclic
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next(), None);
            assert_eq!(list.iter().count(), len as usize);
        }
    }

    #[test]
    fn iter_debug() {
        let list = CircularLinkedList::from_iter([1, 2]);
        let mut iter = list.iter();
        iter.next();
        assert_eq!(format!("{:?}", iter), "Iter(2)");
        assert_eq!(format!("{:?}", list), "[1, 2]");
    }
}
