//! A doubly linked list written without `unsafe`.
//!
//! Nodes live in [`GhostCell`]s branded with the list's `'id`, and the list
//! owns the one [`GhostToken`] of that brand, so it alone can reach them.
//! Each node is owned by two [`StaticRc`] halves: one held by its predecessor
//! (or the list's head slot) and one by its successor (or the list's tail
//! slot). Joining both halves is the only way to get the node back, which
//! makes releasing a node that is still linked impossible.
//!
//! Dropping the list unlinks and releases every node.
//!
//! ```
//! use ghost_cell::GhostToken;
//! use linked_lists::branded::List;
//!
//! GhostToken::new(|token| {
//!     let mut list = List::new(token);
//!     list.append(1);
//!     list.append(2);
//!     list.prepend(0);
//!     assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
//!
//!     assert_eq!(list.delete_with_value(&1), Some(1));
//!     assert_eq!(list.find(&2), Some(&2));
//! });
//! ```

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::iter::FusedIterator;
use std::ops::Deref;

pub struct List<'id, T> {
    chain: Chain<'id, T>,
    token: GhostToken<'id>,
}

/// The two end slots and the count, without the token. Its owner releases
/// the nodes.
struct Chain<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    len: usize,
}

struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    value: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;
type FullNode<'id, T> = Full<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

const HEAD: usize = 0;
const TAIL: usize = 1;

impl<'id, T> Node<'id, T> {
    const NEXT: usize = 0;

    fn new(value: T) -> FullNode<'id, T> {
        let links = [None, None];
        Full::new(GhostCell::new(Self { links, value }))
    }

    fn into_value(node: FullNode<'id, T>) -> T {
        GhostCell::into_inner(*Full::into_box(node)).value
    }
}

impl<'id, T> Chain<'id, T> {
    fn new() -> Self {
        let links = [None, None];
        Self { links, len: 0 }
    }

    /// Link a whole node at the `side` end, splitting it into the half kept
    /// by the neighbour (or the opposite slot) and the half kept by `side`.
    fn push_node_at(&mut self, side: usize, node: FullNode<'id, T>, token: &mut GhostToken<'id>) {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let (left, right) = Full::split(node);
        match self.links[side].take() {
            Some(this_side) => {
                this_side.deref().borrow_mut(token).links[oppo] = Some(left);
                right.deref().borrow_mut(token).links[side] = Some(this_side);
            }
            None => self.links[oppo] = Some(left),
        }
        self.links[side] = Some(right);
        self.len += 1;
    }

    /// Unlink the node at the `side` end and join its two halves back.
    fn pop_node_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<FullNode<'id, T>> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let right = self.links[side].take()?;
        let left = match right.deref().borrow_mut(token).links[side].take() {
            Some(this_side) => {
                let left = this_side.deref().borrow_mut(token).links[oppo].take();
                self.links[side] = Some(this_side);
                left.expect("a linked neighbour holds the other half")
            }
            None => self.links[oppo].take().expect("a lone node has both ends"),
        };
        self.len -= 1;
        Some(Full::join(left, right))
    }
}

impl<'id, T> List<'id, T> {
    /// Creates an empty list that owns `token`, and with it every node
    /// branded `'id`.
    pub fn new(token: GhostToken<'id>) -> Self {
        Self {
            chain: Chain::new(),
            token,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chain.links[HEAD].is_none()
    }

    pub fn len(&self) -> usize {
        self.chain.len
    }

    pub fn append(&mut self, value: T) {
        self.chain.push_node_at(TAIL, Node::new(value), &mut self.token);
    }

    pub fn prepend(&mut self, value: T) {
        self.chain.push_node_at(HEAD, Node::new(value), &mut self.token);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.chain.pop_node_at(HEAD, &mut self.token).map(Node::into_value)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.chain.pop_node_at(TAIL, &mut self.token).map(Node::into_value)
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, 'id, T> {
        Iter {
            node: self.chain.links[HEAD].as_ref(),
            token: &self.token,
            len: self.chain.len,
        }
    }
}

impl<'id, T: PartialEq> List<'id, T> {
    /// Removes the first node holding `value` and returns its value.
    ///
    /// The match is located first. The nodes in front of it are then moved to
    /// a staging chain and back, so no node is reallocated and the order is
    /// preserved.
    pub fn delete_with_value(&mut self, value: &T) -> Option<T> {
        let at = self.iter().position(|item| item == value)?;
        let token = &mut self.token;
        let mut skipped = Chain::new();
        while skipped.len < at {
            match self.chain.pop_node_at(HEAD, token) {
                Some(node) => skipped.push_node_at(TAIL, node, token),
                None => break,
            }
        }
        let found = self.chain.pop_node_at(HEAD, token);
        while let Some(node) = skipped.pop_node_at(TAIL, token) {
            self.chain.push_node_at(HEAD, node, token);
        }
        found.map(Node::into_value)
    }

    /// Returns the first value equal to `value`, walking from the head.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.iter().find(|item| *item == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl<T> Drop for List<'_, T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// A forward iterator over the values of a branded [`List`].
pub struct Iter<'a, 'id, T> {
    node: Option<&'a NodePtr<'id, T>>,
    token: &'a GhostToken<'id>,
    len: usize,
}

impl<'a, 'id, T> Iterator for Iter<'a, 'id, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?.deref().borrow(self.token);
        self.node = node.links[Node::<T>::NEXT].as_ref();
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, '_, T> {}

impl<T> FusedIterator for Iter<'_, '_, T> {}

#[cfg(test)]
mod tests {
    use crate::branded::List;
    use ghost_cell::GhostToken;
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;

    #[test]
    fn list_push_pop() {
        GhostToken::new(|token| {
            let mut list = List::new(token);
            assert!(list.is_empty());
            list.append(1);
            list.prepend(2);
            assert!(!list.is_empty());
            assert_eq!(list.len(), 2);
            assert_eq!(list.pop_back(), Some(1));
            assert_eq!(list.pop_front(), Some(2));
            assert_eq!(list.pop_front(), None);
            assert!(list.is_empty());
        })
    }

    #[test]
    fn append_prepend_order() {
        GhostToken::new(|token| {
            let mut list = List::new(token);
            list.append(1);
            list.append(2);
            list.prepend(0);
            let values: Vec<_> = list.iter().copied().collect();
            assert_eq!(values, vec![0, 1, 2]);
            assert_eq!(list.iter().len(), 3);
            list.clear();
            assert!(list.is_empty());
        })
    }

    #[test]
    fn delete_at_every_position() {
        for at in 0..4 {
            GhostToken::new(|token| {
                let mut list = List::new(token);
                for value in 0..4 {
                    list.append(value);
                }
                assert_eq!(list.delete_with_value(&at), Some(at));
                let values: Vec<_> = list.iter().copied().collect();
                let expected: Vec<_> = (0..4).filter(|&v| v != at).collect();
                assert_eq!(values, expected);
                assert_eq!(list.len(), 3);
                // both ends are still linked correctly
                assert_eq!(list.pop_back(), expected.last().copied());
                assert_eq!(list.pop_front(), expected.first().copied());
            })
        }
    }

    #[test]
    fn delete_missing_keeps_order() {
        GhostToken::new(|token| {
            let mut list = List::new(token);
            assert_eq!(list.delete_with_value(&1), None);
            for value in [3, 1, 3] {
                list.append(value);
            }
            assert_eq!(list.delete_with_value(&7), None);
            assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1, 3]);
            assert_eq!(list.delete_with_value(&3), Some(3));
            assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        })
    }

    #[test]
    fn find_and_contains() {
        GhostToken::new(|token| {
            let mut list = List::new(token);
            assert_eq!(list.find(&"a"), None);
            list.append("a");
            list.append("b");
            assert_eq!(list.find(&"b"), Some(&"b"));
            assert!(list.contains(&"a"));
            assert!(!list.contains(&"c"));
        })
    }

    #[test]
    fn list_drop() {
        let value = Rc::new(());
        GhostToken::new(|token| {
            let mut list = List::new(token);
            list.append(Rc::clone(&value));
            list.append(Rc::clone(&value));
            list.prepend(Rc::clone(&value));
            assert_eq!(Rc::strong_count(&value), 4);
            drop(list);
            assert_eq!(Rc::strong_count(&value), 1);
        });
        assert_eq!(Rc::strong_count(&value), 1);
    }

    #[test]
    fn list_drop_while_unwinding() {
        let value = Rc::new(());
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            GhostToken::new(|token| {
                let mut list = List::new(token);
                list.append(Rc::clone(&value));
                list.append(Rc::clone(&value));
                panic!("list still holds {} values", list.len());
            })
        }));
        assert!(result.is_err());
        assert_eq!(Rc::strong_count(&value), 1);
    }
}
