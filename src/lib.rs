//! This crate provides three linked lists with owned nodes: a
//! [`SinglyLinkedList`], a [`DoublyLinkedList`] and a [`CircularLinkedList`].
//!
//! All three share the same small surface: `append`, `prepend`,
//! `delete_with_value`, `find` and an ordered, finite traversal through
//! `iter`. Their `Display` renders the list the way it reads along the links.
//!
//! ```
//! use linked_lists::{CircularLinkedList, DoublyLinkedList, SinglyLinkedList};
//!
//! let mut singly = SinglyLinkedList::new();
//! singly.append(1);
//! singly.append(2);
//! singly.prepend(0);
//! assert_eq!(singly.to_string(), "0 -> 1 -> 2 -> null");
//! singly.delete_with_value(&1);
//! assert_eq!(singly.to_string(), "0 -> 2 -> null");
//!
//! let mut doubly = DoublyLinkedList::new();
//! doubly.append(1);
//! doubly.append(2);
//! doubly.prepend(0);
//! assert_eq!(doubly.to_string(), "0 <-> 1 <-> 2 <-> null");
//! assert_eq!(doubly.iter().rev().copied().collect::<Vec<_>>(), vec![2, 1, 0]);
//!
//! let mut circular = CircularLinkedList::new();
//! circular.append(1);
//! circular.append(2);
//! circular.prepend(0);
//! assert_eq!(circular.to_string(), "0 -> 1 -> 2 -> (head)");
//! ```
//!
//! # Memory Layout
//!
//! Every list exclusively owns its nodes, and every node is owned through
//! exactly one `next` link (or the `head` slot):
//! ```text
//!  singly     head ══→ [0] ══→ [1] ══→ [2] ══→ None
//!
//!  doubly     head ══→ [0] ══→ [1] ══→ [2] ══→ None
//!                 None ←── [0] ←── [1] ←── [2] ←── tail
//!
//!  circular   head ══→ [0] ══→ [1] ══→ [2] ──┐
//!                       ↑                    │
//!                       └────────────────────┘
//! ```
//! `══→` owns the next node, `──→` is a back-reference used only for
//! navigation: the doubly linked list's `prev` links and `tail`, and the
//! circular list's wrap edge from its logical tail back to `head`. Nodes are
//! released only through owning links, so no node is freed twice and the
//! cycle does not keep itself alive.
//!
//! # Searching and Deleting
//!
//! `find` returns a read-only handle to the first node holding a value, or
//! `None`. The handle can navigate to the neighbouring nodes:
//!
//! ```
//! use linked_lists::CircularLinkedList;
//! use std::iter::FromIterator;
//!
//! let list = CircularLinkedList::from_iter([0, 1, 2]);
//! let last = list.find(&2).unwrap();
//! // the node after the logical tail is the head
//! assert!(std::ptr::eq(last.next(), list.head().unwrap()));
//! assert!(list.find(&3).is_none());
//! ```
//!
//! `delete_with_value` removes the first match and hands its value back;
//! deleting a value that is not in the list leaves it untouched and returns
//! `None`.
//!
//! # Length
//!
//! With the default `length` feature every list keeps its element count, so
//! `len` is *O*(1) and the iterators are [`ExactSizeIterator`]s. It can be
//! disabled in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! linked_lists = { default-features = false }
//! ```
//!
//! # Safe Code Variant
//!
//! The [`branded`] module provides a doubly linked list without any `unsafe`
//! code, built on `ghost-cell` and `static-rc`. The list owns the
//! `GhostToken` that brands its nodes.
//!
//! [`SinglyLinkedList`]: crate::SinglyLinkedList
//! [`DoublyLinkedList`]: crate::DoublyLinkedList
//! [`CircularLinkedList`]: crate::CircularLinkedList
//! [`branded`]: crate::branded

#[doc(inline)]
pub use circular::CircularLinkedList;
#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;

pub mod branded;
pub mod circular;
pub mod doubly;
pub mod singly;
