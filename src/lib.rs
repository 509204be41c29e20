//! # Ring Deque
//!
//! A growable double-ended queue stored in one contiguous circular buffer.
//!
//! [`Deque`] keeps a `head` offset and a `len` counter over its buffer, so pushing and
//! popping at either end never shifts elements. Indexing is O(1), pushes are O(1)
//! amortized, and the buffer is only reallocated when it runs out of room
//! ([`grow`](Deque::grow)) or when asked to drop unused slots ([`clip`](Deque::clip)).
//!
//! ## Key Features
//!
//! * **Both ends:** `push_front`, `push_back`, `pop_front`, `pop_back`, `front`, `back`.
//! * **Random access:** `get`, `get_mut`, `Index`/`IndexMut`, `swap`.
//! * **Capacity control:** `with_capacity`, `grow`, `clip`, plus fallible `try_*` forms
//!   returning [`DequeError`].
//! * **Traversal:** lazy, double-ended [`Iter`]/[`IterMut`]/[`IntoIter`], and indexed
//!   forward/reverse sequences.
//! * **Sorting:** a [`Sortable`] compare/swap view consumed by [`sort::sort`], or
//!   [`make_contiguous`](Deque::make_contiguous) for the standard slice sorts.
//!
//! ## Capacity
//!
//! [`Deque::capacity`] reports the total size of the backing buffer, used slots
//! included. Buffers double while they are small (see [`utils::growth`]).
//!
//! ## Examples
//!
//! ```rust
//! use ring_deque::{deque, sort, Deque};
//!
//! let mut d = deque![9, 8, 7, 6];
//! sort::sort(&mut d.sortable());
//!
//! for i in (1..=5).rev() {
//!     d.push_front(i);
//! }
//! assert_eq!(d.to_string(), "Deque{ len: 9, cap: 16, items: [1, 2, 3, 4, 5, 6, 7, 8, 9]}");
//!
//! let reversed: Vec<_> = d.iter().rev().copied().collect();
//! assert_eq!(reversed, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
//!
//! let mut empty: Deque<i32> = Deque::new();
//! assert_eq!(empty.pop_back(), None);
//! ```
//!
//! `Deque` is an ordinary owned value: mutation requires `&mut`, so sharing one
//! across threads needs the usual external lock.

// --- Module Declarations ---

pub mod deque;
pub mod error;
pub mod iter;
pub mod sort;
pub mod utils;

// --- Re-exports ---

pub use deque::{AnyDeque, Deque};
pub use error::DequeError;
pub use iter::{IntoIter, Iter, IterMut};
pub use sort::{Sortable, SortableSequence};

/// Creates a [`Deque`] holding the given elements, front to back.
///
/// The buffer is sized to exactly the number of elements.
///
/// ```
/// use ring_deque::deque;
///
/// let d = deque![1, 2, 3];
/// assert_eq!(d.capacity(), 3);
/// assert_eq!(d.front(), Some(&1));
///
/// let zeros = deque![0u8; 4];
/// assert_eq!(zeros.len(), 4);
/// ```
#[macro_export]
macro_rules! deque {
    () => {
        $crate::Deque::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Deque::from(::std::vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Deque::from([$($x),+])
    };
}
