//! Higher-order operations over ordered sequences.
//!
//! Five operations are provided: [`all`], [`some`], [`map`], [`select`] and
//! [`each`]. Each of them sweeps a [`Sequence`] once in ascending index order
//! and invokes a callback with the index and the element.
//!
//! ```
//! use enumerable::{all, map, select};
//!
//! assert_eq!(all(&[1, 2, 3], |_, v| *v > 0), Ok(true));
//! assert_eq!(map(&[1, 2, 3], |_, v| v * 2), Ok(Some(vec![2, 4, 6])));
//! assert_eq!(select(&[1, 2, 3, 4], |_, v| v % 2 == 0), Ok(Some(vec![2, 4])));
//!
//! // an empty input has no result, which is not the same as an empty result
//! assert_eq!(map(&Vec::<i32>::new(), |_, v| v * 2), Ok(None));
//! assert_eq!(select(&[1, 3], |_, v| v % 2 == 0), Ok(Some(vec![])));
//! ```
//!
//! Callbacks that can fail have `try_*` counterparts. A callback that
//! returns an error, or panics, turns into an [`Error::CallbackFailure`];
//! no partial result is ever returned with an error.
//!
//! For callers whose values are only typed at runtime, the [`dynamic`]
//! module offers the same operations over [`Value`].

pub mod dynamic;
pub mod error;
mod guard;
mod operation;
mod sequence;
pub mod value;

pub use error::{Error, Operation, Result};
pub use operation::{
    all, each, map, select, some, try_all, try_each, try_map, try_select, try_some,
};
pub use sequence::Sequence;
pub use value::{TypeError, Value, ValueKind};
