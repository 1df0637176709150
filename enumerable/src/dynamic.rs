//! The sequence operations over dynamically typed [`Value`]s.
//!
//! These check at runtime what the typed operations check at compile time:
//! the first argument has to be a [`Value::Sequence`], otherwise the result
//! is an [`Error::InvalidArgument`](crate::Error::InvalidArgument).
//! Predicates have to return a [`Value::Boolean`]; anything else is a
//! callback failure.
//!
//! ```
//! use enumerable::{dynamic, Value};
//!
//! let words: Value = vec!["a", "bb", "ccc"].into_iter().collect();
//! let result = dynamic::some(&words, |_, word| {
//!     Ok::<_, enumerable::TypeError>(Value::from(word.to_str()?.len() > 1))
//! });
//! assert_eq!(result, Ok(true));
//!
//! let result = dynamic::all(&Value::from(10_i64), |_, _| {
//!     Ok::<_, enumerable::TypeError>(Value::from(true))
//! });
//! assert!(result.is_err());
//! ```

use std::fmt::Display;
use std::rc::Rc;

use tracing::debug;

use crate::error::{self, Operation};
use crate::operation;
use crate::value::Value;

fn sequence_items(operation: Operation, value: &Value) -> error::Result<&Rc<[Value]>> {
    value.to_sequence().map_err(|e| {
        debug!(%operation, found = %e.found, "first argument is not a sequence");
        operation.invalid_argument()
    })
}

// calls the callback and checks that it produced a boolean
fn judge<F, E>(predicate: &mut F, index: usize, item: &Value) -> Result<bool, String>
where
    F: FnMut(usize, &Value) -> Result<Value, E>,
    E: Display,
{
    let value = predicate(index, item).map_err(|e| e.to_string())?;
    value.to_boolean().map_err(|e| e.to_string())
}

/// See [`all`](crate::all).
pub fn all<F, E>(value: &Value, mut predicate: F) -> error::Result<bool>
where
    F: FnMut(usize, &Value) -> Result<Value, E>,
    E: Display,
{
    let items = sequence_items(Operation::All, value)?;
    operation::try_all(items, |index, item| judge(&mut predicate, index, item))
}

/// See [`some`](crate::some).
pub fn some<F, E>(value: &Value, mut predicate: F) -> error::Result<bool>
where
    F: FnMut(usize, &Value) -> Result<Value, E>,
    E: Display,
{
    let items = sequence_items(Operation::Some, value)?;
    operation::try_some(items, |index, item| judge(&mut predicate, index, item))
}

/// See [`map`](crate::map).
///
/// A non-empty result is a [`Value::Sequence`].
pub fn map<F, E>(value: &Value, transform: F) -> error::Result<Option<Value>>
where
    F: FnMut(usize, &Value) -> Result<Value, E>,
    E: Display,
{
    let items = sequence_items(Operation::Map, value)?;
    let results = operation::try_map(items, transform)?;
    Ok(results.map(Value::from))
}

/// See [`select`](crate::select).
///
/// A non-empty result is a [`Value::Sequence`], possibly without items.
pub fn select<F, E>(value: &Value, mut predicate: F) -> error::Result<Option<Value>>
where
    F: FnMut(usize, &Value) -> Result<Value, E>,
    E: Display,
{
    let items = sequence_items(Operation::Select, value)?;
    let results =
        operation::try_select(items, |index, item| judge(&mut predicate, index, item))?;
    Ok(results.map(Value::from))
}

/// See [`each`](crate::each).
///
/// Whatever the action returns is discarded.
pub fn each<F, E>(value: &Value, mut action: F) -> error::Result<()>
where
    F: FnMut(usize, &Value) -> Result<Value, E>,
    E: Display,
{
    let items = sequence_items(Operation::Each, value)?;
    operation::try_each(items, |index, item| action(index, item).map(|_| ()))
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;
    use crate::error::Error;
    use crate::value::TypeError;

    fn integers(values: &[i64]) -> Value {
        values.iter().copied().collect()
    }

    fn positive(_: usize, item: &Value) -> Result<Value, TypeError> {
        Ok(Value::from(item.to_integer()? > 0))
    }

    #[test]
    fn test_all() {
        assert_eq!(all(&integers(&[1, 2, 3]), positive), Ok(true));
        assert_eq!(all(&integers(&[0, 2, 3]), positive), Ok(false));
        assert_eq!(all(&integers(&[]), positive), Ok(false));
    }

    #[test]
    fn test_all_not_a_sequence() {
        let result = all(&Value::from(10_i64), positive);
        assert_eq!(
            result,
            Err(Error::InvalidArgument {
                operation: Operation::All
            })
        );
        assert_snapshot!(
            result.unwrap_err().to_string(),
            @"Enumerable Error: A sequence needs to be the first parameter of All."
        );
    }

    #[test]
    fn test_some_element_type_mismatch() {
        let words: Value = vec!["a", "b"].into_iter().collect();
        let result = some(&words, positive);
        assert_eq!(
            result,
            Err(Error::CallbackFailure {
                operation: Operation::Some,
                message: "expected integer, found string".to_string(),
            })
        );
    }

    #[test]
    fn test_predicate_must_return_boolean() {
        let result = select(&integers(&[1, 2]), |_, item| Ok::<_, TypeError>(item.clone()));
        assert_snapshot!(
            result.unwrap_err().to_string(),
            @"Enumerable Error: expected boolean, found integer"
        );
    }

    #[test]
    fn test_map() {
        let result = map(&integers(&[1, 2, 3]), |_, item| {
            Ok::<_, TypeError>(Value::from(item.to_integer()? * 2))
        });
        assert_eq!(result, Ok(Some(integers(&[2, 4, 6]))));
    }

    #[test]
    fn test_map_to_other_kind() {
        let result = map(&integers(&[7]), |index, item| {
            Ok::<_, TypeError>(Value::from(format!("{}={}", index, item.to_integer()?)))
        });
        assert_eq!(result, Ok(Some(Value::from(vec![Value::from("0=7")]))));
    }

    #[test]
    fn test_map_empty_has_no_result() {
        let result = map(&integers(&[]), |_, item| Ok::<_, TypeError>(item.clone()));
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_select() {
        let even = |_, item: &Value| Ok::<_, TypeError>(Value::from(item.to_integer()? % 2 == 0));
        assert_eq!(
            select(&integers(&[1, 2, 3, 4]), even),
            Ok(Some(integers(&[2, 4])))
        );
        assert_eq!(select(&integers(&[1, 3]), even), Ok(Some(integers(&[]))));
        assert_eq!(select(&integers(&[]), even), Ok(None));
    }

    #[test]
    fn test_select_not_a_sequence() {
        let result = select(&Value::from("abc"), |_, _| Ok::<_, TypeError>(Value::from(true)));
        assert_eq!(result.unwrap_err().operation(), Operation::Select);
    }

    #[test]
    fn test_each() {
        let mut seen = Vec::new();
        let result = each(&integers(&[4, 5]), |index, item| {
            seen.push((index, item.to_integer()?));
            Ok::<_, TypeError>(Value::from(false))
        });
        assert_eq!(result, Ok(()));
        assert_eq!(seen, vec![(0, 4), (1, 5)]);
    }

    #[test]
    fn test_each_not_a_sequence() {
        let result = each(&Value::from(true), |_, item| Ok::<_, TypeError>(item.clone()));
        assert_snapshot!(
            result.unwrap_err().to_string(),
            @"Enumerable Error: A sequence needs to be the first parameter of Each."
        );
    }

    #[test]
    fn test_nested_sequences_are_elements() {
        let nested = Value::from(vec![integers(&[1]), integers(&[])]);
        let result = map(&nested, |_, item| {
            Ok::<_, TypeError>(Value::from(item.to_sequence()?.len() as i64))
        });
        assert_eq!(result, Ok(Some(integers(&[1, 0]))));
    }
}
