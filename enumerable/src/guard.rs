use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, trace};

use crate::error::{self, Operation};
use crate::sequence::Sequence;

/// Sweep a sequence once in ascending index order, invoking `f` for each
/// element.
///
/// This is the only place callbacks are invoked. A callback returning `Err`
/// stops the sweep and becomes a callback failure carrying the error's
/// display text. A panicking callback is caught here as well, so nothing
/// escapes the operation boundary.
pub(crate) fn sweep<S, F, E>(operation: Operation, sequence: &S, mut f: F) -> error::Result<()>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> Result<(), E>,
    E: Display,
{
    trace!(%operation, len = sequence.len(), "sweeping sequence");
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        for (index, item) in sequence.elements().enumerate() {
            f(index, item).map_err(|e| e.to_string())?;
        }
        Ok::<(), String>(())
    }));
    let message = match outcome {
        Ok(Ok(())) => return Ok(()),
        Ok(Err(message)) => message,
        Err(payload) => panic_message(payload),
    };
    debug!(%operation, %message, "callback failed");
    Err(operation.callback_failure(message))
}

// panics carry either a &'static str or a String; anything else is opaque
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => (*message).to_string(),
            Err(_) => "callback panicked".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_sweep_visits_in_order() {
        let mut seen = Vec::new();
        let result = sweep(Operation::Each, &[10, 20, 30], |index, item| {
            seen.push((index, *item));
            Ok::<(), Infallible>(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(seen, vec![(0, 10), (1, 20), (2, 30)]);
    }

    #[test]
    fn test_sweep_stops_at_error() {
        let mut seen = Vec::new();
        let result = sweep(Operation::Map, &[1, 2, 3], |index, _| {
            seen.push(index);
            if index == 1 {
                Err("bad element")
            } else {
                Ok(())
            }
        });
        assert_eq!(
            result,
            Err(Error::CallbackFailure {
                operation: Operation::Map,
                message: "bad element".to_string(),
            })
        );
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn test_sweep_catches_str_panic() {
        let result = sweep(Operation::All, &[1], |_, _| -> Result<(), Infallible> {
            panic!("static message")
        });
        assert_eq!(result.unwrap_err().message(), "static message");
    }

    #[test]
    fn test_sweep_catches_formatted_panic() {
        let result = sweep(Operation::Some, &[7], |_, item| -> Result<(), Infallible> {
            panic!("item {} is bad", item)
        });
        assert_eq!(result.unwrap_err().message(), "item 7 is bad");
    }

    #[test]
    fn test_opaque_panic_payload() {
        assert_eq!(panic_message(Box::new(42_u32)), "callback panicked");
    }
}
