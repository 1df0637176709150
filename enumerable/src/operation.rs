// Each operation comes in two forms: the plain form takes an infallible
// callback, the try_ form a callback returning a Result. The plain forms
// are implemented on top of the try_ forms.
//
// None of these short-circuit. A predicate is called for every element even
// once the outcome is known, so callback side effects always cover the whole
// sequence.

use std::convert::Infallible;
use std::fmt::Display;

use crate::error::{self, Operation};
use crate::guard::sweep;
use crate::sequence::Sequence;

/// True if the predicate holds for every element.
///
/// An empty sequence is `false`, not vacuously `true`.
pub fn all<S, F>(sequence: &S, mut predicate: F) -> error::Result<bool>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> bool,
{
    try_all(sequence, |index, item| {
        Ok::<_, Infallible>(predicate(index, item))
    })
}

/// Like [`all`], with a predicate that can fail.
pub fn try_all<S, F, E>(sequence: &S, mut predicate: F) -> error::Result<bool>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> Result<bool, E>,
    E: Display,
{
    if sequence.is_empty() {
        return Ok(false);
    }
    let mut result = true;
    sweep(Operation::All, sequence, |index, item| {
        let outcome = predicate(index, item)?;
        result = result && outcome;
        Ok::<(), E>(())
    })?;
    Ok(result)
}

/// True if the predicate holds for at least one element.
///
/// An empty sequence is `false`.
pub fn some<S, F>(sequence: &S, mut predicate: F) -> error::Result<bool>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> bool,
{
    try_some(sequence, |index, item| {
        Ok::<_, Infallible>(predicate(index, item))
    })
}

/// Like [`some`], with a predicate that can fail.
pub fn try_some<S, F, E>(sequence: &S, mut predicate: F) -> error::Result<bool>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> Result<bool, E>,
    E: Display,
{
    if sequence.is_empty() {
        return Ok(false);
    }
    let mut result = false;
    sweep(Operation::Some, sequence, |index, item| {
        let outcome = predicate(index, item)?;
        result = result || outcome;
        Ok::<(), E>(())
    })?;
    Ok(result)
}

/// Transform every element, collecting the results in order.
///
/// An empty sequence has no result: `Ok(None)`. Otherwise the result has
/// exactly as many elements as the sequence, and position `i` holds
/// `transform(i, &sequence[i])`.
pub fn map<S, F, R>(sequence: &S, mut transform: F) -> error::Result<Option<Vec<R>>>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> R,
{
    try_map(sequence, |index, item| {
        Ok::<_, Infallible>(transform(index, item))
    })
}

/// Like [`map`], with a transform that can fail.
pub fn try_map<S, F, R, E>(sequence: &S, mut transform: F) -> error::Result<Option<Vec<R>>>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> Result<R, E>,
    E: Display,
{
    if sequence.is_empty() {
        return Ok(None);
    }
    let mut results = Vec::with_capacity(sequence.len());
    sweep(Operation::Map, sequence, |index, item| {
        results.push(transform(index, item)?);
        Ok::<(), E>(())
    })?;
    Ok(Some(results))
}

/// Collect the elements for which the predicate holds, in their original
/// order.
///
/// An empty sequence has no result: `Ok(None)`. A non-empty sequence where
/// nothing matches gives `Ok(Some(vec![]))`.
pub fn select<S, F>(sequence: &S, mut predicate: F) -> error::Result<Option<Vec<S::Item>>>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(usize, &S::Item) -> bool,
{
    try_select(sequence, |index, item| {
        Ok::<_, Infallible>(predicate(index, item))
    })
}

/// Like [`select`], with a predicate that can fail.
pub fn try_select<S, F, E>(
    sequence: &S,
    mut predicate: F,
) -> error::Result<Option<Vec<S::Item>>>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(usize, &S::Item) -> Result<bool, E>,
    E: Display,
{
    if sequence.is_empty() {
        return Ok(None);
    }
    let mut results = Vec::new();
    sweep(Operation::Select, sequence, |index, item| {
        if predicate(index, item)? {
            results.push(item.clone());
        }
        Ok::<(), E>(())
    })?;
    Ok(Some(results))
}

/// Invoke the action on every element, for its side effects.
pub fn each<S, F>(sequence: &S, mut action: F) -> error::Result<()>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item),
{
    try_each(sequence, |index, item| {
        action(index, item);
        Ok::<_, Infallible>(())
    })
}

/// Like [`each`], with an action that can fail.
pub fn try_each<S, F, E>(sequence: &S, action: F) -> error::Result<()>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> Result<(), E>,
    E: Display,
{
    if sequence.is_empty() {
        return Ok(());
    }
    sweep(Operation::Each, sequence, action)
}
