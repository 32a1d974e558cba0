use tracing::{debug, warn};

use super::error::ApplyError;
use super::outcome::Mapped;
use crate::shape::{SequenceSet, ShapeError, validate};

/// Apply `f` to every Element Tuple of `seqs`, in index order
///
/// Does not stop on a user error: every index is visited, failing slots hold
/// `R::default()` and the last error seen is returned in [`Mapped::error`].
/// Shape errors are reported before `f` is ever called.
///
/// # Example
/// ```rust
/// use fanmap::apply::map;
///
/// let mapped = map(
///     |t: Vec<i32>| Ok::<_, String>(t[0] * t[1]),
///     [vec![1, 2, 3, 4], vec![5, 4, 3, 2]],
/// )
/// .unwrap();
/// assert_eq!(mapped.values, vec![5, 8, 9, 8]);
/// ```
pub fn map<S, R, E, F>(mut f: F, seqs: S) -> Result<Mapped<R, E>, ShapeError>
where
    S: SequenceSet,
    R: Default,
    F: FnMut(S::Tuple) -> Result<R, E>,
{
    let len = validate(&seqs)?;
    debug!(len, "Mapping sequences");

    let mut mapped = Mapped::new(Vec::with_capacity(len));
    for index in 0..len {
        match f(seqs.tuple(index)) {
            Ok(value) => mapped.values.push(value),
            Err(e) => {
                warn!(index, "Map function failed, continuing");
                mapped.values.push(R::default());
                mapped.record_failure(e, false);
            }
        }
    }

    Ok(mapped)
}

/// Run `f` on every Element Tuple of `seqs` for its effects, in index order
///
/// Stops at the first user error and returns it; effects already performed
/// are not undone.
pub fn for_each<S, E, F>(mut f: F, seqs: S) -> Result<(), ApplyError<E>>
where
    S: SequenceSet,
    F: FnMut(S::Tuple) -> Result<(), E>,
{
    let len = validate(&seqs)?;
    debug!(len, "Visiting sequences");

    for index in 0..len {
        if let Err(e) = f(seqs.tuple(index)) {
            warn!(index, "For-each function failed, stopping");
            return Err(ApplyError::User(e));
        }
    }

    Ok(())
}

/// Elements of `seq` for which `f` holds, in original order
pub fn filter<T, F>(mut f: F, seq: &[T]) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq.iter().filter(|item| f(item)).cloned().collect()
}

/// Number of elements of `seq` for which `f` holds
pub fn count<T, F>(mut f: F, seq: &[T]) -> usize
where
    F: FnMut(&T) -> bool,
{
    seq.iter().filter(|item| f(item)).count()
}

/// Left fold seeded with the first value
///
/// There is no identity element: fewer than two values yields `None`.
pub fn fold<T, I, F>(mut f: F, values: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
{
    let mut iter = values.into_iter();
    let first = iter.next()?;
    let second = iter.next()?;

    let seed = f(first, second);
    Some(iter.fold(seed, f))
}

/// [`fold`] with a fallible combiner; stops at the first failure
pub fn try_fold<T, E, I, F>(mut f: F, values: I) -> Result<Option<T>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> Result<T, E>,
{
    let mut iter = values.into_iter();
    let (Some(first), Some(second)) = (iter.next(), iter.next()) else {
        return Ok(None);
    };

    let mut acc = f(first, second)?;
    for value in iter {
        acc = f(acc, value)?;
    }
    Ok(Some(acc))
}

/// Method form of [`filter`] and [`count`]
pub trait SequenceExt<T> {
    fn keep<F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool;

    fn count_where<F>(&self, f: F) -> usize
    where
        F: FnMut(&T) -> bool;
}

impl<T: Clone> SequenceExt<T> for [T] {
    fn keep<F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        filter(f, self)
    }

    fn count_where<F>(&self, f: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        count(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Value, to_values};

    #[test]
    fn map_identity_returns_input() {
        let input = vec![3, 1, 4, 1, 5];
        let mapped = map(|t: Vec<i32>| Ok::<_, ()>(t[0]), [&input]).unwrap();

        assert_eq!(mapped.values, input);
        assert!(mapped.is_complete());
    }

    #[test]
    fn map_multiplies_pairs() {
        let mapped = map(
            |t: Vec<i32>| Ok::<_, ()>(t[0] * t[1]),
            [vec![1, 2, 3, 4], vec![5, 4, 3, 2]],
        )
        .unwrap();

        assert_eq!(mapped.values, vec![5, 8, 9, 8]);
    }

    #[test]
    fn map_formats_heterogeneous_tuples() {
        let names = vec!["John", "Peter", "Susan"];
        let ages = vec![12, 15, 13];
        let heights = vec![1.23, 1.5, 1.14];

        let mapped = map(
            |(name, age, height): (&str, i32, f64)| {
                Ok::<_, ()>(format!("{}|{}|{:.2}", name, age, height))
            },
            (&names, &ages, &heights),
        )
        .unwrap();

        assert_eq!(
            mapped.values,
            vec!["John|12|1.23", "Peter|15|1.50", "Susan|13|1.14"]
        );
    }

    #[test]
    fn map_continues_past_errors_and_keeps_last() {
        let mut calls = 0;
        let mapped = map(
            |t: Vec<i32>| {
                calls += 1;
                if t[0] % 2 == 0 {
                    Err(format!("even {}", t[0]))
                } else {
                    Ok(t[0] * 10)
                }
            },
            [vec![1, 2, 3, 4, 5]],
        )
        .unwrap();

        assert_eq!(calls, 5);
        assert_eq!(mapped.values, vec![10, 0, 30, 0, 50]);
        assert_eq!(mapped.error.as_deref(), Some("even 4"));
        assert_eq!(mapped.failures, 2);
    }

    #[test]
    fn map_rejects_mismatched_lengths_without_calling() {
        let mut calls = 0;
        let err = map(
            |_: Vec<i32>| {
                calls += 1;
                Ok::<i32, ()>(0)
            },
            [vec![1, 2, 3], vec![1, 2]],
        )
        .unwrap_err();

        assert!(err.is_length_mismatch());
        assert_eq!(calls, 0);
    }

    #[test]
    fn map_rejects_scalar_argument() {
        let err = map(
            |t: Vec<Value>| Ok::<_, ()>(t.len()),
            vec![Value::from(vec![1, 2]), Value::Int(9)],
        )
        .unwrap_err();

        assert_eq!(
            err,
            ShapeError::NotASequence {
                position: 1,
                found: "int"
            }
        );
    }

    #[test]
    fn map_over_empty_sequences() {
        let empty: Vec<i32> = vec![];
        let mapped = map(|t: Vec<i32>| Ok::<_, ()>(t[0]), [&empty, &empty]).unwrap();
        assert!(mapped.is_empty());
    }

    #[test]
    fn for_each_visits_in_order() {
        let mut seen = Vec::new();
        for_each(
            |(name, age): (String, u32)| {
                seen.push(format!("{}={}", name, age));
                Ok::<_, ()>(())
            },
            (vec!["John".to_string(), "Peter".to_string()], vec![12u32, 44]),
        )
        .unwrap();

        assert_eq!(seen, vec!["John=12", "Peter=44"]);
    }

    #[test]
    fn for_each_stops_at_first_error() {
        let mut calls = 0;
        let result = for_each(
            |t: Vec<i32>| {
                calls += 1;
                if t[0] == 2 { Err("second failed") } else { Ok(()) }
            },
            [vec![1, 2, 3, 4, 5]],
        );

        assert_eq!(result, Err(ApplyError::User("second failed")));
        assert_eq!(calls, 2);
    }

    #[test]
    fn for_each_never_calls_on_mismatch() {
        let mut calls = 0;
        let result = for_each(
            |_: Vec<i32>| {
                calls += 1;
                Ok::<_, ()>(())
            },
            [vec![1, 2, 3], vec![1, 2, 3, 4]],
        );

        assert!(result.unwrap_err().is_shape());
        assert_eq!(calls, 0);
    }

    #[test]
    fn filter_keeps_even_numbers_in_order() {
        let input: Vec<i32> = (1..=10).collect();
        assert_eq!(filter(|n| n % 2 == 0, &input), vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn filter_accepts_empty_input() {
        let empty: Vec<String> = vec![];
        assert!(filter(|_| true, &empty).is_empty());
    }

    #[test]
    fn count_matches_filter() {
        let input: Vec<i32> = (1..=10).collect();
        assert_eq!(count(|n| n % 2 == 0, &input), 5);
        assert_eq!(count(|_| false, &input), 0);
    }

    #[test]
    fn sequence_ext_methods_delegate() {
        let input = [1, 2, 3, 4, 5, 6];
        assert_eq!(input.keep(|n| *n > 3), vec![4, 5, 6]);
        assert_eq!(input.count_where(|n| *n > 3), 3);

        let values = to_values(&input);
        assert_eq!(values.count_where(|v| v.as_int() == Some(2)), 1);
    }

    #[test]
    fn fold_sums_values() {
        assert_eq!(fold(|a, b| a + b, vec![1, 2, 3, 4, 5]), Some(15));
        assert_eq!(fold(|a, b| a + b, 1..=10), Some(55));
    }

    #[test]
    fn fold_is_left_associative() {
        let folded = fold(
            |a: String, b: String| format!("({}{})", a, b),
            ["a", "b", "c"].map(String::from),
        );
        assert_eq!(folded.as_deref(), Some("((ab)c)"));
    }

    #[test]
    fn fold_needs_two_values() {
        assert_eq!(fold(|a: i32, b| a + b, vec![]), None);
        assert_eq!(fold(|a: i32, b| a + b, vec![42]), None);
    }

    #[test]
    fn fold_over_converted_values() {
        let values = to_values(&[1, 2, 3]);
        let sum = fold(
            |a: Value, b: Value| Value::Int(a.as_int().unwrap_or(0) + b.as_int().unwrap_or(0)),
            values,
        );
        assert_eq!(sum, Some(Value::Int(6)));
    }

    #[test]
    fn try_fold_stops_at_failure() {
        let mut calls = 0;
        let result = try_fold(
            |a: i32, b: i32| {
                calls += 1;
                a.checked_add(b).ok_or("overflow")
            },
            vec![i32::MAX, 1, 2],
        );

        assert_eq!(result, Err("overflow"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn try_fold_matches_fold_when_total() {
        let result: Result<_, ()> = try_fold(|a, b| Ok(a * b), vec![1, 2, 3, 4]);
        assert_eq!(result, Ok(Some(24)));
        assert_eq!(try_fold(|a: i32, b| Ok::<_, ()>(a + b), vec![1]), Ok(None));
    }
}
