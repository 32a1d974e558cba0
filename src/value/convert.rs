use super::Value;

/// Retype every element of a sequence to [`Value`]
///
/// Order and length are preserved exactly.
pub fn to_values<T>(seq: &[T]) -> Vec<Value>
where
    T: Clone + Into<Value>,
{
    seq.iter().cloned().map(Into::into).collect()
}
