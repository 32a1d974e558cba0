use super::error::ShapeError;
use super::sequence::{Extent, SequenceSet};

/// Confirm every member is a sequence and all share one length
///
/// Returns the common length. The first member fixes the expected length;
/// the first member that disagrees (or is a scalar) is reported.
pub fn validate<S>(set: &S) -> Result<usize, ShapeError>
where
    S: SequenceSet + ?Sized,
{
    let mut common = None;

    for (position, extent) in set.extents().into_iter().enumerate() {
        let len = match extent {
            Extent::Sequence(len) => len,
            Extent::Scalar(found) => {
                return Err(ShapeError::NotASequence { position, found });
            }
        };

        match common {
            None => common = Some(len),
            Some(expected) if expected != len => {
                return Err(ShapeError::LengthMismatch {
                    position,
                    expected,
                    found: len,
                });
            }
            Some(_) => {}
        }
    }

    common.ok_or(ShapeError::NoSequences)
}
