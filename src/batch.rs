use crate::error::{TagError, TagResult};
use crate::family::{CodeTable, Tag36h11};

// Batch generation
//------------------------------------------------------------------------------

/// Validated inclusive identifier range for batch generation. Each id renders
/// independently through the single-tag path, so batches are embarrassingly
/// parallel if the caller wants them to be.
pub fn id_range(start: u16, end: u16) -> TagResult<std::ops::RangeInclusive<u16>> {
    if start > end {
        return Err(TagError::InvalidLayout("start id past end id"));
    }
    if end as usize >= Tag36h11.len() {
        return Err(TagError::InvalidIdentifier(end));
    }
    Ok(start..=end)
}

#[cfg(test)]
mod batch_tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        let ids: Vec<u16> = id_range(4, 7).unwrap().collect();
        assert_eq!(ids, vec![4, 5, 6, 7]);
    }

    #[test]
    fn whole_family_is_reachable() {
        assert_eq!(id_range(0, 586).unwrap().count(), 587);
    }

    #[test]
    fn rejects_inverted_and_overflowing_ranges() {
        assert_eq!(
            id_range(5, 4).unwrap_err(),
            TagError::InvalidLayout("start id past end id")
        );
        assert_eq!(id_range(0, 587).unwrap_err(), TagError::InvalidIdentifier(587));
    }
}
