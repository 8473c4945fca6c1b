use crate::codes::TAG36H11_CODES;
use crate::error::{TagError, TagResult};
use crate::pattern::BitMatrix;

// Code table
//------------------------------------------------------------------------------

/// A fiducial tag family: a fixed code table with a minimum pairwise bit
/// distance. This crate only generates markers from a table; it never
/// verifies the distance guarantee.
pub trait CodeTable {
    fn name(&self) -> &'static str;

    /// Payload bits per side (e.g. 6 for tag36h11).
    fn dimension(&self) -> usize;

    /// Minimum pairwise hamming distance of the family.
    fn hamming_distance(&self) -> usize;

    /// Number of codes in the family.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw code word for an identifier, row-major bit order, MSB at the
    /// top-left payload cell.
    fn code(&self, id: u16) -> TagResult<u64>;

    /// Decode the identifier's payload into a bit matrix.
    fn lookup(&self, id: u16) -> TagResult<BitMatrix> {
        let code = self.code(id)?;
        Ok(BitMatrix::from_code(code, self.dimension()))
    }
}

/// The official tag36h11 family: 587 codes, 6x6 payload, hamming distance 11.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tag36h11;

impl CodeTable for Tag36h11 {
    fn name(&self) -> &'static str {
        "tag36h11"
    }

    fn dimension(&self) -> usize {
        6
    }

    fn hamming_distance(&self) -> usize {
        11
    }

    fn len(&self) -> usize {
        TAG36H11_CODES.len()
    }

    fn code(&self, id: u16) -> TagResult<u64> {
        TAG36H11_CODES
            .get(id as usize)
            .copied()
            .ok_or(TagError::InvalidIdentifier(id))
    }
}

#[cfg(test)]
mod family_tests {
    use super::*;

    #[test]
    fn family_metadata() {
        assert_eq!(Tag36h11.name(), "tag36h11");
        assert_eq!(Tag36h11.dimension(), 6);
        assert_eq!(Tag36h11.hamming_distance(), 11);
        assert_eq!(Tag36h11.len(), 587);
    }

    #[test]
    fn lookup_is_deterministic_and_stable() {
        for id in [0u16, 1, 42, 300, 586] {
            let first = Tag36h11.lookup(id).unwrap();
            let second = Tag36h11.lookup(id).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn lookup_rejects_out_of_domain() {
        assert_eq!(Tag36h11.lookup(587), Err(TagError::InvalidIdentifier(587)));
        assert_eq!(
            Tag36h11.lookup(u16::MAX),
            Err(TagError::InvalidIdentifier(u16::MAX))
        );
    }

    #[test]
    fn no_modulo_wraparound() {
        // id 587 must not silently alias id 0
        assert!(Tag36h11.lookup(587).is_err());
        assert!(Tag36h11.lookup(0).is_ok());
    }
}
