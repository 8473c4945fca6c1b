use crate::units::{GRID_DIM, INNER_SPAN};

// Bit matrix
//------------------------------------------------------------------------------

/// Square payload bit matrix decoded from a family code word. Immutable once
/// produced by the code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    dim: usize,
    bits: Vec<bool>,
}

impl BitMatrix {
    /// Decode a row-major code word, MSB first, into a `dim x dim` matrix.
    /// A set bit is a filled (black) payload cell.
    pub fn from_code(code: u64, dim: usize) -> Self {
        let n = dim * dim;
        debug_assert!(n <= 64, "code word holds at most 64 payload bits");

        let bits = (0..n).map(|i| code >> (n - 1 - i) & 1 == 1).collect();
        Self { dim, bits }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, r: usize, c: usize) -> bool {
        self.bits[r * self.dim + c]
    }
}

// Canonical grid
//------------------------------------------------------------------------------

/// White margin ring width in cells.
pub const MARGIN_CELLS: usize = 1;

/// Black border ring width in cells.
pub const BORDER_CELLS: usize = 1;

/// The full cell layout of a tag: payload centered in a one-cell black border
/// ring, itself inside a one-cell white margin ring. 10x10 for tag36h11.
/// Every renderer consumes this grid; `true` cells are filled (black).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalGrid {
    dim: usize,
    cells: Vec<bool>,
}

impl CanonicalGrid {
    pub fn assemble(payload: &BitMatrix) -> Self {
        let dim = payload.dim() + 2 * (MARGIN_CELLS + BORDER_CELLS);
        debug_assert_eq!(
            dim * INNER_SPAN as usize,
            payload.dim().saturating_add(2 * BORDER_CELLS) * GRID_DIM as usize,
            "grid spans must keep the fixed inner/full ratio"
        );

        let mut cells = vec![false; dim * dim];
        for r in 0..dim {
            for c in 0..dim {
                // Distance to the nearest edge decides the ring: margin ring
                // stays white, border ring is black, the rest is payload.
                let ring = r.min(c).min(dim - 1 - r).min(dim - 1 - c);
                cells[r * dim + c] = match ring {
                    0 => false,
                    1 => true,
                    _ => {
                        let inset = MARGIN_CELLS + BORDER_CELLS;
                        payload.get(r - inset, c - inset)
                    }
                };
            }
        }
        Self { dim, cells }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_filled(&self, r: usize, c: usize) -> bool {
        self.cells[r * self.dim + c]
    }
}
