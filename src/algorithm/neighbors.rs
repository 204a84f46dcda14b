//! Moore-neighborhood analysis: neighbor counting and marching-squares masks
//!
//! The two algorithms treat cells beyond the grid edge differently.
//! `neighbor_count` counts an off-grid neighbor as matching the predicate,
//! which walls in the map boundary during cave smoothing. `neighbor_mask`
//! leaves the bit of an off-grid neighbor clear, which tile selection relies
//! on. Both conventions are kept as they are.

use crate::spatial::grid::Grid;

/// One of the eight Moore-neighborhood directions
///
/// Bits are assigned clockwise starting at north:
///
/// ```text
/// 7 0 1        [x-1,y+1] [x,y+1] [x+1,y+1]
/// 6   2   ==   [x-1,y  ]  [x,y]  [x+1,y  ]
/// 5 4 3        [x-1,y-1] [x,y-1] [x+1,y-1]
/// ```
///
/// North is `y + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(x, y + 1)`, bit 0
    North,
    /// `(x + 1, y + 1)`, bit 1
    NorthEast,
    /// `(x + 1, y)`, bit 2
    East,
    /// `(x + 1, y - 1)`, bit 3
    SouthEast,
    /// `(x, y - 1)`, bit 4
    South,
    /// `(x - 1, y - 1)`, bit 5
    SouthWest,
    /// `(x - 1, y)`, bit 6
    West,
    /// `(x - 1, y + 1)`, bit 7
    NorthWest,
}

impl Direction {
    /// All directions in clockwise bit order
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Coordinate offset `(dx, dy)` of the neighbor in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, 1),
            Self::NorthEast => (1, 1),
            Self::East => (1, 0),
            Self::SouthEast => (1, -1),
            Self::South => (0, -1),
            Self::SouthWest => (-1, -1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, 1),
        }
    }

    /// Single-bit mask for this direction
    pub const fn bit(self) -> u8 {
        1 << self.bit_index()
    }

    /// Bit position for this direction (0 to 7)
    pub const fn bit_index(self) -> u32 {
        match self {
            Self::North => 0,
            Self::NorthEast => 1,
            Self::East => 2,
            Self::SouthEast => 3,
            Self::South => 4,
            Self::SouthWest => 5,
            Self::West => 6,
            Self::NorthWest => 7,
        }
    }

    /// Test whether this direction's bit is set in a mask
    pub const fn is_set(self, mask: u8) -> bool {
        mask & self.bit() != 0
    }

    /// Coordinate of the neighbor of `(x, y)` in this direction
    ///
    /// Returns `None` when the neighbor would lie below zero or past
    /// `usize::MAX` on either axis.
    pub const fn neighbor_of(self, x: usize, y: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.offset();
        match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
            (Some(nx), Some(ny)) => Some((nx, ny)),
            _ => None,
        }
    }
}

/// Count matching neighbors of `(x, y)`, with off-grid neighbors matching
///
/// `matches` is only called for in-bounds neighbor coordinates.
pub(crate) fn count_with_walled_border<F>(
    dimensions: (usize, usize),
    x: usize,
    y: usize,
    mut matches: F,
) -> u8
where
    F: FnMut(usize, usize) -> bool,
{
    let (width, height) = dimensions;
    let mut count = 0;
    for direction in Direction::ALL {
        let matched = match direction.neighbor_of(x, y) {
            Some((nx, ny)) if nx < width && ny < height => matches(nx, ny),
            _ => true,
        };
        if matched {
            count += 1;
        }
    }
    count
}

impl<T> Grid<T> {
    /// Number of Moore neighbors of `(x, y)` satisfying `predicate`
    ///
    /// Neighbors outside the grid always count as satisfying it, so a cell
    /// in a corner starts with three matches. The result is in `0..=8`.
    pub fn neighbor_count<P>(&self, x: usize, y: usize, mut predicate: P) -> u8
    where
        P: FnMut(&T) -> bool,
    {
        count_with_walled_border(self.dimensions(), x, y, |nx, ny| {
            self.get(nx, ny).is_some_and(&mut predicate)
        })
    }

    /// Clockwise 8-bit mask of the Moore neighbors satisfying `predicate`
    ///
    /// Bit layout is documented on `Direction`. Neighbors outside the grid
    /// never set their bit.
    pub fn neighbor_mask<P>(&self, x: usize, y: usize, mut predicate: P) -> u8
    where
        P: FnMut(&T) -> bool,
    {
        let mut mask = 0;
        for direction in Direction::ALL {
            if let Some((nx, ny)) = direction.neighbor_of(x, y)
                && self.get(nx, ny).is_some_and(&mut predicate)
            {
                mask |= direction.bit();
            }
        }
        mask
    }

    /// Marching-squares mask for every cell
    pub fn neighbor_masks<P>(&self, mut predicate: P) -> Grid<u8>
    where
        P: FnMut(&T) -> bool,
    {
        self.map_to_grid(|x, y, _| self.neighbor_mask(x, y, &mut predicate))
    }
}
