use ndarray::ArrayD;
use smallvec::SmallVec;

/// N-dimensional grid position, one coordinate per axis. Stays inline for up to
/// four axes, which covers all practical play.
pub type Pos = SmallVec<[usize; 4]>;

/// Grid extents, one per axis.
pub type Shape = SmallVec<[usize; 4]>;

/// Checked grid volume; `None` when the product overflows `usize`.
pub fn volume(shape: &[usize]) -> Option<usize> {
    shape
        .iter()
        .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: &[usize]) -> NeighborIter;
}

impl<T> NeighborIterExt for ArrayD<T> {
    fn iter_neighbors(&self, center: &[usize]) -> NeighborIter {
        NeighborIter::new(center, self.shape())
    }
}

/// Iterates the in-bounds Chebyshev neighbors of a cell: every nonzero
/// displacement in `{-1, 0, +1}^N` that stays inside the grid, so an interior
/// cell has `3^N - 1` of them.
///
/// The displacements are walked as an odometer whose per-axis step range is
/// clamped to the grid edge up front. Every candidate is in bounds by
/// construction and the cost scales with the clamped ranges rather than
/// `3^N`, so any dimension count is safe.
#[derive(Debug)]
pub struct NeighborIter {
    center: Pos,
    lo: SmallVec<[i8; 4]>,
    hi: SmallVec<[i8; 4]>,
    delta: SmallVec<[i8; 4]>,
    done: bool,
}

impl NeighborIter {
    fn new(center: &[usize], bounds: &[usize]) -> Self {
        debug_assert_eq!(center.len(), bounds.len());
        debug_assert!(center.iter().zip(bounds).all(|(&coord, &extent)| coord < extent));
        let lo: SmallVec<[i8; 4]> = center
            .iter()
            .map(|&coord| if coord > 0 { -1 } else { 0 })
            .collect();
        let hi: SmallVec<[i8; 4]> = center
            .iter()
            .zip(bounds)
            .map(|(&coord, &extent)| if coord + 1 < extent { 1 } else { 0 })
            .collect();
        Self {
            center: Pos::from_slice(center),
            delta: lo.clone(),
            lo,
            hi,
            done: center.is_empty(),
        }
    }

    /// Ticks the displacement odometer; sets `done` once it wraps around.
    fn advance(&mut self) {
        for axis in (0..self.delta.len()).rev() {
            if self.delta[axis] < self.hi[axis] {
                self.delta[axis] += 1;
                return;
            }
            self.delta[axis] = self.lo[axis];
        }
        self.done = true;
    }
}

impl Iterator for NeighborIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let at_center = self.delta.iter().all(|&step| step == 0);
            let next = (!at_center).then(|| {
                self.center
                    .iter()
                    .zip(&self.delta)
                    .map(|(&coord, &step)| coord.wrapping_add_signed(step as isize))
                    .collect()
            });
            self.advance();
            if next.is_some() {
                return next;
            }
        }
        None
    }
}
