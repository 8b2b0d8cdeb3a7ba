//! 8×8 blocked transpose for 64×64 matrices, with a diagonal-swap trick.

use crate::mem::Mem;

/// Transposes a 64×64 matrix while dodging the set conflicts a 64-wide
/// row stride causes.
///
/// At 64 ints (256 bytes) per row, only 4 rows of a matrix fit in the
/// cache before row i+4 evicts row i. Worse, rows of A and B with the
/// same index map to the same sets under the evaluation layout, so the
/// straightforward 8×8 tiling of [`trans_32x32`] thrashes: every other
/// access within a diagonal tile is an eviction.
///
/// [`trans_32x32`]: crate::blocked::trans_32x32
///
/// The fix works on one 8×8 tile in two phases, never holding more than
/// 4 source rows and 4 destination rows live at once:
///
/// 1. Walk the top 4 source rows. Their left halves go straight to their
///    final spots in the destination tile's top-left quadrant. Their right
///    halves belong in the bottom-left quadrant, but writing there now
///    would fault in the 4 conflicting destination rows early, so they are
///    parked in the top-right quadrant instead (same 4 destination rows,
///    already resident).
/// 2. Walk the destination tile one row pair at a time: pull the 4
///    parked values into temporaries, overwrite their slots with the
///    correct values read from the bottom 4 source rows, then drop the
///    temporaries and the remaining bottom-source reads into the bottom
///    half's final spots.
///
/// The parked state is internal to a tile; after phase 2 every element
/// satisfies `B[j][i] == A[i][j]`.
pub fn trans_64x64<T: Mem + ?Sized>(_m: usize, _n: usize, mem: &mut T) {
    const N: usize = 64;
    const TILE: usize = 8;
    const HALF: usize = 4;

    for ti in (0..N).step_by(TILE) {
        for tj in (0..N).step_by(TILE) {
            // Phase 1: top half of the source tile. Left halves land in
            // place, right halves are parked one quadrant up.
            for i in ti..ti + HALF {
                for q in 0..HALF {
                    let v = mem.load_src(i * N + (tj + q));
                    mem.store_dst((tj + q) * N + i, v);
                }
                for q in 0..HALF {
                    let v = mem.load_src(i * N + (tj + HALF + q));
                    mem.store_dst((tj + q) * N + (i + HALF), v);
                }
            }

            // Phase 2: evacuate the parked values while the rows holding
            // them are still resident, then fill the bottom half.
            for j in tj + HALF..tj + TILE {
                let parked = [
                    mem.load_dst((j - HALF) * N + (ti + HALF)),
                    mem.load_dst((j - HALF) * N + (ti + HALF + 1)),
                    mem.load_dst((j - HALF) * N + (ti + HALF + 2)),
                    mem.load_dst((j - HALF) * N + (ti + HALF + 3)),
                ];

                for q in 0..HALF {
                    let v = mem.load_src((ti + HALF + q) * N + (j - HALF));
                    mem.store_dst((j - HALF) * N + (ti + HALF + q), v);
                }

                for (q, &v) in parked.iter().enumerate() {
                    mem.store_dst(j * N + (ti + q), v);
                }

                for q in 0..HALF {
                    let v = mem.load_src((ti + HALF + q) * N + j);
                    mem.store_dst(j * N + (ti + HALF + q), v);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::check::is_transpose;
    use crate::matrix::naive::transpose_naive;
    use crate::mem::SliceMem;

    #[test]
    fn test_64x64_matches_naive() {
        let a: Vec<i32> = (0..64 * 64).collect();
        let mut b = vec![0; 64 * 64];
        let mut b_naive = vec![0; 64 * 64];

        let mut mem = SliceMem::new(&a, &mut b);
        trans_64x64(64, 64, &mut mem);
        transpose_naive(64, 64, &a, &mut b_naive);

        assert_eq!(b, b_naive, "parked intermediates must not leak into B");
        assert!(is_transpose(64, 64, &a, &b));
    }

    #[test]
    fn test_64x64_sequential_mapping() {
        // A[i][j] = i*64 + j, so B[j][i] must equal i*64 + j exactly.
        let a: Vec<i32> = (0..64 * 64).collect();
        let mut b = vec![0; 64 * 64];

        let mut mem = SliceMem::new(&a, &mut b);
        trans_64x64(64, 64, &mut mem);

        for i in 0..64 {
            for j in 0..64 {
                assert_eq!(b[j * 64 + i], (i * 64 + j) as i32, "B[{}][{}]", j, i);
            }
        }
    }
}
