//! Clipped blocked transpose for arbitrary matrix shapes.

use crate::mem::Mem;

/// Tile edge for the generic kernel. 23 keeps a tile's source-row plus
/// destination-column footprint inside the 32-line budget for the odd
/// shapes the evaluation uses (e.g. 61×67), where the prime-ish stride
/// already breaks up the set aliasing that hurts the power-of-two sizes.
const TILE: usize = 23;

/// Transposes an N×M source into an M×N destination for shapes without a
/// specialized kernel.
///
/// Tiles are clipped against the true bounds, so nothing is read or
/// written outside either matrix. Within a tile row, the diagonal element
/// (source row index == column index) is held back in a scalar and stored
/// only after the row finishes: on square-ish shapes `A[i][..]` and
/// `B[i][..]` can share a cache set, and the immediate write-back would
/// evict the source line mid-row.
pub fn trans_generic<T: Mem + ?Sized>(m: usize, n: usize, mem: &mut T) {
    for ti in (0..n).step_by(TILE) {
        for tj in (0..m).step_by(TILE) {
            for i in ti..(ti + TILE).min(n) {
                let mut diag = None;
                for j in tj..(tj + TILE).min(m) {
                    let v = mem.load_src(i * m + j);
                    if i == j {
                        diag = Some(v);
                    } else {
                        mem.store_dst(j * n + i, v);
                    }
                }
                if let Some(v) = diag {
                    mem.store_dst(i * n + i, v);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::check::is_transpose;
    use crate::mem::SliceMem;

    #[test]
    fn test_generic_odd_shapes() {
        // Shapes straddling tile boundaries on both sides of 23.
        let shapes = [(1, 1), (1, 7), (7, 1), (22, 23), (23, 23), (24, 25), (61, 67), (67, 61)];

        for (m, n) in shapes {
            let a: Vec<i32> = (0..(n * m) as i32).collect();
            let mut b = vec![0; m * n];

            let mut mem = SliceMem::new(&a, &mut b);
            trans_generic(m, n, &mut mem);

            assert!(is_transpose(m, n, &a, &b), "shape {}x{}", n, m);
        }
    }

    #[test]
    fn test_generic_square_diagonal() {
        // The deferred-diagonal path only triggers when i == j; make sure
        // those elements still land.
        let m = 46; // two full tiles
        let a: Vec<i32> = (0..(m * m) as i32).collect();
        let mut b = vec![0; m * m];

        let mut mem = SliceMem::new(&a, &mut b);
        trans_generic(m, m, &mut mem);

        for i in 0..m {
            assert_eq!(b[i * m + i], a[i * m + i], "diagonal element {}", i);
        }
        assert!(is_transpose(m, m, &a, &b));
    }
}
