//! Naive row-wise transpose baseline.

use crate::mem::{Mem, SliceMem};

/// Row-wise scan transpose, written against [`Mem`] so it can be traced.
///
/// Reads A sequentially (one miss per 8 loads) but writes B with stride
/// N, touching a fresh line on almost every store. This is the worst-case
/// miss pattern the blocked kernels are measured against, and the
/// bit-exact reference they must match.
pub fn trans_rowwise<T: Mem + ?Sized>(m: usize, n: usize, mem: &mut T) {
    for i in 0..n {
        for j in 0..m {
            let v = mem.load_src(i * m + j);
            mem.store_dst(j * n + i, v);
        }
    }
}

/// Transpose via the naive double loop: `B[j][i] = A[i][j]`.
///
/// `a` is N rows × M columns, `b` is M rows × N columns, both row-major.
/// Used as the correctness oracle in tests; never the graded candidate.
///
/// # Example
///
/// ```
/// use blocked_transpose::transpose_naive;
///
/// let a = vec![1, 2, 3,   // 2×3 matrix
///              4, 5, 6];
/// let mut b = vec![0; 6]; // will be 3×2
///
/// transpose_naive(3, 2, &a, &mut b);
///
/// assert_eq!(b, vec![1, 4,   // 3×2 matrix
///                    2, 5,
///                    3, 6]);
/// ```
pub fn transpose_naive(m: usize, n: usize, a: &[i32], b: &mut [i32]) {
    let mut mem = SliceMem::new(a, b);
    trans_rowwise(m, n, &mut mem);
}
