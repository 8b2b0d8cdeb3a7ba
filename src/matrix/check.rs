//! Transpose correctness predicate.

/// Returns `true` if `b` is exactly the transpose of `a`.
///
/// `a` is N rows × M columns, `b` is M rows × N columns, both row-major.
/// Scans all (i, j) pairs and bails on the first mismatch. Pure predicate,
/// O(M·N), no side effects.
pub fn is_transpose(m: usize, n: usize, a: &[i32], b: &[i32]) -> bool {
    for i in 0..n {
        for j in 0..m {
            if a[i * m + j] != b[j * n + i] {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_mismatch() {
        let a = vec![1, 2, 3, 4]; // 2×2
        let mut b = vec![1, 3, 2, 4];
        assert!(is_transpose(2, 2, &a, &b));

        b[3] = 99;
        assert!(!is_transpose(2, 2, &a, &b));
    }

    #[test]
    fn test_non_square() {
        let a = vec![1, 2, 3, 4, 5, 6]; // 2 rows × 3 cols
        let b = vec![1, 4, 2, 5, 3, 6]; // 3 rows × 2 cols
        assert!(is_transpose(3, 2, &a, &b));
        assert!(!is_transpose(3, 2, &a, &[0, 4, 2, 5, 3, 6]));
    }
}
