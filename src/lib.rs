//! Cache-aware matrix transpose in Rust, built from scratch.
//!
//! I built this to understand how much a transpose's memory access order
//! matters on a small direct-mapped cache. Turns out it's everything:
//! the naive double loop misses on almost every destination write, while
//! a blocked kernel with the right tile size gets within a few misses of
//! the compulsory minimum. This crate implements the blocked kernels and
//! the simulated cache used to count their misses.
//!
//! ## Usage
//!
//! ```
//! use blocked_transpose::{transpose, is_transpose};
//!
//! let a: Vec<i32> = (0..32 * 32).collect();
//! let mut b = vec![0i32; 32 * 32];
//!
//! transpose(32, 32, &a, &mut b);
//! assert!(is_transpose(32, 32, &a, &b));
//! ```
//!
//! To count misses against the 1KB/32B direct-mapped evaluation cache:
//!
//! ```
//! use blocked_transpose::cache::count_misses;
//! use blocked_transpose::registry::candidates;
//!
//! let a: Vec<i32> = (0..32 * 32).collect();
//! let mut b = vec![0i32; 32 * 32];
//!
//! let all = candidates();
//! let profile = count_misses(32, 32, &a, &mut b, all[0].run);
//! assert!(profile.misses < 400);
//! ```
//!
//! ## What's inside
//!
//! - 8×8 tiled kernel for 32×32
//! - Diagonal-swap kernel for 64×64 (where A and B rows alias)
//! - Clipped 23×23 tiling for everything else
//! - A direct-mapped cache model matching the evaluation geometry
//!
//! Matrices are flat row-major `i32` slices. Throughout the crate `m` is
//! the source's column count and `n` its row count: A is N×M, B is M×N.

pub mod blocked;
pub mod cache;
pub mod matrix;
pub mod mem;
pub mod registry;

pub use matrix::check::is_transpose;
pub use matrix::naive::transpose_naive;

use mem::{Mem, SliceMem};

/// Transpose: B = Aᵗ.
///
/// `a` is N rows × M columns, `b` is M rows × N columns, both row-major.
/// Picks the kernel tuned for the shape (32×32, 64×64, or the clipped
/// generic tiling) and writes `b[j * n + i] = a[i * m + j]` for every
/// valid (i, j). Performs no allocation and produces output bit-identical
/// to [`transpose_naive`].
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n.
pub fn transpose(m: usize, n: usize, a: &[i32], b: &mut [i32]) {
    assert_eq!(a.len(), n * m, "A: expected {}x{}={} elements", n, m, n * m);
    assert_eq!(b.len(), m * n, "B: expected {}x{}={} elements", m, n, m * n);

    let mut mem = SliceMem::new(a, b);
    transpose_with(m, n, &mut mem);
}

/// Same as [`transpose`] but over any [`Mem`] implementation.
///
/// This is the submission dispatcher: the specialized kernels only fire
/// when both dimensions match their shape, so every other geometry
/// (including 32×M or 64×M rectangles) falls through to the clipped
/// generic tiling and stays in bounds.
pub fn transpose_with<T: Mem + ?Sized>(m: usize, n: usize, mem: &mut T) {
    match (m, n) {
        (32, 32) => blocked::trans_32x32(m, n, mem),
        (64, 64) => blocked::trans_64x64(m, n, mem),
        _ => blocked::trans_generic(m, n, mem),
    }
}
