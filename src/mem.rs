//! Memory access abstraction for the transpose kernels.
//!
//! Kernels are written once against [`Mem`] and run in two modes: the fast
//! path over plain slices ([`SliceMem`]), and a traced path that feeds every
//! access through the simulated cache (see [`crate::cache::TracedMem`]).
//! The trait is object-safe so kernels can be stored as plain function
//! pointers taking `&mut dyn Mem` in the registry.

/// Flat-index access to a source/destination matrix pair.
///
/// Indices are row-major element offsets: for the source (N×M) element
/// `A[i][j]` the index is `i * m + j`, for the destination (M×N) element
/// `B[j][i]` it is `j * n + i`. The kernels do the stride math; the
/// implementation decides what an access costs.
///
/// `load_dst` exists because the 64×64 kernel reads previously parked
/// values back out of the destination before moving them to their final
/// spots.
pub trait Mem {
    /// Read one element of the source matrix.
    fn load_src(&mut self, idx: usize) -> i32;

    /// Read back one element of the destination matrix.
    fn load_dst(&mut self, idx: usize) -> i32;

    /// Write one element of the destination matrix.
    fn store_dst(&mut self, idx: usize, v: i32);
}

/// Direct slice-backed access, the zero-overhead fast path.
pub struct SliceMem<'a> {
    src: &'a [i32],
    dst: &'a mut [i32],
}

impl<'a> SliceMem<'a> {
    pub fn new(src: &'a [i32], dst: &'a mut [i32]) -> Self {
        SliceMem { src, dst }
    }
}

impl Mem for SliceMem<'_> {
    #[inline]
    fn load_src(&mut self, idx: usize) -> i32 {
        self.src[idx]
    }

    #[inline]
    fn load_dst(&mut self, idx: usize) -> i32 {
        self.dst[idx]
    }

    #[inline]
    fn store_dst(&mut self, idx: usize, v: i32) {
        self.dst[idx] = v;
    }
}
