//! Candidate kernel registry.
//!
//! The measurement driver discovers kernels through here rather than
//! hard-coding them: each candidate advertises a name, a one-line
//! description, and the function to run. The submission dispatcher comes
//! first; the rest exist so individual strategies can be compared.

use crate::blocked::{trans_32x32, trans_64x64, trans_generic};
use crate::matrix::naive::trans_rowwise;
use crate::mem::Mem;
use crate::transpose_with;

/// A registrable transpose kernel: `(m, n, mem)` with A sized N×M and
/// B sized M×N behind `mem`.
pub type KernelFn = fn(usize, usize, &mut dyn Mem);

/// One registered transpose candidate.
pub struct Candidate {
    pub name: &'static str,
    pub desc: &'static str,
    pub run: KernelFn,
    /// `Some((m, n))` if the kernel only handles one fixed shape.
    pub fixed_shape: Option<(usize, usize)>,
}

impl Candidate {
    /// True if this kernel may be run on an N×M source matrix.
    pub fn accepts(&self, m: usize, n: usize) -> bool {
        self.fixed_shape.is_none_or(|shape| shape == (m, n))
    }
}

/// All registered candidates, submission first.
pub fn candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            name: "submit",
            desc: "Transpose submission (dispatch by shape)",
            run: |m, n, mem| transpose_with(m, n, mem),
            fixed_shape: None,
        },
        Candidate {
            name: "rowwise",
            desc: "Simple row-wise scan transpose",
            run: |m, n, mem| trans_rowwise(m, n, mem),
            fixed_shape: None,
        },
        Candidate {
            name: "blocked32",
            desc: "8x8 tiling for 32x32 matrices",
            run: |m, n, mem| trans_32x32(m, n, mem),
            fixed_shape: Some((32, 32)),
        },
        Candidate {
            name: "blocked64",
            desc: "8x8 tiling with diagonal swap for 64x64 matrices",
            run: |m, n, mem| trans_64x64(m, n, mem),
            fixed_shape: Some((64, 64)),
        },
        Candidate {
            name: "generic23",
            desc: "Clipped 23x23 tiling for any shape",
            run: |m, n, mem| trans_generic(m, n, mem),
            fixed_shape: None,
        },
    ]
}
