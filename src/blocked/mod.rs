//! Cache-blocked transpose kernels.
//!
//! Each kernel partitions the matrices into tiles sized so one tile's
//! working set fits the 1KB direct-mapped evaluation cache (32 lines of
//! 32 bytes, i.e. 8 ints per line). The source is read row-major and the
//! destination written column-major, so without blocking every destination
//! write lands on a different line and the miss count explodes.
//!
//! Available kernels:
//! - `trans_32x32`: plain 8×8 tiling, one cache line per tile row
//! - `trans_64x64`: 8×8 tiling with a diagonal-swap trick to dodge the
//!   source/destination set conflicts a 64-wide row stride causes
//! - `trans_generic`: clipped 23×23 tiling for arbitrary shapes

pub mod trans_32x32;
pub mod trans_64x64;
pub mod trans_generic;

pub use trans_32x32::trans_32x32;
pub use trans_64x64::trans_64x64;
pub use trans_generic::trans_generic;
