//! Basic matrix operations and the naive baseline.
//!
//! These provide the correctness oracle and the worst-case miss
//! comparison point for the blocked kernels.

pub mod check;
pub mod naive;
