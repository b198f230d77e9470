// src\distributions\mod.rs
// The distributions of the test statistics.

pub mod ChiSquared;
pub mod F;
pub mod Normal;
pub mod StudentT;
