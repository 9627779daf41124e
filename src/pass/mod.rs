//! Character pools, password generation and strength estimates.

pub mod charset;
mod generate;

pub use charset::{Category, CategorySet, assemble_pool};
pub use generate::generate;

/// Password entropy in bits.
pub fn entropy_bits(password_length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    password_length as f64 * (pool_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
