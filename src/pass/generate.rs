//! Password generation.

use rand::Rng;
use zeroize::Zeroizing;

use crate::error::EmptyPoolError;

/// Draw `length` characters from `pool`, each independently and uniformly.
///
/// `gen_range` over the half-open range never yields `pool.len()`, so every
/// draw lands on a valid index. Characters may repeat.
pub fn generate<R: Rng + ?Sized>(
    pool: &[u8],
    length: usize,
    rng: &mut R,
) -> Result<Zeroizing<String>, EmptyPoolError> {
    if pool.is_empty() {
        return Err(EmptyPoolError);
    }

    let mut password = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        password.push(random_char(pool, rng));
    }
    Ok(password)
}

#[inline]
fn random_char<R: Rng + ?Sized>(pool: &[u8], rng: &mut R) -> char {
    pool[rng.gen_range(0..pool.len())] as char
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::charset::{CategorySet, assemble_pool};

    #[test]
    fn empty_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate(b"", 8, &mut rng), Err(EmptyPoolError));
    }

    #[test]
    fn output_has_requested_length_and_pool_chars() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = b"xyz";
        for length in 4..=16 {
            let pass = generate(pool, length, &mut rng).unwrap();
            assert_eq!(pass.len(), length);
            assert!(pass.bytes().all(|b| pool.contains(&b)));
        }
    }

    #[test]
    fn single_char_pool_repeats() {
        let mut rng = StdRng::seed_from_u64(0);
        let pass = generate(b"q", 6, &mut rng).unwrap();
        assert_eq!(pass.as_str(), "qqqqqq");
    }

    #[test]
    fn last_pool_char_is_reachable() {
        // A rounding draw would also produce index 2 (out of range) here.
        let mut rng = StdRng::seed_from_u64(1);
        let pass = generate(b"ab", 512, &mut rng).unwrap();
        assert!(pass.contains('a'));
        assert!(pass.contains('b'));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let pool = assemble_pool(&CategorySet::default());
        let a = generate(&pool, 12, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate(&pool, 12, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }
}
