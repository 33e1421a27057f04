//! Prime factorization by trial division and the digest over its output.
//!
//! Everything here is a pure function of the input number. The only
//! concession to the request lifecycle is the cancellation token polled by
//! [`trial_division`], which lets an abandoned computation stop early.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use sha2::{Digest, Sha256};
use std::iter;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseNumberError {
    #[error("number is empty")]
    Empty,

    #[error("'{0}' is not a base-10 integer")]
    NotAnInteger(String),

    #[error("zero has no prime factorization")]
    Zero,
}

/// Parses a signed base-10 integer and returns its magnitude.
///
/// Accepts an optional `+` or `-` sign followed by ASCII digits. Negative
/// numbers factor like their absolute value. Zero is rejected.
pub fn parse_number(text: &str) -> Result<BigUint, ParseNumberError> {
    if text.is_empty() {
        return Err(ParseNumberError::Empty);
    }

    let digits = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseNumberError::NotAnInteger(text.to_string()));
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| ParseNumberError::NotAnInteger(text.to_string()))?;

    if magnitude.is_zero() {
        return Err(ParseNumberError::Zero);
    }

    Ok(magnitude)
}

/// Factors `n` by trial division, smallest factor first.
///
/// Returns `None` if `cancel` fires before the candidate loop finishes.
/// `1` (and `0`) yield an empty sequence.
pub fn trial_division(mut n: BigUint, cancel: &CancellationToken) -> Option<Vec<BigUint>> {
    let mut factors = Vec::new();

    if let Some(twos) = n.trailing_zeros() {
        factors.extend(iter::repeat(BigUint::from(2u32)).take(twos as usize));
        n >>= twos;
    }

    let mut candidate = BigUint::from(3u32);
    while &candidate * &candidate <= n {
        if cancel.is_cancelled() {
            return None;
        }

        loop {
            let (quotient, remainder) = n.div_rem(&candidate);
            if !remainder.is_zero() {
                break;
            }
            factors.push(candidate.clone());
            n = quotient;
        }

        candidate += 2u32;
    }

    if n > BigUint::one() {
        factors.push(n);
    }

    Some(factors)
}

/// SHA-256 over the concatenated decimal renderings of `factors`, hex encoded.
pub fn digest(factors: &[BigUint]) -> String {
    let mut hasher = Sha256::new();
    for factor in factors {
        hasher.update(factor.to_str_radix(10).as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// A completed factorization: the factor sequence and its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    pub factors: Vec<BigUint>,
    pub digest: String,
}

impl Factorization {
    pub fn new(factors: Vec<BigUint>) -> Self {
        let digest = digest(&factors);
        Self { factors, digest }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    fn factor(n: u64) -> Vec<u64> {
        trial_division(BigUint::from(n), &CancellationToken::new())
            .unwrap()
            .into_iter()
            .map(|f| f.to_u64().unwrap())
            .collect()
    }

    fn sha256_hex(input: &str) -> String {
        hex::encode(Sha256::digest(input.as_bytes()))
    }

    #[test]
    fn test_parse_number_accepts_signed_integers() {
        assert_eq!(parse_number("12").unwrap(), BigUint::from(12u32));
        assert_eq!(parse_number("+17").unwrap(), BigUint::from(17u32));
        assert_eq!(parse_number("-12").unwrap(), BigUint::from(12u32));
        assert_eq!(parse_number("007").unwrap(), BigUint::from(7u32));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert_eq!(parse_number(""), Err(ParseNumberError::Empty));
        for text in ["abc", "-", "+", "12a", " 12", "12 ", "1_000", "1.5", "+-3", "0x10"] {
            assert!(
                matches!(parse_number(text), Err(ParseNumberError::NotAnInteger(_))),
                "expected {:?} to be rejected",
                text
            );
        }
    }

    #[test]
    fn test_parse_number_rejects_zero() {
        assert_eq!(parse_number("0"), Err(ParseNumberError::Zero));
        assert_eq!(parse_number("-000"), Err(ParseNumberError::Zero));
    }

    #[test]
    fn test_parse_number_beyond_u128() {
        let text = "340282366920938463463374607431768211457"; // 2^128 + 1
        let n = parse_number(text).unwrap();
        assert_eq!(n.to_str_radix(10), text);
    }

    #[test]
    fn test_twelve() {
        assert_eq!(factor(12), vec![2, 2, 3]);
        let factors = trial_division(BigUint::from(12u32), &CancellationToken::new()).unwrap();
        let f = Factorization::new(factors);
        assert_eq!(f.digest, sha256_hex("223"));
    }

    #[test]
    fn test_prime_is_its_own_factor() {
        assert_eq!(factor(17), vec![17]);
        assert_eq!(factor(2), vec![2]);
        assert_eq!(factor(1_000_000_007), vec![1_000_000_007]);
    }

    #[test]
    fn test_one_has_no_factors() {
        let f = Factorization::new(factor(1).into_iter().map(BigUint::from).collect());
        assert!(f.factors.is_empty());
        assert_eq!(
            f.digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_product_order_and_bounds() {
        for n in 2u64..3000 {
            let factors = factor(n);
            assert_eq!(factors.iter().product::<u64>(), n, "product for {}", n);
            assert!(factors.iter().all(|&f| f >= 2), "bounds for {}", n);
            assert!(factors.windows(2).all(|w| w[0] <= w[1]), "order for {}", n);
        }
    }

    #[test]
    fn test_square_of_prime() {
        assert_eq!(factor(49), vec![7, 7]);
        assert_eq!(factor(9), vec![3, 3]);
    }

    #[test]
    fn test_large_composite() {
        // 2^70 * 7919 * 1_000_003
        let n = (BigUint::one() << 70u32) * BigUint::from(7919u32) * BigUint::from(1_000_003u32);
        let factors = trial_division(n.clone(), &CancellationToken::new()).unwrap();

        assert_eq!(factors.len(), 72);
        assert!(factors[..70].iter().all(|f| *f == BigUint::from(2u32)));
        assert_eq!(factors[70], BigUint::from(7919u32));
        assert_eq!(factors[71], BigUint::from(1_000_003u32));
        assert_eq!(factors.iter().product::<BigUint>(), n);
    }

    #[test]
    fn test_digest_is_deterministic() {
        let n = BigUint::from(600_851_475_143u64);
        let first = Factorization::new(trial_division(n.clone(), &CancellationToken::new()).unwrap());
        let second = Factorization::new(trial_division(n, &CancellationToken::new()).unwrap());
        assert_eq!(first, second);
        assert_eq!(first.digest, sha256_hex("7183914716857"));
        assert_eq!(first.digest.len(), 64);
    }

    #[test]
    fn test_cancelled_computation_stops() {
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(trial_division(BigUint::from(1_000_000_007u64), &token), None);
    }

    #[test]
    fn test_powers_of_two_finish_without_candidate_loop() {
        let token = CancellationToken::new();
        token.cancel();
        let factors = trial_division(BigUint::from(64u32), &token).unwrap();
        assert_eq!(factors.len(), 6);
    }
}
