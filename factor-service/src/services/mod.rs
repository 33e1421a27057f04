pub mod factorization;
pub mod factorizer;
pub mod metrics;

pub use factorization::{digest, parse_number, trial_division, Factorization, ParseNumberError};
pub use factorizer::{Factorizer, FACTOR_TIMEOUT};
