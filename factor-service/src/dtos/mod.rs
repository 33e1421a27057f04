pub mod factors;

pub use factors::{FactorsQuery, FactorsResponse};
