use crate::services::Factorization;
use serde::{Deserialize, Serialize};

/// Query params for `GET /factors`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FactorsQuery {
    pub number: Option<String>,
}

impl FactorsQuery {
    /// Parses a raw query string. A repeated `number` keeps its first value.
    pub fn parse(raw: Option<&str>) -> Result<Self, serde_urlencoded::de::Error> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw)?;
        let number = pairs
            .into_iter()
            .find(|(key, _)| key == "number")
            .map(|(_, value)| value);

        Ok(Self { number })
    }
}

/// Wire shape consumed by the container harness, field names included.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FactorsResponse {
    pub fatores: Vec<String>,
    pub sha: String,
}

impl From<Factorization> for FactorsResponse {
    fn from(factorization: Factorization) -> Self {
        Self {
            fatores: factorization
                .factors
                .iter()
                .map(|f| f.to_str_radix(10))
                .collect(),
            sha: factorization.digest,
        }
    }
}
