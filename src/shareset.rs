//! JSON share-set documents.
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every key other than `keys` is the x-coordinate of one share.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{bigint::BigInt, error::SecretError, reconstruct_secret, share::RawShare};

#[derive(Error, Debug)]
pub enum ShareSetError {
    #[error("failed to read share set: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed share set document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("share key {0:?} is not an integer x-coordinate")]
    InvalidAbscissa(String),

    #[error("share x = {x} has unparsable base {base:?}")]
    InvalidBase { x: i64, base: String },

    #[error(transparent)]
    Secret(#[from] SecretError),
}

#[derive(Debug, Serialize, Deserialize)]
struct Keys {
    n: usize,
    k: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum BaseField {
    Number(u32),
    Text(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct Entry {
    base: BaseField,
    value: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    keys: Keys,
    #[serde(flatten)]
    entries: BTreeMap<String, Entry>,
}

/// The `n` shares of one secret together with its threshold `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSet {
    n: usize,
    k: usize,
    // ascending x
    shares: Vec<RawShare>,
}

impl ShareSet {
    pub fn new(n: usize, k: usize, mut shares: Vec<RawShare>) -> Result<Self, ShareSetError> {
        if k == 0 || k > n {
            return Err(SecretError::InvalidThreshold {
                threshold: k,
                count: n,
            }
            .into());
        }

        if shares.len() < k {
            return Err(SecretError::InsufficientShares {
                got: shares.len(),
                need: k,
            }
            .into());
        }

        if shares.len() != n {
            warn!(n, found = shares.len(), "share count does not match n");
        }

        shares.sort_by_key(|share| share.x);

        if let Some(pair) = shares.windows(2).find(|pair| pair[0].x == pair[1].x) {
            return Err(SecretError::DuplicateAbscissa(pair[0].x).into());
        }

        Ok(ShareSet { n, k, shares })
    }

    pub fn from_json(json: &str) -> Result<Self, ShareSetError> {
        ShareSet::from_document(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ShareSetError> {
        ShareSet::from_document(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ShareSetError> {
        let file = File::open(path.as_ref())?;

        debug!(path = %path.as_ref().display(), "reading share set");

        ShareSet::from_reader(BufReader::new(file))
    }

    fn from_document(document: Document) -> Result<Self, ShareSetError> {
        let mut shares = Vec::with_capacity(document.entries.len());

        for (key, entry) in document.entries {
            let x: i64 = key
                .trim()
                .parse()
                .map_err(|_| ShareSetError::InvalidAbscissa(key.clone()))?;
            let base = match entry.base {
                BaseField::Number(base) => base,
                BaseField::Text(text) => text
                    .trim()
                    .parse()
                    .map_err(|_| ShareSetError::InvalidBase { x, base: text })?,
            };

            shares.push(RawShare::new(x, base, entry.value));
        }

        ShareSet::new(document.keys.n, document.keys.k, shares)
    }

    pub fn to_json(&self) -> Result<String, ShareSetError> {
        let entries = self
            .shares
            .iter()
            .map(|share| {
                (
                    share.x.to_string(),
                    Entry {
                        base: BaseField::Text(share.base.to_string()),
                        value: share.value.clone(),
                    },
                )
            })
            .collect();
        let document = Document {
            keys: Keys {
                n: self.n,
                k: self.k,
            },
            entries,
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn shares(&self) -> &[RawShare] {
        &self.shares
    }

    /// The first `k` shares by ascending x, the ones used for reconstruction.
    pub fn select(&self) -> &[RawShare] {
        &self.shares[..self.k]
    }

    pub fn reconstruct(&self) -> Result<BigInt, ShareSetError> {
        Ok(reconstruct_secret(self.k, self.select())?)
    }
}

#[cfg(test)]
mod tests {
    use super::{ShareSet, ShareSetError};
    use crate::{bigint::BigInt, error::SecretError, share::RawShare};

    const LINEAR: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn test_parse_document() {
        let set = ShareSet::from_json(LINEAR).unwrap();

        assert_eq!(set.n(), 4);
        assert_eq!(set.k(), 3);
        assert_eq!(set.shares().len(), 4);
        assert_eq!(set.select()[1], RawShare::new(2, 2, "111"));
    }

    #[test]
    fn test_reconstruct_from_document() {
        // the first three shares lie on f(x) = x^2 + 3
        let set = ShareSet::from_json(LINEAR).unwrap();

        assert_eq!(set.reconstruct().unwrap(), BigInt::from(3));
    }

    #[test]
    fn test_numeric_key_order() {
        let json = r#"{
            "keys": { "n": 3, "k": 2 },
            "10": { "base": "10", "value": "31" },
            "2": { "base": "10", "value": "7" },
            "1": { "base": 10, "value": "4" }
        }"#;
        let set = ShareSet::from_json(json).unwrap();
        let xs: Vec<i64> = set.shares().iter().map(|share| share.x).collect();

        assert_eq!(xs, vec![1, 2, 10]);
        assert_eq!(set.reconstruct().unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_json_round_trip() {
        let set = ShareSet::from_json(LINEAR).unwrap();
        let again = ShareSet::from_json(&set.to_json().unwrap()).unwrap();

        assert_eq!(again, set);
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            ShareSet::from_json("{ not json"),
            Err(ShareSetError::Json(_))
        ));
        assert!(matches!(
            ShareSet::from_json(r#"{ "1": { "base": "10", "value": "4" } }"#),
            Err(ShareSetError::Json(_))
        ));
        assert!(matches!(
            ShareSet::from_json(
                r#"{ "keys": { "n": 1, "k": 1 }, "one": { "base": "10", "value": "4" } }"#
            ),
            Err(ShareSetError::InvalidAbscissa(key)) if key == "one"
        ));
        assert!(matches!(
            ShareSet::from_json(
                r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "ten", "value": "4" } }"#
            ),
            Err(ShareSetError::InvalidBase { x: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_threshold() {
        assert!(matches!(
            ShareSet::new(2, 0, vec![RawShare::new(1, 10, "1")]),
            Err(ShareSetError::Secret(SecretError::InvalidThreshold {
                threshold: 0,
                count: 2
            }))
        ));
        assert!(matches!(
            ShareSet::new(2, 3, vec![RawShare::new(1, 10, "1")]),
            Err(ShareSetError::Secret(SecretError::InvalidThreshold {
                threshold: 3,
                count: 2
            }))
        ));
    }

    #[test]
    fn test_insufficient_shares() {
        let shares = vec![RawShare::new(1, 10, "4"), RawShare::new(2, 10, "7")];

        assert!(matches!(
            ShareSet::new(4, 3, shares),
            Err(ShareSetError::Secret(SecretError::InsufficientShares { got: 2, need: 3 }))
        ));
    }

    #[test]
    fn test_duplicate_keys() {
        let json = r#"{
            "keys": { "n": 2, "k": 2 },
            "1": { "base": "10", "value": "4" },
            "01": { "base": "10", "value": "4" }
        }"#;

        assert!(matches!(
            ShareSet::from_json(json),
            Err(ShareSetError::Secret(SecretError::DuplicateAbscissa(1)))
        ));
    }

    #[test]
    fn test_decode_error_surfaces() {
        let json = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "35", "value": "z" }
        }"#;
        let set = ShareSet::from_json(json).unwrap();

        assert!(matches!(
            set.reconstruct(),
            Err(ShareSetError::Secret(SecretError::DigitExceedsBase { digit: 35, base: 35 }))
        ));
    }
}
