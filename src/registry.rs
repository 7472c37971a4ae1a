//! Contract for external registry collaborators (the IBGE municipality
//! lookup and the public CNPJ registry). The clients themselves live outside
//! this crate; validators here never perform I/O. Callers inject an
//! implementation and choose between the strict result (three-way error) and
//! the lenient adapter that folds every failure to `None`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a registry lookup produced no record. `InvalidInput` is the caller's
/// bug, `NotFound` is a clean miss, `Unavailable` is the remote side
/// misbehaving; callers frequently react to the three differently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("malformed lookup key: {0}")]
    InvalidInput(String),

    #[error("no record for the given key")]
    NotFound,

    #[error("registry unavailable: {0}")]
    Unavailable(String),
}

/// One record returned by a registry, already decoded from the remote
/// service's JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryRecord {
    /// The normalized key the record was found under.
    pub key: String,
    /// Display name of the registered entity or municipality.
    pub name: String,
    /// Registry-specific code (IBGE municipality code, CNPJ legal nature).
    pub code: Option<String>,
}

/// A key-to-record lookup source. Implementations own their transport,
/// timeout and retry policy.
pub trait RegistryClient {
    fn lookup(&self, key: &str) -> Result<RegistryRecord, LookupError>;
}

/// Lenient lookup: every failure kind collapses to `None`. Matches the
/// fail-closed convention of the validators for callers that do not need
/// the distinction.
pub fn lookup_optional(client: &dyn RegistryClient, key: &str) -> Option<RegistryRecord> {
    client.lookup(key).ok()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    struct InMemoryRegistry {
        records: HashMap<String, RegistryRecord>,
    }

    impl RegistryClient for InMemoryRegistry {
        fn lookup(&self, key: &str) -> Result<RegistryRecord, LookupError> {
            if key.is_empty() || !key.chars().all(|c| c.is_ascii_digit()) {
                return Err(LookupError::InvalidInput(key.to_string()));
            }
            self.records.get(key).cloned().ok_or(LookupError::NotFound)
        }
    }

    fn fixture() -> InMemoryRegistry {
        let record = RegistryRecord {
            key: "3550308".to_string(),
            name: "São Paulo".to_string(),
            code: Some("3550308".to_string()),
        };
        InMemoryRegistry {
            records: HashMap::from([(record.key.clone(), record)]),
        }
    }

    #[test]
    fn strict_lookup_distinguishes_failures() {
        let registry = fixture();
        assert!(registry.lookup("3550308").is_ok());
        assert_eq!(registry.lookup("9999999"), Err(LookupError::NotFound));
        assert_eq!(
            registry.lookup("not-a-key"),
            Err(LookupError::InvalidInput("not-a-key".to_string()))
        );
    }

    #[test]
    fn lenient_lookup_folds_to_none() {
        let registry = fixture();
        assert_eq!(
            lookup_optional(&registry, "3550308").map(|r| r.name),
            Some("São Paulo".to_string())
        );
        assert_eq!(lookup_optional(&registry, "9999999"), None);
        assert_eq!(lookup_optional(&registry, "not-a-key"), None);
    }

    #[test]
    fn records_decode_from_registry_json() {
        let record: RegistryRecord = serde_json::from_str(
            r#"{"key": "3550308", "name": "São Paulo", "code": null}"#,
        )
        .unwrap();
        assert_eq!(record.name, "São Paulo");
        assert_eq!(record.code, None);
    }
}
