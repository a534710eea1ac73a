use std::fmt;

use rand::Rng;
use uuid::{Builder, Uuid};

use crate::ModelError;

/// Opaque resource identifier, rendered as a hyphenated UUID.
///
/// Generated ids draw their bytes from the caller's random source, so a
/// seeded generator reproduces them.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ModelError::EmptyId);
        }
        Ok(Self(value))
    }

    /// Draws a version 4 UUID from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(random_uuid(rng).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds a version 4 UUID from 16 random bytes.
pub fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.r#gen()).into_uuid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seeded_ids_repeat() {
        let a = ResourceId::random(&mut StdRng::seed_from_u64(42));
        let b = ResourceId::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 36);
        assert_eq!(
            Uuid::parse_str(a.as_str()).ok().map(|u| u.get_version_num()),
            Some(4)
        );
    }

    #[test]
    fn blank_id_is_rejected() {
        assert!(matches!(ResourceId::new("  "), Err(ModelError::EmptyId)));
        let id = ResourceId::new("abc").expect("valid id");
        assert_eq!(id.as_str(), "abc");
    }
}
