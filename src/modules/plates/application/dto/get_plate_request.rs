use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request DTO for a single plate lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value")]
pub enum GetPlateRequest {
    /// Lookup by id; the string must be a UUID
    ById(String),
    /// Lookup by exact plate code
    ByCode(String),
}

impl GetPlateRequest {
    /// Pick the lookup for a user-supplied identifier: UUIDs are ids, anything else a code
    pub fn from_identifier(identifier: &str) -> Self {
        let identifier = identifier.trim();
        if Uuid::parse_str(identifier).is_ok() {
            Self::ById(identifier.to_string())
        } else {
            Self::ByCode(identifier.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_identifier() {
        let id = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        assert_eq!(
            GetPlateRequest::from_identifier(id),
            GetPlateRequest::ById(id.to_string())
        );
        assert_eq!(
            GetPlateRequest::from_identifier(" HH "),
            GetPlateRequest::ByCode("HH".to_string())
        );
    }
}
