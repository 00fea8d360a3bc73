use super::entity::{NewSuper, SuperType};
use crate::domain::{DomainError, DomainResult};

const INVALID_TYPE_MESSAGE: &str = "Type should be one of [\"HERO\", \"VILAN\"]";

/// Normalizes the discriminator to upper case and accepts only HERO or VILAN.
pub fn validate_super_type(raw: &str) -> DomainResult<SuperType> {
    match raw.to_uppercase().as_str() {
        "HERO" => Ok(SuperType::Hero),
        "VILAN" => Ok(SuperType::Vilan),
        _ => Err(DomainError::InvalidFields(INVALID_TYPE_MESSAGE.to_string())),
    }
}

/// Validates a candidate before it is persisted.
/// The discriminator is the only checked field; everything else is taken verbatim.
pub fn validate_new_super(candidate: &NewSuper) -> DomainResult<SuperType> {
    validate_super_type(&candidate.kind)
}

impl std::str::FromStr for SuperType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_super_type(s)
    }
}
