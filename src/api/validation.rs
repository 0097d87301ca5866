use validator::Validate;

use crate::api::errors::ApiError;

/// Unwrap an optional request field, turning absence into a 400 naming the field.
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::BadRequest(format!("Missing {field}")))
}

pub(crate) fn validate_payload<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload.validate().map_err(|err| ApiError::BadRequest(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::require;

    #[test]
    fn require_names_the_missing_field() {
        let err = require::<String>(None, "teacherId").unwrap_err();
        match err {
            crate::api::errors::ApiError::BadRequest(message) => {
                assert_eq!(message, "Missing teacherId");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn require_passes_through_present_values() {
        let value = require(Some(7), "passed").expect("present value");
        assert_eq!(value, 7);
    }
}
