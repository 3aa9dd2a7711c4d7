//! Shared validation helpers for inbound HTTP adapters.
//!
//! Handlers accept bodies as raw JSON, run them through a schema, then decode
//! the cleaned value into a typed domain draft. Path parameters are checked
//! here too so every malformed input yields the same envelope shape.

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::error;
use uuid::Uuid;

use crate::domain::validation::{Schema, validate};
use crate::domain::{AppError, Failure};

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Validate `input` against `schema` and decode the cleaned value.
///
/// Validation problems surface as [`Failure::Validation`]. A cleaned value
/// that does not decode means the schema and the target type disagree, which
/// is a server fault rather than bad input.
pub(crate) fn validated<T>(schema: &Schema, input: &Value) -> Result<T, Failure>
where
    T: DeserializeOwned,
{
    let cleaned = validate(schema, input)?;
    serde_json::from_value(cleaned).map_err(|err| {
        error!(schema = %schema, error = %err, "validated payload did not decode");
        Failure::from(AppError::internal(format!(
            "{schema} payload could not be decoded"
        )))
    })
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> AppError {
    let field = field.as_str();
    AppError::invalid_input(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
    }))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schemas::trip_schema;
    use crate::domain::{ErrorCode, TransportMode, TripDraft};
    use rstest::rstest;

    #[rstest]
    fn validated_decodes_cleaned_trip() {
        let input = json!({
            "trip_number": "T-1",
            "origin": "Leeds",
            "destination": "York",
            "start_time": "2024-05-01T09:00:00+01:00",
            "transport_mode": "Train",
        });
        let draft: TripDraft = validated(trip_schema(), &input).expect("valid trip");
        assert_eq!(draft.transport_mode, TransportMode::Train);
        assert_eq!(draft.start_time.to_rfc3339(), "2024-05-01T08:00:00+00:00");
    }

    #[rstest]
    fn validated_reports_schema_problems() {
        let err = validated::<TripDraft>(trip_schema(), &json!({ "origin": "Leeds" }))
            .expect_err("missing fields");
        let Failure::Validation(errors) = err else {
            panic!("expected validation failure, got {err:?}");
        };
        assert!(errors.has_path("trip_number"));
        assert!(errors.has_path("transport_mode"));
    }

    #[rstest]
    #[case("3fa85f64-5717-4562-b3fc-2c963f66afa6", true)]
    #[case("not-a-uuid", false)]
    #[case("", false)]
    fn parse_uuid_checks_format(#[case] raw: &str, #[case] ok: bool) {
        let result = parse_uuid(raw, FieldName::new("id"));
        assert_eq!(result.is_ok(), ok);
        if let Err(err) = result {
            assert_eq!(err.code(), ErrorCode::InvalidInput);
            assert_eq!(err.message(), "id must be a valid UUID");
            assert_eq!(err.details(), Some(&json!({ "field": "id", "value": raw })));
        }
    }
}
