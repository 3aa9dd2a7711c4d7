//! Schema-driven request validation.
//!
//! [`validate`] checks an untyped JSON value against a [`Schema`] and either
//! returns the normalized value or every problem it found. Validation never
//! raises: callers inspect the result and decide how to respond.
//!
//! Within one field the first failing check wins; across fields every
//! problem is collected so clients can highlight all bad inputs at once.

mod schema;

use std::fmt;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

pub use schema::{
    Constraint, CrossFieldCheck, Field, Kind, Pattern, Schema, SchemaBuilder, UnknownFields,
};

/// Which check a [`Problem`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Required,
    Type,
    MinLength,
    MaxLength,
    Minimum,
    Maximum,
    Pattern,
    OneOf,
    Timestamp,
    MatchesField,
    UnknownField,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Dotted path to the offending field; empty for the input itself.
    pub path: String,
    /// Human-readable explanation suitable for inline form feedback.
    pub message: String,
    /// The violated check.
    pub constraint: ConstraintKind,
}

impl Problem {
    fn new(path: &str, message: impl Into<String>, constraint: ConstraintKind) -> Self {
        Self {
            path: path.to_owned(),
            message: message.into(),
            constraint,
        }
    }
}

/// Ordered, non-empty list of problems found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    problems: Vec<Problem>,
}

impl ValidationErrors {
    /// Wrap a problem list, returning `None` when it is empty.
    pub fn from_problems(problems: Vec<Problem>) -> Option<Self> {
        if problems.is_empty() {
            None
        } else {
            Some(Self { problems })
        }
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }

    /// Return true when any problem refers to `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.problems.iter().any(|problem| problem.path == path)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed with {} problem(s)", self.problems.len())
    }
}

impl std::error::Error for ValidationErrors {}

/// Outcome of [`validate`]: the normalized value or the problems found.
pub type ValidationResult = Result<Value, ValidationErrors>;

/// Check `input` against `schema`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use tripline::domain::schemas::trip_schema;
/// use tripline::domain::validation::validate;
///
/// let body = json!({
///     "trip_number": "TRIP-001",
///     "origin": "New York",
///     "destination": "Boston",
///     "transport_mode": "Car",
///     "start_time": "2024-01-15T10:00:00Z",
/// });
/// let value = validate(trip_schema(), &body).expect("valid trip");
/// assert_eq!(value["transport_mode"], "car");
/// ```
pub fn validate(schema: &Schema, input: &Value) -> ValidationResult {
    let mut problems = Vec::new();
    let normalized = check_object(schema, input, "", &mut problems);
    match ValidationErrors::from_problems(problems) {
        Some(errors) => Err(errors),
        None => Ok(Value::Object(normalized)),
    }
}

/// Flat success/failure envelope returned by [`validate_request`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Problem>>,
}

impl From<ValidationResult> for RequestEnvelope {
    fn from(result: ValidationResult) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                errors: None,
            },
            Err(errors) => Self {
                success: false,
                data: None,
                errors: Some(errors.into_problems()),
            },
        }
    }
}

/// Validate and reshape the outcome into a [`RequestEnvelope`].
pub fn validate_request(schema: &Schema, input: &Value) -> RequestEnvelope {
    validate(schema, input).into()
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}

fn check_object(
    schema: &Schema,
    input: &Value,
    prefix: &str,
    problems: &mut Vec<Problem>,
) -> Map<String, Value> {
    let mut output = Map::new();
    let Some(object) = input.as_object() else {
        let label = if prefix.is_empty() { "input" } else { prefix };
        problems.push(Problem::new(
            prefix,
            format!("{label} must be an object"),
            ConstraintKind::Type,
        ));
        return output;
    };

    for field in schema.fields() {
        let path = join_path(prefix, field.name());
        match object.get(field.name()) {
            None | Some(Value::Null) => {
                if field.is_required() {
                    problems.push(Problem::new(
                        &path,
                        format!("{path} is required"),
                        ConstraintKind::Required,
                    ));
                }
            }
            Some(raw) => {
                if let Some(value) = check_field(field, raw, &path, problems) {
                    output.insert(field.name().to_owned(), value);
                }
            }
        }
    }

    for check in schema.checks() {
        match check {
            CrossFieldCheck::FieldsEqual {
                field,
                other,
                message,
            } => {
                // Only compare when both sides passed their own checks.
                if let (Some(left), Some(right)) = (output.get(*field), output.get(*other)) {
                    if left != right {
                        let path = join_path(prefix, field);
                        problems.push(Problem::new(
                            &path,
                            *message,
                            ConstraintKind::MatchesField,
                        ));
                    }
                }
            }
        }
    }

    if schema.unknown_fields() == UnknownFields::Reject {
        for key in object.keys().filter(|key| !schema.declares(key)) {
            let path = join_path(prefix, key);
            problems.push(Problem::new(
                &path,
                format!("{path} is not a recognised field"),
                ConstraintKind::UnknownField,
            ));
        }
    }

    output
}

fn check_field(
    field: &Field,
    raw: &Value,
    path: &str,
    problems: &mut Vec<Problem>,
) -> Option<Value> {
    let value = match field.kind() {
        Kind::Object(nested) => {
            let before = problems.len();
            let inner = check_object(nested, raw, path, problems);
            // Nested problems are already recorded; the field itself fails.
            return (problems.len() == before).then_some(Value::Object(inner));
        }
        kind => coerce(kind, raw, path),
    };

    let value = match value {
        Ok(value) => value,
        Err(problem) => {
            problems.push(problem);
            return None;
        }
    };

    if let Some(problem) = field
        .constraints()
        .iter()
        .find_map(|constraint| check_constraint(constraint, &value, path))
    {
        problems.push(problem);
        return None;
    }
    Some(value)
}

fn coerce(kind: &Kind, raw: &Value, path: &str) -> Result<Value, Problem> {
    match (kind, raw) {
        (Kind::String, Value::String(_)) | (Kind::Boolean, Value::Bool(_)) => Ok(raw.clone()),
        (Kind::Number, Value::Number(number)) if number.as_f64().is_some_and(f64::is_finite) => {
            Ok(raw.clone())
        }
        (Kind::Number, Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| type_problem(path, "a number")),
        (Kind::Enumeration(options), Value::String(text)) => {
            let candidate = text.trim();
            options
                .iter()
                .find(|option| option.eq_ignore_ascii_case(candidate))
                .map(|option| Value::String((*option).to_owned()))
                .ok_or_else(|| {
                    Problem::new(
                        path,
                        format!("{path} must be one of: {}", options.join(", ")),
                        ConstraintKind::OneOf,
                    )
                })
        }
        // An offset can push the UTC year past four digits, which RFC 3339
        // cannot express.
        (Kind::Timestamp, Value::String(text)) => DateTime::parse_from_rfc3339(text.trim())
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .filter(|utc| (0..=9999).contains(&utc.year()))
            .map(|utc| Value::String(utc.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
            .ok_or_else(|| {
                Problem::new(
                    path,
                    format!("{path} must be an RFC 3339 timestamp"),
                    ConstraintKind::Timestamp,
                )
            }),
        (Kind::String | Kind::Enumeration(_) | Kind::Timestamp, _) => {
            Err(type_problem(path, "a string"))
        }
        (Kind::Number, _) => Err(type_problem(path, "a number")),
        (Kind::Boolean, _) => Err(type_problem(path, "a boolean")),
        (Kind::Object(_), _) => Err(type_problem(path, "an object")),
    }
}

fn type_problem(path: &str, expected: &str) -> Problem {
    Problem::new(
        path,
        format!("{path} must be {expected}"),
        ConstraintKind::Type,
    )
}

fn check_constraint(constraint: &Constraint, value: &Value, path: &str) -> Option<Problem> {
    match (constraint, value) {
        (Constraint::MinLength(min), Value::String(text)) if text.chars().count() < *min => {
            let message = if *min == 1 {
                format!("{path} must not be empty")
            } else {
                format!("{path} must be at least {min} characters")
            };
            Some(Problem::new(path, message, ConstraintKind::MinLength))
        }
        (Constraint::MaxLength(max), Value::String(text)) if text.chars().count() > *max => {
            Some(Problem::new(
                path,
                format!("{path} must be at most {max} characters"),
                ConstraintKind::MaxLength,
            ))
        }
        (Constraint::Minimum(min), Value::Number(number))
            if number.as_f64().is_some_and(|n| n < *min) =>
        {
            Some(Problem::new(
                path,
                format!("{path} must be at least {min}"),
                ConstraintKind::Minimum,
            ))
        }
        (Constraint::Maximum(max), Value::Number(number))
            if number.as_f64().is_some_and(|n| n > *max) =>
        {
            Some(Problem::new(
                path,
                format!("{path} must be at most {max}"),
                ConstraintKind::Maximum,
            ))
        }
        (Constraint::Pattern(pattern), Value::String(text)) if !pattern.is_match(text) => {
            Some(Problem::new(
                path,
                format!("{path} {}", pattern.message()),
                ConstraintKind::Pattern,
            ))
        }
        _ => None,
    }
}
