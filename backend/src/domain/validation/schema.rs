//! Declarative schema description used by [`super::validate`].
//!
//! Schemas are plain data: an ordered list of fields, the cross-field checks
//! that apply once every field has been checked on its own, and the policy
//! for fields the schema does not mention. They are built once and shared
//! read-only between requests.

use std::fmt;

use regex::Regex;
use serde_json::Value;

/// Primitive shape a field value must have.
#[derive(Debug, Clone)]
pub enum Kind {
    /// Any JSON string.
    String,
    /// A finite number, or a string holding one.
    Number,
    /// A JSON boolean.
    Boolean,
    /// One of a fixed set of strings, matched case-insensitively.
    Enumeration(&'static [&'static str]),
    /// An RFC 3339 timestamp string.
    Timestamp,
    /// A nested object described by its own schema.
    Object(Box<Schema>),
}

/// Regular expression constraint with the message reported on mismatch.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    message: &'static str,
}

impl Pattern {
    /// Compile a pattern. `message` completes the sentence "`<field>` ...".
    ///
    /// # Examples
    /// ```
    /// use tripline::domain::validation::Pattern;
    ///
    /// let pattern = Pattern::new("^[A-Z]{3}$", "must be a three-letter code").expect("valid");
    /// assert!(pattern.is_match("EUR"));
    /// ```
    pub fn new(expression: &str, message: &'static str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(expression)?,
            message,
        })
    }

    /// Return true when the value satisfies the pattern.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// Message fragment reported when the pattern does not match.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Per-field constraint, evaluated in declaration order.
///
/// Length and pattern constraints apply to strings; bounds apply to numbers.
/// A constraint that does not apply to the field's kind is skipped.
#[derive(Debug, Clone)]
pub enum Constraint {
    MinLength(usize),
    MaxLength(usize),
    Minimum(f64),
    Maximum(f64),
    Pattern(Pattern),
}

/// Declaration of a single named field.
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    kind: Kind,
    required: bool,
    secret: bool,
    constraints: Vec<Constraint>,
}

impl Field {
    /// Declare a field that must be present and non-null.
    pub fn required(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            required: true,
            secret: false,
            constraints: Vec::new(),
        }
    }

    /// Declare a field that may be absent or null.
    pub fn optional(name: &'static str, kind: Kind) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind)
        }
    }

    /// Mark the value as something clients must never get back.
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Append a minimum length (in characters) constraint.
    pub fn min_length(self, min: usize) -> Self {
        self.constrain(Constraint::MinLength(min))
    }

    /// Append a maximum length (in characters) constraint.
    pub fn max_length(self, max: usize) -> Self {
        self.constrain(Constraint::MaxLength(max))
    }

    /// Append an inclusive lower bound.
    pub fn minimum(self, min: f64) -> Self {
        self.constrain(Constraint::Minimum(min))
    }

    /// Append an inclusive upper bound.
    pub fn maximum(self, max: f64) -> Self {
        self.constrain(Constraint::Maximum(max))
    }

    /// Append a pattern constraint.
    pub fn pattern(self, pattern: Pattern) -> Self {
        self.constrain(Constraint::Pattern(pattern))
    }

    /// Append an arbitrary constraint.
    pub fn constrain(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_secret(&self) -> bool {
        self.secret
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

/// Constraint spanning two fields of the same object.
#[derive(Debug, Clone)]
pub enum CrossFieldCheck {
    /// `field` must hold the same normalized value as `other`. Reported
    /// against `field`.
    FieldsEqual {
        field: &'static str,
        other: &'static str,
        message: &'static str,
    },
}

/// Treatment of input fields the schema does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFields {
    /// Accept the input and leave the field out of the normalized value.
    #[default]
    Drop,
    /// Report each undeclared field as a problem.
    Reject,
}

/// Immutable description of an accepted input shape.
///
/// # Examples
/// ```
/// use tripline::domain::validation::{Field, Kind, Schema};
///
/// let schema = Schema::builder("note")
///     .field(Field::required("title", Kind::String).min_length(1))
///     .build();
/// assert_eq!(schema.fields().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    name: &'static str,
    fields: Vec<Field>,
    checks: Vec<CrossFieldCheck>,
    unknown_fields: UnknownFields,
}

impl Schema {
    /// Start describing a schema.
    pub fn builder(name: &'static str) -> SchemaBuilder {
        SchemaBuilder {
            schema: Self {
                name,
                fields: Vec::new(),
                checks: Vec::new(),
                unknown_fields: UnknownFields::default(),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn checks(&self) -> &[CrossFieldCheck] {
        &self.checks
    }

    pub fn unknown_fields(&self) -> UnknownFields {
        self.unknown_fields
    }

    /// Return true when the schema declares a field with this name.
    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    /// Strip fields marked [`Field::secret`] from a normalized value.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use tripline::domain::validation::{Field, Kind, Schema};
    ///
    /// let schema = Schema::builder("login")
    ///     .field(Field::required("user", Kind::String))
    ///     .field(Field::required("pin", Kind::String).secret())
    ///     .build();
    /// let mut value = json!({ "user": "ada", "pin": "1234" });
    /// schema.redact(&mut value);
    /// assert_eq!(value, json!({ "user": "ada" }));
    /// ```
    pub fn redact(&self, value: &mut Value) {
        let Some(object) = value.as_object_mut() else {
            return;
        };
        for field in self.fields.iter().filter(|field| field.secret) {
            object.remove(field.name);
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Builder returned by [`Schema::builder`].
#[derive(Debug)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Declare the next field.
    pub fn field(mut self, field: Field) -> Self {
        self.schema.fields.push(field);
        self
    }

    /// Require `field` to equal `other` once both pass their own checks.
    pub fn fields_equal(
        mut self,
        field: &'static str,
        other: &'static str,
        message: &'static str,
    ) -> Self {
        self.schema.checks.push(CrossFieldCheck::FieldsEqual {
            field,
            other,
            message,
        });
        self
    }

    /// Choose how undeclared fields are treated.
    pub fn unknown_fields(mut self, policy: UnknownFields) -> Self {
        self.schema.unknown_fields = policy;
        self
    }

    pub fn build(self) -> Schema {
        self.schema
    }
}
