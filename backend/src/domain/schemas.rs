//! The fixed set of request schemas.
//!
//! Each schema is built on first use and shared for the life of the process.

use std::sync::LazyLock;

use super::validation::{Field, Kind, Pattern, Schema};

/// Transport modes accepted for a trip, in canonical spelling.
pub const TRANSPORT_MODES: &[&str] = &["car", "bus", "train", "flight", "ferry", "bike", "walk"];

/// Expense categories accepted for business travel.
pub const EXPENSE_CATEGORIES: &[&str] = &["transport", "lodging", "meals", "fuel", "other"];

/// Minimum password length enforced at sign-up.
pub const PASSWORD_MIN: usize = 8;
/// Maximum password length enforced at sign-up.
pub const PASSWORD_MAX: usize = 128;

fn pattern(expression: &str, message: &'static str) -> Pattern {
    Pattern::new(expression, message)
        .unwrap_or_else(|error| panic!("schema pattern {expression} failed to compile: {error}"))
}

static TRIP: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("trip")
        .field(
            Field::required("trip_number", Kind::String)
                .min_length(1)
                .max_length(50),
        )
        .field(
            Field::required("origin", Kind::String)
                .min_length(1)
                .max_length(200),
        )
        .field(
            Field::required("destination", Kind::String)
                .min_length(1)
                .max_length(200),
        )
        .field(Field::required(
            "transport_mode",
            Kind::Enumeration(TRANSPORT_MODES),
        ))
        .field(Field::required("start_time", Kind::Timestamp))
        .field(Field::optional("distance_km", Kind::Number).minimum(0.0))
        .field(Field::optional("notes", Kind::String).max_length(500))
        .build()
});

static SIGN_UP: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("sign_up")
        .field(
            Field::required("email", Kind::String)
                .max_length(254)
                .pattern(pattern(
                    r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
                    "must be a valid email address",
                )),
        )
        .field(
            Field::required("password", Kind::String)
                .secret()
                .min_length(PASSWORD_MIN)
                .max_length(PASSWORD_MAX)
                .pattern(pattern("[A-Z]", "must contain an uppercase letter"))
                .pattern(pattern("[a-z]", "must contain a lowercase letter"))
                .pattern(pattern("[0-9]", "must contain a digit")),
        )
        .field(Field::required("confirm_password", Kind::String).secret())
        .field(
            Field::required("full_name", Kind::String)
                .min_length(1)
                .max_length(100),
        )
        .field(Field::optional("home_city", Kind::String).max_length(100))
        .field(Field::optional("phone", Kind::String).pattern(pattern(
            r"^\+?[0-9][0-9 ()-]{5,19}$",
            "must be a valid phone number",
        )))
        .fields_equal("confirm_password", "password", "passwords do not match")
        .build()
});

static EXPENSE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("expense")
        .field(Field::required("trip_id", Kind::String).pattern(pattern(
            "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
            "must be a valid UUID",
        )))
        .field(Field::required("amount", Kind::Number).minimum(0.0))
        .field(Field::required("currency", Kind::String).pattern(pattern(
            "^[A-Z]{3}$",
            "must be a three-letter ISO 4217 code",
        )))
        .field(Field::required(
            "category",
            Kind::Enumeration(EXPENSE_CATEGORIES),
        ))
        .field(Field::required("incurred_at", Kind::Timestamp))
        .field(Field::optional("description", Kind::String).max_length(500))
        .build()
});

/// Schema for creating a trip.
pub fn trip_schema() -> &'static Schema {
    &TRIP
}

/// Schema for creating an account.
pub fn sign_up_schema() -> &'static Schema {
    &SIGN_UP
}

/// Schema for logging a business expense against a trip.
pub fn expense_schema() -> &'static Schema {
    &EXPENSE
}

/// Look a schema up by its name.
///
/// # Examples
/// ```
/// use tripline::domain::schemas::by_name;
///
/// assert_eq!(by_name("trip").map(|schema| schema.name()), Some("trip"));
/// assert!(by_name("postcard").is_none());
/// ```
pub fn by_name(name: &str) -> Option<&'static Schema> {
    [trip_schema(), sign_up_schema(), expense_schema()]
        .into_iter()
        .find(|schema| schema.name() == name)
}
