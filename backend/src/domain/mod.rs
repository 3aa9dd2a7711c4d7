//! Domain primitives, validation and the failure channel.
//!
//! Purpose: keep request validation and error normalization free of HTTP
//! framework types so they can be exercised without a server.
//!
//! Public surface:
//! - `validation` — declarative schemas and [`validation::validate`].
//! - `schemas` — the fixed schema set (trip, sign-up, expense).
//! - [`AppError`] / [`ErrorCode`] — typed errors and the closed code taxonomy.
//! - [`Failure`] / [`normalize`] — the single translation to an error envelope.
//! - `ports` — data-access traits implemented by outbound adapters.

pub mod account;
pub mod error;
pub mod expense;
pub mod failure;
pub mod ports;
pub mod schemas;
pub mod trace_id;
pub mod trip;
pub mod validation;

pub use self::account::{Account, Password, SignUp};
pub use self::error::{AppError, ErrorCategory, ErrorCode};
pub use self::expense::{Expense, ExpenseCategory, ExpenseDraft};
pub use self::failure::{
    ErrorBody, ErrorEnvelope, Failure, NormalizedResponse, UnknownFailure, normalize,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::trip::{TransportMode, Trip, TripDraft};

