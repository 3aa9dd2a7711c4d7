//! Defines the helper macro for port error enums.
//!
//! Each variant names the [`crate::domain::ErrorCode`], status and public
//! message it becomes when a handler wraps it into an
//! [`crate::domain::AppError`]. The adapter detail stays in the `Display`
//! text, which is logged at the wrap site and never sent to clients.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )?
                    => $message:literal as $code:ident($status:literal, $public:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }

        impl From<$name> for $crate::domain::AppError {
            fn from(value: $name) -> Self {
                let (code, status, public) = match &value {
                    $(
                        $name::$variant { .. } => (
                            $crate::domain::ErrorCode::$code,
                            $status,
                            $public,
                        ),
                    )*
                };
                ::tracing::warn!(error = %value, code = %code, "data access failure");
                $crate::domain::AppError::new(code, public).with_status(status)
            }
        }
    };
}

pub(crate) use define_port_error;
