mod error;
pub use error::Error;

pub mod admin;
pub use admin::AdminId;

pub mod describe;
pub use describe::FieldDescription;

pub mod guess;

pub mod instance;
pub use instance::Instance;

pub mod metadata;
pub use metadata::ClassId;

pub mod ty;
pub use ty::FieldType;

mod value;
pub use value::Value;

/// A Result type alias that uses Scaffold's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
