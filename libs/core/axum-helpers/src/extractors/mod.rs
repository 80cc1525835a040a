//! Custom extractors that reject bad input with the standard error envelope.

pub mod nullability;
pub mod uuid_path;
pub mod validated_json;

pub use nullability::{non_null, nullable};
pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
