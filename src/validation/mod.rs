//! Input validation for domain constructors
//!
//! Every rule returns `StoreError::Validation` on rejection so the services
//! can surface constructor failures unchanged.

mod rules;

pub use rules::{
    normalize_email, normalize_tag, normalize_tags, require_non_empty, validate_email,
    validate_id, validate_year,
};
