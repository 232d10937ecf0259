#![forbid(unsafe_code)]
//! domain_name_validator — syntactic validation of ASCII domain names.
//!
//! Internationalized names are supported once converted to their ASCII
//! (`xn--`) form; this crate does no IDNA conversion and no DNS lookups.

pub mod validator;
pub use validator::{
    ACE_PREFIX, ErrorCode, LONG_TLD_ALLOWLIST, MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH, MAX_LEVELS,
    MAX_TLD_LENGTH, MIN_LEVELS, MIN_TLD_LENGTH, UnknownErrorCode, ValidationReport, check_domain,
    check_domain_opt, is_valid_domain, validate,
};
