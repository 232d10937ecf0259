mod rules;
mod types;

pub use rules::{
    ACE_PREFIX, LONG_TLD_ALLOWLIST, MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH, MAX_LEVELS,
    MAX_TLD_LENGTH, MIN_LEVELS, MIN_TLD_LENGTH,
};
pub use types::{ErrorCode, UnknownErrorCode, ValidationReport};

use rules::{
    LABEL_RULES, begins_with_period, domain_too_long, is_numeric, is_plausible_tld, split_labels,
};

/// Validates the format of a domain name already represented in ASCII
/// (internationalized names must have gone through IDNA conversion first).
///
/// Violations are appended to `errors`, which is never cleared, so one sink
/// can accumulate across calls. Every rule runs even after a failure; only a
/// missing or blank candidate stops early with [`ErrorCode::ZeroSize`].
///
/// Returns `true` when the sink is empty once every rule has run, so a sink
/// carrying errors from an earlier call always yields `false`.
pub fn validate(candidate: Option<&str>, errors: &mut Vec<ErrorCode>) -> bool {
    let before = errors.len();

    let trimmed = candidate.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        record(errors, ErrorCode::ZeroSize, None);
        return false;
    }

    if domain_too_long(trimmed) {
        record(errors, ErrorCode::MaxDomainSize, None);
    }

    let lowered = trimmed.to_ascii_lowercase();
    let labels = split_labels(&lowered);

    if labels.len() > MAX_LEVELS {
        record(errors, ErrorCode::MaxLevelSize, None);
    }
    if labels.len() < MIN_LEVELS {
        record(errors, ErrorCode::MinLevelSize, None);
    }

    for &label in &labels {
        for (violates, code) in LABEL_RULES {
            if violates(label) {
                record(errors, *code, Some(label));
            }
        }
    }

    let tld = labels.last().copied().unwrap_or_default();
    if is_numeric(tld) {
        record(errors, ErrorCode::TopNumerical, Some(tld));
    }
    if !is_plausible_tld(tld) {
        record(errors, ErrorCode::BogusTld, Some(tld));
    }

    if labels.first().is_some_and(|first| begins_with_period(first)) {
        record(errors, ErrorCode::IllegalStart, None);
    }

    let ok = errors.is_empty();
    #[cfg(feature = "with-tracing")]
    tracing::trace!(
        domain = %lowered,
        ok,
        violations = errors.len() - before,
        "domain validated"
    );
    ok
}

/// Validates `candidate` into a fresh sink.
pub fn check_domain(candidate: &str) -> ValidationReport {
    check_domain_opt(Some(candidate))
}

pub fn check_domain_opt(candidate: Option<&str>) -> ValidationReport {
    let mut errors = Vec::new();
    validate(candidate, &mut errors);
    ValidationReport::from_errors(errors)
}

pub fn is_valid_domain(candidate: &str) -> bool {
    validate(Some(candidate), &mut Vec::new())
}

#[cfg_attr(not(feature = "with-tracing"), allow(unused_variables))]
fn record(errors: &mut Vec<ErrorCode>, code: ErrorCode, label: Option<&str>) {
    #[cfg(feature = "with-tracing")]
    tracing::debug!(code = code.code(), label, "domain rule violated");
    errors.push(code);
}

#[cfg(test)]
mod tests;
