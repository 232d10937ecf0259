use std::sync::LazyLock;

use phf::phf_set;
use regex::Regex;

use super::types::ErrorCode;

pub const MAX_DOMAIN_LENGTH: usize = 253;
pub const MAX_LABEL_LENGTH: usize = 63;
pub const MAX_LEVELS: usize = 127;
pub const MIN_LEVELS: usize = 2;
pub const MIN_TLD_LENGTH: usize = 2;
pub const MAX_TLD_LENGTH: usize = 3;

/// Prefix of an ASCII-compatible encoded (punycode) label.
pub const ACE_PREFIX: &str = "xn--";

/// Legacy TLDs longer than `MAX_TLD_LENGTH`.
pub const LONG_TLD_ALLOWLIST: phf::Set<&'static str> = phf_set! {
    "arpa", "aero", "asia", "coop", "info", "jobs",
    "mobi", "museum", "name", "post", "travel",
};

static LABEL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9\-_]+$").expect("static label regex"));

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static numeric regex"));

type LabelPredicate = fn(&str) -> bool;

/// Checks run against every label, in this order. A predicate returning
/// `true` means the label violates the paired rule.
pub(crate) const LABEL_RULES: &[(LabelPredicate, ErrorCode)] = &[
    (label_too_long, ErrorCode::MaxLabelSize),
    (begins_with_dash, ErrorCode::LabelDashBegin),
    (ends_with_dash, ErrorCode::LabelDashEnd),
    (has_illegal_chars, ErrorCode::IllegalChars),
];

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn domain_too_long(domain: &str) -> bool {
    char_len(domain) > MAX_DOMAIN_LENGTH
}

pub(crate) fn label_too_long(label: &str) -> bool {
    char_len(label) > MAX_LABEL_LENGTH
}

pub(crate) fn begins_with_dash(label: &str) -> bool {
    label.starts_with('-')
}

pub(crate) fn ends_with_dash(label: &str) -> bool {
    label.ends_with('-')
}

pub(crate) fn has_illegal_chars(label: &str) -> bool {
    !LABEL_CHARS.is_match(label)
}

pub(crate) fn is_numeric(tld: &str) -> bool {
    NUMERIC.is_match(tld)
}

/// Coarse plausibility: 2-3 characters, an allow-listed legacy TLD, or an
/// ACE-encoded label of any length.
pub(crate) fn is_plausible_tld(tld: &str) -> bool {
    let len = char_len(tld);
    (MIN_TLD_LENGTH..=MAX_TLD_LENGTH).contains(&len)
        || LONG_TLD_ALLOWLIST.contains(tld)
        || tld.starts_with(ACE_PREFIX)
}

/// Labels never contain `.` after the split, so this only fires for inputs
/// built without going through `split_labels`.
pub(crate) fn begins_with_period(label: &str) -> bool {
    label.starts_with('.')
}

/// Splits on `.`, dropping trailing empty labels so that the fully-qualified
/// form `example.com.` yields the same labels as `example.com`.
pub(crate) fn split_labels(domain: &str) -> Vec<&str> {
    let mut labels: Vec<&str> = domain.split('.').collect();
    while labels.last().is_some_and(|l| l.is_empty()) {
        labels.pop();
    }
    labels
}
