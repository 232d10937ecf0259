use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One violated rule. Several codes may be reported for the same domain, and
/// the per-label codes may repeat once per offending label.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ZeroSize,
    MaxDomainSize,
    MaxLevelSize,
    MinLevelSize,
    MaxLabelSize,
    LabelDashBegin,
    LabelDashEnd,
    IllegalChars,
    TopNumerical,
    BogusTld,
    IllegalStart,
}

impl ErrorCode {
    /// Every code, in the order the rules are evaluated.
    pub const ALL: [ErrorCode; 11] = [
        ErrorCode::ZeroSize,
        ErrorCode::MaxDomainSize,
        ErrorCode::MaxLevelSize,
        ErrorCode::MinLevelSize,
        ErrorCode::MaxLabelSize,
        ErrorCode::LabelDashBegin,
        ErrorCode::LabelDashEnd,
        ErrorCode::IllegalChars,
        ErrorCode::TopNumerical,
        ErrorCode::BogusTld,
        ErrorCode::IllegalStart,
    ];

    /// Stable identifier, suitable for programmatic dispatch.
    pub const fn code(self) -> &'static str {
        match self {
            Self::ZeroSize => "zero_size",
            Self::MaxDomainSize => "max_domain_size",
            Self::MaxLevelSize => "max_level_size",
            Self::MinLevelSize => "min_level_size",
            Self::MaxLabelSize => "max_label_size",
            Self::LabelDashBegin => "label_dash_begin",
            Self::LabelDashEnd => "label_dash_end",
            Self::IllegalChars => "illegal_chars",
            Self::TopNumerical => "top_numerical",
            Self::BogusTld => "bogus_tld",
            Self::IllegalStart => "illegal_start",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::ZeroSize => "Zero-length domain name",
            Self::MaxDomainSize => "Maximum domain length of 253 exceeded",
            Self::MaxLevelSize => "Maximum domain level limit of 127 exceeded",
            Self::MinLevelSize => "Minimum domain level limit of 2 not achieved",
            Self::MaxLabelSize => "Maximum domain label length of 63 exceeded",
            Self::LabelDashBegin => "No domain label may begin with a dash",
            Self::LabelDashEnd => "No domain label may end with a dash",
            Self::IllegalChars => "Domain label contains an illegal character",
            Self::TopNumerical => "The top-level domain (TLD) cannot be numerical",
            Self::BogusTld => "Malformed TLD: Could not possibly match any valid TLD",
            Self::IllegalStart => "No domain name may start with a period",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ErrorCode {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown error code '{0}'")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub ok: bool,
    pub errors: Vec<ErrorCode>,
}

impl ValidationReport {
    pub(crate) fn from_errors(errors: Vec<ErrorCode>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
        }
    }

    pub fn has(&self, code: ErrorCode) -> bool {
        self.errors.contains(&code)
    }

    /// Identifiers of the reported codes, duplicates kept.
    pub fn codes(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.code()).collect()
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.message()).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ok {
            f.write_str("valid")
        } else {
            write!(f, "invalid: {}", self.messages().join("; "))
        }
    }
}
