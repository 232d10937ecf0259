use super::*;
use proptest::prelude::*;

use super::ErrorCode::*;

fn errors_of(candidate: &str) -> Vec<ErrorCode> {
    check_domain(candidate).errors
}

#[test]
fn accepts_basic_domain() {
    let report = check_domain("keenertech.com");
    assert!(report.ok, "{:?}", report.errors);
    assert!(report.errors.is_empty());
}

#[test]
fn rejects_numeric_tld() {
    assert_eq!(errors_of("keenertech.123"), vec![TopNumerical]);
}

#[test]
fn missing_or_blank_input_is_zero_size() {
    for candidate in [None, Some(""), Some("   "), Some("\t\n")] {
        let mut errors = Vec::new();
        assert!(!validate(candidate, &mut errors));
        assert_eq!(errors, vec![ZeroSize], "{candidate:?}");
    }
}

#[test]
fn case_and_surrounding_whitespace_are_ignored() {
    assert_eq!(check_domain("KeenerTech.COM"), check_domain("keenertech.com"));
    assert!(is_valid_domain("  keenertech.com\n"));
}

#[test]
fn domain_length_limit() {
    let a = "a".repeat(63);
    let b = "b".repeat(58);
    let domain = format!("{a}.{a}.{a}.{b}.com");
    assert_eq!(domain.len(), 254);
    assert_eq!(errors_of(&domain), vec![MaxDomainSize]);

    let at_limit = &domain[1..];
    assert!(is_valid_domain(at_limit));
}

#[test]
fn level_limits() {
    let domain = format!("{}com", "a.".repeat(127));
    assert_eq!(errors_of(&domain), vec![MaxDomainSize, MaxLevelSize]);

    let domain = format!("{}com", "a.".repeat(126));
    assert_eq!(errors_of(&domain), vec![MaxDomainSize]);

    assert_eq!(errors_of("com"), vec![MinLevelSize]);
    assert_eq!(errors_of("localhost"), vec![MinLevelSize, BogusTld]);
}

#[test]
fn label_length_limit() {
    let domain = format!("{}.example.com", "a".repeat(64));
    assert_eq!(errors_of(&domain), vec![MaxLabelSize]);

    let domain = format!("{}.example.com", "a".repeat(63));
    assert!(is_valid_domain(&domain));
}

#[test]
fn dash_placement() {
    assert_eq!(errors_of("a.-b.c.com"), vec![LabelDashBegin]);
    assert_eq!(errors_of("a.b.c-.com"), vec![LabelDashEnd]);
    // "-com" is both a dash-led label and an implausible TLD
    assert_eq!(errors_of("a.b.c.-com"), vec![LabelDashBegin, BogusTld]);
    assert!(is_valid_domain("my-host.example.com"));
}

#[test]
fn leading_period_is_an_empty_label() {
    let errors = errors_of(".b.c.com");
    assert_eq!(errors, vec![IllegalChars]);
    assert!(!errors.contains(&IllegalStart));
}

#[test]
fn empty_inner_label() {
    assert_eq!(errors_of("example..com"), vec![IllegalChars]);
}

#[test]
fn trailing_period_is_accepted() {
    assert!(is_valid_domain("example.com."));
}

#[test]
fn periods_only() {
    assert_eq!(errors_of("..."), vec![MinLevelSize, BogusTld]);
    assert_eq!(errors_of("."), vec![MinLevelSize, BogusTld]);
}

#[test]
fn illegal_chars_fire_per_label() {
    assert_eq!(errors_of("a*.b*.com"), vec![IllegalChars, IllegalChars]);
    assert_eq!(errors_of("exa mple.com"), vec![IllegalChars]);
    assert_eq!(errors_of("exämple.com"), vec![IllegalChars]);
}

#[test]
fn non_ascii_letters_are_not_folded_to_ascii() {
    // KELVIN SIGN lower-cases to 'k' under Unicode rules
    assert_eq!(errors_of("\u{212A}eenertech.com"), vec![IllegalChars]);
    assert_eq!(errors_of("keenertech.\u{212A}om"), vec![IllegalChars]);
}

#[test]
fn underscore_is_permitted() {
    assert!(is_valid_domain("_dmarc.example.com"));
}

#[test]
fn all_rules_reported_in_order() {
    assert_eq!(
        errors_of("-a-.1"),
        vec![LabelDashBegin, LabelDashEnd, TopNumerical, BogusTld]
    );
}

#[test]
fn tld_plausibility() {
    assert!(is_valid_domain("xn--kbenhavn-54.eu"));
    assert_eq!(errors_of("test.a"), vec![BogusTld]);
    assert_eq!(errors_of("test.domain"), vec![BogusTld]);
    for tld in LONG_TLD_ALLOWLIST.iter() {
        let domain = format!("test.{tld}");
        assert!(is_valid_domain(&domain), "{domain}");
    }
    assert!(is_valid_domain("test.xn--really-long-text"));
    assert!(is_valid_domain("test.XN--P1AI"));
}

#[test]
fn sink_accumulates_across_calls() {
    let mut errors = vec![BogusTld];
    assert!(!validate(Some("keenertech.com"), &mut errors));
    assert_eq!(errors, vec![BogusTld]);

    assert!(!validate(Some("test.a"), &mut errors));
    assert_eq!(errors, vec![BogusTld, BogusTld]);
}

#[test]
fn report_helpers() {
    let report = check_domain("a.b.c.-com");
    assert!(report.has(LabelDashBegin));
    assert!(!report.has(ZeroSize));
    assert_eq!(report.codes(), vec!["label_dash_begin", "bogus_tld"]);
    assert_eq!(
        report.messages(),
        vec![
            "No domain label may begin with a dash",
            "Malformed TLD: Could not possibly match any valid TLD",
        ]
    );
    assert_eq!(check_domain_opt(None).errors, vec![ZeroSize]);
}

#[test]
fn codes_round_trip_through_identifier() {
    for code in ErrorCode::ALL {
        assert_eq!(ErrorCode::from_code(code.code()), Some(code));
    }
    assert_eq!(ErrorCode::from_code("Zero_Size"), None);
}

proptest! {
    #[test]
    fn result_true_iff_no_errors(s in "\\PC{0,300}") {
        let mut errors = Vec::new();
        let ok = validate(Some(s.as_str()), &mut errors);
        prop_assert_eq!(ok, errors.is_empty());
        let report = check_domain(&s);
        prop_assert_eq!(report.ok, report.errors.is_empty());

        let mut prefilled = vec![TopNumerical];
        let ok = validate(Some(s.as_str()), &mut prefilled);
        prop_assert_eq!(ok, prefilled.is_empty());
    }

    #[test]
    fn validation_is_idempotent(s in "[a-zA-Z0-9._ -]{0,80}") {
        prop_assert_eq!(check_domain(&s), check_domain(&s));
    }

    #[test]
    fn validation_is_case_insensitive(s in "[a-zA-Z0-9.-]{0,80}") {
        prop_assert_eq!(check_domain(&s), check_domain(&s.to_ascii_lowercase()));
    }

    #[test]
    fn sink_is_append_only(s in "[a-z0-9.*-]{0,40}") {
        let prefix = vec![ZeroSize, IllegalStart];
        let mut errors = prefix.clone();
        let ok = validate(Some(s.as_str()), &mut errors);
        prop_assert!(!ok);
        prop_assert_eq!(&errors[..prefix.len()], &prefix[..]);
        prop_assert_eq!(&errors[prefix.len()..], &check_domain(&s).errors[..]);
    }

    #[test]
    fn well_formed_domains_pass(
        labels in prop::collection::vec("[a-z0-9]([a-z0-9_-]{0,20}[a-z0-9])?", 1..6),
        tld in "[a-z]{2,3}",
    ) {
        let domain = format!("{}.{tld}", labels.join("."));
        let report = check_domain(&domain);
        prop_assert!(report.ok, "{} -> {:?}", domain, report.errors);
    }
}
