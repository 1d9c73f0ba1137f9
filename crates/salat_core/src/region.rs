use salat_types::CalculationMethod;

use CalculationMethod::*;

static REGION_METHODS: &[(&str, CalculationMethod)] = &[
    ("US", Isna),
    ("CA", Isna),
    ("SA", UmmAlQura),
    ("AE", UmmAlQura),
    ("BH", UmmAlQura),
    ("KW", Kuwait),
    ("QA", Qatar),
    ("EG", Egyptian),
    ("LY", Egyptian),
    ("MY", Singapore),
    ("SG", Singapore),
    ("ID", Singapore),
    ("PK", Karachi),
    ("IN", Karachi),
    ("BD", Karachi),
    ("TR", Turkey),
    ("IR", Tehran),
    ("FR", France),
    ("RU", Russia),
];

/// Suggests a calculation method for an ISO 3166-1 alpha-2 country code.
///
/// Case-insensitive. Unlisted codes get the default (ISNA).
pub fn suggest_method(country_code: &str) -> CalculationMethod {
    let code = country_code.trim();
    REGION_METHODS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map_or_else(CalculationMethod::default, |&(_, method)| method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_regions() {
        assert_eq!(suggest_method("EG"), Egyptian);
        assert_eq!(suggest_method("kw"), Kuwait);
        assert_eq!(suggest_method(" id "), Singapore);
        assert_eq!(suggest_method("TR").id(), 13);
    }

    #[test]
    fn test_unknown_falls_back_to_isna() {
        assert_eq!(suggest_method("ZZ"), Isna);
        assert_eq!(suggest_method(""), Isna);
        assert_eq!(suggest_method("GB").id(), 2);
    }
}
