use hookconf_core::Numeric;
use hookconf_core::coercion::{to_array, to_bool, to_numeric};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("true", true)]
#[case("1", true)]
#[case("yes", false)]
#[case("TRUE", false)]
#[case("True", false)]
#[case("0", false)]
#[case("", false)]
#[case(" true", false)]
fn test_to_bool(#[case] raw: &str, #[case] expected: bool) {
    assert_eq!(to_bool(raw), expected);
}

#[rstest]
#[case("a,b, c", &["a", "b", "c"])]
#[case("a,  b", &["a", " b"])]
#[case("single", &["single"])]
#[case("a,\tb", &["a", "b"])]
#[case("a ,b", &["a ", "b"])]
#[case("a,,b", &["a", "", "b"])]
#[case("a,\nb", &["a", "b"])]
#[case("a,\u{a0}b", &["a", "\u{a0}b"])]
#[case("a, \u{2003}b", &["a", "\u{2003}b"])]
fn test_to_array(#[case] raw: &str, #[case] expected: &[&str]) {
    assert_eq!(to_array(raw), expected);
}

#[rstest]
#[case("42", Numeric::Integer(42))]
#[case("007", Numeric::Integer(7))]
#[case("4.2", Numeric::Float(4.2))]
#[case("-5", Numeric::Float(-5.0))]
#[case("+3", Numeric::Float(3.0))]
#[case(".5", Numeric::Float(0.5))]
#[case("1e3", Numeric::Float(1000.0))]
#[case(" 12 ", Numeric::Float(12.0))]
fn test_to_numeric(#[case] raw: &str, #[case] expected: Numeric) {
    assert_eq!(to_numeric(raw), Some(expected));
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("4.2.1")]
#[case("0x1A")]
#[case("12abc")]
#[case("-")]
#[case("\u{a0}12")]
fn test_to_numeric_rejects(#[case] raw: &str) {
    assert_eq!(to_numeric(raw), None);
}

#[test]
fn test_overlong_digit_string_is_still_numeric() {
    let value = to_numeric("99999999999999999999").unwrap();
    assert!(matches!(value, Numeric::Float(_)));
}

#[test]
fn test_numeric_accessors() {
    assert_eq!(Numeric::Integer(3).as_f64(), 3.0);
    assert_eq!(Numeric::Float(3.9).as_i64(), 3);
    assert_eq!(Numeric::Float(4.2).to_string(), "4.2");
}
