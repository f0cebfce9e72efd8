//! Driver layer tests

use std::str::FromStr;

use crate::driver::traits::Selector;
use crate::Error;

#[test]
fn test_selector_parse_css() {
    assert_eq!(Selector::from_str("css").unwrap(), Selector::Css);
}

#[test]
fn test_selector_parse_xpath() {
    assert_eq!(Selector::from_str("xpath").unwrap(), Selector::XPath);
}

#[test]
fn test_selector_rejects_unknown() {
    for by in ["id", "CSS", "XPath", "link_text", ""] {
        let err = Selector::from_str(by).unwrap_err();
        match err {
            Error::UnsupportedSelector(offending) => assert_eq!(offending, by),
            other => panic!("expected UnsupportedSelector, got {other:?}"),
        }
    }
}

#[test]
fn test_selector_display_roundtrip() {
    assert_eq!(Selector::Css.to_string(), "css");
    assert_eq!(Selector::XPath.to_string(), "xpath");
    assert_eq!(
        Selector::from_str(&Selector::XPath.to_string()).unwrap(),
        Selector::XPath
    );
}

#[test]
fn test_unsupported_selector_message_names_value() {
    let err = Selector::from_str("tag_name").unwrap_err();
    assert!(err.to_string().contains("tag_name"));
}
