//! Tests for the process-wide locale behind the `global-locale` feature.
#![cfg(feature = "global-locale")]

use dotloc::{LocaleNode, params};

#[test]
fn global_set_and_translate() {
    dotloc::set(LocaleNode::from_json_str(r#"{"greet": "Hi {{name}}"}"#).unwrap());
    assert_eq!(
        dotloc::translate("greet", &params! { "name" => "Kim" }).unwrap(),
        "Hi Kim"
    );
    assert!(dotloc::with_locale(|locale| locale.current().is_some()));
}
