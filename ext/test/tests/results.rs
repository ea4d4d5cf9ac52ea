//! `return_graphql_error`

use gqlmatch_test::prelude::*;
use regex::Regex;
use serde_json::json;

#[test]
fn any_error() {
    let result = json!({"errors": [{"message": "boom"}]});
    assert_match(&mut return_graphql_error(), &result);
    assert_no_match(&mut return_graphql_error_with_message("nope"), &result);
}

#[test]
fn literal_and_pattern_messages() {
    let result = json!({"data": null, "errors": [{"message": "Field 'x' doesn't exist"}]});
    assert_match(
        &mut return_graphql_error_with_message("Field 'x' doesn't exist"),
        &result,
    );
    assert_match(
        &mut return_graphql_error_with_message(Regex::new("doesn't exist$").unwrap()),
        &result,
    );
    assert_match(&mut return_graphql_error_matching("^Field").unwrap(), &result);
    assert_no_match(&mut return_graphql_error_matching("^field").unwrap(), &result);
}

#[test]
fn no_errors_never_matches() {
    for result in [json!({"data": {"id": "1"}}), json!({"errors": []})] {
        assert_no_match(&mut return_graphql_error(), &result);
        assert_no_match(&mut return_graphql_error_with_message("boom"), &result);
        assert_no_match(&mut result_error_matcher(None), &result);
    }
    assert_eq!(
        failure_message(&mut return_graphql_error(), &json!({})),
        "Expected to find errors, but there were no errors."
    );
}
