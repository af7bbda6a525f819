use crate::config::FenceHandling;
use crate::errors::ComponentGptError;
use crate::implementations::response::{
    extract_message_content,
    parse_generation_result,
    strip_code_fence,
};
use crate::traits::completion_client::ClientError;
use crate::tests::support::WELL_FORMED_REPLY;

fn assert_malformed<T: std::fmt::Debug>(result: Result<T, ComponentGptError>) {
    match result {
        Err(ComponentGptError::MalformedResponse(_)) => {}
        other => panic!("expected MalformedResponse, got {:?}", other),
    }
}

#[test]
fn well_formed_reply_is_returned_unchanged() {
    for handling in [FenceHandling::Structural, FenceHandling::FixedOffset] {
        let result = parse_generation_result(WELL_FORMED_REPLY, handling).unwrap();
        assert_eq!(result.component, "a");
        assert_eq!(result.css, "b");
        assert_eq!(result.html, "c");
        assert_eq!(result.story, "d");
    }
}

#[test]
fn fixed_offset_trims_a_json_fence() {
    let fenced = format!("```json\n{}\n```", WELL_FORMED_REPLY);
    let result = parse_generation_result(&fenced, FenceHandling::FixedOffset).unwrap();
    assert_eq!(result.story, "d");
}

#[test]
fn fixed_offset_fails_on_a_bare_fence() {
    let fenced = format!("```\n{}\n```", WELL_FORMED_REPLY);
    assert_malformed(parse_generation_result(&fenced, FenceHandling::FixedOffset));
}

#[test]
fn fixed_offset_fails_on_a_short_fenced_reply() {
    assert_malformed(strip_code_fence("```", FenceHandling::FixedOffset));
}

#[test]
fn structural_strips_fences_of_any_length() {
    let replies = [
        format!("```json\n{}\n```", WELL_FORMED_REPLY),
        format!("```\n{}\n```", WELL_FORMED_REPLY),
        format!("````javascript\n{}\n````\n", WELL_FORMED_REPLY),
        format!("  ```{}```  ", WELL_FORMED_REPLY),
        format!("```json {}```", WELL_FORMED_REPLY),
        format!("```json\r\n{}\r\n```", WELL_FORMED_REPLY),
    ];
    for reply in replies.iter() {
        let result = parse_generation_result(reply, FenceHandling::Structural).unwrap();
        assert_eq!(result.component, "a", "reply: {}", reply);
    }
}

#[test]
fn structural_leaves_unfenced_text_alone() {
    assert_eq!(strip_code_fence("  {\"a\":1}\n", FenceHandling::Structural).unwrap(), "{\"a\":1}");
}

#[test]
fn code_with_backticks_inside_strings_survives() {
    let reply = r#"{"component":"const t = `x`;","css":"","html":"","story":""}"#;
    let fenced = format!("```json\n{}\n```", reply);
    let result = parse_generation_result(&fenced, FenceHandling::Structural).unwrap();
    assert_eq!(result.component, "const t = `x`;");
}

#[test]
fn missing_key_is_malformed() {
    assert_malformed(
        parse_generation_result(r#"{"component":"a","css":"b","html":"c"}"#, FenceHandling::Structural)
    );
}

#[test]
fn prose_is_malformed() {
    assert_malformed(parse_generation_result("Here is your component!", FenceHandling::Structural));
}

#[test]
fn non_object_json_is_malformed() {
    assert_malformed(parse_generation_result(r#"["a","b","c","d"]"#, FenceHandling::Structural));
}

#[test]
fn non_string_field_is_malformed() {
    assert_malformed(
        parse_generation_result(
            r#"{"component":1,"css":"b","html":"c","story":"d"}"#,
            FenceHandling::Structural
        )
    );
}

#[test]
fn envelope_content_is_extracted() {
    let envelope =
        r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"hello"},"finish_reason":"stop"}]}"#;
    assert_eq!(extract_message_content(envelope).unwrap(), "hello");
}

#[test]
fn envelope_without_choices_is_a_parse_error() {
    assert!(matches!(extract_message_content(r#"{"choices":[]}"#), Err(ClientError::Parse(_))));
    assert!(matches!(extract_message_content(r#"{"id":"x"}"#), Err(ClientError::Parse(_))));
    assert!(matches!(extract_message_content("<html>"), Err(ClientError::Parse(_))));
}

#[test]
fn envelope_error_message_is_reported() {
    let err = extract_message_content(r#"{"error":{"message":"model overloaded"}}"#).unwrap_err();
    assert!(err.to_string().contains("model overloaded"));
}

#[test]
fn parse_errors_surface_as_malformed_response() {
    let err: ComponentGptError = ClientError::Parse("bad".to_string()).into();
    assert!(matches!(err, ComponentGptError::MalformedResponse(_)));

    let err: ComponentGptError = (ClientError::Http { status: 500, message: "boom".to_string() }).into();
    assert!(matches!(err, ComponentGptError::Upstream(ref msg) if msg.contains("500")));
}
