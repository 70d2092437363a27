// Host-side tests for contact form validation and the mailto fallback.

use portfolio_core::contact::*;

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

fn sample() -> ContactMessage {
    ContactMessage::from_fields(s("Ada"), s("ada@example.com"), s("Hello"), s("Line one\nLine two"))
        .unwrap()
}

#[test]
fn every_field_is_required() {
    assert_eq!(
        ContactMessage::from_fields(None, s("a@b"), s("x"), s("y")),
        Err(ContactError::MissingField("name"))
    );
    assert_eq!(
        ContactMessage::from_fields(s("n"), s("a@b"), s(""), s("y")),
        Err(ContactError::MissingField("subject"))
    );
    assert_eq!(
        ContactMessage::from_fields(s("n"), s("a@b"), s("x"), None),
        Err(ContactError::MissingField("message"))
    );
    assert_eq!(
        ContactError::MissingField("email").to_string(),
        "missing required field `email`"
    );
}

#[test]
fn template_params_reply_to_sender() {
    let msg = sample();
    let params = msg.template_params("owner@example.com");
    let get = |k: &str| params.iter().find(|(key, _)| *key == k).map(|(_, v)| *v);
    assert_eq!(get("from_name"), Some("Ada"));
    assert_eq!(get("reply_to"), Some("ada@example.com"));
    assert_eq!(get("to_email"), Some("owner@example.com"));
    assert_eq!(get("message"), Some("Line one\nLine two"));
}

#[test]
fn mailto_draft_carries_the_whole_message() {
    let draft = sample().mailto_draft("Owner", "example.org");
    assert_eq!(draft.subject, "[Portfolio] Hello");
    assert!(draft.body.starts_with("Bonjour Owner,\n\n"));
    assert!(draft.body.contains("Nom: Ada\nEmail: ada@example.com\nSujet: Hello\n"));
    assert!(draft.body.contains("Message:\nLine one\nLine two\n"));
    assert!(draft.body.ends_with("Message envoyé depuis example.org"));
}

#[test]
fn mailto_url_uses_supplied_encoder() {
    let draft = MailtoDraft {
        subject: "a b".to_string(),
        body: "c".to_string(),
    };
    let url = draft.to_url("me@example.com", |v| v.replace(' ', "%20"));
    assert_eq!(url, "mailto:me@example.com?subject=a%20b&body=c");
}

#[test]
fn only_final_statuses_clear_themselves() {
    assert!(!StatusKind::Loading.auto_clears());
    assert!(StatusKind::Success.auto_clears());
    assert!(StatusKind::Error.auto_clears());
    assert_eq!(StatusKind::Error.class_name(), "form-status error");
}
