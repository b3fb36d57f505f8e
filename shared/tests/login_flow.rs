mod common;

use common::{api, MemoryTokens};
use kofi_admin_shared::recovery::{Mode, RecoveryFlow, Step, QUESTION_NOT_FOUND, RESET_FAILED, RESET_SUCCEEDED};
use kofi_admin_shared::Session;
use serde_json::json;

fn flow(mode: Mode) -> RecoveryFlow {
    RecoveryFlow::new(mode, "admin@kofidesign.com", "wrong")
}

fn stay(step: Step) -> RecoveryFlow {
    match step {
        Step::Stay(flow) => flow,
        Step::SignedIn => panic!("expected to stay on the login screen"),
    }
}

#[test]
fn test_invalid_credentials_show_backend_message() {
    let tokens = MemoryTokens::default();
    let api = api(tokens.clone());
    api.http()
        .transport()
        .reply(200, json!({ "success": false, "message": "Invalid credentials" }));

    let next = stay(tokio_test::block_on(flow(Mode::Login).submit(&api)));

    assert_eq!(next.error.as_deref(), Some("Invalid credentials"));
    assert!(!next.loading);
    assert_eq!(tokens.current(), None);
}

#[test]
fn test_login_fallback_messages() {
    let api = api(MemoryTokens::default());
    api.http().transport().reply(200, json!({ "success": false }));
    let next = stay(tokio_test::block_on(flow(Mode::Login).submit(&api)));
    assert_eq!(next.error.as_deref(), Some("Login failed"));

    api.http().transport().fail("offline");
    let next = stay(tokio_test::block_on(next.submit(&api)));
    assert_eq!(next.error.as_deref(), Some("Unauthorized access. Please check your credentials."));
}

#[test]
fn test_valid_login_signs_in_and_logout_clears() {
    let tokens = MemoryTokens::default();
    let api = api(tokens.clone());
    api.http().transport().reply(200, json!({ "success": true, "token": "jwt" }));

    let step = tokio_test::block_on(flow(Mode::Login).submit(&api));
    assert_eq!(step, Step::SignedIn);
    assert_eq!(Session::restore(&tokens), Session::SignedIn);

    let session = Session::SignedIn.sign_out(&api);
    assert_eq!(session, Session::SignedOut);
    assert_eq!(tokens.current(), None);

    // Signing out twice is harmless.
    assert_eq!(session.sign_out(&api), Session::SignedOut);
}

#[test]
fn test_full_recovery_round_trip() {
    let api = api(MemoryTokens::default());
    let transport = api.http().transport();
    transport
        .reply(200, json!({ "success": true, "secretQuestion": "First tailor's name?" }))
        .reply(200, json!({ "success": true, "message": "Password reset" }));

    let mut start = flow(Mode::Login);
    start.switch(Mode::Forgot);
    let asked = stay(tokio_test::block_on(start.submit(&api)));
    assert_eq!(asked.mode, Mode::Reset);
    assert_eq!(asked.question, "First tailor's name?");

    let mut answering = asked;
    answering.secret_answer = "Kofi".into();
    answering.new_password = "n3w-pass".into();
    let done = stay(tokio_test::block_on(answering.submit(&api)));

    assert_eq!(done.mode, Mode::Login);
    assert_eq!(done.banner(), Some(RESET_SUCCEEDED));
    assert!(done.password.is_empty());
    assert_eq!(
        transport.last().body,
        kofi_admin_shared::http::RequestBody::Json(json!({
            "email": "admin@kofidesign.com",
            "secretAnswer": "Kofi",
            "newPassword": "n3w-pass"
        }))
    );
}

#[test]
fn test_recovery_failures_stay_put() {
    let api = api(MemoryTokens::default());
    let transport = api.http().transport();
    transport
        .reply(404, json!({ "success": false }))
        .reply(200, json!({ "success": true, "secretQuestion": "" }))
        .reply(400, json!({ "success": false, "message": "Incorrect answer" }))
        .reply(500, json!({}));

    let missing = stay(tokio_test::block_on(flow(Mode::Forgot).submit(&api)));
    assert_eq!(missing.mode, Mode::Forgot);
    assert_eq!(missing.error.as_deref(), Some(QUESTION_NOT_FOUND));

    let blank = stay(tokio_test::block_on(missing.submit(&api)));
    assert_eq!(blank.error.as_deref(), Some(QUESTION_NOT_FOUND));

    let wrong = stay(tokio_test::block_on(flow(Mode::Reset).submit(&api)));
    assert_eq!(wrong.mode, Mode::Reset);
    assert_eq!(wrong.error.as_deref(), Some("Incorrect answer"));
    assert_eq!(wrong.banner(), None);

    let broken = stay(tokio_test::block_on(wrong.submit(&api)));
    assert_eq!(broken.error.as_deref(), Some(RESET_FAILED));
}
