// tests/login_flow_tests.rs - Login submission behaviour
//
// Drives LoginFlow against the in-memory collaborators from common/ and
// checks the request, the session commit, the navigation and the banners.

mod common;

use common::*;
use pentest_lab_web::web_app::flows::{LoginFlow, LoginOutcome, LOGIN_FAILED};
use pentest_lab_web::web_app::model::{LoginForm, LoginResponse, Persistence};
use pentest_lab_web::web_app::navigation::{NavigationEvent, PostLoginTarget, RecordingNavigator};
use pentest_lab_web::web_app::session::{MemorySessionStore, SessionStore};
use pentest_lab_web::web_app::error::ApiError;

type TestFlow = LoginFlow<FakeApi, MemorySessionStore, RecordingNavigator, RecordingStatus>;

fn flow_with(api: FakeApi, status: RecordingStatus) -> TestFlow {
    LoginFlow {
        api,
        sessions: MemorySessionStore::new(),
        navigator: RecordingNavigator::new(),
        status,
        landing_route: "/".to_string(),
    }
}

fn credentials(remember: bool) -> LoginForm {
    LoginForm {
        username: "acid_burn".to_string(),
        password: "god".to_string(),
        remember,
    }
}

#[tokio::test]
async fn test_login_sends_credentials_once() {
    let status = RecordingStatus::new();
    let api = FakeApi::observing(&status).with_login(Ok(login_success("tok-1", "acid_burn")));
    let flow = flow_with(api.clone(), status);

    flow.submit(credentials(true), None).await;

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].kind, CallKind::Login(credentials(true)));
}

#[tokio::test]
async fn test_login_success_without_redirect_goes_to_landing() {
    let status = RecordingStatus::new();
    let api = FakeApi::new().with_login(Ok(login_success("tok-1", "acid_burn")));
    let flow = flow_with(api, status.clone());

    let outcome = flow.submit(credentials(false), None).await;

    assert_eq!(outcome, LoginOutcome::LoggedIn(PostLoginTarget::Route("/".to_string())));
    assert_eq!(flow.navigator.events(), vec![NavigationEvent::Go("/".to_string())]);
    assert_eq!(status.error(), None);
}

#[tokio::test]
async fn test_login_success_with_redirect_assigns_it_verbatim() {
    let api = FakeApi::new().with_login(Ok(login_success("tok-1", "acid_burn")));
    let flow = flow_with(api, RecordingStatus::new());
    let redirect = "https://shop.pentest.lab/checkout?item=42".to_string();

    let outcome = flow.submit(credentials(false), Some(redirect.clone())).await;

    assert_eq!(outcome, LoginOutcome::LoggedIn(PostLoginTarget::Location(redirect.clone())));
    assert_eq!(flow.navigator.events(), vec![NavigationEvent::Assign(redirect)]);
}

#[tokio::test]
async fn test_login_empty_redirect_counts_as_absent() {
    let api = FakeApi::new().with_login(Ok(login_success("tok-1", "acid_burn")));
    let flow = flow_with(api, RecordingStatus::new());

    flow.submit(credentials(false), Some(String::new())).await;

    assert_eq!(flow.navigator.events(), vec![NavigationEvent::Go("/".to_string())]);
}

#[tokio::test]
async fn test_login_success_commits_session() {
    let api = FakeApi::new().with_login(Ok(login_success("tok-xyz", "acid_burn")));
    let flow = flow_with(api, RecordingStatus::new());

    flow.submit(credentials(true), None).await;

    let session = flow.sessions.current().expect("session committed");
    assert_eq!(session.token, "tok-xyz");
    assert_eq!(session.user.username.as_deref(), Some("acid_burn"));
    assert_eq!(flow.sessions.persistence(), Some(Persistence::Durable));
}

#[tokio::test]
async fn test_login_without_remember_is_tab_scoped() {
    let api = FakeApi::new().with_login(Ok(login_success("tok-xyz", "acid_burn")));
    let flow = flow_with(api, RecordingStatus::new());

    flow.submit(credentials(false), None).await;

    assert_eq!(flow.sessions.persistence(), Some(Persistence::Tab));
}

#[tokio::test]
async fn test_login_server_error_is_shown_verbatim() {
    let status = RecordingStatus::new();
    let api = FakeApi::new().with_login(Err(http_error(401, Some("Invalid credentials"))));
    let flow = flow_with(api, status.clone());

    let outcome = flow.submit(credentials(false), Some("/admin".to_string())).await;

    assert_eq!(outcome, LoginOutcome::Failed("Invalid credentials".to_string()));
    assert_eq!(status.error().as_deref(), Some("Invalid credentials"));
    assert!(flow.navigator.events().is_empty());
    assert!(flow.sessions.current().is_none());
}

#[tokio::test]
async fn test_login_failures_without_server_text_use_fallback() {
    let failures = vec![
        Err(http_error(500, None)),
        Err(ApiError::Network("connection refused".to_string())),
        Err(ApiError::Timeout("Request timed out.".to_string())),
        Err(ApiError::Parse("expected value at line 1".to_string())),
        Ok(LoginResponse::default()),
    ];

    for response in failures {
        let status = RecordingStatus::new();
        let flow = flow_with(FakeApi::new().with_login(response.clone()), status.clone());

        let outcome = flow.submit(credentials(false), None).await;

        assert_eq!(outcome, LoginOutcome::Failed(LOGIN_FAILED.to_string()), "{:?}", response);
        assert_eq!(status.error().as_deref(), Some(LOGIN_FAILED));
        assert!(!status.loading());
    }
}

#[tokio::test]
async fn test_login_success_flag_without_token_is_a_failure() {
    let response = LoginResponse {
        success: true,
        token: None,
        ..LoginResponse::default()
    };
    let flow = flow_with(FakeApi::new().with_login(Ok(response)), RecordingStatus::new());

    let outcome = flow.submit(credentials(false), None).await;

    assert_eq!(outcome, LoginOutcome::Failed(LOGIN_FAILED.to_string()));
    assert!(flow.sessions.current().is_none());
    assert!(flow.navigator.events().is_empty());
}

#[tokio::test]
async fn test_login_clears_previous_error_before_request() {
    let status = RecordingStatus::new();
    status.preset(Some("Invalid credentials"), None);
    let api = FakeApi::observing(&status).with_login(Ok(login_success("tok-1", "acid_burn")));
    let flow = flow_with(api.clone(), status.clone());

    flow.submit(credentials(false), None).await;

    assert_eq!(api.calls()[0].error_at_call, Some(None));
    assert_eq!(status.error(), None);
}

#[tokio::test]
async fn test_login_loading_only_while_request_in_flight() {
    for response in [
        Ok(login_success("tok-1", "acid_burn")),
        Err(http_error(401, Some("Invalid credentials"))),
        Err(ApiError::Network("offline".to_string())),
    ] {
        let status = RecordingStatus::new();
        assert!(!status.loading());

        let api = FakeApi::observing(&status).with_login(response);
        let flow = flow_with(api.clone(), status.clone());
        flow.submit(credentials(false), None).await;

        assert_eq!(api.calls()[0].loading_at_call, Some(true));
        assert!(!status.loading());

        let loading_writes: Vec<StatusEvent> = status
            .events()
            .into_iter()
            .filter(|e| matches!(e, StatusEvent::Loading(_)))
            .collect();
        assert_eq!(loading_writes, vec![StatusEvent::Loading(true), StatusEvent::Loading(false)]);
    }
}
