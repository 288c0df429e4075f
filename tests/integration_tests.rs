use httpmock::prelude::*;
use roadmap_client::utils::error::ErrorKind;
use roadmap_client::{
    HttpRoadmapService, MemoryContainer, RenderStyle, RoadmapSubmitter, StaticForm, SubmitEvent,
    SubmitOutcome,
};
use std::time::Duration;

fn submitter_for(server: &MockServer) -> RoadmapSubmitter<HttpRoadmapService> {
    let service = HttpRoadmapService::new(&server.base_url(), Duration::from_secs(5)).unwrap();
    RoadmapSubmitter::new(service)
}

#[tokio::test]
async fn test_end_to_end_learn_go_scenario() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/roadmap")
            .json_body(serde_json::json!({
                "goal": "Learn Go",
                "learning_style": "visual",
                "daily_time": 2
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"step": "Basics", "days_needed": 3},
                {"step": "Concurrency", "days_needed": 5}
            ]));
    });

    let submitter = submitter_for(&server);
    let form = StaticForm::new("Learn Go", "visual", "2");
    let container = MemoryContainer::new();
    let mut event = SubmitEvent::new();

    let outcome = submitter.on_submit(&mut event, &form, &container).await;

    api_mock.assert_hits(1);
    assert!(event.default_prevented());
    assert_eq!(outcome, SubmitOutcome::Rendered { steps: 2 });

    let html = container.contents();
    assert_eq!(html.matches("<li>").count(), 2);
    let basics = html.find("<li>Basics - 3 gün</li>").unwrap();
    let concurrency = html.find("<li>Concurrency - 5 gün</li>").unwrap();
    assert!(basics < concurrency);
}

#[tokio::test]
async fn test_empty_roadmap_is_not_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/roadmap");
        then.status(200).json_body(serde_json::json!([]));
    });

    let submitter = submitter_for(&server);
    let form = StaticForm::new("Learn Go", "visual", "0");
    let container = MemoryContainer::new();

    let outcome = submitter
        .on_submit(&mut SubmitEvent::new(), &form, &container)
        .await;

    assert_eq!(outcome, SubmitOutcome::Rendered { steps: 0 });
    assert_eq!(container.contents(), "<ul>\n</ul>");
}

#[tokio::test]
async fn test_non_json_response_reports_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/roadmap");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<html><body>Internal page</body></html>");
    });

    let submitter = submitter_for(&server);
    let form = StaticForm::new("Learn Go", "visual", "2");
    let container = MemoryContainer::new();

    let outcome = submitter
        .on_submit(&mut SubmitEvent::new(), &form, &container)
        .await;

    assert_eq!(outcome, SubmitOutcome::Failed(ErrorKind::Decode));
    let html = container.contents();
    assert!(html.contains("class=\"roadmap-error\""));
    assert!(!html.contains("<ul>"));
    assert!(!html.contains("Internal page"));
}

#[tokio::test]
async fn test_invalid_utf8_body_is_not_rendered() {
    let mut body = br#"[{"step": "Basics"#.to_vec();
    body.push(0xFF);
    body.extend_from_slice(br#"", "days_needed": 3}]"#);

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/roadmap");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(body);
    });

    let submitter = submitter_for(&server);
    let container = MemoryContainer::new();
    let outcome = submitter
        .on_submit(
            &mut SubmitEvent::new(),
            &StaticForm::new("Learn Go", "visual", "2"),
            &container,
        )
        .await;

    assert_eq!(outcome, SubmitOutcome::Failed(ErrorKind::Decode));
    let html = container.contents();
    assert!(html.contains("roadmap-error"));
    assert!(!html.contains("Basics"));
    assert!(!html.contains('\u{FFFD}'));
}

#[tokio::test]
async fn test_wrapped_response_is_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/roadmap");
        then.status(200).json_body(serde_json::json!({
            "goal": "Learn Go",
            "daily_time": 2,
            "learning_style": "visual",
            "roadmap": [{"step": "Basics", "days_needed": 3}]
        }));
    });

    let submitter = submitter_for(&server);
    let container = MemoryContainer::new();
    let outcome = submitter
        .on_submit(
            &mut SubmitEvent::new(),
            &StaticForm::new("Learn Go", "visual", "2"),
            &container,
        )
        .await;

    assert_eq!(outcome, SubmitOutcome::Failed(ErrorKind::Decode));
}

#[tokio::test]
async fn test_server_error_reports_transport_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/roadmap");
        then.status(500);
    });

    let submitter = submitter_for(&server);
    let form = StaticForm::new("Learn Go", "visual", "2");
    let container = MemoryContainer::new();

    let outcome = submitter
        .on_submit(&mut SubmitEvent::new(), &form, &container)
        .await;

    api_mock.assert();
    assert_eq!(outcome, SubmitOutcome::Failed(ErrorKind::Transport));
    assert!(container.contents().contains("HTTP 500"));
    assert!(form.submit_enabled());
}

#[tokio::test]
async fn test_non_numeric_daily_time_sends_nothing() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/roadmap");
        then.status(200).json_body(serde_json::json!([]));
    });

    let submitter = submitter_for(&server);
    let form = StaticForm::new("Learn Go", "visual", "abc");
    let container = MemoryContainer::new();

    let outcome = submitter
        .on_submit(&mut SubmitEvent::new(), &form, &container)
        .await;

    api_mock.assert_hits(0);
    assert_eq!(outcome, SubmitOutcome::Failed(ErrorKind::Input));
    assert!(container.contents().contains("daily_time"));
}

#[tokio::test]
async fn test_sequential_identical_submissions_are_idempotent() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/roadmap");
        then.status(200).json_body(serde_json::json!([
            {"step": "Basics", "days_needed": 3}
        ]));
    });

    let submitter = submitter_for(&server).with_style(RenderStyle::Detailed);
    let form = StaticForm::new("Learn Go", "visual", "2");
    let container = MemoryContainer::new();

    submitter
        .on_submit(&mut SubmitEvent::new(), &form, &container)
        .await;
    let first = container.contents();
    submitter
        .on_submit(&mut SubmitEvent::new(), &form, &container)
        .await;

    api_mock.assert_hits(2);
    assert_eq!(first, container.contents());
    assert!(first.contains("<h3>Hedefiniz: Learn Go</h3>"));
}

#[tokio::test]
async fn test_double_submit_sends_one_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/roadmap");
        then.status(200)
            .delay(Duration::from_millis(300))
            .json_body(serde_json::json!([{"step": "Basics", "days_needed": 3}]));
    });

    let submitter = submitter_for(&server);
    let form = StaticForm::new("Learn Go", "visual", "2");
    let container = MemoryContainer::new();
    let mut first_event = SubmitEvent::new();
    let mut second_event = SubmitEvent::new();

    let (first, second) = tokio::join!(
        submitter.on_submit(&mut first_event, &form, &container),
        submitter.on_submit(&mut second_event, &form, &container),
    );

    api_mock.assert_hits(1);
    assert_eq!(first, SubmitOutcome::Rendered { steps: 1 });
    assert_eq!(second, SubmitOutcome::Ignored);
    assert!(form.submit_enabled());
}

#[tokio::test]
async fn test_hung_service_times_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/roadmap");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!([]));
    });

    let service = HttpRoadmapService::new(&server.base_url(), Duration::from_secs(10)).unwrap();
    let submitter = RoadmapSubmitter::new(service).with_timeout(Duration::from_millis(250));
    let container = MemoryContainer::new();

    let outcome = submitter
        .on_submit(
            &mut SubmitEvent::new(),
            &StaticForm::new("Learn Go", "visual", "2"),
            &container,
        )
        .await;

    assert_eq!(outcome, SubmitOutcome::Failed(ErrorKind::Transport));
    assert!(!submitter.is_in_flight());
}
