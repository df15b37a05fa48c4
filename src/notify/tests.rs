//! Unit tests for notify module.

use super::*;
use crate::config::SecretString;
use crate::error::NotifyError;
use crate::message::{Attachment, Field, SlackMessage};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn make_message() -> SlackMessage {
    SlackMessage {
        attachments: vec![Attachment {
            title: "[TEST] Network".to_string(),
            color: "danger".to_string(),
            fields: vec![
                Field {
                    title: "Cause".to_string(),
                    value: "1 분 동안 1 회 | NetworkOut > 0".to_string(),
                    short: false,
                },
                Field {
                    title: "Curr State".to_string(),
                    value: "위험".to_string(),
                    short: true,
                },
            ],
        }],
    }
}

fn make_notifier(url: String) -> SlackNotifier {
    SlackNotifier::new(SecretString::new(url), reqwest::Client::new())
}

#[tokio::test]
async fn posts_json_body_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/T000/B000/XXXX"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "attachments": [{
                "title": "[TEST] Network",
                "color": "danger",
                "fields": [
                    {"title": "Cause", "value": "1 분 동안 1 회 | NetworkOut > 0"},
                    {"title": "Curr State", "value": "위험", "short": true}
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let notifier = make_notifier(format!("{}/services/T000/B000/XXXX", mock_server.uri()));
    notifier.send(&make_message()).await.unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn client_error_status_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid_payload"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let notifier = make_notifier(mock_server.uri());
    assert!(notifier.send(&make_message()).await.is_ok());

    mock_server.verify().await;
}

#[tokio::test]
async fn server_error_status_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let notifier = make_notifier(mock_server.uri());
    assert!(notifier.send(&make_message()).await.is_ok());

    mock_server.verify().await;
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // Bind then drop a listener to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let notifier = make_notifier(format!("http://{}/services/T000/B000/XXXX", addr));
    let err = notifier.send(&make_message()).await.unwrap_err();

    assert!(matches!(err, NotifyError::Transport(_)));
}

#[tokio::test]
async fn transport_error_does_not_leak_webhook_url() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let notifier = make_notifier(format!("http://{}/services/T000/B000/s3cr3t", addr));
    let err = notifier.send(&make_message()).await.unwrap_err();

    assert!(!err.to_string().contains("s3cr3t"));
    assert!(!format!("{:?}", err).contains("s3cr3t"));
}

#[test]
fn notifier_debug_redacts_url() {
    let notifier = make_notifier("https://hooks.slack.com/services/T000/B000/XXXX".to_string());
    let debug = format!("{:?}", notifier);

    assert!(debug.contains("SlackNotifier"));
    assert!(!debug.contains("hooks.slack.com"));
}

#[test]
fn notifier_trait_is_object_safe() {
    let notifier: Box<dyn Notifier> = Box::new(make_notifier("http://localhost".to_string()));

    assert_eq!(notifier.name(), "slack");
    assert!(format!("{:?}", notifier).contains("slack"));
}
