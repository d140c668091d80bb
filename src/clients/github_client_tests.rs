#![cfg(test)]
use super::{GitHubClient, ReviewRequester};
use crate::errors::AssignmentError;
use crate::types::Repository;
use httpmock::prelude::*;
use serde_json::json;

fn repository() -> Repository {
    Repository {
        owner: "acme".to_string(),
        name: "widgets".to_string(),
    }
}

fn handles(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[tokio::test]
async fn test_request_reviewers_success() {
    let server = MockServer::start_async().await;
    let token = "ghs_test_token";
    let client = GitHubClient::new(server.base_url(), token.to_string());

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/repos/acme/widgets/pulls/42/requested_reviewers")
                .header("Authorization", &format!("Bearer {}", token))
                .header("Accept", "application/vnd.github+json")
                .header_exists("User-Agent")
                .json_body(json!({ "reviewers": ["alice", "carol"] }));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(json!({ "number": 42 }));
        })
        .await;

    let result = client
        .request_reviewers(&repository(), 42, &handles(&["alice", "carol"]))
        .await;
    assert!(result.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_reviewers_trailing_slash_in_base_url() {
    let server = MockServer::start_async().await;
    let client = GitHubClient::new(format!("{}/", server.base_url()), "token".to_string());

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/repos/acme/widgets/pulls/1/requested_reviewers");
            then.status(201);
        })
        .await;

    client
        .request_reviewers(&repository(), 1, &[])
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_reviewers_unauthorized() {
    let server = MockServer::start_async().await;
    let client = GitHubClient::new(server.base_url(), "bad".to_string());

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/repos/acme/widgets/pulls/42/requested_reviewers");
            then.status(401)
                .json_body(json!({ "message": "Bad credentials" }));
        })
        .await;

    let result = client
        .request_reviewers(&repository(), 42, &handles(&["alice"]))
        .await;
    assert!(matches!(result, Err(AssignmentError::AuthenticationError)));
}

#[tokio::test]
async fn test_request_reviewers_not_found() {
    let server = MockServer::start_async().await;
    let client = GitHubClient::new(server.base_url(), "token".to_string());

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/repos/acme/widgets/pulls/9999/requested_reviewers");
            then.status(404).json_body(json!({ "message": "Not Found" }));
        })
        .await;

    match client
        .request_reviewers(&repository(), 9999, &handles(&["alice"]))
        .await
        .unwrap_err()
    {
        AssignmentError::PullRequestNotFound { number } => assert_eq!(number, 9999),
        other => panic!("Expected PullRequestNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_request_reviewers_unprocessable_surfaces_message() {
    let server = MockServer::start_async().await;
    let client = GitHubClient::new(server.base_url(), "token".to_string());

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/repos/acme/widgets/pulls/42/requested_reviewers");
            then.status(422).json_body(json!({
                "message": "Reviews may only be requested from collaborators. One or more of the users or teams you specified is not a collaborator of the acme/widgets repository."
            }));
        })
        .await;

    match client
        .request_reviewers(&repository(), 42, &handles(&["mallory"]))
        .await
        .unwrap_err()
    {
        AssignmentError::Rejected(message) => {
            assert!(message.starts_with("Reviews may only be requested from collaborators."));
        }
        other => panic!("Expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_request_reviewers_error_details() {
    let server = MockServer::start_async().await;
    let client = GitHubClient::new(server.base_url(), "token".to_string());

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/repos/acme/widgets/pulls/42/requested_reviewers");
            then.status(403).json_body(json!({
                "message": "Resource not accessible by integration",
                "errors": [{ "message": "pull-requests: write required" }]
            }));
        })
        .await;

    match client
        .request_reviewers(&repository(), 42, &handles(&["alice"]))
        .await
        .unwrap_err()
    {
        AssignmentError::Forbidden(message) => assert_eq!(
            message,
            "Resource not accessible by integration (pull-requests: write required)"
        ),
        other => panic!("Expected Forbidden, got {other:?}"),
    }
}

#[tokio::test]
async fn test_request_reviewers_server_error_plain_body() {
    let server = MockServer::start_async().await;
    let client = GitHubClient::new(server.base_url(), "token".to_string());

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/repos/acme/widgets/pulls/42/requested_reviewers");
            then.status(502).body("Bad Gateway");
        })
        .await;

    match client
        .request_reviewers(&repository(), 42, &handles(&["alice"]))
        .await
        .unwrap_err()
    {
        AssignmentError::ServerError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("Expected ServerError, got {other:?}"),
    }
}
