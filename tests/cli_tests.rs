//! CLI integration tests running the gg binary
//! Usage errors exit non-zero; query failures print a message and exit zero

mod support;

use serde_json::json;
use support::{Workspace, pulls, repos};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_cli_help() {
    let output = Workspace::new().run(&["--help"]);

    assert_eq!(output.status, 0);
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("repo"));
    assert!(output.stdout.contains("pr"));
}

#[test]
fn test_cli_invalid_subcommand() {
    let output = Workspace::new().run(&["invalid-command"]);

    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("unrecognized subcommand"));
}

#[test]
fn test_pr_author_missing_username() {
    let output = Workspace::new().run(&["pr", "author"]);

    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("<USERNAME>"));
}

#[test]
fn test_repo_list_owned_and_followed_are_exclusive() {
    let output = Workspace::new().run(&["repo", "list", "octocat", "--owned", "--followed"]);

    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("cannot be used with"));
}

#[test]
fn test_missing_explicit_config_file() {
    let output = Workspace::new().run(&["pr", "author", "octocat", "--config", "nonexistent.yaml"]);

    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("Failed to read config file"));
}

#[test]
fn test_missing_token_is_printed_and_exits_zero() {
    let output = Workspace::new().run(&["pr", "repo", "octocat/hello"]);

    assert_eq!(output.status, 0);
    assert!(output.stdout.contains("could not find GITHUB_ACCESS_TOKEN"));
}

#[test]
fn test_invalid_repo_path_is_printed_and_exits_zero() {
    let workspace = Workspace::new()
        .with_token()
        .with_config("http://127.0.0.1:9", "");

    let output = workspace.run(&["repo", "workflow", "not-a-path"]);

    assert_eq!(output.status, 0);
    assert_eq!(output.stdout.trim(), "invalid repo path 'not-a-path'");
}

#[test]
fn test_completions() {
    let output = Workspace::new().run(&["completions", "bash"]);

    assert_eq!(output.status, 0);
    assert!(output.stdout.contains("gg"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_repo_list_prints_sections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos(&["alpha", "beta"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/subscriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos(&["gamma"])))
        .mount(&server)
        .await;
    let workspace = Workspace::new()
        .with_token()
        .with_config(&server.uri(), "");

    let output = workspace.run(&["repo", "list", "octocat"]);

    assert_eq!(output.status, 0);
    assert_eq!(
        output.stdout,
        "\n***OWNED REPOS***\nalpha\nbeta\n\n***FOLLOWED REPOS***\ngamma\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pr_repo_status_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello/pulls"))
        .and(query_param("per_page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pulls(&[("Add paging", "aaa"), ("Fix typo", "bbb")])),
        )
        .mount(&server)
        .await;
    for (sha, state) in [("aaa", "success"), ("bbb", "failure")] {
        Mock::given(method("GET"))
            .and(path(format!("/repos/octocat/hello/commits/{sha}/status")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "state": state, "sha": sha, "total_count": 1 })),
            )
            .mount(&server)
            .await;
    }
    let workspace = Workspace::new()
        .with_token()
        .with_config(&server.uri(), "default_size: 2\n");

    let output = workspace.run(&["pr", "repo", "octocat/hello", "--status"]);

    assert_eq!(output.status, 0);
    assert_eq!(output.stdout, "Add paging: success\nFix typo: failure\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pr_repo_plain_lines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello/pulls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pulls(&[("Add paging", "aaa")])))
        .mount(&server)
        .await;
    let workspace = Workspace::new()
        .with_token()
        .with_config(&server.uri(), "");

    let output = workspace.run(&["pr", "repo", "octocat/hello"]);

    assert_eq!(output.status, 0);
    assert_eq!(output.stdout, "Add paging 2023-09-23 10:00:00 UTC\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_user_message_names_token_variable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/issues"))
        .respond_with(ResponseTemplate::new(422).set_body_string("Validation Failed"))
        .mount(&server)
        .await;
    let workspace = Workspace::new()
        .with_token()
        .with_config(&server.uri(), "");

    let output = workspace.run(&["pr", "author", "ghost"]);

    assert_eq!(output.status, 0);
    assert!(output.stdout.contains("make sure the username is valid"));
    assert!(output.stdout.contains(&format!("{} is set and valid", support::TOKEN_VAR)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_pr_author_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/issues"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(support::search_results(&["First"])),
        )
        .mount(&server)
        .await;
    let workspace = Workspace::new()
        .with_token()
        .with_config(&server.uri(), "");

    let output = workspace.run(&["pr", "author", "octocat", "--json"]);

    assert_eq!(output.status, 0);
    let parsed: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(parsed[0]["title"], "First");
}
