//! End-to-end workflows against the in-memory server
//!
//! Each test drives several commands through one server, the way an
//! administrator would from the shell.

use pretty_assertions::assert_eq;
use serde_json::json;
use winrepo_client::{Reason, SpawnedTask, UpdateResponse};
use winrepo_core::{
    CommandContext, CreateRepositoryCommand, ListOptions, ListRepositoriesCommand,
    UpdateRepositoryCommand, WIN,
};
use winrepo_meta::Setting;
use winrepo_test_utils::fixtures::{raw_args, typed_repo, untyped_repo};
use winrepo_test_utils::{ApiCall, MockRepositoryApi, RecordingPrompt};

fn create(api: &MockRepositoryApi, prompt: &mut RecordingPrompt, args: serde_json::Value) {
    let mut ctx = CommandContext::new(api, prompt);
    CreateRepositoryCommand::new(WIN)
        .run(&mut ctx, raw_args(args))
        .unwrap();
}

fn update(api: &MockRepositoryApi, prompt: &mut RecordingPrompt, args: serde_json::Value) {
    let mut ctx = CommandContext::new(api, prompt);
    UpdateRepositoryCommand::new(WIN)
        .run(&mut ctx, raw_args(args))
        .unwrap();
}

fn list(api: &MockRepositoryApi, prompt: &mut RecordingPrompt, options: ListOptions) {
    let mut ctx = CommandContext::new(api, prompt);
    ListRepositoriesCommand::new(WIN)
        .run(&mut ctx, options)
        .unwrap();
}

#[test]
fn test_created_repository_is_listed() {
    let api = MockRepositoryApi::new()
        .with_repositories(vec![typed_repo("rpm1", "rpm-repo"), untyped_repo("plain")]);
    let mut prompt = RecordingPrompt::new();

    create(
        &api,
        &mut prompt,
        json!({"repo-id": "win1", "display-name": "Desktop packages"}),
    );
    list(
        &api,
        &mut prompt,
        ListOptions {
            details: true,
            all: true,
            ..ListOptions::default()
        },
    );

    assert_eq!(prompt.successes(), vec!["Successfully created repository [win1]"]);
    assert_eq!(
        prompt.titles(),
        vec!["Windows Repositories", "Other Repositories"]
    );
    assert_eq!(prompt.document_ids(), vec!["win1", "rpm1", "plain"]);

    let win1 = prompt.documents()[0];
    assert_eq!(win1["display_name"], json!("Desktop packages"));
    assert_eq!(win1["notes"], json!({"_repo-type": "win-repo"}));
    let distributors = win1["distributors"].as_array().unwrap();
    assert_eq!(distributors.len(), 1);
    assert_eq!(distributors[0]["id"], json!("win_distributor"));
    assert_eq!(
        distributors[0]["config"],
        json!({"relative_url": "win1", "http": false, "https": true})
    );
}

#[test]
fn test_create_then_update_sends_only_changes() {
    let api = MockRepositoryApi::new();
    let mut prompt = RecordingPrompt::new();

    create(&api, &mut prompt, json!({"repo-id": "win1"}));
    update(
        &api,
        &mut prompt,
        json!({"repo-id": "win1", "serve-http": "true", "checksum-type": ""}),
    );

    let request = api.updated();
    assert_eq!(request.id, "win1");
    assert_eq!(request.notes, None);
    let config = &request.distributor_configs["win_distributor"];
    assert_eq!(config.get("http"), Some(&Setting::Value(json!(true))));
    assert_eq!(config.get("checksum_type"), Some(&Setting::Remove));
    assert_eq!(config.get("https"), Some(&Setting::Unspecified));
    assert_eq!(config.get("relative_url"), Some(&Setting::Unspecified));
    assert_eq!(
        request.body()["distributor_configs"],
        json!({"win_distributor": {"http": true, "checksum_type": null}})
    );
    assert_eq!(
        prompt.successes(),
        vec![
            "Successfully created repository [win1]",
            "Repository [win1] successfully updated"
        ]
    );
}

#[test]
fn test_invalid_update_leaves_server_untouched() {
    let api = MockRepositoryApi::new();
    let mut prompt = RecordingPrompt::new();

    create(&api, &mut prompt, json!({"repo-id": "win1"}));
    update(
        &api,
        &mut prompt,
        json!({"repo-id": "win1", "serve-https": "sometimes"}),
    );

    assert_eq!(api.call_count(), 1);
    assert!(matches!(api.calls()[0], ApiCall::Create(_)));
    assert_eq!(prompt.failures().len(), 1);
    assert!(prompt.failures()[0].contains("--serve-https"));
}

#[test]
fn test_postponed_update_reports_blocking_operations() {
    let api = MockRepositoryApi::new().with_update_response(UpdateResponse::Postponed {
        reasons: vec![Reason {
            resource_type: "repository".into(),
            resource_id: "win1".into(),
            operation: "sync".into(),
        }],
        spawned_tasks: vec![SpawnedTask {
            task_id: "task-1".into(),
            href: Some("/pulp/api/v2/tasks/task-1/".into()),
        }],
    });
    let mut prompt = RecordingPrompt::new();

    create(&api, &mut prompt, json!({"repo-id": "win1"}));
    update(
        &api,
        &mut prompt,
        json!({"repo-id": "win1", "display-name": "Renamed"}),
    );

    assert_eq!(prompt.successes(), vec!["Successfully created repository [win1]"]);
    assert_eq!(prompt.paragraphs().len(), 1);
    assert!(prompt.paragraphs()[0].starts_with("Repository update postponed"));
}

#[test]
fn test_summary_listing_after_several_creates() {
    let api = MockRepositoryApi::new();
    let mut prompt = RecordingPrompt::new();

    create(&api, &mut prompt, json!({"repo-id": "win1", "display-name": "One"}));
    create(&api, &mut prompt, json!({"repo-id": "win-long", "display-name": "Two"}));
    list(
        &api,
        &mut prompt,
        ListOptions {
            summary: true,
            ..ListOptions::default()
        },
    );

    assert_eq!(prompt.paragraphs(), vec!["win1      One", "win-long  Two"]);
    assert_eq!(api.list_count(), 1);
}
