//! Tests for the update command

use pretty_assertions::assert_eq;
use serde_json::json;
use winrepo_client::{Reason, UpdateResponse};
use winrepo_core::{CommandContext, UpdateRepositoryCommand, WIN};
use winrepo_meta::{ConfigKey, KeyMapping, Setting};
use winrepo_test_utils::fixtures::raw_args;
use winrepo_test_utils::{MockRepositoryApi, RecordingPrompt, Rendered};

fn update(
    family: winrepo_core::RepositoryFamily,
    api: &MockRepositoryApi,
    args: serde_json::Value,
) -> (winrepo_core::Result<()>, RecordingPrompt) {
    let mut prompt = RecordingPrompt::new();
    let result = {
        let mut ctx = CommandContext::new(api, &mut prompt);
        UpdateRepositoryCommand::new(family).run(&mut ctx, raw_args(args))
    };
    (result, prompt)
}

#[test]
fn test_update_sends_only_supplied_settings() {
    let api = MockRepositoryApi::new();

    let (result, prompt) = update(WIN, &api, json!({"repo-id": "win1", "serve-http": "true"}));

    result.unwrap();
    let request = api.updated();
    assert_eq!(request.id, "win1");
    assert_eq!(request.notes, None);
    assert_eq!(request.display_name, None);
    let config = &request.distributor_configs["win_distributor"];
    assert_eq!(config.get("http"), Some(&Setting::Value(json!(true))));
    assert_eq!(config.get("https"), Some(&Setting::Unspecified));
    assert_eq!(config.get("relative_url"), Some(&Setting::Unspecified));
    assert_eq!(
        request.body()["distributor_configs"],
        json!({"win_distributor": {"http": true}})
    );
    assert_eq!(prompt.successes(), vec!["Repository [win1] successfully updated"]);
}

#[test]
fn test_update_passes_notes_without_type_marker() {
    let api = MockRepositoryApi::new();

    let (result, _) = update(WIN, &api, json!({"repo-id": "win1", "note": {"team": "desktop"}}));

    result.unwrap();
    let notes = api.updated().notes.unwrap();
    assert_eq!(serde_json::Value::Object(notes), json!({"team": "desktop"}));
}

#[test]
fn test_update_postponed() {
    let reason = Reason {
        resource_type: "repository".into(),
        resource_id: "win1".into(),
        operation: "sync".into(),
    };
    let api = MockRepositoryApi::new().with_update_response(UpdateResponse::Postponed {
        reasons: vec![reason.clone()],
        spawned_tasks: vec![],
    });

    let (result, prompt) = update(WIN, &api, json!({"repo-id": "win1"}));

    result.unwrap();
    assert!(prompt.successes().is_empty());
    assert!(prompt.paragraphs()[0].starts_with("Repository update postponed"));
    assert!(prompt.rendered.contains(&Rendered::Reasons(vec![reason])));
}

#[test]
fn test_invalid_distributor_option_stops_update() {
    let api = MockRepositoryApi::new();

    let (result, prompt) = update(WIN, &api, json!({"repo-id": "win1", "serve-http": "1x"}));

    assert!(result.is_ok());
    assert_eq!(api.call_count(), 0);
    assert_eq!(prompt.failures().len(), 1);
}

const STRICT_IMPORTER_KEYS: KeyMapping =
    KeyMapping::new(&[ConfigKey::boolean("validate", "validate")]);

#[test]
fn test_invalid_importer_option_skips_distributor() {
    let family = winrepo_core::RepositoryFamily {
        importer_keys: STRICT_IMPORTER_KEYS,
        ..WIN
    };
    let api = MockRepositoryApi::new();

    // Both options are invalid; only the importer failure may be reported.
    let (result, prompt) = update(
        family,
        &api,
        json!({"repo-id": "win1", "validate": "perhaps", "serve-http": "1x"}),
    );

    assert!(result.is_ok());
    assert_eq!(api.call_count(), 0);
    assert_eq!(prompt.failures().len(), 1);
    assert!(prompt.failures()[0].contains("--validate"));
}
