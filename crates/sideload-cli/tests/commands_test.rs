//! End-to-end tests for every command, driven through TestWorld.

use sideload_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_list_plain_table() {
    let world =
        TestWorld::new().with_document("widgets.json", &fixtures::owned_widget_collection(true));

    let result = world.run(&["list", "widgets.json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    insta::assert_snapshot!(result.stdout(), @r"
    ID  TYPE     OWNER  ACTIVE  COUNT  NAME
    -------------------------------------------
    1   widgets  Ada    true    3      Sprocket
    ");
}

#[test]
fn test_list_json_resolves_owner() {
    let world =
        TestWorld::new().with_document("widgets.json", &fixtures::owned_widget_collection(true));

    let result = world.run(&["--format", "json", "list", "widgets.json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_row_count(&json, 1).unwrap();
    assertions::assert_row_relationship(&json, 0, "owner", &["Ada"]).unwrap();
    assert_eq!(json["content"]["rows"][0]["attributes"]["count"], "3");
}

#[test]
fn test_list_sample_with_limit() {
    let world = TestWorld::new().with_sample("widgets_collection.json");

    let result = world
        .run(&["--format", "json", "list", "widgets_collection.json", "--limit", "1"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_row_count(&json, 1).unwrap();
    assert_eq!(json["content"]["total"], 2);
    assert_eq!(json["badge"]["label"], "Showing 1 of 2 resources");
    assertions::assert_row_relationship(&json, 0, "labels", &["", "fragile"]).unwrap();
    assertions::assert_row_relationship(&json, 0, "broker", &["Acme Freight"]).unwrap();
}

#[test]
fn test_list_width_truncates_cells() {
    let world = TestWorld::new().with_sample("widgets_collection.json");

    let result = world
        .run(&["list", "widgets_collection.json", "--width", "6"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Acm..."));
    assert!(!result.stdout().contains("Acme Freight"));
}

#[test]
fn test_list_sparse_fields_pass_through() {
    let world = TestWorld::new().with_sample("widgets_collection.json");

    let result = world
        .run(&["list", "widgets_collection.json", "--fields", "name,owner"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    let bags = json.as_array().unwrap();
    assert_eq!(bags.len(), 2);
    assert_eq!(bags[0]["owner"], fixtures::identifier("users", "9"));
    assert_eq!(bags[1]["count"], "7");
}

#[test]
fn test_show_single_to_many() {
    let world = TestWorld::new().with_document("widget.json", &fixtures::tagged_widget());

    let result = world.run(&["show", "widget.json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    insta::assert_snapshot!(result.stdout(), @r"
    widgets/1

    Attributes:
      (none)

    Relationships:
      tags: 1, 2
    ");
}

#[test]
fn test_show_by_key_in_collection() {
    let world = TestWorld::new().with_sample("widgets_collection.json");

    let result = world
        .run(&["show", "widgets_collection.json", "--id", "widgets|2"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().starts_with("widgets/2\n"));
    assert!(result.stdout().contains("  name: Flange\n"));
    assert!(result.stdout().contains("  owner: 10\n"));
}

#[test]
fn test_show_formats_timestamps() {
    let world = TestWorld::new().with_sample("widgets_collection.json");

    let result = world
        .run(&["show", "widgets_collection.json", "--id", "1"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("  created-at: 2024-03-05 14:07\n"));
    assert!(result.stdout().contains("  parent: -\n"));
}

#[test]
fn test_resolve_owner_side_loaded() {
    let world =
        TestWorld::new().with_document("widgets.json", &fixtures::owned_widget_collection(true));

    let result = world
        .run(&[
            "--format",
            "json",
            "resolve",
            "widgets.json",
            "--relationship",
            "owner",
            "--id",
            "1",
        ])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["state"], "to-one");
    assertions::assert_resolved_targets(&json, &[("9", "Ada")]).unwrap();
}

#[test]
fn test_resolve_owner_not_side_loaded() {
    let world =
        TestWorld::new().with_document("widgets.json", &fixtures::owned_widget_collection(false));

    let result = world
        .run(&["--format", "json", "resolve", "widgets.json", "-r", "owner"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_resolved_targets(&json, &[("9", "")]).unwrap();
}

#[test]
fn test_resolve_plain_to_many() {
    let world = TestWorld::new().with_document("widget.json", &fixtures::tagged_widget());

    let result = world.run(&["resolve", "widget.json", "-r", "tags"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    insta::assert_snapshot!(result.stdout(), @r"
    🔗 2 of 2 target(s) not side-loaded

    widgets/1 tags (to-many)
      tags/1  (not included)
      tags/2  (not included)
    ");
}

#[test]
fn test_inspect_from_stdin() {
    let world = TestWorld::new();
    let body = serde_json::to_vec(&fixtures::owned_widget_collection(false)).unwrap();

    let result = world
        .run_with_stdin(&["--format", "json", "inspect"], Some(&body))
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["source"], "-");
    assert_eq!(json["content"]["kind"], "collection");
    assert_eq!(json["content"]["primary_count"], 1);
    assert_eq!(json["content"]["included_count"], 0);
    assert_eq!(json["content"]["unresolved_targets"], 1);
}

#[test]
fn test_inspect_sample_plain() {
    let world = TestWorld::new().with_sample("widgets_collection.json");

    let result = world.run(&["inspect", "widgets_collection.json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let stdout = result.stdout();
    assert!(stdout.contains("Decoded collection document"));
    assert!(stdout.contains("Primary resources:  2"));
    assert!(stdout.contains("Included resources: 3"));
    assert!(stdout.contains("  next: /v1/widgets?page[offset]=2"));
}

#[test]
fn test_list_keeps_resource_without_id() {
    let world = TestWorld::new().with_body(
        "partial.json",
        br#"{"data": [
            {"type": "widgets", "id": "1"},
            {"type": "widgets", "id": null},
            {"type": "widgets", "id": "3"}
        ]}"#,
    );

    let result = world
        .run(&["--format", "json", "list", "partial.json"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_row_count(&json, 3).unwrap();
    assert_eq!(json["content"]["rows"][1]["id"], "");
    assert!(result.stderr().contains("data[1]"));
}
