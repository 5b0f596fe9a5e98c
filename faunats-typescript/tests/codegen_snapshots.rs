//! Snapshot tests for TypeScript declaration generation.
//!
//! These tests verify that the generated TypeScript matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use faunats_schema::from_json_str;
use faunats_typescript::{Generator, LanguageCodegen};

const COLLECTIONS: &str = r#"{
    "data": [
        {
            "name": "User",
            "fields": {
                "name": { "signature": "String" },
                "age": { "signature": "Long?" },
                "bestFriend": { "signature": "Ref<User>?" }
            },
            "computed_fields": {
                "displayName": { "body": "(user) => user.name", "signature": "String" }
            }
        },
        {
            "name": "Audit"
        },
        {
            "name": "Post",
            "fields": {
                "title": "String",
                "author": "Ref<User>",
                "tags": "Array<String>?",
                "meta": "{ draft: Boolean, editors?: Array<Ref<User>> }",
                "publishedAt": "Time | Null"
            }
        }
    ]
}"#;

/// Generate the single declaration file for a JSON collection dump.
fn generate(schema_json: &str) -> String {
    let records = from_json_str(schema_json, "collections.json").expect("Failed to parse schema");
    let files = Generator::new(&records).preview();
    assert_eq!(files.len(), 1);
    files
        .into_iter()
        .next()
        .map(|f| f.content)
        .unwrap_or_default()
}

#[test]
fn test_full_document() {
    let content = generate(COLLECTIONS);
    insta::assert_snapshot!("full_document", content);
}

#[test]
fn test_user_scenario() {
    let content = generate(
        r#"[{
            "name": "User",
            "fields": { "name": "String", "age": "Long?", "bestFriend": "Ref<User>?" }
        }]"#,
    );

    let main = content.find("type User = {").unwrap();
    let create = content.find("type User_Create = {").unwrap();
    let wire = content.find("type User_FaunaCreate = {").unwrap();

    let main_block = &content[main..create];
    assert!(main_block.contains("  name: string;\n  age?: number;\n  bestFriend?: User;\n"));

    let create_block = &content[create..wire];
    assert!(create_block.contains("  bestFriend?: User | DocumentReference;\n"));

    let wire_block = &content[wire..];
    assert!(wire_block.contains("  bestFriend?: DocumentReference;\n"));
}

#[test]
fn test_fieldless_collection_leaves_no_trace() {
    let content = generate(COLLECTIONS);
    assert!(!content.contains("Audit"));
    assert!(content.contains("type User = {"));
    assert!(content.contains("type Post = {"));
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(generate(COLLECTIONS), generate(COLLECTIONS));
}
