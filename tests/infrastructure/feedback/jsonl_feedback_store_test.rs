use chrono::{DateTime, Utc};
use tempfile::TempDir;

use kordon::application::ports::FeedbackStore;
use kordon::domain::{
    ChatId, FeedbackKind, FeedbackRecord, FlaggedRecord, TrainingRecord, UserId,
};
use kordon::infrastructure::feedback::JsonlFeedbackStore;

fn timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn flagged(text: &str) -> TrainingRecord {
    FlaggedRecord::new(UserId::new(42), ChatId::new(-1001), text.to_string(), timestamp()).into()
}

#[tokio::test]
async fn given_missing_parent_dir_when_creating_store_then_dir_is_created() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data").join("training_data.jsonl");

    let store = JsonlFeedbackStore::new(path.clone()).unwrap();

    assert!(path.parent().unwrap().is_dir());
    assert_eq!(store.path(), path.as_path());
}

#[tokio::test]
async fn given_several_records_when_appending_then_one_json_object_per_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("training_data.jsonl");
    let store = JsonlFeedbackStore::new(path.clone()).unwrap();

    let first = flagged("ик, налей");
    let second: TrainingRecord = FeedbackRecord {
        timestamp: timestamp(),
        admin_id: UserId::new(7),
        chat_id: ChatId::new(-1001),
        feedback: FeedbackKind::Like,
        original_text: "ик, налей".to_string(),
        flagged_record_id: None,
    }
    .into();

    store.append(&first).await.unwrap();
    store.append(&second).await.unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(serde_json::from_str::<TrainingRecord>(lines[0]).unwrap(), first);
    assert_eq!(serde_json::from_str::<TrainingRecord>(lines[1]).unwrap(), second);
}

#[tokio::test]
async fn given_existing_file_when_reopening_store_then_records_are_appended() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("training_data.jsonl");

    JsonlFeedbackStore::new(path.clone())
        .unwrap()
        .append(&flagged("one"))
        .await
        .unwrap();
    JsonlFeedbackStore::new(path.clone())
        .unwrap()
        .append(&flagged("two"))
        .await
        .unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[tokio::test]
async fn given_concurrent_appends_when_writing_then_no_line_is_interleaved() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("training_data.jsonl");
    let store = std::sync::Arc::new(JsonlFeedbackStore::new(path.clone()).unwrap());

    let mut handles = Vec::new();
    for i in 0..20 {
        let store = std::sync::Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.append(&flagged(&format!("message {}", i))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(content.lines().count(), 20);
    for line in content.lines() {
        serde_json::from_str::<TrainingRecord>(line).unwrap();
    }
}
