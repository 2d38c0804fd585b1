use kordon::domain::{
    ChatId, FeedbackButtons, FeedbackKind, FeedbackPayload, FeedbackPayloadError, FeedbackTarget,
    RecordId, UserId,
};

#[test]
fn given_record_payload_when_encoded_then_parses_back_to_same_record() {
    let record_id = RecordId::new();
    let payload = FeedbackPayload::for_record(FeedbackKind::Like, ChatId::new(-1001234567890), record_id);

    let parsed: FeedbackPayload = payload.encode().parse().unwrap();

    assert_eq!(parsed, payload);
    assert_eq!(parsed.record_id(), Some(record_id));
}

#[test]
fn given_supergroup_chat_id_when_encoded_then_fits_callback_limit() {
    let buttons = FeedbackButtons::for_record(ChatId::new(i64::MIN), RecordId::new());

    assert!(buttons.like.encode().len() <= 64);
    assert!(buttons.dislike.encode().len() <= 64);
    assert!(buttons.dislike.encode().starts_with("dislike|"));
}

#[test]
fn given_legacy_user_payload_when_parsed_then_targets_user() {
    let payload: FeedbackPayload = "like|-1001|42".parse().unwrap();

    assert_eq!(payload.kind, FeedbackKind::Like);
    assert_eq!(payload.chat_id, ChatId::new(-1001));
    assert_eq!(payload.target, FeedbackTarget::User(UserId::new(42)));
    assert_eq!(payload.record_id(), None);
}

#[test]
fn given_hyphenated_uuid_when_parsed_then_accepted() {
    let payload: FeedbackPayload = "dislike|5|67e55044-10b1-426f-9247-bb680e5fe0c8"
        .parse()
        .unwrap();

    assert!(payload.record_id().is_some());
}

#[test]
fn given_wrong_field_count_when_parsed_then_rejected() {
    let err = "like|-1001".parse::<FeedbackPayload>().unwrap_err();
    assert!(matches!(err, FeedbackPayloadError::FieldCount(2)));

    let err = "like|-1001|42|extra".parse::<FeedbackPayload>().unwrap_err();
    assert!(matches!(err, FeedbackPayloadError::FieldCount(4)));
}

#[test]
fn given_unknown_kind_when_parsed_then_rejected() {
    let err = "meh|-1001|42".parse::<FeedbackPayload>().unwrap_err();

    assert!(matches!(err, FeedbackPayloadError::InvalidKind(_)));
}

#[test]
fn given_non_numeric_chat_when_parsed_then_rejected() {
    let err = "like|group|42".parse::<FeedbackPayload>().unwrap_err();

    assert!(matches!(err, FeedbackPayloadError::InvalidChatId(_)));
}

#[test]
fn given_garbage_target_when_parsed_then_rejected() {
    let err = "like|-1001|not-a-record".parse::<FeedbackPayload>().unwrap_err();

    assert!(matches!(err, FeedbackPayloadError::InvalidTarget(_)));
}
