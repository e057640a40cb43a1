use voxbridge::domain::{TranscriptionResult, WordTimestamp};

#[test]
fn given_absent_fields_when_building_result_then_defaults_to_empty() {
    let result = TranscriptionResult::from_engine_output(None, None);

    assert_eq!(result.text, "");
    assert!(result.words.is_empty());
    assert!(result.is_empty());
}

#[test]
fn given_unordered_words_when_building_result_then_words_are_sorted_by_start() {
    let words = vec![
        WordTimestamp::new("world", 0.6, 1.0),
        WordTimestamp::new("hello", 0.1, 0.5),
    ];

    let result = TranscriptionResult::from_engine_output(Some("hello world".into()), Some(words));

    assert_eq!(result.words[0].word, "hello");
    assert_eq!(result.words[1].word, "world");
    assert!(result.words.windows(2).all(|w| w[0].start <= w[1].start));
}

#[test]
fn given_word_with_inverted_timestamps_when_building_result_then_it_is_dropped() {
    let words = vec![
        WordTimestamp::new("ok", 0.0, 0.4),
        WordTimestamp::new("broken", 0.9, 0.5),
    ];

    let result = TranscriptionResult::from_engine_output(Some("ok broken".into()), Some(words));

    assert_eq!(result.words.len(), 1);
    assert!(result.words.iter().all(WordTimestamp::is_well_formed));
    assert_eq!(result.text, "ok broken");
}

#[test]
fn given_result_when_serialized_then_matches_wire_shape() {
    let result = TranscriptionResult {
        text: "hi".to_string(),
        words: vec![WordTimestamp::new("hi", 0.0, 0.25)],
    };

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"text": "hi", "words": [{"word": "hi", "start": 0.0, "end": 0.25}]})
    );
}
