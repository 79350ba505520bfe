// tests/verse_json.rs
//
// Decoding Vec<Verse> IS the shape check: anything that doesn't decode is
// treated as an error for that chapter. These tests pin down what passes
// and what doesn't.

use bible_fetch::verse::{NumOrStr, Verse};

#[test]
fn live_api_shape_decodes() {
    // Field order and string-typed numbers as labs.bible.org sends them.
    let body = r#"[
        {"bookname":"Genesis","chapter":"1","verse":"1","text":"In the beginning..."},
        {"bookname":"Genesis","chapter":"1","verse":"2","text":"Now the earth..."}
    ]"#;

    let verses: Vec<Verse> = serde_json::from_str(body).unwrap();
    assert_eq!(verses.len(), 2);
    assert_eq!(verses[0].bookname, "Genesis");
    assert_eq!(verses[0].chapter, NumOrStr::from("1"));
    assert_eq!(verses[1].verse, NumOrStr::Str("2".to_string()));
}

#[test]
fn integer_chapter_and_verse_also_decode() {
    let body = r#"[{"bookname":"John","chapter":3,"verse":16,"text":"For this is the way..."}]"#;

    let verses: Vec<Verse> = serde_json::from_str(body).unwrap();
    assert_eq!(verses[0].chapter, NumOrStr::Num(3));
    assert_eq!(verses[0].verse, NumOrStr::Num(16));
}

#[test]
fn extra_fields_survive_a_round_trip() {
    // Some psalm verses carry a "title" heading; it must reach the output.
    let body = r#"[{"bookname":"Psalms","chapter":"23","verse":"1","title":"A psalm of David.","text":"The LORD is my shepherd..."}]"#;

    let verses: Vec<Verse> = serde_json::from_str(body).unwrap();
    assert_eq!(
        verses[0].extra.get("title").and_then(|t| t.as_str()),
        Some("A psalm of David.")
    );

    let reencoded = serde_json::to_string(&verses).unwrap();
    assert!(reencoded.contains("A psalm of David."));

    let again: Vec<Verse> = serde_json::from_str(&reencoded).unwrap();
    assert_eq!(again, verses);
}

#[test]
fn verse_missing_text_does_not_decode() {
    let body = r#"[{"bookname":"Genesis","chapter":"1","verse":"1"}]"#;
    assert!(serde_json::from_str::<Vec<Verse>>(body).is_err());
}

#[test]
fn non_array_bodies_do_not_decode() {
    for body in [r#"{"error":"rate limited"}"#, r#""maintenance""#, "<html></html>"] {
        assert!(serde_json::from_str::<Vec<Verse>>(body).is_err(), "{body}");
    }
}
