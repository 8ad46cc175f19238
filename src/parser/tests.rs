use super::*;

use crate::time::LrcTime;

const EXAMPLE: &str = r"[ti:test_lyric]
[ar:283375]
[al:TEST ~エラーを回避するための最良の方法~]
[by:283375]
[offset:250]

[00:00.02]Line 1
[00:00.28]Line 2
[00:02.83]Line 3
[00:28.33]Line 4 with TRANSLATION! COOL!!!
[00:28.33]这行有翻译！真他妈的酷！！！
[00:28.33][00:28.33]Repeated
[02:83.00]Sad because secs < 60
[03:23.00]But we can change the rules :)
";

#[test]
fn parses_attributes_and_offset() {
    let result = parse(EXAMPLE, &ParseOptions::default()).unwrap();
    assert_eq!(result.offset, 250);
    assert_eq!(
        result.attributes.get("ti").map(String::as_str),
        Some("test_lyric")
    );
    assert_eq!(result.attributes.get("offset").map(String::as_str), Some("250"));
    assert_eq!(
        result.attributes.keys().map(String::as_str).collect::<Vec<_>>(),
        ["ti", "ar", "al", "by", "offset"]
    );
}

#[test]
fn applies_global_offset_to_every_line() {
    let result = parse(EXAMPLE, &ParseOptions::default()).unwrap();
    assert_eq!(result.lines[0].text, "Line 1");
    assert_eq!(result.lines[0].start_time, LrcTime::new(0, 0, 270));
    assert_eq!(result.lines[3].start_time.total_millis(), 28_580);
}

#[test]
fn sorts_by_time_keeping_document_order_on_ties() {
    let result = parse(EXAMPLE, &ParseOptions::default()).unwrap();
    let texts: Vec<&str> = result.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            "Line 1",
            "Line 2",
            "Line 3",
            "Line 4 with TRANSLATION! COOL!!!",
            "这行有翻译！真他妈的酷！！！",
            "Repeated",
            "Repeated",
            "Sad because secs < 60",
            "But we can change the rules :)",
        ]
    );
}

#[test]
fn combines_same_time_lines_when_requested() {
    let options = ParseOptions {
        parse_translations: true,
        ..ParseOptions::default()
    };
    let result = parse(EXAMPLE, &options).unwrap();
    let texts: Vec<&str> = result.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            "Line 1",
            "Line 2",
            "Line 3",
            "Line 4 with TRANSLATION! COOL!!!",
            "Sad because secs < 60",
        ]
    );
    assert_eq!(
        result.lines[3].translations,
        ["这行有翻译！真他妈的酷！！！", "Repeated", "Repeated"]
    );
    // [02:83.00] and [03:23.00] encode the same time and merge too.
    assert_eq!(
        result.lines[4].translations,
        ["But we can change the rules :)"]
    );
}

#[test]
fn divider_splitting_and_grouping_interact() {
    let raw = "[offset:250]\n[00:00.02]Line 1\n[00:28.33]Line 4 | 翻译";
    let options = ParseOptions {
        parse_translations: true,
        translation_divider: "|".to_owned(),
    };
    let result = parse(raw, &options).unwrap();
    assert_eq!(result.offset, 250);
    let line = &result.lines[1];
    assert_eq!(line.start_time.total_millis(), 28_580);
    assert_eq!(line.text, "Line 4");
    assert_eq!(line.translations, ["翻译"]);
}

#[test]
fn divider_is_ignored_without_parse_translations() {
    let raw = "[00:28.33]Line 4 | 翻译";
    let result = parse(raw, &ParseOptions::default()).unwrap();
    assert_eq!(result.lines[0].text, "Line 4 | 翻译");
    assert!(result.lines[0].translations.is_empty());
}

#[test]
fn negative_offset_result_is_fatal() {
    let raw = "[offset:-500]\n[00:00.02]Line 1";
    let err = parse(raw, &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, error::Parse::NegativeTimestamp(_)));
}

#[test]
fn unparseable_timestamp_is_fatal() {
    let raw = "[99999999999999999999:00.00]overflowing minutes";
    assert!(matches!(
        parse(raw, &ParseOptions::default()),
        Err(error::Parse::MalformedTimestamp(_))
    ));
}

#[test]
fn absurdly_large_minutes_do_not_panic_or_wrap() {
    // u64::MAX minutes is grammar-valid; its total saturates and must still
    // sort after every sane line.
    let raw = "[18446744073709551615:00.00]x\n[00:00.01]y";
    let result = parse(raw, &ParseOptions::default()).unwrap();
    assert_eq!(result.lines[0].text, "y");
    assert_eq!(result.lines[1].text, "x");
    assert_eq!(result.lines[1].start_time.total_millis(), u64::MAX);
}

#[test]
fn repeated_offset_attributes_take_the_last_value() {
    let raw = "[offset:100]\n[offset:250]\n[00:01.00]x";
    let result = parse(raw, &ParseOptions::default()).unwrap();
    assert_eq!(result.offset, 250);
    assert_eq!(result.lines[0].start_time.total_millis(), 1250);
    assert_eq!(result.attributes.get("offset").map(String::as_str), Some("250"));
}

#[test]
fn non_integer_offset_is_kept_as_a_plain_attribute() {
    let raw = "[offset:soon]\n[00:01.00]Line";
    let result = parse(raw, &ParseOptions::default()).unwrap();
    assert_eq!(result.offset, 0);
    assert_eq!(result.attributes.get("offset").map(String::as_str), Some("soon"));
    assert_eq!(result.lines[0].start_time, LrcTime::new(0, 1, 0));
}

#[test]
fn tolerates_stray_lines_and_crlf() {
    let raw = "[ti:first]\r\nnot a lyric line\r\n[ti:second]\r\n[OFFSET:10]\r\n[00:01.00]Line\r\n";
    let result = parse(raw, &ParseOptions::default()).unwrap();
    // Repeated names keep their first position but take the last value.
    assert_eq!(result.attributes.get("ti").map(String::as_str), Some("second"));
    // The reserved offset name is matched case-insensitively.
    assert_eq!(result.offset, 10);
    assert_eq!(result.lines.len(), 1);
    assert_eq!(result.lines[0].start_time.total_millis(), 1010);
}

#[test]
fn timed_line_without_text_is_kept() {
    let result = parse("[00:05.00]", &ParseOptions::default()).unwrap();
    assert_eq!(result.lines.len(), 1);
    assert_eq!(result.lines[0].text, "");
}

#[test]
fn serializes_to_the_documented_shape() {
    let options = ParseOptions {
        parse_translations: true,
        ..ParseOptions::default()
    };
    let result = parse("[ti:t]\n[00:01.00]Line | 翻译", &options).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["offset"], 0);
    assert_eq!(json["lines"][0]["text"], "Line");
    assert_eq!(json["lines"][0]["start_time"]["seconds"], 1);
    assert_eq!(json["lines"][0]["translations"][0], "翻译");
    assert_eq!(json["attributes"]["ti"], "t");
}
