use super::*;

fn rename(s: &str, deep: bool) -> (String, Edits) {
    let words = words(&["store", "load"]);
    Tokenizer::default()
        .edit(
            s,
            &words,
            &mut |t: &Token| match t.kind() {
                Kind::Local => Some(format!("{}@1", t.text())),
                _ => None,
            },
            deep,
        )
        .unwrap()
}

#[test]
fn test_shallow() {
    let (s, edits) = rename("5 @x store (@x load)", false);
    assert_eq!(s, "5 @x@1 store (@x load)");
    assert_eq!(edits.len(), 1);
}

#[test]
fn test_deep() {
    let (s, edits) = rename("5 @x store (@x load (@x))", true);
    assert_eq!(s, "5 @x@1 store (@x@1 load (@x@1))");
    assert_eq!(edits.len(), 3);
    assert_eq!(edits.to_original(25..29), 21..23);
}

#[test]
fn test_untouched() {
    let (s, edits) = rename("1 2 /* @x */ \"@y\"", true);
    assert_eq!(s, "1 2 /* @x */ \"@y\"");
    assert!(edits.is_empty());
}

#[test]
fn test_replacer_may_shrink() {
    let words = words(&[]);
    let (s, _) = Tokenizer::default()
        .edit(
            "long x long",
            &words,
            &mut |t: &Token| {
                if t.text() == "long" {
                    Some("l".to_string())
                } else {
                    None
                }
            },
            false,
        )
        .unwrap();
    assert_eq!(s, "l x l");
}

#[test]
fn test_lex_error_aborts_edit() {
    let words = words(&[]);
    let e = Tokenizer::default()
        .edit("1 (2 ) 3)", &words, &mut |_: &Token| None, true)
        .unwrap_err();
    assert_eq!(e.code(), ErrorCode::UnrecognizedInput);
    assert_eq!(e.location(), Some(8));
}
