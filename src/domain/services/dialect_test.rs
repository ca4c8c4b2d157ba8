use super::DialectNormalizer;

#[test]
fn it_normalizes_informal_phrasing() {
    let normalizer = DialectNormalizer::default();
    assert_eq!(
        normalizer.normalize("y'all gonna help me or what"),
        "you all going to help me or what"
    );
    assert_eq!(
        normalizer.normalize("I dunno, kinda tired"),
        "I don't know, kind of tired"
    );
}

#[test]
fn it_replaces_every_occurrence() {
    let normalizer = DialectNormalizer::default();
    assert_eq!(
        normalizer.normalize("gonna gonna gonna"),
        "going to going to going to"
    );
}

#[test]
fn it_leaves_other_text_alone() {
    let normalizer = DialectNormalizer::default();
    let text = "Where is the nearest pharmacy?";
    assert_eq!(normalizer.normalize(text), text);
    assert_eq!(normalizer.normalize(""), "");
}

#[test]
fn it_is_case_sensitive() {
    let normalizer = DialectNormalizer::default();
    assert_eq!(normalizer.normalize("Gonna"), "Gonna");
}

#[test]
fn it_is_idempotent() {
    let normalizer = DialectNormalizer::default();
    let inputs = [
        "y'all wanna grab food? I ain't sure, lemme check",
        "gimme a sec, gotta get outta here",
        "I'm finna sorta dunno",
        "nothing to change here",
    ];

    for input in inputs {
        let once = normalizer.normalize(input);
        let twice = normalizer.normalize(&once);
        assert_eq!(once, twice);
    }
}

#[test]
fn it_applies_entries_in_table_order() {
    let normalizer = DialectNormalizer::empty()
        .with_entry("ab", "x")
        .with_entry("xc", "y");
    assert_eq!(normalizer.normalize("abc"), "y");

    let reversed = DialectNormalizer::empty()
        .with_entry("xc", "y")
        .with_entry("ab", "x");
    assert_eq!(reversed.normalize("abc"), "xc");
}

#[test]
fn it_extends_the_default_table() {
    let normalizer = DialectNormalizer::default().with_entry("innit", "is it not");
    assert_eq!(normalizer.normalize("cold innit"), "cold is it not");
    assert_eq!(normalizer.normalize("gonna"), "going to");
}

#[test]
fn it_ignores_empty_patterns() {
    let normalizer = DialectNormalizer::empty().with_entry("", "boom");
    assert_eq!(normalizer.normalize("abc"), "abc");
}
