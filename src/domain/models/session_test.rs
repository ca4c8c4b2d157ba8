use super::Language;
use super::Session;

#[test]
fn it_creates_short_ids() {
    let id = Session::create_id();
    let parts = id.split('-').collect::<Vec<&str>>();

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].len(), 8);
    assert_eq!(parts[1].len(), 4);
}

#[test]
fn it_starts_with_an_empty_conversation() {
    let session = Session::new(Language::Es);
    assert!(session.conversation.is_empty());
    assert_eq!(session.language, Language::Es);
}

#[test]
fn it_isolates_sessions() {
    let first = Session::new(Language::En);
    let mut second = Session::new(Language::En);
    second.select_language(Language::Ja);

    assert_ne!(first.id, second.id);
    assert_eq!(first.language, Language::En);
    assert_eq!(second.language, Language::Ja);
}
