use super::*;

#[test]
fn default_channels_match_the_school_roster() {
    let channels = default_channels();
    let names: Vec<&str> = channels.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["geral", "matemática", "português", "história"]);

    let ids: Vec<_> = channels.iter().map(|c| c.id).collect();
    assert_eq!(ids, [1, 2, 3, 4]);
}

#[test]
fn default_users_have_one_instructor_and_two_students() {
    let users = default_users();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0].name, "João Silva");
    assert_eq!(users[0].role, Role::Instructor);
    assert!(users[1..].iter().all(|u| u.role == Role::Student));
    assert!(users.iter().all(|u| u.avatar_ref == AVATAR_PLACEHOLDER));
}

#[test]
fn default_transcript_is_the_canned_opening_exchange() {
    let transcript = default_transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[0].content, "Olá, turma!");
    assert_eq!(transcript[1].author_name, "Maria Santos");
    assert_eq!(transcript[2].timestamp, "10:02");
}

#[test]
fn seeded_timestamps_are_in_order() {
    let stamps: Vec<&str> = default_transcript().iter().map(|m| m.timestamp).collect();
    let mut sorted = stamps.clone();
    sorted.sort_unstable();
    assert_eq!(stamps, sorted);
}
