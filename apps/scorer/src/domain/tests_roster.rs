use crate::domain::errors::RosterError;
use crate::domain::roster::{add_player, find_player, find_player_by_name, remove_player};

#[test]
fn players_get_counting_ids() {
    let roster = add_player(&[], "ann").unwrap();
    let roster = add_player(&roster, "ben").unwrap();
    assert_eq!(roster[0].id, 0);
    assert_eq!(roster[1].id, 1);
}

#[test]
fn names_are_trimmed_before_storage() {
    let roster = add_player(&[], "  ann  ").unwrap();
    assert_eq!(roster[0].name, "ann");
}

#[test]
fn blank_names_are_rejected() {
    assert_eq!(add_player(&[], "   "), Err(RosterError::EmptyName));
    assert_eq!(add_player(&[], ""), Err(RosterError::EmptyName));
}

#[test]
fn duplicate_names_are_rejected() {
    let roster = add_player(&[], "ann").unwrap();
    assert_eq!(
        add_player(&roster, "ann"),
        Err(RosterError::DuplicateName("ann".into()))
    );
    // Trimming applies before the duplicate check.
    assert_eq!(
        add_player(&roster, " ann "),
        Err(RosterError::DuplicateName("ann".into()))
    );
}

#[test]
fn removed_ids_are_never_reused() {
    let roster = add_player(&[], "ann").unwrap();
    let roster = add_player(&roster, "ben").unwrap();
    let roster = remove_player(&roster, 0);
    assert_eq!(roster.len(), 1);

    let roster = add_player(&roster, "cho").unwrap();
    assert_eq!(roster.last().unwrap().id, 2);
}

#[test]
fn remove_ignores_unknown_ids() {
    let roster = add_player(&[], "ann").unwrap();
    assert_eq!(remove_player(&roster, 9), roster);
}

#[test]
fn lookups_by_id_and_name() {
    let roster = add_player(&[], "ann").unwrap();
    let roster = add_player(&roster, "ben").unwrap();

    assert_eq!(find_player(&roster, 1).map(|p| p.name.as_str()), Some("ben"));
    assert!(find_player(&roster, 9).is_none());
    assert_eq!(find_player_by_name(&roster, "ann").map(|p| p.id), Some(0));
    assert!(find_player_by_name(&roster, "ANN").is_none());
}
