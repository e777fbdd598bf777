//! End-to-end session tests: the view-layer contract driven the way a
//! rendering layer would drive it, including game setup and recovery from
//! a bad static source.

use courtier::{
    CardType, DealError, MemoryStorage, PlayerCount, Session, Zone,
};

const SOURCE: &str = r#"{"cards":[
    {"type":"court","title":"Royal Herald","description":"Announce the court."},
    {"type":"court","title":"Court Spy","description":"Peek at secrets."},
    {"type":"court","title":"Cartographer","description":"Reveal the map."},
    {"type":"court","title":"Chancellor","description":"Collect the tithe."},
    {"type":"leader","title":"The Exile","description":"Return in force."},
    {"type":"leader","title":"The Usurper","description":"Seize the throne."},
    {"type":"leader","title":"The Regent","description":"Hold the line."},
    {"type":"lore","title":"Old Maps","description":"Secret ways."},
    {"type":"lore","title":"Forgotten Oath","description":"A debt recalled."},
    {"type":"lore","title":"Border Songs","description":"Raise the hosts."}
]}"#;

fn start() -> Session<MemoryStorage> {
    let (session, err) = Session::start(SOURCE, MemoryStorage::new(), Some(42));
    assert!(err.is_none());
    session
}

/// A full game setup: new game for two players, then tag a drafted leader
/// to a color the way a user would.
#[test]
fn test_game_setup_flow() {
    let mut session = start();

    let summary = session.new_game(PlayerCount::Two);
    assert_eq!(summary.court, 3);
    assert_eq!(summary.leader, 3);
    assert_eq!(summary.lore, 3);

    // View switches to the leader tab and filters the draft pile
    session.show_type(CardType::Leader);
    session.filter_zone(Some(Zone::Draft));
    let drafted: Vec<_> = session.visible_cards().iter().map(|c| c.id).collect();
    assert_eq!(drafted.len(), 3);

    // Red picks a leader
    session.assign(drafted[0], Zone::Red).unwrap();
    session.filter_zone(Some(Zone::Red));
    assert_eq!(session.visible_cards().len(), 1);
}

/// Drawing court cards one at a time until the pool reports empty.
#[test]
fn test_draw_until_court_exhausted() {
    let mut session = start();

    for _ in 0..4 {
        session.draw_court_card().unwrap();
    }
    assert_eq!(session.draw_court_card(), Err(DealError::CourtPoolEmpty));

    session.filter_zone(Some(Zone::Court));
    assert_eq!(session.visible_cards().len(), 4);
}

/// Discarded court cards come back with reinstate, then can be drawn again.
#[test]
fn test_discard_reinstate_draw_cycle() {
    let mut session = start();

    let drawn = session.draw_court_card().unwrap();
    session.discard(drawn).unwrap();

    // Everything else drawn and discarded too
    while let Ok(id) = session.draw_court_card() {
        session.discard(id).unwrap();
    }
    assert_eq!(session.draw_court_card(), Err(DealError::CourtPoolEmpty));

    session.reinstate_discarded();
    assert!(session.draw_court_card().is_ok());
}

/// The search path composes type, zone, and text linearly.
#[test]
fn test_search_path_composition() {
    let mut session = start();
    session.new_game(PlayerCount::Two);

    session.show_type(CardType::Lore);
    session.filter_zone(Some(Zone::Draft));
    session.set_search("the");

    for card in session.visible_cards() {
        assert_eq!(card.card_type, CardType::Lore);
        assert_eq!(card.zone, Zone::Draft);
        assert!(card.matches_text("the"));
    }
}

/// Reset drops the snapshot: a session restarted on the same storage sees
/// a fresh deck from the static source.
#[test]
fn test_reset_then_restart_uses_source() {
    let mut session = start();
    session.new_game(PlayerCount::Three);
    session.reset_all();

    let storage = session.into_storage();
    let (restarted, err) = Session::start(SOURCE, storage, Some(42));

    assert!(err.is_none());
    assert!(restarted.store().iter().all(|c| c.zone == Zone::None));
    assert_eq!(restarted.store().len(), 10);
}
