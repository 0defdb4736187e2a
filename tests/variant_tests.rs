//! Variant modifier tests: assignment properties and the bomb lifecycle.

use tui_fifteen::core::{Session, SessionEvent};
use tui_fifteen::store::MemoryStore;
use tui_fifteen::types::{
    GridSize, MoveOutcome, VariantMode, BOMB_START_TICKS, SECOND_MS,
};

fn session(size: GridSize, mode: VariantMode, seed: u32) -> Session {
    Session::new(size, mode, seed, Box::new(MemoryStore::new()))
}

#[test]
fn test_mode_all_on_4x4_reserves_expected_positions() {
    for seed in 1..=30 {
        let s = session(GridSize::Four, VariantMode::All, seed);
        let variant = s.variant();

        assert_eq!(variant.locked_positions().len(), 2, "seed {seed}");
        assert_eq!(variant.rotatable_positions().len(), 2, "seed {seed}");
        assert_eq!(variant.bombs().len(), 1, "seed {seed}");
        assert_eq!(variant.bombs()[0].remaining, BOMB_START_TICKS);

        let mut all: Vec<usize> = variant.locked_positions().to_vec();
        all.extend_from_slice(variant.rotatable_positions());
        all.push(variant.bombs()[0].pos);

        let mut dedup = all.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), 5, "seed {seed}: positions overlap");
        assert!(
            !all.contains(&s.board().empty_pos()),
            "seed {seed}: empty slot got a modifier"
        );
    }
}

#[test]
fn test_mode_none_reserves_nothing() {
    let s = session(GridSize::Four, VariantMode::None, 9);
    assert!(s.variant().locked_positions().is_empty());
    assert!(s.variant().rotatable_positions().is_empty());
    assert!(s.variant().bombs().is_empty());
}

#[test]
fn test_bomb_counts_down_on_the_session_clock() {
    let mut s = session(GridSize::Four, VariantMode::Bomb, 13);
    let pos = s.variant().bombs()[0].pos;

    // Sub-second ticks accumulate without firing.
    s.tick(SECOND_MS / 2);
    assert_eq!(s.variant().bomb_ticks(pos), Some(BOMB_START_TICKS));
    s.tick(SECOND_MS / 2);
    assert_eq!(s.variant().bomb_ticks(pos), Some(BOMB_START_TICKS - 1));
}

#[test]
fn test_bomb_expiry_locks_position_exactly_once() {
    let mut s = session(GridSize::Four, VariantMode::Bomb, 13);
    let pos = s.variant().bombs()[0].pos;

    for _ in 0..BOMB_START_TICKS {
        s.tick(SECOND_MS);
    }

    assert!(s.variant().is_locked(pos));
    assert_eq!(s.variant().bomb_ticks(pos), None);
    let lock_events: Vec<_> = s
        .take_events()
        .into_iter()
        .filter(|e| matches!(e, SessionEvent::BombLocked(_)))
        .collect();
    assert_eq!(lock_events, vec![SessionEvent::BombLocked(pos)]);

    // Selecting the expired bomb is now rejected.
    assert_eq!(s.attempt_move(pos), MoveOutcome::Rejected);

    // Further ticking emits nothing new.
    s.tick(5 * SECOND_MS);
    assert!(s
        .take_events()
        .iter()
        .all(|e| !matches!(e, SessionEvent::BombLocked(_))));
}

#[test]
fn test_undo_does_not_unlock_an_expired_bomb() {
    let mut s = session(GridSize::Four, VariantMode::Bomb, 13);
    let bomb_pos = s.variant().bombs()[0].pos;

    // Make a move before the bomb expires.
    let p = (0..16)
        .find(|&p| {
            s.board().is_adjacent_to_empty(p)
                && !s.variant().is_locked(p)
                && !s.variant().is_rotatable(p)
        })
        .unwrap();
    assert_eq!(s.attempt_move(p), MoveOutcome::Slid);

    for _ in 0..BOMB_START_TICKS {
        s.tick(SECOND_MS);
    }
    assert!(s.variant().is_locked(bomb_pos));

    assert!(s.undo());
    assert!(
        s.variant().is_locked(bomb_pos),
        "undo must not version variant state"
    );
    assert!(s.redo());
    assert!(s.variant().is_locked(bomb_pos));
}

#[test]
fn test_bombs_only_tick_in_bomb_modes() {
    let mut s = session(GridSize::Four, VariantMode::Locked, 17);
    s.tick(20 * SECOND_MS);
    assert!(s
        .take_events()
        .iter()
        .all(|e| !matches!(e, SessionEvent::BombLocked(_))));
}

#[test]
fn test_regenerate_cancels_bomb_countdown() {
    let mut s = session(GridSize::Four, VariantMode::Bomb, 13);
    s.tick(14 * SECOND_MS);

    s.regenerate(GridSize::Four, VariantMode::Bomb);
    let pos = s.variant().bombs()[0].pos;
    assert_eq!(s.variant().bomb_ticks(pos), Some(BOMB_START_TICKS));

    // One more second must not fire the old, nearly-expired countdown.
    s.tick(SECOND_MS);
    assert_eq!(s.variant().bomb_ticks(pos), Some(BOMB_START_TICKS - 1));
    assert!(s
        .take_events()
        .iter()
        .all(|e| !matches!(e, SessionEvent::BombLocked(_))));
}
