//! Integration test: per-region redraw behavior of the play screen

use rand::rngs::mock::StepRng;
use word_warrior::core::{FrameLoop, LoopSettings, ManualClock, Session};
use word_warrior::screen::{KeyInput, MemoryScreen};
use word_warrior::ui::Region;
use word_warrior::vocabulary::{Vocabulary, Word};

fn playing_loop(screen: MemoryScreen) -> (FrameLoop<MemoryScreen, ManualClock, StepRng>, Session) {
    let vocab = Vocabulary::new(vec![Word::new("apple", "蘋果")]).unwrap();
    let mut session = Session::new(vocab, &mut StepRng::new(0, 0));
    session.begin_play();
    let game = FrameLoop::new(
        screen,
        ManualClock::new(),
        StepRng::new(0, 0),
        LoopSettings::default(),
    );
    (game, session)
}

#[test]
fn test_idle_frames_write_nothing_after_first_draw() {
    let mut screen = MemoryScreen::new(80, 25);
    screen.push_idle(10);
    let (mut game, mut session) = playing_loop(screen);

    game.play_frame(&mut session).unwrap();
    let question_row = Region::Question.row();
    // Background from the battle frame, then the region bar and its text
    assert_eq!(game.screen().writes_on_row(question_row), 3);
    assert_eq!(game.screen().clear_count(), 1);

    game.screen_mut().clear_write_log();
    for _ in 0..9 {
        game.play_frame(&mut session).unwrap();
    }
    assert!(game.screen().writes().is_empty());
}

#[test]
fn test_typing_redraws_only_the_input_region() {
    let mut screen = MemoryScreen::new(80, 25);
    screen.push_idle(1);
    let (mut game, mut session) = playing_loop(screen);
    game.play_frame(&mut session).unwrap();

    game.screen_mut().clear_write_log();
    game.screen_mut().push_key(KeyInput::Char('a'));
    game.screen_mut().push_idle(1);
    game.play_frame(&mut session).unwrap();
    game.play_frame(&mut session).unwrap();

    let screen = game.screen();
    assert_eq!(screen.writes_on_row(Region::Input.row()), 2);
    assert_eq!(screen.writes_on_row(Region::Question.row()), 0);
    assert_eq!(screen.writes_on_row(Region::Cooldowns.row()), 0);
    assert!(screen.row_text(Region::Input.row()).contains("Your Input: a"));
}

#[test]
fn test_cooldown_countdown_updates_while_idle() {
    let mut screen = MemoryScreen::new(80, 25);
    screen.push_key(KeyInput::Char('1'));
    screen.push_idle(10);
    let (mut game, mut session) = playing_loop(screen);
    game.play_frame(&mut session).unwrap();

    game.screen_mut().clear_write_log();
    for _ in 0..10 {
        game.play_frame(&mut session).unwrap();
    }

    let screen = game.screen();
    assert!(screen.writes_on_row(Region::Cooldowns.row()) > 2);
    assert_eq!(screen.writes_on_row(Region::Question.row()), 0);
    assert!(screen.row_text(Region::Hint.row()).contains("Hint: a___e"));
    // Activating a skill never repaints the whole frame
    assert_eq!(screen.clear_count(), 1);
}

#[test]
fn test_hit_repaints_battle_frame() {
    let mut screen = MemoryScreen::new(80, 25);
    screen.type_text("apple");
    screen.push_key(KeyInput::Enter);
    screen.push_idle(1);
    let (mut game, mut session) = playing_loop(screen);

    for _ in 0..7 {
        game.play_frame(&mut session).unwrap();
    }

    let screen = game.screen();
    assert_eq!(screen.clear_count(), 2);
    assert!(screen.contains("5/10"));
    assert!(screen.contains("Hit! Dealt 5 damage!"));
}

#[test]
fn test_resize_forces_full_redraw() {
    let mut screen = MemoryScreen::new(80, 25);
    screen.push_idle(1);
    screen.push_key(KeyInput::Resize);
    screen.push_idle(1);
    let (mut game, mut session) = playing_loop(screen);

    for _ in 0..3 {
        game.play_frame(&mut session).unwrap();
    }
    assert_eq!(game.screen().clear_count(), 2);
}
