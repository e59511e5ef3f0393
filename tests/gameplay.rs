//! End-to-end game scenarios through the library API and text mode.

use hexordle::commands::run_simple;
use hexordle::core::{Feedback, MAX_GUESSES, Mark, Word};
use hexordle::game::{GameLoop, InputError, Phase, Reply, SequenceChooser};
use hexordle::wordlists::Vocabulary;
use hexordle::wordlists::loader::words_from_slice;
use std::io::Cursor;

const GUESSES: &[&str] = &["garden", "bridge", "xxxxxx", "lpnate", "atplen", "eeeeee"];

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn game(secrets: &[&str]) -> GameLoop<SequenceChooser> {
    let vocabulary = Vocabulary::new(words_from_slice(GUESSES), words_from_slice(secrets)).unwrap();
    GameLoop::new(
        vocabulary,
        SequenceChooser::new(words_from_slice(secrets)).unwrap(),
    )
}

fn marks(guess: &str, secret: &str) -> Vec<Mark> {
    Feedback::evaluate(&word(guess), &word(secret)).marks().to_vec()
}

#[test]
fn exact_guess_is_all_correct() {
    assert_eq!(marks("planet", "planet"), vec![Mark::Correct; 6]);
}

#[test]
fn permutation_without_fixed_points_is_all_misplaced() {
    assert_eq!(marks("lpnate", "planet"), vec![Mark::Misplaced; 6]);
}

#[test]
fn permutation_keeps_shared_position_correct() {
    // "atplen" and "planet" both have 'e' fifth
    let feedback = Feedback::evaluate(&word("atplen"), &word("planet"));
    assert_eq!(feedback.codes(), "YYYYGY");
}

#[test]
fn disjoint_guess_is_all_incorrect() {
    assert_eq!(marks("xxxxxx", "planet"), vec![Mark::Incorrect; 6]);
}

#[test]
fn repeated_letters_limited_by_secret() {
    let feedback = Feedback::evaluate(&word("eeeeee"), &word("teeter"));
    assert_eq!(6 - feedback.count(Mark::Incorrect), 3);
}

#[test]
fn win_on_first_guess() {
    let mut game = game(&["planet"]);
    let reply = game.submit("planet");

    assert!(matches!(reply, Reply::Won { guesses: 1, .. }));
    assert_eq!(game.phase(), Phase::AwaitingReplayChoice);
    assert_eq!(game.statistics().wins_in(1), 1);
}

#[test]
fn six_misses_lose_the_round() {
    let mut game = game(&["planet"]);
    for _ in 0..MAX_GUESSES - 1 {
        assert!(matches!(game.submit("garden"), Reply::Guessed(_)));
    }

    match game.submit("garden") {
        Reply::Lost { secret, .. } => assert_eq!(secret, word("planet")),
        other => panic!("expected a loss, got {other:?}"),
    }
    assert!(game.session().is_lost());
    assert_eq!(game.phase(), Phase::AwaitingReplayChoice);
}

#[test]
fn invalid_input_does_not_use_an_attempt() {
    let mut game = game(&["planet"]);

    assert_eq!(
        game.submit("plan"),
        Reply::Rejected(InputError::WrongLength(4))
    );
    assert!(matches!(
        game.submit("zzzzzz"),
        Reply::Rejected(InputError::UnknownWord(_))
    ));
    assert_eq!(game.session().guess_number(), 1);
    assert!(game.session().history().is_empty());
}

#[test]
fn statistics_after_a_win_in_three_and_a_loss() {
    let mut game = game(&["planet", "bridge"]);

    game.submit("garden");
    game.submit("xxxxxx");
    assert!(matches!(game.submit("planet"), Reply::Won { guesses: 3, .. }));
    assert_eq!(game.submit("y"), Reply::NewRound);

    for _ in 0..MAX_GUESSES {
        game.submit("garden");
    }
    assert_eq!(game.submit("n"), Reply::Quit);

    let stats = game.statistics();
    assert_eq!(stats.distribution(), &[0, 0, 1, 0, 0, 0]);
    assert_eq!(stats.losses(), 1);
    assert_eq!(stats.games_played(), 2);
    assert!(stats.render().contains("3 moves: 1"));
    assert!(game.is_terminated());
}

#[test]
fn text_mode_session() {
    let mut game = game(&["planet", "bridge"]);
    let script = "garden\nk\nplanet\ny\n".to_string() + &"garden\n".repeat(6) + "n\n";
    let mut out = Vec::new();

    run_simple(&mut game, Cursor::new(script), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Enter guess 1: "));
    assert!(text.contains("Keyboard information"));
    assert!(text.contains("Correct! You won in 2 guesses!"));
    assert!(text.contains("You lose! The answer was: bridge"));
    assert!(!text.contains("Enter guess 7: "));
    assert_eq!(text.matches("Would you like to play again (y/n)? ").count(), 2);
    assert!(text.contains("Thanks for playing!"));

    assert_eq!(game.statistics().wins_in(2), 1);
    assert_eq!(game.statistics().losses(), 1);
}

#[test]
fn embedded_vocabulary_plays() {
    let vocabulary = Vocabulary::embedded().unwrap();
    let secret = vocabulary.answers()[0];
    let mut game = GameLoop::new(vocabulary, SequenceChooser::new(vec![secret]).unwrap());

    assert!(matches!(
        game.submit(&secret.as_str().to_uppercase()),
        Reply::Won { guesses: 1, .. }
    ));
}
