//! Whole games driven by scripted input.

use std::io::Cursor;

use find_my_hat::{ConfigError, FieldConfig, Game, GameError, GenerateError, Outcome, Renderer};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn strip() -> FieldConfig {
    FieldConfig {
        width: 3,
        height: 1,
        hole_percentage: 0,
        ..FieldConfig::default()
    }
}

fn play(config: FieldConfig, script: &str) -> (Result<Vec<Outcome>, GameError>, String) {
    let mut game = Game::new(
        StdRng::seed_from_u64(42),
        Cursor::new(script.to_string()),
        Vec::new(),
        config,
        Renderer::new(false),
    );
    let result = game.run();
    let out = String::from_utf8(game.into_output()).unwrap();
    (result, out)
}

#[test]
fn test_walk_right_to_the_hat() {
    let (result, out) = play(strip(), "r\nr\nn\n");
    assert_eq!(result.unwrap(), vec![Outcome::Won]);
    assert!(out.contains("Welcome to Find My Hat!"));
    assert!(out.contains("Found the hat! You win!"));
    assert!(out.ends_with("\nBye!\n\n"));
}

#[test]
fn test_winning_move_is_drawn() {
    let config = FieldConfig {
        width: 2,
        ..strip()
    };
    let (result, out) = play(config, "r\nn\n");
    assert_eq!(result.unwrap(), vec![Outcome::Won]);
    let boards: Vec<&str> = out
        .lines()
        .filter(|line| *line == "@ ^" || *line == "* @")
        .collect();
    assert_eq!(boards, vec!["@ ^", "* @"]);
    let last_board = out.find("* @").unwrap();
    assert!(out[last_board..].contains("Found the hat! You win!"));
}

#[test]
fn test_walk_off_the_left_edge() {
    let (result, out) = play(strip(), "L\nn\n");
    assert_eq!(result.unwrap(), vec![Outcome::LostOffGrid]);
    assert!(out.contains("Moved off field. You lose."));
}

#[test]
fn test_invalid_entry_then_two_rounds() {
    let (result, out) = play(strip(), "x\nu\ny\nl\nn\n");
    assert_eq!(
        result.unwrap(),
        vec![Outcome::LostOffGrid, Outcome::LostOffGrid]
    );
    assert_eq!(out.matches("Invalid entry. Please try again.").count(), 1);
    assert_eq!(out.matches("Creating a new board!").count(), 1);
    assert_eq!(out.matches("End of game. Play again? (Y/N): ").count(), 2);
}

#[test]
fn test_start_is_drawn_as_current_position() {
    let (_, out) = play(strip(), "");
    let board = out
        .lines()
        .find(|line| line.starts_with('@'))
        .expect("field is drawn");
    assert!(board == "@ ░ ^" || board == "@ ^ ░", "{board}");
}

#[test]
fn test_input_ending_mid_round_says_bye() {
    let (result, out) = play(strip(), "");
    assert_eq!(result.unwrap(), Vec::<Outcome>::new());
    assert!(out.contains("Bye!"));
}

#[test]
fn test_unsolvable_settings_fail() {
    let config = FieldConfig {
        width: 15,
        height: 10,
        hole_percentage: 100,
        max_attempts: 5,
        ..FieldConfig::default()
    };
    let (result, _) = play(config, "r\n");
    assert!(matches!(
        result,
        Err(GameError::Generate(GenerateError::Unsolvable { attempts: 5 }))
    ));
}

#[test]
fn test_bad_settings_fail_before_the_banner() {
    let config = FieldConfig {
        width: 0,
        ..FieldConfig::default()
    };
    let (result, out) = play(config, "r\n");
    assert!(matches!(
        result,
        Err(GameError::Config(ConfigError::ZeroWidth))
    ));
    assert!(out.is_empty());
}
