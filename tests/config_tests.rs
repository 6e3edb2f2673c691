//! Configuration loading and table setup.

use round_table::{ConfigError, Game, GameConfig, RoundTableGameBuilder};

#[test]
fn test_partial_json_uses_defaults() {
    let config = GameConfig::from_json_str(r#"{ "player_count": 3, "seed": 12 }"#).unwrap();

    assert_eq!(config.player_count, 3);
    assert_eq!(config.seed, Some(12));
    assert_eq!(config.hand_limit, 12);
    assert_eq!(config.shields_to_win, 7);
    assert!(config.clamp_shields_at_zero);
}

#[test]
fn test_json_is_validated() {
    let err = GameConfig::from_json_str(r#"{ "player_count": 9 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::PlayerCount { value: 9, .. }));

    let err = GameConfig::from_json_str(r#"{ "hand_limit": 5 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::StartingHandTooLarge { starting: 12, limit: 5 }));

    let err = GameConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = GameConfig::new(5).with_seed(3).allow_negative_shields();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(GameConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_configured_table() {
    let config = GameConfig::new(5)
        .with_seed(99)
        .with_hand_limit(10)
        .with_starting_hand_size(8)
        .with_shields_to_win(3);
    let mut game = RoundTableGameBuilder::new().config(config).build().unwrap();
    game.initialize().unwrap();

    assert_eq!(game.player_ids().len(), 5);
    assert_eq!(game.seed(), 99);
    assert!(game.players().iter().all(|p| p.hand_size() == 8));
    assert_eq!(game.adventure_deck().size(), 60);
    assert!(!game.is_game_over());

    let third = game.player_ids()[2];
    game.player_mut(third).add_shields(3);
    assert!(game.is_game_over());
    assert_eq!(game.winners(), vec![third]);
}

#[test]
fn test_turn_order_wraps() {
    let mut game = RoundTableGameBuilder::new().player_count(3).seed(1).build().unwrap();
    game.initialize().unwrap();

    let order: Vec<String> = (0..4)
        .map(|_| {
            let current = game.current_player().to_string();
            game.next_turn();
            current
        })
        .collect();

    assert_eq!(order, vec!["P1", "P2", "P3", "P1"]);
    assert_eq!(game.turn_number(), 5);
}
