//! The standard quest game table.

use tracing::info;

use crate::cards::{Card, CardCatalog};
use crate::core::{
    ConfigError, DeckError, GameConfig, GameError, GameRng, Player, PlayerId,
};
use crate::rules::Game;
use crate::zones::Deck;

/// Players, decks and turn order for one game.
#[derive(Clone, Debug)]
pub struct RoundTableGame {
    config: GameConfig,
    catalog: CardCatalog,
    rng: GameRng,
    players: Vec<Player>,
    adventure_deck: Deck<Card>,
    event_deck: Deck<Card>,
    current: usize,
    turn_number: u32,
}

/// Builder for creating a RoundTableGame.
#[derive(Clone, Debug)]
pub struct RoundTableGameBuilder {
    config: GameConfig,
    catalog: CardCatalog,
}

impl Default for RoundTableGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            catalog: CardCatalog::standard(),
        }
    }
}

impl RoundTableGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.config.starting_hand_size = size;
        self
    }

    /// Use a non-standard deck composition.
    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Validate the configuration and seat the players.
    ///
    /// Decks stay empty until `Game::initialize`.
    pub fn build(self) -> Result<RoundTableGame, ConfigError> {
        self.config.validate()?;

        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let players = PlayerId::all(self.config.player_count).map(Player::new).collect();

        Ok(RoundTableGame {
            adventure_deck: Deck::new(rng.for_context("adventure")),
            event_deck: Deck::new(rng.for_context("event")),
            config: self.config,
            catalog: self.catalog,
            rng,
            players,
            current: 0,
            turn_number: 1,
        })
    }
}

impl RoundTableGame {
    /// The seed every shuffle derives from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn adventure_deck(&self) -> &Deck<Card> {
        &self.adventure_deck
    }

    pub fn adventure_deck_mut(&mut self) -> &mut Deck<Card> {
        &mut self.adventure_deck
    }

    #[must_use]
    pub fn event_deck(&self) -> &Deck<Card> {
        &self.event_deck
    }

    /// Cards anywhere at the table: both decks and every hand.
    #[must_use]
    pub fn cards_in_circulation(&self) -> usize {
        self.adventure_deck.total()
            + self.event_deck.total()
            + self.players.iter().map(Player::hand_size).sum::<usize>()
    }
}

impl Game for RoundTableGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn initialize(&mut self) -> Result<(), GameError> {
        let cards = self.catalog.build();

        self.adventure_deck = Deck::from_cards(cards.adventure, self.rng.for_context("adventure"));
        self.adventure_deck.shuffle();
        self.event_deck = Deck::from_cards(cards.event, self.rng.for_context("event"));
        self.event_deck.shuffle();

        for player in &mut self.players {
            player.reset();
        }
        for player in PlayerId::all(self.players.len()) {
            self.draw_into_hand(player, self.config.starting_hand_size)?;
        }

        self.current = 0;
        self.turn_number = 1;
        info!(
            players = self.players.len(),
            seed = self.rng.seed(),
            adventure = self.adventure_deck.size(),
            events = self.event_deck.size(),
            "game initialized"
        );
        Ok(())
    }

    fn current_player(&self) -> PlayerId {
        self.players[self.current].id()
    }

    fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(Player::id).collect()
    }

    fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    fn draw_event_card(&mut self) -> Result<Card, DeckError> {
        self.event_deck.draw_card()
    }

    fn discard_event_card(&mut self, card: Card) {
        self.event_deck.discard(card);
    }

    fn draw_adventure_card(&mut self) -> Result<Card, DeckError> {
        self.adventure_deck.draw_card()
    }

    fn discard_adventure_card(&mut self, card: Card) {
        self.adventure_deck.discard(card);
    }

    fn next_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        self.turn_number += 1;
    }

    fn is_game_over(&self) -> bool {
        let target = self.config.shields_to_win as i32;
        self.players.iter().any(|p| p.shields() >= target)
    }

    fn winners(&self) -> Vec<PlayerId> {
        let target = self.config.shields_to_win as i32;
        self.players
            .iter()
            .filter(|p| p.shields() >= target)
            .map(Player::id)
            .collect()
    }
}
