//! The game container - the players at the table and the board they play on.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::{GameConfig, RulesConfig};
use crate::error::{Result, RulesError};
use crate::player::{Player, PlayerId};
use crate::property::PropertyId;

/// The state of a game in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    rules: RulesConfig,
    players: Vec<Player>,
    board: Board,
}

impl Game {
    /// Create a game from a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rules: config.rules,
            players: Vec::new(),
            board: config.build_board()?,
        })
    }

    /// A game with the standard rules on the standard board.
    pub fn standard() -> Self {
        Self {
            rules: RulesConfig::default(),
            players: Vec::new(),
            board: Board::standard(),
        }
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Seat a new player with the starting balance.
    ///
    /// Once the table is full the call is ignored and `None` is returned.
    pub fn add_player(&mut self, name: impl Into<String>) -> Option<PlayerId> {
        let name = name.into();
        if self.players.len() >= self.rules.max_players {
            warn!(
                "table is full ({} players), ignoring {}",
                self.rules.max_players, name
            );
            return None;
        }

        let player = Player::with_balance(name, self.rules.starting_balance);
        let id = player.id();
        info!("{} joined as {}", player.name(), id);
        self.players.push(player);
        Some(id)
    }

    fn player_index(&self, id: PlayerId) -> Result<usize> {
        self.players
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| RulesError::UnknownPlayer {
                player: id.to_string(),
            })
    }

    /// Buy a property from the bank at its list price.
    ///
    /// Fails without changing anything when the property is already owned or
    /// the buyer cannot cover the price.
    pub fn buy_property(&mut self, buyer: PlayerId, property: PropertyId) -> Result<()> {
        let index = self.player_index(buyer)?;
        let lot = self.board.property(property)?;
        if lot.owner().is_some() {
            return Err(RulesError::AlreadyOwned {
                property: lot.name().to_string(),
            });
        }

        let price = lot.price();
        self.players[index].modify_balance(-i64::from(price))?;
        let lot = self.board.property_mut(property)?;
        lot.set_owner(Some(buyer))?;
        info!(
            "{} bought {} for {}",
            self.players[index].name(),
            lot.name(),
            price
        );
        Ok(())
    }

    /// Charge `payer` the rent for landing on a property and pay the owner.
    ///
    /// `dice_total` is only consulted for utilities. Owners landing on their
    /// own property pay nothing. Returns the amount transferred; on failure no
    /// balance changes.
    pub fn pay_rent(
        &mut self,
        payer: PlayerId,
        property: PropertyId,
        dice_total: u32,
    ) -> Result<u32> {
        let payer_index = self.player_index(payer)?;
        let lot = self.board.property(property)?;
        let owner = lot.owner().ok_or_else(|| RulesError::UnownedProperty {
            property: lot.name().to_string(),
        })?;
        if owner == payer {
            debug!("{} landed on own property {}", payer, lot.name());
            return Ok(0);
        }

        let amount = lot.rent(&self.board)?.amount(dice_total)?;
        let owner_index = self.player_index(owner)?;

        self.players[payer_index].modify_balance(-i64::from(amount))?;
        if let Err(err) = self.players[owner_index].modify_balance(i64::from(amount)) {
            // Credit failed, refund the payer so the transfer stays atomic.
            self.players[payer_index].modify_balance(i64::from(amount))?;
            return Err(err);
        }

        info!(
            "{} paid {} rent to {}",
            self.players[payer_index].name(),
            amount,
            self.players[owner_index].name()
        );
        Ok(amount)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}
