use log::info;
use serde::{Deserialize, Serialize};

use crate::config::TwentyOneConfig;
use crate::domain::{Deck, Hand, HandHolder, Participant, ParticipantId};
use crate::engine::actions::{Action, ActionKind};
use crate::engine::errors::EngineError;
use crate::engine::history::{GameEventKind, GameHistory};
use crate::engine::validation::validate_card_action;
use crate::engine::{GamePhase, RandomSource};

/// Сколько карт получает каждый участник на старте раунда.
pub const STARTING_CARDS: usize = 2;

/// Чем закончился раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEnd {
    PlayerBusted,
    PlayerTwentyOne,
    DealerBusted,
    DealerTwentyOne,
    /// Обе руки ≤ 21, у победителя сумма больше.
    HigherTotal,
    /// Равные суммы – ничья.
    Push,
}

/// Итог раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    /// None – push.
    pub winner: Option<ParticipantId>,
    pub reason: RoundEnd,
    pub player_total: u32,
    pub dealer_total: u32,
}

/// Состояние стола двадцати одного: колода, игрок, дилер, фаза.
pub struct TwentyOneTable {
    config: TwentyOneConfig,
    deck: Deck,
    player: Participant<Hand>,
    dealer: Participant<Hand>,
    phase: GamePhase,
    /// Чей сейчас ход. None вне TurnLoop.
    turn: Option<ParticipantId>,
    round: u32,
    history: GameHistory,
}

impl TwentyOneTable {
    pub fn new(config: TwentyOneConfig, player: Participant<Hand>, dealer: Participant<Hand>) -> Self {
        Self {
            config,
            deck: Deck::stacked(Vec::new()),
            player,
            dealer,
            phase: GamePhase::Dealing,
            turn: None,
            round: 0,
            history: GameHistory::new(),
        }
    }

    pub fn config(&self) -> &TwentyOneConfig {
        &self.config
    }

    pub fn player(&self) -> &Participant<Hand> {
        &self.player
    }

    pub fn dealer(&self) -> &Participant<Hand> {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_turn(&self) -> Option<ParticipantId> {
        self.turn
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Участник, который сейчас ходит.
    pub fn current_participant(&self) -> Option<&Participant<Hand>> {
        match self.turn {
            Some(id) if id == self.player.id() => Some(&self.player),
            Some(id) if id == self.dealer.id() => Some(&self.dealer),
            _ => None,
        }
    }

    /// Старт раунда со свежей перемешанной колодой.
    pub fn start_round<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        let mut deck = Deck::standard_52();
        deck.shuffle(rng);
        self.start_round_with_deck(deck)
    }

    /// Старт раунда с заданной колодой:
    /// - чистит руки;
    /// - сдаёт по 2 карты по очереди (игрок первым);
    /// - если у игрока сразу 21, ходов не будет.
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<(), EngineError> {
        if self.phase != GamePhase::Dealing {
            return Err(EngineError::WrongPhase);
        }

        self.deck = deck;
        self.player.clear_hand();
        self.dealer.clear_hand();
        self.history.clear();
        self.round += 1;
        self.history.push(GameEventKind::RoundStarted { round: self.round });
        info!(
            "twenty-one: раунд {} – {} против {}",
            self.round,
            self.player.name(),
            self.dealer.name()
        );

        for _ in 0..STARTING_CARDS {
            let card = self.deck.deal_one()?;
            self.player.add_card(card);
            self.history.push(GameEventKind::CardDealt {
                participant: self.player.id(),
                card,
            });

            let card = self.deck.deal_one()?;
            self.dealer.add_card(card);
            self.history.push(GameEventKind::CardDealt {
                participant: self.dealer.id(),
                card,
            });
        }

        if self.player.is_twenty_one() {
            self.turn = None;
            self.phase = GamePhase::Resolution;
        } else {
            self.turn = Some(self.player.id());
            self.phase = GamePhase::TurnLoop;
        }
        Ok(())
    }

    /// Применить действие участника. Возвращает фазу после действия.
    pub fn apply_action(&mut self, action: Action) -> Result<GamePhase, EngineError> {
        validate_card_action(self.phase, self.turn, &action)?;

        let is_player = action.participant == self.player.id();

        // карту снимаем до записи в историю: неудачный hit не попадает в лог
        let drawn = match action.kind {
            ActionKind::Hit => Some(self.deck.deal_one()?),
            ActionKind::Stay => None,
            ActionKind::Mark(_) => return Err(EngineError::IllegalAction),
        };
        self.history.push(GameEventKind::ActionApplied {
            participant: action.participant,
            action: action.kind,
        });

        let turn_over = match drawn {
            Some(card) => {
                let actor = if is_player {
                    &mut self.player
                } else {
                    &mut self.dealer
                };
                actor.add_card(card);
                self.history.push(GameEventKind::CardDealt {
                    participant: action.participant,
                    card,
                });
                actor.is_busted() || actor.is_twenty_one()
            }
            None => true,
        };

        if turn_over {
            self.end_turn(is_player);
        }
        Ok(self.phase)
    }

    /// Конец хода участника: после игрока ходит дилер,
    /// если только игрок не перебрал и не набрал 21.
    fn end_turn(&mut self, was_player: bool) {
        if was_player && !self.player.is_busted() && !self.player.is_twenty_one() {
            self.turn = Some(self.dealer.id());
        } else {
            self.turn = None;
            self.phase = GamePhase::Resolution;
        }
    }

    /// Итог по текущим рукам (без смены фазы).
    pub fn evaluate(&self) -> RoundResult {
        let player_total = self.player.total();
        let dealer_total = self.dealer.total();
        let player = self.player.id();
        let dealer = self.dealer.id();

        let (winner, reason) = if self.player.is_busted() {
            (Some(dealer), RoundEnd::PlayerBusted)
        } else if self.player.is_twenty_one() {
            (Some(player), RoundEnd::PlayerTwentyOne)
        } else if self.dealer.is_busted() {
            (Some(player), RoundEnd::DealerBusted)
        } else if self.dealer.is_twenty_one() {
            (Some(dealer), RoundEnd::DealerTwentyOne)
        } else if player_total > dealer_total {
            (Some(player), RoundEnd::HigherTotal)
        } else if dealer_total > player_total {
            (Some(dealer), RoundEnd::HigherTotal)
        } else {
            (None, RoundEnd::Push)
        };

        RoundResult {
            winner,
            reason,
            player_total,
            dealer_total,
        }
    }

    /// Подвести итог раунда: Resolution → Rematch.
    pub fn finish_round(&mut self) -> Result<RoundResult, EngineError> {
        if self.phase != GamePhase::Resolution {
            return Err(EngineError::WrongPhase);
        }
        let result = self.evaluate();
        self.history.push(GameEventKind::RoundFinished {
            round: self.round,
            winner: result.winner,
        });
        info!(
            "twenty-one: раунд {} завершён ({:?}, {} – {})",
            self.round, result.reason, result.player_total, result.dealer_total
        );
        self.phase = GamePhase::Rematch;
        Ok(result)
    }

    /// Решение о следующем раунде.
    /// Отказ только закрывает сессию, ничего больше не меняя.
    pub fn rematch(&mut self, again: bool) -> Result<GamePhase, EngineError> {
        if self.phase != GamePhase::Rematch {
            return Err(EngineError::WrongPhase);
        }
        if again {
            self.player.clear_hand();
            self.dealer.clear_hand();
            self.deck = Deck::stacked(Vec::new());
            self.phase = GamePhase::Dealing;
        } else {
            self.phase = GamePhase::End;
        }
        Ok(self.phase)
    }
}
