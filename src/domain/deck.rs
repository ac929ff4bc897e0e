use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Колода карт. Верх колоды – конец вектора.
///
/// Инвариант: карты не повторяются; колода только уменьшается,
/// пока движок не откроет новую на следующий раунд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Колода с заранее известным порядком: первая карта списка
    /// будет сдана первой. Для тестов и воспроизведения раздач.
    pub fn stacked(top_first: Vec<Card>) -> Self {
        let mut cards = top_first;
        cards.reverse();
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Равномерная перестановка через RNG движка.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Снять верхнюю карту.
    pub fn deal_one(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::EmptyDeck)
    }

    /// Снять n верхних карт. Если карт не хватает – колода не трогается.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        if self.cards.len() < n {
            return Err(EngineError::EmptyDeck);
        }
        let split = self.cards.len() - n;
        let mut taken = self.cards.split_off(split);
        taken.reverse();
        Ok(taken)
    }
}
