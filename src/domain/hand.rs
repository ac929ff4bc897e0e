use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Целевая сумма двадцати одного.
pub const TWENTY_ONE: u32 = 21;

/// Рука участника в карточной игре: упорядоченный список карт.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn total(&self) -> u32 {
        hand_total(&self.cards)
    }
}

/// Лучшая сумма руки: каждый туз сначала 11, затем тузы по одному
/// понижаются до 1, пока сумма > 21 и есть что понижать.
pub fn hand_total(cards: &[Card]) -> u32 {
    let mut total: u32 = cards.iter().map(Card::points).sum();
    let mut soft_aces = cards.iter().filter(|c| c.is_ace()).count();

    while total > TWENTY_ONE && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    total
}

/// Общее поведение «держателя руки» – и у игрока, и у дилера.
pub trait HandHolder {
    fn hand(&self) -> &Hand;
    fn hand_mut(&mut self) -> &mut Hand;

    fn total(&self) -> u32 {
        self.hand().total()
    }

    fn is_busted(&self) -> bool {
        self.total() > TWENTY_ONE
    }

    fn is_twenty_one(&self) -> bool {
        self.total() == TWENTY_ONE
    }

    fn add_card(&mut self, card: Card) {
        self.hand_mut().push(card);
    }

    fn clear_hand(&mut self) {
        self.hand_mut().clear();
    }
}
