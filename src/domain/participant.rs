use serde::{Deserialize, Serialize};

use crate::domain::hand::{Hand, HandHolder};
use crate::domain::marker::Marker;
use crate::domain::ParticipantId;

/// Базовый профиль участника – то, что не зависит от конкретной игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantProfile {
    pub id: ParticipantId,
    pub name: String,
}

/// Кто принимает решения за участника.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParticipantKind {
    /// Решения вводит человек с консоли.
    Human,
    /// Решения принимает эвристика (дилер, компьютер).
    Automated,
}

/// Участник игры. `S` – то, что он держит: рука (`Hand`) или маркер (`Marker`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant<S> {
    pub profile: ParticipantProfile,
    pub kind: ParticipantKind,
    pub holding: S,
}

impl<S> Participant<S> {
    pub fn new(profile: ParticipantProfile, kind: ParticipantKind, holding: S) -> Self {
        Self {
            profile,
            kind,
            holding,
        }
    }

    pub fn id(&self) -> ParticipantId {
        self.profile.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn is_human(&self) -> bool {
        matches!(self.kind, ParticipantKind::Human)
    }
}

impl HandHolder for Participant<Hand> {
    fn hand(&self) -> &Hand {
        &self.holding
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.holding
    }
}

impl Participant<Marker> {
    pub fn marker(&self) -> Marker {
        self.holding
    }
}
