use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{ParticipantId, ParticipantKind, ParticipantProfile};

/// Реестр участников процесса: выдаёт ID и считает, сколько участников
/// создано. Создаётся в main и передаётся движку – никаких статических счётчиков.
#[derive(Debug)]
pub struct ParticipantRegistry {
    participant_counter: AtomicU64,
    humans_created: AtomicU64,
    automated_created: AtomicU64,
}

impl Default for ParticipantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticipantRegistry {
    /// ID начинаются с 1.
    pub fn new() -> Self {
        Self {
            participant_counter: AtomicU64::new(1),
            humans_created: AtomicU64::new(0),
            automated_created: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn next_participant_id(&self) -> ParticipantId {
        self.participant_counter.fetch_add(1, Ordering::Relaxed)
    }

    /// Зарегистрировать нового участника и получить его профиль.
    pub fn register(&self, name: impl Into<String>, kind: ParticipantKind) -> ParticipantProfile {
        let counter = match kind {
            ParticipantKind::Human => &self.humans_created,
            ParticipantKind::Automated => &self.automated_created,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        ParticipantProfile {
            id: self.next_participant_id(),
            name: name.into(),
        }
    }

    pub fn total_created(&self) -> u64 {
        self.participant_counter.load(Ordering::Relaxed) - 1
    }

    pub fn created_of(&self, kind: ParticipantKind) -> u64 {
        match kind {
            ParticipantKind::Human => self.humans_created.load(Ordering::Relaxed),
            ParticipantKind::Automated => self.automated_created.load(Ordering::Relaxed),
        }
    }
}
