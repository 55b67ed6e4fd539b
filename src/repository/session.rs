use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::entities::{AppointmentDraft, DraftUpdate, Participant, ParticipantCreation};

use super::errors::{DeleteError, FindAllError, FindError, InsertError, UpdateError};

/// Session-scoped store for the appointment draft and its participant
/// roster. The roster list is owned here exclusively; consumers only ever
/// receive clones.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn list_participants(&self) -> Result<Vec<Participant>, FindAllError>;
    async fn find_participant(&self, id: u32) -> Result<Participant, FindError>;
    async fn insert_participant(
        &self,
        data: ParticipantCreation,
    ) -> Result<Participant, InsertError>;
    async fn stamp_participants(&self, stamps: Vec<(u32, String)>) -> Result<(), UpdateError>;
    async fn delete_participant(&self, id: u32) -> Result<Participant, DeleteError>;

    async fn get_draft(&self) -> Result<AppointmentDraft, FindError>;
    async fn update_draft(&self, update: DraftUpdate) -> Result<AppointmentDraft, UpdateError>;

    /// Clears both the draft and the roster, the post-submit state.
    async fn reset(&self) -> Result<(), UpdateError>;
}

pub struct InMemoryRepository {
    participants: Mutex<Vec<Participant>>,
    draft: Mutex<AppointmentDraft>,
    next_id: Mutex<u32>,
}

impl InMemoryRepository {
    pub fn new() -> InMemoryRepository {
        InMemoryRepository {
            participants: Mutex::new(vec![]),
            draft: Mutex::new(AppointmentDraft::empty()),
            next_id: Mutex::new(0),
        }
    }

    fn take_next_id(&self) -> Result<u32, InsertError> {
        let mut lock: MutexGuard<u32> = match self.next_id.lock() {
            Ok(lock) => lock,
            _ => return Err(InsertError::Unknown),
        };
        let id = *lock;
        *lock += 1;
        Ok(id)
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn list_participants(&self) -> Result<Vec<Participant>, FindAllError> {
        let lock = match self.participants.lock() {
            Ok(lock) => lock,
            _ => return Err(FindAllError::Unknown),
        };
        Ok(lock.clone())
    }

    async fn find_participant(&self, id: u32) -> Result<Participant, FindError> {
        let lock = match self.participants.lock() {
            Ok(lock) => lock,
            _ => return Err(FindError::Unknown),
        };
        match lock.iter().find(|&participant| participant.id == id) {
            Some(participant) => Ok(participant.clone()),
            _ => Err(FindError::NotFound),
        }
    }

    async fn insert_participant(
        &self,
        data: ParticipantCreation,
    ) -> Result<Participant, InsertError> {
        let id = self.take_next_id()?;
        let participant = Participant {
            id,
            name: data.name,
            email: data.email,
            country: data.country,
            local_time: data.local_time,
        };

        let mut lock = match self.participants.lock() {
            Ok(lock) => lock,
            _ => return Err(InsertError::Unknown),
        };
        lock.push(participant.clone());
        Ok(participant)
    }

    async fn stamp_participants(&self, stamps: Vec<(u32, String)>) -> Result<(), UpdateError> {
        let mut lock = match self.participants.lock() {
            Ok(lock) => lock,
            _ => return Err(UpdateError::Unknown),
        };
        for (id, local_time) in stamps.into_iter() {
            if let Some(participant) = lock.iter_mut().find(|participant| participant.id == id) {
                participant.local_time = Some(local_time);
            }
        }
        Ok(())
    }

    async fn delete_participant(&self, id: u32) -> Result<Participant, DeleteError> {
        let mut lock = match self.participants.lock() {
            Ok(lock) => lock,
            _ => return Err(DeleteError::Unknown),
        };
        match lock.iter().position(|participant| participant.id == id) {
            Some(index) => Ok(lock.remove(index)),
            _ => Err(DeleteError::NotFound),
        }
    }

    async fn get_draft(&self) -> Result<AppointmentDraft, FindError> {
        let lock = match self.draft.lock() {
            Ok(lock) => lock,
            _ => return Err(FindError::Unknown),
        };
        Ok(lock.clone())
    }

    async fn update_draft(&self, update: DraftUpdate) -> Result<AppointmentDraft, UpdateError> {
        let mut lock = match self.draft.lock() {
            Ok(lock) => lock,
            _ => return Err(UpdateError::Unknown),
        };
        if let Some(title) = update.title {
            lock.title = title;
        }
        if let Some(description) = update.description {
            lock.description = description;
        }
        if let Some(date) = update.date {
            lock.date = date;
        }
        if let Some(time) = update.time {
            lock.time = time;
        }
        if let Some(creator_offset) = update.creator_offset {
            lock.creator_offset = creator_offset;
        }
        Ok(lock.clone())
    }

    async fn reset(&self) -> Result<(), UpdateError> {
        let mut participants = match self.participants.lock() {
            Ok(lock) => lock,
            _ => return Err(UpdateError::Unknown),
        };
        let mut draft = match self.draft.lock() {
            Ok(lock) => lock,
            _ => return Err(UpdateError::Unknown),
        };
        participants.clear();
        *draft = AppointmentDraft::empty();
        Ok(())
    }
}
