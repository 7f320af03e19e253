//! # In-Memory Session Store
//!
//! Reference store used by tests and the bundled web server. Sessions live
//! in a concurrent map; the unique-active index is guarded by a mutex that
//! is always acquired before any session shard, keeping create/put/lookup
//! orderings deadlock-free.

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::{SessionStore, StoreError, StoreResult};
use crate::models::DecisionSession;
use crate::state_machine::SessionStatus;

/// Concurrent in-memory store with optimistic versioning.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<Uuid, DecisionSession>,
    /// `(case_id, playbook_id)` -> session id holding the active slot
    active_index: Mutex<HashMap<(String, String), Uuid>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently held, for diagnostics
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn slot_key(session: &DecisionSession) -> (String, String) {
        (session.case_id.clone(), session.playbook_id.clone())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, mut session: DecisionSession) -> StoreResult<DecisionSession> {
        let key = Self::slot_key(&session);
        let mut index = self.active_index.lock();

        if let Some(existing) = index.get(&key) {
            // The slot may point at a session that has since completed;
            // only a live holder blocks creation.
            let occupied = self
                .sessions
                .get(existing)
                .map(|stored| stored.status.is_active())
                .unwrap_or(false);
            if occupied {
                return Err(StoreError::ActiveSessionExists {
                    case_id: key.0,
                    playbook_id: key.1,
                });
            }
        }

        session.version = 1;
        index.insert(key, session.session_id);
        self.sessions.insert(session.session_id, session.clone());

        debug!(
            session_id = %session.session_id,
            case_id = %session.case_id,
            playbook_id = %session.playbook_id,
            "Session created"
        );
        Ok(session)
    }

    async fn get(&self, session_id: Uuid) -> StoreResult<DecisionSession> {
        self.sessions
            .get(&session_id)
            .map(|entry| entry.clone())
            .ok_or(StoreError::NotFound { session_id })
    }

    async fn put(
        &self,
        mut session: DecisionSession,
        expected_version: i64,
    ) -> StoreResult<DecisionSession> {
        let key = Self::slot_key(&session);
        let mut index = self.active_index.lock();

        // A session returning to Active (reset) must re-claim its slot;
        // another session may have taken it since completion.
        if session.status.is_active() {
            if let Some(holder) = index.get(&key) {
                if *holder != session.session_id {
                    let holder_active = self
                        .sessions
                        .get(holder)
                        .map(|stored| stored.status.is_active())
                        .unwrap_or(false);
                    if holder_active {
                        return Err(StoreError::ActiveSessionExists {
                            case_id: key.0,
                            playbook_id: key.1,
                        });
                    }
                }
            }
        }

        let mut entry = self
            .sessions
            .get_mut(&session.session_id)
            .ok_or(StoreError::NotFound {
                session_id: session.session_id,
            })?;

        if entry.version != expected_version {
            return Err(StoreError::VersionConflict {
                session_id: session.session_id,
                expected: expected_version,
                stored: entry.version,
            });
        }

        session.version = expected_version + 1;
        *entry = session.clone();
        drop(entry);

        match session.status {
            SessionStatus::Completed => {
                if index.get(&key) == Some(&session.session_id) {
                    index.remove(&key);
                }
            }
            _ => {
                index.insert(key, session.session_id);
            }
        }

        debug!(
            session_id = %session.session_id,
            version = session.version,
            status = %session.status,
            "Session updated"
        );
        Ok(session)
    }

    async fn get_active(
        &self,
        case_id: &str,
        playbook_id: &str,
    ) -> StoreResult<Option<DecisionSession>> {
        let key = (case_id.to_string(), playbook_id.to_string());
        let index = self.active_index.lock();

        let Some(session_id) = index.get(&key) else {
            return Ok(None);
        };

        let session = self.sessions.get(session_id).map(|entry| entry.clone());
        Ok(session.filter(|stored| stored.status.is_active()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(case_id: &str) -> DecisionSession {
        DecisionSession::new(case_id, "contract_disputes", "start")
    }

    #[test]
    fn test_create_then_get_round_trips() {
        tokio_test::block_on(async {
            let store = InMemorySessionStore::new();
            let created = store.create(session("case-1")).await.unwrap();

            let fetched = store.get(created.session_id).await.unwrap();
            assert_eq!(fetched, created);
            assert_eq!(fetched.version, 1);
        });
    }

    #[test]
    fn test_get_unknown_session_fails() {
        tokio_test::block_on(async {
            let store = InMemorySessionStore::new();
            let missing = Uuid::new_v4();
            assert_eq!(
                store.get(missing).await,
                Err(StoreError::NotFound {
                    session_id: missing
                })
            );
        });
    }

    #[test]
    fn test_duplicate_active_slot_is_rejected() {
        tokio_test::block_on(async {
            let store = InMemorySessionStore::new();
            store.create(session("case-1")).await.unwrap();

            let err = store.create(session("case-1")).await.unwrap_err();
            assert!(matches!(err, StoreError::ActiveSessionExists { .. }));

            // A different case is an independent slot
            assert!(store.create(session("case-2")).await.is_ok());
        });
    }

    #[test]
    fn test_put_bumps_version_on_match() {
        tokio_test::block_on(async {
            let store = InMemorySessionStore::new();
            let created = store.create(session("case-1")).await.unwrap();

            let updated = store.put(created.clone(), 1).await.unwrap();
            assert_eq!(updated.version, 2);
        });
    }

    #[test]
    fn test_put_rejects_stale_version() {
        tokio_test::block_on(async {
            let store = InMemorySessionStore::new();
            let created = store.create(session("case-1")).await.unwrap();

            store.put(created.clone(), 1).await.unwrap();
            let err = store.put(created, 1).await.unwrap_err();
            assert!(matches!(
                err,
                StoreError::VersionConflict {
                    expected: 1,
                    stored: 2,
                    ..
                }
            ));
        });
    }

    #[test]
    fn test_completion_frees_the_active_slot() {
        tokio_test::block_on(async {
            let store = InMemorySessionStore::new();
            let mut created = store.create(session("case-1")).await.unwrap();

            created.status = SessionStatus::Completed;
            created.current_node_id = None;
            store.put(created, 1).await.unwrap();

            assert!(store
                .get_active("case-1", "contract_disputes")
                .await
                .unwrap()
                .is_none());
            assert!(store.create(session("case-1")).await.is_ok());
        });
    }

    #[test]
    fn test_reset_cannot_steal_a_claimed_slot() {
        tokio_test::block_on(async {
            let store = InMemorySessionStore::new();
            let mut first = store.create(session("case-1")).await.unwrap();

            // First session completes, a second one claims the slot
            first.status = SessionStatus::Completed;
            first.current_node_id = None;
            let mut first = store.put(first, 1).await.unwrap();
            store.create(session("case-1")).await.unwrap();

            // Resetting the completed session now conflicts
            first.reset_to("start");
            let err = store.put(first, 2).await.unwrap_err();
            assert!(matches!(err, StoreError::ActiveSessionExists { .. }));
        });
    }
}
