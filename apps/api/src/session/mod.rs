//! Session Manager: owns the single current-user value and broadcasts changes.
//!
//! State lives in a `tokio::sync::watch` channel so every subscriber sees the
//! latest snapshot. Sign-in and sign-out notify synchronously; the only
//! deferred work is the one-time startup read of the `"user"` slot.

pub mod handlers;
pub mod identity;
pub mod models;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::session::identity::IdentityProvider;
use crate::storage::{SlotStore, USER_SLOT};

pub use models::{SessionState, UserProfile};

pub struct SessionManager {
    store: Arc<dyn SlotStore>,
    identity: Arc<dyn IdentityProvider>,
    tx: watch::Sender<SessionState>,
}

impl SessionManager {
    /// Creates a manager in the `loading` state. Call [`SessionManager::initialize`]
    /// to perform the startup read.
    pub fn new(store: Arc<dyn SlotStore>, identity: Arc<dyn IdentityProvider>) -> Arc<Self> {
        let (tx, _) = watch::channel(SessionState::loading());
        Arc::new(Self {
            store,
            identity,
            tx,
        })
    }

    /// Schedules the one-time read of the stored profile after `delay`.
    ///
    /// The read settles `loading` to false exactly once. If a sign-in or
    /// sign-out has already settled the state, the read is skipped.
    pub fn initialize(self: &Arc<Self>, delay: Duration) -> JoinHandle<()> {
        let manager = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            manager.finish_loading().await;
        })
    }

    async fn finish_loading(&self) {
        if !self.tx.borrow().loading {
            return;
        }
        let user = self.read_stored_user().await;
        let settled = self.tx.send_if_modified(|state| {
            if !state.loading {
                return false;
            }
            state.loading = false;
            state.user = user.clone();
            true
        });
        if settled {
            match &user {
                Some(profile) => info!("Session restored for {}", profile.uid),
                None => info!("No stored session; signed out"),
            }
        }
    }

    /// Last known state, read synchronously.
    pub fn state(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.tx.borrow().user.clone()
    }

    /// Stored profile for `uid`, if that is who is signed in.
    pub async fn profile(&self, uid: &str) -> Option<UserProfile> {
        self.read_stored_user().await.filter(|p| p.uid == uid)
    }

    /// Explicit subscription. Dropping it unsubscribes.
    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Runs `callback` with every new state until the returned listener is
    /// dropped or unsubscribed.
    pub fn on_change<F>(&self, callback: F) -> SessionListener
    where
        F: Fn(SessionState) + Send + 'static,
    {
        let mut subscription = self.subscribe();
        let handle = tokio::spawn(async move {
            while let Some(state) = subscription.changed().await {
                callback(state);
            }
        });
        SessionListener { handle }
    }

    /// Signs in through the identity provider, persists the profile under
    /// `"user"`, and notifies subscribers.
    pub async fn sign_in(&self) -> Result<UserProfile, AppError> {
        let profile = self.identity.authenticate().await?;
        self.write_user(Some(&profile)).await?;

        self.tx.send_modify(|state| {
            state.loading = false;
            state.user = Some(profile.clone());
        });
        info!("Signed in as {}", profile.uid);
        Ok(profile)
    }

    /// Replaces the signed-in user's stored profile (skills, resume link and
    /// the rest) and notifies subscribers. The uid cannot change.
    pub async fn save_profile(&self, profile: UserProfile) -> Result<UserProfile, AppError> {
        let signed_in_as = self.current_user().map(|user| user.uid);
        if signed_in_as.as_deref() != Some(profile.uid.as_str()) {
            return Err(AppError::NotFound(format!("Profile {} not found", profile.uid)));
        }
        self.write_user(Some(&profile)).await?;

        self.tx.send_modify(|state| {
            state.loading = false;
            state.user = Some(profile.clone());
        });
        info!("Saved profile for {}", profile.uid);
        Ok(profile)
    }

    /// Clears the `"user"` slot and notifies subscribers.
    pub async fn sign_out(&self) -> Result<(), AppError> {
        self.write_user(None).await?;
        self.tx.send_modify(|state| {
            state.loading = false;
            state.user = None;
        });
        info!("Signed out");
        Ok(())
    }

    /// Writes or clears the slot on the blocking pool.
    async fn write_user(&self, profile: Option<&UserProfile>) -> Result<(), AppError> {
        let raw = profile
            .map(serde_json::to_string)
            .transpose()
            .map_err(anyhow::Error::from)?;
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || match raw {
            Some(raw) => store.set(USER_SLOT, &raw),
            None => store.remove(USER_SLOT),
        })
        .await
        .map_err(anyhow::Error::from)??;
        Ok(())
    }

    /// Missing, unreadable, or corrupt records all mean "no session".
    async fn read_stored_user(&self) -> Option<UserProfile> {
        let store = Arc::clone(&self.store);
        let raw = match tokio::task::spawn_blocking(move || store.get(USER_SLOT)).await {
            Ok(Ok(Some(raw))) => raw,
            Ok(Ok(None)) => return None,
            Ok(Err(e)) => {
                warn!("Could not read stored session: {e}");
                return None;
            }
            Err(e) => {
                warn!("Stored session read did not complete: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Ignoring corrupt stored session: {e}");
                None
            }
        }
    }
}

/// A receiver of session changes.
pub struct SessionSubscription {
    rx: watch::Receiver<SessionState>,
}

impl SessionSubscription {
    /// Waits for the next change. Returns `None` once the manager is gone.
    pub async fn changed(&mut self) -> Option<SessionState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    #[cfg(test)]
    pub fn current(&self) -> SessionState {
        self.rx.borrow().clone()
    }

    #[cfg(test)]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }
}

/// Handle for an [`SessionManager::on_change`] callback.
pub struct SessionListener {
    handle: JoinHandle<()>,
}

impl SessionListener {
    #[cfg(test)]
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for SessionListener {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::session::identity::{MockIdentityProvider, MOCK_UID};
    use crate::storage::{FileSlotStore, MemorySlotStore};

    fn manager_with(store: Arc<MemorySlotStore>) -> Arc<SessionManager> {
        manager_with_store(store)
    }

    fn manager_with_store(store: Arc<dyn SlotStore>) -> Arc<SessionManager> {
        SessionManager::new(store, Arc::new(MockIdentityProvider))
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_loading_then_settles_once() {
        let manager = manager_with(Arc::new(MemorySlotStore::new()));
        let mut sub = manager.subscribe();
        assert_eq!(manager.state(), SessionState::loading());

        let handle = manager.initialize(Duration::from_millis(1000));
        let settled = sub.changed().await.unwrap();
        handle.await.unwrap();

        assert!(!settled.loading);
        assert!(settled.user.is_none());
        assert!(!sub.has_changed());

        // A second initialize must not produce another transition.
        manager.initialize(Duration::ZERO).await.unwrap();
        assert!(!sub.has_changed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_restores_stored_profile() {
        let store = Arc::new(MemorySlotStore::new());
        let first = manager_with(Arc::clone(&store));
        first.sign_in().await.unwrap();

        let second = manager_with(store);
        assert!(second.state().loading);
        second.initialize(Duration::from_millis(1000)).await.unwrap();

        assert_eq!(second.current_user().unwrap().uid, MOCK_UID);
    }

    #[tokio::test(start_paused = true)]
    async fn test_corrupt_slot_reads_as_signed_out() {
        let store = Arc::new(MemorySlotStore::new());
        store.set(USER_SLOT, "{not json").unwrap();
        let manager = manager_with(store);

        manager.initialize(Duration::from_millis(10)).await.unwrap();

        let state = manager.state();
        assert!(!state.loading);
        assert!(state.user.is_none());
    }

    #[tokio::test]
    async fn test_sign_in_then_sign_out() {
        let store = Arc::new(MemorySlotStore::new());
        let manager = manager_with(Arc::clone(&store));

        let profile = manager.sign_in().await.unwrap();
        assert_eq!(profile.uid, MOCK_UID);
        assert_eq!(manager.current_user(), Some(profile.clone()));
        assert!(store.get(USER_SLOT).unwrap().is_some());

        // uid is stable across sign-ins
        assert_eq!(manager.sign_in().await.unwrap().uid, profile.uid);

        manager.sign_out().await.unwrap();
        assert_eq!(manager.current_user(), None);
        assert!(store.get(USER_SLOT).unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_in_before_initial_read_wins() {
        let manager = manager_with(Arc::new(MemorySlotStore::new()));
        let handle = manager.initialize(Duration::from_millis(1000));

        manager.sign_in().await.unwrap();
        let sub = manager.subscribe();
        handle.await.unwrap();

        assert!(manager.state().is_signed_in());
        assert!(!sub.has_changed());
        assert!(sub.current().user.is_some());
    }

    #[tokio::test]
    async fn test_subscribers_notified_on_sign_in_and_out() {
        let manager = manager_with(Arc::new(MemorySlotStore::new()));
        let mut sub = manager.subscribe();

        manager.sign_in().await.unwrap();
        assert!(sub.changed().await.unwrap().user.is_some());

        manager.sign_out().await.unwrap();
        assert!(sub.changed().await.unwrap().user.is_none());
    }

    #[tokio::test]
    async fn test_on_change_callback_and_unsubscribe() {
        let manager = manager_with(Arc::new(MemorySlotStore::new()));
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let listener = manager.on_change(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        manager.sign_in().await.unwrap();
        for _ in 0..10 {
            if calls.load(Ordering::SeqCst) == 1 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        listener.unsubscribe();
        tokio::task::yield_now().await;
        manager.sign_out().await.unwrap();
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_profile_lookup_matches_uid() {
        let manager = manager_with(Arc::new(MemorySlotStore::new()));
        manager.sign_in().await.unwrap();

        assert!(manager.profile(MOCK_UID).await.is_some());
        assert!(manager.profile("someone-else").await.is_none());
    }

    #[tokio::test]
    async fn test_save_profile_persists_and_notifies() {
        let store = Arc::new(MemorySlotStore::new());
        let manager = manager_with(Arc::clone(&store));
        let mut profile = manager.sign_in().await.unwrap();
        let mut sub = manager.subscribe();

        profile.skills = vec!["Rust".into(), "SQL".into()];
        profile.resume_url = Some("https://example.com/cv.pdf".into());
        manager.save_profile(profile.clone()).await.unwrap();

        let seen = sub.changed().await.unwrap();
        assert_eq!(seen.user.as_ref(), Some(&profile));
        assert_eq!(manager.profile(MOCK_UID).await, Some(profile.clone()));

        // A fresh manager on the same store restores the saved fields.
        let restored = manager_with(store);
        restored.initialize(Duration::ZERO).await.unwrap();
        assert_eq!(restored.current_user().unwrap().skills, vec!["Rust", "SQL"]);
    }

    #[tokio::test]
    async fn test_save_profile_rejects_other_uid_or_signed_out() {
        let manager = manager_with(Arc::new(MemorySlotStore::new()));
        let mut profile = manager.sign_in().await.unwrap();

        profile.uid = "someone-else".into();
        let result = manager.save_profile(profile.clone()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(manager.current_user().unwrap().uid, MOCK_UID);

        manager.sign_out().await.unwrap();
        profile.uid = MOCK_UID.into();
        assert!(manager.save_profile(profile).await.is_err());
        assert!(manager.current_user().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_and_out_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let manager = manager_with_store(Arc::new(FileSlotStore::new(&path)));

        manager.sign_in().await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains(MOCK_UID));

        manager.sign_out().await.unwrap();
        let reopened = FileSlotStore::new(&path);
        assert_eq!(reopened.get(USER_SLOT).unwrap(), None);
    }
}
