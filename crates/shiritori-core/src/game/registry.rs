//! Registry of running games, keyed by channel.
//!
//! Every operation on a channel's entry runs under that entry's `DashMap`
//! shard lock, so a create, a delete, or a validate-then-append on the same
//! channel never interleave. Channels in different shards proceed in
//! parallel.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use shiritori_types::error::GameError;
use shiritori_types::ids::ChannelId;
use tracing::debug;

use super::session::{GameSession, DEFAULT_TERMINAL_CHAR, normalize_terminal_char};

/// What should happen to a session after [`SessionRegistry::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate<R> {
    /// Keep the session in the registry.
    Keep(R),
    /// The game is over; drop the session.
    End(R),
}

impl<R> SessionUpdate<R> {
    fn into_parts(self) -> (R, bool) {
        match self {
            Self::Keep(r) => (r, false),
            Self::End(r) => (r, true),
        }
    }
}

/// Owns every active [`GameSession`], at most one per channel.
pub struct SessionRegistry {
    sessions: DashMap<ChannelId, GameSession>,
    terminal_char: char,
}

impl SessionRegistry {
    /// Create a registry whose sessions lose on `terminal_char`.
    pub fn new(terminal_char: char) -> Self {
        Self {
            sessions: DashMap::new(),
            terminal_char: normalize_terminal_char(terminal_char),
        }
    }

    /// Start a new game in `channel_id`.
    ///
    /// Fails with [`GameError::AlreadyActive`] if one is already running.
    pub fn start(&self, channel_id: &ChannelId) -> Result<GameSession, GameError> {
        match self.sessions.entry(channel_id.clone()) {
            Entry::Occupied(_) => Err(GameError::AlreadyActive),
            Entry::Vacant(vacant) => {
                let session =
                    GameSession::with_terminal_char(channel_id.clone(), self.terminal_char);
                vacant.insert(session.clone());
                debug!(%channel_id, "session started");
                Ok(session)
            }
        }
    }

    /// Discard the game in `channel_id`.
    ///
    /// Fails with [`GameError::NoActiveSession`] if none is running.
    pub fn reset(&self, channel_id: &ChannelId) -> Result<GameSession, GameError> {
        let (_, session) = self
            .sessions
            .remove(channel_id)
            .ok_or(GameError::NoActiveSession)?;
        debug!(%channel_id, words = session.len(), "session reset");
        Ok(session)
    }

    /// Snapshot of the session in `channel_id`, if any.
    pub fn get(&self, channel_id: &ChannelId) -> Option<GameSession> {
        self.sessions.get(channel_id).map(|s| s.value().clone())
    }

    /// Drop the session in `channel_id` without reporting anything.
    ///
    /// Game-overs go through [`SessionRegistry::update`] instead, so the loss
    /// is decided and the session removed under one lock.
    pub fn remove(&self, channel_id: &ChannelId) -> Option<GameSession> {
        self.sessions.remove(channel_id).map(|(_, s)| s)
    }

    /// Run `f` against the session in `channel_id` while holding its lock.
    ///
    /// Returns `None` if no game is running. If `f` returns
    /// [`SessionUpdate::End`] the session is removed before the lock is
    /// released.
    pub fn update<F, R>(&self, channel_id: &ChannelId, f: F) -> Option<R>
    where
        F: FnOnce(&mut GameSession) -> SessionUpdate<R>,
    {
        match self.sessions.entry(channel_id.clone()) {
            Entry::Vacant(_) => None,
            Entry::Occupied(mut occupied) => {
                let (result, end) = f(occupied.get_mut()).into_parts();
                if end {
                    occupied.remove();
                    debug!(%channel_id, "session ended");
                }
                Some(result)
            }
        }
    }

    pub fn is_active(&self, channel_id: &ChannelId) -> bool {
        self.sessions.contains_key(channel_id)
    }

    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }

    /// Channels with a running game, sorted for stable output.
    pub fn active_channels(&self) -> Vec<ChannelId> {
        let mut channels: Vec<ChannelId> =
            self.sessions.iter().map(|entry| entry.key().clone()).collect();
        channels.sort();
        channels
    }

    pub fn terminal_char(&self) -> char {
        self.terminal_char
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINAL_CHAR)
    }
}

impl std::fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("active_sessions", &self.sessions.len())
            .field("terminal_char", &self.terminal_char)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn channel(id: &str) -> ChannelId {
        ChannelId::new(id)
    }

    #[test]
    fn start_creates_empty_session() {
        let registry = SessionRegistry::default();
        let session = registry.start(&channel("a")).unwrap();
        assert!(session.is_empty());
        assert_eq!(session.channel_id(), &channel("a"));
        assert!(registry.is_active(&channel("a")));
    }

    #[test]
    fn start_twice_fails_with_already_active() {
        let registry = SessionRegistry::default();
        registry.start(&channel("a")).unwrap();
        assert_eq!(
            registry.start(&channel("a")).unwrap_err(),
            GameError::AlreadyActive
        );
        assert_eq!(registry.active_count(), 1);
    }

    #[test]
    fn start_does_not_disturb_running_game() {
        let registry = SessionRegistry::default();
        registry.start(&channel("a")).unwrap();
        registry.update(&channel("a"), |s| {
            s.add_word("さくら");
            SessionUpdate::Keep(())
        });
        let _ = registry.start(&channel("a"));
        assert_eq!(registry.get(&channel("a")).unwrap().len(), 1);
    }

    #[test]
    fn reset_without_session_fails() {
        let registry = SessionRegistry::default();
        assert_eq!(
            registry.reset(&channel("a")).unwrap_err(),
            GameError::NoActiveSession
        );
    }

    #[test]
    fn reset_removes_session() {
        let registry = SessionRegistry::default();
        registry.start(&channel("a")).unwrap();
        registry.reset(&channel("a")).unwrap();
        assert!(registry.get(&channel("a")).is_none());
        // A fresh game can be started afterwards
        assert!(registry.start(&channel("a")).is_ok());
    }

    #[test]
    fn channels_are_independent() {
        let registry = SessionRegistry::default();
        registry.start(&channel("a")).unwrap();
        registry.start(&channel("b")).unwrap();
        registry.reset(&channel("a")).unwrap();
        assert!(registry.is_active(&channel("b")));
        assert_eq!(registry.active_channels(), vec![channel("b")]);
    }

    #[test]
    fn update_on_missing_channel_returns_none() {
        let registry = SessionRegistry::default();
        let result = registry.update(&channel("a"), |_| SessionUpdate::Keep(1));
        assert_eq!(result, None);
    }

    #[test]
    fn update_end_removes_session() {
        let registry = SessionRegistry::default();
        registry.start(&channel("a")).unwrap();
        let result = registry.update(&channel("a"), |_| SessionUpdate::End("over"));
        assert_eq!(result, Some("over"));
        assert!(registry.get(&channel("a")).is_none());
    }

    #[test]
    fn remove_returns_session() {
        let registry = SessionRegistry::default();
        registry.start(&channel("a")).unwrap();
        assert!(registry.remove(&channel("a")).is_some());
        assert!(registry.remove(&channel("a")).is_none());
    }

    #[test]
    fn sessions_inherit_terminal_char() {
        let registry = SessionRegistry::new('n');
        let session = registry.start(&channel("a")).unwrap();
        assert_eq!(session.terminal_char(), 'n');
    }

    #[test]
    fn configured_terminal_char_is_lowercased() {
        let registry = SessionRegistry::new('N');
        assert_eq!(registry.terminal_char(), 'n');
        assert_eq!(registry.start(&channel("a")).unwrap().terminal_char(), 'n');
    }

    #[test]
    fn concurrent_starts_create_one_session() {
        let registry = Arc::new(SessionRegistry::default());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.start(&ChannelId::new("race")).is_ok())
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(registry.active_count(), 1);
    }

    #[test]
    fn debug_impl() {
        let registry = SessionRegistry::default();
        let debug = format!("{registry:?}");
        assert!(debug.contains("SessionRegistry"));
        assert!(debug.contains("active_sessions"));
    }
}
