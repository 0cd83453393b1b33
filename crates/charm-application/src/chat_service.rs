//! Mock chat sessions.
//!
//! Replies are canned strings keyed by the character's category, delivered
//! after a random "typing" delay. Sessions live in memory only and are
//! evicted once idle for too long or when the store is full.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use charm_core::chat::{ChatMessage, ChatSession, ReplyDelay, ResponseTable};
use charm_core::config::ChatConfig;
use charm_core::error::{CharmError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::catalog_service::CatalogService;

/// One user message and the reply it produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub user_message: ChatMessage,
    pub reply: ChatMessage,
    /// The session character's interaction count after the reply
    pub interactions: u64,
}

/// Bounds on the in-memory session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Sessions untouched for this long are dropped on the next `open`
    pub idle_ttl: Duration,
    /// Upper bound on stored sessions; the least recently active idle
    /// sessions go first
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(30 * 60),
            max_sessions: 1000,
        }
    }
}

impl From<&ChatConfig> for SessionLimits {
    fn from(config: &ChatConfig) -> Self {
        Self {
            idle_ttl: config.session_idle_ttl(),
            max_sessions: config.max_sessions,
        }
    }
}

struct SessionEntry {
    session: ChatSession,
    last_active: Instant,
    /// Replies still being "typed"
    pending_replies: u32,
}

impl SessionEntry {
    fn new(session: ChatSession) -> Self {
        Self {
            session,
            last_active: Instant::now(),
            pending_replies: 0,
        }
    }

    fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    fn begin_reply(&mut self) {
        self.pending_replies += 1;
        self.session.typing = true;
        self.touch();
    }

    fn end_reply(&mut self) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.session.typing = self.pending_replies > 0;
        self.touch();
    }

    fn is_idle(&self) -> bool {
        self.pending_replies == 0
    }
}

pub struct ChatService {
    catalog: Arc<CatalogService>,
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
    responses: ResponseTable,
    delay: ReplyDelay,
    limits: SessionLimits,
    rng: Mutex<StdRng>,
}

impl ChatService {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self {
            catalog,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            responses: ResponseTable::default(),
            delay: ReplyDelay::default(),
            limits: SessionLimits::default(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_responses(mut self, responses: ResponseTable) -> Self {
        self.responses = responses;
        self
    }

    pub fn with_delay(mut self, delay: ReplyDelay) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_limits(mut self, limits: SessionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Replaces the random source, e.g. with a seeded one in tests.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Mutex::new(rng);
        self
    }

    /// Opens a session with a catalog character.
    pub async fn open(&self, character_id: &str) -> Result<ChatSession> {
        let character = self.catalog.get(character_id).await?;
        let session = ChatSession::open(character);

        tracing::info!(
            session_id = %session.id,
            character_id = %session.character.id,
            "Opened chat session"
        );

        let mut sessions = self.sessions.write().await;
        self.evict(&mut sessions);
        sessions.insert(session.id.clone(), SessionEntry::new(session.clone()));
        Ok(session)
    }

    /// Drops expired idle sessions, then the least recently active idle
    /// ones until there is room for one more.
    fn evict(&self, sessions: &mut HashMap<String, SessionEntry>) {
        let before = sessions.len();
        let now = Instant::now();
        sessions.retain(|_, entry| {
            !entry.is_idle() || now.duration_since(entry.last_active) < self.limits.idle_ttl
        });

        let max = self.limits.max_sessions.max(1);
        if sessions.len() >= max {
            let mut idle: Vec<(Instant, String)> = sessions
                .iter()
                .filter(|(_, entry)| entry.is_idle())
                .map(|(id, entry)| (entry.last_active, id.clone()))
                .collect();
            idle.sort();
            let excess = sessions.len() + 1 - max;
            for (_, id) in idle.into_iter().take(excess) {
                sessions.remove(&id);
            }
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "Evicted chat sessions");
        }
    }

    pub async fn get(&self, session_id: &str) -> Result<ChatSession> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .map(|entry| entry.session.clone())
            .ok_or_else(|| CharmError::not_found("chat session", session_id))
    }

    /// Sends a user message and waits for the character's reply.
    ///
    /// The session lock is not held across the delay, so the session stays
    /// readable (with `typing` set) while any reply is pending.
    pub async fn send(&self, session_id: &str, content: &str) -> Result<ChatExchange> {
        let content = content.trim();
        if content.is_empty() {
            return Err(CharmError::validation("Message content must not be empty"));
        }

        let (user_message, category) = {
            let mut sessions = self.sessions.write().await;
            let entry = sessions
                .get_mut(session_id)
                .ok_or_else(|| CharmError::not_found("chat session", session_id))?;
            let message = entry.session.push_user(content).clone();
            entry.begin_reply();
            (message, entry.session.character.category.clone())
        };

        let picked = self
            .rng
            .lock()
            .map(|mut rng| {
                let wait = self.delay.sample(&mut *rng);
                let reply = self.responses.pick(category.as_deref(), &mut *rng).to_string();
                (wait, reply)
            })
            .ok();
        let Some((wait, reply_text)) = picked else {
            if let Some(entry) = self.sessions.write().await.get_mut(session_id) {
                entry.end_reply();
            }
            return Err(CharmError::internal("chat rng poisoned"));
        };

        tracing::debug!(session_id, delay_ms = wait.as_millis() as u64, "Typing reply");
        tokio::time::sleep(wait).await;

        let mut sessions = self.sessions.write().await;
        // Closed while typing
        let entry = sessions
            .get_mut(session_id)
            .ok_or_else(|| CharmError::not_found("chat session", session_id))?;
        let reply = entry.session.push_reply(reply_text).clone();
        entry.end_reply();

        Ok(ChatExchange {
            user_message,
            reply,
            interactions: entry.session.character.interactions,
        })
    }

    /// Drops a session. Returns whether it existed.
    pub async fn close(&self, session_id: &str) -> bool {
        let removed = self.sessions.write().await.remove(session_id).is_some();
        if removed {
            tracing::info!(session_id, "Closed chat session");
        }
        removed
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charm_core::chat::MessageSender;
    use charm_infrastructure::InMemoryCharacterRepository;
    use std::collections::BTreeMap;

    fn catalog() -> Arc<CatalogService> {
        Arc::new(CatalogService::new(Arc::new(
            InMemoryCharacterRepository::new(),
        )))
    }

    fn instant_service() -> ChatService {
        ChatService::new(catalog())
            .with_delay(ReplyDelay::none())
            .with_rng(StdRng::seed_from_u64(7))
    }

    #[tokio::test]
    async fn test_open_seeds_greeting() {
        let service = instant_service();
        let session = service.open("f4").await.unwrap();

        assert_eq!(session.character.name, "Detective Holmes");
        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].sender, MessageSender::Character);
        assert_eq!(service.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_open_unknown_character() {
        let service = instant_service();
        assert!(service.open("missing").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_send_replies_from_category_table() {
        let service = instant_service();
        let session = service.open("f1").await.unwrap();
        let before = session.character.interactions;

        let exchange = service.send(&session.id, "  What is a quark? ").await.unwrap();
        assert_eq!(exchange.user_message.content, "What is a quark?");
        assert_eq!(exchange.user_message.sender, MessageSender::User);
        assert_eq!(exchange.reply.sender, MessageSender::Character);
        assert!(
            ResponseTable::default()
                .lookup(Some("science"))
                .contains(&exchange.reply.content)
        );
        assert_eq!(exchange.interactions, before + 1);

        let stored = service.get(&session.id).await.unwrap();
        assert!(!stored.typing);
        assert_eq!(stored.count_by(MessageSender::User), 1);
        assert_eq!(stored.last_message().unwrap(), &exchange.reply);
    }

    #[tokio::test]
    async fn test_unknown_category_uses_default_replies() {
        let service = instant_service();
        // "The Rock" is filed under Entertainment, which has no table entry
        let session = service.open("2").await.unwrap();

        let exchange = service.send(&session.id, "hi").await.unwrap();
        assert!(
            ResponseTable::default()
                .lookup(None)
                .contains(&exchange.reply.content)
        );
    }

    #[tokio::test]
    async fn test_configured_responses_are_used() {
        let mut overrides = BTreeMap::new();
        overrides.insert("Art".to_string(), vec!["Let's paint.".to_string()]);
        let service = instant_service().with_responses(ResponseTable::with_overrides(&overrides));

        let session = service.open("picasso").await.unwrap();
        let exchange = service.send(&session.id, "hello").await.unwrap();
        assert_eq!(exchange.reply.content, "Let's paint.");
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let service = instant_service();
        let session = service.open("3").await.unwrap();

        let err = service.send(&session.id, "   ").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get(&session.id).await.unwrap().messages.len(), 1);
    }

    #[tokio::test]
    async fn test_send_to_unknown_session() {
        let service = instant_service();
        assert!(service.send("nope", "hi").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_close_removes_session() {
        let service = instant_service();
        let session = service.open("1").await.unwrap();

        assert!(service.close(&session.id).await);
        assert!(!service.close(&session.id).await);
        assert!(service.get(&session.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_delay() {
        let service = Arc::new(
            ChatService::new(catalog())
                .with_delay(ReplyDelay::new(1500, 1500).unwrap())
                .with_rng(StdRng::seed_from_u64(1)),
        );
        let session = service.open("f2").await.unwrap();

        let sender = Arc::clone(&service);
        let session_id = session.id.clone();
        let pending = tokio::spawn(async move { sender.send(&session_id, "Once upon").await });

        tokio::time::sleep(Duration::from_millis(1000)).await;
        let mid = service.get(&session.id).await.unwrap();
        assert!(mid.typing);
        assert_eq!(mid.last_message().unwrap().sender, MessageSender::User);

        let exchange = pending.await.unwrap().unwrap();
        assert_eq!(exchange.reply.sender, MessageSender::Character);
        assert!(!service.get(&session.id).await.unwrap().typing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_stays_set_while_any_reply_is_pending() {
        let service = Arc::new(
            ChatService::new(catalog())
                .with_delay(ReplyDelay::new(1000, 1000).unwrap())
                .with_rng(StdRng::seed_from_u64(3)),
        );
        let session = service.open("f1").await.unwrap();

        let first = {
            let service = Arc::clone(&service);
            let id = session.id.clone();
            tokio::spawn(async move { service.send(&id, "first").await })
        };
        tokio::time::sleep(Duration::from_millis(500)).await;
        let second = {
            let service = Arc::clone(&service);
            let id = session.id.clone();
            tokio::spawn(async move { service.send(&id, "second").await })
        };

        // First reply lands at t=1000ms, second at t=1500ms
        first.await.unwrap().unwrap();
        let between = service.get(&session.id).await.unwrap();
        assert!(between.typing);
        assert_eq!(between.count_by(MessageSender::User), 2);

        second.await.unwrap().unwrap();
        assert!(!service.get(&session.id).await.unwrap().typing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_expire_on_open() {
        let service = instant_service().with_limits(SessionLimits {
            idle_ttl: Duration::from_secs(60),
            max_sessions: 100,
        });

        let stale = service.open("1").await.unwrap();
        tokio::time::advance(Duration::from_secs(45)).await;
        let active = service.open("2").await.unwrap();
        tokio::time::advance(Duration::from_secs(30)).await;
        service.send(&active.id, "still here").await.unwrap();

        service.open("3").await.unwrap();
        assert!(service.get(&stale.id).await.unwrap_err().is_not_found());
        assert!(service.get(&active.id).await.is_ok());
        assert_eq!(service.session_count().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_capacity_evicts_least_recently_active() {
        let service = instant_service().with_limits(SessionLimits {
            idle_ttl: Duration::from_secs(3600),
            max_sessions: 2,
        });

        let a = service.open("1").await.unwrap();
        tokio::time::advance(Duration::from_secs(1)).await;
        let b = service.open("2").await.unwrap();
        tokio::time::advance(Duration::from_secs(1)).await;
        // Activity makes `a` newer than `b`
        service.send(&a.id, "hello").await.unwrap();
        tokio::time::advance(Duration::from_secs(1)).await;

        let c = service.open("3").await.unwrap();
        assert_eq!(service.session_count().await, 2);
        assert!(service.get(&b.id).await.unwrap_err().is_not_found());
        assert!(service.get(&a.id).await.is_ok());
        assert!(service.get(&c.id).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_sessions_are_not_evicted() {
        let service = Arc::new(
            ChatService::new(catalog())
                .with_delay(ReplyDelay::new(5000, 5000).unwrap())
                .with_limits(SessionLimits {
                    idle_ttl: Duration::from_secs(1),
                    max_sessions: 1,
                }),
        );
        let busy = service.open("f2").await.unwrap();

        let pending = {
            let service = Arc::clone(&service);
            let id = busy.id.clone();
            tokio::spawn(async move { service.send(&id, "write me a sonnet").await })
        };
        tokio::time::sleep(Duration::from_secs(2)).await;

        service.open("f3").await.unwrap();
        assert!(service.get(&busy.id).await.unwrap().typing);
        assert!(pending.await.unwrap().is_ok());
    }
}
