//! In-memory Demo-Benutzer und Token-Verwaltung.
//!
//! Login issues an access/refresh token pair with configurable TTLs.
//! Refresh rotates the pair: the old refresh token is revoked when a new
//! pair is handed out. Nothing is persisted; a restart logs everyone out.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::AuthConfig;

#[derive(Debug, Clone)]
pub struct DemoUser {
    pub id: u64,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone)]
struct TokenEntry {
    user_id: u64,
    kind: TokenKind,
    expires_at: DateTime<Utc>,
    /// The other half of the issued pair, revoked together on logout.
    paired: String,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Shared token and user registry.
#[derive(Clone)]
pub struct AuthStore {
    users: Arc<Vec<DemoUser>>,
    tokens: Arc<RwLock<HashMap<String, TokenEntry>>>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

fn demo_users() -> Vec<DemoUser> {
    vec![
        DemoUser {
            id: 1,
            email: "admin@aktenwald.dev".to_string(),
            password: "admin123".to_string(),
            name: "Antonia Wald".to_string(),
            role: "admin".to_string(),
            avatar: "https://i.pravatar.cc/150?img=12".to_string(),
        },
        DemoUser {
            id: 2,
            email: "demo@aktenwald.dev".to_string(),
            password: "demo123".to_string(),
            name: "Deniz Muster".to_string(),
            role: "customer".to_string(),
            avatar: "https://i.pravatar.cc/150?img=32".to_string(),
        },
    ]
}

/// Constant-time byte comparison to keep password checks timing-neutral.
fn constant_time_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

impl AuthStore {
    pub fn new(cfg: &AuthConfig) -> Self {
        Self {
            users: Arc::new(demo_users()),
            tokens: Arc::new(RwLock::new(HashMap::new())),
            access_ttl: Duration::seconds(cfg.access_ttl_secs as i64),
            refresh_ttl: Duration::seconds(cfg.refresh_ttl_secs as i64),
        }
    }

    /// Verifies credentials and issues a fresh token pair.
    pub async fn login(&self, email: &str, password: &str) -> Option<(TokenPair, DemoUser)> {
        let user = self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
            .filter(|u| constant_time_eq(&u.password, password))?
            .clone();
        let pair = self.issue(user.id).await;
        Some((pair, user))
    }

    /// Rotates a refresh token: the old pair's refresh half is revoked and a
    /// new pair is issued. Returns `None` for unknown, expired, or
    /// wrong-kind tokens.
    pub async fn refresh(&self, refresh_token: &str) -> Option<TokenPair> {
        let user_id = {
            let mut tokens = self.tokens.write().await;
            let entry = tokens.get(refresh_token)?.clone();
            if entry.kind != TokenKind::Refresh || entry.expires_at <= Utc::now() {
                tokens.remove(refresh_token);
                return None;
            }
            tokens.remove(refresh_token);
            entry.user_id
        };
        Some(self.issue(user_id).await)
    }

    /// Resolves an access token to its user, if valid and unexpired.
    pub async fn authenticate(&self, access_token: &str) -> Option<DemoUser> {
        let user_id = {
            let tokens = self.tokens.read().await;
            let entry = tokens.get(access_token)?;
            if entry.kind != TokenKind::Access || entry.expires_at <= Utc::now() {
                return None;
            }
            entry.user_id
        };
        self.users.iter().find(|u| u.id == user_id).cloned()
    }

    /// Revokes an access token together with its paired refresh token.
    /// Returns whether anything was revoked.
    pub async fn logout(&self, access_token: &str) -> bool {
        let mut tokens = self.tokens.write().await;
        match tokens.remove(access_token) {
            Some(entry) => {
                tokens.remove(&entry.paired);
                true
            }
            None => false,
        }
    }

    /// Drops expired tokens. Called periodically from a background task to
    /// avoid unbounded growth.
    pub async fn purge_expired(&self) {
        let now = Utc::now();
        let mut tokens = self.tokens.write().await;
        tokens.retain(|_, entry| entry.expires_at > now);
    }

    async fn issue(&self, user_id: u64) -> TokenPair {
        let now = Utc::now();
        let access_token = Uuid::new_v4().simple().to_string();
        let refresh_token = Uuid::new_v4().simple().to_string();
        let mut tokens = self.tokens.write().await;
        tokens.insert(
            access_token.clone(),
            TokenEntry {
                user_id,
                kind: TokenKind::Access,
                expires_at: now + self.access_ttl,
                paired: refresh_token.clone(),
            },
        );
        tokens.insert(
            refresh_token.clone(),
            TokenEntry {
                user_id,
                kind: TokenKind::Refresh,
                expires_at: now + self.refresh_ttl,
                paired: access_token.clone(),
            },
        );
        TokenPair { access_token, refresh_token }
    }
}
