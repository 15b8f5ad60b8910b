//! Bootstrap code for creating the first admin account.
//!
//! A fresh install has no admin, so startup issues a code and writes it to the log.
//! `POST /auth/register` with `role = "admin"` redeems it. A code is good for one
//! registration and for 15 minutes, and it is never persisted.

use rand::{distr::Alphanumeric, Rng};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

const CODE_LIFETIME: Duration = Duration::from_secs(15 * 60);
const CODE_LEN: usize = 32;

struct IssuedCode {
    value: String,
    issued_at: Instant,
    lifetime: Duration,
}

impl IssuedCode {
    fn expired(&self) -> bool {
        self.issued_at.elapsed() >= self.lifetime
    }
}

/// Holds at most one outstanding admin bootstrap code.
///
/// Clones point at the same slot; `AppState` and startup share one instance.
#[derive(Clone)]
pub struct AdminCodeService {
    slot: Arc<RwLock<Option<IssuedCode>>>,
    lifetime: Duration,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self::with_ttl(CODE_LIFETIME)
    }

    /// Service whose codes stop working `lifetime` after they are issued.
    pub fn with_ttl(lifetime: Duration) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            lifetime,
        }
    }

    /// Issues a new alphanumeric code. An older outstanding code stops working.
    pub async fn generate(&self) -> String {
        let value: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(CODE_LEN)
            .map(char::from)
            .collect();

        *self.slot.write().await = Some(IssuedCode {
            value: value.clone(),
            issued_at: Instant::now(),
            lifetime: self.lifetime,
        });

        value
    }

    /// Redeems `candidate` against the outstanding code.
    ///
    /// A match clears the slot so the code works once. An expired code is cleared and
    /// never matches. A mismatch leaves the outstanding code usable.
    pub async fn validate_and_consume(&self, candidate: &str) -> bool {
        let mut slot = self.slot.write().await;

        let redeemed = match slot.as_ref() {
            Some(issued) if issued.expired() => false,
            Some(issued) => issued.value == candidate,
            None => return false,
        };

        if redeemed || slot.as_ref().is_some_and(IssuedCode::expired) {
            *slot = None;
        }

        redeemed
    }

    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        self.slot
            .read()
            .await
            .as_ref()
            .is_some_and(|issued| !issued.expired())
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test]
    async fn issues_alphanumeric_code() {
        let codes = AdminCodeService::new();
        assert!(!codes.has_valid_code().await);

        let code = codes.generate().await;

        assert_eq!(code.len(), CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(codes.has_valid_code().await);
    }

    #[tokio::test]
    async fn code_works_once() {
        let codes = AdminCodeService::new();
        let code = codes.generate().await;

        assert!(codes.validate_and_consume(&code).await);
        assert!(!codes.validate_and_consume(&code).await);
        assert!(!codes.has_valid_code().await);
    }

    #[tokio::test]
    async fn mismatch_keeps_outstanding_code() {
        let codes = AdminCodeService::new();
        let code = codes.generate().await;

        assert!(!codes.validate_and_consume("not-the-code").await);
        assert!(codes.validate_and_consume(&code).await);
    }

    #[tokio::test]
    async fn nothing_to_redeem_before_issue() {
        assert!(!AdminCodeService::new().validate_and_consume("").await);
    }

    #[tokio::test]
    async fn reissue_replaces_previous_code() {
        let codes = AdminCodeService::new();
        let first = codes.generate().await;
        let second = codes.generate().await;

        assert!(!codes.validate_and_consume(&first).await);
        assert!(codes.validate_and_consume(&second).await);
    }

    #[tokio::test]
    async fn lapsed_code_is_refused() {
        let codes = AdminCodeService::with_ttl(Duration::from_millis(20));
        let code = codes.generate().await;

        sleep(Duration::from_millis(50)).await;

        assert!(!codes.has_valid_code().await);
        assert!(!codes.validate_and_consume(&code).await);
    }

    #[tokio::test]
    async fn clones_share_one_slot() {
        let codes = AdminCodeService::new();
        let state_copy = codes.clone();
        let code = codes.generate().await;

        assert!(state_copy.validate_and_consume(&code).await);
        assert!(!codes.has_valid_code().await);
    }
}
