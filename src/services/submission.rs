use oklch_map::{generate_id, is_prefix_only, normalize_name, ColorEntry, HueDefinition, OklchColor};
use std::sync::Arc;

use super::{EntryStore, Moderator};
use crate::error::ApiError;

pub const INPUT_TOO_LONG: &str = "INPUT_TOO_LONG";
pub const PREFIX_ONLY: &str = "PREFIX_ONLY";

const TOO_LONG_FEEDBACK: &str = "這名字太長長長長長了吧...！";
const ACCEPTED_FEEDBACK: &str = "命名十分貼切！";
const REJECTED_FEEDBACK: &str = "這名字沒辦法收錄喔";

/// Result of one submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub accepted: bool,
    pub feedback: String,
    /// The stored record, suspicious or not
    pub entry: ColorEntry,
}

/// Checks a submitted name, asks the moderator and stores the record
pub struct SubmissionService {
    store: Arc<dyn EntryStore>,
    moderator: Arc<dyn Moderator>,
    max_name_length: usize,
}

impl SubmissionService {
    pub fn new(
        store: Arc<dyn EntryStore>,
        moderator: Arc<dyn Moderator>,
        max_name_length: usize,
    ) -> Self {
        Self {
            store,
            moderator,
            max_name_length,
        }
    }

    /// Submit `raw_name` for `color`, which must belong to `hue`.
    ///
    /// Flagged names are still stored so they can be audited; only an empty
    /// name is refused outright.
    pub async fn submit(
        &self,
        color: OklchColor,
        hue: &HueDefinition,
        raw_name: &str,
    ) -> Result<SubmissionOutcome, ApiError> {
        let name = normalize_name(raw_name);
        if name.is_empty() {
            return Err(ApiError::BadRequest("name is empty".to_string()));
        }

        let (accepted, reason, feedback) = if name.chars().count() > self.max_name_length {
            (
                false,
                Some(INPUT_TOO_LONG.to_string()),
                TOO_LONG_FEEDBACK.to_string(),
            )
        } else if is_prefix_only(&name) {
            (
                false,
                Some(PREFIX_ONLY.to_string()),
                format!("後面好像少了顏色？試試看：{name}紅、{name}藍..."),
            )
        } else {
            let verdict = self.moderator.moderate(&color, &name, hue).await;
            let feedback = verdict.feedback.unwrap_or_else(|| {
                if verdict.accepted {
                    ACCEPTED_FEEDBACK
                } else {
                    REJECTED_FEEDBACK
                }
                .to_string()
            });
            (verdict.accepted, verdict.reason, feedback)
        };

        let id = generate_id(&mut rand::thread_rng());
        let mut entry = ColorEntry::new(id, color, name, chrono::Utc::now().timestamp_millis());
        entry.is_suspicious = !accepted;
        entry.suspicious_reason = reason;

        self.store.append(entry.clone()).await?;

        tracing::info!(
            id = %entry.id,
            name = %entry.name,
            hue = hue.id,
            accepted,
            reason = ?entry.suspicious_reason,
            "Name submitted"
        );

        Ok(SubmissionOutcome {
            accepted,
            feedback,
            entry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{InMemoryStore, Verdict};
    use async_trait::async_trait;
    use oklch_map::find_hue;

    struct FixedModerator(Verdict);

    #[async_trait]
    impl Moderator for FixedModerator {
        async fn moderate(&self, _: &OklchColor, _: &str, _: &HueDefinition) -> Verdict {
            self.0.clone()
        }
    }

    fn service(verdict: Verdict) -> (SubmissionService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let service = SubmissionService::new(store.clone(), Arc::new(FixedModerator(verdict)), 30);
        (service, store)
    }

    fn red() -> &'static HueDefinition {
        find_hue(25.0).unwrap()
    }

    fn color() -> OklchColor {
        OklchColor::new(0.55, 0.15, 25.0)
    }

    #[tokio::test]
    async fn test_accepted_name_is_stored() {
        let (service, store) = service(Verdict::accept());

        let outcome = service.submit(color(), red(), "  磚紅色 ").await.unwrap();

        assert!(outcome.accepted);
        assert_eq!(outcome.feedback, ACCEPTED_FEEDBACK);
        assert_eq!(outcome.entry.name, "磚紅");
        assert_eq!(outcome.entry.votes, 1);
        assert!(!outcome.entry.is_seed);
        assert!(!outcome.entry.is_suspicious);
        assert_eq!(outcome.entry.id.len(), 9);
        assert!(outcome.entry.timestamp > 0);
        assert_eq!(store.snapshot().await, vec![outcome.entry]);
    }

    #[tokio::test]
    async fn test_empty_name_is_refused() {
        let (service, store) = service(Verdict::accept());

        let err = service.submit(color(), red(), "   ").await.unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_long_name_is_flagged() {
        let (service, store) = service(Verdict::accept());
        let name = "紅".repeat(31);

        let outcome = service.submit(color(), red(), &name).await.unwrap();

        assert!(!outcome.accepted);
        assert_eq!(outcome.feedback, TOO_LONG_FEEDBACK);
        assert!(outcome.entry.is_suspicious);
        assert_eq!(outcome.entry.suspicious_reason.as_deref(), Some(INPUT_TOO_LONG));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_name_at_length_limit_is_moderated() {
        let (service, _store) = service(Verdict::accept());
        let name = "紅".repeat(30);

        let outcome = service.submit(color(), red(), &name).await.unwrap();
        assert!(outcome.accepted);
    }

    #[tokio::test]
    async fn test_prefix_only_name_is_flagged() {
        let (service, _store) = service(Verdict::accept());

        let outcome = service.submit(color(), red(), "淺").await.unwrap();

        assert!(!outcome.accepted);
        assert_eq!(outcome.entry.suspicious_reason.as_deref(), Some(PREFIX_ONLY));
        assert_eq!(outcome.feedback, "後面好像少了顏色？試試看：淺紅、淺藍...");
    }

    #[tokio::test]
    async fn test_rejected_name_keeps_reason() {
        let (service, _store) = service(Verdict {
            accepted: false,
            reason: Some("not a color".to_string()),
            feedback: None,
        });

        let outcome = service.submit(color(), red(), "香蕉").await.unwrap();

        assert!(!outcome.accepted);
        assert_eq!(outcome.feedback, REJECTED_FEEDBACK);
        assert!(outcome.entry.is_suspicious);
        assert_eq!(outcome.entry.suspicious_reason.as_deref(), Some("not a color"));
    }

    #[tokio::test]
    async fn test_accepted_name_keeps_moderator_note() {
        let (service, _store) = service(Verdict {
            accepted: true,
            reason: Some("API Error".to_string()),
            feedback: Some("AI罷工中，先算你過！".to_string()),
        });

        let outcome = service.submit(color(), red(), "紅").await.unwrap();

        assert!(outcome.accepted);
        assert!(!outcome.entry.is_suspicious);
        assert_eq!(outcome.entry.suspicious_reason.as_deref(), Some("API Error"));
        assert_eq!(outcome.feedback, "AI罷工中，先算你過！");
    }
}
