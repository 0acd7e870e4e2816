//! Name moderation.
//!
//! Every submitted name that passes the local checks is judged by a
//! [`Moderator`]. The production implementation forwards the color and the
//! name to an HTTP proxy in front of a language model; when the proxy cannot
//! be reached or answers garbage, the name is let through.

use async_trait::async_trait;
use oklch_map::{to_display_hex, HexMode, HueDefinition, OklchColor};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Reason recorded when the proxy could not give a verdict
pub const FALLBACK_REASON: &str = "API Error";

/// Feedback shown when the proxy could not give a verdict
pub const FALLBACK_FEEDBACK: &str = "AI罷工中，先算你過！";

/// A moderator's decision about one name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub accepted: bool,
    /// Machine-readable note, kept on the record even when accepted
    pub reason: Option<String>,
    /// Message for the person who typed the name
    pub feedback: Option<String>,
}

impl Verdict {
    pub fn accept() -> Self {
        Self {
            accepted: true,
            ..Default::default()
        }
    }

    fn fallback() -> Self {
        Self {
            accepted: true,
            reason: Some(FALLBACK_REASON.to_string()),
            feedback: Some(FALLBACK_FEEDBACK.to_string()),
        }
    }
}

/// Trait for deciding whether a name describes a color
#[async_trait]
pub trait Moderator: Send + Sync {
    async fn moderate(&self, color: &OklchColor, name: &str, hue: &HueDefinition) -> Verdict;
}

/// Accepts every name without comment
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllModerator;

#[async_trait]
impl Moderator for AcceptAllModerator {
    async fn moderate(&self, _color: &OklchColor, _name: &str, _hue: &HueDefinition) -> Verdict {
        Verdict::accept()
    }
}

#[derive(Debug, Error)]
pub enum ModerationError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Proxy answered with status {0}")]
    Status(u16),

    #[error("Malformed verdict: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModerationRequest<'a> {
    color: &'a OklchColor,
    hex_reference: String,
    input_name: &'a str,
    hue_name: &'a str,
}

/// Outer envelope: the model's answer as a JSON string
#[derive(Debug, Deserialize)]
struct ProxyResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Judgement {
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    feedback: Option<String>,
    #[serde(default)]
    is_suspicious: bool,
}

/// Moderator backed by an HTTP proxy
pub struct HttpModerator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpModerator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ModerationError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn request_verdict(
        &self,
        color: &OklchColor,
        name: &str,
        hue: &HueDefinition,
    ) -> Result<Verdict, ModerationError> {
        let body = ModerationRequest {
            color,
            hex_reference: to_display_hex(color.l, color.c, color.h, HexMode::Clip),
            input_name: name,
            hue_name: hue.name_en,
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ModerationError::Status(status.as_u16()));
        }

        let envelope: ProxyResponse = response.json().await?;
        let judgement: Judgement = serde_json::from_str(&envelope.text)?;

        Ok(Verdict {
            accepted: !judgement.is_suspicious,
            reason: judgement.reason,
            feedback: judgement.feedback,
        })
    }
}

#[async_trait]
impl Moderator for HttpModerator {
    async fn moderate(&self, color: &OklchColor, name: &str, hue: &HueDefinition) -> Verdict {
        match self.request_verdict(color, name, hue).await {
            Ok(verdict) => {
                tracing::debug!(
                    name = name,
                    accepted = verdict.accepted,
                    reason = ?verdict.reason,
                    "Moderation verdict"
                );
                verdict
            }
            Err(e) => {
                tracing::warn!(%e, name = name, "Moderation failed, accepting name");
                Verdict::fallback()
            }
        }
    }
}
