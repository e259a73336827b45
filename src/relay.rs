use axum::http::StatusCode;
use thiserror::Error;

/// An uploaded attachment forwarded to the relay verbatim.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub subject: String,
    pub body: String,
    pub attachments: Vec<Attachment>,
}

impl OutboundMessage {
    /// Compose the anonymous submission. The sharing decision shows up in
    /// both the subject tag and the body so the recipient can triage from
    /// the subject line alone.
    pub fn compose(
        message: &str,
        can_share: bool,
        timestamp: &str,
        attachments: Vec<Attachment>,
    ) -> Self {
        let tag = if can_share { "[CAN SHARE]" } else { "[PRIVATE]" };
        let sharing_status = if can_share {
            "YES - this message may be shared publicly"
        } else {
            "NO - internal use only"
        };

        let body = format!(
            "ANONYMOUS SUBMISSION\n\n\
             Date & Time: {timestamp}\n\
             Can share publicly: {sharing_status}\n\n\
             Message:\n{message}\n\n\
             ---\n\
             Sent anonymously through the petition site. The sender did not\n\
             provide any personal information."
        );

        Self {
            subject: format!("[ANONYMOUS] New message {tag}"),
            body,
            attachments,
        }
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("message relay is not configured")]
    Unconfigured,

    #[error("relay transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay rejected message: {0}")]
    Rejected(StatusCode),
}

/// The external mail-sending collaborator, reached over HTTP. Unlike the
/// ledger path there is no local fallback here: a failed hand-off is a
/// failed request, reported honestly.
#[derive(Debug, Clone)]
pub struct MessageRelay {
    url: Option<String>,
    http: reqwest::Client,
}

impl MessageRelay {
    pub fn new(url: Option<String>) -> Self {
        Self {
            url,
            http: reqwest::Client::new(),
        }
    }

    pub async fn send(&self, message: &OutboundMessage) -> Result<(), RelayError> {
        let url = self.url.as_deref().ok_or(RelayError::Unconfigured)?;

        let mut form = reqwest::multipart::Form::new()
            .text("subject", message.subject.clone())
            .text("body", message.body.clone());
        for (index, attachment) in message.attachments.iter().enumerate() {
            let mut part = reqwest::multipart::Part::bytes(attachment.data.clone())
                .file_name(attachment.filename.clone());
            if let Some(content_type) = &attachment.content_type {
                part = part.mime_str(content_type)?;
            }
            form = form.part(format!("file_{index}"), part);
        }

        let response = self.http.post(url).multipart(form).send().await?;
        if !response.status().is_success() {
            return Err(RelayError::Rejected(response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_tags_shareable_messages() {
        let message =
            OutboundMessage::compose("save our college", true, "November 27, 2025", Vec::new());
        assert!(message.subject.ends_with("[CAN SHARE]"));
        assert!(message.body.contains("save our college"));
        assert!(message.body.contains("November 27, 2025"));
        assert!(message.body.contains("YES"));
    }

    #[test]
    fn compose_tags_private_messages() {
        let message = OutboundMessage::compose("please keep this", false, "now", Vec::new());
        assert!(message.subject.ends_with("[PRIVATE]"));
        assert!(message.body.contains("NO - internal use only"));
    }

    #[tokio::test]
    async fn unconfigured_relay_fails_honestly() {
        let relay = MessageRelay::new(None);
        let message = OutboundMessage::compose("hello", false, "now", Vec::new());
        assert!(matches!(
            relay.send(&message).await,
            Err(RelayError::Unconfigured)
        ));
    }
}
