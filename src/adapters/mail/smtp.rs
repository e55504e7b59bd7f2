//! SMTP sender using lettre's blocking transport.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};

use crate::config::{SmtpSettings, TlsMode};
use crate::core::models::Message;
use crate::core::ports::{MessageSender, SendError};

/// Plain-text mail over SMTP
pub struct SmtpSender {
    transport: SmtpTransport,
    from: Mailbox,
}

impl std::fmt::Debug for SmtpSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSender").field("from", &self.from).finish_non_exhaustive()
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, SendError> {
    address.parse().map_err(|e: lettre::address::AddressError| SendError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

impl SmtpSender {
    /// Create a sender for the configured relay
    ///
    /// The sender address falls back to the SMTP username when `from` is
    /// not configured.
    pub fn new(settings: &SmtpSettings, credentials: Option<(String, String)>) -> Result<Self, SendError> {
        let from_address = settings
            .from
            .clone()
            .or_else(|| credentials.as_ref().map(|(user, _)| user.clone()))
            .ok_or_else(|| SendError::InvalidAddress {
                address: String::new(),
                reason: "no sender address; set [smtp] from or ROLLCALL_SMTP_USERNAME".to_string(),
            })?;
        let from = parse_mailbox(&from_address)?;

        let relay = match settings.tls {
            TlsMode::Starttls => SmtpTransport::starttls_relay(&settings.host),
            TlsMode::Wrapper => SmtpTransport::relay(&settings.host),
        }
        .map_err(|e| SendError::Transport(e.to_string()))?;

        let mut builder = relay.port(settings.port);
        if let Some((user, password)) = credentials {
            builder = builder.credentials(Credentials::new(user, password));
        } else {
            log::warn!("No SMTP credentials in environment; sending unauthenticated");
        }

        log::debug!("SMTP relay {}:{} ({:?})", settings.host, settings.port, settings.tls);
        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

impl MessageSender for SmtpSender {
    fn send(&self, message: &Message) -> Result<(), SendError> {
        let to = parse_mailbox(&message.recipient)?;

        let email = lettre::Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| SendError::Build(e.to_string()))?;

        self.transport
            .send(&email)
            .map_err(|e| SendError::Transport(e.to_string()))?;
        Ok(())
    }
}
