use tokio::sync::mpsc;
use uuid::Uuid;

/// Default capacity of the email intent queue.
pub const EMAIL_QUEUE_CAPACITY: usize = 256;

/// Request to mail a finished report to the address the caller gave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailIntent {
    pub audit_id: Uuid,
    pub email: String,
    pub business_name: String,
    pub score: u8,
}

/// Sending half of the email queue. Never blocks the audit.
#[derive(Debug, Clone)]
pub struct EmailDispatch {
    tx: mpsc::Sender<EmailIntent>,
}

impl EmailDispatch {
    /// New queue; the receiver goes to whoever delivers mail.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<EmailIntent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Queue an intent, dropping it with a warning if the queue is full or
    /// the consumer has gone away.
    pub fn submit(&self, intent: EmailIntent) {
        if let Err(e) = self.tx.try_send(intent) {
            let reason = match &e {
                mpsc::error::TrySendError::Full(_) => "queue full",
                mpsc::error::TrySendError::Closed(_) => "dispatcher stopped",
            };
            let intent = e.into_inner();
            tracing::warn!(
                audit_id = %intent.audit_id,
                reason,
                "dropping audit report email"
            );
        }
    }
}

/// Drain intents until every sender is dropped.
///
/// Mail delivery is not wired to a provider; each intent is logged.
pub async fn run_email_dispatcher(mut rx: mpsc::Receiver<EmailIntent>) {
    while let Some(intent) = rx.recv().await {
        tracing::info!(
            audit_id = %intent.audit_id,
            email = %intent.email,
            business_name = %intent.business_name,
            score = intent.score,
            "audit report queued for email delivery"
        );
    }
    tracing::debug!("email dispatcher stopped");
}
