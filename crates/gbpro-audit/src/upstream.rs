use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::UpstreamError;
use crate::ports::{CompletionRequest, TextGenerator};

/// Default per-call deadline for external collaborators.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(8);

/// Run one collaborator call under `deadline`, mapping an elapsed timer to
/// [`UpstreamError::Timeout`].
pub(crate) async fn with_deadline<T, F>(deadline: Duration, call: F) -> Result<T, UpstreamError>
where
    F: Future<Output = Result<T, UpstreamError>>,
{
    tokio::time::timeout(deadline, call)
        .await
        .unwrap_or_else(|_| Err(UpstreamError::Timeout(deadline.as_millis())))
}

/// Ask the generator for a JSON object and parse it into `T`.
///
/// A reply that is not valid JSON for `T` is [`UpstreamError::InvalidResponse`];
/// callers fall back to their templates on any error.
pub(crate) async fn complete_json<T: DeserializeOwned>(
    generator: &dyn TextGenerator,
    request: &CompletionRequest,
    deadline: Duration,
) -> Result<T, UpstreamError> {
    let text = with_deadline(deadline, generator.complete(request)).await?;
    serde_json::from_str(strip_code_fence(&text))
        .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
}

/// Models occasionally wrap JSON in a markdown fence even in JSON mode.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(trimmed, str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn elapsed_deadline_is_a_timeout() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok::<_, UpstreamError>(1)
        };
        let err = with_deadline(Duration::from_secs(2), slow)
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Timeout(2000)));
    }

    #[tokio::test]
    async fn fast_call_passes_through() {
        let value = with_deadline(Duration::from_secs(2), async { Ok(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn code_fences_are_stripped() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("  {\"a\":1} "), "{\"a\":1}");
    }
}
