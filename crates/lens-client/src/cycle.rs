//! One complete collect → submit → render cycle against a page.

use tracing::warn;

use lens_core::{Applied, LensError, Page, Session, Trigger};

use crate::client::AnalysisClient;

/// Run a full cycle and wait for it.
///
/// Returns [`LensError::EmptyInput`] when there was nothing to send. A
/// transport failure has already been rendered into the page as the error
/// placeholder and is reported as [`Applied::Failed`].
pub async fn run_cycle<P: Page>(
    session: &mut Session,
    page: &mut P,
    client: &AnalysisClient,
    trigger: Trigger,
) -> Result<Applied, LensError> {
    let Some(ticket) = session.begin(page, trigger)? else {
        return Ok(Applied::Superseded);
    };

    let outcome = client.submit(&ticket.request).await;
    if let Err(ref e) = outcome {
        warn!(url = client.base_url(), "Analysis cycle failed: {}", e);
    }
    Ok(session.finish(page, &ticket, outcome))
}
