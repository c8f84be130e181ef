//! Feedback command

use capsense_client::{submit_request, CapsenseApi};
use capsense_types::{FeedbackRequest, FeedbackVerdict};

use crate::error::CliError;

/// Record a verdict on a response given on the command line
pub async fn send_feedback<A>(
    api: &A,
    verdict: FeedbackVerdict,
    text: &str,
    response: &str,
) -> Result<(), CliError>
where
    A: CapsenseApi + ?Sized,
{
    let request = FeedbackRequest::new(text, response, verdict);
    let outcome = submit_request(api, &request).await;

    println!("{}", outcome.status_text());

    if outcome.is_saved() {
        Ok(())
    } else {
        Err(CliError::Command(outcome.status_text().to_string()))
    }
}
