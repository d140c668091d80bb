use crate::clients::{Notifier, ReviewRequester};
use crate::errors::AppError;
use crate::event::EventContext;
use crate::notification::ReviewNotification;
use crate::selection::SelectionResult;
use crate::types::ReviewerPool;

/// Sends the selection to GitHub, then (optionally) announces it on Slack.
pub struct AssignmentDispatcher<'a> {
    requester: &'a dyn ReviewRequester,
    notifier: Option<&'a dyn Notifier>,
}

impl<'a> AssignmentDispatcher<'a> {
    pub fn new(requester: &'a dyn ReviewRequester, notifier: Option<&'a dyn Notifier>) -> Self {
        Self {
            requester,
            notifier,
        }
    }

    /// Assignment always runs first. A notification failure is returned as
    /// [`AppError::Notification`] after the reviewers are already requested.
    pub async fn dispatch(
        &self,
        event: &EventContext,
        pool: &ReviewerPool,
        selection: &SelectionResult,
    ) -> Result<(), AppError> {
        let pr = &event.pull_request;
        let handles = selection.handles();

        self.requester
            .request_reviewers(&event.repository, pr.number, &handles)
            .await?;
        tracing::info!(
            repository = %event.repository,
            pr = pr.number,
            reviewers = ?handles,
            "Reviewers requested"
        );

        if let Some(notifier) = self.notifier {
            let message = ReviewNotification::compose(
                pr,
                pool.chat_id_of(&pr.author),
                &selection.reviewers,
            );
            notifier.notify(&message).await?;
            tracing::info!(pr = pr.number, "Slack notification sent");
        }

        Ok(())
    }
}
