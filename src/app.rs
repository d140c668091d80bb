use crate::clients::{GitHubClient, Notifier, SlackWebhook};
use crate::config::ActionConfig;
use crate::dispatcher::AssignmentDispatcher;
use crate::errors::AppError;
use crate::event::EventContext;
use crate::logging::OperationTimer;
use crate::notification::ReviewNotification;
use crate::pool::load_pool;
use crate::selection::{select_reviewers, SelectionResult};

/// Runs the whole pipeline once: event, pool, selection, dispatch.
///
/// Event and pool problems abort before any network call.
pub async fn run(config: &ActionConfig) -> Result<SelectionResult, AppError> {
    config.validate()?;

    let event = EventContext::from_file(&config.event_path, config.repository.as_deref())?;
    let pr = &event.pull_request;
    tracing::info!(
        repository = %event.repository,
        pr = pr.number,
        author = %pr.author,
        label = %pr.label,
        "Pull request labeled"
    );

    let pool = load_pool(&config.pool_path)?;

    let timer = OperationTimer::new("select_reviewers").with_metadata("pr", &pr.number.to_string());
    let selection = select_reviewers(&pool, pr, &config.selection);
    timer
        .with_metadata("strategy", &selection.strategy.to_string())
        .finish();
    tracing::info!(
        strategy = %selection.strategy,
        count = selection.reviewers.len(),
        reviewers = ?selection.handles(),
        "Reviewers selected"
    );

    if config.dry_run {
        let message = ReviewNotification::compose(
            pr,
            pool.chat_id_of(&pr.author),
            &selection.reviewers,
        );
        tracing::info!(
            reviewers = ?selection.handles(),
            notification = %message.to_payload(),
            "Dry run, skipping GitHub and Slack"
        );
        return Ok(selection);
    }

    let github = GitHubClient::new(config.api_url.clone(), config.github_token.clone());
    let slack = config.slack_webhook.clone().map(SlackWebhook::new);
    let dispatcher =
        AssignmentDispatcher::new(&github, slack.as_ref().map(|s| s as &dyn Notifier));

    let timer = OperationTimer::new("dispatch").with_metadata("pr", &pr.number.to_string());
    dispatcher.dispatch(&event, &pool, &selection).await?;
    timer.finish();

    Ok(selection)
}
