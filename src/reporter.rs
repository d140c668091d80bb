use crate::errors::AppError;
use std::io::Write;

/// Logs the error and emits a GitHub workflow `::error` annotation so the step shows as failed.
pub fn report_failure(err: &AppError) {
    tracing::error!(error = %err, step = err.step(), "Run failed");

    let line = error_annotation(err.step(), &err.to_string());
    let mut stdout = std::io::stdout().lock();
    // 写入失败时只剩日志可用
    if let Err(e) = writeln!(stdout, "{}", line) {
        tracing::warn!(error = %e, "Failed to write workflow annotation");
    }
}

/// Formats `::error title=<step>::<message>`, escaped like `@actions/core` does.
pub fn error_annotation(step: &str, message: &str) -> String {
    format!(
        "::error title={}::{}",
        escape_property(step),
        escape_data(message)
    )
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
