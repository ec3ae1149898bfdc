//! Client-side commands. Each returns the lines to print; request failures
//! become messages instead of aborting the process.

use asides_client::{AsideClient, ClientError, format_aside};

/// 412 and 404 bodies are shown as the server wrote them.
fn render_error(err: &ClientError) -> String {
    match err.body() {
        Some(body) if err.is_precondition_failed() || err.is_not_found() => {
            body.trim_end().to_owned()
        },
        _ => format!("HTTP Error: {err}"),
    }
}

fn confirmation(result: Result<String, ClientError>) -> Vec<String> {
    match result {
        Ok(text) => vec![text.trim_end().to_owned()],
        Err(e) => vec![render_error(&e)],
    }
}

pub(crate) async fn save(client: &AsideClient, text: &str) -> Vec<String> {
    confirmation(client.save(text).await)
}

pub(crate) async fn list(client: &AsideClient) -> Vec<String> {
    match client.list().await {
        Ok(asides) => asides.iter().map(format_aside).collect(),
        Err(e) => vec![render_error(&e)],
    }
}

pub(crate) async fn fetch(client: &AsideClient, id: i64) -> Vec<String> {
    match client.fetch(id).await {
        Ok(aside) => vec![format_aside(&aside)],
        Err(e) => vec![render_error(&e)],
    }
}

pub(crate) async fn update(client: &AsideClient, id: i64, text: &str) -> Vec<String> {
    confirmation(client.update(id, text).await)
}

pub(crate) async fn delete(client: &AsideClient, id: i64) -> Vec<String> {
    match client.delete(id).await {
        Ok(()) => vec!["Deleted aside.".to_owned()],
        Err(e) => vec![render_error(&e)],
    }
}
