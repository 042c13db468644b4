//! Application entry point — oral-exam practice server.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] (settings file + `EXAM_COACH_*` overrides).
//! 3. Resolve the LLM API key from the environment; refuse to start without it.
//! 4. Build the question bank, LLM client and answer evaluator.
//! 5. Bind the listener and serve the router until the process is stopped.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use exam_coach::{
    config::AppConfig,
    evaluate::AnswerEvaluator,
    llm::{ApiClient, LlmClient, PromptBuilder},
    questions::QuestionBank,
    server::{create_router, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Exam coach starting up");

    // 2. Configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // 3. LLM client (fails closed when the key is missing)
    let client = ApiClient::from_env(&config.llm).map_err(|e| {
        log::error!("{e}");
        e
    })?;
    log::info!(
        "LLM provider {:?}, model {}",
        client.config().provider,
        client.config().model
    );
    let client: Arc<dyn LlmClient> = Arc::new(client);

    // 4. Services
    let questions = QuestionBank::new(&config.questions.csv_path);
    if !questions.path().exists() {
        log::warn!(
            "Question bank {} does not exist yet; clients will receive the error record",
            questions.path().display()
        );
    }
    let evaluator = AnswerEvaluator::new(client, PromptBuilder::from_config(&config.exam));
    let state = AppState::new(questions, evaluator, config.server.index_page.clone());

    // 5. Serve
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid listen address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    log::info!("Listening on {addr}");

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
