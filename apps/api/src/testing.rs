//! Deterministic collaborators for unit and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use crate::config::Config;
use crate::llm_client::{LlmError, TextGenerator};
use crate::resume_parser::{ExtractionError, ResumeExtractor};
use crate::state::AppState;

/// Returns a fixed reply and records every prompt it receives.
pub struct StubGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Fails every call the way an upstream auth error would.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        })
    }
}

pub struct StubExtractor {
    text: Option<String>,
    calls: AtomicUsize,
}

impl StubExtractor {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Behaves like a PDF library panicking on a corrupt file.
    pub fn failing() -> Self {
        Self {
            text: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResumeExtractor for StubExtractor {
    async fn extract_text(&self, _pdf: Bytes) -> Result<String, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => {
                let panicked = tokio::spawn(async { panic!("invalid cross-reference table") })
                    .await
                    .unwrap_err();
                Err(ExtractionError::Task(panicked))
            }
        }
    }
}

pub fn test_config() -> Config {
    Config {
        openai_api_key: "sk-test".to_string(),
        openai_model: "gpt-4".to_string(),
        openai_base_url: "http://localhost:0/v1".to_string(),
        openai_timeout_secs: 5,
        port: 0,
        max_upload_bytes: 1024 * 1024,
        debug: false,
        rust_log: "info".to_string(),
    }
}

pub fn test_state(
    llm: impl TextGenerator + 'static,
    extractor: impl ResumeExtractor + 'static,
) -> AppState {
    AppState {
        llm: Arc::new(llm),
        extractor: Arc::new(extractor),
        config: test_config(),
    }
}
