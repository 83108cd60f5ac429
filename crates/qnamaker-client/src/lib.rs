//! HTTP client for the QnA Maker v2 knowledge base service
//!
//! This crate provides [`QnaMakerClient`], an async client implementing the
//! [`KnowledgeBaseClient`] contract from `qnamaker-interfaces`: create,
//! delete, download, generate-answer, publish and update operations against
//! a regional QnA Maker endpoint. Every operation funnels through one
//! dispatch pipeline that serializes the payload, attaches the subscription
//! key, issues a single HTTP request and translates failures into the
//! structured error taxonomy. The client performs no retries and enforces
//! no timeout; failures surface immediately to the caller.

// Core modules
pub mod client;
pub mod config;

mod dispatch;

// Re-export key types for convenient usage
pub use client::QnaMakerClient;
pub use config::{QnaMakerConfig, DEFAULT_ENDPOINT, SUBSCRIPTION_KEY_HEADER};

pub use qnamaker_interfaces::kb::{
    AnswerItem, CreateKnowledgeBaseRequest, CreateKnowledgeBaseResponse, DataExtractionResult,
    DownloadKnowledgeBaseResponse, GenerateAnswerRequest, GenerateAnswerResponse,
    KnowledgeBaseClient, KnowledgeBaseId, QnaMakerError, QnaPair, QnaResult, ServiceError,
    UpdateActions, UpdateKnowledgeBaseRequest, MAX_QNA_PAIRS, MAX_URLS,
};

/// Initialize tracing for client diagnostics
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();
}
