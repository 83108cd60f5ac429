//! Knowledge base contracts for the QnA Maker v2 API
//!
//! This module defines the request and response models exchanged with the
//! QnA Maker knowledge base service, the error taxonomy surfaced to callers,
//! and the [`KnowledgeBaseClient`] contract implemented by transport
//! adapters. Field names serialize to the camelCase identifiers the service
//! expects on the wire.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum number of question-answer pairs accepted per request payload.
pub const MAX_QNA_PAIRS: usize = 1000;

/// Maximum number of source URLs accepted per request payload.
pub const MAX_URLS: usize = 5;

/// Result type for knowledge base operations
pub type QnaResult<T> = Result<T, QnaMakerError>;

/// Errors that can occur when interacting with the knowledge base service
#[derive(Error, Debug, Clone)]
pub enum QnaMakerError {
    /// Caller-supplied arguments violated a documented constraint; raised
    /// before any network activity
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The service answered with a failure status and a structured error body
    #[error("Service error (status {status}): {error}")]
    Service {
        /// HTTP status code of the failed response
        status: u16,
        /// Structured error payload parsed from the response body
        error: ServiceError,
    },

    /// The service answered with a failure status and an empty or
    /// unparseable body
    #[error("Service failure with status {0}")]
    Status(u16),

    /// Error communicating with the service
    #[error("Communication error: {0}")]
    Communication(String),

    /// Error during serialization or deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Structured error payload carried in failure response bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceError {
    /// Machine-readable error code, e.g. `KbNotFound`
    pub code: String,

    /// Human-readable description of the failure
    pub message: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Wire envelope wrapping [`ServiceError`] in failure bodies
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    /// The error payload
    pub error: ServiceError,
}

/// Unique identifier of a knowledge base on the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KnowledgeBaseId(pub Uuid);

impl KnowledgeBaseId {
    /// Generates a fresh random identifier
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for KnowledgeBaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for KnowledgeBaseId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for KnowledgeBaseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single question-answer pair in a knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QnaPair {
    /// The question text
    pub question: String,

    /// The answer returned when the question matches
    pub answer: String,
}

impl QnaPair {
    /// Creates a pair from question and answer text
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Payload for creating a new knowledge base
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKnowledgeBaseRequest {
    /// Friendly name for the knowledge base
    pub name: String,

    /// Question-answer pairs seeding the knowledge base, at most
    /// [`MAX_QNA_PAIRS`] per request
    pub qna_pairs: Vec<QnaPair>,

    /// URLs to be crawled and indexed server-side, at most [`MAX_URLS`] per
    /// request; an already-indexed URL is fetched again
    pub urls: Vec<String>,
}

impl CreateKnowledgeBaseRequest {
    /// Creates a request with the given name and no seed data
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qna_pairs: Vec::new(),
            urls: Vec::new(),
        }
    }

    /// Seeds the request with question-answer pairs
    pub fn with_qna_pairs(mut self, qna_pairs: Vec<QnaPair>) -> Self {
        self.qna_pairs = qna_pairs;
        self
    }

    /// Seeds the request with source URLs
    pub fn with_urls(mut self, urls: Vec<String>) -> Self {
        self.urls = urls;
        self
    }
}

/// Data manipulated by one side of an update request
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActions {
    /// Question-answer pairs affected by the action
    pub qna_pairs: Vec<QnaPair>,

    /// Source URLs affected by the action
    pub urls: Vec<String>,
}

/// Payload for adding and deleting content in an existing knowledge base
#[derive(Debug, Clone, Serialize)]
pub struct UpdateKnowledgeBaseRequest {
    /// Knowledge base identity, carried in the request path rather than the
    /// body
    #[serde(skip)]
    pub knowledge_base_id: KnowledgeBaseId,

    /// Data to be added to the knowledge base
    pub add: UpdateActions,

    /// Data to be deleted from the knowledge base
    pub delete: UpdateActions,
}

impl UpdateKnowledgeBaseRequest {
    /// Creates an empty update for the given knowledge base
    pub fn new(knowledge_base_id: KnowledgeBaseId) -> Self {
        Self {
            knowledge_base_id,
            add: UpdateActions::default(),
            delete: UpdateActions::default(),
        }
    }

    /// Sets the data to be added to the knowledge base
    pub fn adding(mut self, add: UpdateActions) -> Self {
        self.add = add;
        self
    }

    /// Sets the data to be deleted from the knowledge base
    pub fn deleting(mut self, delete: UpdateActions) -> Self {
        self.delete = delete;
        self
    }
}

/// Query payload for answering a question from a knowledge base
#[derive(Debug, Clone, Serialize)]
pub struct GenerateAnswerRequest {
    /// Knowledge base identity, carried in the request path rather than the
    /// body
    #[serde(skip)]
    pub knowledge_base_id: KnowledgeBaseId,

    /// User question to run against the knowledge base
    pub question: String,

    /// Number of ranked answers to return
    pub top: u32,
}

impl GenerateAnswerRequest {
    /// Creates a query returning the single best answer
    pub fn new(knowledge_base_id: KnowledgeBaseId, question: impl Into<String>) -> Self {
        Self {
            knowledge_base_id,
            question: question.into(),
            top: 1,
        }
    }

    /// Overrides the number of ranked answers to return
    pub fn with_top(mut self, top: u32) -> Self {
        self.top = top;
        self
    }
}

/// Per-source ingestion outcome reported by the create operation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExtractionResult {
    /// Kind of source the extraction ran against
    pub source_type: String,

    /// Service-defined status code for the extraction
    pub extraction_status_code: String,

    /// The source the outcome refers to
    pub source: String,
}

/// A successful create call returns the knowledge base identity
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKnowledgeBaseResponse {
    /// Identity of the newly created knowledge base
    #[serde(rename = "kbId")]
    pub id: KnowledgeBaseId,

    /// Per-source extraction outcomes for the submitted URLs
    #[serde(default)]
    pub data_extraction_results: Vec<DataExtractionResult>,
}

/// One ranked answer for a generated-answer query
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerItem {
    /// Answer text drawn from the knowledge base
    pub answer: String,

    /// Ranking score assigned by the service
    pub score: f32,
}

/// Ranked answers for a query, sorted by the service in decreasing order of
/// ranking score
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateAnswerResponse {
    /// Answers in decreasing order of ranking score
    #[serde(default)]
    pub answers: Vec<AnswerItem>,
}

/// A successful download call returns a link to an export of the knowledge
/// base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadKnowledgeBaseResponse {
    /// Signed blob-storage URL, valid for roughly 30 minutes, pointing to a
    /// TSV export; the client returns it as-is and never fetches it
    pub blob_url: String,
}

/// Contract for clients of the QnA Maker knowledge base service
#[async_trait]
pub trait KnowledgeBaseClient: Send + Sync {
    /// Contract: Creates a new knowledge base from a name plus optional seed
    /// question-answer pairs and URLs.
    /// - Returns: the identity of the new knowledge base together with
    ///   per-source extraction outcomes.
    /// - Errors: `InvalidParameter` before any network activity when the name
    ///   is empty or a seed collection exceeds its maximum.
    async fn create_knowledge_base(
        &self,
        req: CreateKnowledgeBaseRequest,
    ) -> QnaResult<CreateKnowledgeBaseResponse>;

    /// Contract: Deletes the specified knowledge base and all data associated
    /// with it.
    async fn delete_knowledge_base(&self, id: KnowledgeBaseId) -> QnaResult<()>;

    /// Contract: Retrieves a temporary signed URL to a flat export of the
    /// knowledge base. The URL is handed to the caller as-is.
    async fn download_knowledge_base(
        &self,
        id: KnowledgeBaseId,
    ) -> QnaResult<DownloadKnowledgeBaseResponse>;

    /// Contract: Returns answers for the question, sorted in descending order
    /// of ranking score by the service; the ordering is not recomputed
    /// locally.
    /// - Errors: `InvalidParameter` before any network activity when the
    ///   question is empty.
    async fn generate_answer(
        &self,
        req: GenerateAnswerRequest,
    ) -> QnaResult<GenerateAnswerResponse>;

    /// Contract: Publishes all unpublished changes in the knowledge base to
    /// the production endpoint.
    async fn publish_knowledge_base(&self, id: KnowledgeBaseId) -> QnaResult<()>;

    /// Contract: Adds and/or deletes question-answer pairs and URLs in an
    /// existing knowledge base.
    async fn update_knowledge_base(&self, req: UpdateKnowledgeBaseRequest) -> QnaResult<()>;
}
