//! QnA Maker Interfaces
//!
//! This crate provides the data contracts for the QnA Maker v2 knowledge
//! base API: request and response models, the error taxonomy surfaced to
//! callers, and the client contract implemented by transport adapters.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Knowledge base API contracts
pub mod kb;

/// Re-export key types for convenient usage
pub use kb::{
    AnswerItem, CreateKnowledgeBaseRequest, CreateKnowledgeBaseResponse, DataExtractionResult,
    DownloadKnowledgeBaseResponse, GenerateAnswerRequest, GenerateAnswerResponse,
    KnowledgeBaseClient, KnowledgeBaseId, QnaMakerError, QnaPair, QnaResult, ServiceError,
    UpdateActions, UpdateKnowledgeBaseRequest, MAX_QNA_PAIRS, MAX_URLS,
};
