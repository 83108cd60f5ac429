//! QnA Maker knowledge base client

use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::{debug, instrument};

use qnamaker_interfaces::kb::{
    CreateKnowledgeBaseRequest, CreateKnowledgeBaseResponse, DownloadKnowledgeBaseResponse,
    GenerateAnswerRequest, GenerateAnswerResponse, KnowledgeBaseClient, KnowledgeBaseId,
    QnaMakerError, QnaResult, UpdateKnowledgeBaseRequest, MAX_QNA_PAIRS, MAX_URLS,
};

use crate::config::QnaMakerConfig;

/// Client for the QnA Maker v2 knowledge base service
///
/// One reqwest [`Client`] is acquired at construction and shared across all
/// calls; cloning shares the same connection pool. The client holds no other
/// state, so concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct QnaMakerClient {
    pub(crate) config: QnaMakerConfig,
    pub(crate) http: Client,
}

impl QnaMakerClient {
    /// Creates a new client with the provided configuration
    pub fn new(config: QnaMakerConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Creates a new client for the given endpoint and subscription key
    pub fn with_endpoint_and_key(
        endpoint: impl Into<String>,
        subscription_key: impl Into<String>,
    ) -> Self {
        Self::new(QnaMakerConfig {
            endpoint: endpoint.into(),
            subscription_key: subscription_key.into(),
        })
    }

    /// Creates a new client for a service region and subscription key
    pub fn for_region(region: &str, subscription_key: impl Into<String>) -> Self {
        Self::new(QnaMakerConfig::for_region(region, subscription_key))
    }
}

#[async_trait]
impl KnowledgeBaseClient for QnaMakerClient {
    #[instrument(skip(self, req), fields(name = %req.name))]
    async fn create_knowledge_base(
        &self,
        req: CreateKnowledgeBaseRequest,
    ) -> QnaResult<CreateKnowledgeBaseResponse> {
        if req.name.is_empty() {
            return Err(QnaMakerError::InvalidParameter(
                "name must not be empty".to_string(),
            ));
        }
        if req.qna_pairs.len() > MAX_QNA_PAIRS {
            return Err(QnaMakerError::InvalidParameter(format!(
                "at most {} Q-A pairs per request",
                MAX_QNA_PAIRS
            )));
        }
        if req.urls.len() > MAX_URLS {
            return Err(QnaMakerError::InvalidParameter(format!(
                "at most {} urls per request",
                MAX_URLS
            )));
        }

        debug!(
            "Creating knowledge base with {} Q-A pairs and {} urls",
            req.qna_pairs.len(),
            req.urls.len()
        );
        self.send(Method::POST, "create", Some(&req)).await
    }

    #[instrument(skip(self), fields(kb_id = %id))]
    async fn delete_knowledge_base(&self, id: KnowledgeBaseId) -> QnaResult<()> {
        debug!("Deleting knowledge base");
        self.send_text(Method::DELETE, &id.to_string(), None::<&()>)
            .await?;
        Ok(())
    }

    #[instrument(skip(self), fields(kb_id = %id))]
    async fn download_knowledge_base(
        &self,
        id: KnowledgeBaseId,
    ) -> QnaResult<DownloadKnowledgeBaseResponse> {
        debug!("Fetching knowledge base export link");
        let body = self
            .send_text(Method::GET, &id.to_string(), None::<&()>)
            .await?;
        // The success body is a bare JSON string holding the blob URL.
        Ok(DownloadKnowledgeBaseResponse {
            blob_url: body.replace('"', ""),
        })
    }

    #[instrument(skip(self, req), fields(kb_id = %req.knowledge_base_id, top = req.top))]
    async fn generate_answer(
        &self,
        req: GenerateAnswerRequest,
    ) -> QnaResult<GenerateAnswerResponse> {
        if req.question.is_empty() {
            return Err(QnaMakerError::InvalidParameter(
                "question must not be empty".to_string(),
            ));
        }

        debug!("Generating answer");
        let path = format!("{}/generateAnswer", req.knowledge_base_id);
        self.send(Method::POST, &path, Some(&req)).await
    }

    #[instrument(skip(self), fields(kb_id = %id))]
    async fn publish_knowledge_base(&self, id: KnowledgeBaseId) -> QnaResult<()> {
        debug!("Publishing knowledge base");
        self.send_text(Method::PUT, &id.to_string(), None::<&()>)
            .await?;
        Ok(())
    }

    #[instrument(skip(self, req), fields(kb_id = %req.knowledge_base_id))]
    async fn update_knowledge_base(&self, req: UpdateKnowledgeBaseRequest) -> QnaResult<()> {
        debug!(
            "Updating knowledge base: adding {} pairs, deleting {} pairs",
            req.add.qna_pairs.len(),
            req.delete.qna_pairs.len()
        );
        let path = req.knowledge_base_id.to_string();
        self.send_text(Method::PATCH, &path, Some(&req)).await?;
        Ok(())
    }
}
