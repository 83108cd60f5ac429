//! Client configuration for the QnA Maker service

/// Default service base address (westus region)
pub const DEFAULT_ENDPOINT: &str =
    "https://westus.api.cognitive.microsoft.com/qnamaker/v2.0/knowledgebases";

/// Header carrying the caller's subscription key on every request
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Configuration for the QnA Maker client
#[derive(Debug, Clone)]
pub struct QnaMakerConfig {
    /// Base address of the knowledge base service; all request paths are
    /// relative to it
    pub endpoint: String,

    /// Subscription key granting access to the API
    pub subscription_key: String,
}

impl QnaMakerConfig {
    /// Creates a configuration for the given service region
    pub fn for_region(region: &str, subscription_key: impl Into<String>) -> Self {
        Self {
            endpoint: format!(
                "https://{}.api.cognitive.microsoft.com/qnamaker/v2.0/knowledgebases",
                region
            ),
            subscription_key: subscription_key.into(),
        }
    }
}

impl Default for QnaMakerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            subscription_key: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_westus_endpoint() {
        let config = QnaMakerConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.subscription_key.is_empty());
    }

    #[test]
    fn test_for_region_builds_regional_endpoint() {
        let config = QnaMakerConfig::for_region("northeurope", "key");
        assert_eq!(
            config.endpoint,
            "https://northeurope.api.cognitive.microsoft.com/qnamaker/v2.0/knowledgebases"
        );
        assert_eq!(config.subscription_key, "key");
    }
}
