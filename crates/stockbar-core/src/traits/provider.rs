//! Quote provider trait definition.

use crate::error::ProviderError;
use crate::types::Snapshot;
use async_trait::async_trait;

/// Trait for remote quote sources.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the latest quotes.
    ///
    /// # Arguments
    /// * `codes` - Provider codes to request
    ///
    /// # Returns
    /// One snapshot per code the provider knows about, in no particular
    /// order. Unknown codes are simply absent.
    async fn fetch(&self, codes: &[String]) -> Result<Vec<Snapshot>, ProviderError>;

    /// Get the provider name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    #[async_trait]
    impl QuoteProvider for EchoProvider {
        async fn fetch(&self, codes: &[String]) -> Result<Vec<Snapshot>, ProviderError> {
            Ok(codes
                .iter()
                .map(|code| Snapshot {
                    code: code.clone(),
                    name: code.to_lowercase(),
                    price: 1.0,
                    updown: 0.0,
                    percent: 0.0,
                    high: 1.0,
                    low: 1.0,
                    open: 1.0,
                    yestclose: 1.0,
                })
                .collect())
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_provider_object_safety() {
        let provider: Box<dyn QuoteProvider> = Box::new(EchoProvider);
        let snapshots = provider.fetch(&["US_AAPL".to_string()]).await.unwrap();

        assert_eq!(provider.name(), "echo");
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].name, "us_aapl");
    }
}
