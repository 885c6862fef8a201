//! BoxTextProvider -- object-safe dynamic dispatch wrapper for TextProvider.
//!
//! The registry holds adapters of both schema families in one `Vec`, so the
//! RPITIT [`TextProvider`] trait needs a type-erased form:
//! 1. Define an object-safe `TextProviderDyn` trait with a boxed future
//! 2. Blanket-impl `TextProviderDyn` for all `T: TextProvider`
//! 3. `BoxTextProvider` wraps `Box<dyn TextProviderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use crosstalk_types::chat::Message;
use crosstalk_types::error::ProviderError;

use crate::provider::TextProvider;

/// Object-safe version of [`TextProvider`] with a boxed future.
///
/// Exists solely to enable dynamic dispatch; a blanket implementation is
/// provided for all types implementing `TextProvider`.
pub trait TextProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        messages: &'a [Message],
    ) -> Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>>;
}

/// Blanket implementation: any `TextProvider` automatically implements
/// `TextProviderDyn`.
impl<T: TextProvider> TextProviderDyn for T {
    fn name(&self) -> &str {
        TextProvider::name(self)
    }

    fn model(&self) -> &str {
        TextProvider::model(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        messages: &'a [Message],
    ) -> Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>> {
        Box::pin(self.generate(messages))
    }
}

/// Type-erased text provider for runtime selection.
///
/// Since `TextProvider` uses RPITIT it cannot be a trait object directly;
/// `BoxTextProvider` provides equivalent methods that delegate to the inner
/// `TextProviderDyn` trait object.
pub struct BoxTextProvider {
    inner: Box<dyn TextProviderDyn + Send + Sync>,
}

impl BoxTextProvider {
    /// Wrap a concrete `TextProvider` in a type-erased box.
    pub fn new<T: TextProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    /// Provider name as configured.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Model identifier to report for this provider's replies.
    pub fn model(&self) -> &str {
        self.inner.model()
    }

    /// Send the conversation upstream and return the generated text.
    pub async fn generate(&self, messages: &[Message]) -> Result<String, ProviderError> {
        self.inner.generate_boxed(messages).await
    }
}
