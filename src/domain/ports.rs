use crate::domain::model::ResolvedCartLine;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where finished cart lines go. The cart aggregate itself lives outside this crate.
#[async_trait]
pub trait CartSink: Send + Sync {
    async fn push_line(&self, line: &ResolvedCartLine) -> Result<()>;
}

#[async_trait]
impl<T: CartSink + ?Sized> CartSink for Box<T> {
    async fn push_line(&self, line: &ResolvedCartLine) -> Result<()> {
        (**self).push_line(line).await
    }
}
