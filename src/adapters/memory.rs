use crate::domain::model::{Price, ResolvedCartLine};
use crate::domain::ports::CartSink;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Mutex;

/// Keeps cart lines in process memory.
#[derive(Debug, Default)]
pub struct MemoryCart {
    lines: Mutex<Vec<ResolvedCartLine>>,
}

impl MemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<ResolvedCartLine> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn subtotal(&self) -> Price {
        self.lines()
            .iter()
            .fold(Price::default(), |total, line| {
                Price::from_cents(total.cents().saturating_add(line.line_total().cents()))
            })
    }
}

#[async_trait]
impl CartSink for MemoryCart {
    async fn push_line(&self, line: &ResolvedCartLine) -> Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.clone());
        Ok(())
    }
}
