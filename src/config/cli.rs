use crate::domain::model::ResolvedCartLine;
use crate::domain::ports::CartSink;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

pub const CART_FILE_NAME: &str = "cart.jsonl";

/// Appends each cart line as one JSON document per line under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalCartFile {
    base_path: String,
}

impl LocalCartFile {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn cart_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(CART_FILE_NAME)
    }
}

#[async_trait]
impl CartSink for LocalCartFile {
    async fn push_line(&self, line: &ResolvedCartLine) -> Result<()> {
        let full_path = self.cart_path();

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut record = serde_json::to_vec(line)?;
        record.push(b'\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&full_path)
            .await?;
        file.write_all(&record).await?;
        file.flush().await?;

        tracing::debug!("Appended cart line to {}", full_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Price;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_lines_are_appended() {
        let temp_dir = TempDir::new().unwrap();
        let cart = LocalCartFile::new(temp_dir.path().join("nested").to_string_lossy().to_string());

        let line = ResolvedCartLine {
            item_id: "combo-plate".to_string(),
            item_name: "Combo Plate".to_string(),
            unit_price: Price::from_cents(1599),
            quantity: 1,
            description: "1. Taco (Beef)\nServed with rice and beans.".to_string(),
            location_tag: Some("downtown".to_string()),
        };
        cart.push_line(&line).await.unwrap();
        cart.push_line(&line).await.unwrap();

        let content = std::fs::read_to_string(cart.cart_path()).unwrap();
        let parsed: Vec<ResolvedCartLine> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(parsed, vec![line.clone(), line]);
    }
}
