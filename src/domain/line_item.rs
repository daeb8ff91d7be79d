use serde::{Deserialize, Serialize};

/// Cup size of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Big,
}

/// One product line shared by orders and kitchen schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub product: String,
    pub size: Size,
    pub quantity: u32,
}

impl LineItem {
    pub const DEFAULT_QUANTITY: u32 = 1;

    pub fn new(product: impl Into<String>, size: Size, quantity: u32) -> Self {
        Self {
            product: product.into(),
            size,
            quantity,
        }
    }
}

/// Every order and schedule carries at least one line item.
pub(crate) fn ensure_items(items: &[LineItem]) -> Result<(), String> {
    if items.is_empty() {
        return Err("at least one line item is required".to_string());
    }
    Ok(())
}
