//! # Cutplan Core
//!
//! 核心資料模型與類型定義（需求明細、原料目錄、切割計劃、配置）

pub mod config;
pub mod demand;
pub mod plan;
pub mod stock;
pub mod validation;

// Re-export 主要類型
pub use config::{PackingStrategy, PlanningConfig};
pub use demand::DemandLine;
pub use plan::{AllocationResult, Bar, ProfilePlan};
pub use stock::{StockCatalog, StockSpec};
pub use validation::validate_demand_lines;

/// 切割計劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CutPlanError {
    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    #[error("料件長度 {piece_length} 超過型材 {profile} 的原料長度 {stock_length}")]
    PieceExceedsStockLength {
        profile: String,
        piece_length: u32,
        stock_length: u32,
    },

    #[error("原料目錄中找不到型材且未設定預設長度: {0}")]
    MissingCatalogEntry(String),

    #[error("配置解析錯誤: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CutPlanError>;
