//! 切割計劃配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CutPlanError, Result};

/// 預設原料長度（mm）
pub const DEFAULT_STOCK_LENGTH: u32 = 6000;

/// 切割計劃參數配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// 預設原料長度（目錄中沒有的型材使用）
    /// - Some: 缺少的型材使用此長度
    /// - None: 缺少的型材視為錯誤
    pub default_stock_length: Option<u32>,

    /// 排料策略
    pub packing_strategy: PackingStrategy,

    /// 是否並行計算各型材
    pub parallel: bool,

    /// 重量誤差百分比（調整後重量 = 總重 × (1 + 誤差/100)）
    pub weight_error_percent: Decimal,

    /// 單價（每單位重量）
    pub unit_price: Decimal,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            default_stock_length: Some(DEFAULT_STOCK_LENGTH),
            packing_strategy: PackingStrategy::Sequential,
            parallel: false,
            weight_error_percent: Decimal::ZERO,
            unit_price: Decimal::ZERO,
        }
    }
}

impl PlanningConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 讀取配置（缺少的欄位使用預設值）
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置預設原料長度
    pub fn with_default_stock_length(mut self, length: Option<u32>) -> Self {
        self.default_stock_length = length;
        self
    }

    /// 建構器模式：設置排料策略
    pub fn with_packing_strategy(mut self, strategy: PackingStrategy) -> Self {
        self.packing_strategy = strategy;
        self
    }

    /// 建構器模式：設置是否並行計算
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// 建構器模式：設置重量誤差百分比
    pub fn with_weight_error_percent(mut self, percent: Decimal) -> Self {
        self.weight_error_percent = percent;
        self
    }

    /// 建構器模式：設置單價
    pub fn with_unit_price(mut self, price: Decimal) -> Self {
        self.unit_price = price;
        self
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.default_stock_length == Some(0) {
            return Err(CutPlanError::InvalidInput(
                "預設原料長度必須大於 0".to_string(),
            ));
        }

        if self.weight_error_percent < Decimal::ZERO {
            return Err(CutPlanError::InvalidInput(format!(
                "重量誤差百分比不可為負: {}",
                self.weight_error_percent
            )));
        }

        if self.unit_price < Decimal::ZERO {
            return Err(CutPlanError::InvalidInput(format!(
                "單價不可為負: {}",
                self.unit_price
            )));
        }

        Ok(())
    }
}

/// 排料策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingStrategy {
    /// 依長度遞減排序，只保留一支開啟中的原料；放不下時換下一支
    #[default]
    Sequential,

    /// 依長度遞減排序，每個料件放入第一支剩餘長度足夠的原料
    FirstFit,
}
