//! 需求模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CutPlanError, Result};

/// 需求明細（正規化後的一行需求）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandLine {
    /// 型材名稱
    pub profile: String,

    /// 料件長度（mm）
    pub piece_length: u32,

    /// 需求數量
    pub quantity: u32,

    /// 單件重量（可選）
    pub unit_weight: Option<Decimal>,
}

impl DemandLine {
    /// 創建新的需求明細
    pub fn new(profile: impl Into<String>, piece_length: u32, quantity: u32) -> Self {
        Self {
            profile: profile.into(),
            piece_length,
            quantity,
            unit_weight: None,
        }
    }

    /// 建構器模式：設置單件重量
    pub fn with_unit_weight(mut self, unit_weight: Decimal) -> Self {
        self.unit_weight = Some(unit_weight);
        self
    }

    /// 總需求長度（料件長度 × 數量）
    pub fn total_length(&self) -> u64 {
        u64::from(self.piece_length) * u64::from(self.quantity)
    }

    /// 總重量（數量 × 單件重量，未提供重量時為 0）
    ///
    /// 乘積超出 `Decimal` 範圍時回傳錯誤。
    pub fn total_weight(&self) -> Result<Decimal> {
        let Some(unit_weight) = self.unit_weight else {
            return Ok(Decimal::ZERO);
        };

        unit_weight
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| {
                CutPlanError::InvalidInput(format!(
                    "型材 {} 的總重量超出範圍: {} × {}",
                    self.profile, unit_weight, self.quantity
                ))
            })
    }

    /// 展開為料件序列（長度重複數量次）
    pub fn expand(&self) -> impl Iterator<Item = u32> {
        std::iter::repeat(self.piece_length).take(self.quantity as usize)
    }
}
