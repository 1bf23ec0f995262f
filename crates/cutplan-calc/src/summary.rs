//! 切割計劃彙總

use cutplan_core::{AllocationResult, ProfilePlan};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::waste::waste_percentage;

/// 跨型材的切割計劃彙總
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// 型材種數
    pub profile_count: usize,
    /// 原料總支數
    pub total_bars: usize,
    /// 料件總數
    pub total_pieces: usize,
    /// 原料總長
    pub total_stock_length: u64,
    /// 已使用總長
    pub used_length: u64,
    /// 剩餘總長
    pub leftover_length: u64,
    /// 整體廢料百分比（兩位小數）
    pub waste_percentage: Decimal,
    /// 理論最少原料支數（各型材 ceil(料件總長 / 原料長度) 之和）
    pub lower_bound_bars: u64,
}

impl PlanSummary {
    pub fn from_allocation(result: &AllocationResult) -> Self {
        let mut summary = Self {
            profile_count: result.len(),
            ..Self::default()
        };

        for plan in result {
            summary.total_bars += plan.bar_count();
            summary.total_pieces += plan.piece_count();
            summary.total_stock_length += plan.total_stock_length();
            summary.used_length += plan.used_length();
            summary.leftover_length += plan.leftover_length();
            summary.lower_bound_bars += Self::lower_bound(plan);
        }

        summary.waste_percentage = waste_percentage(summary.total_stock_length, summary.used_length);
        summary
    }

    /// 多用的原料支數（相對於理論下限）
    pub fn excess_bars(&self) -> u64 {
        (self.total_bars as u64).saturating_sub(self.lower_bound_bars)
    }

    fn lower_bound(plan: &ProfilePlan) -> u64 {
        let stock_length = u64::from(plan.stock_length);
        if stock_length == 0 {
            return 0;
        }
        plan.used_length().div_ceil(stock_length)
    }
}
