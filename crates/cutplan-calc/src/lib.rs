//! # Cutplan Calculation Engine
//!
//! 切割計劃計算引擎：排料與廢料、重量、價格統計

pub mod cut_list;
pub mod optimizer;
pub mod packing;
pub mod summary;
pub mod waste;
pub mod weight;

// Re-export 主要類型
pub use cut_list::{cut_list, CutListRow};
pub use optimizer::{optimize, CuttingPlanOptimizer};
pub use packing::PackingCalculator;
pub use summary::PlanSummary;
pub use waste::{ProfileWaste, WasteCalculator, WasteStat};
pub use weight::{WeightCalculator, WeightStat};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 切割計劃報告（計劃與各項統計）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReport {
    /// 切割計劃
    pub allocation: cutplan_core::AllocationResult,

    /// 廢料統計
    pub waste: WasteStat,

    /// 重量與價格統計
    pub weight: WeightStat,

    /// 彙總
    pub summary: PlanSummary,
}

impl PlanReport {
    /// 是否沒有任何切割結果
    pub fn is_empty(&self) -> bool {
        self.allocation.is_empty()
    }
}

/// 輸出時取整（中點遠離零進位）
///
/// 恰好位於中點的值一律遠離零進位，不採銀行家捨入：
/// 800 mm 中廢料 1 mm 為 0.125%，輸出 0.13 而非 0.12。
pub(crate) fn round_output(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}
