//! 廢料統計

use cutplan_core::AllocationResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 單一型材的廢料統計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileWaste {
    /// 已使用長度
    pub used_length: u64,
    /// 原料總長（支數 × 原料長度）
    pub total_stock_length: u64,
    /// 廢料百分比（兩位小數）
    pub waste_percentage: Decimal,
}

/// 廢料統計（型材 → 統計）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WasteStat {
    pub profiles: BTreeMap<String, ProfileWaste>,
}

impl WasteStat {
    pub fn get(&self, profile: &str) -> Option<&ProfileWaste> {
        self.profiles.get(profile)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// 廢料計算器
pub struct WasteCalculator;

impl WasteCalculator {
    /// 計算各型材廢料百分比
    ///
    /// 結果中只有至少使用一支原料的型材，原料總長不會為 0。
    pub fn compute(result: &AllocationResult) -> WasteStat {
        let profiles = result
            .iter()
            .filter(|plan| !plan.bars.is_empty())
            .map(|plan| {
                let total_stock_length = plan.total_stock_length();
                let used_length = plan.used_length();

                (
                    plan.profile.clone(),
                    ProfileWaste {
                        used_length,
                        total_stock_length,
                        waste_percentage: waste_percentage(total_stock_length, used_length),
                    },
                )
            })
            .collect();

        WasteStat { profiles }
    }
}

/// 廢料百分比 = (原料總長 - 已使用長度) / 原料總長 × 100，取兩位小數
pub(crate) fn waste_percentage(total_stock_length: u64, used_length: u64) -> Decimal {
    if total_stock_length == 0 {
        return Decimal::ZERO;
    }

    let wasted = Decimal::from(total_stock_length.saturating_sub(used_length));
    let ratio = wasted * Decimal::ONE_HUNDRED / Decimal::from(total_stock_length);
    crate::round_output(ratio, 2)
}
