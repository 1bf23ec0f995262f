//! 切割清單（供匯出使用的扁平列）

use cutplan_core::AllocationResult;
use serde::{Deserialize, Serialize};

/// 切割清單中的一列（對應一支原料）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutListRow {
    pub profile: String,
    pub stock_length: u32,
    /// 型材內的原料序號（從 1 開始）
    pub cut_index: usize,
    pub pieces: Vec<u32>,
    pub used_length: u32,
    pub remaining_length: u32,
}

/// 將切割計劃展開為切割清單
pub fn cut_list(result: &AllocationResult) -> Vec<CutListRow> {
    result
        .iter()
        .flat_map(|plan| {
            plan.bars.iter().enumerate().map(move |(i, bar)| CutListRow {
                profile: plan.profile.clone(),
                stock_length: plan.stock_length,
                cut_index: i + 1,
                pieces: bar.pieces.clone(),
                used_length: bar.used_length,
                remaining_length: bar.leftover,
            })
        })
        .collect()
}
