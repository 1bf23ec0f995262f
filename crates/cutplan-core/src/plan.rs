//! 切割計劃模型

use serde::{Deserialize, Serialize};

use crate::{CutPlanError, Result};

/// 單支原料的切割結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// 切出的料件（依切割順序）
    pub pieces: Vec<u32>,

    /// 已使用長度（料件長度總和）
    pub used_length: u32,

    /// 剩餘長度（原料長度 - 已使用長度）
    pub leftover: u32,
}

impl Bar {
    /// 由料件建立一支原料的切割結果
    ///
    /// 料件總長超過原料長度時回傳錯誤，不會產生負的剩餘長度。
    pub fn from_pieces(pieces: Vec<u32>, stock_length: u32) -> Result<Self> {
        let used: u64 = pieces.iter().map(|&p| u64::from(p)).sum();
        if used > u64::from(stock_length) {
            return Err(CutPlanError::InvalidInput(format!(
                "料件總長 {} 超過原料長度 {}",
                used, stock_length
            )));
        }

        // used <= stock_length，轉換不會溢出
        let used_length = used as u32;
        Ok(Self {
            pieces,
            used_length,
            leftover: stock_length - used_length,
        })
    }

    /// 原料長度
    pub fn stock_length(&self) -> u32 {
        self.used_length + self.leftover
    }

    /// 料件數量
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// 檢查料件是否能放入剩餘長度
    pub fn fits(&self, piece_length: u32) -> bool {
        piece_length <= self.leftover
    }
}

/// 單一型材的切割計劃
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePlan {
    /// 型材名稱
    pub profile: String,

    /// 原料長度
    pub stock_length: u32,

    /// 依順序排列的原料切割結果
    pub bars: Vec<Bar>,
}

impl ProfilePlan {
    pub fn new(profile: String, stock_length: u32, bars: Vec<Bar>) -> Self {
        Self {
            profile,
            stock_length,
            bars,
        }
    }

    /// 使用的原料支數
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// 原料總長（支數 × 原料長度）
    pub fn total_stock_length(&self) -> u64 {
        self.bars.len() as u64 * u64::from(self.stock_length)
    }

    /// 已使用總長
    pub fn used_length(&self) -> u64 {
        self.bars.iter().map(|b| u64::from(b.used_length)).sum()
    }

    /// 剩餘總長
    pub fn leftover_length(&self) -> u64 {
        self.bars.iter().map(|b| u64::from(b.leftover)).sum()
    }

    /// 料件總數
    pub fn piece_count(&self) -> usize {
        self.bars.iter().map(Bar::piece_count).sum()
    }

    /// 依切割順序走訪所有料件
    pub fn pieces(&self) -> impl Iterator<Item = u32> + '_ {
        self.bars.iter().flat_map(|b| b.pieces.iter().copied())
    }
}

/// 切割計劃結果（依型材在需求中首次出現的順序排列）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub profiles: Vec<ProfilePlan>,
}

impl AllocationResult {
    /// 創建空的切割計劃
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(profiles: Vec<ProfilePlan>) -> Self {
        Self { profiles }
    }

    /// 查詢型材的切割計劃
    pub fn get(&self, profile: &str) -> Option<&ProfilePlan> {
        self.profiles.iter().find(|p| p.profile == profile)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProfilePlan> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// 所有型材使用的原料總支數
    pub fn total_bars(&self) -> usize {
        self.profiles.iter().map(ProfilePlan::bar_count).sum()
    }
}

impl<'a> IntoIterator for &'a AllocationResult {
    type Item = &'a ProfilePlan;
    type IntoIter = std::slice::Iter<'a, ProfilePlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
