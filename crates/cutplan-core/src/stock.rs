//! 原料目錄模型

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{CutPlanError, Result};

/// 單一型材的原料規格
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSpec {
    /// 型材名稱
    pub profile: String,

    /// 原料長度（mm）
    pub stock_length: u32,
}

impl StockSpec {
    /// 創建新的原料規格
    pub fn new(profile: impl Into<String>, stock_length: u32) -> Self {
        Self {
            profile: profile.into(),
            stock_length,
        }
    }
}

/// 原料目錄（型材 → 原料長度）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockCatalog {
    lengths: HashMap<String, u32>,
}

impl StockCatalog {
    /// 創建空的原料目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 由原料規格建立目錄（重複的型材以後者為準）
    pub fn from_specs<I>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = StockSpec>,
    {
        let mut catalog = Self::new();
        for spec in specs {
            catalog.insert(spec.profile, spec.stock_length);
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// 建構器模式：設置型材原料長度
    pub fn with_stock_length(mut self, profile: impl Into<String>, stock_length: u32) -> Self {
        self.insert(profile, stock_length);
        self
    }

    /// 設置型材原料長度
    pub fn insert(&mut self, profile: impl Into<String>, stock_length: u32) {
        self.lengths.insert(profile.into(), stock_length);
    }

    /// 查詢目錄中的原料長度
    pub fn get(&self, profile: &str) -> Option<u32> {
        self.lengths.get(profile).copied()
    }

    /// 查詢原料長度，目錄中沒有的型材回傳預設長度
    pub fn lookup(&self, profile: &str, default_length: u32) -> u32 {
        self.get(profile).unwrap_or(default_length)
    }

    /// 解析原料長度；沒有預設長度時，缺少的型材視為錯誤
    pub fn resolve(&self, profile: &str, default_length: Option<u32>) -> Result<u32> {
        match (self.get(profile), default_length) {
            (Some(length), _) => Ok(length),
            (None, Some(default_length)) => Ok(default_length),
            (None, None) => Err(CutPlanError::MissingCatalogEntry(profile.to_string())),
        }
    }

    /// 檢查是否包含型材
    pub fn contains(&self, profile: &str) -> bool {
        self.lengths.contains_key(profile)
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// 驗證目錄：型材名稱不可為空，原料長度必須為正
    pub fn validate(&self) -> Result<()> {
        // 排序後檢查，確保錯誤訊息穩定
        let mut entries: Vec<_> = self.lengths.iter().collect();
        entries.sort();

        for (profile, &length) in entries {
            if profile.trim().is_empty() {
                return Err(CutPlanError::InvalidInput(
                    "原料目錄中的型材名稱為空".to_string(),
                ));
            }
            if length == 0 {
                return Err(CutPlanError::InvalidInput(format!(
                    "型材 {} 的原料長度必須大於 0",
                    profile
                )));
            }
        }

        Ok(())
    }
}
