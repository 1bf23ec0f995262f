//! 重量與價格統計

use cutplan_core::{CutPlanError, DemandLine};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 重量統計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightStat {
    /// 各型材總重（三位小數）
    pub profiles: BTreeMap<String, Decimal>,

    /// 總重（三位小數）
    pub total: Decimal,

    /// 含誤差調整後的總重（三位小數）
    pub adjusted_total: Decimal,

    /// 價格（調整後總重 × 單價，兩位小數）
    pub price: Decimal,
}

impl WeightStat {
    pub fn get(&self, profile: &str) -> Option<Decimal> {
        self.profiles.get(profile).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// 重量計算器
pub struct WeightCalculator;

impl WeightCalculator {
    /// 計算重量與價格
    ///
    /// 未提供單件重量的需求以 0 計。各項數值只在輸出時取整一次，
    /// 總重與價格由未取整的型材總重累計而來。任一步驟超出 `Decimal`
    /// 範圍時回傳錯誤。
    pub fn compute(
        lines: &[DemandLine],
        weight_error_percent: Decimal,
        unit_price: Decimal,
    ) -> cutplan_core::Result<WeightStat> {
        let mut raw: BTreeMap<String, Decimal> = BTreeMap::new();
        for line in lines {
            let line_weight = line.total_weight()?;
            let entry = raw.entry(line.profile.clone()).or_insert(Decimal::ZERO);
            *entry = entry
                .checked_add(line_weight)
                .ok_or_else(|| Self::overflow(&format!("型材 {} 總重", line.profile)))?;
        }

        let mut total = Decimal::ZERO;
        for weight in raw.values() {
            total = total
                .checked_add(*weight)
                .ok_or_else(|| Self::overflow("總重"))?;
        }

        let factor = (weight_error_percent / Decimal::ONE_HUNDRED)
            .checked_add(Decimal::ONE)
            .ok_or_else(|| Self::overflow("重量誤差係數"))?;
        let adjusted_total = total
            .checked_mul(factor)
            .ok_or_else(|| Self::overflow("調整後總重"))?;
        let price = adjusted_total
            .checked_mul(unit_price)
            .ok_or_else(|| Self::overflow("價格"))?;

        Ok(WeightStat {
            profiles: raw
                .into_iter()
                .map(|(profile, weight)| (profile, crate::round_output(weight, 3)))
                .collect(),
            total: crate::round_output(total, 3),
            adjusted_total: crate::round_output(adjusted_total, 3),
            price: crate::round_output(price, 2),
        })
    }

    fn overflow(what: &str) -> CutPlanError {
        CutPlanError::InvalidInput(format!("{}超出數值範圍", what))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_per_profile() {
        let lines = vec![
            DemandLine::new("A", 1000, 2).with_unit_weight(Decimal::new(1500, 3)),
            DemandLine::new("B", 500, 4).with_unit_weight(Decimal::new(250, 3)),
            DemandLine::new("A", 2000, 1).with_unit_weight(Decimal::new(3000, 3)),
        ];

        let stat = WeightCalculator::compute(&lines, Decimal::ZERO, Decimal::ZERO).unwrap();

        assert_eq!(stat.get("A"), Some(Decimal::from(6)));
        assert_eq!(stat.get("B"), Some(Decimal::from(1)));
        assert_eq!(stat.total, Decimal::from(7));
        assert_eq!(stat.adjusted_total, Decimal::from(7));
        assert_eq!(stat.price, Decimal::ZERO);
    }

    #[test]
    fn test_weight_error_and_price() {
        let lines = vec![DemandLine::new("A", 1000, 10).with_unit_weight(Decimal::from(2))];

        // 20 kg × 1.05 = 21 kg, 21 × 3.5 = 73.5
        let stat = WeightCalculator::compute(&lines, Decimal::from(5), Decimal::new(35, 1)).unwrap();

        assert_eq!(stat.total, Decimal::from(20));
        assert_eq!(stat.adjusted_total, Decimal::from(21));
        assert_eq!(stat.price, Decimal::new(735, 1));
    }

    #[test]
    fn test_missing_unit_weight_counts_as_zero() {
        let lines = vec![
            DemandLine::new("A", 1000, 3),
            DemandLine::new("A", 1000, 1).with_unit_weight(Decimal::new(1234, 3)),
        ];

        let stat = WeightCalculator::compute(&lines, Decimal::ZERO, Decimal::ONE).unwrap();
        assert_eq!(stat.get("A"), Some(Decimal::new(1234, 3)));
    }

    #[test]
    fn test_rounding_applied_once() {
        // 每個型材 0.0004 取整後為 0，但總和 0.0012 取整為 0.001
        let lines = vec![
            DemandLine::new("A", 100, 1).with_unit_weight(Decimal::new(4, 4)),
            DemandLine::new("B", 100, 1).with_unit_weight(Decimal::new(4, 4)),
            DemandLine::new("C", 100, 1).with_unit_weight(Decimal::new(4, 4)),
        ];

        let stat = WeightCalculator::compute(&lines, Decimal::ZERO, Decimal::from(1000)).unwrap();

        assert_eq!(stat.get("A"), Some(Decimal::ZERO));
        assert_eq!(stat.total, Decimal::new(1, 3));
        // 價格以未取整的 0.0012 計算
        assert_eq!(stat.price, Decimal::new(120, 2));
    }

    #[test]
    fn test_weight_empty() {
        let stat = WeightCalculator::compute(&[], Decimal::from(5), Decimal::from(10)).unwrap();

        assert!(stat.is_empty());
        assert_eq!(stat.total, Decimal::ZERO);
        assert_eq!(stat.adjusted_total, Decimal::ZERO);
        assert_eq!(stat.price, Decimal::ZERO);
    }

    #[test]
    fn test_line_weight_overflow_is_error() {
        let lines = vec![DemandLine::new("A", 1000, 3).with_unit_weight(Decimal::MAX / Decimal::from(2))];

        let result = WeightCalculator::compute(&lines, Decimal::ZERO, Decimal::ONE);
        assert!(matches!(result, Err(CutPlanError::InvalidInput(_))));
    }

    #[test]
    fn test_profile_sum_overflow_is_error() {
        // 單行不溢出，同型材累加後溢出
        let half = Decimal::MAX / Decimal::from(2);
        let lines = vec![
            DemandLine::new("A", 1000, 1).with_unit_weight(half),
            DemandLine::new("A", 1000, 1).with_unit_weight(half),
            DemandLine::new("A", 1000, 1).with_unit_weight(half),
        ];

        let result = WeightCalculator::compute(&lines, Decimal::ZERO, Decimal::ONE);
        assert!(matches!(result, Err(CutPlanError::InvalidInput(_))));
    }

    #[test]
    fn test_total_overflow_is_error() {
        // 各型材不溢出，跨型材總和溢出
        let half = Decimal::MAX / Decimal::from(2);
        let lines = vec![
            DemandLine::new("A", 1000, 1).with_unit_weight(half),
            DemandLine::new("B", 1000, 1).with_unit_weight(half),
            DemandLine::new("C", 1000, 1).with_unit_weight(half),
        ];

        let result = WeightCalculator::compute(&lines, Decimal::ZERO, Decimal::ONE);
        assert!(matches!(result, Err(CutPlanError::InvalidInput(_))));
    }

    #[test]
    fn test_adjusted_total_overflow_is_error() {
        let lines = vec![DemandLine::new("A", 1000, 1).with_unit_weight(Decimal::MAX / Decimal::from(2))];

        // × 3 溢出
        let result = WeightCalculator::compute(&lines, Decimal::from(200), Decimal::ONE);
        assert!(matches!(result, Err(CutPlanError::InvalidInput(_))));
    }

    #[test]
    fn test_price_overflow_is_error() {
        let lines = vec![DemandLine::new("A", 1000, 1).with_unit_weight(Decimal::from(1_000_000_000))];
        let unit_price = Decimal::from_i128_with_scale(10i128.pow(24), 0);

        let result = WeightCalculator::compute(&lines, Decimal::ZERO, unit_price);
        assert!(matches!(result, Err(CutPlanError::InvalidInput(_))));
    }
}
