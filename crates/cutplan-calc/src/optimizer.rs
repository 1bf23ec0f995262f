//! 切割計劃主計算器

use cutplan_core::{
    validate_demand_lines, AllocationResult, CutPlanError, DemandLine, PlanningConfig,
    ProfilePlan, StockCatalog,
};
use rayon::prelude::*;
use std::collections::HashMap;

use crate::packing::PackingCalculator;
use crate::summary::PlanSummary;
use crate::waste::WasteCalculator;
use crate::weight::WeightCalculator;
use crate::PlanReport;

/// 單一型材的待排料需求
#[derive(Debug, Clone)]
struct ProfileDemand<'a> {
    profile: &'a str,
    stock_length: u32,
    lines: Vec<&'a DemandLine>,
}

/// 切割計劃計算器
pub struct CuttingPlanOptimizer {
    /// 原料目錄
    catalog: StockCatalog,

    /// 計劃配置
    config: PlanningConfig,
}

impl CuttingPlanOptimizer {
    /// 創建新的切割計劃計算器
    pub fn new(catalog: StockCatalog, config: PlanningConfig) -> Self {
        Self { catalog, config }
    }

    /// 主計算入口
    ///
    /// 任何輸入錯誤都會中止整個計算，不產生部分結果。
    pub fn optimize(&self, lines: &[DemandLine]) -> cutplan_core::Result<AllocationResult> {
        tracing::info!("開始切割計劃計算：需求 {} 筆", lines.len());
        let start_time = std::time::Instant::now();

        // Step 1: 驗證輸入
        tracing::debug!("Step 1: 驗證輸入");
        self.config.validate()?;
        self.catalog.validate()?;
        validate_demand_lines(lines)?;

        // Step 2: 按型材分組並解析原料長度
        tracing::debug!("Step 2: 型材分組");
        let groups = self.group_by_profile(lines)?;
        tracing::debug!("型材數量: {}", groups.len());

        // Step 3: 逐型材排料（型材之間互不相依）
        tracing::debug!("Step 3: 逐型材排料 (並行: {})", self.config.parallel);
        let plans: Vec<ProfilePlan> = if self.config.parallel {
            groups
                .par_iter()
                .map(|group| self.pack_profile(group))
                .collect::<cutplan_core::Result<Vec<_>>>()?
        } else {
            groups
                .iter()
                .map(|group| self.pack_profile(group))
                .collect::<cutplan_core::Result<Vec<_>>>()?
        };

        // 沒有料件的型材不列入結果
        let result = AllocationResult::new(
            plans
                .into_iter()
                .filter(|plan| !plan.bars.is_empty())
                .collect(),
        );

        tracing::info!("切割計劃計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "型材 {} 種，原料 {} 支",
            result.len(),
            result.total_bars()
        );

        Ok(result)
    }

    /// 計算切割計劃並彙總廢料、重量與價格統計
    pub fn report(&self, lines: &[DemandLine]) -> cutplan_core::Result<PlanReport> {
        let allocation = self.optimize(lines)?;

        let waste = WasteCalculator::compute(&allocation);
        let weight = WeightCalculator::compute(
            lines,
            self.config.weight_error_percent,
            self.config.unit_price,
        )?;
        let summary = PlanSummary::from_allocation(&allocation);

        Ok(PlanReport {
            allocation,
            waste,
            weight,
            summary,
        })
    }

    /// 按型材分組需求（保持型材首次出現的順序）
    ///
    /// 分組時即檢查料件是否超過原料長度，錯誤依輸入順序回報。
    fn group_by_profile<'a>(
        &self,
        lines: &'a [DemandLine],
    ) -> cutplan_core::Result<Vec<ProfileDemand<'a>>> {
        let mut groups: Vec<ProfileDemand<'a>> = Vec::new();
        let mut index: HashMap<&'a str, usize> = HashMap::new();

        for line in lines {
            let position = match index.get(line.profile.as_str()) {
                Some(&position) => position,
                None => {
                    let stock_length = self.resolve_stock_length(&line.profile)?;
                    groups.push(ProfileDemand {
                        profile: line.profile.as_str(),
                        stock_length,
                        lines: Vec::new(),
                    });
                    index.insert(line.profile.as_str(), groups.len() - 1);
                    groups.len() - 1
                }
            };

            let group = &mut groups[position];
            if line.piece_length > group.stock_length {
                return Err(CutPlanError::PieceExceedsStockLength {
                    profile: line.profile.clone(),
                    piece_length: line.piece_length,
                    stock_length: group.stock_length,
                });
            }
            group.lines.push(line);
        }

        Ok(groups)
    }

    /// 解析型材原料長度
    fn resolve_stock_length(&self, profile: &str) -> cutplan_core::Result<u32> {
        let stock_length = self
            .catalog
            .resolve(profile, self.config.default_stock_length)?;

        if !self.catalog.contains(profile) {
            tracing::warn!(
                "型材 {} 不在原料目錄中，使用預設長度 {}",
                profile,
                stock_length
            );
        }

        Ok(stock_length)
    }

    /// 單型材排料
    fn pack_profile(&self, group: &ProfileDemand<'_>) -> cutplan_core::Result<ProfilePlan> {
        let pieces = PackingCalculator::expand_sorted(group.lines.iter().copied());

        let bars = PackingCalculator::apply(
            group.profile,
            group.stock_length,
            &pieces,
            self.config.packing_strategy,
        )?;

        tracing::debug!(
            "型材 {} 排料: 料件 {} 個，原料 {} 支 (長度 {})",
            group.profile,
            pieces.len(),
            bars.len(),
            group.stock_length
        );

        Ok(ProfilePlan::new(
            group.profile.to_string(),
            group.stock_length,
            bars,
        ))
    }

    /// 獲取原料目錄引用
    pub fn catalog(&self) -> &StockCatalog {
        &self.catalog
    }

    /// 獲取計劃配置引用
    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }
}

/// 以預設配置計算切割計劃
///
/// 目錄中沒有的型材使用 `default_length`。
pub fn optimize(
    lines: &[DemandLine],
    catalog: &StockCatalog,
    default_length: u32,
) -> cutplan_core::Result<AllocationResult> {
    let config = PlanningConfig::new().with_default_stock_length(Some(default_length));
    CuttingPlanOptimizer::new(catalog.clone(), config).optimize(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutplan_core::{Bar, PackingStrategy};

    fn scenario_lines() -> Vec<DemandLine> {
        vec![
            DemandLine::new("ALU-40x40", 2500, 1),
            DemandLine::new("ALU-40x40", 1500, 1),
            DemandLine::new("ALU-40x40", 4000, 1),
            DemandLine::new("ALU-40x40", 3000, 1),
        ]
    }

    #[test]
    fn test_optimize_scenario() {
        let result = optimize(&scenario_lines(), &StockCatalog::new(), 6000).unwrap();

        assert_eq!(result.len(), 1);
        let plan = result.get("ALU-40x40").unwrap();
        assert_eq!(plan.stock_length, 6000);
        assert_eq!(
            plan.bars,
            vec![
                Bar::from_pieces(vec![4000], 6000).unwrap(),
                Bar::from_pieces(vec![3000, 2500], 6000).unwrap(),
                Bar::from_pieces(vec![1500], 6000).unwrap(),
            ]
        );
    }

    #[test]
    fn test_profile_order_follows_first_appearance() {
        let lines = vec![
            DemandLine::new("B", 1000, 1),
            DemandLine::new("A", 1000, 1),
            DemandLine::new("B", 2000, 1),
        ];

        let result = optimize(&lines, &StockCatalog::new(), 6000).unwrap();
        let profiles: Vec<_> = result.iter().map(|p| p.profile.as_str()).collect();
        assert_eq!(profiles, vec!["B", "A"]);
        assert_eq!(result.get("B").unwrap().bars[0].pieces, vec![2000, 1000]);
    }

    #[test]
    fn test_catalog_length_used_over_default() {
        let catalog = StockCatalog::new().with_stock_length("A", 5000);
        let lines = vec![DemandLine::new("A", 3000, 2), DemandLine::new("B", 3000, 2)];

        let result = optimize(&lines, &catalog, 6000).unwrap();

        assert_eq!(result.get("A").unwrap().stock_length, 5000);
        assert_eq!(result.get("A").unwrap().bar_count(), 2);
        assert_eq!(result.get("B").unwrap().stock_length, 6000);
        assert_eq!(result.get("B").unwrap().bar_count(), 1);
    }

    #[test]
    fn test_catalog_only_profiles_are_absent() {
        let catalog = StockCatalog::new()
            .with_stock_length("A", 6000)
            .with_stock_length("UNUSED", 6000);

        let result = optimize(&[DemandLine::new("A", 1000, 1)], &catalog, 6000).unwrap();
        assert!(result.get("UNUSED").is_none());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_missing_catalog_entry_without_default() {
        let optimizer = CuttingPlanOptimizer::new(
            StockCatalog::new().with_stock_length("A", 6000),
            PlanningConfig::new().with_default_stock_length(None),
        );

        let lines = vec![DemandLine::new("A", 1000, 1), DemandLine::new("B", 1000, 1)];
        assert!(matches!(
            optimizer.optimize(&lines),
            Err(CutPlanError::MissingCatalogEntry(p)) if p == "B"
        ));
    }

    #[test]
    fn test_piece_exceeds_stock_length_aborts() {
        let lines = vec![DemandLine::new("A", 1000, 1), DemandLine::new("A", 7000, 1)];

        assert!(matches!(
            optimize(&lines, &StockCatalog::new(), 6000),
            Err(CutPlanError::PieceExceedsStockLength {
                piece_length: 7000,
                stock_length: 6000,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_input_aborts_before_packing() {
        let lines = vec![DemandLine::new("A", 1000, 1), DemandLine::new("B", 1000, 0)];

        assert!(matches!(
            optimize(&lines, &StockCatalog::new(), 6000),
            Err(CutPlanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        let catalog = StockCatalog::new().with_stock_length("A", 0);

        assert!(matches!(
            optimize(&[DemandLine::new("B", 1000, 1)], &catalog, 6000),
            Err(CutPlanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        let result = optimize(&[], &StockCatalog::new(), 6000).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let lines: Vec<DemandLine> = (0..20)
            .map(|i| DemandLine::new(format!("P-{}", i % 5), 500 + (i * 137) % 3000, 1 + i % 4))
            .collect();

        for strategy in [PackingStrategy::Sequential, PackingStrategy::FirstFit] {
            let config = PlanningConfig::new().with_packing_strategy(strategy);
            let serial = CuttingPlanOptimizer::new(StockCatalog::new(), config.clone())
                .optimize(&lines)
                .unwrap();
            let parallel =
                CuttingPlanOptimizer::new(StockCatalog::new(), config.with_parallel(true))
                    .optimize(&lines)
                    .unwrap();

            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_report() {
        let lines = vec![
            DemandLine::new("A", 4000, 1).with_unit_weight(rust_decimal::Decimal::from(4)),
            DemandLine::new("A", 3000, 1).with_unit_weight(rust_decimal::Decimal::from(3)),
        ];
        let optimizer = CuttingPlanOptimizer::new(
            StockCatalog::new(),
            PlanningConfig::new()
                .with_weight_error_percent(rust_decimal::Decimal::from(10))
                .with_unit_price(rust_decimal::Decimal::from(2)),
        );

        let report = optimizer.report(&lines).unwrap();

        assert_eq!(report.allocation.total_bars(), 2);
        assert_eq!(report.waste.get("A").unwrap().total_stock_length, 12000);
        assert_eq!(report.weight.total, rust_decimal::Decimal::from(7));
        assert_eq!(report.weight.adjusted_total, rust_decimal::Decimal::new(77, 1));
        assert_eq!(report.weight.price, rust_decimal::Decimal::new(154, 1));
        assert_eq!(report.summary.total_bars, 2);
    }
}
