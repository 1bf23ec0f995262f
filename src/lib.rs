//! # Cutplan
//!
//! 型材切割計劃：依原料長度排料，並計算廢料、重量與價格

pub use cutplan_calc::{
    cut_list, optimize, CutListRow, CuttingPlanOptimizer, PackingCalculator, PlanReport,
    PlanSummary, ProfileWaste, WasteCalculator, WasteStat, WeightCalculator, WeightStat,
};
pub use cutplan_core::{
    validate_demand_lines, AllocationResult, Bar, CutPlanError, DemandLine, PackingStrategy,
    PlanningConfig, ProfilePlan, Result, StockCatalog, StockSpec,
};
pub use rust_decimal::Decimal;
