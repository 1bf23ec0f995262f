//! 切割計劃示例

use cutplan::{
    cut_list, CuttingPlanOptimizer, Decimal, DemandLine, PlanningConfig, StockCatalog, StockSpec,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== 切割計劃示例 ===\n");

    // 原料目錄（T-30 不在目錄中，使用預設長度）
    let catalog = StockCatalog::from_specs(vec![
        StockSpec::new("ALU-40x40", 6000),
        StockSpec::new("U-60", 6500),
    ])?;

    let config = PlanningConfig::new()
        .with_default_stock_length(Some(6000))
        .with_weight_error_percent(Decimal::from(3))
        .with_unit_price(Decimal::new(420, 2));

    let lines = vec![
        DemandLine::new("ALU-40x40", 4000, 1).with_unit_weight(Decimal::new(5600, 3)),
        DemandLine::new("ALU-40x40", 3000, 1).with_unit_weight(Decimal::new(4200, 3)),
        DemandLine::new("ALU-40x40", 2500, 1).with_unit_weight(Decimal::new(3500, 3)),
        DemandLine::new("ALU-40x40", 1500, 1).with_unit_weight(Decimal::new(2100, 3)),
        DemandLine::new("U-60", 2100, 5).with_unit_weight(Decimal::new(3150, 3)),
        DemandLine::new("T-30", 900, 8),
    ];

    let report = CuttingPlanOptimizer::new(catalog, config).report(&lines)?;

    println!("切割清單:");
    for row in cut_list(&report.allocation) {
        println!(
            "  - {} #{} (原料 {} mm): {:?} 使用 {} mm，剩餘 {} mm",
            row.profile,
            row.cut_index,
            row.stock_length,
            row.pieces,
            row.used_length,
            row.remaining_length
        );
    }

    println!("\n廢料統計:");
    for (profile, waste) in &report.waste.profiles {
        println!(
            "  - {}: 使用 {} / {} mm，廢料 {}%",
            profile, waste.used_length, waste.total_stock_length, waste.waste_percentage
        );
    }

    println!(
        "\n總重 {} kg，調整後 {} kg，價格 {}",
        report.weight.total, report.weight.adjusted_total, report.weight.price
    );
    println!(
        "原料 {} 支（理論下限 {} 支），整體廢料 {}%",
        report.summary.total_bars, report.summary.lower_bound_bars, report.summary.waste_percentage
    );

    println!("\n{}", serde_json::to_string_pretty(&report.allocation)?);

    Ok(())
}
