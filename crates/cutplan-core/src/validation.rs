//! 輸入驗證

use rust_decimal::Decimal;

use crate::{CutPlanError, DemandLine, Result};

/// 驗證需求明細
///
/// 任一行無效即中止，不產生部分結果：
/// - 型材名稱不可為空
/// - 料件長度與數量必須大於 0
/// - 單件重量不可為負
pub fn validate_demand_lines(lines: &[DemandLine]) -> Result<()> {
    for (index, line) in lines.iter().enumerate() {
        validate_demand_line(line).map_err(|e| match e {
            CutPlanError::InvalidInput(msg) => {
                CutPlanError::InvalidInput(format!("第 {} 行: {}", index + 1, msg))
            }
            other => other,
        })?;
    }
    Ok(())
}

fn validate_demand_line(line: &DemandLine) -> Result<()> {
    if line.profile.trim().is_empty() {
        return Err(CutPlanError::InvalidInput("型材名稱為空".to_string()));
    }

    if line.piece_length == 0 {
        return Err(CutPlanError::InvalidInput(format!(
            "型材 {} 的料件長度必須大於 0",
            line.profile
        )));
    }

    if line.quantity == 0 {
        return Err(CutPlanError::InvalidInput(format!(
            "型材 {} 的需求數量必須大於 0",
            line.profile
        )));
    }

    if let Some(weight) = line.unit_weight {
        if weight < Decimal::ZERO {
            return Err(CutPlanError::InvalidInput(format!(
                "型材 {} 的單件重量不可為負: {}",
                line.profile, weight
            )));
        }
    }

    Ok(())
}
