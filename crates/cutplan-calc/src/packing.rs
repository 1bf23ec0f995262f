//! 排料規則實現

use cutplan_core::{Bar, CutPlanError, DemandLine, PackingStrategy};

/// 排料計算器
pub struct PackingCalculator;

impl PackingCalculator {
    /// 應用排料策略
    ///
    /// `pieces` 必須已依長度遞減排序（見 [`PackingCalculator::expand_sorted`]）。
    ///
    /// 本函數可單獨呼叫，故自行檢查料件長度；經由優化器呼叫時，
    /// 超長料件已在分組時被拒絕。
    pub fn apply(
        profile: &str,
        stock_length: u32,
        pieces: &[u32],
        strategy: PackingStrategy,
    ) -> cutplan_core::Result<Vec<Bar>> {
        if let Some(&piece_length) = pieces.iter().find(|&&p| p > stock_length) {
            return Err(CutPlanError::PieceExceedsStockLength {
                profile: profile.to_string(),
                piece_length,
                stock_length,
            });
        }

        match strategy {
            PackingStrategy::Sequential => Self::sequential(stock_length, pieces),
            PackingStrategy::FirstFit => Self::first_fit(stock_length, pieces),
        }
    }

    /// 展開需求並依長度遞減排序
    ///
    /// 穩定排序：長度相同的料件保持輸入順序。
    pub fn expand_sorted<'a, I>(lines: I) -> Vec<u32>
    where
        I: IntoIterator<Item = &'a DemandLine>,
    {
        let mut pieces: Vec<u32> = lines.into_iter().flat_map(DemandLine::expand).collect();
        pieces.sort_by(|a, b| b.cmp(a));
        pieces
    }

    /// 單支開啟原料：放得下就放，放不下就結束目前原料並開新的一支
    fn sequential(stock_length: u32, pieces: &[u32]) -> cutplan_core::Result<Vec<Bar>> {
        let mut bars = Vec::new();
        let mut current: Vec<u32> = Vec::new();
        let mut remaining = stock_length;

        for &piece in pieces {
            if piece <= remaining {
                current.push(piece);
                remaining -= piece;
            } else {
                bars.push(Bar::from_pieces(std::mem::take(&mut current), stock_length)?);
                current.push(piece);
                remaining = stock_length - piece;
            }
        }

        // 最後一支原料（即使只有一個料件）
        if !current.is_empty() {
            bars.push(Bar::from_pieces(current, stock_length)?);
        }

        Ok(bars)
    }

    /// 首次適配：每個料件放入第一支剩餘長度足夠的原料
    fn first_fit(stock_length: u32, pieces: &[u32]) -> cutplan_core::Result<Vec<Bar>> {
        let mut open: Vec<(Vec<u32>, u32)> = Vec::new();

        for &piece in pieces {
            match open.iter_mut().find(|(_, remaining)| piece <= *remaining) {
                Some((bar_pieces, remaining)) => {
                    bar_pieces.push(piece);
                    *remaining -= piece;
                }
                None => open.push((vec![piece], stock_length - piece)),
            }
        }

        open.into_iter()
            .map(|(bar_pieces, _)| Bar::from_pieces(bar_pieces, stock_length))
            .collect()
    }
}
