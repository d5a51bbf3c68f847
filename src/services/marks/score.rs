//! 成绩百分比计算
//!
//! 百分比保留两位小数，四舍五入（远离零方向，对非负成绩即为 half-up）。
//! 总分为 0、负数或非有限值时不计算百分比，格式化字符串显示 `N/A`，
//! 导出时百分比单元格留空。

/// 计算后的成绩
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedScore {
    pub percentage: Option<f64>,
    pub formatted: String,
}

/// 按小数位四舍五入
///
/// 先把放大后的值对齐到 7 位小数，消除二进制表示误差（如 1.005 * 100
/// 得到 100.49999999999999），再做最终取整。
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    let snapped = (scaled * 1e7).round() / 1e7;
    snapped.round() / factor
}

/// 计算百分比，总分无效时返回 None
pub fn percentage(mark: f64, total: f64) -> Option<f64> {
    if !mark.is_finite() || !total.is_finite() || total <= 0.0 {
        return None;
    }
    Some(round_half_up(mark / total * 100.0, 2))
}

/// 计算百分比并生成 `mark/total (pct%)` 字符串
pub fn derive_score(mark: f64, total: f64) -> DerivedScore {
    let percentage = percentage(mark, total);
    let formatted = match percentage {
        Some(pct) => format!("{mark}/{total} ({pct:.2}%)"),
        None => format!("{mark}/{total} (N/A)"),
    };

    DerivedScore {
        percentage,
        formatted,
    }
}
