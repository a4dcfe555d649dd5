//! Size range expressions for size conditions.

/// A parsed size range expression in megabytes.
///
/// Three shapes are accepted: `>N` (strictly above), `<N` (strictly
/// below), and `N-M` (inclusive on both ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRange {
    /// Size must be strictly greater than the bound.
    Above(i64),
    /// Size must be strictly less than the bound.
    Below(i64),
    /// Size must fall within the inclusive bounds.
    Between(i64, i64),
}

impl SizeRange {
    /// Parse a range expression. Returns `None` for anything that is
    /// not one of the three accepted shapes.
    pub fn parse(expr: &str) -> Option<Self> {
        let expr = expr.trim();
        if let Some(rest) = expr.strip_prefix('>') {
            return rest.trim().parse().ok().map(SizeRange::Above);
        }
        if let Some(rest) = expr.strip_prefix('<') {
            return rest.trim().parse().ok().map(SizeRange::Below);
        }
        if let Some((low, high)) = expr.split_once('-') {
            let low: i64 = low.trim().parse().ok()?;
            let high: i64 = high.trim().parse().ok()?;
            if low <= high {
                return Some(SizeRange::Between(low, high));
            }
            return None;
        }
        None
    }

    /// Whether the given size in MB satisfies the range.
    pub fn contains(&self, size_mb: i64) -> bool {
        match self {
            SizeRange::Above(bound) => size_mb > *bound,
            SizeRange::Below(bound) => size_mb < *bound,
            SizeRange::Between(low, high) => (*low..=*high).contains(&size_mb),
        }
    }
}
