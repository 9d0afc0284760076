//! Timeframe resolution from the optional CLI argument

/// Lookback window used when no timeframe argument is given.
pub const DEFAULT_TIMEFRAME: &str = "24 hours";

/// Resolve the lookback timeframe from an optional argument.
///
/// The string is passed verbatim to git's `--since` grammar, so no
/// validation happens here beyond rejecting blank input. A missing or
/// blank-after-trim argument falls back to [`DEFAULT_TIMEFRAME`].
pub fn resolve(arg: Option<&str>) -> String {
    match arg.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DEFAULT_TIMEFRAME.to_string(),
    }
}
