//! Canonical query-string rendering.

use super::ParamSet;

/// Render `params` as `name=value&name=value`.
///
/// Entries keep insertion order and absent ones are dropped. Values are written
/// literally: the exchange expects unescaped addresses and decimal strings, so
/// callers must not pass values containing `&` or `=`.
pub fn build_query_string(params: &ParamSet) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&")
}
