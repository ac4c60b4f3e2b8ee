/// Shopify expresses money as decimal strings, e.g. `"19.99"`.
///
/// Parses one into a finite float. Returns `None` for missing digits, trailing garbage, or
/// non-finite results, so callers decide between defaulting and failing.
pub fn parse_money(price: &str) -> Option<f64> {
    price.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
