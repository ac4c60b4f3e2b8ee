use crate::shopify_order::Address;

/// Render a structured postal address as a single display line.
///
/// Joins address line 1, address line 2, city, province, postal code and country, in that order,
/// with `", "`, skipping parts that are absent or empty. No other normalization is applied.
/// Returns an empty string when nothing is present; callers omit the field in that case.
pub fn format_address(address: &Address) -> String {
    [
        address.address1.as_deref(),
        address.address2.as_deref(),
        address.city.as_deref(),
        address.province.as_deref(),
        address.zip.as_deref(),
        address.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<&str>>()
    .join(", ")
}
