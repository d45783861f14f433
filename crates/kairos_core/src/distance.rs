/// Reads the leading number of a distance label ("1,234 km", "120 km").
///
/// Thousands separators are stripped. The unit is not interpreted.
pub fn parse_distance_km(distance_text: &str) -> Option<f64> {
    let leading = distance_text.split_whitespace().next()?;
    let value = leading.replace(',', "").parse::<f64>().ok()?;

    value.is_finite().then_some(value)
}
