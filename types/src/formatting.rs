//! Centralized number and label formatting.
//!
//! All numeric display formatting goes through this module so the browser app and the
//! CLI agree, and so Polish output gets a decimal comma (`0,7 m` instead of `0.7 m`).

/// Swap `.` for `,` in a formatted number.
///
/// The inputs here are purely numeric (with an optional unit suffix), so a global swap
/// is safe.
fn to_decimal_comma(s: &str) -> String {
    s.chars().map(|c| if c == '.' { ',' } else { c }).collect()
}

#[inline]
fn maybe_comma(s: String, comma: bool) -> String {
    if comma { to_decimal_comma(&s) } else { s }
}

/// Format a decimal number with the specified precision.
///
/// # Examples
/// ```
/// use pokedex_types::formatting::format_decimal;
/// assert_eq!(format_decimal(3.5, 1, false), "3.5");
/// assert_eq!(format_decimal(3.5, 1, true), "3,5");
/// assert_eq!(format_decimal(1.234, 2, false), "1.23");
/// ```
pub fn format_decimal(n: f64, precision: usize, comma: bool) -> String {
    maybe_comma(format!("{:.prec$}", n, prec = precision), comma)
}

/// Format a Pokédex number as `#NNN`.
///
/// # Examples
/// ```
/// use pokedex_types::formatting::format_dex_number;
/// assert_eq!(format_dex_number(1), "#001");
/// assert_eq!(format_dex_number(25), "#025");
/// assert_eq!(format_dex_number(151), "#151");
/// assert_eq!(format_dex_number(1010), "#1010");
/// ```
pub fn format_dex_number(id: u32) -> String {
    format!("#{:03}", id)
}

/// Format a PokeAPI height (decimetres) in metres.
///
/// # Examples
/// ```
/// use pokedex_types::formatting::format_height;
/// assert_eq!(format_height(7, false), "0.7 m");
/// assert_eq!(format_height(17, true), "1,7 m");
/// ```
pub fn format_height(decimetres: u32, comma: bool) -> String {
    format!("{} m", format_decimal(decimetres as f64 / 10.0, 1, comma))
}

/// Format a PokeAPI weight (hectograms) in kilograms.
///
/// # Examples
/// ```
/// use pokedex_types::formatting::format_weight;
/// assert_eq!(format_weight(69, false), "6.9 kg");
/// assert_eq!(format_weight(1300, true), "130,0 kg");
/// ```
pub fn format_weight(hectograms: u32, comma: bool) -> String {
    format!("{} kg", format_decimal(hectograms as f64 / 10.0, 1, comma))
}

/// Format remaining countdown milliseconds as seconds with two decimals.
///
/// Negative values clamp to zero.
///
/// # Examples
/// ```
/// use pokedex_types::formatting::format_countdown_ms;
/// assert_eq!(format_countdown_ms(5000, false), "5.00");
/// assert_eq!(format_countdown_ms(4951, false), "4.95");
/// assert_eq!(format_countdown_ms(1234, true), "1,23");
/// assert_eq!(format_countdown_ms(-20, false), "0.00");
/// ```
pub fn format_countdown_ms(remaining_ms: i64, comma: bool) -> String {
    // Truncate rather than round so the display never shows more time than is left
    let hundredths = remaining_ms.max(0) / 10;
    format_decimal(hundredths as f64 / 100.0, 2, comma)
}

/// Format a ratio as a whole-number percentage.
///
/// Returns `"0%"` when `total` is zero.
///
/// # Examples
/// ```
/// use pokedex_types::formatting::format_pct_ratio;
/// assert_eq!(format_pct_ratio(3, 4), "75%");
/// assert_eq!(format_pct_ratio(1, 3), "33%");
/// assert_eq!(format_pct_ratio(0, 0), "0%");
/// ```
pub fn format_pct_ratio(count: u32, total: u32) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.0}%", count as f64 / total as f64 * 100.0)
}

/// Turn an API slug into a display name: dashes become spaces, words are capitalized.
///
/// # Examples
/// ```
/// use pokedex_types::formatting::display_name;
/// assert_eq!(display_name("bulbasaur"), "Bulbasaur");
/// assert_eq!(display_name("mr-mime"), "Mr Mime");
/// assert_eq!(display_name("solar-power"), "Solar Power");
/// ```
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(0.0, 1, false), "0.0");
        assert_eq!(format_decimal(3.5, 1, true), "3,5");
        assert_eq!(format_decimal(12.346, 2, true), "12,35");
    }

    #[test]
    fn test_format_dex_number() {
        assert_eq!(format_dex_number(0), "#000");
        assert_eq!(format_dex_number(7), "#007");
        assert_eq!(format_dex_number(99), "#099");
    }

    #[test]
    fn test_format_measurements() {
        assert_eq!(format_height(0, false), "0.0 m");
        assert_eq!(format_height(20, false), "2.0 m");
        assert_eq!(format_weight(9999, false), "999.9 kg");
        assert_eq!(format_weight(9999, true), "999,9 kg");
    }

    #[test]
    fn test_format_countdown_ms() {
        assert_eq!(format_countdown_ms(0, false), "0.00");
        assert_eq!(format_countdown_ms(49, false), "0.04");
        assert_eq!(format_countdown_ms(4999, false), "4.99");
        assert_eq!(format_countdown_ms(2500, true), "2,50");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(""), "");
        assert_eq!(display_name("nidoran-f"), "Nidoran F");
        assert_eq!(display_name("farfetchd"), "Farfetchd");
    }

    #[test]
    fn test_to_decimal_comma() {
        assert_eq!(to_decimal_comma("1.50"), "1,50");
        assert_eq!(to_decimal_comma("500"), "500");
    }
}
