//! Prices
//!
//! Minor-unit price formatting for display.

/// Format a minor-unit amount into a currency string.
///
/// Known currencies render with their symbol (`$12.99`); anything else falls
/// back to `12.99 XYZ`.
#[must_use]
pub fn format_price(minor_units: i64, currency_code: &str) -> String {
    let abs_minor = minor_units.unsigned_abs();
    let major_units = abs_minor / 100;
    let fractional = abs_minor % 100;
    let sign = if minor_units < 0 { "-" } else { "" };
    let symbol = match currency_code {
        "GBP" => "£",
        "USD" => "$",
        "EUR" => "€",
        _ => "",
    };

    if symbol.is_empty() {
        format!("{sign}{major_units}.{fractional:02} {currency_code}")
    } else {
        format!("{sign}{symbol}{major_units}.{fractional:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_usd_with_symbol() {
        assert_eq!(format_price(12_99, "USD"), "$12.99");
        assert_eq!(format_price(18_50, "USD"), "$18.50");
    }

    #[test]
    fn formats_gbp_and_eur_with_symbols() {
        assert_eq!(format_price(12_50, "GBP"), "£12.50");
        assert_eq!(format_price(50_00, "EUR"), "€50.00");
    }

    #[test]
    fn pads_single_digit_fractions() {
        assert_eq!(format_price(1_05, "USD"), "$1.05");
        assert_eq!(format_price(99, "USD"), "$0.99");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_price(0, "USD"), "$0.00");
    }

    #[test]
    fn negative_amounts_carry_a_leading_sign() {
        assert_eq!(format_price(-12_99, "USD"), "-$12.99");
        assert_eq!(format_price(-12_50, "JPY"), "-12.50 JPY");
    }

    #[test]
    fn unknown_currency_falls_back_to_code_suffix() {
        assert_eq!(format_price(12_50, "JPY"), "12.50 JPY");
    }
}
