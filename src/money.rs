//! Exact two-decimal monetary amounts, carried as integer cents.
//!
//! Every amount crossing the payment surface is parsed into `i64` cents and
//! formatted back to a `"123.45"` string; no floating point is involved
//! anywhere on the ledger path.

/// Parse a decimal string ("400", "400.5", "400.50") into cents.
///
/// At most two fractional digits are accepted; anything else is rejected so a
/// sub-cent amount can never slip into the ledger.
pub fn parse(input: &str) -> Result<i64, String> {
    let s = input.trim();
    let (sign, s) = match s.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, s),
    };
    if s.is_empty() {
        return Err(format!("invalid amount: {input:?}"));
    }
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(format!("invalid amount: {input:?}"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || frac.len() > 2
        || !frac.chars().all(|c| c.is_ascii_digit())
    {
        return Err(format!("invalid amount: {input:?}"));
    }
    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| format!("amount out of range: {input:?}"))?
    };
    let cents = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| format!("invalid amount: {input:?}"))? * 10,
        _ => frac.parse::<i64>().map_err(|_| format!("invalid amount: {input:?}"))?,
    };
    whole
        .checked_mul(100)
        .and_then(|w| w.checked_add(cents))
        .and_then(|v| v.checked_mul(sign))
        .ok_or_else(|| format!("amount out of range: {input:?}"))
}

/// Format cents as a two-decimal string: 40000 -> "400.00".
pub fn format(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_decimal_amounts() {
        assert_eq!(parse("400.00"), Ok(40_000));
        assert_eq!(parse("400"), Ok(40_000));
        assert_eq!(parse("400.5"), Ok(40_050));
        assert_eq!(parse("0.01"), Ok(1));
        assert_eq!(parse(" 12.34 "), Ok(1_234));
        assert_eq!(parse("-3.50"), Ok(-350));
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert!(parse("").is_err());
        assert!(parse(".").is_err());
        assert!(parse("12.345").is_err());
        assert!(parse("12,34").is_err());
        assert!(parse("abc").is_err());
        assert!(parse("1.2.3").is_err());
    }

    #[test]
    fn formats_cents() {
        assert_eq!(format(40_000), "400.00");
        assert_eq!(format(1), "0.01");
        assert_eq!(format(0), "0.00");
        assert_eq!(format(-350), "-3.50");
    }
}
