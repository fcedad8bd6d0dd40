//! `%g`-style float text: six significant digits, trailing zeros trimmed,
//! exponent form for very small or very large magnitudes.

/// Significant digits.
const PRECISION: usize = 6;

/// Decimal exponents in `MIN_FIXED_EXP..MAX_FIXED_EXP` print in fixed notation.
const MIN_FIXED_EXP: i32 = -4;
const MAX_FIXED_EXP: i32 = 6;

pub(super) fn format_general(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_owned();
    }
    if v.is_infinite() {
        return if v.is_sign_negative() { "-inf" } else { "inf" }.to_owned();
    }

    // Rounding to the target precision can carry into the next decade
    // (999999.5 -> 1.00000e6), so the exponent is read after rounding.
    let sci = format!("{v:.prec$e}", prec = PRECISION - 1);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (MIN_FIXED_EXP..MAX_FIXED_EXP).contains(&exp) {
        let decimals = usize::try_from(MAX_FIXED_EXP - 1 - exp).unwrap_or(0);
        trim_fraction(&format!("{v:.decimals$}")).to_owned()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs())
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
