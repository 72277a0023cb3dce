//! Account currency code to display symbol lookup

/// Known currency symbols, keyed by upper-case ISO code
const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("GBP", "₤"),
    ("JPY", "¥"),
    ("EUR", "€"),
    ("NZD", "$"),
    ("AUD", "$"),
    ("CAD", "$"),
    ("CHF", "Fr"),
    ("HKD", "$"),
    ("SGD", "$"),
    ("XAG", "Ag"),
    ("XAU", "Au"),
    ("CNH", "¥"),
    ("CNY", "¥"),
    ("CZK", "Kč"),
    ("DKK", "kr"),
    ("HUF", "Ft"),
    ("INR", "₹"),
    ("MXN", "$"),
    ("NOK", "kr"),
    ("PLN", "zł"),
    ("SAR", "﷼"),
    ("SEK", "kr"),
    ("THB", "฿"),
    ("TRY", "₺"),
    ("TWD", "NT$"),
    ("ZAR", "R"),
    ("BTC", "₿"),
    ("BCH", "Ƀ"),
    ("LTC", "Ł"),
    ("ETH", "Ξ"),
];

/// Symbol for a currency code, case-insensitive
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    let code = code.trim();
    CURRENCY_SYMBOLS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, symbol)| *symbol)
}

/// Symbol for a currency code, falling back to the code itself
pub fn symbol_or_code(code: &str) -> String {
    currency_symbol(code)
        .map(str::to_string)
        .unwrap_or_else(|| code.trim().to_uppercase())
}
