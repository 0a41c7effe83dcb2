//! Thousands delimiting for numbers, spreadsheet style.

/// Grouping delimiter for [`num_parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// `1,234,567.89`
    #[default]
    Comma,
    /// `1 234 567.89`
    Space,
    /// Continental style: `1.234.567,89` — the decimal point becomes a comma.
    Punct,
}

impl Delimiter {
    fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Space => ' ',
            Delimiter::Punct => '.',
        }
    }
}

/// Insert a grouping delimiter every 3 digits from the right.
///
/// The decimal portion (everything from the first `.`) is preserved
/// untouched, except under [`Delimiter::Punct`] where the point is rewritten
/// to a comma. A leading minus sign stays in front of the first group.
pub fn num_parse<T: ToString>(value: T, delimiter: Delimiter) -> String {
    let raw = value.to_string();
    let (number, decimal) = match raw.find('.') {
        Some(i) => raw.split_at(i),
        None => (raw.as_str(), ""),
    };
    let decimal = match delimiter {
        Delimiter::Punct => decimal.replacen('.', ",", 1),
        _ => decimal.to_string(),
    };

    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let len = digits.chars().count();
    let mut grouped = String::with_capacity(digits.len() + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(delimiter.as_char());
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}{decimal}")
}
