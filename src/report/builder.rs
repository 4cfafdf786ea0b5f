use crate::table::{FrequencyTable, WordEntry};
use crate::types::ReportError;

/// Decimal digits needed to print `n` with no sign or leading zeros.
pub fn digit_count(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Bytes one entry occupies in the report: word, space, count, newline.
pub fn required_bytes(entry: &WordEntry) -> usize {
    entry.word().len() + 1 + digit_count(entry.count()) + 1
}

/// Exact length of the report `build` will produce for `table`.
pub fn report_len(table: &FrequencyTable) -> usize {
    table.iter().map(required_bytes).sum()
}

/// Render `table` as `<word> <count>\n` lines in table order.
///
/// The output buffer is sized up front and never grows. Word bytes are
/// copied verbatim.
pub fn build(table: &FrequencyTable) -> Result<Vec<u8>, ReportError> {
    let total = report_len(table);

    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(ReportError::allocation("report buffer"))?;

    for entry in table {
        out.extend_from_slice(entry.word());
        out.push(b' ');
        push_decimal(&mut out, entry.count());
        out.push(b'\n');
    }

    debug_assert_eq!(out.len(), total);
    Ok(out)
}

fn push_decimal(out: &mut Vec<u8>, mut n: u64) {
    // u64::MAX has 20 digits
    let mut digits = [0u8; 20];
    let mut at = digits.len();
    loop {
        at -= 1;
        digits[at] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    out.extend_from_slice(&digits[at..]);
}
