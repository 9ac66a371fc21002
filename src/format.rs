//! Byte-count formatting shared by the diagram labels and the stats panel

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count for display.
///
/// At least 1 MiB prints as megabytes and at least 1 KiB as kilobytes, both
/// with two decimals; smaller values print as grouped bytes.
pub fn format_bytes(value: u64) -> String {
    if value >= MIB {
        format!("{:.2} MB", value as f64 / MIB as f64)
    } else if value >= KIB {
        format!("{:.2} KB", value as f64 / KIB as f64)
    } else {
        format_byte_count(value)
    }
}

/// Exact byte count with thousands separators, e.g. `8,192 B`
pub fn format_byte_count(value: u64) -> String {
    format!("{} B", group_thousands(value))
}

/// Insert a comma between every group of three digits
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
