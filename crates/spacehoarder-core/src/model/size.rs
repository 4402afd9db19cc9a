/// Display formatting for byte sizes and entry counts.
///
/// Sizes stay `u64` bytes everywhere in the core; these helpers are only
/// called where a number is shown to the user.

const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

/// Format a byte count with a binary-scaled unit (1 KB = 1024 B).
///
/// Below 1 KB the exact count is shown. KB and MB get one decimal, larger
/// units two, since a tenth of a gigabyte is still a lot of disk.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    let decimals = if unit < 2 { 1 } else { 2 };
    format!("{value:.decimals$} {}", UNITS[unit])
}

/// Format a count with `,` between thousands groups.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
