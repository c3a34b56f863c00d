//! Order numbers and currency display helpers

use uuid7::uuid7;

/// Construct a unique order number. uuid7 is timestamp-ordered with a random
/// tail, so order numbers sort by creation time; the `DK-` retail prefix is
/// what shows on receipts and support tickets.
pub fn new_order_id() -> String {
    format!("DK-{}", uuid7()).to_uppercase()
}

/// Whole-naira display with thousands grouping, e.g. `₦42,500`.
pub fn format_naira(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    out.push('₦');
    for (i, ch) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_ids_are_prefixed_and_unique() {
        let a = new_order_id();
        let b = new_order_id();

        assert!(a.starts_with("DK-"));
        assert_eq!(a, a.to_uppercase());
        assert_ne!(a, b);
    }

    #[test]
    fn naira_grouping() {
        assert_eq!(format_naira(0), "₦0");
        assert_eq!(format_naira(950), "₦950");
        assert_eq!(format_naira(42_500), "₦42,500");
        assert_eq!(format_naira(1_234_567), "₦1,234,567");
    }
}
