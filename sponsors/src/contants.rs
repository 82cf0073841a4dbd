// Flat price per sponsored gift; the stored total is frozen at save time.
pub const AMOUNT_PER_GIFT: i64 = 25;
