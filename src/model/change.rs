/// Descending order is what makes the greedy decomposition minimal: the
/// US set {25, 10, 5, 1} is canonical, so always taking the largest coin
/// that fits never forces a worse total.
pub const DENOMINATIONS: [i64; 4] = [25, 10, 5, 1];

pub fn dollars_to_cents(dollars: f64) -> i64 {
    // Round to nearest, not truncate: 4.2 * 100 sits just below 420 in
    // binary floating point and a plain cast would yield 419.
    (dollars * 100.0).round() as i64
}

#[derive(Debug, PartialEq, Eq)]
pub struct Change {
    pub quarters: i64,
    pub dimes: i64,
    pub nickels: i64,
    pub pennies: i64,
}

impl Change {
    pub fn for_cents(cents: i64) -> Change {
        let mut remaining = cents;
        let mut counts = [0i64; 4];

        for (count, denomination) in counts.iter_mut().zip(DENOMINATIONS) {
            *count = remaining / denomination;
            remaining %= denomination;
        }

        Change {
            quarters: counts[0],
            dimes: counts[1],
            nickels: counts[2],
            pennies: counts[3],
        }
    }

    pub fn total(&self) -> i64 {
        self.quarters + self.dimes + self.nickels + self.pennies
    }
}
