//! Static delivery-zone reference table
//!
//! One entry per Nigerian state. Shipping cost is whole naira, delivery days
//! are an inclusive (min, max) window from the day the order is placed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
    pub shipping_cost: u64,
    pub delivery_days: (u32, u32),
}

impl Region {
    pub fn min_days(&self) -> u32 {
        self.delivery_days.0
    }
    pub fn max_days(&self) -> u32 {
        self.delivery_days.1
    }
}

pub const REGIONS: &[Region] = &[
    Region { code: "AB", name: "Abia", shipping_cost: 2500, delivery_days: (3, 5) },
    Region { code: "AD", name: "Adamawa", shipping_cost: 3500, delivery_days: (5, 7) },
    Region { code: "AK", name: "Akwa Ibom", shipping_cost: 3000, delivery_days: (4, 6) },
    Region { code: "AN", name: "Anambra", shipping_cost: 2500, delivery_days: (3, 5) },
    Region { code: "BA", name: "Bauchi", shipping_cost: 3500, delivery_days: (5, 7) },
    Region { code: "BY", name: "Bayelsa", shipping_cost: 3000, delivery_days: (4, 6) },
    Region { code: "BE", name: "Benue", shipping_cost: 3000, delivery_days: (4, 6) },
    Region { code: "BO", name: "Borno", shipping_cost: 4000, delivery_days: (6, 8) },
    Region { code: "CR", name: "Cross River", shipping_cost: 3000, delivery_days: (4, 6) },
    Region { code: "DE", name: "Delta", shipping_cost: 2500, delivery_days: (3, 5) },
    Region { code: "EB", name: "Ebonyi", shipping_cost: 2500, delivery_days: (3, 5) },
    Region { code: "ED", name: "Edo", shipping_cost: 2500, delivery_days: (3, 5) },
    Region { code: "EK", name: "Ekiti", shipping_cost: 2000, delivery_days: (2, 4) },
    Region { code: "EN", name: "Enugu", shipping_cost: 2500, delivery_days: (3, 5) },
    Region { code: "FC", name: "FCT - Abuja", shipping_cost: 2000, delivery_days: (2, 4) },
    Region { code: "GO", name: "Gombe", shipping_cost: 3500, delivery_days: (5, 7) },
    Region { code: "IM", name: "Imo", shipping_cost: 2500, delivery_days: (3, 5) },
    Region { code: "JI", name: "Jigawa", shipping_cost: 3500, delivery_days: (5, 7) },
    Region { code: "KD", name: "Kaduna", shipping_cost: 3000, delivery_days: (4, 6) },
    Region { code: "KN", name: "Kano", shipping_cost: 3500, delivery_days: (5, 7) },
    Region { code: "KT", name: "Katsina", shipping_cost: 3500, delivery_days: (5, 7) },
    Region { code: "KE", name: "Kebbi", shipping_cost: 3500, delivery_days: (5, 7) },
    Region { code: "KO", name: "Kogi", shipping_cost: 2500, delivery_days: (3, 5) },
    Region { code: "KW", name: "Kwara", shipping_cost: 2500, delivery_days: (3, 5) },
    Region { code: "LA", name: "Lagos", shipping_cost: 1500, delivery_days: (1, 3) },
    Region { code: "NA", name: "Nasarawa", shipping_cost: 2500, delivery_days: (3, 5) },
    Region { code: "NI", name: "Niger", shipping_cost: 3000, delivery_days: (4, 6) },
    Region { code: "OG", name: "Ogun", shipping_cost: 2000, delivery_days: (2, 4) },
    Region { code: "ON", name: "Ondo", shipping_cost: 2500, delivery_days: (3, 5) },
    Region { code: "OS", name: "Osun", shipping_cost: 2000, delivery_days: (2, 4) },
    Region { code: "OY", name: "Oyo", shipping_cost: 2000, delivery_days: (2, 4) },
    Region { code: "PL", name: "Plateau", shipping_cost: 3000, delivery_days: (4, 6) },
    Region { code: "RI", name: "Rivers", shipping_cost: 3000, delivery_days: (4, 6) },
    Region { code: "SO", name: "Sokoto", shipping_cost: 3500, delivery_days: (5, 7) },
    Region { code: "TA", name: "Taraba", shipping_cost: 3500, delivery_days: (5, 7) },
    Region { code: "YO", name: "Yobe", shipping_cost: 4000, delivery_days: (6, 8) },
    Region { code: "ZA", name: "Zamfara", shipping_cost: 3500, delivery_days: (5, 7) },
];

/// Exact-code lookup. Unknown codes mean "the shopper hasn't picked a state
/// yet", never free shipping.
pub fn lookup(code: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.code == code)
}

pub fn is_known(code: &str) -> bool {
    lookup(code).is_some()
}
