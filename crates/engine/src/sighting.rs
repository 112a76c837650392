use std::cmp::Ordering;
use std::fmt;

/// Derived lookup key of a sighting. Wide enough for any `i32 * i32` product.
pub type Signature = i64;

const SIGNATURE_DIVISOR: i64 = 10;

/// A single sensor reading. Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sighting {
    speed: i32,
    brightness: i32,
}

impl Sighting {
    pub fn new(speed: i32, brightness: i32) -> Self {
        Self { speed, brightness }
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn brightness(&self) -> i32 {
        self.brightness
    }

    /// Recomputed on every call; never cached on the sighting.
    pub fn signature(&self) -> Signature {
        signature(self.speed, self.brightness)
    }
}

impl fmt::Display for Sighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) => {}", self.speed, self.brightness, self.signature())
    }
}

/// `ceil(speed * brightness / 10)` in exact integer arithmetic.
///
/// Integer division truncates toward zero, so a positive remainder is the only
/// case that needs bumping up. Negative products with a remainder are already
/// rounded toward positive infinity by truncation.
pub fn signature(speed: i32, brightness: i32) -> Signature {
    let product = i64::from(speed) * i64::from(brightness);
    let quotient = product / SIGNATURE_DIVISOR;
    if product % SIGNATURE_DIVISOR > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// Total order used to sort sightings for binary search.
///
/// Signature ascending, ties broken by speed ascending. Sightings equal under
/// this order keep their relative position when sorted with a stable sort.
pub fn search_order(a: &Sighting, b: &Sighting) -> Ordering {
    a.signature()
        .cmp(&b.signature())
        .then_with(|| a.speed.cmp(&b.speed))
}
