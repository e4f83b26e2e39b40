/// A bounded resource pool such as health or energy.
///
/// `current` always stays within `0..=maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` to `maximum`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Creates a meter filled to `maximum`.
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// A meter with no capacity, for actors without the resource.
    pub const fn empty() -> Self {
        Self {
            current: 0,
            maximum: 0,
        }
    }

    #[inline]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.current >= self.maximum
    }

    #[inline]
    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Adds `amount`, clamped to the maximum.
    pub fn restore(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.maximum);
    }

    /// Removes `amount`, clamped to zero.
    pub fn drain(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Removes exactly `amount`.
    ///
    /// # Panics
    ///
    /// Panics if `amount` exceeds the current value. Callers are expected to
    /// have checked availability first.
    pub fn expend(&mut self, amount: u32) {
        assert!(
            amount <= self.current,
            "cannot expend {amount} from a meter holding {}",
            self.current
        );
        self.current -= amount;
    }

    pub fn set(&mut self, value: u32) {
        self.current = value.min(self.maximum);
    }
}
