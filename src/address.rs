/// Address used when the caller does not configure one
pub const DEFAULT_ADDRESS: u8 = 0x40;

/// 7-bit I2C address of a PCA9635, as set by its A0..A6 pins
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(u8);

impl Address {
    /// Returns `None` for values that do not fit in 7 bits
    pub const fn new(address: u8) -> Option<Self> {
        if address <= 0x7F {
            Some(Self(address))
        } else {
            None
        }
    }

    /// Composes the address from the physical address pins.
    /// `pins[n]` is the level of pin An, so `pins[0]` is the least significant bit.
    pub fn from_pins(pins: [bool; 7]) -> Self {
        let address = pins
            .iter()
            .enumerate()
            .fold(0u8, |address, (bit, &pin)| address | (u8::from(pin) << bit));
        Self(address)
    }
}

impl Default for Address {
    fn default() -> Self {
        Self(DEFAULT_ADDRESS)
    }
}

impl From<Address> for u8 {
    fn from(value: Address) -> Self {
        value.0
    }
}
