//! PCA9635 register map and control bits.
//! Addresses and bit positions follow the NXP PCA9635 data sheet.

/// Number of PWM output channels
pub const CHANNELS: u8 = 16;

/// Broadcast address the software reset command is sent to
pub const SWRST_ADDRESS: u8 = 0x03;
/// Software reset command, sent as a single two byte write
pub const SWRST_COMMAND: [u8; 2] = [0xA5, 0x5A];

/// Bus free time between a STOP and START condition, rounded up from 4.7us
pub const BUS_FREE_TIME_US: u8 = 5;

/// LEDOUT pattern with every channel (2 bits each) set to `0b10`:
/// "LED driver individual brightness controlled through its PWMx register"
pub const LEDOUT_INDIVIDUAL: u8 = 0xAA;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Mode register 1: sleep and all-call response
    Mode1 = 0x00,
    /// Mode register 2: output driver, inversion, change timing and disabled state
    Mode2 = 0x01,
    /// PWM register of channel 0. Channel N lives at `Pwm0 + N`
    Pwm0 = 0x02,
    /// LED output state, channels 0..=3
    LedOut0 = 0x14,
    /// LED output state, channels 4..=7
    LedOut1 = 0x15,
    /// LED output state, channels 8..=11
    LedOut2 = 0x16,
    /// LED output state, channels 12..=15
    LedOut3 = 0x17,
}

impl Register {
    /// All four LEDOUT registers, in address order
    pub const LEDOUT: [Register; 4] = [
        Register::LedOut0,
        Register::LedOut1,
        Register::LedOut2,
        Register::LedOut3,
    ];

    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Returns the PWM register address of `channel`, or `None` if the chip has no such channel
pub const fn channel_register(channel: u8) -> Option<u8> {
    if channel < CHANNELS {
        Some(Register::Pwm0.addr() + channel)
    } else {
        None
    }
}

/// MODE1 bits
pub mod mode1 {
    /// Low power mode, oscillator off
    pub const SLEEP: u8 = 0x10;
    /// Respond to the LED all-call I2C address
    pub const ALLCALL: u8 = 0x01;
}

/// MODE2 configuration value.
///
/// Composed from the OUTNE, OUTDRV, OCH and INVRT fields, e.g.
/// `Mode2::OUTNE_HIZ_WHEN_DISABLED | Mode2::OUTDRV_OPEN_DRAIN | Mode2::OCH_SET_ON_ACK`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mode2(u8);

impl Mode2 {
    /// Output logic state inverted. Use when no external driver is present
    pub const INVRT: Mode2 = Mode2(0x10);
    /// Outputs change on STOP
    pub const OCH_SET_ON_STOP: Mode2 = Mode2(0x00);
    /// Outputs change on ACK
    pub const OCH_SET_ON_ACK: Mode2 = Mode2(0x08);
    pub const OUTDRV_OPEN_DRAIN: Mode2 = Mode2(0x00);
    pub const OUTDRV_TOTEM_POLE: Mode2 = Mode2(0x04);
    /// LEDn = 0 when outputs are disabled
    pub const OUTNE_LOW_WHEN_DISABLED: Mode2 = Mode2(0x00);
    /// LEDn = high-impedance when OUTDRV = 0, 1 when OUTDRV = 1
    pub const OUTNE_HIGH_WHEN_DISABLED: Mode2 = Mode2(0x01);
    /// LEDn = high-impedance
    pub const OUTNE_HIZ_WHEN_DISABLED: Mode2 = Mode2(0x02);

    /// Configuration written on reset and shutdown:
    /// high-impedance when disabled, open-drain, update on ACK
    pub const SAFE: Mode2 = Mode2(
        Self::OUTNE_HIZ_WHEN_DISABLED.0 | Self::OUTDRV_OPEN_DRAIN.0 | Self::OCH_SET_ON_ACK.0,
    );

    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl core::ops::BitOr for Mode2 {
    type Output = Mode2;

    fn bitor(self, rhs: Mode2) -> Mode2 {
        Mode2(self.0 | rhs.0)
    }
}

impl From<Mode2> for u8 {
    fn from(value: Mode2) -> Self {
        value.0
    }
}
