//! # PCA9635 library
//! A rust-embedded driver for the NXP PCA9635 16-channel I2C LED controller.
//!
//! Each of the 16 outputs has its own 8-bit PWM register. The driver writes
//! those registers one at a time, resets the chip into a known state and
//! reconfigures its output drivers.
//!
//! The I2C bus is the caller's: when several devices share one physical bus,
//! pass a bus-sharing proxy and serialize access outside of the driver.
//! Bulk operations such as [`Pca9635::set_all`] are a sequence of independent
//! transactions, other bus users may interleave with them.

#![no_std]
#![deny(warnings)]

mod address;
pub mod registers;

pub use address::{Address, DEFAULT_ADDRESS};
pub use registers::{Mode2, Register};

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::blocking::i2c::{Write, WriteRead};
use registers::{
    channel_register, mode1, BUS_FREE_TIME_US, CHANNELS, LEDOUT_INDIVIDUAL, SWRST_ADDRESS,
    SWRST_COMMAND,
};

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<I> {
    /// I2C bus error
    I2C(I),
    /// PWM level does not fit in 8 bits
    InvalidLevel,
    /// Channel index out of bounds (0..=15)
    Channel,
}

/// Returns true if `level` is a valid 8-bit PWM value (0..=255)
pub fn validate_level<L: TryInto<u8>>(level: L) -> bool {
    pwm_level(level).is_some()
}

fn pwm_level<L: TryInto<u8>>(level: L) -> Option<u8> {
    level.try_into().ok()
}

pub struct Pca9635<I2C> {
    /// `embedded-hal` compatible I2C instance
    interface: I2C,
    /// Device address
    address: Address,
}

impl<I2C, S> Pca9635<I2C>
where
    I2C: Write<u8, Error = S> + WriteRead<u8, Error = S>,
{
    /// Bind a PCA9635 at `address` without touching the hardware
    /// * `address` - Must match the physical A0..A6 pins of the device, this is not verified
    pub fn new(i2c: I2C, address: Address) -> Self {
        Self {
            interface: i2c,
            address,
        }
    }

    /// Bind a PCA9635 at [`DEFAULT_ADDRESS`]
    pub fn new_default(i2c: I2C) -> Self {
        Self::new(i2c, Address::default())
    }

    /// Bind a PCA9635 and immediately run [`Pca9635::reset`]
    ///
    /// On failure the bus is dropped together with the half built driver. Pass a
    /// bus-sharing proxy (or build with [`Pca9635::new`] and call `reset` yourself)
    /// if the bus must survive a failed reset.
    pub fn new_with_reset<DEL: DelayUs<u8>>(
        i2c: I2C,
        address: Address,
        delay: &mut DEL,
    ) -> Result<Self, Error<S>> {
        let mut pca9635 = Self::new(i2c, address);
        pca9635.reset(delay)?;
        Ok(pca9635)
    }

    /// Release underlying resources
    pub fn release(self) -> I2C {
        self.interface
    }

    /// Borrow the I2C bus
    pub fn i2c(&mut self) -> &mut I2C {
        &mut self.interface
    }

    pub fn address(&self) -> Address {
        self.address
    }

    fn write(&mut self, register: u8, value: u8) -> Result<(), Error<S>> {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "pca9635 {=u8:#04x}: reg {=u8:#04x} <- {=u8:#04x}",
            u8::from(self.address),
            register,
            value
        );
        self.interface
            .write(self.address.into(), &[register, value])
            .map_err(Error::I2C)
    }

    fn read(&mut self, register: u8) -> Result<u8, Error<S>> {
        let mut buff = [0u8; 1];
        self.interface
            .write_read(self.address.into(), &[register], &mut buff)
            .map_err(Error::I2C)?;
        Ok(buff[0])
    }

    fn level<L: TryInto<u8>>(level: L) -> Result<u8, Error<S>> {
        pwm_level(level).ok_or_else(|| {
            #[cfg(feature = "defmt")]
            defmt::warn!("pca9635: rejected PWM level outside 0..=255");
            Error::InvalidLevel
        })
    }

    fn register(channel: u8) -> Result<u8, Error<S>> {
        channel_register(channel).ok_or_else(|| {
            #[cfg(feature = "defmt")]
            defmt::warn!("pca9635: rejected channel {=u8}", channel);
            Error::Channel
        })
    }

    /// Software reset.
    /// Broadcasts the reset command to every PCA9635 on the bus, waits the bus free time,
    /// then enables all-call, puts the outputs into high-impedance/open-drain/update-on-ACK mode,
    /// switches every channel to individual PWM control and sets all channels to 0.
    pub fn reset<DEL: DelayUs<u8>>(&mut self, delay: &mut DEL) -> Result<(), Error<S>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("pca9635 {=u8:#04x}: software reset", u8::from(self.address));
        self.interface
            .write(SWRST_ADDRESS, &SWRST_COMMAND)
            .map_err(Error::I2C)?;
        // STOP to START bus free time (4.7us)
        delay.delay_us(BUS_FREE_TIME_US);

        self.write(Register::Mode1.addr(), mode1::ALLCALL)?;
        self.write(Register::Mode2.addr(), Mode2::SAFE.bits())?;
        for ledout in Register::LEDOUT {
            self.write(ledout.addr(), LEDOUT_INDIVIDUAL)?;
        }

        self.set_all(0)
    }

    /// Ensure led output drivers are in high impedance mode and all channels are off.
    /// Unlike [`Pca9635::reset`] nothing is broadcast and LEDOUT is left alone.
    pub fn shutdown(&mut self) -> Result<(), Error<S>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("pca9635 {=u8:#04x}: shutdown", u8::from(self.address));
        self.write(Register::Mode2.addr(), Mode2::SAFE.bits())?;
        self.set_all(0)
    }

    /// Put the oscillator to sleep, or wake it up. All-call response stays enabled
    pub fn set_sleep(&mut self, sleep: bool) -> Result<(), Error<S>> {
        let value = if sleep {
            mode1::ALLCALL | mode1::SLEEP
        } else {
            mode1::ALLCALL
        };
        self.write(Register::Mode1.addr(), value)
    }

    /// Write a custom MODE2 configuration, e.g. totem-pole outputs for directly driven LEDs
    pub fn set_output_mode(&mut self, mode: Mode2) -> Result<(), Error<S>> {
        self.write(Register::Mode2.addr(), mode.into())
    }

    /// Set the PWM level of `channel`.
    /// The level is checked before anything is sent: values outside 0..=255 fail with
    /// [`Error::InvalidLevel`], channels outside 0..=15 with [`Error::Channel`].
    pub fn set_channel<L: TryInto<u8>>(&mut self, channel: u8, level: L) -> Result<(), Error<S>> {
        let level = Self::level(level)?;
        let register = Self::register(channel)?;
        self.write(register, level)
    }

    /// Read back the PWM level currently held by `channel`
    pub fn channel(&mut self, channel: u8) -> Result<u8, Error<S>> {
        let register = Self::register(channel)?;
        self.read(register)
    }

    /// Turn a channel off
    pub fn channel_off(&mut self, channel: u8) -> Result<(), Error<S>> {
        let register = Self::register(channel)?;
        self.write(register, 0x00)
    }

    /// Set every channel to `level`, one transaction per channel in ascending order.
    /// Not atomic: a bus error part way leaves the lower channels at the new level.
    pub fn set_all<L: TryInto<u8>>(&mut self, level: L) -> Result<(), Error<S>> {
        let level = Self::level(level)?;
        for channel in 0..CHANNELS {
            self.write(Register::Pwm0.addr() + channel, level)?;
        }
        Ok(())
    }
}
