//! Minimal TM1637 driver for the 4-digit display module.
//!
//! Two-wire, bit-banged: CLK is an output, DIO is open-drain so the chip
//! can pull it low to acknowledge each byte. Only what
//! [`SegmentDisplay`] needs is implemented (no key scan).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use rectrigger::{Error, Frame, SegmentDisplay};

/// Data command: write, auto-increment address.
const CMD_DATA_AUTO: u8 = 0x40;
/// Address command for cell 0.
const CMD_ADDR_0: u8 = 0xC0;
/// Display control: on, OR'd with brightness 0..=7.
const CMD_DISPLAY_ON: u8 = 0x88;

/// Half-period of the bit clock (µs).
const BIT_DELAY_US: u32 = 5;

pub struct Tm1637<CLK, DIO, DELAY> {
    clk: CLK,
    dio: DIO,
    delay: DELAY,
    brightness: u8,
}

impl<CLK, DIO, DELAY> Tm1637<CLK, DIO, DELAY>
where
    CLK: OutputPin,
    DIO: OutputPin + InputPin,
    DELAY: DelayNs,
{
    pub fn new(clk: CLK, dio: DIO, delay: DELAY) -> Self {
        Self {
            clk,
            dio,
            delay,
            brightness: 7,
        }
    }

    fn pause(&mut self) {
        self.delay.delay_us(BIT_DELAY_US);
    }

    fn start(&mut self) -> Result<(), Error> {
        self.dio.set_high().map_err(|_| Error::Display)?;
        self.clk.set_high().map_err(|_| Error::Display)?;
        self.pause();
        self.dio.set_low().map_err(|_| Error::Display)?;
        self.pause();
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Error> {
        self.clk.set_low().map_err(|_| Error::Display)?;
        self.dio.set_low().map_err(|_| Error::Display)?;
        self.pause();
        self.clk.set_high().map_err(|_| Error::Display)?;
        self.pause();
        self.dio.set_high().map_err(|_| Error::Display)?;
        self.pause();
        Ok(())
    }

    /// Shift one byte out LSB first and check the chip's ACK.
    fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        for bit in 0..8 {
            self.clk.set_low().map_err(|_| Error::Display)?;
            if byte & (1 << bit) != 0 {
                self.dio.set_high().map_err(|_| Error::Display)?;
            } else {
                self.dio.set_low().map_err(|_| Error::Display)?;
            }
            self.pause();
            self.clk.set_high().map_err(|_| Error::Display)?;
            self.pause();
        }

        // Release DIO; the chip pulls it low on the ninth clock.
        self.clk.set_low().map_err(|_| Error::Display)?;
        self.dio.set_high().map_err(|_| Error::Display)?;
        self.pause();
        self.clk.set_high().map_err(|_| Error::Display)?;
        self.pause();
        let ack = self.dio.is_low().map_err(|_| Error::Display)?;
        self.clk.set_low().map_err(|_| Error::Display)?;
        self.pause();

        if ack {
            Ok(())
        } else {
            Err(Error::Display)
        }
    }

    fn command(&mut self, cmd: u8) -> Result<(), Error> {
        self.start()?;
        let sent = self.write_byte(cmd);
        self.stop()?;
        sent
    }
}

impl<CLK, DIO, DELAY> SegmentDisplay for Tm1637<CLK, DIO, DELAY>
where
    CLK: OutputPin,
    DIO: OutputPin + InputPin,
    DELAY: DelayNs,
{
    type Error = Error;

    fn set_brightness(&mut self, level: u8) -> Result<(), Error> {
        self.brightness = level.min(7);
        self.command(CMD_DISPLAY_ON | self.brightness)
    }

    fn write_segments(&mut self, frame: &Frame) -> Result<(), Error> {
        self.command(CMD_DATA_AUTO)?;

        self.start()?;
        let sent = core::iter::once(CMD_ADDR_0)
            .chain(frame.iter().copied())
            .try_for_each(|b| self.write_byte(b));
        self.stop()?;
        sent?;

        self.command(CMD_DISPLAY_ON | self.brightness)
    }
}
