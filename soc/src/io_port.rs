use crate::mmu::{Address, Location, MemoryMapped};
use crate::util::led_pattern;

/// The memory-mapped port at data address 0xFF: an 8-bit output latch driving the LEDs and an
/// 8-bit input sampled from the buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct IoPort {
    leds: u8,
    buttons: u8,
}

impl IoPort {
    pub fn new() -> IoPort { IoPort::default() }

    pub fn leds(&self) -> u8 { self.leds }

    pub fn buttons(&self) -> u8 { self.buttons }

    /// Driven by the environment. Visible to the very next read of 0xFF.
    pub fn set_buttons(&mut self, buttons: u8) { self.buttons = buttons; }
}

impl MemoryMapped for IoPort {
    fn read(&self, address: Address) -> Option<u8> {
        match address {
            Address(Location::IoPort, _) => {
                trace!(target: "io", "Buttons read as {}", led_pattern(self.buttons));
                Some(self.buttons)
            }
            _ => None,
        }
    }

    fn write(&mut self, address: Address, value: u8) -> Option<()> {
        match address {
            Address(Location::IoPort, _) => {
                if value != self.leds {
                    debug!(
                        target: "io",
                        "LEDs {}=>{}",
                        led_pattern(self.leds),
                        led_pattern(value)
                    );
                }
                self.leds = value;
                Some(())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_answers_at_port_address() {
        let mut port = IoPort::new();
        port.set_buttons(0x3C);
        assert_eq!(port.read(Address::from_raw(0xFF)), Some(0x3C));
        assert_eq!(port.read(Address::from_raw(0xFE)), None);
        assert_eq!(port.write(Address::from_raw(0x00), 0x12), None);
        assert_eq!(port.leds(), 0);
        assert_eq!(port.write(Address::from_raw(0xFF), 0x12), Some(()));
        assert_eq!(port.leds(), 0x12);
    }

    #[test]
    fn test_latch_and_input_are_separate() {
        let mut port = IoPort::new();
        port.write(Address::from_raw(0xFF), 0xAA).unwrap();
        assert_eq!(port.read(Address::from_raw(0xFF)), Some(0));
        assert_eq!(port.leds(), 0xAA);
    }
}
