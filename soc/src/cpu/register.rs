use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// The four general purpose registers. Each holds 8 bits.
/// None of them is hard-wired; R0 is only special in that LI and LUI always target it.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize), serde(transparent))]
pub struct File([u8; Register::NumRegisters as usize]);

/// The logical list of registers, in encoding order.
#[derive(FromPrimitive, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Register {
    R0,
    R1,
    R2,
    R3,
    NumRegisters,
}

impl Register {
    /// Maps a 2-bit register field to its register.
    pub fn from_field(field: u8) -> Register {
        debug_assert_le!(field, 0b11);
        Register::from_u8(field & 0b11).unwrap_or(Register::R0)
    }

    pub fn all() -> impl Iterator<Item = Register> {
        (0..Register::NumRegisters as u8).map(Register::from_field)
    }
}

impl File {
    pub fn new(values: [u8; Register::NumRegisters as usize]) -> File { File(values) }

    /// Combinational read port. Both CPU read ports go through here.
    pub fn get(&self, register: Register) -> u8 {
        debug_assert_lt!(register as usize, Register::NumRegisters as usize);
        self.0[register as usize]
    }

    /// The single write port.
    pub fn set(&mut self, register: Register, value: u8) {
        debug_assert_lt!(register as usize, Register::NumRegisters as usize);
        self.0[register as usize] = value;
    }
}

impl core::fmt::Debug for File {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        writeln!(f)?;
        for register in Register::all() {
            writeln!(f, "{:>4}: {:02X}", format!("{:?}", register), self.get(register))?;
        }
        Ok(())
    }
}
