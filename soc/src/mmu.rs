use crate::error::{self, Result};

/// Both stores span the full 8-bit address space.
pub const STORE_SIZE: usize = 256;
/// Data address reserved for the I/O port.
pub const IO_PORT_ADDRESS: u8 = 0xFF;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Location {
    // 00 to FE. Plain data RAM.
    Ram,
    // FF. Buttons on read, LEDs on write.
    IoPort,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Address(pub Location, pub u8);

impl Address {
    pub fn from_raw(raw: u8) -> Address {
        match raw {
            IO_PORT_ADDRESS => Address(Location::IoPort, raw),
            _ => Address(Location::Ram, raw),
        }
    }
}

fn check_store_size(store: &'static str, mem: &[u8]) -> Result<()> {
    if mem.len() == STORE_SIZE {
        Ok(())
    } else {
        Err(error::Type::StoreSize { store, len: mem.len() })
    }
}

/// A device sitting on the data bus. `None` means the device does not answer at that address.
pub trait MemoryMapped {
    fn read(&self, address: Address) -> Option<u8>;
    fn write(&mut self, address: Address, value: u8) -> Option<()>;
}

/// The CPU's view of the data bus read port.
pub trait DataBus {
    fn read(&self, address: u8) -> u8;
}

/// The 256-byte data store.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize), serde(transparent))]
pub struct Memory {
    #[cfg_attr(feature = "serialize", serde(with = "serde_bytes"))]
    mem: Vec<u8>,
}

impl MemoryMapped for Memory {
    fn read(&self, address: Address) -> Option<u8> {
        let Address(location, raw) = address;
        match location {
            Location::Ram => Some(self.mem[raw as usize]),
            // The port shadows the backing byte on reads.
            Location::IoPort => None,
        }
    }

    fn write(&mut self, address: Address, value: u8) -> Option<()> {
        // Writes to the port land in the backing byte as well.
        let Address(_, raw) = address;
        self.mem[raw as usize] = value;
        Some(())
    }
}

impl Default for Memory {
    fn default() -> Memory { Memory::new() }
}

impl Memory {
    pub fn new() -> Memory { Memory { mem: vec![0; STORE_SIZE] } }

    /// Reads the backing byte, bypassing the I/O port.
    pub fn raw_read(&self, raw: u8) -> u8 { self.mem[raw as usize] }

    pub fn store(&mut self, raw: u8, value: u8) { self.mem[raw as usize] = value; }

    /// Checks a restored store still covers every address.
    pub fn validate(&self) -> Result<()> { check_store_size("data", &self.mem) }
}

impl core::fmt::Debug for Memory {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for (row, chunk) in self.mem.chunks(16).enumerate() {
            write!(f, "{:02X}:", row * 16)?;
            for byte in chunk {
                write!(f, " {:02X}", byte)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The instruction store. Filled once from the program and never written by the CPU.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize), serde(transparent))]
pub struct Rom {
    #[cfg_attr(feature = "serialize", serde(with = "serde_bytes"))]
    mem: Vec<u8>,
}

impl Rom {
    /// Loads `program` at address 0. Addresses past its end read as 0.
    pub fn from_program(program: &[u8]) -> Result<Rom> {
        if program.len() > STORE_SIZE {
            return Err(error::Type::ProgramTooLarge(program.len()));
        }
        let mut mem = program.to_vec();
        mem.resize(STORE_SIZE, 0);
        Ok(Rom { mem })
    }

    /// Combinational read port.
    pub fn read(&self, address: u8) -> u8 { self.mem[address as usize] }

    /// The whole store, including the zero padding.
    pub fn bytes(&self) -> &[u8] { &self.mem }

    pub fn validate(&self) -> Result<()> { check_store_size("instruction", &self.mem) }
}
