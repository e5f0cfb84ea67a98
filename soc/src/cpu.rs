use bitflags::bitflags;

use crate::mmu::DataBus;

pub mod alu;
mod control_unit;
pub mod decoder;
pub mod register;

#[cfg(test)]
mod test;

bitflags! {
    /// Write strobes driven by the control unit.
    pub struct Control: u8 {
        const REG_WRITE = 0b01;
        const DATA_WRITE = 0b10;
    }
}

/// Everything the CPU drives during one cycle. All of it is combinational and only takes
/// effect once `Cpu::commit` and the data side apply it at the cycle boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Outputs {
    pub instruction_address: u8,
    pub data_address: u8,
    pub data_out: u8,
    pub control: Control,
    pub reg_select: register::Register,
    pub reg_data: u8,
    pub next_pc: u8,
}

impl Outputs {
    pub fn data_write(&self) -> bool { self.control.contains(Control::DATA_WRITE) }
}

/// The synchronous part of the CPU: the program counter and the register file.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Cpu {
    pc: u8,
    pub registers: register::File,
}

impl Cpu {
    pub fn new() -> Cpu { Cpu::default() }

    pub fn pc(&self) -> u8 { self.pc }

    pub fn set_pc(&mut self, pc: u8) { self.pc = pc; }

    /// Address presented to the instruction store this cycle.
    pub fn instruction_address(&self) -> u8 { self.pc }

    /// Decodes `instruction` and computes this cycle's outputs. Nothing is modified.
    pub fn evaluate(&self, instruction: u8, bus: &impl DataBus) -> Outputs {
        #[cfg(feature = "disas")]
        trace!(
            target: "disas",
            "{:02X}: {:02X}  {}",
            self.pc,
            instruction,
            jeff_disas::decode(instruction)
        );
        #[cfg(not(feature = "disas"))]
        trace!(target: "disas", "{:02X}: {:02X}", self.pc, instruction);

        let decoded = decoder::decode(instruction);
        control_unit::cycle(self, &decoded, bus)
    }

    /// Clock edge. Applies the register write and the new PC together.
    pub fn commit(&mut self, outputs: &Outputs) {
        if outputs.control.contains(Control::REG_WRITE) {
            self.registers.set(outputs.reg_select, outputs.reg_data);
        }
        self.pc = outputs.next_pc;
    }
}
