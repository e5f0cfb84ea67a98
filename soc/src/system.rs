use crate::cpu;
use crate::error::Result;
use crate::io_port::IoPort;
use crate::mmu::{self, DataBus, MemoryMapped};

/// The harness: CPU, instruction store, data store and the I/O port at 0xFF. The whole machine
/// state is `(pc, registers, data store, leds)`; every call to `execute_cycle` advances it by
/// exactly one instruction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct System {
    cpu: cpu::Cpu,
    rom: mmu::Rom,
    memory: mmu::Memory,
    io_port: IoPort,
    cycles: u64,
}

/// Read-only view of the data side used for the CPU's combinational reads.
struct DataSpace<'a> {
    io_port: &'a IoPort,
    memory: &'a mmu::Memory,
}

impl<'a> DataBus for DataSpace<'a> {
    fn read(&self, raw_address: u8) -> u8 {
        let address = mmu::Address::from_raw(raw_address);
        let modules: [&dyn MemoryMapped; 2] = [self.io_port, self.memory];
        // The data store answers every address, so the fallback is never taken.
        modules.iter().find_map(|module| module.read(address)).unwrap_or(0)
    }
}

impl System {
    /// Builds the harness with `program` loaded at instruction address 0.
    pub fn new(program: &[u8]) -> Result<System> {
        Ok(System {
            cpu: cpu::Cpu::new(),
            rom: mmu::Rom::from_program(program)?,
            memory: mmu::Memory::new(),
            io_port: IoPort::new(),
            cycles: 0,
        })
    }

    pub fn cpu(&self) -> &cpu::Cpu { &self.cpu }

    pub fn cpu_mut(&mut self) -> &mut cpu::Cpu { &mut self.cpu }

    pub fn memory(&self) -> &mmu::Memory { &self.memory }

    pub fn memory_mut(&mut self) -> &mut mmu::Memory { &mut self.memory }

    pub fn rom(&self) -> &mmu::Rom { &self.rom }

    /// Checks the invariants a deserialized machine cannot guarantee on its own.
    pub fn validate(&self) -> Result<()> {
        self.rom.validate()?;
        self.memory.validate()
    }

    pub fn leds(&self) -> u8 { self.io_port.leds() }

    pub fn buttons(&self) -> u8 { self.io_port.buttons() }

    pub fn set_buttons(&mut self, buttons: u8) { self.io_port.set_buttons(buttons); }

    /// Number of cycles committed so far.
    pub fn cycles(&self) -> u64 { self.cycles }

    /// Computes the combinational outputs of the current cycle without committing them.
    pub fn peek_cycle(&self) -> cpu::Outputs {
        let instruction = self.rom.read(self.cpu.instruction_address());
        let data_space = DataSpace { io_port: &self.io_port, memory: &self.memory };
        self.cpu.evaluate(instruction, &data_space)
    }

    /// Advances the machine by one clock cycle. All outputs are computed from the pre-cycle
    /// state first, then the register file, PC, data store and LED latch update together.
    pub fn execute_cycle(&mut self) -> cpu::Outputs {
        let outputs = self.peek_cycle();
        if outputs.data_write() {
            self.write_request(outputs.data_address, outputs.data_out);
        }
        self.cpu.commit(&outputs);
        self.cycles += 1;
        outputs
    }

    /// Every device answering at the address takes the write.
    fn write_request(&mut self, raw_address: u8, value: u8) {
        trace!(target: "mem", "[{:02X}] <= {:02X}", raw_address, value);
        let address = mmu::Address::from_raw(raw_address);
        let mut modules: [&mut dyn MemoryMapped; 2] = [&mut self.io_port, &mut self.memory];
        for module in modules.iter_mut() {
            module.write(address, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::register::Register;
    use crate::error;

    #[test]
    fn test_rejects_oversized_program() {
        match System::new(&[0; 257]) {
            Err(error::Type::ProgramTooLarge(257)) => {}
            other => panic!("Expected a capacity error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_rom_holds_padded_program() {
        let system = System::new(&[0xA7, 0xE1]).unwrap();
        assert_eq!(system.rom().bytes().len(), 256);
        assert_eq!(&system.rom().bytes()[..3], &[0xA7, 0xE1, 0x00]);
        assert!(system.validate().is_ok());
    }

    #[test]
    fn test_peek_does_not_commit() {
        // LI 0x7
        let system = System::new(&[0xA7]).unwrap();
        let outputs = system.peek_cycle();
        assert_eq!(outputs.reg_data, 0x07);
        assert_eq!(system.cpu().registers.get(Register::R0), 0);
        assert_eq!(system.cpu().pc(), 0);
        assert_eq!(system.cycles(), 0);
    }

    #[test]
    fn test_empty_program_runs_defaults() {
        // Opcode 0 with zero fields is SL R0, R0: R0 stays 0, PC walks forward.
        let mut system = System::new(&[]).unwrap();
        for _ in 0..300 {
            system.execute_cycle();
        }
        assert_eq!(system.cpu().pc(), (300 % 256) as u8);
        assert_eq!(system.cycles(), 300);
    }
}
