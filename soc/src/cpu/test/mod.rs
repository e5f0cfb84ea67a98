use crate::cpu::register::Register;
use crate::mmu;
use crate::system::System;


/// Fluent builder around a `System` for single-instruction tests.
pub struct TestContext {
    system: System,
    cycles: u64,
}

pub fn with_default() -> TestContext {
    TestContext { system: System::new(&[]).unwrap(), cycles: 0 }
}

impl TestContext {
    pub fn set_reg(mut self, register: Register, value: u8) -> TestContext {
        self.system.cpu_mut().registers.set(register, value);
        self
    }

    pub fn set_pc(mut self, pc: u8) -> TestContext {
        self.system.cpu_mut().set_pc(pc);
        self
    }

    pub fn set_mem(mut self, address: u8, value: u8) -> TestContext {
        self.system.memory_mut().store(address, value);
        self
    }

    pub fn set_buttons(mut self, buttons: u8) -> TestContext {
        self.system.set_buttons(buttons);
        self
    }

    /// Places `instructions` at the current PC and executes exactly that many cycles.
    pub fn execute_instructions(self, instructions: &[u8]) -> TestContext {
        let count = instructions.len() as u64;
        self.run_program_at_pc(instructions, count)
    }

    /// Places `program` at the current PC and runs `cycles` cycles, jumps included.
    pub fn run_program_at_pc(mut self, program: &[u8], cycles: u64) -> TestContext {
        let pc = self.system.cpu().pc();
        let mut image = vec![0; mmu::STORE_SIZE];
        for (i, &byte) in program.iter().enumerate() {
            image[(pc as usize + i) % mmu::STORE_SIZE] = byte;
        }
        let mut system = System::new(&image).unwrap();
        *system.cpu_mut() = *self.system.cpu();
        *system.memory_mut() = self.system.memory().clone();
        system.set_buttons(self.system.buttons());
        for _ in 0..cycles {
            system.execute_cycle();
        }
        self.cycles += cycles;
        self.system = system;
        self
    }

    pub fn assert_reg_eq(self, register: Register, value: u8) -> TestContext {
        assert_eq!(
            self.system.cpu().registers.get(register),
            value,
            "{:?} mismatch. Registers: {:?}",
            register,
            self.system.cpu().registers
        );
        self
    }

    pub fn assert_pc_eq(self, pc: u8) -> TestContext {
        assert_eq!(self.system.cpu().pc(), pc);
        self
    }

    pub fn assert_mem_eq(self, address: u8, value: u8) -> TestContext {
        assert_eq!(self.system.memory().raw_read(address), value);
        self
    }

    pub fn assert_leds_eq(self, leds: u8) -> TestContext {
        assert_eq!(self.system.leds(), leds);
        self
    }

    pub fn assert_cycles(self, cycles: u64) -> TestContext {
        assert_eq!(self.cycles, cycles);
        self
    }

    /// Only these registers may differ from `before`.
    pub fn assert_regs_unchanged_except(self, before: [u8; 4], changed: &[Register]) -> TestContext {
        for register in Register::all().filter(|r| !changed.contains(r)) {
            assert_eq!(
                self.system.cpu().registers.get(register),
                before[register as usize],
                "{:?} was modified.",
                register
            );
        }
        self
    }
}

/// Register-register encoding helper.
pub fn op(opcode: u8, a: Register, b: Register) -> u8 { (opcode << 4) | ((a as u8) << 2) | b as u8 }
