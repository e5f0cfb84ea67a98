use crate::cpu;
use crate::mmu::DataBus;

use cpu::alu;
use cpu::decoder::{Decoded, OpCode};
use cpu::register::Register;
use cpu::{Control, Cpu, Outputs};

/// Register-write index for the instruction. LI and LUI have no `a` field; their immediate
/// covers it, so both read and write go to R0.
fn reg_select(decoded: &Decoded) -> Register {
    match decoded.opcode {
        Some(OpCode::Li) | Some(OpCode::Lui) => Register::R0,
        _ => decoded.a,
    }
}

/// Default outputs: write 0 into `a`, no data access, PC + 1.
fn defaults(pc: u8, reg_select: Register) -> Outputs {
    Outputs {
        instruction_address: pc,
        data_address: 0,
        data_out: 0,
        control: Control::REG_WRITE,
        reg_select,
        reg_data: 0,
        next_pc: pc.wrapping_add(1),
    }
}

/// Computes every combinational output of one cycle from the pre-cycle state. Only the matched
/// opcode's overrides are applied on top of the defaults.
pub fn cycle(cpu: &Cpu, decoded: &Decoded, bus: &impl DataBus) -> Outputs {
    let pc = cpu.pc();
    let current_regs = &cpu.registers;

    let a = reg_select(decoded);
    let ar = current_regs.get(a);
    let br = current_regs.get(decoded.b);
    let imm = decoded.imm;
    let defaults = defaults(pc, a);

    let opcode = match decoded.opcode {
        Some(opcode) => opcode,
        None => return defaults,
    };

    use OpCode::*;
    match opcode {
        Lw => Outputs { data_address: br, reg_data: bus.read(br), ..defaults },
        Sw => Outputs {
            control: Control::DATA_WRITE,
            data_address: ar,
            data_out: br,
            ..defaults
        },
        Li => Outputs { reg_data: (ar & 0xF0) | imm, ..defaults },
        Lui => Outputs { reg_data: (ar & 0x0F) | (imm << 4), ..defaults },
        // Link value goes to `a`, the target comes from `b`.
        Jr => Outputs { reg_data: pc.wrapping_add(1), next_pc: br, ..defaults },
        // Despite the name, BZ is taken when the register is NOT zero.
        Bz => Outputs {
            control: Control::empty(),
            next_pc: if ar != 0 {
                pc.wrapping_add(1).wrapping_add(decoded.simm as u8)
            } else {
                defaults.next_pc
            },
            ..defaults
        },
        Ji => Outputs {
            control: Control::empty(),
            next_pc: pc.wrapping_add(1).wrapping_add(imm),
            ..defaults
        },
        Jir => Outputs {
            control: Control::empty(),
            next_pc: pc.wrapping_sub(1).wrapping_sub(imm),
            ..defaults
        },
        _ => match alu::Op::from_opcode(opcode) {
            Some(op) => Outputs { reg_data: op.execute(ar, br), ..defaults },
            None => defaults,
        },
    }
}
