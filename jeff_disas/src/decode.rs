use super::{Arg, Op};

struct OpComponents {
    opcode: u8,
    a: u8,
    imm: u8,
}

impl OpComponents {
    fn from_byte(byte: u8) -> OpComponents {
        OpComponents {
            opcode: (byte & 0b1111_0000) >> 4,
            a: (byte & 0b0000_1100) >> 2,
            imm: (byte & 0b0000_1111),
        }
    }
}

/// Decodes a single instruction byte. Every byte is a valid instruction.
pub fn decode(byte: u8) -> Op {
    let components = OpComponents::from_byte(byte);
    match components.opcode {
        0x0 => Op::new_reg_reg("SL", byte),
        0x1 => Op::new_reg_reg("SR", byte),
        0x2 => Op::new_reg_reg("NOT", byte),
        0x3 => Op::new_reg_reg("AND", byte),
        0x4 => Op::new_reg_reg("OR", byte),
        0x5 => Op::new_reg_reg("XOR", byte),
        0x6 => Op::new_reg_reg("ADD", byte),
        0x7 => Op::new_reg_reg("SLT", byte),
        0x8 => Op::new_reg_reg("LW", byte),
        0x9 => Op::new_reg_reg("SW", byte),
        0xA => Op::new("LI").with_lhs(Arg::from_u4(components.imm)),
        0xB => Op::new("LUI").with_lhs(Arg::from_u4(components.imm)),
        0xC => Op::new_reg_reg("JR", byte),
        // BZ's a field is the high half of its signed offset.
        0xD => Op::new("BZ")
            .with_lhs(Arg::from_reg_table(components.a))
            .with_rhs(Arg::from_i4(components.imm)),
        0xE => Op::new("JI").with_lhs(Arg::from_u4(components.imm)),
        _ => Op::new("JIR").with_lhs(Arg::from_u4(components.imm)),
    }
}

/// Formats a program as one `address: byte  mnemonic` line per instruction.
pub fn listing(bytes: &[u8]) -> String {
    bytes
        .iter()
        .enumerate()
        .map(|(address, &byte)| format!("{:02X}: {:02X}  {}\n", address, byte, decode(byte)))
        .collect()
}
