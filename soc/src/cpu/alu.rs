use super::decoder::OpCode;

/// Register-register operations computed by the ALU.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Sl,
    Sr,
    Not,
    And,
    Or,
    Xor,
    Add,
    Slt,
}

impl Op {
    /// Maps an opcode to its ALU operation, if it has one.
    pub fn from_opcode(opcode: OpCode) -> Option<Op> {
        use Op::*;
        Some(match opcode {
            OpCode::Sl => Sl,
            OpCode::Sr => Sr,
            OpCode::Not => Not,
            OpCode::And => And,
            OpCode::Or => Or,
            OpCode::Xor => Xor,
            OpCode::Add => Add,
            OpCode::Slt => Slt,
            _ => return None,
        })
    }

    /// Purely combinational. `rhs` is the only operand NOT looks at.
    pub fn execute(self, lhs: u8, rhs: u8) -> u8 {
        use Op::*;
        match self {
            // The result bus is 8 bits wide, so anything shifted by 8 or more is gone.
            Sl => lhs.checked_shl(rhs.into()).unwrap_or(0),
            Sr => lhs.checked_shr(rhs.into()).unwrap_or(0),
            Not => !rhs,
            And => lhs & rhs,
            Or => lhs | rhs,
            Xor => lhs ^ rhs,
            Add => lhs.wrapping_add(rhs),
            Slt => (lhs < rhs) as u8,
        }
    }
}
