use super::{Arg, Command, Op};

impl Op {
    pub fn new(name: &'static str) -> Op {
        Op { command: Command { name }, lhs: None, rhs: None }
    }

    /// Register-register form, `OP a, b`.
    pub fn new_reg_reg(name: &'static str, byte: u8) -> Op {
        Op::new(name)
            .with_lhs(Arg::from_reg_table((byte >> 2) & 0b11))
            .with_rhs(Arg::from_reg_table(byte & 0b11))
    }

    pub fn with_lhs(self, arg: Arg) -> Op { Op { lhs: Some(arg), ..self } }

    pub fn with_rhs(self, arg: Arg) -> Op { Op { rhs: Some(arg), ..self } }
}

impl Arg {
    pub fn from_u4(value: u8) -> Arg { Arg::Unsigned4bit(value & 0xF) }

    /// Sign-extends the low nibble.
    pub fn from_i4(value: u8) -> Arg { Arg::Signed4bit(((value << 4) as i8) >> 4) }

    pub fn from_reg_table(value: u8) -> Arg {
        Arg::Register(match value {
            0 => "R0",
            1 => "R1",
            2 => "R2",
            3 => "R3",
            _ => panic!("Register index {} does not fit in two bits.", value),
        })
    }
}
