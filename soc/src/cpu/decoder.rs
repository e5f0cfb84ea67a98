use bitfield::bitfield;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::register::Register;
use crate::util::sign_extend;

/// The 4-bit opcode space. Values are the top nibble of the instruction.
#[derive(FromPrimitive, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum OpCode {
    Sl = 0b0000,
    Sr = 0b0001,
    Not = 0b0010,
    And = 0b0011,
    Or = 0b0100,
    Xor = 0b0101,
    Add = 0b0110,
    Slt = 0b0111,
    Lw = 0b1000,
    Sw = 0b1001,
    Li = 0b1010,
    Lui = 0b1011,
    Jr = 0b1100,
    Bz = 0b1101,
    Ji = 0b1110,
    Jir = 0b1111,
}

bitfield! {
    struct Fields(u8);
    impl Debug;
    u8;
    opcode, _: 7, 4;
    a, _: 3, 2;
    b, _: 1, 0;
    imm, _: 3, 0;
}

/// Every field of an instruction, extracted regardless of which ones the opcode uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decoded {
    pub raw: u8,
    /// `None` when the nibble has no implemented operation.
    pub opcode: Option<OpCode>,
    pub a: Register,
    pub b: Register,
    pub imm: u8,
    pub simm: i8,
}

pub fn decode(instruction: u8) -> Decoded {
    let fields = Fields(instruction);
    Decoded {
        raw: instruction,
        opcode: OpCode::from_u8(fields.opcode()),
        a: Register::from_field(fields.a()),
        b: Register::from_field(fields.b()),
        imm: fields.imm(),
        simm: sign_extend(fields.imm(), 4),
    }
}
