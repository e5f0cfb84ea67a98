//! Two-pass assembler for NanoJeff programs.
//!
//! One statement per line, `;` or `#` starts a comment and `name:` defines a label. Branch and
//! jump operands accept either a raw field value or a label:
//!
//! * `ji label` encodes `label - (address + 1)`,
//! * `jir label` encodes `address - 1 - label`,
//! * `bz rX, label` encodes the signed `label - (address + 1)`.
//!
//! BZ's register field overlaps the top half of its offset, so the register named in the source
//! must match the one the offset selects.

mod parser;

use std::collections::HashMap;

use arrayvec::ArrayVec;

use crate::cpu::decoder::OpCode;
use crate::cpu::register::Register;
use crate::error::{self, Result};
use crate::mmu::STORE_SIZE;

pub use parser::{Line, Statement, Target};
use parser::check_range;

/// An assembled program. Never longer than the instruction store.
pub type Program = ArrayVec<[u8; STORE_SIZE]>;

type Labels = HashMap<String, usize>;

pub fn assemble(source: &str) -> Result<Program> {
    let lines = parser::parse(source)?;

    // First pass: label addresses.
    let mut labels = Labels::new();
    let mut size = 0;
    for line in &lines {
        if let Some(label) = &line.label {
            if labels.insert(label.clone(), size).is_some() {
                return Err(error::Type::DuplicateLabel {
                    line: line.number,
                    label: label.clone(),
                });
            }
        }
        size += line.statement.as_ref().map_or(0, Statement::size);
    }
    if size > STORE_SIZE {
        return Err(error::Type::ProgramTooLarge(size));
    }

    // Second pass: encoding.
    let mut program = Program::new();
    for line in &lines {
        if let Some(statement) = &line.statement {
            let address = program.len();
            for byte in encode(statement, address, &labels, line.number)? {
                program.try_push(byte).map_err(|_| error::Type::ProgramTooLarge(size))?;
            }
        }
    }
    debug!("Assembled {} bytes, {} labels.", program.len(), labels.len());
    Ok(program)
}

fn resolve(target: &Target, labels: &Labels, line: usize) -> Result<Option<i32>> {
    match target {
        Target::Value(_) => Ok(None),
        Target::Label(label) => labels
            .get(label)
            .map(|&address| Some(address as i32))
            .ok_or_else(|| error::Type::UndefinedLabel { line, label: label.clone() }),
    }
}

fn field_value(target: &Target) -> i32 {
    match target {
        Target::Value(value) => *value,
        Target::Label(_) => 0,
    }
}

fn encode(statement: &Statement, address: usize, labels: &Labels, line: usize) -> Result<Vec<u8>> {
    let opcode_bits = |opcode: OpCode| (opcode as u8) << 4;
    let register_bits = |register: Register| register as u8;
    let next = address as i32 + 1;

    Ok(match statement {
        Statement::Bytes(bytes) => bytes.clone(),
        Statement::RegReg { opcode, a, b } => {
            vec![opcode_bits(*opcode) | (register_bits(*a) << 2) | register_bits(*b)]
        }
        Statement::Immediate { opcode, target } => {
            let value = match (opcode, resolve(target, labels, line)?) {
                (OpCode::Ji, Some(destination)) => destination - next,
                (OpCode::Jir, Some(destination)) => address as i32 - 1 - destination,
                (_, Some(_)) => {
                    return Err(error::Type::Syntax {
                        line,
                        message: format!("{:?} does not take a label.", opcode),
                    });
                }
                (_, None) => field_value(target),
            };
            let imm = check_range(line, value, 0, 15)? as u8;
            vec![opcode_bits(*opcode) | imm]
        }
        Statement::Branch { a, target } => {
            let value = match resolve(target, labels, line)? {
                Some(destination) => destination - next,
                None => field_value(target),
            };
            let simm = (check_range(line, value, -8, 7)? as u8) & 0xF;
            let tested = Register::from_field(simm >> 2);
            if tested != *a {
                return Err(error::Type::Syntax {
                    line,
                    message: format!("BZ with offset {} tests {:?}, not {:?}.", value, tested, a),
                });
            }
            vec![opcode_bits(OpCode::Bz) | simm]
        }
    })
}
