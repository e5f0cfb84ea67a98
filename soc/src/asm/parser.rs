use crate::cpu::decoder::OpCode;
use crate::cpu::register::Register;
use crate::error::{self, Result};

/// An immediate, branch offset, or a label standing in for one.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Value(i32),
    Label(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    /// `OP a, b`
    RegReg { opcode: OpCode, a: Register, b: Register },
    /// `LI imm`, `LUI imm`, `JI imm`, `JIR imm`
    Immediate { opcode: OpCode, target: Target },
    /// `BZ a, simm`
    Branch { a: Register, target: Target },
    /// `.byte v, ...`
    Bytes(Vec<u8>),
}

impl Statement {
    /// Number of bytes the statement occupies in the instruction store.
    pub fn size(&self) -> usize {
        match self {
            Statement::Bytes(bytes) => bytes.len(),
            _ => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// 1-based source line.
    pub number: usize,
    pub label: Option<String>,
    pub statement: Option<Statement>,
}

pub fn parse(source: &str) -> Result<Vec<Line>> {
    source
        .lines()
        .enumerate()
        .map(|(i, text)| parse_line(i + 1, text))
        .filter_map(|line| match line {
            Ok(Line { label: None, statement: None, .. }) => None,
            other => Some(other),
        })
        .collect()
}

fn syntax_error<T>(line: usize, message: String) -> Result<T> {
    Err(error::Type::Syntax { line, message })
}

fn parse_line(number: usize, text: &str) -> Result<Line> {
    let code = text.split(|c| c == ';' || c == '#').next().unwrap_or("").trim();
    let (label, rest) = match code.find(':') {
        Some(index) => {
            let label = code[..index].trim();
            if !is_identifier(label) {
                return syntax_error(number, format!("\"{}\" is not a valid label.", label));
            }
            (Some(label.to_string()), code[index + 1..].trim())
        }
        None => (None, code),
    };
    let statement =
        if rest.is_empty() { None } else { Some(parse_statement(number, rest)?) };
    Ok(Line { number, label, statement })
}

fn parse_statement(line: usize, text: &str) -> Result<Statement> {
    let mut parts = text.splitn(2, char::is_whitespace);
    let mnemonic = parts.next().unwrap_or("").to_ascii_lowercase();
    let args: Vec<&str> = match parts.next().map(str::trim) {
        Some(rest) if !rest.is_empty() => rest.split(',').map(str::trim).collect(),
        _ => Vec::new(),
    };
    if mnemonic == ".byte" {
        if args.is_empty() {
            return syntax_error(line, ".byte needs at least one value.".into());
        }
        let parse_byte = |arg: &&str| -> Result<u8> {
            let value = parse_integer(line, arg)?;
            Ok(check_range(line, value, -128, 255)? as u8)
        };
        let bytes = args.iter().map(parse_byte).collect::<Result<Vec<u8>>>()?;
        return Ok(Statement::Bytes(bytes));
    }
    use OpCode::*;
    let opcode = match mnemonic.as_str() {
        "sl" => Sl,
        "sr" => Sr,
        "not" => Not,
        "and" => And,
        "or" => Or,
        "xor" => Xor,
        "add" => Add,
        "slt" => Slt,
        "lw" => Lw,
        "sw" => Sw,
        "li" => Li,
        "lui" => Lui,
        "jr" => Jr,
        "bz" => Bz,
        "ji" => Ji,
        "jir" => Jir,
        _ => return syntax_error(line, format!("Unexpected mnemonic: \"{}\"", mnemonic)),
    };
    match (opcode, args.as_slice()) {
        (Li, [arg]) | (Lui, [arg]) | (Ji, [arg]) | (Jir, [arg]) => {
            Ok(Statement::Immediate { opcode, target: parse_target(line, arg)? })
        }
        (Bz, [a, arg]) => {
            Ok(Statement::Branch { a: parse_register(line, a)?, target: parse_target(line, arg)? })
        }
        (Li, _) | (Lui, _) | (Ji, _) | (Jir, _) => {
            syntax_error(line, format!("{} takes one operand.", mnemonic))
        }
        (Bz, _) => syntax_error(line, "bz takes a register and an offset.".into()),
        (_, [a, b]) => Ok(Statement::RegReg {
            opcode,
            a: parse_register(line, a)?,
            b: parse_register(line, b)?,
        }),
        _ => syntax_error(line, format!("{} takes two registers.", mnemonic)),
    }
}

fn parse_register(line: usize, arg: &str) -> Result<Register> {
    Ok(match arg.to_ascii_lowercase().as_str() {
        "r0" => Register::R0,
        "r1" => Register::R1,
        "r2" => Register::R2,
        "r3" => Register::R3,
        _ => return syntax_error(line, format!("\"{}\" is not a register.", arg)),
    })
}

fn parse_target(line: usize, arg: &str) -> Result<Target> {
    if is_identifier(arg) {
        Ok(Target::Label(arg.to_string()))
    } else {
        parse_integer(line, arg).map(Target::Value)
    }
}

fn parse_integer(line: usize, arg: &str) -> Result<i32> {
    let (negative, digits) = match arg.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, arg),
    };
    let lower = digits.to_ascii_lowercase();
    if lower.starts_with(|c: char| c == '-' || c == '+') {
        return syntax_error(line, format!("\"{}\" is not a number.", arg));
    }
    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        i32::from_str_radix(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        i32::from_str_radix(bin, 2)
    } else {
        lower.parse::<i32>()
    };
    match parsed {
        Ok(value) if negative => Ok(-value),
        Ok(value) => Ok(value),
        Err(_) => syntax_error(line, format!("\"{}\" is not a number.", arg)),
    }
}

pub fn check_range(line: usize, value: i32, min: i32, max: i32) -> Result<i32> {
    if value < min || value > max {
        Err(error::Type::OperandOutOfRange { line, value, min, max })
    } else {
        Ok(value)
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
