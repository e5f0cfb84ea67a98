use super::{Arg, Command, Op};
use core::fmt::{Display, Formatter, Result};

impl Display for Arg {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Arg::Register(name) => write!(f, "{}", name),
            Arg::Signed4bit(value) => write!(f, "{}", value),
            Arg::Unsigned4bit(value) => write!(f, "0x{:X?}", value),
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter) -> Result { write!(f, "{}", self.name) }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.command)?;
        if let Some(lhs) = &self.lhs {
            write!(f, " {}", lhs)?;
        }
        if let Some(rhs) = &self.rhs {
            write!(f, ", {}", rhs)?;
        }
        Ok(())
    }
}
