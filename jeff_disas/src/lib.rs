pub mod decode;
pub mod display;
pub(crate) mod op_creation;

pub use decode::{decode, listing};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arg {
    Register(&'static str),
    Signed4bit(i8),
    Unsigned4bit(u8),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Command {
    pub name: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Op {
    pub command: Command,
    pub lhs: Option<Arg>,
    pub rhs: Option<Arg>,
}
