use core::fmt;

pub enum Type {
    /// The program does not fit in the 256-byte instruction store.
    ProgramTooLarge(usize),
    /// A restored store does not span the 256-byte address space.
    StoreSize { store: &'static str, len: usize },
    Syntax { line: usize, message: String },
    OperandOutOfRange { line: usize, value: i32, min: i32, max: i32 },
    UndefinedLabel { line: usize, label: String },
    DuplicateLabel { line: usize, label: String },
}

pub type Result<T> = core::result::Result<T, Type>;

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { <Type as fmt::Display>::fmt(self, f) }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Type::ProgramTooLarge(len) => {
                write!(f, "Program is {} bytes long, but the instruction store holds 256.", len)
            }
            Type::StoreSize { store, len } => {
                write!(f, "The {} store holds {} bytes instead of 256.", store, len)
            }
            Type::Syntax { line, message } => write!(f, "Line {}: {}", line, message),
            Type::OperandOutOfRange { line, value, min, max } => write!(
                f,
                "Line {}: operand {} is out of range (expected {}..={}).",
                line, value, min, max
            ),
            Type::UndefinedLabel { line, label } => {
                write!(f, "Line {}: undefined label \"{}\".", line, label)
            }
            Type::DuplicateLabel { line, label } => {
                write!(f, "Line {}: label \"{}\" is already defined.", line, label)
            }
        }
    }
}

impl std::error::Error for Type {}
