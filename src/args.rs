use soc::log::LogSettings;

pub const HELP: &str = "\
Runs a NanoJeff program and prints every LED change.

USAGE:
  nanojeff [OPTIONS] [PROGRAM]

ARGS:
  PROGRAM               Assembly source (.s, .asm) or a raw binary image.
                        Defaults to the built-in LED counter.

OPTIONS:
  --cycles N            Number of cycles to run [default: 64]
  --buttons V           Value held on the input port [default: 0]
  --disassemble         Print a listing of the program (or snapshot ROM) and exit
  --trace               Log every executed instruction
  --log-io              Log I/O port reads and LED writes
  --log-mem             Log data store writes
  --log-file PATH       Also write the log to PATH
  --save-state PATH     Write a snapshot after running (needs the serialize feature)
  --load-state PATH     Resume from a snapshot instead of loading a program
  -h, --help            Prints help information
";

pub struct Args {
    pub program: Option<String>,
    pub cycles: u64,
    pub buttons: u8,
    pub disassemble: bool,
    pub log: LogSettings,
    pub save_state: Option<String>,
    pub load_state: Option<String>,
}

/// Accepts decimal, `0x` hex and `0b` binary.
fn parse_byte(value: &str) -> Result<u8, String> {
    let lower = value.to_ascii_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u8::from_str_radix(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u8::from_str_radix(bin, 2)
    } else {
        lower.parse()
    };
    parsed.map_err(|e| format!("\"{}\" is not a byte: {}", value, e))
}

/// Returns `None` when help was requested.
pub fn parse() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let parsed = Args {
        cycles: args.opt_value_from_str("--cycles")?.unwrap_or(64),
        buttons: args.opt_value_from_fn("--buttons", parse_byte)?.unwrap_or(0),
        disassemble: args.contains("--disassemble"),
        log: LogSettings {
            disassembly: args.contains("--trace"),
            io: args.contains("--log-io"),
            memory: args.contains("--log-mem"),
            log_file: args.opt_value_from_str("--log-file")?,
        },
        save_state: args.opt_value_from_str("--save-state")?,
        load_state: args.opt_value_from_str("--load-state")?,
        program: None,
    };
    let mut free = args.free()?;
    if free.len() > 1 {
        return Err(pico_args::Error::UnusedArgsLeft(free.split_off(1)));
    }
    Ok(Some(Args { program: free.pop(), ..parsed }))
}
