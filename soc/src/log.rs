#[derive(Default)]
pub struct LogSettings {
    pub disassembly: bool,
    pub io: bool,
    pub memory: bool,
    /// Also write every record to this file.
    pub log_file: Option<String>,
}

pub fn setup_logging(settings: LogSettings) -> Result<(), fern::InitError> {
    if settings.disassembly || settings.io || settings.memory {
        let LogSettings { disassembly, io, memory, log_file } = settings;
        let mut dispatch = fern::Dispatch::new()
            .filter(move |metadata| {
                if metadata.target() == "disas" {
                    disassembly
                } else if metadata.target() == "io" {
                    io
                } else if metadata.target() == "mem" {
                    memory
                } else {
                    true
                }
            })
            .format(|out, message, record| {
                out.finish(format_args!("[{}]: {}", record.target(), message))
            })
            .level(logging::LevelFilter::Trace)
            .chain(std::io::stdout());
        if let Some(path) = log_file {
            dispatch = dispatch.chain(fern::log_file(path)?);
        }
        dispatch.apply()?;
    }
    Ok(())
}
