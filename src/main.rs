mod args;
mod loader;

use soc::log;
use soc::program::INCREMENT_LEDS;
use soc::sim::Simulator;
use soc::system::System;

fn run(args: args::Args) -> loader::Result<()> {
    log::setup_logging(args.log)?;

    let system = match (&args.load_state, &args.program) {
        (Some(path), _) => {
            let system = loader::load_state(path)?;
            if args.disassemble {
                print!("{}", jeff_disas::listing(system.rom().bytes()));
                return Ok(());
            }
            system
        }
        (None, Some(path)) => {
            let program = loader::load_program(path)?;
            if args.disassemble {
                print!("{}", jeff_disas::listing(&program));
                return Ok(());
            }
            System::new(&program)?
        }
        (None, None) if args.disassemble => {
            print!("{}", jeff_disas::listing(&INCREMENT_LEDS));
            return Ok(());
        }
        (None, None) => System::new(&INCREMENT_LEDS)?,
    };

    let mut sim = Simulator::with_system(system);
    sim.system_mut().set_buttons(args.buttons);
    for transition in sim.run(args.cycles) {
        println!("{}", transition);
    }

    let system = sim.into_system();
    println!("pc: {:02X}  cycles: {}", system.cpu().pc(), system.cycles());
    println!("registers: {:?}", system.cpu().registers);

    if let Some(path) = &args.save_state {
        loader::save_state(&system, path)?;
    }
    Ok(())
}

fn main() {
    let args = match args::parse() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{}", args::HELP);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(2);
        }
    };
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
