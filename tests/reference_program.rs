use soc::asm;
use soc::cpu::register::Register;
use soc::program::{INCREMENT_LEDS, INCREMENT_LEDS_SOURCE};
use soc::sim::{LedTransition, Simulator};
use soc::system::System;

/// Runs `program` for `cycles` cycles with the buttons held at `buttons`, and captures the
/// visible machine state after every cycle.
fn trace(program: &[u8], cycles: u64, buttons: u8) -> Vec<(u8, [u8; 4], u8)> {
    let mut system = System::new(program).unwrap();
    system.set_buttons(buttons);
    (0..cycles)
        .map(|_| {
            system.execute_cycle();
            let registers = system.cpu().registers;
            let values = [
                registers.get(Register::R0),
                registers.get(Register::R1),
                registers.get(Register::R2),
                registers.get(Register::R3),
            ];
            (system.cpu().pc(), values, system.leds())
        })
        .collect()
}

#[test]
fn increment_leds_final_state() {
    let mut system = System::new(&INCREMENT_LEDS).unwrap();
    for _ in 0..64 {
        system.execute_cycle();
    }
    let registers = system.cpu().registers;
    assert_eq!(system.leds(), 18);
    assert_eq!(system.cpu().pc(), 13);
    assert_eq!(registers.get(Register::R0), 19);
    assert_eq!(registers.get(Register::R1), 1);
    assert_eq!(registers.get(Register::R2), 0);
    assert_eq!(registers.get(Register::R3), 0xFF);
}

#[test]
fn increment_leds_transitions() {
    let mut sim = Simulator::from_program(&INCREMENT_LEDS).unwrap();
    let transitions = sim.run(64).to_vec();
    assert_eq!(transitions.len(), 18);
    for (i, transition) in transitions.iter().enumerate() {
        let expected =
            LedTransition { cycle: 11 + 3 * i as u64, from: i as u8, to: i as u8 + 1 };
        assert_eq!(*transition, expected);
    }
    assert_eq!(transitions[0].to_string(), "cycle: 0011 leds: 00000000=>00000001");
    assert_eq!(transitions[17].to_string(), "cycle: 0062 leds: 00010001=>00010010");
}

#[test]
fn increment_leds_is_deterministic() {
    let first = trace(&INCREMENT_LEDS, 64, 0);
    let second = trace(&INCREMENT_LEDS, 64, 0);
    assert_eq!(first, second);
    // The program never reads the port, so the buttons cannot change anything.
    assert_eq!(first, trace(&INCREMENT_LEDS, 64, 0xFF));
}

#[test]
fn increment_leds_assembles_from_source() {
    let program = asm::assemble(INCREMENT_LEDS_SOURCE).unwrap();
    assert_eq!(program.as_slice(), &INCREMENT_LEDS[..]);
}

#[test]
fn increment_leds_wraps_after_256_steps() {
    let mut sim = Simulator::from_program(&INCREMENT_LEDS).unwrap();
    // The 256th store puts the counter back at 0.
    sim.run(11 + 3 * 255 + 1);
    assert_eq!(sim.system().leds(), 0);
    let last = sim.transitions().last().cloned().unwrap();
    assert_eq!(last, LedTransition { cycle: 11 + 3 * 255, from: 0xFF, to: 0 });
}

#[test]
fn disassembly_reassembles() {
    let listing: String = INCREMENT_LEDS
        .iter()
        .chain(&[0xDE, 0xD5, 0xC9, 0x23])
        .map(|&byte| format!("{}\n", jeff_disas::decode(byte)))
        .collect();
    let program = asm::assemble(&listing).unwrap();
    let mut expected = INCREMENT_LEDS.to_vec();
    expected.extend_from_slice(&[0xDE, 0xD5, 0xC9, 0x23]);
    assert_eq!(program.to_vec(), expected);
}
