use core::fmt;

use crate::error::Result;
use crate::system::System;
use crate::util::led_pattern;

/// The output latch changed value at the end of `cycle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LedTransition {
    pub cycle: u64,
    pub from: u8,
    pub to: u8,
}

impl fmt::Display for LedTransition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "cycle: {:04} leds: {}=>{}",
            self.cycle,
            led_pattern(self.from),
            led_pattern(self.to)
        )
    }
}

/// Drives a `System` cycle by cycle and records every LED change.
pub struct Simulator {
    system: System,
    leds_last: u8,
    transitions: Vec<LedTransition>,
}

impl Simulator {
    pub fn with_system(system: System) -> Simulator {
        let leds_last = system.leds();
        Simulator { system, leds_last, transitions: Vec::new() }
    }

    pub fn from_program(program: &[u8]) -> Result<Simulator> {
        Ok(Simulator::with_system(System::new(program)?))
    }

    pub fn system(&self) -> &System { &self.system }

    pub fn system_mut(&mut self) -> &mut System { &mut self.system }

    pub fn into_system(self) -> System { self.system }

    pub fn transitions(&self) -> &[LedTransition] { &self.transitions }

    /// Runs `cycles` cycles with the buttons held at their current value.
    pub fn run(&mut self, cycles: u64) -> &[LedTransition] {
        let buttons = self.system.buttons();
        self.run_with_input(cycles, |_| buttons)
    }

    /// Runs `cycles` cycles. Before each one the buttons are set to `input(cycle)`. Returns the
    /// transitions recorded during this run.
    pub fn run_with_input<F>(&mut self, cycles: u64, mut input: F) -> &[LedTransition]
    where
        F: FnMut(u64) -> u8,
    {
        let first_new = self.transitions.len();
        for _ in 0..cycles {
            let cycle = self.system.cycles();
            self.system.set_buttons(input(cycle));
            self.system.execute_cycle();
            let leds = self.system.leds();
            if leds != self.leds_last {
                let transition = LedTransition { cycle, from: self.leds_last, to: leds };
                self.transitions.push(transition);
                self.leds_last = leds;
            }
        }
        &self.transitions[first_new..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::INCREMENT_LEDS;

    #[test]
    fn test_transition_display() {
        let transition = LedTransition { cycle: 11, from: 0, to: 1 };
        assert_eq!(transition.to_string(), "cycle: 0011 leds: 00000000=>00000001");
    }

    #[test]
    fn test_reference_program_counts() {
        let mut sim = Simulator::from_program(&INCREMENT_LEDS).unwrap();
        let transitions = sim.run(20).to_vec();
        assert_eq!(
            transitions,
            vec![
                LedTransition { cycle: 11, from: 0, to: 1 },
                LedTransition { cycle: 14, from: 1, to: 2 },
                LedTransition { cycle: 17, from: 2, to: 3 },
            ]
        );
    }

    #[test]
    fn test_runs_resume() {
        let mut sim = Simulator::from_program(&INCREMENT_LEDS).unwrap();
        assert!(sim.run(11).is_empty());
        assert_eq!(sim.run(1), &[LedTransition { cycle: 11, from: 0, to: 1 }]);
        assert_eq!(sim.transitions().len(), 1);
        assert_eq!(sim.system().cycles(), 12);
    }

    #[test]
    fn test_input_is_sampled_per_cycle() {
        // R1 = 0xFF, then loop on LW R0, R1 / SW R1, R0 to echo the buttons onto the LEDs.
        let program = [0x55, 0xAF, 0xBF, 0x64, 0x81, 0x94, 0xF1];
        let mut sim = Simulator::from_program(&program).unwrap();
        sim.run_with_input(40, |cycle| if cycle < 20 { 0x0F } else { 0xF0 });
        assert_eq!(sim.system().leds(), 0xF0);
        assert_eq!(sim.transitions()[0].to, 0x0F);
    }
}
