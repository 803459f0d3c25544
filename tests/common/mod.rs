#![allow(dead_code)]
use deskcalc::mach::{Calculator, Display, Event};
use deskcalc::term::keys;

/// Press every key in a script and return the display left behind.
pub fn press(calc: &mut Calculator, script: &str) -> Display {
    for key in keys(script).unwrap() {
        calc.press(key);
    }
    calc.display()
}

pub fn run(script: &str) -> Display {
    let mut calc = Calculator::default();
    press(&mut calc, script)
}

pub fn operand(script: &str) -> String {
    run(script).operand
}

pub fn events(calc: &mut Calculator, script: &str) -> Vec<Event> {
    keys(script)
        .unwrap()
        .into_iter()
        .map(|key| calc.press(key))
        .collect()
}
