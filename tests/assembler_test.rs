mod common;
use common::*;
use deskcalc::mach::{AngleMode, Calculator, Event, Phase, MATH_ERROR};

#[test]
fn test_chain_collapses() {
    let d = run("3+4+");
    assert_eq!(d.expression, "7 + ");
    assert_eq!(d.operand, "7");
    assert_eq!(operand("2+3*4="), "20");
    assert_eq!(operand("10-4-3="), "3");
}

#[test]
fn test_power_defers() {
    assert_eq!(operand("2^3^2="), "512");
    assert_eq!(operand("2+3^2="), "11");
    assert_eq!(run("2*3^").expression, "2 × 3 ^ ");
}

#[test]
fn test_operator_replaces_operator() {
    assert_eq!(run("3+*").expression, "3 × ");
    assert_eq!(operand("3+*2="), "6");
    assert_eq!(operand("8/-2="), "6");
}

#[test]
fn test_expression_glyphs() {
    let d = run("6/2*");
    assert_eq!(d.expression, "3 × ");
    assert_eq!(run("6/").expression, "6 ÷ ");
}

#[test]
fn test_entry() {
    assert_eq!(operand("007"), "7");
    assert_eq!(operand("1.2.3"), "1.23");
    assert_eq!(operand("."), "0.");
    assert_eq!(operand("0.1+0.2="), "0.3");
    assert_eq!(operand("2+."), "0.");
}

#[test]
fn test_result_starts_fresh_entry() {
    let mut calc = Calculator::default();
    assert_eq!(press(&mut calc, "2+3=").operand, "5");
    assert!(calc.awaiting_new_entry());
    assert_eq!(press(&mut calc, "4").operand, "4");
    assert_eq!(calc.expression_prefix(), "");
}

#[test]
fn test_math_error() {
    let mut calc = Calculator::default();
    let d = press(&mut calc, "5/0=");
    assert_eq!(d.operand, MATH_ERROR);
    assert_eq!(d.expression, "");
    assert!(d.error);
    assert_eq!(calc.phase(), Phase::Error);
    assert_eq!(events(&mut calc, "+=)"), vec![Event::Unchanged; 3]);
    assert_eq!(press(&mut calc, "7+1=").operand, "8");
    assert_eq!(calc.phase(), Phase::Idle);
}

#[test]
fn test_clear() {
    let mut calc = Calculator::default();
    press(&mut calc, "5/0=");
    let d = press(&mut calc, "c");
    assert_eq!(d.operand, "0");
    assert!(!d.error);
    press(&mut calc, "[mode]4[m+]2*(3");
    let d = press(&mut calc, "[ac]");
    assert_eq!(d.operand, "0");
    assert_eq!(d.expression, "");
    assert_eq!(calc.paren_depth(), 0);
    assert_eq!(calc.memory(), 4.0);
    assert_eq!(calc.angle_mode(), AngleMode::Rad);
    assert!(!calc.awaiting_new_entry());
    assert_eq!(calc.phase(), Phase::Idle);
}

#[test]
fn test_delete() {
    assert_eq!(operand("123[del]"), "12");
    assert_eq!(operand("7[del][del]"), "0");
    assert_eq!(operand("1.5[exp][del]"), "1.5");
    let mut calc = Calculator::default();
    press(&mut calc, "2+3=");
    let d = press(&mut calc, "[del]");
    assert_eq!(d.operand, "0");
    assert_eq!(calc.last_result(), 5.0);
}

#[test]
fn test_delete_after_operator_clears() {
    let mut calc = Calculator::default();
    let d = press(&mut calc, "3+[del]");
    assert_eq!(d.expression, "");
    assert_eq!(d.operand, "0");
    assert_eq!(calc.phase(), Phase::Idle);
}

#[test]
fn test_delete_from_error() {
    let mut calc = Calculator::default();
    press(&mut calc, "5/0=");
    let d = press(&mut calc, "[del]");
    assert!(!d.error);
    assert_eq!(d.operand, "0");
    assert_eq!(calc.phase(), Phase::Idle);
}

#[test]
fn test_delete_after_open_paren() {
    let mut calc = Calculator::default();
    let d = press(&mut calc, "2+([del]");
    assert_eq!(d.expression, "2 + (");
    assert_eq!(d.operand, "0");
    assert_eq!(calc.paren_depth(), 1);
    assert_eq!(press(&mut calc, "3)=").operand, "5");
}

#[test]
fn test_domain_errors() {
    assert_eq!(operand("0[inv]"), MATH_ERROR);
    assert_eq!(operand("4[neg][sqrt]"), MATH_ERROR);
    assert_eq!(operand("0[log]"), MATH_ERROR);
    assert_eq!(operand("1[neg][ln]"), MATH_ERROR);
}

#[test]
fn test_functions() {
    assert_eq!(operand("9[sqrt]"), "3");
    assert_eq!(operand("12[sqr]"), "144");
    assert_eq!(operand("4[inv]"), "0.25");
    assert_eq!(operand("1000[log]"), "3");
    assert_eq!(operand("5[neg]"), "-5");
    assert_eq!(operand("[neg]"), "0");
    assert_eq!(operand("2+9[sqrt]="), "5");
    assert_eq!(operand("2*5[neg]="), "-10");
}

#[test]
fn test_trig_modes() {
    assert_eq!(operand("30[sin]"), "0.5");
    assert_eq!(operand("45[tan]"), "1");
    assert_eq!(operand("[mode]0[cos]"), "1");
    assert_eq!(operand("[mode][mode]100[sin]"), "1");
}

#[test]
fn test_mode_cycle() {
    let mut calc = Calculator::default();
    let modes = events(&mut calc, "[mode][mode][mode]");
    assert_eq!(
        modes,
        vec![
            Event::Mode(AngleMode::Rad),
            Event::Mode(AngleMode::Grad),
            Event::Mode(AngleMode::Deg)
        ]
    );
    assert_eq!(
        events(&mut calc, "[shift][shift]"),
        vec![Event::Shift(true), Event::Shift(false)]
    );
}

#[test]
fn test_parens() {
    let mut calc = Calculator::default();
    let d = press(&mut calc, "2*(3+4");
    assert_eq!(d.expression, "2 × (3 + ");
    assert_eq!(calc.paren_depth(), 1);
    let d = press(&mut calc, ")");
    assert_eq!(d.operand, "7");
    assert_eq!(d.expression, "2 × ");
    assert_eq!(press(&mut calc, "=").operand, "14");
    assert_eq!(operand("2(3)="), "6");
    assert_eq!(operand("((1+2)*(3+4))="), "21");
}

#[test]
fn test_closed_group_multiplies() {
    assert_eq!(operand("(2)3="), "6");
    assert_eq!(operand("(2)(3)="), "6");
    assert_eq!(operand("(1+1)(2+2)="), "8");
    assert_eq!(operand("(2).5="), "1");
    assert_eq!(run("(1+1)3").expression, "2 × ");
    assert_eq!(operand("(2)+3="), "5");
    assert_eq!(operand("(4)[sqrt]3="), "3");
}

#[test]
fn test_unbalanced_parens() {
    assert_eq!(operand("(2+3="), MATH_ERROR);
    let mut calc = Calculator::default();
    assert_eq!(events(&mut calc, ")"), vec![Event::Unchanged]);
    assert_ne!(events(&mut calc, "("), vec![Event::Unchanged]);
    assert_eq!(events(&mut calc, ")"), vec![Event::Unchanged]);
}

#[test]
fn test_recall() {
    assert_eq!(operand("[pi]"), "3.14159265359");
    assert_eq!(operand("[pi]*2="), "6.28318530718");
    assert_eq!(operand("2+3=[ans]*2="), "10");
    assert_eq!(operand("[ans]"), "0");
}

#[test]
fn test_exponent_entry() {
    assert_eq!(run("1.5[exp]3").operand, "1.5E3");
    assert_eq!(operand("1.5[exp]3="), "1500");
    assert_eq!(operand("2[exp]="), "2");
    assert_eq!(operand("2[exp]3[exp]"), "2E3");
    assert_eq!(operand("123456789*1000="), "1.23456789e+11");
    assert_eq!(operand("123456789*1000=+1="), "1.23456789e+11");
}

#[test]
fn test_memory() {
    let mut calc = Calculator::default();
    press(&mut calc, "5[m+]3[m+]");
    assert_eq!(calc.memory(), 8.0);
    press(&mut calc, "2[m-]");
    assert_eq!(calc.memory(), 6.0);
    assert_eq!(press(&mut calc, "[mr]").operand, "6");
    press(&mut calc, "[mc]");
    assert_eq!(calc.memory(), 0.0);
}

#[test]
fn test_phases() {
    let mut calc = Calculator::default();
    assert_eq!(calc.phase(), Phase::Idle);
    press(&mut calc, "3");
    assert_eq!(calc.phase(), Phase::Accumulating);
    press(&mut calc, "+");
    assert_eq!(calc.phase(), Phase::PendingOperator);
    press(&mut calc, "4");
    assert_eq!(calc.phase(), Phase::Accumulating);
    press(&mut calc, "=");
    assert_eq!(calc.phase(), Phase::Idle);
}
