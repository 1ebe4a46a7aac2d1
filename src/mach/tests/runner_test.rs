use super::*;
use crate::lang::ErrorCode;
use crate::mach::{Instruction, Opcode, Val};

#[test]
fn test_const_const_add() {
    let mut r = runner("const 10\nconst 20\nadd\nhalt", 5);
    assert_eq!(run(&mut r), "");
    assert_eq!(r.top(), Some(&Val::from(30.0)));
    assert!(!r.is_running());
}

#[test]
fn test_store_on_empty_stack() {
    let mut r = runner("store 0", 5);
    let e = r.run().unwrap_err();
    assert_eq!(e.code(), ErrorCode::StackError);
    assert_eq!(e.address(), Some(0));
    assert_eq!(r.stack().read(&Val::from(0.0)).unwrap(), Val::Nil);
}

#[test]
fn test_const_pop_keeps_pointer() {
    let mut r = runner("const 1\nconst \"x\"\npop\nconst nil\npop", 5);
    r.step().unwrap();
    let before = r.stack().pointer();
    r.step().unwrap();
    r.step().unwrap();
    assert_eq!(r.stack().pointer(), before);
    r.step().unwrap();
    r.step().unwrap();
    assert_eq!(r.stack().pointer(), before);
}

#[test]
fn test_end_of_program_stops() {
    let mut r = runner("const 1", 5);
    assert_eq!(r.step().unwrap(), true);
    assert_eq!(r.step().unwrap(), false);
    assert_eq!(r.ip(), 1);
    assert_eq!(r.execute(10), Event::Stopped);
}

#[test]
fn test_main_entry() {
    let program = Program::assemble("const 1\nconst 2\nconst 3").unwrap();
    let config = Config {
        stack_size: 4,
        main: 1,
        trace: false,
    };
    let mut r = Runner::new(program, &config);
    r.run().unwrap();
    assert_eq!(r.stack().live(), [Val::from(2.0), Val::from(3.0)]);
}

#[test]
fn test_print() {
    let mut r = runner("const \"hello\"\nprint\nconst 2.5\nprint\nhalt", 5);
    assert_eq!(run(&mut r), "hello\n2.5\n");
    assert_eq!(r.stack().len(), 2);
}

#[test]
fn test_trace() {
    let program = Program::assemble("const 10\nhalt").unwrap();
    let config = Config {
        stack_size: 4,
        main: 0,
        trace: true,
    };
    let mut r = Runner::new(program, &config);
    assert_eq!(
        r.execute(100),
        Event::Trace(format!("{:04} {:<16} stack [10] (10) *0\n", 0, "const 10"))
    );
    assert_eq!(
        r.execute(100),
        Event::Trace(format!("{:04} {:<16} stack [10] (10) *0\n", 1, "halt"))
    );
    assert_eq!(r.execute(100), Event::Stopped);
}

#[test]
fn test_trace_empty_stack() {
    let program = Program::assemble("const 1\npop").unwrap();
    let config = Config {
        trace: true,
        ..Config::default()
    };
    let out = Runner::new(program, &config).run().unwrap();
    assert!(out.ends_with(&format!("{:04} {:<16} stack [] (empty) *-1\n", 1, "pop")));
}

#[test]
fn test_cycles_exceeded() {
    let mut r = runner("top: goto top", 5);
    assert_eq!(r.execute(10), Event::Running);
    assert_eq!(r.ip(), 0);
    assert_eq!(run_cycles(&mut r, 10), "\n10 Execution cycles exceeded.\n");
}

#[test]
fn test_interrupt() {
    let mut r = runner("const 0\ntop: goto top", 5);
    assert_eq!(r.execute(5), Event::Running);
    r.interrupt();
    assert_eq!(r.execute(5), Event::Break(1));
    assert_eq!(r.execute(5), Event::Stopped);
}

#[test]
fn test_missing_operand() {
    let program = Program::new(vec![Instruction::from(Opcode::Const)]);
    let mut r = Runner::new(program, &Config::default());
    assert_eq!(run(&mut r), "CodeError: expected 1 operand from const at 0000\n");
}

#[test]
fn test_missing_call_operands() {
    let program = Program::new(vec![Instruction::new(Opcode::Call, vec![Val::from(0.0)])]);
    let e = Runner::new(program, &Config::default()).run().unwrap_err();
    assert_eq!(e.code(), ErrorCode::CodeError);
    assert_eq!(e.text(), "expected 2 operands from call");
}

#[test]
fn test_errors_stop_the_runner() {
    let mut r = runner("const 1\nconst \"a\"\nadd\nconst 2", 5);
    match r.execute(100) {
        Event::Errors(e) => {
            assert_eq!(e.code(), ErrorCode::ValueError);
            assert_eq!(e.address(), Some(2));
        }
        event => panic!("unexpected {:?}", event),
    }
    assert!(!r.is_running());
    assert_eq!(r.step().unwrap(), false);
    assert_eq!(r.ip(), 2);
}

#[test]
fn test_shared_program() {
    let program = std::sync::Arc::new(Program::assemble("const 2\nconst 3\nmul").unwrap());
    let mut a = Runner::new(program.clone(), &Config::default());
    let mut b = Runner::new(program, &Config::default());
    a.run().unwrap();
    b.step().unwrap();
    assert_eq!(a.top(), Some(&Val::from(6.0)));
    assert_eq!(b.top(), Some(&Val::from(2.0)));
}
