mod common;
use common::*;
use runvm::mach::Val;

#[test]
fn test_sum() {
    let mut r = runner(
        "
        const 10
        const 2
        call sum, 2
        print
        halt
# arguments are the first two slots of a 64 slot stack
sum:    fetch 63
        fetch 62
        add
        ret
        ",
    );
    assert_eq!(exec(&mut r), "12\n");
    assert_eq!(r.stack().live(), [Val::from(12.0)]);
    assert_eq!(r.fp(), 0);
}

#[test]
fn test_nested_calls() {
    let mut r = runner(
        "
        const 5
        call f, 1
        print
        halt
f:      fetch 63
        call g, 1
        const 1
        add
        ret
g:      fetch 59
        const 2
        mul
        ret
        ",
    );
    assert_eq!(exec(&mut r), "11\n");
    assert_eq!(r.stack().len(), 1);
    assert_eq!(r.depth(), 0);
}

#[test]
fn test_locals_in_callee() {
    let mut r = runner_n(
        "
        const 4
        call square, 1
        print
        halt
square: fetch 7
        store 0
        fetch 0
        fetch 0
        mul
        ret
        ",
        8,
    );
    assert_eq!(exec(&mut r), "16\n");
}

#[test]
fn test_string_return_value() {
    let mut r = runner("call greet, 0\nprint\nhalt\ngreet: const \"hi\"\nret");
    assert_eq!(exec(&mut r), "hi\n");
}

#[test]
fn test_call_target_must_be_number() {
    let mut r = runner("call \"f\", 0");
    assert_eq!(
        exec(&mut r),
        "ValueError: target must be a Number, found String value at 0000\n"
    );
    let mut r = runner("call 0, -1");
    assert_eq!(
        exec(&mut r),
        "ValueError: argument count must be a whole number, found -1 at 0000\n"
    );
}
