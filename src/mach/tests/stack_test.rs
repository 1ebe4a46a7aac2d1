use crate::lang::ErrorCode;
use crate::mach::{Stack, Val};

#[test]
fn test_push_when_full() {
    let mut s = Stack::new("stack", 2);
    s.push(Val::from(1.0)).unwrap();
    s.push(Val::from(2.0)).unwrap();
    let e = s.push(Val::from(3.0)).unwrap_err();
    assert_eq!(e.code(), ErrorCode::StackError);
    assert_eq!(e.to_string(), "StackError: cannot push because stack is full");
    assert_eq!(s.pointer(), 1);
}

#[test]
fn test_pop_and_peek_when_empty() {
    let mut s = Stack::new("stack", 2);
    assert_eq!(s.pointer(), -1);
    assert_eq!(s.pop().unwrap_err().code(), ErrorCode::StackError);
    assert_eq!(s.peek().unwrap_err().code(), ErrorCode::StackError);
    assert_eq!(s.pointer(), -1);
}

#[test]
fn test_pop_2_leaves_stack_alone_on_underflow() {
    let mut s = Stack::new("stack", 4);
    s.push(Val::from(1.0)).unwrap();
    assert!(s.pop_2().is_err());
    assert_eq!(s.live(), [Val::from(1.0)]);
    s.push(Val::from(2.0)).unwrap();
    assert_eq!(s.pop_2().unwrap(), (Val::from(1.0), Val::from(2.0)));
    assert!(s.is_empty());
}

#[test]
fn test_store_fetch_round_trip() {
    let mut s = Stack::new("stack", 8);
    for addr in 0..8usize {
        let address = Val::from(addr);
        let val = Val::from(format!("v{}", addr));
        s.push(val.clone()).unwrap();
        assert_eq!(s.store(&address).unwrap(), val);
        assert!(s.is_empty());
        assert_eq!(s.fetch(&address).unwrap(), val);
        assert_eq!(s.peek().unwrap(), &val);
        s.pop().unwrap();
    }
}

#[test]
fn test_store_addresses_from_far_end() {
    let mut s = Stack::new("stack", 4);
    s.push(Val::from(7.0)).unwrap();
    s.store(&Val::from(0.0)).unwrap();
    assert_eq!(s.get(3), Some(&Val::from(7.0)));
}

#[test]
fn test_store_on_empty_writes_nothing() {
    let mut s = Stack::new("stack", 4);
    let e = s.store(&Val::from(0.0)).unwrap_err();
    assert_eq!(e.code(), ErrorCode::StackError);
    assert_eq!(s.read(&Val::from(0.0)).unwrap(), Val::Nil);
}

#[test]
fn test_address_must_be_number() {
    let mut s = Stack::new("stack", 4);
    s.push(Val::from(1.0)).unwrap();
    let e = s.store(&Val::from("0")).unwrap_err();
    assert_eq!(e.code(), ErrorCode::ValueError);
    assert_eq!(s.len(), 1);
    assert_eq!(s.fetch(&Val::Nil).unwrap_err().code(), ErrorCode::ValueError);
}

#[test]
fn test_address_out_of_range() {
    let mut s = Stack::new("globals", 4);
    s.push(Val::from(1.0)).unwrap();
    let e = s.store(&Val::from(4.0)).unwrap_err();
    assert_eq!(e.code(), ErrorCode::StackError);
    assert_eq!(
        e.to_string(),
        "StackError: address 4 out of range for globals"
    );
    assert_eq!(s.len(), 1);
}

#[test]
fn test_set_pointer_bounds() {
    let mut s = Stack::new("stack", 4);
    assert!(s.set_pointer(3).is_ok());
    assert_eq!(s.len(), 4);
    assert!(s.set_pointer(4).is_err());
    assert!(s.set_pointer(-2).is_err());
    assert!(s.set_pointer(-1).is_ok());
    assert!(s.is_empty());
}
