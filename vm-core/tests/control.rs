mod common;

use common::*;
use vm_core::{RuntimeError, Value, VMConfig, Vm};

#[test]
fn jmp_skips_the_instruction_between() {
    // PUSH 1; JMP end; PUSH 2; end: PUSH 3 -> [1, 3]
    let mut vm = Vm::new(VMConfig::default());
    let prog = program(
        vec![
            instr("PUSH", vec![imm(1)]),
            instr("JMP", vec![label_ref("end")]),
            instr("PUSH", vec![imm(2)]),
            instr("PUSH", vec![imm(3)]),
            instr("HALT", no_ops()),
        ],
        &[("end", 3)],
    );
    vm.execute(prog).unwrap();
    assert_eq!(vm.dump_state().data_stack, vec![Value::Int(1), Value::Int(3)]);
}

#[test]
fn jz_does_not_pop_the_tested_value() {
    let mut vm = Vm::new(VMConfig::default());
    let prog = program(
        vec![
            instr("PUSH", vec![imm(0)]),
            instr("JZ", vec![label_ref("skip")]),
            instr("PUSH", vec![imm(99)]),
            instr("skip", no_ops()),
            instr("HALT", no_ops()),
        ],
        &[("skip", 3)],
    );
    vm.execute(prog).unwrap();
    // the tested 0 is still on the stack, PUSH 99 was skipped
    assert_eq!(vm.dump_state().data_stack, vec![Value::Int(0)]);
}

#[test]
fn jnz_jumps_on_nonzero_without_popping() {
    let mut vm = Vm::new(VMConfig::default());
    let prog = program(
        vec![
            instr("PUSH", vec![imm(5)]),
            instr("JNZ", vec![label_ref("skip")]),
            instr("PUSH", vec![imm(99)]),
            instr("skip", no_ops()),
            instr("HALT", no_ops()),
        ],
        &[("skip", 3)],
    );
    vm.execute(prog).unwrap();
    assert_eq!(vm.dump_state().data_stack, vec![Value::Int(5)]);
}

#[test]
fn call_and_ret_round_trip() {
    // PUSH 10; CALL fn; PUSH 30; HALT; fn: PUSH 20; RET -> [10, 20, 30]
    let mut vm = Vm::new(VMConfig::default());
    let prog = program(
        vec![
            instr("PUSH", vec![imm(10)]),
            instr("CALL", vec![label_ref("fn")]),
            instr("PUSH", vec![imm(30)]),
            instr("HALT", no_ops()),
            instr("PUSH", vec![imm(20)]),
            instr("RET", no_ops()),
        ],
        &[("fn", 4)],
    );
    vm.execute(prog).unwrap();
    assert_eq!(
        vm.dump_state().data_stack,
        vec![Value::Int(10), Value::Int(20), Value::Int(30)]
    );
    assert!(vm.dump_state().control_stack.is_empty());
}

#[test]
fn label_at_end_of_file_is_a_valid_halt_position() {
    let mut vm = Vm::new(VMConfig::default());
    let prog = program(
        vec![instr("PUSH", vec![imm(1)]), instr("JMP", vec![label_ref("fin")])],
        &[("fin", 2)],
    );
    vm.execute(prog).unwrap();
    assert_eq!(vm.dump_state().data_stack, vec![Value::Int(1)]);
    assert!(!vm.dump_state().running);
}

#[test]
fn jmp_to_undefined_label_is_an_error() {
    let mut vm = Vm::new(VMConfig::default());
    let prog = program(vec![instr("JMP", vec![label_ref("nowhere")])], &[]);
    let err = vm.execute(prog).unwrap_err();
    assert_eq!(err, RuntimeError::UndefinedLabel("nowhere".to_string()));
}

#[test]
fn ret_without_a_call_is_control_stack_underflow() {
    let mut vm = Vm::new(VMConfig::default());
    let prog = program(vec![instr("RET", no_ops())], &[]);
    let err = vm.execute(prog).unwrap_err();
    assert_eq!(err, RuntimeError::ControlStackUnderflow);
}

#[test]
fn fork_and_join_are_validated_no_ops() {
    let mut vm = Vm::new(VMConfig::default());
    let prog = program(
        vec![
            instr("PUSH", vec![imm(1)]),
            instr("FORK", vec![label_ref("elsewhere")]),
            instr("JOIN", no_ops()),
            instr("HALT", no_ops()),
            instr("HALT", no_ops()),
        ],
        &[("elsewhere", 4)],
    );
    vm.execute(prog).unwrap();
    assert_eq!(vm.dump_state().data_stack, vec![Value::Int(1)]);
}
