use vm_core::Operand;

#[test]
fn parses_a_simple_program_with_a_forward_label() {
    let source = "PUSH #1\nJMP end\nPUSH #2\nend:\nPUSH #3\nHALT";
    let program = vm_asm::parse(source).expect("valid program should parse");
    // PUSH #1, JMP end, PUSH #2, PUSH #3, HALT: the label itself adds no
    // instruction, it just records the index of the one that follows it.
    assert_eq!(program.instructions.len(), 5);
    assert_eq!(program.instructions[0].opcode, "PUSH");
    assert_eq!(program.instructions[1].opcode, "JMP");
    assert_eq!(program.get_label("end"), Some(3));
}

#[test]
fn label_at_end_of_file_points_past_the_last_instruction() {
    let source = "PUSH #1\nfin:";
    let program = vm_asm::parse(source).unwrap();
    assert_eq!(program.instructions.len(), 1);
    assert_eq!(program.get_label("fin"), Some(1));
}

#[test]
fn empty_source_parses_to_an_empty_program() {
    let program = vm_asm::parse("").unwrap();
    assert!(program.instructions.is_empty());
    assert!(program.labels.is_empty());
}

#[test]
fn comments_are_ignored() {
    let source = "; a comment\nPUSH #1 ; trailing comment\nHALT";
    let program = vm_asm::parse(source).unwrap();
    assert_eq!(program.instructions.len(), 2);
}

#[test]
fn opcodes_are_canonicalized_to_uppercase() {
    let program = vm_asm::parse("push #1\nhalt").unwrap();
    assert_eq!(program.instructions[0].opcode, "PUSH");
    assert_eq!(program.instructions[1].opcode, "HALT");
}

#[test]
fn duplicate_labels_are_a_parse_error() {
    let source = "a:\nPUSH #1\na:\nHALT";
    let err = vm_asm::parse(source).unwrap_err();
    assert!(matches!(err, vm_asm::ParseError::DuplicateLabel(name) if name == "a"));
}

#[test]
fn unknown_opcode_is_not_a_parse_error() {
    // opcode-table membership is a VM/load_program concern, not a parser one.
    let result = vm_asm::parse("NOTANOPCODE #1\nHALT");
    assert!(result.is_ok());
}

#[test]
fn parse_instruction_parses_a_single_line() {
    let instruction = vm_asm::parse_instruction("ADD").unwrap();
    assert_eq!(instruction.opcode, "ADD");
    assert!(instruction.operands.is_empty());
}

#[test]
fn validate_syntax_rejects_malformed_operands() {
    assert!(vm_asm::validate_syntax("PUSH #1\nHALT"));
    assert!(!vm_asm::validate_syntax("PUSH #\nHALT"));
}

#[test]
fn operand_round_trip_register() {
    let op = Operand::Register(7);
    let instr = vm_asm::parse_instruction(&format!("PUSH {}", op)).unwrap();
    assert_eq!(instr.operands[0], op);
}

#[test]
fn operand_round_trip_immediate_negative() {
    let op = Operand::Immediate(-12);
    let instr = vm_asm::parse_instruction(&format!("PUSH {}", op)).unwrap();
    assert_eq!(instr.operands[0], op);
}

#[test]
fn operand_round_trip_address() {
    let op = Operand::Address("1a2b".to_string());
    let instr = vm_asm::parse_instruction(&format!("STORE {}", op)).unwrap();
    assert_eq!(instr.operands[0], op);
}

#[test]
fn operand_round_trip_label_ref() {
    let op = Operand::LabelRef("loop_start".to_string());
    let instr = vm_asm::parse_instruction(&format!("JMP {}", op)).unwrap();
    assert_eq!(instr.operands[0], op);
}

#[test]
fn string_literal_escapes_are_decoded() {
    let instr = vm_asm::parse_instruction(r#"LLMGEN "line one\nline two""#).unwrap();
    match &instr.operands[0] {
        Operand::StringLiteral(s) => assert_eq!(s, "line one\nline two"),
        other => panic!("expected a string literal, got {:?}", other),
    }
}

#[test]
fn instruction_with_an_address_operand_parses() {
    let instr = vm_asm::parse_instruction("STORE @ff").unwrap();
    assert_eq!(instr.operands, vec![Operand::Address("ff".to_string())]);
}
