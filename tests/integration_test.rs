use std::rc::Rc;

use helper::array;
use helper::binary;
use helper::compile_to_tmp;
use helper::context_with;
use helper::float;
use helper::generate_words;
use helper::int;
use helper::name;
use helper::program;
use helper::var;
use helper::variable;
use indoc::indoc;
use stackc::compiler::config::Config;
use stackc::compiler::context::Context;
use stackc::compiler::err::CompileError;
use stackc::compiler::syntax::ast::crumb::Declaration;
use stackc::compiler::syntax::ast::expression::Expression;
use stackc::compiler::syntax::ast::operator::Binary;
use stackc::compiler::syntax::ast::operator::Compound;
use stackc::compiler::syntax::ast::operator::Unary;
use stackc::compiler::syntax::ast::statement::IfDetail;
use stackc::compiler::syntax::ast::statement::Statement;
use stackc::compiler::syntax::ast::ty::DataType;
use stackc::generate;

mod helper;

#[test]
fn test_assign_sum() {
    let mut context = context_with(&[("x", DataType::Integer)]);
    let program = program(vec![Statement::Assign(
        name("x"),
        binary(Binary::Add, DataType::Integer, int("1"), int("2")),
    )]);

    let (_, module) = compile_to_tmp(&mut context, &program);
    let expected = indoc! {"
        2
          61 00 00 00 00 12 00 01
          12 00 02 20 11 00 00 00
        0
        0
        0
    "};
    assert_eq!(module.unwrap(), expected);
    assert!(context.symbol_table.lookup("x").unwrap().flags.initialized);
}

#[test]
fn test_declaration_list() {
    let mut context = Context::new();
    let declarations = array(vec![
        variable("a", DataType::Integer),
        Declaration::Group(array(vec![
            variable("b", DataType::Float),
            variable("c", DataType::Boolean),
        ])),
    ]);
    let words = generate_words(&mut context, &program(vec![Statement::Declare(declarations)]));

    #[rustfmt::skip]
    let expected = [
        "10", "00", "00", "00", "03",
        "61", "00", "00", "00", "00", "12", "00", "00", "11",
        "61", "00", "00", "00", "01", "12", "00", "00", "24", "11",
        "61", "00", "00", "00", "02", "12", "00", "00", "11",
    ];
    assert_eq!(words, expected);

    let symbol_table = &context.symbol_table;
    for (offset, identifier) in ["a", "b", "c"].into_iter().enumerate() {
        let entry = symbol_table.lookup(identifier).unwrap();
        assert_eq!(entry.offset, Some(u32::try_from(offset).unwrap()));
        assert!(entry.flags.initialized);
    }
    assert_eq!(*symbol_table.lookup_by_offset(1).unwrap().data_type(), DataType::Float);
    assert_eq!(symbol_table.allocated(), 3);
}

#[test]
fn test_consecutive_declarations_keep_bumping() {
    let mut context = Context::new();
    let program = program(vec![
        Statement::Declare(array(vec![variable("a", DataType::Integer)])),
        Statement::Declare(array(vec![
            variable("b", DataType::Integer),
            variable("c", DataType::Integer),
        ])),
    ]);
    generate_words(&mut context, &program);

    let offsets = ["a", "b", "c"].map(|identifier| context.symbol_table.lookup(identifier).unwrap().offset);
    assert_eq!(offsets, [Some(0), Some(1), Some(2)]);
}

#[test]
fn test_if_backpatch() {
    let mut context = context_with(&[("x", DataType::Integer)]);
    let program = program(vec![Statement::If(IfDetail {
        condition: binary(Binary::GreaterThan, DataType::Integer, var("x"), int("0")),
        true_body: Rc::new(Statement::Print(var("x"))),
        false_body: None,
    })]);
    let config = Config { base_address: 100 };
    let buffer = generate(&mut context, &program, &config).unwrap();

    #[rustfmt::skip]
    let expected = [
        "62", "00", "00", "01", "23",
        "63", "00", "00", "00", "00", "12", "00", "00", "21", "30",
        "02",
        "63", "00", "00", "00", "00", "52", "53",
    ];
    assert_eq!(helper::words(&buffer), expected);
    assert_eq!(buffer.operand_at(1), Some(buffer.pc()));
    assert_eq!(buffer.pc(), 123);
}

#[test]
fn test_nested_if_targets() {
    let mut context = context_with(&[("x", DataType::Integer), ("flag", DataType::Boolean)]);
    let inner = Statement::If(IfDetail {
        condition: var("flag"),
        true_body: Rc::new(Statement::Input(name("x"))),
        false_body: None,
    });
    let outer = Statement::If(IfDetail {
        condition: binary(Binary::Equal, DataType::Integer, var("x"), int("7")),
        true_body: Rc::new(Statement::Block(array(vec![inner, Statement::Print(var("x"))]))),
        false_body: None,
    });
    let buffer = generate(&mut context, &program(vec![outer]), &Config::default()).unwrap();

    // outer: LV0(5) LV1 x(5) LH 7(3) SUB EQ BF = 16 words, then the inner if
    // inner: LV0(5) LV1 flag(5) BF = 11 words, then LA1 x(5) READI ST = 7 words
    assert_eq!(buffer.operand_at(17), Some(34));
    assert_eq!(buffer.operand_at(1), Some(buffer.pc()));
    assert_eq!(buffer.len(), 34 + 7);
}

#[test]
fn test_print_float_literal() {
    let mut context = Context::new();
    let words = generate_words(&mut context, &program(vec![Statement::Print(float("3.14"))]));

    #[rustfmt::skip]
    let expected = [
        "12", "00", "14", "24",
        "12", "00", "100", "23",
        "12", "00", "03", "20",
        "52", "53",
    ];
    assert_eq!(words, expected);
}

#[test]
fn test_compound_assign_on_float() {
    let mut context = context_with(&[("f", DataType::Float), ("g", DataType::Float)]);
    let program = program(vec![
        Statement::CompoundAssign(Compound::Add, name("f"), int("2")),
        Statement::CompoundAssign(Compound::Multiply, name("f"), var("g")),
    ]);
    let words = generate_words(&mut context, &program);

    #[rustfmt::skip]
    let expected = [
        "61", "00", "00", "00", "00", "63", "00", "00", "00", "00", "12", "00", "02", "24", "20", "11",
        "61", "00", "00", "00", "00", "63", "00", "00", "00", "00", "63", "00", "00", "00", "01", "22", "11",
    ];
    assert_eq!(words, expected);
}

#[test]
fn test_input_by_type() {
    let mut context = context_with(&[("n", DataType::Integer), ("r", DataType::Float)]);
    let program = program(vec![Statement::Input(name("n")), Statement::Input(name("r"))]);
    let words = generate_words(&mut context, &program);

    #[rustfmt::skip]
    let expected = [
        "61", "00", "00", "00", "00", "50", "11",
        "61", "00", "00", "00", "01", "51", "11",
    ];
    assert_eq!(words, expected);
}

#[test]
fn test_boolean_and_unary() {
    let mut context = context_with(&[("b", DataType::Boolean), ("n", DataType::Integer)]);
    let program = program(vec![
        Statement::Assign(
            name("b"),
            binary(
                Binary::LogicalAnd,
                DataType::Boolean,
                Rc::new(Expression::BoolLiteral(true)),
                Rc::new(Expression::Unary(Unary::LogicalNot, var("b"))),
            ),
        ),
        Statement::Assign(name("n"), Rc::new(Expression::Unary(Unary::Negative, var("n")))),
    ]);
    let words = generate_words(&mut context, &program);

    #[rustfmt::skip]
    let expected = [
        "61", "00", "00", "00", "00", "13", "63", "00", "00", "00", "00", "42", "40", "11",
        "61", "00", "00", "00", "01", "12", "00", "00", "63", "00", "00", "00", "01", "21", "11",
    ];
    assert_eq!(words, expected);
}

#[test]
fn test_unsupported_node_writes_nothing() {
    let mut context = Context::new();
    let call = Rc::new(Expression::Call(name("f"), array(vec![])));
    let program = program(vec![Statement::Print(call)]);

    let (path, result) = compile_to_tmp(&mut context, &program);
    assert!(matches!(result, Err(CompileError::UnsupportedNodeKind("call"))));
    assert!(!path.exists());
}

#[test]
fn test_else_is_unsupported() {
    let mut context = context_with(&[("x", DataType::Integer)]);
    let program = program(vec![Statement::If(IfDetail {
        condition: Rc::new(Expression::BoolLiteral(true)),
        true_body: Rc::new(Statement::Print(var("x"))),
        false_body: Some(Rc::new(Statement::Print(int("0")))),
    })]);

    let result = generate(&mut context, &program, &Config::default());
    assert!(matches!(result, Err(CompileError::UnsupportedNodeKind("else"))));
}

#[test]
fn test_array_declaration_is_unsupported() {
    let mut context = Context::new();
    let array_type = DataType::Array {
        element: Rc::new(DataType::Integer),
        length: 4,
    };
    let program = program(vec![Statement::Declare(array(vec![variable("v", array_type)]))]);

    let result = generate(&mut context, &program, &Config::default());
    assert!(matches!(
        result,
        Err(CompileError::UnsupportedNodeKind("array declaration"))
    ));
}

#[test]
fn test_undeclared_variable() {
    let mut context = Context::new();
    let program = program(vec![Statement::Print(var("ghost"))]);

    let (path, result) = compile_to_tmp(&mut context, &program);
    assert!(matches!(result, Err(CompileError::UndeclaredVariable(ref id)) if id.as_str() == "ghost"));
    assert!(!path.exists());
}

#[test]
fn test_literal_out_of_range() {
    let mut context = Context::new();
    let program = program(vec![Statement::Print(int("40000"))]);

    let result = generate(&mut context, &program, &Config::default());
    let Err(error) = result else {
        panic!("40000 must not fit in a halfword");
    };
    assert!(error.is_input_error());
    assert!(matches!(error, CompileError::LiteralOutOfRange(40000)));
}

#[test]
fn test_negated_integer_into_float() {
    let mut context = context_with(&[("f", DataType::Float), ("g", DataType::Float)]);
    let negative = |operand| Rc::new(Expression::Unary(Unary::Negative, operand));
    let program = program(vec![
        Statement::Assign(name("f"), negative(int("2"))),
        Statement::CompoundAssign(Compound::Add, name("f"), negative(int("2"))),
        Statement::Assign(name("f"), negative(var("g"))),
    ]);
    let words = generate_words(&mut context, &program);

    #[rustfmt::skip]
    let expected = [
        "61", "00", "00", "00", "00", "12", "255", "254", "24", "11",
        "61", "00", "00", "00", "00", "63", "00", "00", "00", "00", "12", "255", "254", "24", "20", "11",
        "61", "00", "00", "00", "00", "12", "00", "00", "24", "63", "00", "00", "00", "01", "21", "11",
    ];
    assert_eq!(words, expected);
}

#[test]
fn test_negated_float_operand_of_float_sum() {
    let mut context = context_with(&[("f", DataType::Float)]);
    let sum = binary(
        Binary::Add,
        DataType::Float,
        var("f"),
        Rc::new(Expression::Unary(Unary::Negative, int("1"))),
    );
    let words = generate_words(&mut context, &program(vec![Statement::Print(sum)]));

    #[rustfmt::skip]
    let expected = [
        "63", "00", "00", "00", "00", "12", "255", "255", "24", "20", "52", "53",
    ];
    assert_eq!(words, expected);
}

#[test]
fn test_smallest_halfword_literal() {
    let mut context = context_with(&[("n", DataType::Integer)]);
    let program = program(vec![Statement::Assign(
        name("n"),
        Rc::new(Expression::Unary(Unary::Negative, int("32768"))),
    )]);
    let words = generate_words(&mut context, &program);

    assert_eq!(words, ["61", "00", "00", "00", "00", "12", "128", "00", "11"]);
}

#[test]
fn test_record_declaration_is_unsupported() {
    let mut context = Context::new();
    let record_type = DataType::Record {
        name: name("point"),
        fields: array(vec![]),
    };
    let program = program(vec![Statement::Declare(array(vec![
        variable("origin", DataType::Integer),
        variable("p", record_type),
    ]))]);

    let result = generate(&mut context, &program, &Config::default());
    assert!(matches!(
        result,
        Err(CompileError::UnsupportedNodeKind("record declaration"))
    ));
}
