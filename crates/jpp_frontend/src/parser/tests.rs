use jpp_ir::ast::*;
use jpp_ir::Type;

use super::ParseError;
use crate::parse_source;

fn parse_ok(source: &str) -> Program {
    match parse_source(source) {
        Ok(program) => program,
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse_source(source) {
        Ok(program) => panic!("unexpectedly parsed {source:?}: {program:?}"),
        Err(err) => err,
    }
}

fn test_parses(source: &str, should_parse: bool) {
    match (parse_source(source), should_parse) {
        (Err(err), true) => panic!("failed to parse: {source:?}: {err}"),
        (Ok(_), false) => panic!("unexpectedly parsed: {source:?}"),
        _ => {}
    }
}

#[test]
fn return_literal() {
    insta::assert_debug_snapshot!(parse_ok("main() -> uint8 { return 5; }"), @r###"
    Program {
        functions: [
            FunctionDecl {
                name: "main",
                return_type: U8,
                body: [
                    Return(
                        ReturnStatement {
                            value: IntegerLiteral(
                                IntegerLiteral {
                                    value: 5,
                                    line: 1,
                                },
                            ),
                            line: 1,
                        },
                    ),
                ],
                line: 1,
            },
        ],
    }
    "###);
}

#[test]
fn two_functions_are_both_kept() {
    let program = parse_ok("one() -> uint8 {\n  return 1;\n}\n\ntwo() -> int32 {\n  return 2;\n}\n");

    let names: Vec<_> = program.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["one", "two"]);

    let two = program.function("two").unwrap();
    assert_eq!(two.return_type, Type::I32);
    assert_eq!(two.line, 5);
    assert_eq!(
        two.body,
        [Stmt::Return(ReturnStatement {
            value: Expr::IntegerLiteral(IntegerLiteral { value: 2, line: 6 }),
            line: 6,
        })]
    );
}

#[test]
fn functions_on_one_line() {
    // several closing braces on one line used to confuse function splitting
    let program = parse_ok("a() -> uint8 { return 1; } b() -> uint8 { return 2; }");
    assert_eq!(program.functions.len(), 2);
}

#[test]
fn empty_source() {
    assert_eq!(parse_ok(""), Program::default());
    assert_eq!(parse_ok("\n  \n"), Program::default());
}

#[test]
fn empty_body() {
    let program = parse_ok("main() -> uint8 {}");
    assert!(program.functions[0].body.is_empty());
}

#[test]
fn several_statements() {
    let program = parse_ok("main() -> uint8 { return 1; return 2; }");
    assert_eq!(program.functions[0].body.len(), 2);
}

#[test]
fn missing_semicolon() {
    assert_eq!(
        parse_err("main() -> uint8 { return 5 }"),
        ParseError::Expected {
            expected: "`;`".to_owned(),
            found: "`}`".to_owned(),
            line: 1,
        }
    );
}

#[test]
fn missing_semicolon_reports_its_line() {
    let err = parse_err("main() -> uint8 {\n    return 5\n}\n");
    assert_eq!(err.line(), 3);
    assert_eq!(err.to_string(), "line 3: expected `;`, found `}`");
}

#[test]
fn unrecognized_character() {
    assert_eq!(
        parse_err("main() -> uint8 { return @; }"),
        ParseError::Unrecognized {
            lexeme: "@".to_owned(),
            line: 1,
        }
    );
}

#[test]
fn unrecognized_character_after_function() {
    // the error isn't ignored just because a complete function came first
    let err = parse_err("main() -> uint8 { return 0; }\n@");
    assert!(matches!(err, ParseError::Unrecognized { line: 2, .. }));
}

#[test]
fn integer_too_large() {
    assert_eq!(
        parse_err("main() -> uint64 { return 18446744073709551616; }"),
        ParseError::IntegerTooLarge {
            lexeme: "18446744073709551616".to_owned(),
            line: 1,
        }
    );
}

#[test]
fn out_of_range_literal_still_parses() {
    // range checking happens later, against the declared return type
    let program = parse_ok("main() -> uint8 { return 300; }");
    assert_eq!(
        program.functions[0].body[0],
        Stmt::Return(ReturnStatement {
            value: Expr::IntegerLiteral(IntegerLiteral {
                value: 300,
                line: 1
            }),
            line: 1,
        })
    );
}

#[test]
fn unknown_return_type() {
    assert_eq!(
        parse_err("main() -> int { return 0; }"),
        ParseError::Expected {
            expected: "a return type".to_owned(),
            found: "identifier `int`".to_owned(),
            line: 1,
        }
    );
}

#[test]
fn unclosed_body() {
    assert_eq!(
        parse_err("main() -> uint8 { return 0;"),
        ParseError::Expected {
            expected: "a statement".to_owned(),
            found: "end of input".to_owned(),
            line: 1,
        }
    );
}

#[test]
fn missing_retval() {
    assert_eq!(
        parse_err("main() -> uint8 { return; }"),
        ParseError::Expected {
            expected: "an integer literal".to_owned(),
            found: "`;`".to_owned(),
            line: 1,
        }
    );
}

#[test]
fn multi_digit() {
    test_parses("main() -> uint8 { return 100; }", true);
}

#[test]
fn newlines() {
    test_parses("\nmain\n(\n)\n->\nuint8\n{\nreturn\n0\n;\n}", true);
}

#[test]
fn no_newlines() {
    test_parses("main()->uint8{return 0;}", true);
}

#[test]
fn spaces() {
    test_parses("  main  (  )  ->  uint8  {  return  0  ;  }", true);
}

#[test]
fn missing_paren() {
    test_parses("main( -> uint8 { return 0; }", false);
}

#[test]
fn missing_arrow() {
    test_parses("main() uint8 { return 0; }", false);
}

#[test]
fn no_brace() {
    test_parses("main() -> uint8 return 0; }", false);
}

#[test]
fn no_space() {
    test_parses("main() -> uint8 { return0; }", false);
}

#[test]
fn wrong_case() {
    test_parses("main() -> uint8 { RETURN 0; }", false);
}

#[test]
fn parameters_not_supported() {
    test_parses("main(a) -> uint8 { return 0; }", false);
}

#[test]
fn keyword_as_name() {
    test_parses("return() -> uint8 { return 0; }", false);
}
