mod common;
use common::*;
use fishy::lang::{ErrorCode, ErrorKind};

#[test]
fn test_print_string() {
    assert_eq!(
        compile("PRINT \"hello, world\"\n"),
        program(&[], &["printf(\"hello, world\\n\");"])
    );
}

#[test]
fn test_print_expression() {
    assert_eq!(
        compile("LET a = 1\nPRINT a\n"),
        program(
            &["float a;"],
            &["a = 1.0;", "printf(\"%.2f\\n\", (float)(a));"]
        )
    );
}

#[test]
fn test_if() {
    assert_eq!(
        compile("LET a = 5\nIF a >= 5 THEN\nPRINT \"big\"\nENDIF\n"),
        program(
            &["float a;"],
            &["a = 5.0;", "if(a >= 5.0){", "printf(\"big\\n\");", "}"]
        )
    );
}

#[test]
fn test_while() {
    assert_eq!(
        compile("LET n = 3\nWHILE n > 0 REPEAT\nLET n = n - 1\nENDWHILE\n"),
        program(
            &["float n;"],
            &["n = 3.0;", "while(n > 0.0){", "n = n - 1.0;", "}"]
        )
    );
}

#[test]
fn test_empty_bodies() {
    assert_eq!(
        compile("LET a = 0\nIF a == 0 THEN\nENDIF\nWHILE a != 0 REPEAT\nENDWHILE\n"),
        program(
            &["float a;"],
            &["a = 0.0;", "if(a == 0.0){", "}", "while(a != 0.0){", "}"]
        )
    );
}

#[test]
fn test_nested_blocks() {
    let src = "LET i = 0\n\
               WHILE i < 3 REPEAT\n\
               IF i == 1 THEN\n\
               PRINT i\n\
               ENDIF\n\
               LET i = i + 1\n\
               ENDWHILE\n";
    assert_eq!(
        compile(src),
        program(
            &["float i;"],
            &[
                "i = 0.0;",
                "while(i < 3.0){",
                "if(i == 1.0){",
                "printf(\"%.2f\\n\", (float)(i));",
                "}",
                "i = i + 1.0;",
                "}",
            ]
        )
    );
}

#[test]
fn test_input() {
    assert_eq!(
        compile("INPUT x\n"),
        program(
            &["float x;"],
            &[
                "if(0 == scanf(\"%f\", &x)) {",
                "x = 0;",
                "scanf(\"%*s\");",
                "}",
            ]
        )
    );
}

#[test]
fn test_blank_lines_and_comments() {
    assert_eq!(
        compile("\n\n# greeting\nPRINT \"hi\" # inline\n\n\n"),
        program(&[], &["printf(\"hi\\n\");"])
    );
}

#[test]
fn test_empty_program() {
    assert_eq!(compile(""), program(&[], &[]));
}

#[test]
fn test_missing_endif() {
    let e = compile_err("LET a = 1\nIF a > 0 THEN\nPRINT a\n");
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.kind(), ErrorKind::Grammar);
    assert!(e.to_string().contains("expected ENDIF, found end of input"));
}

#[test]
fn test_missing_endwhile() {
    let e = compile_err("LET a = 1\nWHILE a > 0 REPEAT\n");
    assert!(e.to_string().contains("expected ENDWHILE"));
}

#[test]
fn test_wrong_closing_word() {
    let e = compile_err("LET a = 1\nIF a > 0 THEN\nENDWHILE\n");
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.line_number(), Some(3));
    assert!(e.to_string().contains("expected ENDIF, found ENDWHILE"));
    let e = compile_err("LET a = 1\nWHILE a > 0 REPEAT\nENDIF\n");
    assert!(e.to_string().contains("expected ENDWHILE, found ENDIF"));
}

#[test]
fn test_stray_closing_word_at_top_level() {
    let e = compile_err("ENDWHILE\n");
    assert!(e.to_string().contains("invalid statement at ENDWHILE"));
}

#[test]
fn test_if_needs_comparison() {
    let e = compile_err("LET a = 1\nIF a THEN\nENDIF\n");
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert!(e.to_string().contains("expected comparison operator"));
}

#[test]
fn test_if_needs_then() {
    let e = compile_err("LET a = 1\nIF a > 0\nENDIF\n");
    assert!(e.to_string().contains("expected THEN, found newline"));
}

#[test]
fn test_let_needs_equal() {
    let e = compile_err("LET a 1\n");
    assert!(e.to_string().contains("expected =, found 1"));
}

#[test]
fn test_let_needs_identifier() {
    let e = compile_err("LET 1 = 1\n");
    assert!(e.to_string().contains("expected identifier, found 1"));
}

#[test]
fn test_print_string_in_expression() {
    let e = compile_err("LET a = \"x\"\n");
    assert_eq!(e.code(), ErrorCode::SyntaxError);
}

#[test]
fn test_missing_operand() {
    let e = compile_err("LET a = 1 +\n");
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert!(e.to_string().contains("unexpected token at newline"));
}

#[test]
fn test_invalid_statement() {
    let e = compile_err("a = 1\n");
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.column(), 0..1);
    assert!(e.to_string().contains("invalid statement at a (identifier)"));
}

#[test]
fn test_lexical_error_surfaces() {
    let e = compile_err("LET a = 1\nPRINT \"50%\"\n");
    assert_eq!(e.kind(), ErrorKind::Lexical);
    assert_eq!(e.line_number(), Some(2));
}
