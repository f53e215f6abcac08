/*!
# Statements

Each statement ends with one or more newlines.

## `PRINT <expression>` or `PRINT "<text>"`
Print a number with two decimals, or a line of text. Text may not contain
tabs, backslashes, carriage returns or `%`.

## `LET <name> = <expression>`
Assign a value. The first `LET` of a name declares the variable.

## `INPUT <name>`
Read a number from standard input. If what was typed is not a number the
variable becomes `0` and the typed word is thrown away.

## `IF <comparison> THEN` ... `ENDIF`
Run the enclosed statements when the comparison holds. A comparison needs at
least one of `==`, `!=`, `<`, `<=`, `>`, `>=`; `IF a THEN` is a syntax error.

## `WHILE <comparison> REPEAT` ... `ENDWHILE`
Run the enclosed statements for as long as the comparison holds.

## `LABEL <name>` and `GOTO <name>`
Mark a place in the program and jump to it. A label can be declared only
once but may be used by `GOTO` before its declaration.

```text
GOTO skip
PRINT "never printed"
LABEL skip
```

## Names
Variable and label names start with a letter and continue with letters and
digits. Names the generated C needs for itself are rejected: C keywords such
as `int` or `while`, and `main`, `printf` and `scanf`.

## Expressions
`+`, `-`, `*` and `/` with the usual precedence, an optional leading sign on
each operand, numbers like `12` or `0.5`, and variable names. There are no
parentheses.

*/
