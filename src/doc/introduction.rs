/*!
# Introductory Tutorial for Fishy

Fishy programs live in files ending in `.fishy`. Write one with any text
editor. Every statement sits on its own line and starts with a keyword.
Keywords are upper case; `print` is a variable name, not a statement.

```text
# countdown.fishy
LET n = 3
WHILE n > 0 REPEAT
    PRINT n
    LET n = n - 1
ENDWHILE
PRINT "liftoff"
```

Compile it by giving the file to `fishy`. The result is always written to
`out.c` in the current directory. Hand that to any C compiler.

<pre><code>&nbsp;$ fishy countdown.fishy
&nbsp;Fishy Compiler
&nbsp;Compiling completed.
&nbsp;$ cc out.c -o countdown
&nbsp;$ ./countdown
&nbsp;3.00
&nbsp;2.00
&nbsp;1.00
&nbsp;liftoff
</code></pre>

All numbers are floating point and always print with two decimals.
Text after `#` up to the end of the line is a comment.

When something is wrong, compilation stops at the first problem and `out.c`
is left untouched. The report names the line and the columns of the
offending token.

<pre><code>&nbsp;$ fishy broken.fishy
&nbsp;UNDECLARED VARIABLE IN 2 (6..7); x is referenced before assignment
</code></pre>

Variables come into existence the first time they are given a value with
`LET` or `INPUT`. Labels are different: a `GOTO` may name a label that is
declared further down, and the check that every label exists happens once
the whole file has been read.

*/
