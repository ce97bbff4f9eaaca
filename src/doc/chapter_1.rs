/*!
# Expressions

All values are 64-bit floating point numbers. Variable names start with
a letter followed by letters, digits or underbars. Names are case
sensitive, so `x` and `X` are different variables. Keywords are not.

```text
LET PI = 3.14
PI2 = PI * 2
```

## Operators

The arithmetic operators are `+`, `-`, `*`, `/` and `%` (remainder).
There is no precedence. An expression is evaluated from left to right.

```text
10 X = 2 + 3 * 4
20 PRINT X
30 X = 2 + (3 * 4)
40 PRINT X
RUN
20
14
```

Dividing by zero, or taking a remainder of zero, is a `DIVISION BY ZERO`
error which stops the program.

## Comparisons

`IF` and `WHILE` compare two expressions with one of `=`, `<>`, `<`, `<=`,
`>` or `>=`.

## Strings

String literals are enclosed in double quotes and can only be printed.

*/
