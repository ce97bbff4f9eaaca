/*!
# `WHILE <expression> <comparison> <expression> : WEND`

## Purpose
Loop while the comparison holds.

## Remarks
`WHILE` and `WEND` are each on their own line. When the comparison is
false, execution continues after the matching `WEND`. Loops may be nested,
and each `WEND` returns to its own `WHILE` even after a `GOTO` or `IF`
leaves an inner loop.
A `WEND` with no open loop is a `WEND WITHOUT WHILE` error and a `WHILE`
with no matching `WEND` is a `WHILE WITHOUT WEND` error.

## Example
```text
10 I = 0
20 WHILE I < 3
30 I = I + 1
40 WEND
50 PRINT I
RUN
3
```

*/
