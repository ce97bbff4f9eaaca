/*!
# `[LET] <variable> = <expression>`

## Purpose
Store the value of an expression in a variable.

## Remarks
The word `LET` is optional. Expressions are evaluated strictly left to right,
so `2 + 3 * 4` is 20. Use parentheses to group. An error while evaluating
leaves the variable as it was.

## Example
```text
10 LET X = 2 + 3 * 4
20 Y = 2 + (3 * 4)
30 PRINT X
40 PRINT Y
RUN
20
14
```

*/
