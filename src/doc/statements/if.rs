/*!
# `IF <expression> <comparison> <expression> THEN <line number>`

## Purpose
Jump to a line when a comparison holds.

## Remarks
The comparisons are `=`, `<>`, `<`, `<=`, `>` and `>=`. When the comparison
is false execution continues with the next line. When it is true and the
line does not exist, the program ends without an error. There is no
`ELSE`.

## Example
```text
10 A = 10
20 PRINT A
30 A = A + 10
40 IF A < 30 THEN 20
RUN
10
20
```

*/
