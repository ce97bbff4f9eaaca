/*!
# `PRINT <string> | <variable>`

## Purpose
Output one line to the terminal.

## Remarks
`PRINT` takes a single string literal or a single variable name. Numbers
print without a trailing `.0`. Printing a variable that was never assigned
outputs `Undefined variable: <name>` and the program continues.

## Example
```text
10 PRINT "Hello, World"
20 X = 1.5
30 PRINT X
40 PRINT Y
RUN
Hello, World
1.5
Undefined variable: Y
```

*/
