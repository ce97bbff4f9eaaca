/*!
# `END`

## Purpose
Stop the program.

## Remarks
A program also stops after its last line runs. The variables are cleared
when the run ends.

## Example
```text
10 PRINT "BEFORE"
20 END
30 PRINT "NEVER"
RUN
BEFORE
```

*/
