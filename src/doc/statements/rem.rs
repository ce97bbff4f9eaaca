/*!
# `REM <remark>`

## Purpose
Comment the program.

## Remarks
Everything after `REM` is ignored.

*/
