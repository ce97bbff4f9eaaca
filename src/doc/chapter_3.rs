/*!
# Console Commands

Commands are typed without a line number and act on the whole program.

| Command | |
|---|---|
| `RUN` | Run the program from its first line. |
| `LIST` | Show the program. Errors are underlined. |
| `NEW` | Erase the program. |
| `SAVE name` | Write the program to `name.txt` in the saves directory. |
| `LOAD name` | Replace the program with `name.txt`. |
| `DELETE name` | Remove `name.txt`. |
| `FILES` | Show the saved programs. |
| `TRON` / `TROFF` | Turn the line trace on and off. |
| `END` / `SYSTEM` | Leave the console. |

The saves directory is `saves` unless `--saves <DIR>` is given. A saved
program is plain text with one `<line number> <statement>` per line.

Running `basic <FILE>` runs a saved program without starting the console.
The exit status is non-zero when the program stops on an error.

Stop a running program with CTRL-C. It stops with `BREAK IN <line>` before
the next line runs.

*/
