/*!
# Introductory Tutorial

Begin by opening a terminal and running the executable. If you get the
following, you are ready for this tutorial. Type CTRL-D to exit.
<pre><code>&nbsp;  READY.
&nbsp;> █
</code></pre>

Every statement belongs to a numbered line. Lines are kept in order of
their numbers no matter the order you type them in. Lines marked with
"`>`" are typed by you.

<pre><code>&nbsp;> 20 print "World"
&nbsp;> 10 print "Hello"
&nbsp;> list
&nbsp;  10 print "Hello"
&nbsp;  20 print "World"
&nbsp;> run
&nbsp;  Hello
&nbsp;  World
</code></pre>

Typing a line number that already exists replaces that line. Typing the
line number alone deletes it.

<pre><code>&nbsp;> 20
&nbsp;> run
&nbsp;  Hello
</code></pre>

Programs count and loop with variables, `IF` and `WHILE`.

<pre><code>&nbsp;> new
&nbsp;> 10 N = 1
&nbsp;> 20 WHILE N <= 3
&nbsp;> 30 PRINT N
&nbsp;> 40 N = N + 1
&nbsp;> 50 WEND
&nbsp;> run
&nbsp;  1
&nbsp;  2
&nbsp;  3
</code></pre>

Every run starts with no variables. When something goes wrong the program
stops and the error names the line.

<pre><code>&nbsp;> 60 X = N / 0
&nbsp;> run
&nbsp;  1
&nbsp;  2
&nbsp;  3
&nbsp;  ?DIVISION BY ZERO IN 60 (6..7)
</code></pre>

*/
