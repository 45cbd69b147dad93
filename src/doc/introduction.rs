/*!
# Introductory Tutorial for stacker

Start the `stacker` executable with no arguments to get a prompt. Type
CTRL-D to exit. CTRL-C clears the line you are typing.
<pre><code>&nbsp;> █
</code></pre>

Everything you type is a list of words separated by whitespace. A number,
a boolean, a string in double quotes or a name starting with `'` is a value
and is pushed onto the stack. A word naming an operator runs that operator,
which takes its operands off the top of the stack and pushes its results.
After each line the whole stack is shown, bottom first.

<pre><code>&nbsp;> 3 2 -
&nbsp;  stack: 1
&nbsp;> 10 *
&nbsp;  stack: 10
&nbsp;> clear
&nbsp;  stack:
</code></pre>

Operands are taken in the order they were pushed, so `3 2 -` is three minus
two. Text in parentheses is quoted code. It is pushed as a single value and
only runs when an operator asks for it.

<pre><code>&nbsp;> (1 2 +)
&nbsp;  stack: (1 2 +)
&nbsp;> eval
&nbsp;  stack: 3
&nbsp;> 0 (1) (2) if
&nbsp;  stack: 3 2
</code></pre>

New operators are defined from quoted code with `define-op`, giving a name,
the number of operands and the code. The operands are placed back on the
stack before the code runs.

<pre><code>&nbsp;> clear 'sq 1 (dup *) define-op
&nbsp;  stack:
&nbsp;> 7 sq
&nbsp;  stack: 49
</code></pre>

Registers hold values outside the stack. `store` takes a value and a name,
`load` pushes the value back. Names starting with `@` are locals: every time
a piece of code runs its locals are renamed so that recursive operators do
not share them.

<pre><code>&nbsp;> clear 'fact 1 (@n store (@n load 1 <=) (1) (@n load 1 - fact @n load *) if) define-op
&nbsp;  stack:
&nbsp;> 5 fact
&nbsp;  stack: 120
</code></pre>

Mistakes are reported with the offending words underlined.

<pre><code>&nbsp;> 1 2 3 'incc map
&nbsp;  <b>not an operator at 6..11: "incc" is not an operator</b>
&nbsp;  1 2 3 <u>'incc</u> map
</code></pre>

Programs can also be run from a file with `stacker program.stk` or from the
command line with `stacker -e "1 2 +"`. The value left on top of the stack
is printed; `--stack` prints the whole stack and the registers instead.
Set `STACKER_LOG=debug` to watch evaluation.

*/
