/*!
# Introductory Tutorial for Desk Calculator

Open a terminal and run `deskcalc`. The display has two rows: the
expression you have committed so far, and the operand you are typing.
Type CTRL-D to exit.
<pre><code>&nbsp;                   [DEG]
&nbsp;
&nbsp;                       0
&nbsp;> █
</code></pre>

Every line you type is a string of keys, pressed left to right.
Digits, `.`, `+ - * / ^`, parentheses and `=` are keys of their own.
Other keys have names in square brackets, like `[sqrt]` or `[m+]`.
Spaces are ignored.

<pre><code>&nbsp;> 3+4+
&nbsp;                   7 +
&nbsp;                       7
&nbsp;> 10=
&nbsp;
&nbsp;                      17
</code></pre>

Pressing an operator after a complete pair of operands computes the
chain so far. That is why `3+4+` shows `7 +`, and why `2+3*4=` gives
`20`. Inside parentheses, or with `--eval`, the usual precedence
applies and `(2+3*4)=` gives `14`.

Functions act on the operand at once.
<pre><code>&nbsp;> 9[sqrt]
&nbsp;
&nbsp;                       3
</code></pre>

Anything that cannot be computed shows `Math Error`. Press `c` or
any digit to start over.
<pre><code>&nbsp;> 5/0=
&nbsp;
&nbsp;              Math Error
</code></pre>

For a single calculation from a script use `--eval`.
```text
$ deskcalc --eval "2+3*4"
14
```
*/
