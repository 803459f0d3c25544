/*!
# Chapter 1: Keys

| Key | Name | Action |
|-|-|-|
| `0`-`9` | | Append a digit. Replaces a lone `0` or a finished result. |
| `.` | | Decimal point, at most once per operand. |
| `+ - * /` | | Commit the operand and operator. Computes a pending pair first. |
| `^` | `[pow]` | Commit the operand and raise to a power. Never computes. |
| `=` or ENTER | | Compute the whole expression. |
| `(` `)` | | Group. A number before `(`, or a number or `(` after `)`, multiplies. |
| `c` ESC | `[ac]` `[clear]` | Reset everything except memory, mode and answer. |
| BACKSPACE | `[del]` | Remove the last character, or clear after a result. |
| | `[neg]` `[+/-]` | Change the sign of the operand. |
| | `[sin]` `[cos]` `[tan]` | Trigonometry in the current angle unit. |
| | `[log]` `[ln]` | Common and natural logarithm. |
| | `[sqr]` `[sqrt]` `[inv]` | Square, square root, reciprocal. |
| | `[pi]` `[ans]` | Recall π or the last computed result. |
| | `[exp]` | Start an exponent, as in `1.5[exp]3` for 1500. |
| | `[m+]` `[m-]` `[mr]` `[mc]` | Memory add, subtract, recall and clear. |
| | `[mode]` | Cycle DEG, RAD and GRAD. |
| | `[shift]` | Toggle the shift indicator. |

Two operators in a row keep the last one: `3+*2=` is `6`.

Inside parentheses the chain is not computed early. The group is
computed when it closes and its value becomes the operand.
<pre><code>&nbsp;> 2*(3+4
&nbsp;              2 × (3 +
&nbsp;                       4
&nbsp;> )=
&nbsp;
&nbsp;                      14
</code></pre>
*/
