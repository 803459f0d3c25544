/*!
# Chapter 2: Expressions

`--eval` and the `=` key hand an infix expression to the evaluator.
Only numbers, `+ - * / ^`, `×`, `÷`, parentheses and spaces are allowed.

| Operators | Precedence | Associativity |
|-|-|-|
| unary `-` `+` | highest | |
| `^` | | right |
| `* /` `×` `÷` | | left |
| `+ -` | lowest | left |

So `2^3^2` is 512 and `-2^2` is 4.

A number directly before `(`, or a `)` directly before a number or
`(`, multiplies: `2(3)` is 6 and `(1+1)(2+2)` is 8.

Numbers may use scientific notation: `1.5E3`, `2e-4`.

## Results

Results show up to 12 significant digits with trailing zeros removed.
Very large or very small magnitudes switch to scientific notation
with 9 significant digits.

| Value | Display |
|-|-|
| `1/3` | `0.333333333333` |
| `0.1+0.2` | `0.3` |
| `123456789*1000` | `1.23456789e+11` |
| `1/3000000` | `3.33333333e-7` |
*/
