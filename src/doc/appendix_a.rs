/*!
# Appendix A: Errors

The display only ever shows `Math Error`. The detail is logged when
`DESKCALC_LOG=debug` is set, and `--eval` logs it at the error level.

| Code | Name | Cause |
|-|-|-|
| 2 | SYNTAX ERROR | The expression is malformed or has unknown characters. |
| 5 | DOMAIN ERROR | `log`, `ln` or `sqrt` of a negative, or `1/x` of zero. |
| 7 | OUT OF MEMORY | The expression is too large to evaluate. |
| 11 | DIVISION ERROR | The result is infinite or not a number. |
| 51 | INTERNAL ERROR | Please report these. |

Syntax errors carry the columns of the offending text.
```text
SYNTAX ERROR AT 2..3; UNEXPECTED TOKEN
```
*/
