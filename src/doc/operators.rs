/*!
# Operators

Operands are listed in push order: the first operand is the deepest.
An arity of "none" means the operator takes what it needs from the
stack itself.

| Operator | Operands | Result |
|----------|----------|--------|
| `+ - * / ^ %` | a b | arithmetic on numbers; `+` joins text when either is a string |
| `xor` | a b | bitwise xor of 32-bit integers |
| `== < > <= >=` | a b | boolean comparison |
| `not` | a | boolean negation of truthiness |
| `and or` | a b | the operand that decides the result |
| `noop` | | nothing |
| `dup` | a | a a |
| `swap` | a b | b a |
| `over` | a b | a b a |
| `pick` | a b c | a b c a |
| `pop` | none | removes the top item if there is one |
| `clear` | none | empties the stack |
| `if` | condition then otherwise | runs the condition, then one branch |
| `eval` | code | runs the code |
| `print` | a | writes a line of output |
| `map` | items... op | applies a one-operand operator to each item |
| `filter` | items... op | keeps items for which the operator is truthy |
| `reduce` | items... op | folds the items with a two-operand operator |
| `range` | start end step | numbers from start towards end, excluding end |
| `define-op` | name arity code | defines an operator; arity is a number or "none" |
| `alias-op` | old new | copies an operator under a new name |
| `del-op` | name | removes an operator |
| `store` | value name | sets a register |
| `load` | name | pushes a register's value, nothing if unset |
| `delete` | name | removes a register |
| `pack` | none | replaces the stack with one string of its source text |

Falsy values are `0`, NaN, `false` and the empty string.
Every other value is truthy.

<pre><code>&nbsp;> 1 2 3 4 '+ reduce
&nbsp;  stack: 10
&nbsp;> clear 1 2 3 pack
&nbsp;  stack: (1 2 3)
&nbsp;> eval
&nbsp;  stack: 1 2 3
</code></pre>

*/
