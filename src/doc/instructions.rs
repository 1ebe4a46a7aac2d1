/*!
# Instructions

Binary operations pop the right operand first, then the left.
The value pushed first is always on the left: `const 10`, `const 2`, `sub`
leaves `8`.

Branches compare the other way round: the top value is on the left.
`const 1`, `const 2`, `lt target` does not branch because 2 is not less
than 1.

| Mnemonic | Operands | Effect |
|----------|----------|--------|
| `halt`   |          | Stop execution. |
| `const`  | value    | Push the value. |
| `store`  | address  | Pop into stack slot `capacity - address - 1`. |
| `fetch`  | address  | Push a copy of stack slot `capacity - address - 1`. |
| `gstore` | address  | Pop into global slot `512 - address - 1`. |
| `gfetch` | address  | Push a copy of global slot `512 - address - 1`. |
| `pop`    |          | Discard the top value. |
| `add` `sub` `mul` `div` | | Arithmetic on two Numbers. |
| `and` `or` `xor` | | Bitwise on two Numbers truncated to integers. |
| `ifeq`   | target   | Pop two values, branch if equal. Both Numbers or both Strings. |
| `lt` `lte` `gt` `gte` | target | Pop two Numbers, branch if the top relates to the value under it. |
| `goto`   | target   | Branch. |
| `call`   | target, argc | Call a subroutine. See calls. |
| `ret`    |          | Return from a subroutine. |
| `print`  |          | Print the top value without popping it. |

Slots that were never written hold `nil`.

Division by zero is not an error; it gives an infinity or NaN.

## Example
```text
        const 5
        gstore 0
loop:   gfetch 0
        print
        const 1
        sub
        gstore 0
        gfetch 0
        const 0
        lt loop
        halt
```

*/
