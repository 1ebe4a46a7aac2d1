/*!
# The Assembly Language

A program is plain text with one instruction, label, or comment per line.
Lines beginning with `#` are comments. Blank lines are ignored.

```text
# add two numbers
const 10
const 20
add
print
halt
```

An instruction is a mnemonic followed by its operands, separated by
whitespace. Commas between operands are allowed and ignored.
Mnemonics are not case sensitive.

## Operands

 * `nil` is the Nil value.
 * Text in double quotes is a String. Quotes may enclose spaces.
   There are no escape sequences.
 * A decimal literal such as `10`, `-2` or `0.5` is a Number.
 * A label name is replaced with the address of the instruction it labels.

Anything else is an assembly error.

## Labels

A label is a name followed by a colon. It names the address of the next
instruction, whether that instruction is on the same line or a later one.
Labels may be used before they are declared.

```text
        const 0
top:    const 1
        add
        goto top
```

Instruction addresses count instructions, not lines or bytes.
In the example above `top` is address 1.

## Errors

Errors are reported as a kind and a message.

```text
CodeError: unknown instruction 'jmp' in line 4 (8..11)
StackError: cannot pop because stack is empty at 0002
ValueError: cannot add String value with Number value at 0007
```

 * `StackError` is a push to a full stack, a pop from an empty one,
   or an address outside the stack.
 * `ValueError` is an operand of the wrong kind.
 * `CodeError` is malformed source or a malformed program.

*/
