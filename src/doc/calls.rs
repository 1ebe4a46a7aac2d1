/*!
# Subroutines

The caller pushes the arguments, then `call target, argc`.
`call` pushes three more values: the argument count, the current frame
pointer, and the address of the `call` itself. The frame pointer is then
set to the top of that header and execution continues at `target`.

```text
  ... | arg 1 | arg 2 | argc | caller fp | call site |
                                               ^ fp
```

The subroutine leaves exactly one value on top and executes `ret`.
`ret` pops that value, unwinds the stack to the frame pointer, restores the
call site and frame pointer, discards the arguments and pushes the value
back. Execution resumes after the `call`.

Arguments are read with `fetch` at addresses counted from the far end of the
stack. With a stack of 16 slots, the first two values pushed live at
addresses 15 and 14. Addressing is absolute and ignores the frame pointer,
so a nested call reads its arguments from wherever they sit at that depth.

```text
        const 10
        const 2
        call minus, 2
        print
        halt
minus:  fetch 15
        fetch 14
        sub
        ret
```

Run with `--stacksize 16` this prints `8`.

*/
