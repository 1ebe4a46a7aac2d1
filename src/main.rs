fn main() {
    runvm::term::main();
}
