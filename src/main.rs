fn main() {
    autocomplete::cli::main();
}
