fn main() {
    restaurant_api::main();
}
