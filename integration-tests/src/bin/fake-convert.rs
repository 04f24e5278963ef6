fn main() {
    integration_tests::fake_convert_main();
}
