fn main() {
    accordion_clock::app::run_app();
}
