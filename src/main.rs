fn main() {
    pyroclast_setup::run_cli();
}
