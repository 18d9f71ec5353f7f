fn main() {
    sf_cli::app::cli::run();
}
