fn main() {
    steaminfo::app::cli::run();
}
