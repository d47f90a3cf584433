fn main() {
    crudgen::app::cli::run();
}
