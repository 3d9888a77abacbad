fn main() {
    seed_issues::app::cli::run();
}
