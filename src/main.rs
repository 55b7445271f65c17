fn main() {
    slotfill::app::cli::run();
}
