fn main() -> eyre::Result<()> {
    bondgen::args::run()
}
