fn main() -> anyhow::Result<()> {
    chemkit::cli::run_cli()
}
