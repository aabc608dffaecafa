fn main() -> anyhow::Result<()> {
    flagicon_gen::cli::run_cli()
}
