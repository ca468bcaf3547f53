fn main() -> anyhow::Result<()> {
    openapi_paths::cli::run_cli()
}
