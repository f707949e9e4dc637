use roomkit::init_logging;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    roomkit::cli::run_from_env()
}
