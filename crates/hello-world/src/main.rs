use color_eyre::Report;
use tracing::instrument;

#[instrument]
fn main() -> Result<(), Report> {
    hello_world::logging::install()?;
    hello_world::main()?;
    Ok(())
}
