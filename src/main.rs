use anyhow::Result;
use weft::cli::App;

fn main() -> Result<()> {
    let args = weft::cli::Args::parse_args();
    let app = App::new();

    app.run(args)?;

    Ok(())
}
