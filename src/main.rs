use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    mood_diary::cli::run()
}
