use std::env;

use aromi_menu::MenuConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = MenuConfig::load()?;
    let output = env::args().nth(1).unwrap_or_else(|| config.output.clone());

    println!("Fetching {} ...", config.menu_url());
    let days = aromi_menu::generate(&config, &output).await?;
    println!("Generated {} ({} days found)", output, days);

    Ok(())
}
