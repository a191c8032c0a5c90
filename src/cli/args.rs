use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "shopping-cart")]
#[command(about = "An interactive shopping cart manager")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Env-style configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Customer name shown in cart headers
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Date label shown in cart headers, e.g. "March 1, 2020"
    #[arg(short, long)]
    pub date: Option<String>,

    /// Start with a few sample items in the cart
    #[arg(long)]
    pub demo: bool,
}
