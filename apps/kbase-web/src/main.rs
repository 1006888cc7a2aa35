use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = kbase_web::Args::parse();

	kbase_web::run(args).await
}
