use std::sync::Arc;

use tokio::sync::Mutex;

use kbase_service::KbService;

#[derive(Clone)]
pub struct AppState {
	/// Held for the whole load, search, and persist cycle of a request.
	pub service: Arc<Mutex<KbService>>,
}
impl AppState {
	pub fn new(config: kbase_config::Config) -> color_eyre::Result<Self> {
		let service = KbService::open(config)?;

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: KbService) -> Self {
		Self { service: Arc::new(Mutex::new(service)) }
	}
}
