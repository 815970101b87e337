use crate::{
    Config,
    dayinfo::DayInfoClient,
    error::Error,
    geocode::GeocodeClient,
    location::{DevicePosition, LocationResolver},
    model::LocationIntent,
    present::{DisplayModel, present},
};

/// The rendering boundary.
///
/// The orchestrator produces values and calls into this trait; it never
/// reaches into shared display state itself. `loading_finished` is called
/// exactly once per run, on every exit path.
pub trait Renderer {
    fn loading_started(&mut self);
    fn loading_finished(&mut self);
    fn render(&mut self, model: &DisplayModel);
    fn alert(&mut self, error: &Error);
}

/// The resolve → fetch → present pipeline.
///
/// Strictly sequential: the resolver fully completes before the day-info
/// client starts, and within the client the second request waits on the
/// first. Known limitation: no explicit timeout, so a hung upstream call
/// hangs the whole run.
#[derive(Debug)]
pub struct SunTimesService {
    resolver: LocationResolver,
    day_info: DayInfoClient,
}

impl SunTimesService {
    pub fn new(resolver: LocationResolver, day_info: DayInfoClient) -> Self {
        Self { resolver, day_info }
    }

    /// Wire up clients from config, with the given device-position backend.
    pub fn from_config(config: &Config, device: Box<dyn DevicePosition>) -> Self {
        let resolver =
            LocationResolver::new(GeocodeClient::new(config.geocoding_url.clone()), device);
        let day_info = DayInfoClient::new(config.day_info_url.clone());

        Self::new(resolver, day_info)
    }

    /// Run the pipeline and return the fused model, or the first error.
    pub async fn lookup(&self, intent: &LocationIntent) -> Result<DisplayModel, Error> {
        let coords = self.resolver.resolve(intent).await?;
        tracing::info!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            "location resolved"
        );

        let (today, tomorrow) = self.day_info.fetch_two_days(coords).await?;

        Ok(present(coords, today, tomorrow))
    }

    /// Run the pipeline against a renderer.
    ///
    /// The loading indicator is started before any I/O and finished exactly
    /// once whether the lookup succeeded or failed; errors are logged and
    /// surfaced as an alert, never rendered as a partial model.
    pub async fn run(&self, intent: &LocationIntent, renderer: &mut dyn Renderer) {
        renderer.loading_started();
        let result = self.lookup(intent).await;
        renderer.loading_finished();

        match result {
            Ok(model) => renderer.render(&model),
            Err(error) => {
                tracing::error!(%error, "lookup failed");
                renderer.alert(&error);
            }
        }
    }
}
