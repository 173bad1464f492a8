use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    Config,
    error::FetchError,
    model::{Coordinates, RefreshState},
    source::{
        DateTimeSource, WeatherSource, openmeteo::OpenMeteoSource, sources_from_config,
        timeapi::TimeApiSource,
    },
};

/// Orchestrator wired to the real HTTP services.
pub type HttpOrchestrator = RefreshOrchestrator<TimeApiSource, OpenMeteoSource>;

/// Drives both sources and owns the [`RefreshState`] the presentation layer
/// reads.
///
/// Cloning is cheap and every clone drives the same state, so a clone can be
/// moved into a spawned task while the caller keeps watching.
#[derive(Debug)]
pub struct RefreshOrchestrator<D, W> {
    inner: Arc<Inner<D, W>>,
}

#[derive(Debug)]
struct Inner<D, W> {
    datetime: D,
    weather: W,
    coordinates: Coordinates,
    state: watch::Sender<RefreshState>,
    // Only touched inside `send_modify`, so it moves in lockstep with `busy`.
    in_flight: AtomicUsize,
    initialised: AtomicBool,
}

/// One running refresh. `busy` is raised on creation and recomputed on drop,
/// whether the refresh settled or its future was dropped half way.
struct InFlight<'a> {
    state: &'a watch::Sender<RefreshState>,
    in_flight: &'a AtomicUsize,
}

impl<'a> InFlight<'a> {
    fn enter(state: &'a watch::Sender<RefreshState>, in_flight: &'a AtomicUsize) -> Self {
        state.send_modify(|state| {
            in_flight.fetch_add(1, Ordering::SeqCst);
            state.busy = true;
        });
        Self { state, in_flight }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| {
            let remaining = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
            state.busy = remaining > 0;
        });
    }
}

impl<D, W> Clone for RefreshOrchestrator<D, W> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl HttpOrchestrator {
    pub fn from_config(config: &Config) -> Self {
        let (datetime, weather) = sources_from_config(config);
        Self::new(datetime, weather, config.weather.coordinates())
    }
}

impl<D, W> RefreshOrchestrator<D, W>
where
    D: DateTimeSource,
    W: WeatherSource,
{
    pub fn new(datetime: D, weather: W, coordinates: Coordinates) -> Self {
        let (state, _) = watch::channel(RefreshState::default());

        Self {
            inner: Arc::new(Inner {
                datetime,
                weather,
                coordinates,
                state,
                in_flight: AtomicUsize::new(0),
                initialised: AtomicBool::new(false),
            }),
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.inner.coordinates
    }

    /// Copy of the current state.
    pub fn state(&self) -> RefreshState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<RefreshState> {
        self.inner.state.subscribe()
    }

    /// Fetch both sources concurrently and fold the outcomes into the state.
    ///
    /// `busy` is lowered only once both have settled and no other refresh is
    /// still running. A failure leaves the previous snapshot of that source in
    /// place.
    pub async fn refresh(&self) {
        self.begin_refresh().await
    }

    /// Raise `busy` right away and return the future that does the fetching.
    ///
    /// Dropping the returned future before it completes abandons the fetches
    /// and releases its share of `busy`.
    pub fn begin_refresh(&self) -> impl Future<Output = ()> + Send + '_ {
        let inner = &*self.inner;
        let guard = InFlight::enter(&inner.state, &inner.in_flight);
        debug!("refresh started");

        async move {
            let (date_time, weather) =
                tokio::join!(inner.datetime.fetch(), inner.weather.fetch(inner.coordinates));

            let date_time_error = date_time.as_ref().err().map(report);
            let weather_error = weather.as_ref().err().map(report);

            inner.state.send_modify(|state| {
                match date_time {
                    Ok(snapshot) => {
                        state.date_time = Some(snapshot);
                        state.date_time_error = None;
                    }
                    Err(_) => state.date_time_error = date_time_error,
                }

                match weather {
                    Ok(snapshot) => {
                        state.weather = Some(snapshot);
                        state.weather_error = None;
                    }
                    Err(_) => state.weather_error = weather_error,
                }
            });

            drop(guard);
            debug!("refresh settled");
        }
    }

    /// Initial load. Only the first call on an orchestrator (or any of its
    /// clones) refreshes; returns whether it did.
    pub async fn refresh_on_init(&self) -> bool {
        match self.begin_refresh_on_init() {
            Some(refresh) => {
                refresh.await;
                true
            }
            None => false,
        }
    }

    /// Like [`begin_refresh`](Self::begin_refresh), but `None` once the
    /// initial refresh has already been started.
    pub fn begin_refresh_on_init(&self) -> Option<impl Future<Output = ()> + Send + '_> {
        if self.inner.initialised.swap(true, Ordering::SeqCst) {
            debug!("initial refresh already ran, ignoring");
            return None;
        }

        info!(
            latitude = self.inner.coordinates.latitude,
            longitude = self.inner.coordinates.longitude,
            "running initial refresh"
        );
        Some(self.begin_refresh())
    }
}

fn report(err: &FetchError) -> String {
    warn!(source = %err.origin, "{err}");
    err.to_string()
}
