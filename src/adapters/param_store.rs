//! Parameter store adapter.
//!
//! Implements [`ParamPort`] over an opaque postcard blob, standing in for
//! the appliance's EEPROM page. The blob layout is deliberately opaque to
//! the core — parameters go in as a struct and come out as a struct, and a
//! corrupt or missing blob degrades to defaults on load.
//!
//! Validation happens here, on save, and nowhere else: the control core
//! accepts whatever values it is handed (its arithmetic is total), so this
//! adapter is the single place where a bad menu edit can be refused before
//! it reaches persistent storage.

use log::{info, warn};

use crate::app::ports::ParamPort;
use crate::config::RunParams;
use crate::error::ParamError;

/// In-memory blob store (simulation backend for the EEPROM page).
#[derive(Debug, Default)]
pub struct ParamStore {
    blob: Option<Vec<u8>>,
}

impl ParamStore {
    pub fn new() -> Self {
        info!("param store: simulation backend");
        Self { blob: None }
    }

    /// Seed the store from an existing blob (e.g. read out of the EEPROM
    /// page at boot).
    pub fn from_blob(blob: Vec<u8>) -> Self {
        Self { blob: Some(blob) }
    }

    /// The raw persisted blob, if any.
    pub fn blob(&self) -> Option<&[u8]> {
        self.blob.as_deref()
    }
}

fn validate(params: &RunParams) -> Result<(), ParamError> {
    if !(-450..=1250).contains(&params.threshold) {
        return Err(ParamError::ValidationFailed("threshold must be -450..=1250"));
    }
    if !(0..=160).contains(&params.hysteresis) {
        return Err(ParamError::ValidationFailed("hysteresis must be 0..=160"));
    }
    if params.relay_delay > 600 {
        return Err(ParamError::ValidationFailed("relay_delay must be <= 600"));
    }
    if !(1..=99).contains(&params.ferment_hours) {
        return Err(ParamError::ValidationFailed("ferment_hours must be 1..=99"));
    }
    if params.min_temperature >= params.max_temperature {
        return Err(ParamError::ValidationFailed(
            "min_temperature must be below max_temperature",
        ));
    }
    Ok(())
}

impl ParamPort for ParamStore {
    fn load(&self) -> Result<RunParams, ParamError> {
        match &self.blob {
            Some(bytes) => {
                let params: RunParams =
                    postcard::from_bytes(bytes).map_err(|_| ParamError::Corrupted)?;
                info!("param store: loaded ({} bytes)", bytes.len());
                Ok(params)
            }
            None => {
                info!("param store: nothing stored, using defaults");
                Ok(RunParams::default())
            }
        }
    }

    fn save(&mut self, params: &RunParams) -> Result<(), ParamError> {
        validate(params)?;
        let bytes = postcard::to_allocvec(params).map_err(|_| ParamError::Io)?;
        info!("param store: saved ({} bytes)", bytes.len());
        self.blob = Some(bytes);
        Ok(())
    }
}

/// Load with fallback: a corrupt blob logs and degrades to defaults
/// instead of wedging the appliance at boot.
pub fn load_or_default(store: &impl ParamPort) -> RunParams {
    match store.load() {
        Ok(params) => params,
        Err(e) => {
            warn!("param store: {}, using defaults", e);
            RunParams::default()
        }
    }
}
