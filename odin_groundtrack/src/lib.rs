/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! generate satellite ground tracks from a chronological series of TLEs.
//! The library takes element records (files or piped text), selects the ones that are relevant for a requested
//! time window, propagates positions at fixed time steps while handing off between consecutive elements at their
//! epoch midpoints, and renders the resulting trajectory as a GeoJSON LineString (or CSV).

use std::path::Path;
use chrono::{DateTime,NaiveDateTime,TimeDelta,Utc};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

pub mod errors;
use errors::{config_error,OdinGroundtrackError,Result};

pub mod macros;
pub mod window;
pub mod element;
pub mod reader;
pub mod admission;
pub mod sequence;
pub mod schedule;
pub mod geo;
pub mod propagator;
pub mod track;
pub mod simulator;
pub mod json_writer;
pub mod output;
pub mod config;
pub mod groundtrack;

pub use window::TimeWindow;
pub use element::{Element,RejectedRecord,ParsedRecord};
pub use sequence::ElementSequence;
pub use propagator::{Propagator,Sgp4Propagator};
pub use track::{GroundTrack,TrackPoint};
pub use output::{OutputFormat,OutputOptions};
pub use config::{GroundtrackConfig,GroundtrackRequest};
pub use groundtrack::Groundtrack;

/// the outer bound of trustworthy propagation from a single element. This is used both to admit elements
/// around the requested window and to clamp the end of the simulated window past the last element
pub const MAX_TERMINAL_PROPAGATION: TimeDelta = TimeDelta::days(7);

/// something that has an epoch. This is all the ground track core needs to know about elements
pub trait Epoch {
    fn epoch (&self)->DateTime<Utc>;
}

impl<T: Epoch> Epoch for &T {
    fn epoch (&self)->DateTime<Utc> { (*self).epoch() }
}

impl Epoch for DateTime<Utc> {
    fn epoch (&self)->DateTime<Utc> { *self }
}

/// parse a datetime spec from the command line. We accept RFC 3339 ("2025-03-17T06:00:00Z") and the
/// naive forms "2025-03-17 06:00:00" and "2025-03-17T06:00:00", which are interpreted as UTC
pub fn parse_datetime_spec (spec: &str)->Result<DateTime<Utc>> {
    let s = spec.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok( dt.to_utc() )
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok( ndt.and_utc() )
        }
    }

    Err( config_error!("invalid datetime spec '{}'", spec) )
}

/// load a RON config file. Syntax and type errors are reported as `RonError` with their position
pub fn load_config<C,P> (path: P)->Result<C> where C: for<'a> Deserialize<'a>, P: AsRef<Path> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)?;
    Ok( ron::from_str(&data)? )
}

/// install a stderr fmt subscriber (stdout is reserved for the generated document).
/// Levels are taken from RUST_LOG unless `verbose` is set, in which case we log at debug level.
/// Note this does nothing if there already is a global subscriber
pub fn init_tracing (verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter( filter)
        .with_writer( std::io::stderr)
        .try_init();
}
