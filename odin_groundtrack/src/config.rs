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

use chrono::{DateTime,TimeDelta,Utc};
use serde::{Serialize,Deserialize};
use crate::{
    errors::{config_error,OdinGroundtrackError,Result},
    output::{OutputFormat,OutputOptions},
    parse_datetime_spec, TimeWindow
};

/// default seconds between track points
pub const DEFAULT_TIME_STEP_SECS: i64 = 60;

/// user configurable settings, normally loaded from a RON file such as
/// ```ron
/// GroundtrackConfig(
///     time_step_secs: 30,
///     format: GeoJson,
///     with_altitude: true,
///     decimals: 5,
///     name: Some("NOAA 21"),
/// )
/// ```
/// Missing fields get their default values. Command line arguments take precedence
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct GroundtrackConfig {
    pub time_step_secs: i64,
    pub format: OutputFormat,
    pub with_altitude: bool,
    pub decimals: usize,
    pub name: Option<String>,
}

impl Default for GroundtrackConfig {
    fn default ()->Self {
        GroundtrackConfig {
            time_step_secs: DEFAULT_TIME_STEP_SECS,
            format: OutputFormat::GeoJson,
            with_altitude: false,
            decimals: 6,
            name: None
        }
    }
}

impl GroundtrackConfig {
    pub fn output_options (&self)->OutputOptions {
        OutputOptions {
            format: self.format,
            with_altitude: self.with_altitude,
            decimals: self.decimals,
            name: self.name.clone()
        }
    }
}

/// a validated ground track request: a non-inverted time window and a positive time step
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GroundtrackRequest {
    pub window: TimeWindow,
    pub time_step: TimeDelta,
}

impl GroundtrackRequest {
    pub fn new (start: DateTime<Utc>, end: DateTime<Utc>, time_step: TimeDelta)->Result<Self> {
        if time_step <= TimeDelta::zero() {
            return Err( config_error!("time step has to be positive (got {} s)", time_step.num_seconds()))
        }
        if end < start {
            return Err( config_error!("end {} precedes start {}", end, start))
        }
        Ok( GroundtrackRequest { window: TimeWindow::new( start, end), time_step } )
    }

    /// create a request from command line specs
    pub fn from_specs (start: &str, end: &str, time_step_secs: i64)->Result<Self> {
        let start = parse_datetime_spec(start)?;
        let end = parse_datetime_spec(end)?;
        if time_step_secs <= 0 {
            return Err( config_error!("time step has to be positive (got {} s)", time_step_secs))
        }
        let time_step = TimeDelta::try_seconds( time_step_secs).ok_or_else(|| config_error!("time step out of range: {time_step_secs}"))?;

        Self::new( start, end, time_step)
    }
}
