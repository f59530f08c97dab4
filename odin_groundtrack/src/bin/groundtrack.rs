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

use anyhow::Result;
use odin_groundtrack::{
    define_cli, init_tracing, load_config,
    reader::{read_records_from_path,read_records_from_stdin},
    Groundtrack, GroundtrackConfig, GroundtrackRequest, OutputFormat
};

define_cli! { ARGS [about="generate a satellite ground track from TLEs read from a file or stdin"] =
    start: String [help="start datetime (\"2025-03-17 00:00:00\" UTC or RFC 3339)", short, long],
    end: String [help="end datetime (\"2025-03-18 00:00:00\" UTC or RFC 3339)", short, long],
    time_step: Option<i64> [help="seconds between track points (default 60)", short='t', long],
    file: Option<String> [help="TLE file to read (stdin if not set)", short, long],
    format: Option<OutputFormat> [help="output format", long],
    altitude: bool [help="include altitude in coordinates", long],
    decimals: Option<usize> [help="decimals of longitude/latitude degrees", long],
    name: Option<String> [help="name of the track (default is the TLE object name)", long],
    config: Option<String> [help="RON config file", long],
    verbose: bool [help="report skipped records and element transitions on stderr", short, long]
}

fn main ()->Result<()> {
    init_tracing( ARGS.verbose);

    let mut config: GroundtrackConfig = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => GroundtrackConfig::default()
    };
    if let Some(secs) = ARGS.time_step { config.time_step_secs = secs }
    if let Some(format) = ARGS.format { config.format = format }
    if let Some(decimals) = ARGS.decimals { config.decimals = decimals }
    if ARGS.altitude { config.with_altitude = true }
    if ARGS.name.is_some() { config.name = ARGS.name.clone() }

    // invalid requests fail before we read any input
    let request = GroundtrackRequest::from_specs( &ARGS.start, &ARGS.end, config.time_step_secs)?;

    let records = match &ARGS.file {
        Some(path) => read_records_from_path( path)?,
        None => read_records_from_stdin()?
    };

    let groundtrack = Groundtrack::new( request, records, ARGS.verbose);
    let doc = groundtrack.generate_document( &config.output_options())?;
    println!("{doc}");

    Ok(())
}
