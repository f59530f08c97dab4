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
    define_cli, init_tracing,
    reader::{read_records_from_path,read_records_from_stdin},
    Epoch, Groundtrack, GroundtrackRequest
};

define_cli! { ARGS [about="show the TLEs that would be used for a ground track, with their hand-off times"] =
    start: String [help="start datetime (\"2025-03-17 00:00:00\" UTC or RFC 3339)", short, long],
    end: String [help="end datetime (\"2025-03-18 00:00:00\" UTC or RFC 3339)", short, long],
    file: Option<String> [help="TLE file to read (stdin if not set)", short, long],
    verbose: bool [help="report skipped records on stderr", short, long]
}

fn main ()->Result<()> {
    init_tracing( ARGS.verbose);

    let request = GroundtrackRequest::from_specs( &ARGS.start, &ARGS.end, 1)?;
    let records = match &ARGS.file {
        Some(path) => read_records_from_path( path)?,
        None => read_records_from_stdin()?
    };

    let groundtrack = Groundtrack::new( request, records, ARGS.verbose);
    let transitions = groundtrack.transitions();

    println!("requested window: {}", request.window);
    println!("effective window: {}", groundtrack.effective_window());
    println!("{} elements admitted, {} rejected, {} outside of window", 
        groundtrack.elements().len(), groundtrack.n_rejected(), groundtrack.n_outside());

    for (i,(e,t)) in groundtrack.elements().iter().zip( transitions.iter()).enumerate() {
        let kind = if i + 1 < transitions.len() { "hand-off" } else { "terminal" };
        println!("[{:3}] {:5} {}  {:8} {}", i, e.sat_num(), e.epoch().format("%Y-%m-%dT%H:%M:%S%.3fZ"), kind, t.format("%Y-%m-%dT%H:%M:%SZ"));
    }

    Ok(())
}
