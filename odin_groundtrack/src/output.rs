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

//! rendering of ground tracks. Serializers only see the inert [`GroundTrack`], they don't know anything
//! about elements or propagation

use std::fmt;
use chrono::{DateTime,SecondsFormat,Utc};
use serde::{Serialize,Deserialize};
use crate::{
    errors::{op_failed,OdinGroundtrackError,Result},
    json_writer::JsonWriter,
    track::GroundTrack
};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize,clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(name="geojson")]
    GeoJson,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            OutputFormat::GeoJson => write!(f, "geojson"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub with_altitude: bool,   // emit [lon,lat,alt] instead of [lon,lat]
    pub decimals: usize,       // of longitude and latitude degrees
    pub name: Option<String>,  // overrides the name of the track
}

impl Default for OutputOptions {
    fn default ()->Self {
        OutputOptions { format: OutputFormat::GeoJson, with_altitude: false, decimals: 6, name: None }
    }
}

const ALTITUDE_DECIMALS: usize = 1;

pub fn render (track: &GroundTrack, opts: &OutputOptions)->Result<String> {
    match opts.format {
        OutputFormat::GeoJson => Ok( to_geojson( track, opts) ),
        OutputFormat::Csv => to_csv( track, opts)
    }
}

/// a FeatureCollection with a single LineString feature that holds all track points in chronological order.
/// An empty track produces a valid document with an empty coordinate list
pub fn to_geojson (track: &GroundTrack, opts: &OutputOptions)->String {
    let mut w = JsonWriter::with_capacity( 256 + track.len() * 32);
    let name = opts.name.as_deref().or( track.name.as_deref());

    w.write_object( |w| {
        w.write_str_field( "type", "FeatureCollection");
        w.write_array_field( "features", |w| {
            w.write_object( |w| {
                w.write_str_field( "type", "Feature");
                w.write_object_field( "properties", |w| {
                    match name {
                        Some(name) => w.write_str_field( "name", name),
                        None => w.write_null_field( "name")
                    }
                    match track.sat_num {
                        Some(sat_num) => w.write_num_field( "satNum", sat_num),
                        None => w.write_null_field( "satNum")
                    }
                    w.write_str_field( "start", &timestamp( &track.window.start));
                    w.write_str_field( "end", &timestamp( &track.window.end));
                    w.write_f64_field( "timeStep", track.time_step.num_milliseconds() as f64 / 1000.0, 3);
                    w.write_num_field( "nPoints", track.len());
                });
                w.write_object_field( "geometry", |w| {
                    w.write_str_field( "type", "LineString");
                    w.write_array_field( "coordinates", |w| {
                        for p in track.iter() {
                            let pos = &p.position;
                            w.write_array( |w| {
                                w.write_f64( pos.longitude_deg, opts.decimals);
                                w.write_f64( pos.latitude_deg, opts.decimals);
                                if opts.with_altitude {
                                    w.write_f64( pos.altitude_m, ALTITUDE_DECIMALS);
                                }
                            });
                        }
                    });
                });
            });
        });
    });

    w.into()
}

/// one row per track point: time, longitude, latitude, altitude (if requested) and element index
pub fn to_csv (track: &GroundTrack, opts: &OutputOptions)->Result<String> {
    let mut wtr = csv::Writer::from_writer( Vec::with_capacity( 64 + track.len() * 64));

    if opts.with_altitude {
        wtr.write_record( ["time", "longitude", "latitude", "altitude", "element"])?;
    } else {
        wtr.write_record( ["time", "longitude", "latitude", "element"])?;
    }

    let d = opts.decimals;
    let ad = ALTITUDE_DECIMALS;
    for p in track.iter() {
        let pos = &p.position;
        let time = timestamp( &p.time);
        let lon = format!("{:.d$}", pos.longitude_deg);
        let lat = format!("{:.d$}", pos.latitude_deg);
        let idx = p.element_index.to_string();

        if opts.with_altitude {
            let alt = format!("{:.ad$}", pos.altitude_m);
            wtr.write_record( [time, lon, lat, alt, idx])?;
        } else {
            wtr.write_record( [time, lon, lat, idx])?;
        }
    }

    let bytes = wtr.into_inner().map_err(|e| op_failed!("failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).map_err(|e| op_failed!("invalid CSV output: {e}"))
}

fn timestamp (t: &DateTime<Utc>)->String {
    t.to_rfc3339_opts( SecondsFormat::Secs, true)
}
