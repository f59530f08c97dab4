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

use chrono::{DateTime,TimeDelta,TimeZone,Utc};
use serde_json::Value;
use odin_groundtrack::{
    geo::GeoPosition,
    output::render,
    GroundTrack, OutputFormat, OutputOptions, TimeWindow, TrackPoint
};

fn t0 ()->DateTime<Utc> {
    Utc.with_ymd_and_hms( 2025, 3, 17, 0, 0, 0).unwrap()
}

fn track (n: usize)->GroundTrack {
    let step = TimeDelta::minutes(1);
    let points: Vec<TrackPoint> = (0..n).map(|i| {
        let time = t0() + step * i as i32;
        let position = GeoPosition::new( -122.5 + i as f64 * 0.25, 37.0 + i as f64 * 0.125, 824_000.0);
        TrackPoint { time, position, element_index: i / 2 }
    }).collect();

    GroundTrack::new( step, TimeWindow::new( t0(), t0() + step * n as i32), points)
        .with_name( Some("NOAA 21".to_string()))
        .with_sat_num( Some(54234))
}

fn coordinates (doc: &Value)->&Vec<Value> {
    doc["features"][0]["geometry"]["coordinates"].as_array().unwrap()
}

#[test]
fn test_geojson () {
    let opts = OutputOptions::default();
    let s = render( &track(5), &opts).unwrap();
    println!("{s}");

    let doc: Value = serde_json::from_str( &s).unwrap();
    assert_eq!( doc["type"], "FeatureCollection");
    assert_eq!( doc["features"].as_array().unwrap().len(), 1);

    let feature = &doc["features"][0];
    assert_eq!( feature["geometry"]["type"], "LineString");
    assert_eq!( feature["properties"]["name"], "NOAA 21");
    assert_eq!( feature["properties"]["satNum"], 54234);
    assert_eq!( feature["properties"]["start"], "2025-03-17T00:00:00Z");
    assert_eq!( feature["properties"]["nPoints"], 5);

    let coords = coordinates( &doc);
    assert_eq!( coords.len(), 5);
    for (i,c) in coords.iter().enumerate() {
        let c = c.as_array().unwrap();
        assert_eq!( c.len(), 2);
        assert!( (c[0].as_f64().unwrap() - (-122.5 + i as f64 * 0.25)).abs() < 1e-9); // longitude first
        assert!( (c[1].as_f64().unwrap() - (37.0 + i as f64 * 0.125)).abs() < 1e-9);
    }
}

#[test]
fn test_empty_geojson () {
    let mut gt = track(0).with_name(None);
    gt.sat_num = None;
    let s = render( &gt, &OutputOptions::default()).unwrap();
    println!("{s}");

    let doc: Value = serde_json::from_str( &s).unwrap();
    assert!( coordinates( &doc).is_empty());
    assert!( doc["features"][0]["properties"]["name"].is_null());
}

#[test]
fn test_geojson_options () {
    let opts = OutputOptions { with_altitude: true, decimals: 2, name: Some("JPSS-2".to_string()), ..OutputOptions::default() };
    let s = render( &track(3), &opts).unwrap();
    assert!( s.contains("[-122.50,37.00,824000.0]"));

    let doc: Value = serde_json::from_str( &s).unwrap();
    assert_eq!( doc["features"][0]["properties"]["name"], "JPSS-2");
    assert!( coordinates( &doc).iter().all(|c| c.as_array().unwrap().len() == 3));
}

#[test]
fn test_csv () {
    let opts = OutputOptions { format: OutputFormat::Csv, decimals: 3, ..OutputOptions::default() };
    let s = render( &track(4), &opts).unwrap();
    println!("{s}");

    let lines: Vec<&str> = s.lines().collect();
    assert_eq!( lines.len(), 5);
    assert_eq!( lines[0], "time,longitude,latitude,element");
    assert_eq!( lines[1], "2025-03-17T00:00:00Z,-122.500,37.000,0");
    assert_eq!( lines[4], "2025-03-17T00:03:00Z,-121.750,37.375,1");
}

#[test]
fn test_csv_altitude () {
    let opts = OutputOptions { format: OutputFormat::Csv, with_altitude: true, decimals: 3, ..OutputOptions::default() };
    let s = render( &track(2), &opts).unwrap();
    println!("{s}");

    let lines: Vec<&str> = s.lines().collect();
    assert_eq!( lines.len(), 3);
    assert_eq!( lines[0], "time,longitude,latitude,altitude,element");
    assert_eq!( lines[2], "2025-03-17T00:01:00Z,-122.250,37.125,824000.0,0");
}
